use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{contact_cards, ContactCard};
use crate::icons::Icon;
use crate::messages::{ContactKey, HeaderKey, PreferencesField};

use super::homepage::SectionHeading;
use super::icon::{ContentIcon, LineIcon};
use super::PageContext;

#[component]
pub fn ContactPage(ctx: PageContext) -> impl IntoView {
    let cards = contact_cards(&ctx.messages);
    let preference = |field| ctx.t(ContactKey::Preferences(field));

    view! {
        <Title text=ctx.t(HeaderKey::Contact) />
        <main class="min-h-screen pt-32 pb-24 px-4">
            <div class="container mx-auto max-w-4xl">
                <SectionHeading
                    title=ctx.t(ContactKey::Title)
                    highlight=ctx.t(ContactKey::TitleHighlight)
                    description=ctx.t(ContactKey::Description)
                    page_title=true
                />

                <div class="grid md:grid-cols-2 gap-6 mb-12">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ContactMethodCard card index /> })
                        .collect_view()}
                </div>

                <div class="rounded-lg border border-border bg-muted/50 p-6 animate-fade-up">
                    <div class="flex items-start gap-4">
                        <div class="p-3 rounded-lg bg-primary/10">
                            <LineIcon icon=Icon::MessageSquare class="h-6 w-6 text-primary" />
                        </div>
                        <div class="space-y-2">
                            <h3 class="font-semibold">{preference(PreferencesField::Title)}</h3>
                            <p class="text-sm text-muted-foreground">
                                {preference(PreferencesField::Description)}
                            </p>
                            <p class="text-sm text-muted-foreground">
                                {preference(PreferencesField::ResponseTime)}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}

#[component]
fn ContactMethodCard(card: ContactCard, index: usize) -> impl IntoView {
    view! {
        <div
            class="group rounded-lg border border-border bg-card p-6 flex flex-col gap-4 transition-all duration-300 hover:-translate-y-1 hover:shadow-xl animate-fade-up"
            style=format!("animation-delay: {}ms", index * 100)
            data-contact=card.id.catalog_key()
        >
            <div class="flex items-center gap-4">
                <div class=format!(
                    "p-3 rounded-lg bg-muted transition-transform duration-300 group-hover:scale-110 {}",
                    card.accent,
                )>
                    <ContentIcon icon=card.icon class="h-6 w-6" />
                </div>
                <div>
                    <h3 class="text-xl font-semibold">{card.title}</h3>
                    <p class="text-sm text-muted-foreground">{card.description}</p>
                </div>
            </div>
            <p class="font-mono text-sm text-muted-foreground break-all">{card.value}</p>
            <a
                href=card.href
                target="_blank"
                rel="noopener noreferrer"
                class="group/btn inline-flex items-center justify-center rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground hover:bg-primary/90"
            >
                {card.action}
                <LineIcon
                    icon=Icon::ExternalLink
                    class="ml-2 h-4 w-4 transition-transform group-hover/btn:translate-x-1"
                />
            </a>
        </div>
    }
}
