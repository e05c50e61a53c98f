use leptos::prelude::*;

use crate::content::{project_cards, ProjectCard};
use crate::icons::Icon;
use crate::messages::ProjectsKey;

use super::homepage::SectionHeading;
use super::icon::LineIcon;
use super::PageContext;

#[component]
pub fn ProjectsSection(ctx: PageContext) -> impl IntoView {
    let cards = project_cards(&ctx.messages);

    view! {
        <section id="projects" class="py-24 px-4 bg-muted/30 scroll-mt-16">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    title=ctx.t(ProjectsKey::Title)
                    highlight=ctx.t(ProjectsKey::TitleHighlight)
                    description=ctx.t(ProjectsKey::Description)
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| view! { <ProjectTile card index ctx=ctx.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectTile(card: ProjectCard, index: usize, ctx: PageContext) -> impl IntoView {
    let toggle = RwSignal::new(card.description_toggle());
    let messages = ctx.messages.clone();
    let code = ctx.t(ProjectsKey::Code);
    let demo = ctx.t(ProjectsKey::Demo);

    let control = toggle.get_untracked().shows_control().then(|| {
        view! {
            <button
                type="button"
                class="mt-2 text-sm font-medium text-primary hover:underline"
                on:click=move |_| toggle.update(|t| *t = t.toggled())
            >
                {move || messages.text(toggle.get().control_label())}
            </button>
        }
    });

    view! {
        <div
            class="group relative overflow-hidden rounded-lg border border-border bg-card transition-all duration-300 hover:-translate-y-1 hover:shadow-xl animate-fade-up"
            style=format!("animation-delay: {}ms", index * 100)
        >
            <div class="relative h-48 overflow-hidden bg-muted">
                <div
                    class="absolute inset-0 bg-cover bg-center transition-transform duration-500 group-hover:scale-110"
                    style=format!("background-image: url({})", card.image)
                ></div>
                <div class="absolute inset-0 bg-gradient-to-t from-card/90 to-transparent"></div>
            </div>

            <div class="p-6 space-y-4">
                <h3 class="text-2xl font-bold group-hover:text-primary transition-colors">
                    {card.title}
                </h3>
                <div>
                    <p class=move || {
                        if toggle.get().is_clamped() {
                            "text-muted-foreground leading-relaxed line-clamp-3"
                        } else {
                            "text-muted-foreground leading-relaxed"
                        }
                    }>{card.description}</p>
                    {control}
                </div>

                <div class="flex flex-wrap gap-2">
                    {card
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-md bg-secondary px-2.5 py-0.5 text-xs font-semibold">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-3 pt-2">
                    {card
                        .source
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 inline-flex items-center justify-center rounded-md border border-border px-3 py-2 text-sm hover:bg-accent"
                                >
                                    <LineIcon icon=Icon::Github class="mr-2 h-4 w-4" />
                                    {code}
                                </a>
                            }
                        })}
                    {card
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 inline-flex items-center justify-center rounded-md bg-primary px-3 py-2 text-sm text-primary-foreground hover:bg-primary/90"
                                >
                                    <LineIcon icon=Icon::ExternalLink class="mr-2 h-4 w-4" />
                                    {demo}
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
