use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{copyright_line, AUTHOR, FOOTER_NAV, SOCIAL_LINKS};
use crate::icons::Icon;
use crate::messages::FooterKey;

use super::icon::{ContentIcon, LineIcon};
use super::PageContext;

#[component]
pub fn Footer(ctx: PageContext) -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-border/40 bg-background/80 backdrop-blur-lg">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <A href=ctx.href("/") attr:class="flex items-center gap-2 w-fit">
                            <LineIcon icon=Icon::Code class="h-6 w-6 text-primary" />
                            <span class="text-lg font-bold">{AUTHOR}</span>
                        </A>
                        <p class="text-sm text-muted-foreground">{ctx.t(FooterKey::Description)}</p>
                    </div>

                    <div class="space-y-4">
                        <h3 class="font-semibold">{ctx.t(FooterKey::Navigation)}</h3>
                        <ul class="space-y-2">
                            {FOOTER_NAV
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <A
                                                href=ctx.href(link.path)
                                                attr:class="text-sm text-muted-foreground hover:text-primary transition-colors"
                                            >
                                                {ctx.t(link.label)}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <h3 class="font-semibold">{ctx.t(FooterKey::Connect)}</h3>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class="p-2 rounded-lg bg-muted hover:bg-primary hover:text-primary-foreground transition-all duration-300 hover:scale-110"
                                        >
                                            <ContentIcon icon=social.icon class="h-5 w-5 text-xl" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-border/40 text-center">
                    <p class="text-sm text-muted-foreground">{copyright_line(&ctx.messages, year)}</p>
                </div>
            </div>
        </footer>
    }
}
