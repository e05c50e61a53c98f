use leptos::prelude::*;

use crate::content::{Skill, SkillCategory};
use crate::messages::SkillsKey;

use super::homepage::SectionHeading;
use super::icon::ContentIcon;
use super::PageContext;

#[component]
pub fn SkillsSection(ctx: PageContext) -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::default());

    view! {
        <section id="skills" class="py-24 px-4 scroll-mt-16">
            <div class="container mx-auto max-w-6xl">
                <SectionHeading
                    title=ctx.t(SkillsKey::Title)
                    highlight=ctx.t(SkillsKey::TitleHighlight)
                    description=ctx.t(SkillsKey::Description)
                />

                <div
                    role="tablist"
                    class="grid w-full max-w-2xl mx-auto grid-cols-3 mb-12 rounded-lg bg-muted p-1"
                >
                    {SkillCategory::all()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    aria-selected=move || (active.get() == category).to_string()
                                    class=move || {
                                        if active.get() == category {
                                            "rounded-md px-3 py-1.5 text-sm font-medium bg-background shadow-sm"
                                        } else {
                                            "rounded-md px-3 py-1.5 text-sm font-medium text-muted-foreground"
                                        }
                                    }
                                    on:click=move |_| set_active(category)
                                >
                                    {ctx.t(SkillsKey::Category(category))}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {SkillCategory::all()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <div
                                role="tabpanel"
                                class=move || {
                                    if active.get() == category {
                                        "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6"
                                    } else {
                                        "hidden"
                                    }
                                }
                            >
                                {category
                                    .skills()
                                    .iter()
                                    .enumerate()
                                    .map(|(index, skill)| view! { <SkillCard skill=*skill index /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill, index: usize) -> impl IntoView {
    view! {
        <div
            class="group rounded-lg border border-border bg-card p-6 flex flex-col items-center gap-4 transition-all duration-300 hover:-translate-y-1 hover:shadow-lg hover:border-primary/50 animate-fade-up"
            style=format!("animation-delay: {}ms", index * 50)
        >
            <div class="w-16 h-16 rounded-lg bg-muted flex items-center justify-center transition-transform duration-300 group-hover:scale-110">
                <ContentIcon icon=skill.icon class="text-4xl" color=skill.accent />
            </div>
            <h3 class="font-semibold text-center">{skill.name}</h3>
        </div>
    }
}
