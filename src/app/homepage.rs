use leptos::prelude::*;
use leptos_meta::Title;

use crate::messages::HeroKey;

use super::hero::HeroSection;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use super::PageContext;

#[component]
pub fn HomePage(ctx: PageContext) -> impl IntoView {
    view! {
        <Title text=ctx.t(HeroKey::Title) />
        <main>
            <HeroSection ctx=ctx.clone() />
            <SkillsSection ctx=ctx.clone() />
            <ProjectsSection ctx />
        </main>
    }
}

/// Section title with its highlighted tail and a lead paragraph.
#[component]
pub fn SectionHeading(
    title: String,
    highlight: String,
    description: String,
    #[prop(optional)] page_title: bool,
) -> impl IntoView {
    let heading = view! {
        {title}
        " "
        <span class="bg-gradient-to-r from-primary to-primary/60 bg-clip-text text-transparent">
            {highlight}
        </span>
    };
    view! {
        <div class="text-center mb-16 space-y-4 animate-fade-up">
            {if page_title {
                view! { <h1 class="text-4xl md:text-6xl font-bold">{heading}</h1> }.into_any()
            } else {
                view! { <h2 class="text-4xl md:text-5xl font-bold">{heading}</h2> }.into_any()
            }}
            <p class="text-lg text-muted-foreground max-w-2xl mx-auto">{description}</p>
        </div>
    }
}
