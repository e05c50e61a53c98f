use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::AUTHOR;
use crate::icons::Icon;
use crate::messages::HeroKey;

use super::icon::LineIcon;
use super::PageContext;

#[component]
pub fn HeroSection(ctx: PageContext) -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center px-4 pt-16">
            <div class="container mx-auto max-w-5xl">
                <div class="text-center space-y-8 animate-fade-up">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-primary/20 bg-primary/5">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-primary opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-primary"></span>
                        </span>
                        <span class="text-sm font-medium">{ctx.t(HeroKey::Badge)}</span>
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold tracking-tight">
                        {ctx.t(HeroKey::Greeting)}
                        " "
                        <span class="bg-gradient-to-r from-primary via-primary/80 to-primary/60 bg-clip-text text-transparent">
                            {AUTHOR}
                        </span>
                    </h1>
                    <p class="text-xl md:text-2xl text-muted-foreground font-medium">
                        {ctx.t(HeroKey::Title)}
                    </p>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto leading-relaxed">
                        {ctx.t(HeroKey::Description)}
                    </p>

                    <div class="flex justify-center pt-4">
                        <A
                            href=ctx.href("/contact")
                            attr:class="group inline-flex items-center rounded-md bg-primary px-6 py-3 text-primary-foreground font-medium hover:bg-primary/90 transition-colors"
                        >
                            {ctx.t(HeroKey::ContactButton)}
                            <LineIcon
                                icon=Icon::ArrowRight
                                class="ml-2 h-4 w-4 transition-transform group-hover:translate-x-1"
                            />
                        </A>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 rounded-full border-2 border-primary/30 flex items-start justify-center p-2">
                    <div class="w-1 h-2 rounded-full bg-primary"></div>
                </div>
            </div>
        </section>
    }
}
