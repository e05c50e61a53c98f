use leptos::prelude::*;

use crate::content::BACKDROP_CIRCLES;

#[component]
pub fn AnimatedBackdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-background"></div>
            {BACKDROP_CIRCLES
                .iter()
                .map(|c| {
                    let class = if c.filled {
                        "absolute rounded-full animate-float bg-primary/10"
                    } else {
                        "absolute rounded-full animate-float border-2 border-primary/20"
                    };
                    let style = format!(
                        "width: {0}px; height: {0}px; left: {1}; top: {2}; animation-delay: {3}s",
                        c.size,
                        c.x,
                        c.y,
                        c.delay,
                    );
                    view! { <div class=class style=style></div> }
                })
                .collect_view()}
        </div>
    }
}
