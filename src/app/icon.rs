use leptos::{either::Either, prelude::*};

use crate::icons::{Icon, IconRef};

#[component]
pub fn LineIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

/// Renders either kind of content icon. `color` only applies to devicon
/// glyphs, line icons take the current text color.
#[component]
pub fn ContentIcon(
    icon: IconRef,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] color: &'static str,
) -> impl IntoView {
    match icon {
        IconRef::Line(icon) => Either::Left(view! { <LineIcon icon class /> }),
        IconRef::Devicon(name) => {
            let style = (!color.is_empty()).then(|| format!("color: {color}"));
            Either::Right(view! { <i class=format!("{name} {class}") style=style aria-hidden="true"></i> })
        }
    }
}
