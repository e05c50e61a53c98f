use std::sync::Arc;

use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
    NavigateOptions,
};
use wasm_bindgen::JsCast;

use crate::content::{NavLink, ABOUT_MENU, AUTHOR, PROJECTS_MENU};
use crate::icons::Icon;
use crate::locale::{switch_locale_path, Locale};
use crate::messages::HeaderKey;
use crate::theme::{RevealOrigin, Theme, ThemeSwitch};

use super::icon::LineIcon;
use super::PageContext;

const NAV_LINK_CLASS: &str =
    "flex items-center gap-1.5 text-sm font-medium text-muted-foreground hover:text-primary transition-colors";
const MENU_CLASS: &str =
    "absolute right-0 top-full mt-2 min-w-44 rounded-md border border-border bg-popover p-1 shadow-lg";
const MENU_ITEM_CLASS: &str =
    "flex w-full items-center gap-2 rounded-sm px-3 py-2 text-sm hover:bg-accent hover:text-accent-foreground";

#[component]
pub fn Header(ctx: PageContext) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 border-b border-border/40 bg-background/80 backdrop-blur-lg animate-slide-down">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <A href=ctx.href("/") attr:class="group flex items-center gap-2">
                    <span class="transition-transform duration-500 group-hover:rotate-[360deg]">
                        <LineIcon icon=Icon::Code class="h-6 w-6 text-primary" />
                    </span>
                    <span class="text-lg font-bold">{AUTHOR}</span>
                </A>

                <nav class="hidden md:flex items-center gap-6">
                    <A href=ctx.href("/") attr:class=NAV_LINK_CLASS>
                        <LineIcon icon=Icon::Home class="h-4 w-4" />
                        {ctx.t(HeaderKey::Home)}
                    </A>
                    <NavMenu ctx=ctx.clone() icon=Icon::User label=HeaderKey::About items=ABOUT_MENU />
                    <NavMenu
                        ctx=ctx.clone()
                        icon=Icon::Briefcase
                        label=HeaderKey::Projects
                        items=PROJECTS_MENU
                    />
                    <A
                        href=ctx.href("/contact")
                        attr:class="flex items-center gap-1.5 rounded-md bg-primary px-4 py-2 text-sm font-medium text-primary-foreground hover:bg-primary/90"
                    >
                        <LineIcon icon=Icon::Mail class="h-4 w-4" />
                        {ctx.t(HeaderKey::Contact)}
                    </A>
                </nav>

                <div class="flex items-center gap-2">
                    <LanguageSwitcher locale=ctx.locale />
                    <ThemeToggle theme=ctx.theme switcher=ctx.switcher.clone() />
                </div>
            </div>
        </header>
    }
}

/// Dropdown of in-page links.
#[component]
fn NavMenu(
    ctx: PageContext,
    icon: Icon,
    label: HeaderKey,
    items: &'static [NavLink],
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="relative" on:mouseleave=move |_| set_open(false)>
            <button
                type="button"
                class=NAV_LINK_CLASS
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <LineIcon icon class="h-4 w-4" />
                {ctx.t(label)}
                <LineIcon icon=Icon::ChevronDown class="h-3 w-3" />
            </button>
            <div
                role="menu"
                class=move || if open.get() { MENU_CLASS.to_string() } else { format!("{MENU_CLASS} hidden") }
            >
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=ctx.href(item.path)
                                role="menuitem"
                                class=MENU_ITEM_CLASS
                                on:click=move |_| set_open(false)
                            >
                                {ctx.t(item.label)}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Lists every locale; picking one swaps the locale segment of the current
/// path in place.
#[component]
fn LanguageSwitcher(locale: Locale) -> impl IntoView {
    let (open, set_open) = signal(false);
    let location = use_location();
    let navigate = use_navigate();

    let change_language = move |target: Locale| {
        set_open(false);
        if target == locale {
            return;
        }
        let path = switch_locale_path(&location.pathname.get_untracked(), target);
        log::debug!("switching locale {locale} -> {target}: {path}");
        navigate(
            &path,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    };

    view! {
        <div class="relative" on:mouseleave=move |_| set_open(false)>
            <button
                type="button"
                class="inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent"
                aria-label="Change language"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <LineIcon icon=Icon::Languages class="h-5 w-5" />
            </button>
            <div
                role="menu"
                class=move || if open.get() { MENU_CLASS.to_string() } else { format!("{MENU_CLASS} hidden") }
            >
                {Locale::all()
                    .into_iter()
                    .map(|lang| {
                        let change_language = change_language.clone();
                        let class = if lang == locale {
                            format!("{MENU_ITEM_CLASS} bg-accent")
                        } else {
                            MENU_ITEM_CLASS.to_string()
                        };
                        view! {
                            <button
                                type="button"
                                role="menuitem"
                                class=class
                                aria-current=(lang == locale).then_some("true")
                                data-locale=lang.code()
                                on:click=move |_| change_language(lang)
                            >
                                <span aria-hidden="true">{lang.flag_emoji()}</span>
                                {lang.name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ThemeToggle(theme: RwSignal<Theme>, switcher: Arc<dyn ThemeSwitch>) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        let origin = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                RevealOrigin::from_rect(rect.left(), rect.top(), rect.width(), rect.height())
            })
            .unwrap_or_default();
        let next = theme.get_untracked().toggled();
        log::debug!("theme -> {} via {}", next.as_str(), switcher.name());
        switcher.switch(next, origin, Box::new(move |t| theme.set(t)));
    };

    let icon_class = move |shown: Theme| {
        let state = if theme.get() == shown {
            "rotate-0 scale-100"
        } else {
            "rotate-90 scale-0"
        };
        format!("absolute h-5 w-5 transition-all duration-300 {state}")
    };

    view! {
        <button
            type="button"
            class="relative inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent"
            aria-label="Toggle theme"
            on:click=on_click
        >
            <span class=move || icon_class(Theme::Light)>
                <LineIcon icon=Icon::Sun class="h-5 w-5" />
            </span>
            <span class=move || icon_class(Theme::Dark)>
                <LineIcon icon=Icon::Moon class="h-5 w-5" />
            </span>
        </button>
    }
}
