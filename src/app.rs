mod backdrop;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod icon;
mod projects;
mod skills;

use std::sync::Arc;

use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_params_map, path, SsrMode};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::config::SiteConfig;
use crate::content::AUTHOR;
#[cfg(feature = "ssr")]
use crate::messages::load_messages;
use crate::locale::{localized_href, Locale};
use crate::messages::{MessageKey, Messages, GLOBAL_CATALOG_CACHE};
use crate::theme::{select_theme_switch, Theme, ThemeSwitch};

use backdrop::AnimatedBackdrop;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;

const SITE_TAGLINE: &str = "Full Stack Developer";
const SITE_DESCRIPTION: &str =
    "Portfolio of hhartur - Full Stack Developer specialized in Next.js, React, Vue and more";
const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let script = use_context::<SiteConfig>().and_then(|c| c.third_party_script);
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                {script
                    .map(|s| {
                        view! { <script defer=true src=s.src data-zone=s.zone></script> }
                    })}
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Everything a page render needs, handed down explicitly from the shell.
#[derive(Clone)]
pub struct PageContext {
    pub locale: Locale,
    pub messages: Arc<Messages>,
    pub theme: RwSignal<Theme>,
    pub switcher: Arc<dyn ThemeSwitch>,
}

impl PageContext {
    pub fn t(&self, key: impl Into<MessageKey>) -> String {
        self.messages.text(key)
    }

    /// Locale-prefixed href for an in-app path such as `"/contact"`.
    pub fn href(&self, path: &str) -> String {
        localized_href(self.locale, path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Contact,
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    let switcher = select_theme_switch();

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| set_stored.set(*t),
            false,
        );
    }

    let page_view = move |page: Page| {
        let switcher = switcher.clone();
        move || {
            view! { <LocaleShell page theme switcher=switcher.clone() /> }
        }
    };

    view! {
        <Html {..} class=move || theme.get().as_str() />
        <Title formatter=|title| format!("{AUTHOR} - {title}") />
        <Meta name="description" content=SITE_DESCRIPTION />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/:locale") view=page_view(Page::Home) ssr=SsrMode::Async />
                <Route
                    path=path!("/:locale/contact")
                    view=page_view(Page::Contact)
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}

#[server(input = GetUrl)]
pub async fn get_messages_server(locale: String) -> Result<Messages, ServerFnError> {
    let locale = Locale::from_code(&locale).map_err(|e| ServerFnError::new(e.to_string()))?;
    let messages = load_messages(locale).map_err(|e| {
        tracing::error!(%locale, "couldn't load message catalog: {e}");
        ServerFnError::new(e.to_string())
    })?;
    Ok((*messages).clone())
}

async fn fetch_messages(locale: Locale) -> Result<Messages, ServerFnError> {
    let cache = &*GLOBAL_CATALOG_CACHE;
    if let Some(m) = cache.get(&locale) {
        return Ok((**m).clone());
    }
    let messages = get_messages_server(locale.code().to_string()).await?;
    // the server caches on load
    #[cfg(feature = "hydrate")]
    cache.insert(locale, Arc::new(messages.clone()));
    Ok(messages)
}

/// Validates the locale segment, loads its catalog and renders `page`
/// inside the site chrome.
#[component]
fn LocaleShell(page: Page, theme: RwSignal<Theme>, switcher: Arc<dyn ThemeSwitch>) -> impl IntoView {
    let params = use_params_map();
    let requested = Memo::new(move |_| {
        let code = params.read().get("locale").unwrap_or_default();
        Locale::from_code(&code)
    });
    let catalog = Resource::new(
        move || requested.get().ok(),
        |locale| async move {
            match locale {
                Some(locale) => fetch_messages(locale).await,
                None => Err(ServerFnError::new("unsupported locale")),
            }
        },
    );

    move || match requested.get() {
        Err(e) => {
            log::debug!("{e}");
            Either::Left(view! { <NotFound /> })
        }
        Ok(locale) => {
            let switcher = switcher.clone();
            Either::Right(view! {
                <Html {..} lang=locale.code() />
                <Suspense fallback=|| view! { <div class="min-h-screen"></div> }>
                    {move || {
                        let switcher = switcher.clone();
                        Suspend::new(async move {
                            match catalog.await {
                                Ok(messages) => {
                                    let ctx = PageContext {
                                        locale: messages.locale(),
                                        messages: Arc::new(messages),
                                        theme,
                                        switcher,
                                    };
                                    Either::Left(view! { <PageFrame ctx page /> })
                                }
                                Err(e) => {
                                    log::error!("message catalog unavailable: {e}");
                                    Either::Right(view! { <CatalogUnavailable /> })
                                }
                            }
                        })
                    }}
                </Suspense>
            })
        }
    }
}

#[component]
fn PageFrame(ctx: PageContext, page: Page) -> impl IntoView {
    view! {
        <AnimatedBackdrop />
        <Header ctx=ctx.clone() />
        {match page {
            Page::Home => Either::Left(view! { <HomePage ctx=ctx.clone() /> }),
            Page::Contact => Either::Right(view! { <ContactPage ctx=ctx.clone() /> }),
        }}
        <Footer ctx />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Page not found" />
        <main class="flex min-h-screen flex-col items-center justify-center gap-4 px-4 text-center">
            <h1 class="text-6xl font-bold text-primary">"404"</h1>
            <p class="text-muted-foreground">"Page not found."</p>
        </main>
    }
}

#[component]
fn CatalogUnavailable() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::INTERNAL_SERVER_ERROR);
    }
    view! {
        <Title text=SITE_TAGLINE />
        <main class="flex min-h-screen items-center justify-center px-4 text-center">
            <p class="text-muted-foreground">"Something went wrong loading this page."</p>
        </main>
    }
}
