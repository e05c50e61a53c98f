#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::{routing::get, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::config::SiteConfig;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let site = SiteConfig::from_env()?;
    if let Some(script) = &site.third_party_script {
        tracing::info!(src = %script.src, "third-party script enabled");
    }
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    let context = move || provide_context(site.clone());

    let app = Router::new()
        .route("/", get(redirect_to_locale))
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(context, shell))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// `/` has no page of its own; send visitors to their best-matching locale.
#[cfg(feature = "ssr")]
async fn redirect_to_locale(headers: axum::http::HeaderMap) -> axum::response::Redirect {
    use portfolio_site::locale::{localized_href, negotiate};

    let accept = headers
        .get(axum::http::header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    let locale = negotiate(accept);
    tracing::debug!(%locale, ?accept, "redirecting root");
    axum::response::Redirect::temporary(&localized_href(locale, "/"))
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
