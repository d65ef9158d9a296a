//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{login::LoginPage, tickets::TicketsPage};
use crate::state::{filters::TicketFilters, session::SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the application configuration once, provides shared state
/// contexts for the session and the ticket filters, applies the theme,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        leptos::logging::warn!("invalid configuration, using defaults: {err}");
        AppConfig::default()
    });

    crate::util::theme::apply(crate::util::theme::resolve(config.theme));

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState { user: None, loading: true });
    let filters = RwSignal::new(TicketFilters::default());

    provide_context(config.clone());
    provide_context(session);
    provide_context(filters);

    // Probe the session once so pages can redirect on the answer.
    Effect::new(move || {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&config).await;
            session.update(|state| {
                state.user = user;
                state.loading = false;
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tickets-client.css"/>
        <Title text="Tickets"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("") view=TicketsPage/>
            </Routes>
        </Router>
    }
}
