//! Ticket list page with filter bar, results, and pagination.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::filter_bar::FilterBar;
use crate::components::pager::Pager;
use crate::components::ticket_card::TicketCard;
use crate::config::{AppConfig, Theme};
use crate::net::api;
use crate::state::filters::TicketFilters;
use crate::state::session::SessionState;
use crate::util::theme;

/// Ticket list page — redirects unauthenticated visitors to the
/// configured auth-only route and refetches the list whenever the filter
/// state changes.
#[component]
pub fn TicketsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let filters = expect_context::<RwSignal<TicketFilters>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    {
        let navigate = navigate.clone();
        let target = config.redirect.on_auth_only.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && !state.is_authenticated() {
                navigate(&target, NavigateOptions::default());
            }
        });
    }

    // Ticket list resource — reading the filter signal inside the source
    // closure makes every filter mutation trigger a refetch.
    let fetch_config = config.clone();
    let tickets = LocalResource::new(move || {
        let config = fetch_config.clone();
        let current = filters.get();
        async move { api::fetch_tickets(&config, &current).await }
    });

    let current_theme = RwSignal::new(theme::resolve(config.theme));
    let on_theme = move |_| current_theme.set(theme::toggle(current_theme.get_untracked()));
    let theme_label = move || match current_theme.get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    let logout_target = config.redirect.on_logout.clone();
    let on_logout = move |_| {
        let config = config.clone();
        let navigate = navigate.clone();
        let target = logout_target.clone();
        leptos::task::spawn_local(async move {
            api::logout(&config).await;
            session.update(|state| state.user = None);
            navigate(&target, NavigateOptions::default());
        });
    };

    let user_name = move || session.get().user.map(|user| user.name).unwrap_or_default();

    view! {
        <div class="tickets-page">
            <header class="tickets-page__header">
                <h1>"Tickets"</h1>
                <span class="tickets-page__spacer"></span>
                <span class="tickets-page__user">{user_name}</span>
                <button class="btn tickets-page__theme" on:click=on_theme>{theme_label}</button>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>

            <FilterBar/>

            <Suspense fallback=move || view! { <p>"Loading tickets..."</p> }>
                {move || {
                    tickets
                        .get()
                        .map(|page| match page {
                            Some(page) => {
                                view! {
                                    <section class="tickets-page__results">
                                        <div class="tickets-page__list">
                                            {page
                                                .tickets
                                                .into_iter()
                                                .map(|ticket| view! { <TicketCard ticket=ticket/> })
                                                .collect_view()}
                                        </div>
                                        <Pager total=page.total/>
                                    </section>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="tickets-page__error">"Could not load tickets."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
