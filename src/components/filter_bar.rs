//! Filter controls for the ticket list.
//!
//! Every mutation goes through the container's setter methods so the
//! page-reset policy applies uniformly; the empty select value maps to
//! "no filter" (`None`).

use leptos::prelude::*;

use crate::state::filters::TicketFilters;

const STATUS_OPTIONS: &[&str] = &["open", "pending", "resolved", "closed"];
const PRIORITY_OPTIONS: &[&str] = &["low", "normal", "high", "urgent"];

/// Status select, priority select, free-text search, and a clear button.
#[component]
pub fn FilterBar() -> impl IntoView {
    let filters = expect_context::<RwSignal<TicketFilters>>();

    let on_status = move |ev| {
        let value = event_target_value(&ev);
        filters.update(|f| f.set_status(if value.is_empty() { None } else { Some(value) }));
    };
    let on_priority = move |ev| {
        let value = event_target_value(&ev);
        filters.update(|f| f.set_priority(if value.is_empty() { None } else { Some(value) }));
    };
    let on_search = move |ev| {
        filters.update(|f| f.set_search(event_target_value(&ev)));
    };
    let on_clear = move |_| filters.update(TicketFilters::reset);

    view! {
        <div class="filter-bar">
            <select
                class="filter-bar__status"
                prop:value=move || filters.with(|f| f.status().unwrap_or_default().to_owned())
                on:change=on_status
            >
                <option value="">"All statuses"</option>
                {STATUS_OPTIONS
                    .iter()
                    .map(|status| view! { <option value={*status}>{*status}</option> })
                    .collect_view()}
            </select>
            <select
                class="filter-bar__priority"
                prop:value=move || filters.with(|f| f.priority().unwrap_or_default().to_owned())
                on:change=on_priority
            >
                <option value="">"All priorities"</option>
                {PRIORITY_OPTIONS
                    .iter()
                    .map(|priority| view! { <option value={*priority}>{*priority}</option> })
                    .collect_view()}
            </select>
            <input
                type="search"
                class="filter-bar__search"
                placeholder="Search tickets"
                prop:value=move || filters.with(|f| f.search().to_owned())
                on:input=on_search
            />
            <button class="btn filter-bar__clear" on:click=on_clear>
                "Clear"
            </button>
        </div>
    }
}
