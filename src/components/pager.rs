//! Previous/next pagination controls.

use leptos::prelude::*;

use crate::state::filters::TicketFilters;

/// Page size used by the ticket list endpoint.
pub const PAGE_SIZE: u64 = 25;

/// Previous/next page buttons plus a "page X of Y" label.
///
/// Keeps `page >= 1` on its own: the filter container stores whatever it
/// is given.
#[component]
pub fn Pager(total: u64) -> impl IntoView {
    let filters = expect_context::<RwSignal<TicketFilters>>();

    let page = move || filters.with(TicketFilters::page);
    let last_page = move || total.div_ceil(PAGE_SIZE).max(1);

    let on_prev = move |_| {
        filters.update(|f| {
            let current = f.page();
            if current > 1 {
                f.set_page(current - 1);
            }
        });
    };
    let on_next = move |_| {
        filters.update(|f| {
            let current = f.page();
            if u64::from(current) < last_page() {
                f.set_page(current + 1);
            }
        });
    };

    view! {
        <div class="pager">
            <button class="btn pager__prev" on:click=on_prev disabled=move || page() <= 1>
                "Previous"
            </button>
            <span class="pager__label">{move || format!("Page {} of {}", page(), last_page())}</span>
            <button
                class="btn pager__next"
                on:click=on_next
                disabled=move || u64::from(page()) >= last_page()
            >
                "Next"
            </button>
        </div>
    }
}
