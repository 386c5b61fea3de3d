//! Plain list of record names fetched from the proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted on `/records`. The fetch starts after hydration, so the server
//! renders the loading state and the browser fills in the result.
//!
//! ERROR HANDLING
//! ==============
//! Unmounting aborts the in-flight request and cancels the task's
//! [`CancelToken`](crate::util::cancel::CancelToken); a response that still
//! arrives is dropped before it touches state.

use leptos::prelude::*;

use crate::state::records_list::{RecordsListState, display_name};

#[component]
pub fn RecordsList() -> impl IntoView {
    let state = RwSignal::new(RecordsListState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::cancel::CancelToken;

        let token = CancelToken::new();
        let task_token = token.clone();
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(web_sys::AbortController::signal);

        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_records_page(signal.as_ref())
                .await
                .map(|page| page.records);
            task_token.deliver(|| {
                if let Err(message) = &result {
                    log::warn!("records fetch failed: {message}");
                }
                state.update(|s| s.resolve(result));
            });
        });

        let controller = send_wrapper::SendWrapper::new(controller);
        on_cleanup(move || {
            token.cancel();
            if let Some(controller) = controller.take() {
                controller.abort();
            }
        });
    }

    view! {
        <section class="records-list">
            {move || {
                let current = state.get();
                if current.is_loading() {
                    view! { <p class="records-list__loading">"Loading…"</p> }.into_any()
                } else if let Some(message) = current.error() {
                    view! { <p class="records-list__error">{format!("Error: {message}")}</p> }.into_any()
                } else {
                    view! {
                        <ul class="records-list__items">
                            {current
                                .records()
                                .iter()
                                .map(|record| {
                                    view! { <li class="records-list__item">{display_name(record).to_owned()}</li> }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
