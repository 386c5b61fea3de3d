//! Records page: plain name list on `/records`.

use leptos::prelude::*;

use crate::components::records_list::RecordsList;

#[component]
pub fn RecordsIndexPage() -> impl IntoView {
    view! {
        <main class="records-page">
            <h1 class="records-page__heading">"Records"</h1>
            <RecordsList />
        </main>
    }
}
