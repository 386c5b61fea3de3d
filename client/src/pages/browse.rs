//! Browse page: card grid for `/browse/:platform/:feature`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::Feature;

use crate::components::cards_list::CardsList;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let params = use_params_map();
    let route = move || {
        let params = params.get();
        let platform = params.get("platform").unwrap_or_default();
        let feature = Feature::parse(&params.get("feature").unwrap_or_default());
        (platform, feature)
    };

    view! {
        <main class="browse-page">
            {move || {
                let (platform, feature) = route();
                view! { <CardsList platform=platform feature=feature /> }
            }}
        </main>
    }
}
