//! Checkbox card shown for grid categories that have no real data yet.

use leptos::prelude::*;

#[component]
pub fn PlaceholderCard(index: usize) -> impl IntoView {
    let checked = RwSignal::new(false);
    let input_id = format!("placeholder-card-{index}");

    view! {
        <label class="placeholder-card" class:placeholder-card--checked=move || checked.get() for=input_id.clone()>
            <input
                type="checkbox"
                id=input_id.clone()
                class="placeholder-card__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| checked.update(|c| *c = !*c)
            />
            <span class="placeholder-card__preview" aria-hidden="true"></span>
            <span class="placeholder-card__label">{format!("Item {}", index + 1)}</span>
        </label>
    }
}
