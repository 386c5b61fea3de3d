//! Right-click menu shared by every card.
//!
//! DESIGN
//! ======
//! The menu is rendered inside the card but positioned `fixed` at the pointer.
//! A full-viewport backdrop catches the outside click (or a second right-click)
//! and closes it; Escape closes it through a window listener that only lives
//! while the menu is mounted.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::state::card::{CardAction, ContextMenuState};

const MENU_ACTIONS: [CardAction; 3] = [CardAction::Save, CardAction::Download, CardAction::CopyLink];

#[component]
pub fn CardContextMenu(state: RwSignal<ContextMenuState>, on_action: Callback<CardAction>) -> impl IntoView {
    view! {
        <Show when=move || state.get().open>
            <ContextMenuLayer state=state on_action=on_action />
        </Show>
    }
}

#[component]
fn ContextMenuLayer(state: RwSignal<ContextMenuState>, on_action: Callback<CardAction>) -> impl IntoView {
    let close = move || state.update(ContextMenuState::close);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                state.update(ContextMenuState::close);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div
            class="context-menu__backdrop"
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                close();
            }
            on:contextmenu=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                close();
            }
        ></div>
        <div class="context-menu" role="menu" style=move || state.get().style()>
            {MENU_ACTIONS
                .into_iter()
                .map(|action| {
                    view! {
                        <button
                            class="context-menu__item"
                            role="menuitem"
                            on:click=move |ev: MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                on_action.run(action);
                            }
                        >
                            <span>{action.label()}</span>
                            {(action == CardAction::Download).then(|| view! { <span class="badge">"PRO"</span> })}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
