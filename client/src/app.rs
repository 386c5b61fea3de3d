//! Root component, HTML shell and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for every page request. `App` provides
//! the shared [`UiState`] signal and keeps it in sync with the viewport after
//! hydration.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::browse::BrowsePage;
use crate::pages::records::RecordsIndexPage;
use crate::state::ui::UiState;
use crate::util::viewport;

/// Document shell around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);
    viewport::track_viewport(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/screenshelf.css" />
        <Title text="Screenshelf" />
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/browse/:platform/:feature") view=BrowsePage />
                <Route path=path!("/records") view=RecordsIndexPage />
            </Routes>
        </Router>
    }
}
