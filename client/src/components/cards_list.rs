//! Card grid for one browse category.
//!
//! SYSTEM CONTEXT
//! ==============
//! During server rendering records come straight from the data source held in
//! context; the resolved list is serialized into the page so hydration does
//! not refetch. A client-side resource run goes through the `/api/airtable`
//! proxy instead.

use leptos::prelude::*;
use records::{Feature, GridItem, Record, grid_items};

use crate::components::carousel_card::CarouselCard;
use crate::components::placeholder_card::PlaceholderCard;
use crate::util::browser;

/// Loads records from whichever side of the wire the resource runs on.
#[derive(Clone)]
struct RecordLoader {
    #[cfg(feature = "ssr")]
    source: Option<records::source::SharedSource>,
}

impl RecordLoader {
    fn from_context() -> Self {
        Self {
            #[cfg(feature = "ssr")]
            source: use_context::<records::source::SharedSource>(),
        }
    }

    async fn load(self) -> Result<Vec<Record>, String> {
        #[cfg(feature = "ssr")]
        {
            let Some(source) = self.source else {
                return Err("record source unavailable".to_owned());
            };
            source.fetch_records().await.map_err(|e| e.to_string())
        }
        #[cfg(all(feature = "hydrate", not(feature = "ssr")))]
        {
            send_wrapper::SendWrapper::new(crate::net::api::fetch_records()).await
        }
        #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
        {
            Err("not available outside the app".to_owned())
        }
    }
}

/// Grid of cards for `feature`. `platform` only labels the heading.
#[component]
pub fn CardsList(platform: String, feature: Feature) -> impl IntoView {
    let loader = RecordLoader::from_context();
    let records = Resource::new(
        move || feature.uses_records(),
        move |needed| {
            let loader = loader.clone();
            async move { if needed { loader.load().await } else { Ok(Vec::new()) } }
        },
    );

    let page_path = format!("/browse/{platform}/{}", feature.as_segment().unwrap_or("unknown"));
    let on_copy_link = Callback::new(move |()| browser::copy_to_clipboard(&browser::absolute_url(&page_path)));
    let heading = format!("{platform} · {}", feature.as_segment().unwrap_or("unknown"));

    view! {
        <section class="cards-list">
            <h1 class="cards-list__heading">{heading}</h1>
            <Suspense fallback=|| view! { <p class="cards-list__loading">"Loading…"</p> }>
                {move || Suspend::new(async move {
                    match records.await {
                        Ok(records) => render_grid(feature, &records, on_copy_link),
                        Err(message) => {
                            view! { <p class="cards-list__error">{format!("Error: {message}")}</p> }.into_any()
                        }
                    }
                })}
            </Suspense>
        </section>
    }
}

fn render_grid(feature: Feature, records: &[Record], on_copy_link: Callback<()>) -> AnyView {
    let items = grid_items(feature, records)
        .into_iter()
        .map(|item| match item {
            GridItem::Card(record) => {
                view! { <CarouselCard record=record.clone() on_copy_link=on_copy_link /> }.into_any()
            }
            GridItem::Placeholder(index) => view! { <PlaceholderCard index=index /> }.into_any(),
        })
        .collect_view();
    view! { <div class="card-grid">{items}</div> }.into_any()
}
