//! Card presenting one record's screenshots.
//!
//! DESIGN
//! ======
//! The card resolves its slides once at construction. The media area then
//! follows the shared [`UiState`] layout through [`CardMedia::select`]:
//! compact viewports get the first slide as a static image, wide viewports
//! mount [`SlideCarousel`], which owns its own [`CarouselState`] and drops it
//! on unmount. The layout is read through a memo, so a resize that stays on
//! one side of the breakpoint keeps the carousel (and its position) mounted.
//!
//! Every `<img>` goes through the image proxy. A slide whose origin is not
//! allow-listed, or whose load fails, renders a neutral block instead.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use records::origin::image_proxy_src;
use records::{Record, resolve_slides};

use crate::components::context_menu::CardContextMenu;
use crate::state::card::{CardAction, CardMenuState, ContextMenuState, dispatch_action};
use crate::state::carousel::CarouselState;
use crate::state::ui::{CardMedia, UiState, layout_memo};
use crate::util::browser;

/// Optional action callbacks wired up by the grid.
#[derive(Clone, Copy, Default)]
pub struct CardActions {
    pub on_save: Option<Callback<()>>,
    pub on_download: Option<Callback<()>>,
    pub on_copy_link: Option<Callback<()>>,
}

impl CardActions {
    fn handler(self, action: CardAction) -> Option<Callback<()>> {
        match action {
            CardAction::Save => self.on_save,
            CardAction::Download => self.on_download,
            CardAction::CopyLink => self.on_copy_link,
        }
    }
}

/// A record card. Renders nothing when the record has no image field.
#[component]
pub fn CarouselCard(
    record: Record,
    #[prop(optional)] on_save: Option<Callback<()>>,
    #[prop(optional)] on_download: Option<Callback<()>>,
    #[prop(optional)] on_copy_link: Option<Callback<()>>,
) -> impl IntoView {
    let Some(slides) = resolve_slides(&record.fields) else {
        return ().into_any();
    };

    let ui = use_context::<RwSignal<UiState>>();
    let title = record.title().to_owned();
    let menu = RwSignal::new(CardMenuState::default());
    let context_menu = RwSignal::new(ContextMenuState::default());
    let actions = CardActions { on_save, on_download, on_copy_link };

    let run = move |action: CardAction| {
        menu.update(CardMenuState::close);
        context_menu.update(ContextMenuState::close);
        let handler = actions.handler(action).map(|cb| move || cb.run(()));
        if let Some(message) = dispatch_action(action, handler) {
            browser::alert(message);
        }
    };

    let on_action = Callback::new(run);

    let slides = StoredValue::new(slides);
    let layout = layout_memo(ui);
    let media_title = title.clone();
    let media = move || match slides.with_value(|slides| CardMedia::select(layout.get(), slides)) {
        CardMedia::Fallback => view! { <SlideFallback /> }.into_any(),
        CardMedia::Static(url) => view! { <SlideImage url=url alt=format!("{media_title} preview") /> }.into_any(),
        CardMedia::Carousel(slides) => view! { <SlideCarousel slides=slides title=media_title.clone() /> }.into_any(),
    };

    view! {
        <div
            class="carousel-card"
            class:carousel-card--pinned=move || menu.get().actions_pinned()
            on:contextmenu=move |ev: MouseEvent| {
                ev.prevent_default();
                context_menu.update(|m| m.open_at(ev.client_x(), ev.client_y()));
            }
        >
            <a class="carousel-card__overlay" href="/" aria-label=format!("View {title}")></a>
            <div class="carousel-card__media">{media}</div>
            <CardFooter title=title.clone() menu=menu on_action=on_action />
            <CardContextMenu state=context_menu on_action=on_action />
        </div>
    }
    .into_any()
}

/// Icon placeholder, title lines, save button and the options menu.
#[component]
fn CardFooter(title: String, menu: RwSignal<CardMenuState>, on_action: Callback<CardAction>) -> impl IntoView {
    view! {
        <div class="carousel-card__footer">
            <div class="carousel-card__icon" role="img" aria-label="App icon"></div>
            <div class="carousel-card__info">
                <span class="carousel-card__title">{title.clone()}</span>
                <span class="carousel-card__subtitle">{title}</span>
            </div>
            <div class="carousel-card__actions">
                <button
                    class="btn carousel-card__save"
                    title=CardAction::Save.label()
                    aria-label=CardAction::Save.label()
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_action.run(CardAction::Save);
                    }
                >
                    "🔖"
                </button>
                <div class="carousel-card__menu">
                    <button
                        class="btn carousel-card__more"
                        title="Download & Share"
                        aria-label="More options"
                        aria-haspopup="menu"
                        aria-expanded=move || menu.get().open.to_string()
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            menu.update(CardMenuState::toggle);
                        }
                    >
                        "⋯"
                    </button>
                    <Show when=move || menu.get().open>
                        <div class="carousel-card__menu-list" role="menu">
                            <button
                                class="carousel-card__menu-item"
                                role="menuitem"
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    on_action.run(CardAction::Download);
                                }
                            >
                                <span>{CardAction::Download.label()}</span>
                                <span class="badge">"PRO"</span>
                            </button>
                            <button
                                class="carousel-card__menu-item"
                                role="menuitem"
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    on_action.run(CardAction::CopyLink);
                                }
                            >
                                <span>{CardAction::CopyLink.label()}</span>
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Interactive slide track with prev/next controls and position dots.
#[component]
fn SlideCarousel(slides: Vec<String>, title: String) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(slides.len()));
    let indicator_count = state.get_untracked().indicator_count();
    let track_style = move || format!("transform: translateX(-{}%);", state.get().index() * 100);

    view! {
        <div class="carousel" role="region" aria-roledescription="carousel">
            <div class="carousel__viewport">
                <div class="carousel__track" style=track_style>
                    {slides
                        .into_iter()
                        .enumerate()
                        .map(|(i, url)| {
                            view! {
                                <div class="carousel__slide" role="group" aria-roledescription="slide">
                                    <SlideImage url=url alt=format!("{title} screen {}", i + 1) />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <button
                class="carousel__control carousel__control--prev"
                class:carousel__control--inert=move || !state.get().can_scroll_prev
                disabled=move || !state.get().can_scroll_prev
                aria-label="Previous image"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    state.update(CarouselState::prev);
                }
            >
                "‹"
            </button>
            <button
                class="carousel__control carousel__control--next"
                class:carousel__control--inert=move || !state.get().can_scroll_next
                disabled=move || !state.get().can_scroll_next
                aria-label="Next image"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    state.update(CarouselState::next);
                }
            >
                "›"
            </button>
            <div class="carousel__indicators" role="tablist" aria-label="Image indicators">
                {(0..indicator_count)
                    .map(|dot| {
                        view! {
                            <button
                                class="carousel__dot"
                                class:carousel__dot--active=move || state.get().is_indicator_active(dot)
                                role="tab"
                                aria-selected=move || state.get().is_indicator_active(dot).to_string()
                                aria-label=format!("Go to slide {}", dot + 1)
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    state.update(|s| s.select(dot));
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One slide image, served through the image proxy.
#[component]
fn SlideImage(url: String, alt: String) -> impl IntoView {
    let src = image_proxy_src(&url);
    let failed = RwSignal::new(src.is_none());

    view! {
        <Show when=move || !failed.get() fallback=|| view! { <SlideFallback /> }>
            <img
                class="carousel-card__image"
                src=src.clone()
                alt=alt.clone()
                loading="lazy"
                on:error=move |_| failed.set(true)
            />
        </Show>
    }
}

#[component]
fn SlideFallback() -> impl IntoView {
    view! { <div class="carousel-card__image-fallback" aria-hidden="true"></div> }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "carousel_card_test.rs"]
mod carousel_card_test;
