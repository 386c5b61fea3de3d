use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn slides(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("https://v5.airtableusercontent.com/{i}.png")).collect()
}

#[test]
fn ui_state_defaults_to_compact_without_width() {
    let state = UiState::default();
    assert_eq!(state.layout, CardLayout::Compact);
    assert_eq!(state.viewport_width, None);
}

#[test]
fn layout_below_breakpoint_is_compact() {
    assert_eq!(CardLayout::for_viewport_width(0.0), CardLayout::Compact);
    assert_eq!(CardLayout::for_viewport_width(375.0), CardLayout::Compact);
    assert_eq!(CardLayout::for_viewport_width(767.9), CardLayout::Compact);
}

#[test]
fn layout_at_or_above_breakpoint_is_carousel() {
    assert_eq!(CardLayout::for_viewport_width(CAROUSEL_BREAKPOINT_PX), CardLayout::Carousel);
    assert_eq!(CardLayout::for_viewport_width(1440.0), CardLayout::Carousel);
}

#[test]
fn set_viewport_width_switches_layout_both_ways() {
    let mut state = UiState::default();
    state.set_viewport_width(1024.0);
    assert_eq!(state.layout, CardLayout::Carousel);
    assert_eq!(state.viewport_width, Some(1024.0));

    state.set_viewport_width(414.0);
    assert_eq!(state.layout, CardLayout::Compact);
}

#[test]
fn compact_layout_shows_only_the_first_slide() {
    let all = slides(4);
    assert_eq!(CardMedia::select(CardLayout::Compact, &all), CardMedia::Static(all[0].clone()));
}

#[test]
fn carousel_layout_with_one_slide_is_static() {
    let one = slides(1);
    assert_eq!(CardMedia::select(CardLayout::Carousel, &one), CardMedia::Static(one[0].clone()));
}

#[test]
fn carousel_layout_with_several_slides_mounts_carousel() {
    let all = slides(3);
    assert_eq!(CardMedia::select(CardLayout::Carousel, &all), CardMedia::Carousel(all));
}

#[test]
fn empty_slides_fall_back_in_both_layouts() {
    assert_eq!(CardMedia::select(CardLayout::Compact, &[]), CardMedia::Fallback);
    assert_eq!(CardMedia::select(CardLayout::Carousel, &[]), CardMedia::Fallback);
}

#[test]
fn layout_memo_without_context_is_compact() {
    let owner = Owner::new();
    owner.set();
    assert_eq!(layout_memo(None).get_untracked(), CardLayout::Compact);
}

#[test]
fn resize_within_breakpoint_does_not_rerun_layout_readers() {
    let owner = Owner::new();
    owner.set();

    let ui = RwSignal::new(UiState::default());
    let layout = layout_memo(Some(ui));
    let runs = Arc::new(AtomicUsize::new(0));
    let reader = Memo::new({
        let runs = runs.clone();
        move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            layout.get()
        }
    });

    assert_eq!(reader.get_untracked(), CardLayout::Compact);
    ui.update(|u| u.set_viewport_width(1024.0));
    assert_eq!(reader.get_untracked(), CardLayout::Carousel);
    ui.update(|u| u.set_viewport_width(1100.0));
    assert_eq!(reader.get_untracked(), CardLayout::Carousel);

    assert_eq!(runs.load(Ordering::SeqCst), 2);
}
