use super::*;
use crate::record::RecordFields;

fn records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record { id: format!("rec{i}"), fields: RecordFields::default(), created_time: None })
        .collect()
}

#[test]
fn parse_known_segments() {
    assert_eq!(Feature::parse("apps"), Feature::Apps);
    assert_eq!(Feature::parse("screens"), Feature::Screens);
    assert_eq!(Feature::parse("ui-elements"), Feature::UiElements);
    assert_eq!(Feature::parse("flows"), Feature::Flows);
}

#[test]
fn parse_is_case_sensitive_and_rejects_unknown() {
    assert_eq!(Feature::parse("Apps"), Feature::Unknown);
    assert_eq!(Feature::parse("ui_elements"), Feature::Unknown);
    assert_eq!(Feature::parse(""), Feature::Unknown);
}

#[test]
fn segment_round_trips_for_known_features() {
    for feature in [Feature::Apps, Feature::Screens, Feature::UiElements, Feature::Flows] {
        let segment = feature.as_segment().unwrap();
        assert_eq!(Feature::parse(segment), feature);
    }
    assert_eq!(Feature::Unknown.as_segment(), None);
}

#[test]
fn flows_is_an_alias_of_apps() {
    assert_eq!(Feature::Flows.layout(), Feature::Apps.layout());
    assert!(Feature::Flows.uses_records());
}

#[test]
fn placeholder_features_always_render_ten_items() {
    for feature in [Feature::Screens, Feature::UiElements] {
        for n in [0, 3, 25] {
            let data = records(n);
            let items = grid_items(feature, &data);
            assert_eq!(items.len(), PLACEHOLDER_CARD_COUNT);
            assert!(items.iter().all(|item| matches!(item, GridItem::Placeholder(_))));
        }
        assert!(!feature.uses_records());
    }
}

#[test]
fn record_features_render_one_card_per_record_in_order() {
    let data = records(4);
    for feature in [Feature::Apps, Feature::Flows] {
        let items = grid_items(feature, &data);
        assert_eq!(items.len(), 4);
        let ids: Vec<&str> = items
            .iter()
            .map(|item| match item {
                GridItem::Card(rec) => rec.id.as_str(),
                GridItem::Placeholder(_) => panic!("unexpected placeholder"),
            })
            .collect();
        assert_eq!(ids, ["rec0", "rec1", "rec2", "rec3"]);
    }
}

#[test]
fn unknown_feature_renders_nothing() {
    let data = records(5);
    assert!(grid_items(Feature::parse("bogus"), &data).is_empty());
}

#[test]
fn placeholder_indices_are_sequential() {
    let items = grid_items(Feature::Screens, &[]);
    assert_eq!(items.first(), Some(&GridItem::Placeholder(0)));
    assert_eq!(items.last(), Some(&GridItem::Placeholder(PLACEHOLDER_CARD_COUNT - 1)));
}
