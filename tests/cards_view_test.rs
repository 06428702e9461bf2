//! Cards list view tests
//!
//! Row derivation over the cards mapping: one row per key in key order,
//! the description rule, the empty-state message, and the generation-keyed
//! row cache.

use std::collections::BTreeMap;

use juketui::api::{Card, CardAction};
use juketui::logic::cards::{card_rows, CardRowCache, NO_CARDS_MESSAGE};
use juketui::model::CardsModel;

fn quick_select_card(from: &str, args: Option<&str>) -> Card {
    Card {
        from_quick_select: Some(from.to_string()),
        action: Some(CardAction {
            args: args.map(str::to_string),
        }),
        func: None,
    }
}

fn func_card(func: &str) -> Card {
    Card {
        from_quick_select: None,
        action: None,
        func: Some(func.to_string()),
    }
}

#[test]
fn test_one_row_per_key_with_key_as_primary_text() {
    let mut cards = BTreeMap::new();
    cards.insert("0001".to_string(), func_card("play_card"));
    cards.insert("0002".to_string(), quick_select_card("play_music", None));
    cards.insert("0003".to_string(), func_card("pause"));

    let rows = card_rows(&cards);
    assert_eq!(rows.len(), 3);
    for (row, key) in rows.iter().zip(cards.keys()) {
        assert_eq!(&row.0, key);
    }
}

#[test]
fn test_rows_come_out_in_key_order() {
    let mut cards = BTreeMap::new();
    cards.insert("zz".to_string(), func_card("a"));
    cards.insert("aa".to_string(), func_card("b"));
    cards.insert("mm".to_string(), func_card("c"));

    let ids: Vec<String> = card_rows(&cards).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["aa", "mm", "zz"]);
}

#[test]
fn test_quick_select_description_joins_with_comma() {
    let mut cards = BTreeMap::new();
    cards.insert("0001".to_string(), quick_select_card("X", Some("Y")));
    cards.insert("0002".to_string(), quick_select_card("X", None));

    let rows = card_rows(&cards);
    assert_eq!(rows[0].1, "X, Y");
    assert_eq!(rows[1].1, "X");
}

#[test]
fn test_plain_card_description_is_func() {
    let mut cards = BTreeMap::new();
    cards.insert("0001".to_string(), func_card("play_album"));

    let rows = card_rows(&cards);
    assert_eq!(rows[0].1, "play_album");
}

#[test]
fn test_empty_mapping_has_no_rows_and_a_literal_message() {
    let cards: BTreeMap<String, Card> = BTreeMap::new();
    assert!(card_rows(&cards).is_empty());
    assert_eq!(NO_CARDS_MESSAGE, "No cards registered!");
}

#[test]
fn test_row_cache_is_stable_until_the_mapping_changes() {
    let mut model = CardsModel::new();
    let mut cache = CardRowCache::new();

    let mut cards = BTreeMap::new();
    cards.insert("0001".to_string(), func_card("play_card"));
    model.replace(cards.clone());

    let generation = model.generation();
    let first: Vec<_> = cache.rows(&model).to_vec();

    // Repeated frames over the unchanged mapping: same generation, same rows
    assert_eq!(model.generation(), generation);
    assert_eq!(cache.rows(&model).to_vec(), first);

    // A replacement bumps the generation and the rows follow the new mapping
    cards.insert("0002".to_string(), quick_select_card("play_music", Some("folder: kids")));
    model.replace(cards);
    assert_ne!(model.generation(), generation);

    let rebuilt = cache.rows(&model);
    assert_eq!(rebuilt.len(), 2);
    assert_eq!(rebuilt[1].1, "play_music, folder: kids");
}
