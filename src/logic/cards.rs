//! Cards List Logic
//!
//! Pure derivation of the cards list rows: one row per card in key order,
//! with the card id as primary text and the computed description as
//! secondary text. Row derivation is memoized by the cards generation so an
//! unchanged mapping is not re-derived every frame.

use std::collections::BTreeMap;

use crate::api::Card;
use crate::model::cards::CardsModel;

/// Shown in place of the list when no cards exist
pub const NO_CARDS_MESSAGE: &str = "No cards registered!";

/// Compute the visible description for one card.
///
/// Quick-select cards join the non-null values of `[from_quick_select,
/// action.args]` with `", "`; all other cards show `func`. A record with
/// neither comes out blank.
pub fn card_description(card: &Card) -> String {
    match &card.from_quick_select {
        Some(quick_select) => [
            Some(quick_select.as_str()),
            card.action.as_ref().and_then(|action| action.args.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", "),
        None => card.func.clone().unwrap_or_default(),
    }
}

/// Derive `(id, description)` rows for the whole mapping, in key order
pub fn card_rows(cards: &BTreeMap<String, Card>) -> Vec<(String, String)> {
    cards
        .iter()
        .map(|(id, card)| (id.clone(), card_description(card)))
        .collect()
}

/// Memoized row derivation keyed by the cards generation.
///
/// Rows are rebuilt only when the mapping has actually been replaced;
/// repeated frames over the same mapping reuse the previous rows.
#[derive(Debug, Default)]
pub struct CardRowCache {
    generation: Option<u64>,
    rows: Vec<(String, String)>,
}

impl CardRowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&mut self, cards: &CardsModel) -> &[(String, String)] {
        if self.generation != Some(cards.generation()) {
            self.rows = card_rows(cards.cards());
            self.generation = Some(cards.generation());
        }

        &self.rows
    }
}
