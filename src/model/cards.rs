//! Cards sub-model
//!
//! Holds the daemon's card mapping. A BTreeMap keeps iteration in key
//! order, so "the mapping's natural order" is deterministic. The generation
//! counter ticks on every replacement and drives the row cache.

use std::collections::BTreeMap;

use crate::api::Card;

#[derive(Debug, Clone, Default)]
pub struct CardsModel {
    cards: BTreeMap<String, Card>,
    generation: u64,
    /// Selection within the cards list
    pub selected: Option<usize>,
}

impl CardsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mapping with a fresh fetch result
    pub fn replace(&mut self, cards: BTreeMap<String, Card>) {
        self.cards = cards;
        self.generation += 1;

        // Keep the selection in range across refreshes
        self.selected = match self.cards.len() {
            0 => None,
            len => Some(self.selected.unwrap_or(0).min(len - 1)),
        };
    }

    pub fn cards(&self) -> &BTreeMap<String, Card> {
        &self.cards
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position in key order
    pub fn get_by_index(&self, index: usize) -> Option<(&String, &Card)> {
        self.cards.iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(func: &str) -> Card {
        Card {
            from_quick_select: None,
            action: None,
            func: Some(func.to_string()),
        }
    }

    #[test]
    fn test_replace_bumps_generation() {
        let mut model = CardsModel::new();
        assert_eq!(model.generation(), 0);

        model.replace(BTreeMap::new());
        assert_eq!(model.generation(), 1);

        model.replace(BTreeMap::new());
        assert_eq!(model.generation(), 2);
    }

    #[test]
    fn test_replace_clamps_selection() {
        let mut model = CardsModel::new();

        let mut cards = BTreeMap::new();
        cards.insert("a".to_string(), card("x"));
        cards.insert("b".to_string(), card("y"));
        model.replace(cards);
        model.selected = Some(1);

        let mut fewer = BTreeMap::new();
        fewer.insert("a".to_string(), card("x"));
        model.replace(fewer);
        assert_eq!(model.selected, Some(0));

        model.replace(BTreeMap::new());
        assert_eq!(model.selected, None);
    }

    #[test]
    fn test_get_by_index_key_order() {
        let mut model = CardsModel::new();

        let mut cards = BTreeMap::new();
        cards.insert("0009".to_string(), card("x"));
        cards.insert("0001".to_string(), card("y"));
        model.replace(cards);

        assert_eq!(model.get_by_index(0).unwrap().0, "0001");
        assert_eq!(model.get_by_index(1).unwrap().0, "0009");
        assert!(model.get_by_index(2).is_none());
    }
}
