//! Slot-filling parser for spoken orders

use crate::components::{ItemPhrase, OrderComponents, Slot};
use crate::error::ParserError;
use crate::MenuCatalog;
use regex::Regex;
use tracing::{debug, trace};

/// Classification order for tokens that are not items. First match wins.
const SLOT_PRIORITY: [Slot; 5] = [
    Slot::Size,
    Slot::Milk,
    Slot::Syrup,
    Slot::Topping,
    Slot::ExtraShots,
];

const NUMBER_WORDS: [(&str, u32); 10] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Turns one utterance into an [`OrderComponents`] record
pub struct UtteranceParser<'a> {
    catalog: &'a MenuCatalog,
    token_pattern: Regex,
}

impl<'a> UtteranceParser<'a> {
    pub fn new(catalog: &'a MenuCatalog) -> Result<Self, ParserError> {
        Ok(Self {
            catalog,
            token_pattern: Regex::new(r"[\p{L}\p{N}%']+")?,
        })
    }

    /// Split on whitespace and punctuation, keeping `%` ("2%") and apostrophes
    pub fn tokenize<'t>(&self, utterance: &'t str) -> Vec<&'t str> {
        self.token_pattern
            .find_iter(utterance)
            .map(|m| m.as_str())
            .collect()
    }

    /// Parse an utterance. An utterance without items yields empty `items`.
    pub fn parse(&self, utterance: &str) -> OrderComponents {
        let tokens = self.tokenize(utterance);
        let mut components = OrderComponents::default();
        let mut pending_quantity: Option<u32> = None;
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];

            if let Some(value) = quantity_value(token) {
                if let Some(shots) = self.shot_count_at(&tokens[i + 1..], value) {
                    components.push_slot(Slot::ExtraShots, shots.to_string());
                } else if value > 0 {
                    if let Some(dropped) = pending_quantity.replace(value) {
                        debug!(dropped, value, "quantity overwritten before any item");
                    }
                }
                i += 1;
                continue;
            }

            if let Some((name, used)) = self.match_item(&tokens[i..]) {
                let quantity = pending_quantity.take().unwrap_or(1);
                components.items.push(ItemPhrase::new(quantity, name));
                i += used;
                continue;
            }

            if let Some((slot, value, used)) = self.match_slot(&tokens[i..]) {
                components.push_slot(slot, value.to_string());
                i += used;
                continue;
            }

            trace!(token, "discarding unrecognised token");
            i += 1;
        }

        if let Some(quantity) = pending_quantity {
            debug!(quantity, "quantity with no following item discarded");
        }
        debug!(utterance, ?components, "parsed utterance");
        components
    }

    /// Longest item phrase starting at the head of `window`
    fn match_item(&self, window: &[&str]) -> Option<(&'a str, usize)> {
        let longest = self.catalog.max_item_tokens().min(window.len());
        (1..=longest).rev().find_map(|n| {
            self.catalog
                .is_item(&window[..n].join(" "))
                .map(|name| (name, n))
        })
    }

    /// Longest slot phrase starting at the head of `window`, honouring slot priority
    fn match_slot(&self, window: &[&str]) -> Option<(Slot, &'a str, usize)> {
        let longest = self.catalog.max_phrase_len().min(window.len());
        (1..=longest).rev().find_map(|n| {
            let phrase = window[..n].join(" ");
            SLOT_PRIORITY
                .iter()
                .find_map(|&slot| self.classify(slot, &phrase).map(|v| (slot, v, n)))
        })
    }

    fn classify(&self, slot: Slot, phrase: &str) -> Option<&'a str> {
        match slot {
            Slot::Size => self.catalog.is_size(phrase),
            Slot::Milk => self.catalog.is_milk(phrase),
            Slot::Syrup => self.catalog.is_syrup(phrase),
            Slot::Topping => self.catalog.is_topping(phrase),
            Slot::ExtraShots => self.catalog.is_shot_count(phrase),
        }
    }

    /// A number followed by "extra", "shot" or "shots" counts espresso shots
    fn shot_count_at(&self, rest: &[&str], value: u32) -> Option<&'a str> {
        let names_shots = rest.first().is_some_and(|next| {
            ["shot", "shots", "extra"]
                .iter()
                .any(|word| next.eq_ignore_ascii_case(word))
        });
        if !names_shots {
            return None;
        }
        self.catalog.is_shot_count(&value.to_string())
    }
}

fn quantity_value(token: &str) -> Option<u32> {
    if token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| token.eq_ignore_ascii_case(word))
        .map(|&(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> OrderComponents {
        let catalog = MenuCatalog::default();
        let parser = UtteranceParser::new(&catalog).unwrap();
        parser.parse(text)
    }

    fn items(components: &OrderComponents) -> Vec<(u32, &str)> {
        components
            .items
            .iter()
            .map(|i| (i.quantity, i.name.as_str()))
            .collect()
    }

    #[test]
    fn test_two_word_item_beats_single_word_slot() {
        let c = parse("Caramel Macchiato Venti");
        assert_eq!(items(&c), vec![(1, "Caramel Macchiato")]);
        assert_eq!(c.sizes, vec!["Venti"]);
        assert!(c.syrups.is_empty());
    }

    #[test]
    fn test_quantity_binds_to_next_item() {
        let c = parse("3 Lattes");
        assert_eq!(items(&c), vec![(3, "Latte")]);

        let c = parse("Latte 2");
        assert_eq!(items(&c), vec![(1, "Latte")]);

        let c = parse("2 lattes and a mocha");
        assert_eq!(items(&c), vec![(2, "Latte"), (1, "Mocha")]);
    }

    #[test]
    fn test_quantity_overwritten_before_item() {
        let c = parse("2 no wait 4 americanos");
        assert_eq!(items(&c), vec![(4, "Americano")]);
    }

    #[test]
    fn test_zero_quantity_is_ignored() {
        let c = parse("0 tea");
        assert_eq!(items(&c), vec![(1, "Tea")]);
    }

    #[test]
    fn test_scenario_lattes_with_oat_milk() {
        let c = parse("2 Lattes Venti with Oat Milk");
        assert_eq!(items(&c), vec![(2, "Latte")]);
        assert_eq!(c.sizes, vec!["Venti"]);
        assert_eq!(c.milks, vec!["Oat Milk"]);
    }

    #[test]
    fn test_scenario_mocha_with_syrup_and_topping() {
        let c = parse("One Mocha with Caramel and Whipped Cream");
        assert_eq!(items(&c), vec![(1, "Mocha")]);
        assert_eq!(c.syrups, vec!["Caramel"]);
        assert_eq!(c.toppings, vec!["Whipped Cream"]);
    }

    #[test]
    fn test_number_words() {
        let c = parse("two flat whites and three teas");
        assert_eq!(items(&c), vec![(2, "Flat White"), (3, "Tea")]);
    }

    #[test]
    fn test_no_items() {
        let c = parse("I would like something warm please");
        assert!(c.items.is_empty());
        let c = parse("");
        assert_eq!(c, OrderComponents::default());
        let c = parse("grande with oat milk");
        assert!(c.items.is_empty());
        assert_eq!(c.sizes, vec!["Grande"]);
    }

    #[test]
    fn test_multi_word_slots() {
        let c = parse("latte with half and half, 2% milk and cinnamon powder");
        assert_eq!(c.milks, vec!["Half and Half", "2% Milk"]);
        assert_eq!(c.toppings, vec!["Cinnamon Powder"]);
    }

    #[test]
    fn test_slot_priority_without_double_classification() {
        // "none" is a milk, syrup and topping; milk wins
        let c = parse("tea with none");
        assert_eq!(c.milks, vec!["None"]);
        assert!(c.syrups.is_empty());
        assert!(c.toppings.is_empty());
    }

    #[test]
    fn test_mocha_is_an_item_before_a_syrup() {
        let c = parse("latte with mocha");
        assert_eq!(items(&c), vec![(1, "Latte"), (1, "Mocha")]);
        assert!(c.syrups.is_empty());
    }

    #[test]
    fn test_extra_shots() {
        let c = parse("venti latte with 2 extra shots");
        assert_eq!(items(&c), vec![(1, "Latte")]);
        assert_eq!(c.extra_shots, vec!["2"]);

        let c = parse("americano with one shot");
        assert_eq!(c.extra_shots, vec!["1"]);

        let c = parse("latte with 2 extra");
        assert_eq!(items(&c), vec![(1, "Latte")]);
        assert_eq!(c.extra_shots, vec!["2"]);

        let c = parse("grande mocha with three extra please");
        assert_eq!(c.extra_shots, vec!["3"]);

        // beyond the menu's shot counts it is just a quantity with no item
        let c = parse("latte with 9 extra shots");
        assert!(c.extra_shots.is_empty());
        assert_eq!(items(&c), vec![(1, "Latte")]);
    }

    #[test]
    fn test_tokenize_keeps_percent_and_drops_punctuation() {
        let catalog = MenuCatalog::default();
        let parser = UtteranceParser::new(&catalog).unwrap();
        assert_eq!(
            parser.tokenize("A latte, 2% milk. Thanks!"),
            vec!["A", "latte", "2%", "milk", "Thanks"]
        );
    }
}
