//! Structured order attributes extracted from one utterance

use serde::{Deserialize, Serialize};

/// A recognised menu item with its bound quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPhrase {
    pub quantity: u32,
    /// Canonical menu name
    pub name: String,
}

impl ItemPhrase {
    pub fn new(quantity: u32, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

/// Which slot a classified token was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Size,
    Milk,
    Syrup,
    Topping,
    ExtraShots,
}

/// Result of one parse pass over one utterance.
///
/// Modifier slots are utterance-scoped: a size spoken once applies to every
/// item phrase of the same utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderComponents {
    pub items: Vec<ItemPhrase>,
    pub sizes: Vec<String>,
    pub milks: Vec<String>,
    pub syrups: Vec<String>,
    pub toppings: Vec<String>,
    pub extra_shots: Vec<String>,
}

impl OrderComponents {
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Total number of drinks across all item phrases
    pub fn drink_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn slot(&self, slot: Slot) -> &[String] {
        match slot {
            Slot::Size => &self.sizes,
            Slot::Milk => &self.milks,
            Slot::Syrup => &self.syrups,
            Slot::Topping => &self.toppings,
            Slot::ExtraShots => &self.extra_shots,
        }
    }

    pub(crate) fn push_slot(&mut self, slot: Slot, value: String) {
        match slot {
            Slot::Size => self.sizes.push(value),
            Slot::Milk => self.milks.push(value),
            Slot::Syrup => self.syrups.push(value),
            Slot::Topping => self.toppings.push(value),
            Slot::ExtraShots => self.extra_shots.push(value),
        }
    }

    /// First entry of a slot unless it is the "None" sentinel
    pub fn chosen(&self, slot: Slot) -> Option<&str> {
        self.slot(slot)
            .first()
            .map(|s| s.as_str())
            .filter(|s| !is_none_sentinel(s))
    }
}

pub(crate) fn is_none_sentinel(value: &str) -> bool {
    value.eq_ignore_ascii_case("none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chosen_skips_none_sentinel() {
        let components = OrderComponents {
            items: vec![ItemPhrase::new(1, "Latte")],
            toppings: vec!["None".to_string(), "Drizzle".to_string()],
            syrups: vec!["Vanilla".to_string()],
            ..Default::default()
        };
        assert_eq!(components.chosen(Slot::Topping), None);
        assert_eq!(components.chosen(Slot::Syrup), Some("Vanilla"));
        assert_eq!(components.chosen(Slot::Milk), None);
    }

    #[test]
    fn test_drink_count() {
        let components = OrderComponents {
            items: vec![ItemPhrase::new(2, "Latte"), ItemPhrase::new(3, "Mocha")],
            ..Default::default()
        };
        assert!(components.has_items());
        assert_eq!(components.drink_count(), 5);
        assert!(!OrderComponents::default().has_items());
    }

    #[test]
    fn test_drink_count_beyond_u32() {
        let components = OrderComponents {
            items: vec![ItemPhrase::new(u32::MAX, "Latte"), ItemPhrase::new(2, "Tea")],
            ..Default::default()
        };
        assert_eq!(components.drink_count(), u64::from(u32::MAX) + 2);
    }
}
