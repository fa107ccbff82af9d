//! Menu vocabulary used for slot classification

use crate::error::{CatalogError, Result};
use crate::pricing::PricingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable description of a menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    /// Canonical item names, some multi-word
    pub items: Vec<String>,
    pub sizes: Vec<String>,
    pub milks: Vec<String>,
    pub syrups: Vec<String>,
    pub toppings: Vec<String>,
    /// Extra espresso shot counts, as digit strings
    pub shot_counts: Vec<String>,
    /// Price model for this menu
    pub pricing: PricingConfig,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: strings(&[
                "Espresso",
                "Cappuccino",
                "Latte",
                "Americano",
                "Mocha",
                "Flat White",
                "Macchiato",
                "Caramel Macchiato",
                "Frappuccino",
                "Shaken Espresso",
                "Tea",
                "Hot Chocolate",
            ]),
            sizes: strings(&["Short", "Tall", "Grande", "Venti"]),
            milks: strings(&[
                "None",
                "2% Milk",
                "Half and Half",
                "Whole Milk",
                "Skim Milk",
                "Coconut Milk",
                "Almond Milk",
                "Soy Milk",
                "Oat Milk",
            ]),
            syrups: strings(&[
                "None",
                "Vanilla",
                "Caramel",
                "Hazelnut",
                "Peppermint",
                "Classic",
                "Mocha",
            ]),
            toppings: strings(&[
                "None",
                "Drizzle",
                "Whipped Cream",
                "Cold Foam",
                "Cinnamon Powder",
                "Chocolate Powder",
            ]),
            shot_counts: strings(&["0", "1", "2", "3", "4", "5"]),
            pricing: PricingConfig::default(),
        }
    }
}

/// Case-insensitive lookup table from phrase to canonical spelling
#[derive(Debug, Clone, Default)]
struct Vocabulary {
    name: &'static str,
    canonical: Vec<String>,
    index: HashMap<String, usize>,
    max_tokens: usize,
}

impl Vocabulary {
    fn build(name: &'static str, entries: &[String]) -> Result<Self> {
        let mut vocab = Vocabulary {
            name,
            ..Default::default()
        };
        for entry in entries {
            let normalized = normalize(entry);
            if normalized.is_empty() {
                return Err(CatalogError::EmptyEntry(name));
            }
            if vocab.index.contains_key(&normalized) {
                return Err(CatalogError::Duplicate {
                    vocabulary: name,
                    entry: entry.clone(),
                });
            }
            let tokens = normalized.split(' ').count();
            vocab.max_tokens = vocab.max_tokens.max(tokens);
            vocab.index.insert(normalized, vocab.canonical.len());
            vocab.canonical.push(entry.trim().to_string());
        }
        Ok(vocab)
    }

    fn lookup(&self, text: &str) -> Option<&str> {
        self.index
            .get(&normalize(text))
            .map(|&i| self.canonical[i].as_str())
    }

    fn overlaps<'a>(&'a self, other: &'a Vocabulary) -> impl Iterator<Item = &'a str> + 'a {
        self.index
            .keys()
            .filter(move |k| other.index.contains_key(*k))
            .map(|k| k.as_str())
    }
}

/// Lower-case and collapse whitespace so "Oat  MILK" and "oat milk" compare equal
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Immutable menu vocabulary. Built once and shared by reference.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vocabulary,
    sizes: Vocabulary,
    milks: Vocabulary,
    syrups: Vocabulary,
    toppings: Vocabulary,
    shot_counts: Vocabulary,
}

impl MenuCatalog {
    /// Build a catalog, validating every vocabulary
    pub fn new(config: &MenuConfig) -> Result<Self> {
        if config.items.is_empty() {
            return Err(CatalogError::NoItems);
        }
        if let Some(bad) = config
            .shot_counts
            .iter()
            .find(|s| s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(CatalogError::InvalidShotCount(bad.clone()));
        }

        let catalog = Self {
            items: Vocabulary::build("item", &config.items)?,
            sizes: Vocabulary::build("size", &config.sizes)?,
            milks: Vocabulary::build("milk", &config.milks)?,
            syrups: Vocabulary::build("syrup", &config.syrups)?,
            toppings: Vocabulary::build("topping", &config.toppings)?,
            shot_counts: Vocabulary::build("shot count", &config.shot_counts)?,
        };
        catalog.log_overlaps();
        Ok(catalog)
    }

    fn vocabularies(&self) -> [&Vocabulary; 6] {
        [
            &self.items,
            &self.sizes,
            &self.milks,
            &self.syrups,
            &self.toppings,
            &self.shot_counts,
        ]
    }

    fn log_overlaps(&self) {
        let vocabs = self.vocabularies();
        for (i, a) in vocabs.iter().enumerate() {
            for b in &vocabs[i + 1..] {
                for shared in a.overlaps(b) {
                    tracing::debug!(
                        entry = shared,
                        first = a.name,
                        second = b.name,
                        "menu entry appears in two vocabularies; {} wins",
                        a.name
                    );
                }
            }
        }
    }

    /// Canonical item name for `text`, accepting a trailing plural `s`
    pub fn is_item(&self, text: &str) -> Option<&str> {
        self.items.lookup(text).or_else(|| {
            let trimmed = text.trim_end();
            let singular = trimmed
                .strip_suffix('s')
                .or_else(|| trimmed.strip_suffix('S'))?;
            self.items.lookup(singular)
        })
    }

    pub fn is_size(&self, text: &str) -> Option<&str> {
        self.sizes.lookup(text)
    }

    pub fn is_milk(&self, text: &str) -> Option<&str> {
        self.milks.lookup(text)
    }

    pub fn is_syrup(&self, text: &str) -> Option<&str> {
        self.syrups.lookup(text)
    }

    pub fn is_topping(&self, text: &str) -> Option<&str> {
        self.toppings.lookup(text)
    }

    pub fn is_shot_count(&self, text: &str) -> Option<&str> {
        self.shot_counts.lookup(text)
    }

    /// Longest item name, in tokens
    pub fn max_item_tokens(&self) -> usize {
        self.items.max_tokens
    }

    /// Longest entry in any vocabulary, in tokens
    pub fn max_phrase_len(&self) -> usize {
        self.vocabularies()
            .iter()
            .map(|v| v.max_tokens)
            .max()
            .unwrap_or(1)
    }

    /// Canonical item names in menu order
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.canonical.iter().map(|s| s.as_str())
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        let config = MenuConfig::default();
        Self {
            items: Vocabulary::build("item", &config.items).unwrap_or_default(),
            sizes: Vocabulary::build("size", &config.sizes).unwrap_or_default(),
            milks: Vocabulary::build("milk", &config.milks).unwrap_or_default(),
            syrups: Vocabulary::build("syrup", &config.syrups).unwrap_or_default(),
            toppings: Vocabulary::build("topping", &config.toppings).unwrap_or_default(),
            shot_counts: Vocabulary::build("shot count", &config.shot_counts)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_are_case_insensitive() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.is_item("latte"), Some("Latte"));
        assert_eq!(catalog.is_item("CARAMEL macchiato"), Some("Caramel Macchiato"));
        assert_eq!(catalog.is_size("venti"), Some("Venti"));
        assert_eq!(catalog.is_milk("oat  milk"), Some("Oat Milk"));
        assert_eq!(catalog.is_syrup("Hazelnut"), Some("Hazelnut"));
        assert_eq!(catalog.is_topping("whipped cream"), Some("Whipped Cream"));
        assert_eq!(catalog.is_shot_count("3"), Some("3"));
        assert_eq!(catalog.is_shot_count("9"), None);
    }

    #[test]
    fn test_plural_items() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.is_item("Lattes"), Some("Latte"));
        assert_eq!(catalog.is_item("flat whites"), Some("Flat White"));
        assert_eq!(catalog.is_item("espressos"), Some("Espresso"));
        assert_eq!(catalog.is_item("s"), None);
        // plural stripping is for items only
        assert_eq!(catalog.is_size("ventis"), None);
    }

    #[test]
    fn test_phrase_lengths() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.max_item_tokens(), 2);
        // "Half and Half"
        assert_eq!(catalog.max_phrase_len(), 3);
        assert_eq!(catalog.items().count(), 12);
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut config = MenuConfig::default();
        config.sizes.push("tall".to_string());
        let err = MenuCatalog::new(&config).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Duplicate {
                vocabulary: "size",
                entry: "tall".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_bad_entries() {
        let mut config = MenuConfig::default();
        config.milks.push("   ".to_string());
        assert_eq!(
            MenuCatalog::new(&config).unwrap_err(),
            CatalogError::EmptyEntry("milk")
        );

        let mut config = MenuConfig::default();
        config.shot_counts.push("two".to_string());
        assert_eq!(
            MenuCatalog::new(&config).unwrap_err(),
            CatalogError::InvalidShotCount("two".to_string())
        );

        let config = MenuConfig {
            items: Vec::new(),
            ..Default::default()
        };
        assert_eq!(MenuCatalog::new(&config).unwrap_err(), CatalogError::NoItems);
    }

    #[test]
    fn test_overlaps_are_allowed() {
        // "Mocha" is both an item and a syrup in the stock menu
        let catalog = MenuCatalog::new(&MenuConfig::default()).unwrap();
        assert_eq!(catalog.is_item("mocha"), Some("Mocha"));
        assert_eq!(catalog.is_syrup("mocha"), Some("Mocha"));
    }
}
