//! Price model for parsed orders

use crate::components::{OrderComponents, Slot};
use crate::error::PricingError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the base price of an item phrase is obtained
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum BasePrice {
    /// Uniform draw in `[min, max)`, independently for every item phrase
    Random { min: f64, max: f64 },
    /// Fixed price per canonical item name
    Table {
        prices: HashMap<String, f64>,
        fallback: f64,
    },
}

impl Default for BasePrice {
    fn default() -> Self {
        BasePrice::Random { min: 2.5, max: 4.5 }
    }
}

/// Surcharges and base price policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    pub base: BasePrice,
    /// Surcharge by size name; unknown sizes cost nothing extra
    pub sizes: HashMap<String, f64>,
    pub topping: f64,
    pub syrup: f64,
    pub per_shot: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let sizes = [("Short", 0.0), ("Tall", 0.5), ("Grande", 1.0), ("Venti", 1.5)]
            .into_iter()
            .map(|(name, price)| (name.to_string(), price))
            .collect();
        Self {
            base: BasePrice::default(),
            sizes,
            topping: 0.5,
            syrup: 0.3,
            per_shot: 0.5,
        }
    }
}

impl PricingConfig {
    /// Deterministic pricing: same base price for every item on the menu
    pub fn flat(base: f64) -> Self {
        Self::default().with_flat_base(base)
    }

    /// Replace only the base price policy, keeping the configured surcharges
    pub fn with_flat_base(mut self, base: f64) -> Self {
        self.base = BasePrice::Table {
            prices: HashMap::new(),
            fallback: base,
        };
        self
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let is_valid = |p: f64| p.is_finite() && p >= 0.0;
        match &self.base {
            BasePrice::Random { min, max } => {
                if !(is_valid(*min) && max.is_finite()) || min >= max {
                    return Err(PricingError::InvalidRange {
                        min: *min,
                        max: *max,
                    });
                }
            }
            BasePrice::Table { prices, fallback } => {
                if !is_valid(*fallback) {
                    return Err(PricingError::InvalidPrice("fallback".to_string()));
                }
                if let Some((name, _)) = prices.iter().find(|(_, p)| !is_valid(**p)) {
                    return Err(PricingError::InvalidPrice(name.clone()));
                }
            }
        }
        let surcharges = [
            ("topping", self.topping),
            ("syrup", self.syrup),
            ("per_shot", self.per_shot),
        ];
        if let Some((name, _)) = surcharges.iter().find(|(_, p)| !is_valid(*p)) {
            return Err(PricingError::InvalidPrice(name.to_string()));
        }
        if let Some((name, _)) = self.sizes.iter().find(|(_, p)| !is_valid(**p)) {
            return Err(PricingError::InvalidPrice(name.clone()));
        }
        Ok(())
    }

    /// Surcharge for a size name, matched case-insensitively
    fn size_surcharge(&self, size: &str) -> Option<f64> {
        self.sizes
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(size))
            .map(|(_, p)| *p)
    }
}

/// Price of one item phrase with every adjustment kept
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineCharge {
    pub quantity: u32,
    pub item: String,
    pub unit_base: f64,
    pub size_adj: f64,
    pub topping_adj: f64,
    pub syrup_adj: f64,
    pub shot_adj: f64,
    pub line_total: f64,
}

impl LineCharge {
    pub fn unit_price(&self) -> f64 {
        self.unit_base + self.size_adj + self.topping_adj + self.shot_adj + self.syrup_adj
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub lines: Vec<LineCharge>,
}

impl PriceBreakdown {
    /// Full precision; round only for display
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.line_total).sum()
    }
}

/// Computes totals from [`OrderComponents`]
pub struct PriceCalculator {
    config: PricingConfig,
    rng: StdRng,
}

impl PriceCalculator {
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Reproducible random base prices
    pub fn with_seed(config: PricingConfig, seed: u64) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Price every item phrase. Modifiers apply to the whole utterance.
    pub fn price(&mut self, components: &OrderComponents) -> Result<PriceBreakdown, PricingError> {
        if !components.has_items() {
            return Err(PricingError::NoItems);
        }

        let size_adj = components
            .sizes
            .first()
            .and_then(|size| self.config.size_surcharge(size))
            .unwrap_or(0.0);
        let topping_adj = if components.chosen(Slot::Topping).is_some() {
            self.config.topping
        } else {
            0.0
        };
        let syrup_adj = if components.chosen(Slot::Syrup).is_some() {
            self.config.syrup
        } else {
            0.0
        };
        let shots: u32 = components
            .extra_shots
            .iter()
            .filter_map(|s| s.parse::<u32>().ok())
            .sum();
        let shot_adj = self.config.per_shot * f64::from(shots);

        let mut breakdown = PriceBreakdown::default();
        for phrase in &components.items {
            let unit_base = self.base_price(&phrase.name);
            let mut line = LineCharge {
                quantity: phrase.quantity,
                item: phrase.name.clone(),
                unit_base,
                size_adj,
                topping_adj,
                syrup_adj,
                shot_adj,
                line_total: 0.0,
            };
            line.line_total = line.unit_price() * f64::from(phrase.quantity);
            tracing::debug!(
                item = %line.item,
                quantity = line.quantity,
                line_total = line.line_total,
                "priced item phrase"
            );
            breakdown.lines.push(line);
        }
        Ok(breakdown)
    }

    /// Convenience for callers that only need the total
    pub fn total(&mut self, components: &OrderComponents) -> Result<f64, PricingError> {
        self.price(components).map(|b| b.total())
    }

    fn base_price(&mut self, item: &str) -> f64 {
        match &self.config.base {
            BasePrice::Random { min, max } => self.rng.gen_range(*min..*max),
            BasePrice::Table { prices, fallback } => prices
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(item))
                .map(|(_, p)| *p)
                .unwrap_or(*fallback),
        }
    }
}

/// Two-decimal display form used in spoken totals
pub fn format_price(amount: f64) -> String {
    format!("{:.2}", amount)
}
