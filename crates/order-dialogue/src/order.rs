//! Order accumulated over one session

use order_parser::{format_price, OrderComponents, PriceBreakdown};
use serde::Serialize;

/// Running summary and price. Mutated only by the dialogue session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Order {
    summary: String,
    total: f64,
    parts: Vec<OrderComponents>,
    lines: usize,
}

impl Order {
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Full precision running total
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Parsed utterances that make up the current summary
    pub fn parts(&self) -> &[OrderComponents] {
        &self.parts
    }

    /// Number of priced item phrases in the current summary
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }

    /// Add a confirmed-to-be utterance, joining its clause with " and "
    pub(crate) fn add(
        &mut self,
        components: OrderComponents,
        price: &PriceBreakdown,
        clause: &str,
    ) {
        if self.summary.is_empty() {
            self.summary = clause.to_string();
        } else {
            self.summary.push_str(" and ");
            self.summary.push_str(clause);
        }
        self.total += price.total();
        self.lines += price.lines.len();
        self.parts.push(components);
    }

    /// Drop the summary. The total is kept unless `reset_price` is set.
    pub(crate) fn discard(&mut self, reset_price: bool) {
        self.summary.clear();
        self.parts.clear();
        self.lines = 0;
        if reset_price {
            self.total = 0.0;
        }
    }

    /// `"<summary>. The total price is $<total>."`
    pub fn receipt(&self) -> String {
        format!(
            "{}. The total price is ${}.",
            self.summary,
            format_price(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_parser::{ItemPhrase, LineCharge};

    fn priced(item: &str, total: f64) -> (OrderComponents, PriceBreakdown) {
        let components = OrderComponents {
            items: vec![ItemPhrase::new(1, item)],
            ..Default::default()
        };
        let breakdown = PriceBreakdown {
            lines: vec![LineCharge {
                quantity: 1,
                item: item.to_string(),
                unit_base: total,
                size_adj: 0.0,
                topping_adj: 0.0,
                syrup_adj: 0.0,
                shot_adj: 0.0,
                line_total: total,
            }],
        };
        (components, breakdown)
    }

    #[test]
    fn test_add_and_receipt() {
        let mut order = Order::default();
        let (c, p) = priced("Latte", 3.25);
        order.add(c, &p, "1 Latte");
        let (c, p) = priced("Tea", 2.5);
        order.add(c, &p, "1 Tea");
        assert_eq!(order.summary(), "1 Latte and 1 Tea");
        assert_eq!(order.line_count(), 2);
        assert_eq!(order.parts().len(), 2);
        assert_eq!(
            order.receipt(),
            "1 Latte and 1 Tea. The total price is $5.75."
        );
    }

    #[test]
    fn test_discard_price_policy() {
        let mut order = Order::default();
        let (c, p) = priced("Latte", 3.0);
        order.add(c, &p, "1 Latte");
        order.discard(false);
        assert!(order.is_empty());
        assert_eq!(order.total(), 3.0);

        order.discard(true);
        assert_eq!(order.total(), 0.0);
        assert_eq!(order.line_count(), 0);
    }
}
