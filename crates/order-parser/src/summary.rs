//! Human-readable confirmation text for parsed orders

use crate::components::{is_none_sentinel, OrderComponents};

/// Render one comma-joined clause per item phrase, e.g.
/// `"2 Latte Venti with Oat Milk, 1 Mocha Venti with Oat Milk"`.
pub fn compose_summary(components: &OrderComponents) -> String {
    let modifiers = modifier_clauses(components);
    components
        .items
        .iter()
        .map(|phrase| {
            let mut parts = vec![format!("{} {}", phrase.quantity, phrase.name)];
            parts.extend(modifiers.iter().cloned());
            parts.join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Modifier clauses shared by every item phrase of the utterance
fn modifier_clauses(components: &OrderComponents) -> Vec<String> {
    let mut clauses = Vec::new();
    if !components.sizes.is_empty() {
        clauses.push(components.sizes.join(" and "));
    }
    for values in [&components.milks, &components.syrups, &components.toppings] {
        if let Some(first) = values.first() {
            if !is_none_sentinel(first) {
                clauses.push(format!("with {}", values.join(" and ")));
            }
        }
    }
    if !components.extra_shots.is_empty() {
        clauses.push(format!(
            "with {} extra shot(s)",
            components.extra_shots.join(" and ")
        ));
    }
    clauses
}
