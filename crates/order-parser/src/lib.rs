//! Order parser for spoken coffee orders
//!
//! This crate turns a speech transcription into structured order attributes
//! (item, quantity, size, milk, syrup, topping, extra shots), prices them and
//! renders a confirmation summary.

mod catalog;
mod components;
mod error;
mod loader;
mod parser;
mod pricing;
mod summary;

pub use catalog::{MenuCatalog, MenuConfig};
pub use components::{ItemPhrase, OrderComponents, Slot};
pub use error::{CatalogError, ParserError, PricingError};
pub use loader::{load_menu_file, load_menu_str, LoadedMenu};
pub use parser::UtteranceParser;
pub use pricing::{
    format_price, BasePrice, LineCharge, PriceBreakdown, PriceCalculator, PricingConfig,
};
pub use summary::compose_summary;

/// Parse an utterance against the stock menu
pub fn parse_order(text: &str) -> Result<OrderComponents, ParserError> {
    let catalog = MenuCatalog::default();
    let parser = UtteranceParser::new(&catalog)?;
    Ok(parser.parse(text))
}

/// Quick description of how an utterance parses, for diagnostics
pub fn describe_order(text: &str) -> Result<String, ParserError> {
    let components = parse_order(text)?;
    if !components.has_items() {
        return Ok(format!("No menu items recognised in {:?}", text));
    }
    Ok(format!(
        "Parsed: {} ({} drink(s))",
        compose_summary(&components),
        components.drink_count()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_orders() {
        let test_cases = vec![
            ("a latte please", 1),
            ("2 Lattes Venti with Oat Milk", 1),
            ("three mochas and an espresso", 2),
            ("caramel macchiato venti with whipped cream", 1),
            ("can I get a tall flat white with almond milk", 1),
            ("just water", 0),
        ];

        for (order, expected_items) in test_cases {
            let components = parse_order(order).unwrap();
            assert_eq!(components.items.len(), expected_items, "order {order:?}");
        }
    }

    #[test]
    fn test_describe_order() {
        assert_eq!(
            describe_order("2 lattes").unwrap(),
            "Parsed: 2 Latte (2 drink(s))"
        );
        assert!(describe_order("hello").unwrap().starts_with("No menu items"));
    }

    #[test]
    fn test_describe_order_with_huge_quantities() {
        assert_eq!(
            describe_order("4294967295 lattes and 2 teas").unwrap(),
            "Parsed: 4294967295 Latte, 2 Tea (4294967297 drink(s))"
        );
    }
}
