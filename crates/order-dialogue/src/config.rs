use serde::{Deserialize, Serialize};

/// Everything the session says, with `{order}` and `{receipt}` placeholders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Prompts {
    pub greeting: String,
    pub confirm: String,
    pub confirm_updated: String,
    pub no_item: String,
    pub no_item_addition: String,
    pub not_caught: String,
    pub add_more: String,
    pub what_to_add: String,
    pub reorder: String,
    pub closing: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            greeting: "Welcome! What would you like to order today?".into(),
            confirm: "Your current order is: {order}. Is this correct? \
                      Please say 'Yes' to confirm or 'No' to re-order."
                .into(),
            confirm_updated: "Your updated order is: {order}. Is this correct? \
                              Please say 'Yes' to confirm or 'No' to modify."
                .into(),
            no_item: "Sorry, we don't have that item. Please try ordering again.".into(),
            no_item_addition: "Sorry, we don't have that item. Please try ordering something else."
                .into(),
            not_caught: "Sorry, I didn't catch that. Please try again.".into(),
            add_more: "Would you like to add anything else to your order? \
                       Please say 'Yes' to add more or 'No' to finalize the order."
                .into(),
            what_to_add: "What would you like to add?".into(),
            reorder: "Okay, let's start over. What would you like to order?".into(),
            closing: "Thanks! Your final order is: {receipt} Have a great day!".into(),
        }
    }
}

impl Prompts {
    pub(crate) fn confirm(&self, summary: &str, updated: bool) -> String {
        let template = if updated {
            &self.confirm_updated
        } else {
            &self.confirm
        };
        template.replace("{order}", summary)
    }

    pub(crate) fn closing(&self, receipt: &str) -> String {
        self.closing.replace("{receipt}", receipt)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Reset the running total together with the summary when the customer
    /// rejects the order. When false the old total carries into the new order.
    pub reset_price_on_reorder: bool,
    /// Speak the last prompt again when a listen attempt times out
    pub repeat_prompt_on_timeout: bool,
    pub prompts: Prompts,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reset_price_on_reorder: true,
            repeat_prompt_on_timeout: true,
            prompts: Prompts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        let prompts = Prompts::default();
        assert_eq!(
            prompts.confirm("1 Latte", false),
            "Your current order is: 1 Latte. Is this correct? \
             Please say 'Yes' to confirm or 'No' to re-order."
        );
        assert!(prompts.confirm("1 Latte", true).starts_with("Your updated order is: 1 Latte."));
        assert_eq!(
            prompts.closing("1 Tea. The total price is $3.00."),
            "Thanks! Your final order is: 1 Tea. The total price is $3.00. Have a great day!"
        );
    }

    #[test]
    fn test_partial_config_keeps_default_prompts() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"reset_price_on_reorder": false}"#).unwrap();
        assert!(!config.reset_price_on_reorder);
        assert!(config.repeat_prompt_on_timeout);
        assert_eq!(config.prompts, Prompts::default());
    }
}
