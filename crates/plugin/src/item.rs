//! Result items handed back to the launcher.

use cambio_shared::Money;
use serde::Serialize;

/// Identifier shared by every item this plugin produces.
pub const PLUGIN_ID: &str = "currency_converter";

/// One line in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    /// Stable item identifier.
    pub id: String,
    /// Main text, e.g. `"10.95 EUR"`.
    pub text: String,
    /// Secondary text, e.g. `"12.00 USD = 10.95 EUR"`.
    pub subtext: String,
    /// Icons to show, most preferred first.
    pub icon_urls: Vec<String>,
    /// Actions the user can trigger on the item.
    pub actions: Vec<ItemAction>,
}

/// Action attached to a result item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemAction {
    /// Put `text` on the clipboard.
    CopyToClipboard {
        /// Label shown for the action.
        label: String,
        /// Text to copy.
        text: String,
    },
}

impl ResultItem {
    /// Builds the item for one converted amount.
    #[must_use]
    pub fn conversion(source: &Money, converted: &Money, icon_url: &str) -> Self {
        let text = converted.to_string();
        Self {
            id: format!("{PLUGIN_ID}.{}", converted.currency),
            subtext: format!("{source} = {converted}"),
            icon_urls: vec![icon_url.to_string()],
            actions: vec![ItemAction::CopyToClipboard {
                label: "Copy to clipboard".to_string(),
                text: text.clone(),
            }],
            text,
        }
    }
}
