//! Case-insensitive alias lookup table.

use std::collections::HashMap;

use cambio_shared::CurrencyCode;
use tracing::warn;

/// Mapping from lowercased alias to canonical currency code.
///
/// Canonical codes registered with [`AliasTable::insert_canonical`] always
/// resolve to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, CurrencyCode>,
}

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` for `code`. A later registration of the same alias
    /// for a different code replaces the earlier one.
    ///
    /// Returns the code the alias pointed to before, if it changed.
    pub fn insert(&mut self, alias: &str, code: CurrencyCode) -> Option<CurrencyCode> {
        let key = alias.to_lowercase();
        match self.entries.insert(key, code.clone()) {
            Some(previous) if previous != code => {
                warn!(
                    alias = %alias,
                    previous = %previous,
                    current = %code,
                    "Alias claimed by more than one currency, later entry wins"
                );
                Some(previous)
            }
            _ => None,
        }
    }

    /// Makes `code` resolve to itself, overriding any alias of the same spelling.
    pub fn insert_canonical(&mut self, code: &CurrencyCode) {
        self.insert(code.as_str(), code.clone());
    }

    /// Looks up an alias, ignoring case.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&CurrencyCode> {
        self.entries.get(&alias.to_lowercase())
    }

    /// Resolves a user token to a canonical code.
    ///
    /// Aliases are tried first; otherwise any three-letter token is taken as a
    /// code in its own right. An alias spelled like a code that was never
    /// registered as canonical therefore shadows that code.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<CurrencyCode> {
        self.get(token)
            .cloned()
            .or_else(|| CurrencyCode::parse(token).ok())
    }

    /// Number of aliases, including canonical self-mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no alias is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(alias, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CurrencyCode)> {
        self.entries.iter().map(|(alias, code)| (alias.as_str(), code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn test_lookup_ignores_case() {
        let mut table = AliasTable::new();
        table.insert("Eu", code("EUR"));

        assert_eq!(table.get("eu"), Some(&code("EUR")));
        assert_eq!(table.get("EU"), Some(&code("EUR")));
        assert_eq!(table.get("eU"), Some(&code("EUR")));
    }

    #[test]
    fn test_non_ascii_alias() {
        let mut table = AliasTable::new();
        table.insert("€", code("EUR"));
        table.insert("Ωmega", code("GRD"));

        assert_eq!(table.get("€"), Some(&code("EUR")));
        assert_eq!(table.get("ωMEGA"), Some(&code("GRD")));
    }

    #[test]
    fn test_later_entry_wins() {
        let mut table = AliasTable::new();
        assert_eq!(table.insert("buck", code("USD")), None);
        assert_eq!(table.insert("buck", code("CAD")), Some(code("USD")));

        assert_eq!(table.get("buck"), Some(&code("CAD")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_same_code_twice_is_not_an_override() {
        let mut table = AliasTable::new();
        table.insert("quid", code("GBP"));
        assert_eq!(table.insert("QUID", code("GBP")), None);
    }

    #[test]
    fn test_canonical_beats_alias() {
        let mut table = AliasTable::new();
        table.insert("usd", code("EUR"));
        table.insert_canonical(&code("USD"));

        assert_eq!(table.get("usd"), Some(&code("USD")));
    }

    #[test]
    fn test_alias_shadows_unregistered_code() {
        let mut table = AliasTable::new();
        table.insert("gbp", code("EUR"));

        assert_eq!(table.resolve("GBP"), Some(code("EUR")));

        table.insert_canonical(&code("GBP"));
        assert_eq!(table.resolve("GBP"), Some(code("GBP")));
    }

    #[test]
    fn test_resolve_falls_back_to_code_pattern() {
        let mut table = AliasTable::new();
        table.insert("yen", code("JPY"));

        assert_eq!(table.resolve("yen"), Some(code("JPY")));
        assert_eq!(table.resolve("chf"), Some(code("CHF")));
        assert_eq!(table.resolve("swiss"), None);
        assert_eq!(table.resolve("12"), None);
    }
}
