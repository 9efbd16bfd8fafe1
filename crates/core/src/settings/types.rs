//! Settings snapshot type.

use cambio_shared::CurrencyCode;

use super::alias::AliasTable;

/// One immutable, validated view of the settings file.
///
/// A new snapshot is built on every load and replaces the previous one as a
/// whole; nothing mutates a snapshot after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    aliases: AliasTable,
    defaults: Vec<CurrencyCode>,
    home: CurrencyCode,
}

impl Settings {
    /// Creates a snapshot, applying the built-in fallbacks.
    ///
    /// An empty `defaults` list becomes `[USD]`. The home currency and every
    /// default are registered as canonical codes in the alias table.
    #[must_use]
    pub fn new(mut aliases: AliasTable, defaults: Vec<CurrencyCode>, home: CurrencyCode) -> Self {
        let mut defaults = dedup(defaults);
        if defaults.is_empty() {
            defaults.push(CurrencyCode::fallback());
        }

        for code in defaults.iter().chain(std::iter::once(&home)) {
            aliases.insert_canonical(code);
        }

        Self {
            aliases,
            defaults,
            home,
        }
    }

    /// Alias table.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Default target currencies, in configured order. Never empty.
    #[must_use]
    pub fn defaults(&self) -> &[CurrencyCode] {
        &self.defaults
    }

    /// Implicit source currency.
    #[must_use]
    pub const fn home(&self) -> &CurrencyCode {
        &self.home
    }

    /// Resolves a user token through the alias table or the code pattern.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<CurrencyCode> {
        self.aliases.resolve(token)
    }

    /// Default targets with `source` removed.
    #[must_use]
    pub fn defaults_excluding(&self, source: &CurrencyCode) -> Vec<CurrencyCode> {
        self.defaults
            .iter()
            .filter(|code| *code != source)
            .cloned()
            .collect()
    }
}

impl Default for Settings {
    /// Built-in settings: no aliases, defaults `[USD]`, home `USD`.
    fn default() -> Self {
        Self::new(AliasTable::new(), Vec::new(), CurrencyCode::fallback())
    }
}

/// Removes repeated codes, keeping the first occurrence.
pub(crate) fn dedup(codes: impl IntoIterator<Item = CurrencyCode>) -> Vec<CurrencyCode> {
    let mut unique: Vec<CurrencyCode> = Vec::new();
    for code in codes {
        if !unique.contains(&code) {
            unique.push(code);
        }
    }
    unique
}
