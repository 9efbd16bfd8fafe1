//! Query parser.
//!
//! Tokens after the amount follow this grammar (markers are matched without
//! regard to case and shadow aliases of the same spelling):
//!
//! | tokens                | source    | targets                  |
//! |-----------------------|-----------|--------------------------|
//! | *(none)*              | home      | defaults minus source    |
//! | `X`                   | `X`       | defaults minus `X`       |
//! | `X Y ...`             | home      | `X Y ...`                |
//! | `from X`              | `X`       | defaults minus `X`       |
//! | `from X Y ...`        | `X`       | `Y ...`                  |
//! | `to Y ...`            | home      | `Y ...`                  |
//! | `[from] X to Y ...`   | `X`       | `Y ...`                  |

use cambio_shared::CurrencyCode;

use super::amount::parse_amount;
use super::error::ParseError;
use super::types::ConversionRequest;
use crate::settings::Settings;
use crate::settings::types::dedup;

/// Marker introducing an explicit source currency.
pub const FROM_MARKER: &str = "from";

/// Marker introducing explicit target currencies.
pub const TO_MARKER: &str = "to";

/// Parses launcher queries into conversion requests.
pub struct QueryParser;

impl QueryParser {
    /// Parses `query` against the given settings snapshot.
    ///
    /// # Errors
    ///
    /// - `ParseError::Empty` for a blank query
    /// - `ParseError::InvalidAmount` if the first token is not a number
    /// - `ParseError::UnknownCurrency` for a token that resolves to no currency
    /// - `ParseError::MissingCurrency` for a trailing `from` or `to`
    /// - `ParseError::UnexpectedToken` for tokens out of place
    pub fn parse(query: &str, settings: &Settings) -> Result<ConversionRequest, ParseError> {
        let mut tokens = query.split_whitespace();
        let amount = parse_amount(tokens.next().ok_or(ParseError::Empty)?)?;
        let rest: Vec<&str> = tokens.collect();

        let (source, targets) = match rest.iter().position(|t| is_marker(t, TO_MARKER)) {
            Some(i) => {
                let source = Self::source_before_to(&rest[..i], settings)?
                    .unwrap_or_else(|| settings.home().clone());
                let targets = Self::targets(&rest[i + 1..], settings, TO_MARKER)?;
                (source, targets)
            }
            None => match rest.as_slice() {
                [] => {
                    let source = settings.home().clone();
                    let targets = settings.defaults_excluding(&source);
                    (source, targets)
                }
                [marker] if is_marker(marker, FROM_MARKER) => {
                    return Err(ParseError::MissingCurrency(FROM_MARKER.to_string()));
                }
                [marker, source, tail @ ..] if is_marker(marker, FROM_MARKER) => {
                    let source = Self::resolve(source, settings)?;
                    let targets = if tail.is_empty() {
                        settings.defaults_excluding(&source)
                    } else {
                        Self::targets(tail, settings, FROM_MARKER)?
                    };
                    (source, targets)
                }
                // A lone currency overrides the source; defaults are the targets.
                [source] => {
                    let source = Self::resolve(source, settings)?;
                    let targets = settings.defaults_excluding(&source);
                    (source, targets)
                }
                tokens => (
                    settings.home().clone(),
                    Self::targets(tokens, settings, TO_MARKER)?,
                ),
            },
        };

        Ok(ConversionRequest {
            amount,
            source,
            targets,
        })
    }

    /// Source part of a `... to ...` query: nothing, `X` or `from X`.
    fn source_before_to(
        head: &[&str],
        settings: &Settings,
    ) -> Result<Option<CurrencyCode>, ParseError> {
        let head = match head {
            [marker] if is_marker(marker, FROM_MARKER) => {
                return Err(ParseError::MissingCurrency(FROM_MARKER.to_string()));
            }
            [marker, rest @ ..] if is_marker(marker, FROM_MARKER) => rest,
            _ => head,
        };

        match head {
            [] => Ok(None),
            [source] => Self::resolve(source, settings).map(Some),
            [_, extra, ..] => Err(ParseError::UnexpectedToken((*extra).to_string())),
        }
    }

    fn targets(
        tokens: &[&str],
        settings: &Settings,
        after: &str,
    ) -> Result<Vec<CurrencyCode>, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::MissingCurrency(after.to_string()));
        }
        let codes = tokens
            .iter()
            .map(|token| Self::resolve(token, settings))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dedup(codes))
    }

    fn resolve(token: &str, settings: &Settings) -> Result<CurrencyCode, ParseError> {
        if is_marker(token, FROM_MARKER) || is_marker(token, TO_MARKER) {
            return Err(ParseError::UnexpectedToken(token.to_string()));
        }
        settings
            .resolve(token)
            .ok_or_else(|| ParseError::UnknownCurrency(token.to_string()))
    }
}

fn is_marker(token: &str, marker: &str) -> bool {
    token.eq_ignore_ascii_case(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ConfigStore;
    use rstest::{fixture, rstest};
    use rust_decimal_macros::dec;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    fn codes(list: &[&str]) -> Vec<CurrencyCode> {
        list.iter().map(|s| code(s)).collect()
    }

    #[fixture]
    fn settings() -> Settings {
        ConfigStore::parse(
            r#"{
                "aliases": { "EUR": ["eu", "euro"], "GBP": ["quid"], "JPY": ["yen", "to"] },
                "defaults": ["EUR", "GBP", "USD"],
                "home": "USD"
            }"#,
        )
        .unwrap()
    }

    #[rstest]
    #[case("10", "USD", &["EUR", "GBP"])]
    #[case("10 eu", "EUR", &["GBP", "USD"])]
    #[case("10 quid", "GBP", &["EUR", "USD"])]
    #[case("10 chf", "CHF", &["EUR", "GBP", "USD"])]
    #[case("10 eur gbp", "USD", &["EUR", "GBP"])]
    #[case("10 yen euro quid", "USD", &["JPY", "EUR", "GBP"])]
    #[case("10 from eu", "EUR", &["GBP", "USD"])]
    #[case("10 from eu yen", "EUR", &["JPY"])]
    #[case("10 FROM eu yen quid", "EUR", &["JPY", "GBP"])]
    #[case("10 to yen", "USD", &["JPY"])]
    #[case("10 To yen euro", "USD", &["JPY", "EUR"])]
    #[case("10 eu to yen", "EUR", &["JPY"])]
    #[case("10 from eu to yen quid", "EUR", &["JPY", "GBP"])]
    #[case("10 eur gbp eur", "USD", &["EUR", "GBP"])]
    #[case("10 usd to usd", "USD", &["USD"])]
    fn test_query_forms(
        settings: Settings,
        #[case] query: &str,
        #[case] source: &str,
        #[case] targets: &[&str],
    ) {
        let request = QueryParser::parse(query, &settings).unwrap();
        assert_eq!(request.amount, dec!(10));
        assert_eq!(request.source, code(source));
        assert_eq!(request.targets, codes(targets));
    }

    #[test]
    fn test_alias_shadows_code_missing_from_settings() {
        let settings =
            ConfigStore::parse(r#"{"aliases": {"EUR": ["gbp"]}, "defaults": ["EUR"]}"#).unwrap();

        let request = QueryParser::parse("10 to gbp", &settings).unwrap();
        assert_eq!(request.targets, codes(&["EUR"]));
    }

    #[test]
    fn test_code_listed_in_aliases_is_not_shadowed() {
        let settings = ConfigStore::parse(
            r#"{"aliases": {"EUR": ["gbp"], "GBP": []}, "defaults": ["EUR"]}"#,
        )
        .unwrap();

        let request = QueryParser::parse("10 to gbp", &settings).unwrap();
        assert_eq!(request.targets, codes(&["GBP"]));
    }

    #[rstest]
    #[case("", ParseError::Empty)]
    #[case("   ", ParseError::Empty)]
    #[case("abc USD", ParseError::InvalidAmount("abc".into()))]
    #[case("eu 10", ParseError::InvalidAmount("eu".into()))]
    #[case("10 dollars", ParseError::UnknownCurrency("dollars".into()))]
    #[case("10 eur 5", ParseError::UnknownCurrency("5".into()))]
    #[case("10 from", ParseError::MissingCurrency("from".into()))]
    #[case("10 to", ParseError::MissingCurrency("to".into()))]
    #[case("10 eur to", ParseError::MissingCurrency("to".into()))]
    #[case("10 from to eur", ParseError::MissingCurrency("from".into()))]
    #[case("10 eur gbp to jpy", ParseError::UnexpectedToken("gbp".into()))]
    #[case("10 eur to jpy to gbp", ParseError::UnexpectedToken("to".into()))]
    #[case("10 eur to jpy from gbp", ParseError::UnexpectedToken("from".into()))]
    #[case("10 from from eur", ParseError::UnexpectedToken("from".into()))]
    #[case("10 eur from gbp", ParseError::UnexpectedToken("from".into()))]
    fn test_rejected_queries(settings: Settings, #[case] query: &str, #[case] expected: ParseError) {
        assert_eq!(QueryParser::parse(query, &settings), Err(expected));
    }

    #[rstest]
    fn test_alias_lookup_ignores_case(settings: Settings) {
        let lower = QueryParser::parse("10 eu", &settings).unwrap();
        let upper = QueryParser::parse("10 EU", &settings).unwrap();
        assert_eq!(lower, upper);
    }

    #[rstest]
    fn test_markers_shadow_aliases(settings: Settings) {
        // "to" is configured as a JPY alias but stays a marker.
        let request = QueryParser::parse("10 eur to gbp", &settings).unwrap();
        assert_eq!(request.source, code("EUR"));
        assert_eq!(request.targets, codes(&["GBP"]));
    }

    #[rstest]
    fn test_extra_whitespace_is_ignored(settings: Settings) {
        let request = QueryParser::parse("  1,250.75 \t eu   gbp ", &settings).unwrap();
        assert_eq!(request.amount, dec!(1250.75));
        assert_eq!(request.targets, codes(&["EUR", "GBP"]));
    }

    #[rstest]
    fn test_negative_amount(settings: Settings) {
        let request = QueryParser::parse("-3.5 quid", &settings).unwrap();
        assert_eq!(request.amount, dec!(-3.5));
        assert_eq!(request.source, code("GBP"));
    }

    #[test]
    fn test_source_equal_to_only_default_leaves_no_targets() {
        let settings = Settings::default();
        let request = QueryParser::parse("5 usd", &settings).unwrap();
        assert_eq!(request.source, code("USD"));
        assert!(request.targets.is_empty());
    }

    #[test]
    fn test_lone_alias_is_source_override() {
        let settings =
            ConfigStore::parse(r#"{"aliases": {"EUR": ["eu"]}, "defaults": ["EUR", "GBP"]}"#)
                .unwrap();
        let request = QueryParser::parse("20 eu", &settings).unwrap();

        assert_eq!(request.amount, dec!(20));
        assert_eq!(request.source, code("EUR"));
        assert_eq!(request.targets, codes(&["GBP"]));
    }
}
