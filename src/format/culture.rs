//! Culture-specific number conventions
//!
//! Currency symbols, separators and the magnitude words used by the
//! friendly number formatter are carried in an explicit [`Culture`] value
//! instead of being read from the process locale.

use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `¥1,234.56`
    Prefix,
    /// `1.234,56 €`
    SuffixSpaced,
}

/// Number formatting conventions for one culture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
    pub currency_symbol: String,
    pub group_separator: String,
    pub decimal_separator: String,
    /// Fraction digits used by currency formatting when the caller does not pick one
    pub currency_decimals: usize,
    pub symbol_position: SymbolPosition,
    /// Magnitude words for friendly numbers, largest first
    #[serde(default)]
    pub magnitudes: Vec<Magnitude>,
}

/// A power-of-ten threshold and the word appended when a value reaches it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magnitude {
    pub threshold: f64,
    pub suffix: String,
}

impl Magnitude {
    fn new(threshold: f64, suffix: &str) -> Self {
        Self {
            threshold,
            suffix: suffix.to_string(),
        }
    }
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

fn chinese_magnitudes() -> Vec<Magnitude> {
    vec![Magnitude::new(1e8, "亿"), Magnitude::new(1e4, "万")]
}

fn western_magnitudes() -> Vec<Magnitude> {
    vec![
        Magnitude::new(1e9, "B"),
        Magnitude::new(1e6, "M"),
        Magnitude::new(1e3, "K"),
    ]
}

impl Culture {
    fn builtin(
        name: &str,
        symbol: &str,
        group: &str,
        decimal: &str,
        decimals: usize,
        position: SymbolPosition,
        magnitudes: Vec<Magnitude>,
    ) -> Self {
        Self {
            name: name.to_string(),
            currency_symbol: symbol.to_string(),
            group_separator: group.to_string(),
            decimal_separator: decimal.to_string(),
            currency_decimals: decimals,
            symbol_position: position,
            magnitudes,
        }
    }

    /// Culture-neutral conventions (`¤1,234.56`)
    pub fn invariant() -> Self {
        Self::builtin(
            "",
            "¤",
            ",",
            ".",
            2,
            SymbolPosition::Prefix,
            western_magnitudes(),
        )
    }

    pub fn zh_cn() -> Self {
        Self::builtin(
            "zh-CN",
            "¥",
            ",",
            ".",
            2,
            SymbolPosition::Prefix,
            chinese_magnitudes(),
        )
    }

    pub fn en_us() -> Self {
        Self::builtin(
            "en-US",
            "$",
            ",",
            ".",
            2,
            SymbolPosition::Prefix,
            western_magnitudes(),
        )
    }

    /// Look up one of the built-in cultures by its BCP-47 name, ignoring case
    pub fn lookup(name: &str) -> Option<Self> {
        let culture = match name.to_ascii_lowercase().as_str() {
            "" | "invariant" => Self::invariant(),
            "zh-cn" | "zh-hans" | "zh" => Self::zh_cn(),
            "zh-tw" | "zh-hant" => Self::builtin(
                "zh-TW",
                "$",
                ",",
                ".",
                2,
                SymbolPosition::Prefix,
                chinese_magnitudes(),
            ),
            "en-us" | "en" => Self::en_us(),
            "en-gb" => Self::builtin(
                "en-GB",
                "£",
                ",",
                ".",
                2,
                SymbolPosition::Prefix,
                western_magnitudes(),
            ),
            "ja-jp" | "ja" => Self::builtin(
                "ja-JP",
                "￥",
                ",",
                ".",
                0,
                SymbolPosition::Prefix,
                chinese_magnitudes(),
            ),
            "de-de" | "de" => Self::builtin(
                "de-DE",
                "€",
                ".",
                ",",
                2,
                SymbolPosition::SuffixSpaced,
                western_magnitudes(),
            ),
            "fr-fr" | "fr" => Self::builtin(
                "fr-FR",
                "€",
                NARROW_NBSP,
                ",",
                2,
                SymbolPosition::SuffixSpaced,
                western_magnitudes(),
            ),
            _ => return None,
        };
        Some(culture)
    }

    /// Like [`Culture::lookup`] but falls back to the invariant culture
    pub fn lookup_or_invariant(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::debug!("Unknown culture '{}', using invariant conventions", name);
            Self::invariant()
        })
    }

    /// Wrap an already formatted, unsigned amount with the currency symbol
    pub fn place_symbol(&self, amount: &str, negative: bool) -> String {
        let sign = if negative { "-" } else { "" };
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{amount}", self.currency_symbol),
            SymbolPosition::SuffixSpaced => {
                format!("{sign}{amount}{NBSP}{}", self.currency_symbol)
            }
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::zh_cn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Culture::lookup("EN-us").unwrap().currency_symbol, "$");
        assert_eq!(Culture::lookup("zh-CN").unwrap().currency_symbol, "¥");
        assert!(Culture::lookup("xx-YY").is_none());
    }

    #[test]
    fn test_unknown_falls_back_to_invariant() {
        let culture = Culture::lookup_or_invariant("tlh-KL");
        assert_eq!(culture.currency_symbol, "¤");
    }

    #[test]
    fn test_place_symbol() {
        let us = Culture::en_us();
        assert_eq!(us.place_symbol("1,234.56", false), "$1,234.56");
        assert_eq!(us.place_symbol("1,234.56", true), "-$1,234.56");

        let de = Culture::lookup("de-DE").unwrap();
        assert_eq!(de.place_symbol("1.234,56", false), "1.234,56\u{a0}€");
    }

    #[test]
    fn test_default_is_simplified_chinese() {
        let culture = Culture::default();
        assert_eq!(culture.name, "zh-CN");
        assert_eq!(culture.magnitudes[0].suffix, "亿");
    }

    #[test]
    fn test_culture_deserializes_from_toml() {
        let culture: Culture = toml::from_str(
            r#"
name = "x-custom"
currency_symbol = "CHF"
group_separator = "'"
decimal_separator = "."
currency_decimals = 2
symbol_position = "suffix_spaced"
"#,
        )
        .unwrap();
        assert_eq!(culture.symbol_position, SymbolPosition::SuffixSpaced);
        assert!(culture.magnitudes.is_empty());
    }
}
