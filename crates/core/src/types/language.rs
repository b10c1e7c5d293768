//! Interface language preference.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::status::ParseVariantError;

/// Supported interface languages.
///
/// Serialized as the upper-case code (`"ID"`, `"EN"`, `"JP"`), which is also
/// the value kept in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Bahasa Indonesia.
    #[default]
    #[serde(rename = "ID")]
    Indonesian,
    /// English.
    #[serde(rename = "EN")]
    English,
    /// Japanese.
    #[serde(rename = "JP")]
    Japanese,
}

impl Language {
    /// All languages in switcher order.
    pub const ALL: [Self; 3] = [Self::Indonesian, Self::English, Self::Japanese];

    /// Two-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Indonesian => "ID",
            Self::English => "EN",
            Self::Japanese => "JP",
        }
    }

    /// BCP 47 tag for the `lang` attribute.
    #[must_use]
    pub const fn html_lang(&self) -> &'static str {
        match self {
            Self::Indonesian => "id",
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVariantError {
                kind: "language",
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_indonesian() {
        assert_eq!(Language::default(), Language::Indonesian);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("JP".parse::<Language>().unwrap(), Language::Japanese);
        assert!("FR".parse::<Language>().is_err());
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Japanese).unwrap(), "\"JP\"");
    }
}
