//! Locale configuration and value formatting
//!
//! Number grouping, decimal separators, and date wording differ per
//! language, so they live in a serde-backed [`LocaleConfig`] loaded
//! alongside a language's text data. Files load from TOML or RON by
//! extension.

use serde::{Deserialize, Serialize};

use crate::substitution::Date;

/// Result type for locale file operations.
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Errors that can occur loading or saving a locale file.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported file extension
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Formatting conventions for the active language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Separator between digit groups of three.
    pub thousands_separator: char,

    /// Separator before fractional digits.
    pub decimal_separator: char,

    /// Whether dates read day-first ("1 January 1836").
    pub day_before_month: bool,

    /// Month display names, January first.
    pub month_names: [String; 12],
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
            decimal_separator: '.',
            day_before_month: false,
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
        }
    }
}

impl LocaleConfig {
    /// Load a locale from a `.toml` or `.ron` file.
    pub fn load_from_file(path: &str) -> LocaleResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(LocaleError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| LocaleError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| LocaleError::Parse(e.to_string()))
        } else {
            Err(LocaleError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save the locale to a `.toml` or `.ron` file.
    pub fn save_to_file(&self, path: &str) -> LocaleResult<()> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| LocaleError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| LocaleError::Serialize(e.to_string()))?
        } else {
            return Err(LocaleError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(LocaleError::Io)
    }

    /// Grouped-digit integer formatting: `1234567` becomes `1,234,567`
    /// under the default locale.
    pub fn prettify(&self, num: i64) -> String {
        let digits = num.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if num < 0 {
            out.push('-');
        }
        self.group_digits(&mut out, &digits);
        out
    }

    /// Floating point formatting: grouped integer part, locale decimal
    /// separator, two fractional places with trailing zeros trimmed.
    pub fn format_float(&self, value: f32) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{value:.2}");
        let negative = rounded.starts_with('-');
        let unsigned = rounded.trim_start_matches('-');
        let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let frac_digits = frac_digits.trim_end_matches('0');

        let mut out = String::new();
        // "-0.00" rounds to plain "0"
        if negative && (int_digits.chars().any(|c| c != '0') || !frac_digits.is_empty()) {
            out.push('-');
        }
        self.group_digits(&mut out, int_digits);
        if !frac_digits.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_digits);
        }
        out
    }

    /// Locale-appropriate date string, e.g. `January 1, 1836`.
    pub fn format_date(&self, date: Date) -> String {
        let month = self
            .month_names
            .get(usize::from(date.month).saturating_sub(1))
            .map_or("?", String::as_str);

        if self.day_before_month {
            format!("{} {} {}", date.day, month, date.year)
        } else {
            format!("{} {}, {}", month, date.day, date.year)
        }
    }

    fn group_digits(&self, out: &mut String, digits: &str) {
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(ch);
        }
    }
}
