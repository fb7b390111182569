//! Typed substitution values bound per render
//!
//! A substitution map binds variable codes to typed values just before a
//! layout pass. Values carry enough type information for the layout engine
//! to format them itself: numbers get locale digit grouping, dates go
//! through the locale formatter, simulation references resolve to display
//! names. Chunks retain the value that produced them so pointer input can
//! be mapped back to the semantic source.

use hashbrown::HashMap;

use crate::arena::TextKey;
use crate::sim::{NationId, ProvinceId, StateId};
use crate::variables::VariableType;

/// Calendar date carried by a substitution.
///
/// Formatting is a locale concern; see
/// [`LocaleConfig::format_date`](crate::locale::LocaleConfig::format_date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u8,
    /// Day of month, 1-based.
    pub day: u8,
}

impl Date {
    /// Create a date.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month), "month {month} out of range");
        debug_assert!((1..=31).contains(&day), "day {day} out of range");
        Self { year, month, day }
    }
}

/// One typed value bound to a variable code for a single render pass.
///
/// `Empty` is the monostate: it binds a recognized variable to "no value"
/// and renders as empty text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Substitution {
    /// Caller-supplied display text.
    Text(String),
    /// Already-interned string.
    Key(TextKey),
    /// Province reference; resolves through the name source.
    Province(ProvinceId),
    /// State-region reference; resolves through the name source.
    State(StateId),
    /// Nation reference; resolves through the name source.
    Nation(NationId),
    /// Integer, rendered with locale digit grouping.
    Integer(i64),
    /// Floating point, rendered with locale separators.
    Float(f32),
    /// Calendar date, rendered through the locale formatter.
    Date(Date),
    /// No value.
    #[default]
    Empty,
}

/// Per-render binding from variable code to value. Built fresh for every
/// layout call, never persisted.
pub type SubstitutionMap = HashMap<VariableType, Substitution>;

/// Bind `value` to `key`, replacing any existing binding.
pub fn add_to_substitution_map(
    map: &mut SubstitutionMap,
    key: VariableType,
    value: impl Into<Substitution>,
) {
    map.insert(key, value.into());
}

impl From<&str> for Substitution {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Substitution {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<TextKey> for Substitution {
    fn from(value: TextKey) -> Self {
        Self::Key(value)
    }
}

impl From<ProvinceId> for Substitution {
    fn from(value: ProvinceId) -> Self {
        Self::Province(value)
    }
}

impl From<StateId> for Substitution {
    fn from(value: StateId) -> Self {
        Self::State(value)
    }
}

impl From<NationId> for Substitution {
    fn from(value: NationId) -> Self {
        Self::Nation(value)
    }
}

impl From<i64> for Substitution {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f32> for Substitution {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Date> for Substitution {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_latest_binding() {
        let mut map = SubstitutionMap::new();
        add_to_substitution_map(&mut map, VariableType::Amount, 3_i64);
        add_to_substitution_map(&mut map, VariableType::Amount, 12_i64);

        assert_eq!(
            map.get(&VariableType::Amount),
            Some(&Substitution::Integer(12))
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_value_conversions() {
        let mut map = SubstitutionMap::new();
        add_to_substitution_map(&mut map, VariableType::Country, NationId(7));
        add_to_substitution_map(&mut map, VariableType::Name, "Ruritania");
        add_to_substitution_map(&mut map, VariableType::Date, Date::new(1836, 1, 1));

        assert_eq!(
            map.get(&VariableType::Country),
            Some(&Substitution::Nation(NationId(7)))
        );
        assert!(matches!(
            map.get(&VariableType::Name),
            Some(Substitution::Text(s)) if s == "Ruritania"
        ));
    }
}
