//! Days of the week and their display names.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A day of the week.
///
/// The discriminant follows the JavaScript `Date::getDay` convention
/// (Sunday = 0) so exported numeric day ids line up with web renderers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayOfWeek {
    Sunday    = 0,
    Monday    = 1,
    Tuesday   = 2,
    Wednesday = 3,
    Thursday  = 4,
    Friday    = 5,
    Saturday  = 6,
}

/// Monday through Friday, the default visible days.
pub const WORK_WEEK_DAYS: [DayOfWeek; 5] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
];

/// All seven days, Sunday first.
pub const ALL_DAYS: [DayOfWeek; 7] = [
    DayOfWeek::Sunday,
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

impl DayOfWeek {
    /// Numeric id, Sunday = 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        ALL_DAYS.get(i).copied()
    }

    /// Lowercase stable identifier, used in generated ids and CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Sunday    => "sunday",
            DayOfWeek::Monday    => "monday",
            DayOfWeek::Tuesday   => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday  => "thursday",
            DayOfWeek::Friday    => "friday",
            DayOfWeek::Saturday  => "saturday",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday    => "Sunday",
            DayOfWeek::Monday    => "Monday",
            DayOfWeek::Tuesday   => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday  => "Thursday",
            DayOfWeek::Friday    => "Friday",
            DayOfWeek::Saturday  => "Saturday",
        }
    }

    /// Display name, using `translations` when it has an entry for this day.
    pub fn display_name(self, translations: Option<&DayNameTranslations>) -> &str {
        translations
            .and_then(|t| t.get(self))
            .unwrap_or_else(|| self.name())
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts full or three-letter English names, case-insensitive.
impl FromStr for DayOfWeek {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_DAYS
            .into_iter()
            .find(|d| d.as_str() == lower || d.as_str()[..3] == lower)
            .ok_or_else(|| CoreError::Parse(format!("unknown day {s:?}")))
    }
}

// ── DayNameTranslations ───────────────────────────────────────────────────────

/// Per-day display-name overrides (e.g. for localized headers).
///
/// Days without an entry fall back to the English name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayNameTranslations {
    names: HashMap<DayOfWeek, String>,
}

impl DayNameTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, day: DayOfWeek, name: impl Into<String>) -> Self {
        self.names.insert(day, name.into());
        self
    }

    pub fn insert(&mut self, day: DayOfWeek, name: impl Into<String>) {
        self.names.insert(day, name.into());
    }

    pub fn get(&self, day: DayOfWeek) -> Option<&str> {
        self.names.get(&day).map(String::as_str)
    }
}
