//! Wall-clock time of day.
//!
//! # Design
//!
//! `TimeOnly` is an hour/minute pair with no date and no timezone.  All
//! comparisons go through the minutes-since-midnight value:
//!
//!   to_minutes = hours * 60 + minutes
//!
//! so ordering is exact integer arithmetic.  Construction rejects values
//! outside `00:00..=23:59`; there is no clamping.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute resolution.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct TimeOnly {
    hours:   u8,
    minutes: u8,
}

impl TimeOnly {
    pub const MIDNIGHT: TimeOnly = TimeOnly { hours: 0, minutes: 0 };

    /// Create a time, rejecting `hours > 23` or `minutes > 59`.
    pub fn new(hours: u32, minutes: u32) -> CoreResult<Self> {
        if hours > 23 || minutes > 59 {
            return Err(CoreError::InvalidTime { hours, minutes });
        }
        Ok(Self { hours: hours as u8, minutes: minutes as u8 })
    }

    /// Build from minutes since midnight (`0..1440`).
    pub fn from_minutes(total: u32) -> CoreResult<Self> {
        Self::new(total / 60, total % 60)
    }

    #[inline]
    pub fn hours(self) -> u8 {
        self.hours
    }

    #[inline]
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn to_minutes(self) -> u16 {
        self.hours as u16 * 60 + self.minutes as u16
    }

    #[inline]
    pub fn is_before(self, other: TimeOnly) -> bool {
        self.to_minutes() < other.to_minutes()
    }

    #[inline]
    pub fn is_after(self, other: TimeOnly) -> bool {
        self.to_minutes() > other.to_minutes()
    }

    /// Signed minutes from `self` to `later` (negative if `later` is earlier).
    #[inline]
    pub fn minutes_until(self, later: TimeOnly) -> i32 {
        later.to_minutes() as i32 - self.to_minutes() as i32
    }
}

impl Ord for TimeOnly {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_minutes().cmp(&other.to_minutes())
    }
}

impl PartialOrd for TimeOnly {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Parses `H:MM` or `HH:MM` (24-hour clock).
impl FromStr for TimeOnly {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| CoreError::Parse(format!("invalid time {s:?}: expected HH:MM")))?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if m.len() != 2 || h.is_empty() || h.len() > 2 || !digits(h) || !digits(m) {
            return Err(CoreError::Parse(format!("invalid time {s:?}: expected HH:MM")));
        }
        let hours = h
            .parse::<u32>()
            .map_err(|_| CoreError::Parse(format!("invalid hour in {s:?}")))?;
        let minutes = m
            .parse::<u32>()
            .map_err(|_| CoreError::Parse(format!("invalid minute in {s:?}")))?;
        Self::new(hours, minutes)
    }
}

impl TryFrom<&str> for TimeOnly {
    type Error = CoreError;

    fn try_from(s: &str) -> CoreResult<Self> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOnly {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOnly {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
