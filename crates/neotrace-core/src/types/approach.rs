//! Close-approach event entity

use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

use crate::error::{Error, Result};

/// Timestamp layout used by the JPL close-approach feed (`2020-Jan-01 00:54`)
const TIME_FORMAT_IN: &str = "%Y-%b-%d %H:%M";
/// Human-readable layout used everywhere on the way out
const TIME_FORMAT_OUT: &str = "%Y-%m-%d %H:%M";

/// A single recorded event of a NEO passing close to Earth.
///
/// Carries the designation of its parent object as a foreign key. The
/// `neo` back-link is an index into the owning database's NEO table; it is
/// `None` only between loading and database construction, and guaranteed
/// populated for every approach afterwards.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    /// Designation of the approaching object (foreign key)
    pub designation: String,
    /// Moment of closest approach
    pub time: DateTime<Utc>,
    /// Nominal approach distance in astronomical units
    pub distance: f64,
    /// Relative approach velocity in km/s
    pub velocity: f64,
    /// Index of the parent object in the database; set at link time
    pub(crate) neo: Option<usize>,
}

impl CloseApproach {
    /// Create a new, not-yet-linked approach
    pub fn new(
        designation: impl Into<String>,
        time: DateTime<Utc>,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Parse a feed timestamp such as `2020-Jan-01 00:54`
    pub fn parse_time(raw: &str) -> Result<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(raw.trim(), TIME_FORMAT_IN)
            .map(|t| t.and_utc())
            .map_err(|_| Error::Timestamp(raw.to_string()))
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM`
    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT_OUT).to_string()
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}
