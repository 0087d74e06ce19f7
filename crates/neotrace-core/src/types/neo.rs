//! Near-Earth object entity

use std::fmt;

/// A near-Earth object: a small body whose orbit brings it close to Earth.
///
/// Identified by a unique primary designation, optionally carrying an IAU
/// name and a measured diameter. An unknown diameter is stored as
/// `f64::NAN` and must be detected with [`f64::is_nan`], never with an
/// emptiness check. The `approaches` collection holds indices into the
/// owning database's approach table and is wired up exactly once during
/// database construction, in insertion order.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    /// Primary designation (unique key)
    pub designation: String,
    /// IAU name, when one has been assigned
    pub name: Option<String>,
    /// Diameter in kilometers; NaN when unknown
    pub diameter: f64,
    /// Whether the object is classified as potentially hazardous
    pub hazardous: bool,
    /// Indices of this object's close approaches in the database
    pub(crate) approaches: Vec<usize>,
}

impl NearEarthObject {
    /// Create a new object with an empty approach collection
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Placeholder object for an approach whose designation matches no
    /// loaded record
    pub(crate) fn placeholder(designation: impl Into<String>) -> Self {
        Self::new(designation, None, f64::NAN, false)
    }

    /// `"433 (Eros)"` when named, bare designation otherwise
    pub fn full_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        if self.diameter.is_nan() {
            write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous",
                self.full_name(),
                hazard
            )
        } else {
            write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous",
                self.full_name(),
                self.diameter,
                hazard
            )
        }
    }
}
