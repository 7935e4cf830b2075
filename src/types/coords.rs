use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role a column plays in the trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    Longitude,
    Latitude,
    Altitude,
}

impl Role {
    /// Prompt order
    pub const ALL: [Role; 3] = [Role::Longitude, Role::Latitude, Role::Altitude];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Longitude => "longitude",
            Role::Latitude => "latitude",
            Role::Altitude => "altitude",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column names bound to each role
///
/// The same column may be bound to more than one role.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnSelection {
    pub longitude: String,
    pub latitude: String,
    pub altitude: String,
}

impl ColumnSelection {
    pub fn column(&self, role: Role) -> &str {
        match role {
            Role::Longitude => &self.longitude,
            Role::Latitude => &self.latitude,
            Role::Altitude => &self.altitude,
        }
    }
}

/// Format one `lon,lat,alt` tuple with six decimals per value
pub fn format_coordinate(longitude: f64, latitude: f64, altitude: f64) -> String {
    format!("{longitude:.6},{latitude:.6},{altitude:.6}")
}

/// Ordered coordinate tuples, one per data row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateSequence {
    tuples: Vec<String>,
}

impl CoordinateSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tuples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, tuple: String) {
        self.tuples.push(tuple);
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn tuples(&self) -> &[String] {
        &self.tuples
    }

    /// Start marker coordinates
    pub fn first(&self) -> Option<&str> {
        self.tuples.first().map(String::as_str)
    }

    /// End marker coordinates
    pub fn last(&self) -> Option<&str> {
        self.tuples.last().map(String::as_str)
    }

    /// Path coordinate list, tuples separated by single spaces
    pub fn joined(&self) -> String {
        self.tuples.join(" ")
    }
}

impl From<Vec<String>> for CoordinateSequence {
    fn from(tuples: Vec<String>) -> Self {
        Self { tuples }
    }
}
