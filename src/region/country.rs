//! Country reference data - identity only, loaded once

use serde::Serialize;

/// A country in the region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    /// ISO 3166-1 alpha-3 style code
    pub code: &'static str,
    /// Display color (hex)
    pub color: &'static str,
    pub flag: &'static str,
}

pub const SOUTH_ASIAN_COUNTRIES: [Country; 9] = [
    Country { name: "India", code: "IND", color: "#FF9933", flag: "\u{1F1EE}\u{1F1F3}" },
    Country { name: "Pakistan", code: "PAK", color: "#01411C", flag: "\u{1F1F5}\u{1F1F0}" },
    Country { name: "Bangladesh", code: "BGD", color: "#006A4E", flag: "\u{1F1E7}\u{1F1E9}" },
    Country { name: "Sri Lanka", code: "LKA", color: "#FFB300", flag: "\u{1F1F1}\u{1F1F0}" },
    Country { name: "Nepal", code: "NPL", color: "#DC143C", flag: "\u{1F1F3}\u{1F1F5}" },
    Country { name: "Bhutan", code: "BTN", color: "#FFD700", flag: "\u{1F1E7}\u{1F1F9}" },
    Country { name: "Maldives", code: "MDV", color: "#007F3D", flag: "\u{1F1F2}\u{1F1FB}" },
    Country { name: "Afghanistan", code: "AFG", color: "#000000", flag: "\u{1F1E6}\u{1F1EB}" },
    Country { name: "Myanmar", code: "MMR", color: "#FF6600", flag: "\u{1F1F2}\u{1F1F2}" },
];

pub fn by_name(name: &str) -> Option<&'static Country> {
    SOUTH_ASIAN_COUNTRIES.iter().find(|c| c.name == name)
}

pub fn is_known(name: &str) -> bool {
    by_name(name).is_some()
}
