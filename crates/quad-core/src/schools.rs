//! Static school registry.
//!
//! One canonical table; earlier variants of this data drifted (different
//! school sets, mixed-case hex colors), so everything funnels through here.
//! `ALL` is a reserved sentinel meaning "no school filter" and is not a
//! real school identifier.

use serde::Serialize;

/// Sentinel short name for "all schools" / no filter.
pub const ALL_SCHOOLS: &str = "ALL";

/// A school selectable in the search UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct School {
    /// Stable identifier, uppercase (e.g. `UIUC`).
    pub short_name: &'static str,
    pub long_name: &'static str,
    /// Theme accent, lowercase `#rrggbb`.
    pub accent_color: &'static str,
}

/// Ordered registry; the `ALL` sentinel comes first so selectors default
/// to "no filter".
pub const SCHOOLS: &[School] = &[
    School {
        short_name: ALL_SCHOOLS,
        long_name: "All Schools",
        accent_color: "#4b5563",
    },
    School {
        short_name: "UIUC",
        long_name: "University of Illinois Urbana-Champaign",
        accent_color: "#ff5f0f",
    },
    School {
        short_name: "ASU",
        long_name: "Appalachian State University",
        accent_color: "#ffcc00",
    },
    School {
        short_name: "NCSU",
        long_name: "North Carolina State University",
        accent_color: "#cc0000",
    },
    School {
        short_name: "UNC",
        long_name: "University of North Carolina",
        accent_color: "#7bafd4",
    },
];

impl School {
    /// Look up a school by short name, case-insensitively. The registry is
    /// small and fixed, so a linear scan is fine.
    #[must_use]
    pub fn find(short_name: &str) -> Option<&'static Self> {
        SCHOOLS
            .iter()
            .find(|school| school.short_name.eq_ignore_ascii_case(short_name))
    }

    /// Whether this record is the `ALL` sentinel rather than a real school.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.short_name == ALL_SCHOOLS
    }
}
