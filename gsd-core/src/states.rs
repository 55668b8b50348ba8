//! Lookup between full U.S. state names, postal abbreviations and census regions.
//!
//! Misses never error. Callers get an empty string (or [`REGION_NOT_FOUND`])
//! and are expected to drop whatever they were trying to match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned by [`to_region`] for names outside the 50 states.
pub const REGION_NOT_FOUND: &str = "Region not found";

/// Full name / postal abbreviation pairs, including territories and military mail codes.
pub static STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("American Samoa", "AS"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("Armed Forces Americas", "AA"),
    ("Armed Forces Europe", "AE"),
    ("Armed Forces Pacific", "AP"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Guam", "GU"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Marshall Islands", "MH"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Northern Mariana Islands", "NP"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Puerto Rico", "PR"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("US Virgin Islands", "VI"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// U.S. Census Bureau region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Midwest,
    South,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Midwest,
        Region::South,
        Region::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
        }
    }

    /// Census region for a full state name. Territories and DC have none.
    pub fn from_state(full_name: &str) -> Option<Region> {
        let region = match full_name {
            "Connecticut" | "Maine" | "Massachusetts" | "New Hampshire" | "Rhode Island"
            | "Vermont" | "New Jersey" | "New York" | "Pennsylvania" => Region::Northeast,
            "Illinois" | "Indiana" | "Michigan" | "Ohio" | "Wisconsin" | "Iowa" | "Kansas"
            | "Minnesota" | "Missouri" | "Nebraska" | "North Dakota" | "South Dakota" => {
                Region::Midwest
            }
            "Delaware" | "Florida" | "Georgia" | "Maryland" | "North Carolina"
            | "South Carolina" | "Virginia" | "West Virginia" | "Alabama" | "Kentucky"
            | "Mississippi" | "Tennessee" | "Arkansas" | "Louisiana" | "Oklahoma" | "Texas" => {
                Region::South
            }
            "Arizona" | "Colorado" | "Idaho" | "Montana" | "Nevada" | "New Mexico" | "Utah"
            | "Wyoming" | "Alaska" | "California" | "Hawaii" | "Oregon" | "Washington" => {
                Region::West
            }
            _ => return None,
        };
        Some(region)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal abbreviation for a full state name, or `""` if unknown.
pub fn to_abbreviation(full_name: &str) -> &'static str {
    STATES
        .iter()
        .find(|(name, _)| *name == full_name)
        .map(|(_, abbrev)| *abbrev)
        .unwrap_or("")
}

/// Full state name for a postal abbreviation, or `""` if unknown.
pub fn to_full_name(abbrev: &str) -> &'static str {
    STATES
        .iter()
        .find(|(_, code)| *code == abbrev)
        .map(|(name, _)| *name)
        .unwrap_or("")
}

/// Census region name for a full state name, or [`REGION_NOT_FOUND`].
pub fn to_region(full_name: &str) -> &'static str {
    Region::from_state(full_name)
        .map(|r| r.as_str())
        .unwrap_or(REGION_NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_lookup() {
        assert_eq!(to_abbreviation("California"), "CA");
        assert_eq!(to_abbreviation("District of Columbia"), "DC");
        assert_eq!(to_abbreviation("Californa"), "");
        assert_eq!(to_abbreviation("california"), "");
    }

    #[test]
    fn test_full_name_lookup() {
        assert_eq!(to_full_name("TX"), "Texas");
        assert_eq!(to_full_name("NP"), "Northern Mariana Islands");
        assert_eq!(to_full_name("ZZ"), "");
    }

    #[test]
    fn test_round_trip_is_stable() {
        for (name, _) in STATES {
            let abbrev = to_abbreviation(name);
            assert_eq!(to_abbreviation(to_full_name(abbrev)), abbrev, "{}", name);
        }
        assert_eq!(to_abbreviation(to_full_name(to_abbreviation("Nowhere"))), "");
    }

    #[test]
    fn test_regions() {
        assert_eq!(to_region("Maine"), "Northeast");
        assert_eq!(to_region("Ohio"), "Midwest");
        assert_eq!(to_region("Texas"), "South");
        assert_eq!(to_region("Hawaii"), "West");
        assert_eq!(to_region("Puerto Rico"), REGION_NOT_FOUND);
        assert_eq!(to_region("District of Columbia"), REGION_NOT_FOUND);
    }

    #[test]
    fn test_every_state_has_a_region() {
        let with_region = STATES
            .iter()
            .filter(|(name, _)| Region::from_state(name).is_some())
            .count();
        assert_eq!(with_region, 50);
    }

    #[test]
    fn test_every_region_has_states() {
        for region in Region::ALL {
            assert!(
                STATES.iter().any(|(name, _)| Region::from_state(name) == Some(region)),
                "{}",
                region
            );
        }
    }
}
