//! # Record types for the remote store
//!
//! Defines the two representations of a registered profile and the auth
//! session types:
//!
//! ## [`Profile`]
//!
//! The full row from the `profiles` table as the backend returns it. The
//! identifier is either `{STATE_ABBREV}_{PLATE}` (built by
//! [`plate_profile_id`]) or a short alias chosen/generated by the user.
//! `created_at` is assigned by the backend and is therefore optional on the
//! client; it is skipped during serialization when absent so inserts never
//! send it.
//!
//! ## [`NewProfile`]
//!
//! The client-constructed insert payload. Same display fields, no
//! server-assigned columns.
//!
//! ## [`AuthUser`] / [`Session`]
//!
//! Subset of the Supabase auth user object and the bearer session wrapping
//! it. Sessions live only inside the shim and are never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered plate/car profile as stored remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub plate_number: String,
    pub first_name: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Creation date formatted for display, empty until the backend has
    /// assigned one.
    pub fn display_date(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%b %e, %Y").to_string())
            .unwrap_or_default()
    }
}

/// Insert payload for a new profile. The backend assigns `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: String,
    pub plate_number: String,
    pub first_name: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// The fields of the Supabase auth user this app cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A signed-in session: bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// US state name to postal abbreviation, in the order the registration
/// form lists them.
pub const US_STATES: [(&str, &str); 50] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
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
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Postal abbreviation for a full state name.
pub fn state_abbreviation(state: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, abbr)| *abbr)
}

/// Build the `{STATE_ABBREV}_{PLATE}` identifier for a plate registration.
/// The plate number is upper-cased before use. Returns `None` for an
/// unknown state name.
pub fn plate_profile_id(state: &str, plate_number: &str) -> Option<String> {
    let abbr = state_abbreviation(state)?;
    Some(format!("{}_{}", abbr, plate_number.trim().to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_profile_id() {
        assert_eq!(
            plate_profile_id("California", "abc123"),
            Some("CA_ABC123".to_string())
        );
        assert_eq!(
            plate_profile_id("New York", " myplate "),
            Some("NY_MYPLATE".to_string())
        );
        assert_eq!(plate_profile_id("Atlantis", "abc123"), None);
    }

    #[test]
    fn test_new_profile_serializes_without_server_columns() {
        let profile = NewProfile {
            id: "CA_ABC123".to_string(),
            plate_number: "ABC123".to_string(),
            first_name: "Sam".to_string(),
            state: "California".to_string(),
            description: None,
            alias: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("created_at").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(json["id"], "CA_ABC123");
    }

    #[test]
    fn test_profile_deserializes_backend_row() {
        let row = serde_json::json!({
            "id": "CA_ABC123",
            "plate_number": "ABC123",
            "first_name": "Sam",
            "state": "California",
            "description": "Daily driver",
            "created_at": "2025-07-01T12:30:00Z"
        });
        let profile: Profile = serde_json::from_value(row).unwrap();
        assert_eq!(profile.plate_number, "ABC123");
        assert!(profile.alias.is_none());
        assert_eq!(profile.display_date(), "Jul  1, 2025");
    }
}
