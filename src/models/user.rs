// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User account models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User record as stored in the users document.
///
/// The credential fields hold hex-encoded bytes and never appear in API
/// responses; handlers return [`UserProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique username, matched exactly and case-sensitively
    pub username: String,
    /// Hex-encoded HMAC-SHA-256 of the password, keyed by `salt`
    pub password_hash: String,
    /// Hex-encoded random salt (16 bytes)
    pub salt: String,
    /// Self-reported wellness profile
    #[serde(flatten)]
    pub profile: Profile,
    /// Accumulated activity points; absent in documents written before
    /// points existed, which read as zero
    #[serde(default)]
    pub points: i64,
}

/// Free-form wellness profile captured at registration. Every field is
/// optional and stored as submitted; absent fields become empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub agency: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub exercise: String,
    #[serde(default)]
    pub fruits_veg: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub tobacco: String,
}

/// User record as returned by the API: everything except the credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfile {
    pub username: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub points: i64,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            profile: user.profile,
            points: user.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_default_to_zero_on_old_records() {
        let raw = r#"{
            "username": "alice",
            "password_hash": "ab",
            "salt": "cd",
            "name": "Alice"
        }"#;

        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.points, 0);
        assert_eq!(user.profile.name, "Alice");
        assert_eq!(user.profile.agency, "");
    }

    #[test]
    fn test_profile_conversion_strips_credential() {
        let user = User {
            username: "bob".to_string(),
            password_hash: "feed".to_string(),
            salt: "beef".to_string(),
            profile: Profile::default(),
            points: 12,
        };

        let profile = UserProfile::from(user);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["username"], "bob");
        assert_eq!(json["points"], 12);
        assert!(json.get("password_hash").is_none());
        assert!(json.get("salt").is_none());
    }
}
