//! Team aggregate shared between backend and frontend

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a team access code
pub const ACCESS_CODE_LEN: usize = 16;

/// localStorage key holding the id of the favorite team
pub const FAVORITE_TEAM_KEY: &str = "umami.fav-team";

/// Team (workspace) that owns websites and members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub access_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/teams/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

/// Body of `POST /api/teams`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamDto {
    pub name: String,
}

/// Error payload returned by the API on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Generate a fresh random access code
pub fn generate_access_code() -> String {
    generate_access_code_with(&mut rand::thread_rng())
}

pub fn generate_access_code_with<R: Rng>(rng: &mut R) -> String {
    (0..ACCESS_CODE_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Check that a value looks like an access code we could have generated
pub fn validate_access_code(code: &str) -> Result<(), String> {
    if code.chars().count() != ACCESS_CODE_LEN {
        return Err(format!(
            "Access code must be {} characters long",
            ACCESS_CODE_LEN
        ));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Access code may only contain letters and digits".to_string());
    }
    Ok(())
}
