use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request body. Fields are optional so validation can report each
/// missing one by name instead of failing deserialization wholesale.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
}

/// Validated credentials, ready for a hash check.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Input to `create_user`; the plaintext password is hashed on the way in.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
