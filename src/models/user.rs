use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The public identity of a registered user.
///
/// The password hash lives only in the credential store and is never part of
/// this type, so it cannot leak into an API response.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
}
