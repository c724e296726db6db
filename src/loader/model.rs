use serde::Deserialize;

/// A single entry of the remote users collection.
///
/// Only `name` and `email` are kept; every other field in the response is
/// ignored during decoding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

impl UserRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Decode a response body into user records, preserving the array order.
///
/// # Errors
/// Returns an error if the body is not a JSON array of objects carrying
/// string `name` and `email` fields.
pub fn decode(body: &[u8]) -> Result<Vec<UserRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
