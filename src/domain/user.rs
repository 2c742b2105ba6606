//! User records: the raw feed shape and the listed card entity.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Symbols a generated user id is drawn from.
pub const ID_ALPHABET: &[u8; 12] = b"ABCDEF123456";

/// Length of a generated user id.
pub const ID_LEN: usize = 6;

/// Company block of a raw feed record. Only the name is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
}

/// A user record as it arrives from the input feed.
///
/// Unknown fields (email, phone, website, ...) are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawUser {
    pub username: String,
    /// Opaque to the list; carried through to the card unchanged.
    #[serde(default)]
    pub address: Value,
    /// A JSON number or numeric string. Fractional ages are floored, so `17.9`
    /// stays a minor.
    #[serde(deserialize_with = "deserialize_age")]
    pub age: i64,
    pub company: Company,
}

/// Deserialize an age that can be an integer, a float or a numeric string
fn deserialize_age<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = Value::deserialize(deserializer)?;
    if let Some(age) = value.as_i64() {
        return Ok(age);
    }
    let number = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(age) if age.is_finite() => Ok(age.floor() as i64),
        _ => Err(D::Error::custom(format!("expected a numeric age, got {value}"))),
    }
}

/// Short random identifier assigned to each listed user at ingestion.
///
/// Uniqueness is probabilistic: 12^6 possible ids, no collision check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Draws a fresh id, each character chosen uniformly from [`ID_ALPHABET`].
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let id = (0..ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id has the generated shape (length and alphabet).
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == ID_LEN && self.0.bytes().all(|b| ID_ALPHABET.contains(&b))
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user as shown on a card.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedUser {
    pub id: UserId,
    pub username: String,
    pub address: Value,
    pub age: i64,
    pub company_name: String,
    /// Set while the user sits in the removed collection.
    pub is_removed: bool,
}

impl ListedUser {
    pub fn from_raw(raw: &RawUser, id: UserId) -> Self {
        Self {
            id,
            username: raw.username.clone(),
            address: raw.address.clone(),
            age: raw.age,
            company_name: raw.company.name.clone(),
            is_removed: false,
        }
    }

    /// Uppercased first letter of the username, used as the card avatar.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// Case-insensitive substring match on the username.
    ///
    /// `needle` must already be lowercased.
    pub fn username_contains(&self, needle: &str) -> bool {
        self.username.to_lowercase().contains(needle)
    }
}
