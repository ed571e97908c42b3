use crate::error::TokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hailstone_sequencer::ShortId;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// The URL-safe text form of a [`ShortId`]: the packed value's minimal
/// big-endian bytes, base64url-encoded without padding.
///
/// Leading zero bytes are stripped (keeping at least one), so every id has
/// exactly one valid spelling, between 2 and 11 characters long. Parsing
/// rejects any other spelling.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortToken {
    text: SmolStr,
    id: ShortId,
}

impl ShortToken {
    /// Renders the token for `id`.
    pub fn encode(id: ShortId) -> Self {
        let bytes = id.as_u64().to_be_bytes();
        // Drop leading zero bytes; the all-zero id keeps its last byte so
        // it still encodes as "AA" rather than the empty string.
        let skip = bytes.iter().take_while(|b| **b == 0).count().min(7);
        Self {
            text: SmolStr::new(URL_SAFE_NO_PAD.encode(&bytes[skip..])),
            id,
        }
    }

    /// Validates a candidate token and recovers the id it names.
    pub fn parse(candidate: &str) -> Result<Self, TokenError> {
        if candidate.is_empty() {
            return Err(TokenError::Empty);
        }
        let bytes = URL_SAFE_NO_PAD.decode(candidate)?;
        if bytes.len() > 8 {
            return Err(TokenError::TooLong { len: bytes.len() });
        }
        if bytes.len() > 1 && bytes[0] == 0 {
            return Err(TokenError::NonCanonical);
        }
        let raw = bytes.iter().fold(0_u64, |acc, b| (acc << 8) | *b as u64);
        let id = ShortId::from_u64(raw).ok_or(TokenError::Overflow)?;
        Ok(Self {
            text: SmolStr::new(candidate),
            id,
        })
    }

    /// The id this token encodes.
    pub fn id(&self) -> ShortId {
        self.id
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Debug for ShortToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortToken").field(&self.text).finish()
    }
}

impl Display for ShortToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for ShortToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ShortId> for ShortToken {
    fn from(id: ShortId) -> Self {
        Self::encode(id)
    }
}

impl Serialize for ShortToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
