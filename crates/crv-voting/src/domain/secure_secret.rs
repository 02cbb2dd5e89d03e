//! # Vote Secret
//!
//! Wrapper for the 32-byte secret a voter keeps between commit and reveal.
//! Anyone holding it together with the vote can open the commitment, so it
//! is zeroed on drop and never printed.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::Secret;

/// A vote secret that zeroizes on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct VoteSecret {
    inner: Secret,
}

impl VoteSecret {
    /// Create a new secret from bytes.
    pub fn new(bytes: Secret) -> Self {
        Self { inner: bytes }
    }

    /// Create from a slice (copies into fixed array).
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != 32 {
            return None;
        }
        let mut inner = [0u8; 32];
        inner.copy_from_slice(slice);
        Some(Self { inner })
    }

    /// Get the secret bytes.
    ///
    /// Use immediately; avoid copying them into long-lived storage.
    pub fn as_bytes(&self) -> &Secret {
        &self.inner
    }
}

impl From<Secret> for VoteSecret {
    fn from(bytes: Secret) -> Self {
        Self::new(bytes)
    }
}

impl std::fmt::Debug for VoteSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VoteSecret(***)")
    }
}

// Hex on the wire, so a voter can store the secret as text until reveal
impl Serialize for VoteSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(self.inner))
    }
}

impl<'de> Deserialize<'de> for VoteSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut bytes = hex::decode(s.trim_start_matches("0x")).map_err(serde::de::Error::custom)?;
        let secret = Self::from_slice(&bytes);
        bytes.zeroize();
        secret.ok_or_else(|| serde::de::Error::custom("invalid secret length"))
    }
}
