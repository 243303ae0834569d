//! Content addressing via BLAKE3.
//!
//! A fingerprint is a pure function of its input: no salt, no run state.
//! Equal fingerprints are treated as equal content everywhere downstream;
//! at 256 bits the collision probability is negligible, so there is no
//! collision handling.

use std::fmt;

/// A 256-bit content fingerprint.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint of a normalized text.
    #[must_use]
    pub fn of_text(normalized: &str) -> Self {
        Self::of_bytes(normalized.as_bytes())
    }

    /// Fingerprint of an opaque binary payload.
    #[must_use]
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }

    /// Hexadecimal form, for JSON output and logs.
    #[must_use]
    pub fn to_hex(&self) -> String {
        blake3::Hash::from_bytes(self.0).to_hex().to_string()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}..)", &self.to_hex()[..8])
    }
}
