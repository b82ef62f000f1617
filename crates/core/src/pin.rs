//! PIN validation and hashing.
//!
//! The digest is an unsalted SHA-256 over the raw PIN string, matching the
//! hashes already in storage. A salted scheme would break compatibility with
//! existing records, and a 4-digit keyspace is trivially enumerable either
//! way; the PIN gates self-service deletion, nothing more.

use sha2::{Digest, Sha256};

use crate::errors::{BookingError, BookingResult};

/// One-way digest of a raw PIN. Only the digest is ever stored.
pub fn hash_pin(pin: &str) -> String {
    let hash = Sha256::digest(pin.as_bytes());
    format!("{hash:x}")
}

/// PINs are exactly four ASCII digits.
pub fn validate_pin(pin: &str) -> BookingResult<()> {
    if pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(BookingError::Validation(
            "PIN must be exactly 4 digits".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic_hex() {
        assert_eq!(hash_pin("1234"), hash_pin("1234"));
        assert_eq!(hash_pin("1234").len(), 64);
        assert_ne!(hash_pin("1234"), hash_pin("1235"));
    }

    #[test]
    fn known_digest() {
        // sha256("0000")
        assert_eq!(
            hash_pin("0000"),
            "9af15b336e6a9619928537df30b2e6a2376569fcf9d7e773eccede65606529a0"
        );
    }

    #[test]
    fn pin_format() {
        assert!(validate_pin("0042").is_ok());
        assert!(validate_pin("123").is_err());
        assert!(validate_pin("12345").is_err());
        assert!(validate_pin("12a4").is_err());
        assert!(validate_pin("").is_err());
    }
}
