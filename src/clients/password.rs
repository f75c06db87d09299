//! Salted password hashing for client credentials.
//!
//! Stored format is `<salt_hex>$<digest_hex>` where the digest is
//! SHA-256 over salt bytes followed by the password bytes. The salt is
//! 16 random bytes drawn per registration.

use sha2::{Digest, Sha256};

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let digest = salted_digest(&salt, password);

    format!("{}${}", hex::encode(salt), hex::encode(digest))
}

/// Verify a password against a stored `salt$digest` hash.
///
/// Returns `false` for wrong passwords and for malformed stored values.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };

    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };

    let Ok(expected) = hex::decode(digest_hex) else {
        return false;
    };

    salted_digest(&salt, password) == expected
}

fn salted_digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let stored = hash_password("1234");

        assert!(verify_password("1234", &stored));
        assert!(!verify_password("12345", &stored));
    }

    #[test]
    fn hashes_are_salted() {
        // Same password, different salt, different stored value
        assert_ne!(hash_password("1234"), hash_password("1234"));
    }

    #[test]
    fn stored_format_is_salt_and_digest() {
        let stored = hash_password("1234");
        let (salt_hex, digest_hex) = stored.split_once('$').unwrap();

        assert_eq!(salt_hex.len(), 32); // 16 bytes
        assert_eq!(digest_hex.len(), 64); // 32 bytes
    }

    #[test]
    fn malformed_stored_values_never_verify() {
        assert!(!verify_password("1234", ""));
        assert!(!verify_password("1234", "no-separator"));
        assert!(!verify_password("1234", "zz$zz"));
    }
}
