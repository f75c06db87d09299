//! HMAC signatures for client events.
//!
//! The clients server signs every event payload it publishes and the
//! accounts server verifies the signature before touching its client
//! replica, so only the holder of the shared secret can mutate it.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the payload signature.
pub const SIGNATURE_HEADER: &str = "X-Event-Signature";

/// Header carrying the unique event id.
pub const EVENT_ID_HEADER: &str = "X-Event-Id";

/// Generate an HMAC-SHA256 signature over a payload.
///
/// # Format
///
/// `sha256=<hex_encoded_hmac>`
pub fn sign(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC key length is valid");
    mac.update(payload);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

/// Verify a signature produced by [`sign`].
///
/// Uses the Mac verifier, so the comparison is constant time. Returns
/// `false` for a malformed header, wrong prefix, or digest mismatch.
pub fn verify(secret: &str, payload: &[u8], signature: &str) -> bool {
    let Some(hex_digest) = signature.strip_prefix("sha256=") else {
        return false;
    };

    let Ok(digest) = hex::decode(hex_digest) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC key length is valid");
    mac.update(payload);
    mac.verify_slice(&digest).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let signature = sign("secret", b"{\"event_type\":\"client.created\"}");
        assert!(signature.starts_with("sha256="));
        assert!(verify(
            "secret",
            b"{\"event_type\":\"client.created\"}",
            &signature
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let signature = sign("secret", b"payload");
        assert!(!verify("secret", b"payload2", &signature));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let signature = sign("secret", b"payload");
        assert!(!verify("other-secret", b"payload", &signature));
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        assert!(!verify("secret", b"payload", ""));
        assert!(!verify("secret", b"payload", "md5=abcdef"));
        assert!(!verify("secret", b"payload", "sha256=not-hex"));
    }
}
