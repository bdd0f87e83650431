//! Admin token verification.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Verifier for the single configured admin Bearer token.
///
/// The configured token is hashed once at startup; presented tokens are
/// hashed and compared in constant time, so neither token length nor a
/// partial prefix match leaks through timing.
pub struct AdminAuth {
    digest: [u8; 32],
}

impl AdminAuth {
    /// Creates a verifier for the given token.
    ///
    /// The token must be non-empty; configuration validation enforces this
    /// before the server starts.
    pub fn new(token: &str) -> Self {
        Self {
            digest: Sha256::digest(token.as_bytes()).into(),
        }
    }

    /// Whether `presented` matches the configured admin token.
    pub fn verify(&self, presented: &str) -> bool {
        let presented: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        self.digest.ct_eq(&presented).into()
    }
}
