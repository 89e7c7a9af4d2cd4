//! Secret generation.
//!
//! Credentials (passwords, hex keys) are drawn from the operating system
//! CSPRNG. Content hashes are identifiers, not credentials: their input comes
//! from a fast non-cryptographic generator and only the SHA-256 step is
//! required to be strong. Do not use [`SecretFactory::generate_content_hash`]
//! for anything an attacker must not guess.

use rand::distributions::Alphanumeric;
use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants::PASSWORD_ALPHABET;

/// Shape of a generated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    /// Letters, digits and `!-_`.
    Password,
    /// Lowercase hex encoding of random bytes.
    HexToken,
    /// SHA-256 digest of a random alphanumeric string.
    ContentHash,
}

/// A generated value. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    kind: SecretKind,
    strength: usize,
    value: String,
}

impl Secret {
    fn new(kind: SecretKind, strength: usize, value: String) -> Self {
        Self {
            kind,
            strength,
            value,
        }
    }

    pub fn kind(&self) -> SecretKind {
        self.kind
    }

    /// Requested length: characters for passwords and hash inputs, random
    /// bytes for hex tokens.
    pub fn strength(&self) -> usize {
        self.strength
    }

    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Value wrapped in double quotes, as written for password fields.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.value)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("kind", &self.kind)
            .field("strength", &self.strength)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Produces [`Secret`]s. Stateless; every call draws fresh randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecretFactory;

impl SecretFactory {
    pub fn new() -> Self {
        Self
    }

    /// Random password of exactly `length` characters from the OS CSPRNG.
    ///
    /// The factory does not enforce a minimum; callers pass
    /// [`PASSWORD_LENGTH`](crate::core::constants::PASSWORD_LENGTH) unless
    /// they have a reason not to.
    pub fn generate_password(&self, length: usize) -> Secret {
        trace!(length, "generating password");
        let value = (0..length)
            .map(|_| PASSWORD_ALPHABET[OsRng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
            .collect();
        Secret::new(SecretKind::Password, length, value)
    }

    /// `byte_length` random bytes from the OS CSPRNG, lowercase hex encoded
    /// (`2 * byte_length` characters).
    pub fn generate_hex_token(&self, byte_length: usize) -> Secret {
        trace!(byte_length, "generating hex token");
        let mut bytes = Zeroizing::new(vec![0u8; byte_length]);
        OsRng.fill_bytes(&mut bytes);
        Secret::new(SecretKind::HexToken, byte_length, hex::encode(&*bytes))
    }

    /// SHA-256 of a random alphanumeric string of `input_length` characters.
    ///
    /// The input comes from `SmallRng`; the result is a public identifier.
    pub fn generate_content_hash(&self, input_length: usize) -> Secret {
        trace!(input_length, "generating content hash");
        let mut rng = SmallRng::from_entropy();
        let input: Zeroizing<String> = Zeroizing::new(
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(input_length)
                .map(char::from)
                .collect(),
        );
        let digest = Sha256::digest(input.as_bytes());
        Secret::new(SecretKind::ContentHash, input_length, hex::encode(digest))
    }
}
