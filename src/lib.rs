//! Argon2 password hashing front end.
//!
//! Wraps the [`argon2`] primitive behind one facade covering encoded-hash
//! workflows (hash, verify, rehash policy), raw digests, password-based key
//! derivation, and the full context path with a secret (pepper) and
//! associated data. Encoded hashes use the standard PHC string format and
//! round-trip with other Argon2 implementations.
//!
//! ```
//! use argon2kit::{Argon2Hasher, Argon2Variant, HashParams};
//!
//! let hasher = Argon2Hasher::new(Argon2Variant::Argon2id);
//! let encoded = hasher.hash(HashParams::new(2, 1024, 1), "correct horse")?;
//!
//! assert!(hasher.verify(&encoded, "correct horse")?);
//! assert!(!hasher.verify(&encoded, "battery staple")?);
//! # Ok::<(), argon2kit::Argon2KitError>(())
//! ```

mod consts;
mod dispatch;
mod phc;
mod primitive;
mod salt;
mod secret;

pub mod calibrate;
pub mod error;
pub mod hasher;
pub mod params;
pub mod variant;

pub use consts::{DEFAULT_HASH_LENGTH, DEFAULT_SALT_LENGTH};
pub use error::Argon2KitError;
pub use hasher::{Argon2Hasher, HashResult};
pub use params::HashParams;
pub use salt::{SaltSource, SystemRandom};
pub use secret::{wipe, wipe_chars, SecretMaterial};
pub use variant::{Argon2Variant, Argon2Version};
