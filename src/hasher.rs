use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::consts::{DEFAULT_HASH_LENGTH, DEFAULT_SALT_LENGTH};
use crate::dispatch::Dispatcher;
use crate::error::Argon2KitError;
use crate::params::HashParams;
use crate::phc;
use crate::primitive::ComputeRequest;
use crate::salt::{SaltSource, SystemRandom};
use crate::secret::{unguard, SecretMaterial};
use crate::variant::{Argon2Variant, Argon2Version};

/// Raw and encoded forms of one digest, produced by a single computation so
/// the two can never disagree on parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashResult {
    pub raw: Vec<u8>,
    pub encoded: String,
}

/// Argon2 hashing front end bound to one variant.
///
/// Construction fixes the variant and the default salt/hash lengths; after
/// that the instance holds no mutable state, so one hasher can be shared
/// across threads without locking. Every call is synchronous and occupies the
/// calling thread for the duration of the memory-hard computation.
///
/// Password inputs are borrowed for the duration of one call and never
/// retained; transient buffers derived from them are zero-filled on every
/// exit path.
pub struct Argon2Hasher {
    dispatcher: Dispatcher,
    salt_source: Box<dyn SaltSource>,
}

impl Argon2Hasher {
    /// Hasher with the default 16-byte salt / 32-byte hash policy.
    pub fn new(variant: Argon2Variant) -> Self {
        Self::with_lengths(variant, DEFAULT_SALT_LENGTH, DEFAULT_HASH_LENGTH)
    }

    /// Override the default salt and hash lengths. They are fixed for the
    /// life of the instance and apply whenever a call does not supply its own.
    pub fn with_lengths(
        variant: Argon2Variant,
        default_salt_length: usize,
        default_hash_length: usize,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::bind(variant, default_salt_length, default_hash_length),
            salt_source: Box::new(SystemRandom),
        }
    }

    /// Construct from a configuration tag such as `"argon2id"`. An unknown
    /// tag is a configuration error, reported here rather than at call time.
    pub fn from_tag(tag: &str) -> Result<Self, Argon2KitError> {
        Ok(Self {
            dispatcher: Dispatcher::bind_tag(tag, DEFAULT_SALT_LENGTH, DEFAULT_HASH_LENGTH)?,
            salt_source: Box::new(SystemRandom),
        })
    }

    /// Replace the salt generator. Tests substitute a fixed source to get
    /// deterministic salts.
    pub fn with_salt_source(mut self, source: Box<dyn SaltSource>) -> Self {
        self.salt_source = source;
        self
    }

    pub fn variant(&self) -> Argon2Variant {
        self.dispatcher.variant()
    }

    pub fn default_salt_length(&self) -> usize {
        self.dispatcher.default_salt_length()
    }

    pub fn default_hash_length(&self) -> usize {
        self.dispatcher.default_hash_length()
    }

    /// Hash a password with a freshly generated salt of the default length.
    pub fn hash<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
    ) -> Result<String, Argon2KitError> {
        let salt = self.generate_salt();
        self.hash_with_salt(params, password, &salt)
    }

    /// Hash a password with a caller-supplied salt.
    pub fn hash_with_salt<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
        salt: &[u8],
    ) -> Result<String, Argon2KitError> {
        let password = password.into();
        let pwd = password.bytes();
        let digest = self.dispatcher.hash_encoded(&ComputeRequest {
            version: Argon2Version::default(),
            params,
            password: pwd.as_ref(),
            salt,
            secret: &[],
            associated_data: &[],
            output_len: self.default_hash_length(),
        })?;
        Ok(phc::encode(
            self.variant(),
            Argon2Version::default(),
            params,
            salt,
            &digest,
        ))
    }

    /// Check a password against an encoded hash.
    ///
    /// `Ok(false)` is the mismatch result. A string that does not parse, or
    /// one whose tag names a different variant than this hasher is bound to,
    /// is an [`Argon2KitError::InvalidHashFormat`] instead; a primitive
    /// rejection propagates unchanged and is never folded into `false`.
    pub fn verify<'p>(
        &self,
        encoded: &str,
        password: impl Into<SecretMaterial<'p>>,
    ) -> Result<bool, Argon2KitError> {
        let decoded = phc::decode(encoded)?;
        if decoded.variant != self.variant() {
            return Err(Argon2KitError::InvalidHashFormat(format!(
                "hash is {}, this hasher is bound to {}",
                decoded.variant,
                self.variant()
            )));
        }

        let password = password.into();
        let pwd = password.bytes();
        let recomputed = self.dispatcher.verify_encoded(&ComputeRequest {
            version: decoded.version,
            params: decoded.params,
            password: pwd.as_ref(),
            salt: &decoded.salt,
            secret: &[],
            associated_data: &[],
            output_len: decoded.hash.len(),
        })?;
        Ok(bool::from(recomputed.ct_eq(&decoded.hash)))
    }

    /// Compute the undecorated digest at the default hash length.
    ///
    /// Argon2d provides no raw-hash entry point and fails with
    /// [`Argon2KitError::UnsupportedVariant`].
    pub fn raw_hash<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
        salt: &[u8],
    ) -> Result<Vec<u8>, Argon2KitError> {
        let password = password.into();
        let pwd = password.bytes();
        let digest = self.dispatcher.hash_raw(&self.basic_request(
            params,
            pwd.as_ref(),
            salt,
            self.default_hash_length(),
        ))?;
        Ok(unguard(digest))
    }

    /// Derive key material from a password.
    ///
    /// Same computation and entry point as [`raw_hash`](Self::raw_hash) with
    /// a caller-chosen output length, but the output is a key, not a hash to
    /// store - it comes back in a self-wiping buffer.
    pub fn pbkdf<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
        salt: &[u8],
        key_length: usize,
    ) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
        let password = password.into();
        let pwd = password.bytes();
        self.dispatcher
            .hash_raw(&self.basic_request(params, pwd.as_ref(), salt, key_length))
    }

    /// One computation returning both the raw digest and its encoded form.
    ///
    /// `hash_length` of `None` selects the default configured at
    /// construction.
    pub fn hash_advanced<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
        salt: &[u8],
        hash_length: Option<usize>,
        version: Argon2Version,
    ) -> Result<HashResult, Argon2KitError> {
        let output_len = hash_length.unwrap_or_else(|| self.default_hash_length());
        let password = password.into();
        let pwd = password.bytes();
        let digest = self.dispatcher.compute_ctx(&ComputeRequest {
            version,
            params,
            password: pwd.as_ref(),
            salt,
            secret: &[],
            associated_data: &[],
            output_len,
        })?;
        let encoded = phc::encode(self.variant(), version, params, salt, &digest);
        Ok(HashResult {
            raw: unguard(digest),
            encoded,
        })
    }

    /// Full context path: secret (pepper) and associated data participate in
    /// the digest. Empty slices mean absent.
    pub fn raw_hash_advanced<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
        salt: &[u8],
        secret: &[u8],
        associated_data: &[u8],
        hash_length: Option<usize>,
        version: Argon2Version,
    ) -> Result<Vec<u8>, Argon2KitError> {
        let output_len = hash_length.unwrap_or_else(|| self.default_hash_length());
        let password = password.into();
        let pwd = password.bytes();
        let digest = self.dispatcher.compute_ctx(&ComputeRequest {
            version,
            params,
            password: pwd.as_ref(),
            salt,
            secret,
            associated_data,
            output_len,
        })?;
        Ok(unguard(digest))
    }

    /// Verify a password against a raw digest computed with secret and
    /// associated data.
    ///
    /// `Ok(false)` only means a completed comparison that differs; a
    /// primitive rejection surfaces as an error, never as `false`.
    pub fn verify_advanced<'p>(
        &self,
        params: HashParams,
        password: impl Into<SecretMaterial<'p>>,
        salt: &[u8],
        secret: &[u8],
        associated_data: &[u8],
        version: Argon2Version,
        expected: &[u8],
    ) -> Result<bool, Argon2KitError> {
        let password = password.into();
        let pwd = password.bytes();
        let recomputed = self.dispatcher.compute_ctx(&ComputeRequest {
            version,
            params,
            password: pwd.as_ref(),
            salt,
            secret,
            associated_data,
            output_len: expected.len(),
        })?;
        Ok(bool::from(recomputed.ct_eq(expected)))
    }

    /// True when any parameter stored in the hash is strictly below the given
    /// minimum. Parses the string structurally only; salt and digest stay
    /// encoded.
    pub fn needs_rehash(
        &self,
        encoded: &str,
        minimum: HashParams,
    ) -> Result<bool, Argon2KitError> {
        let actual = phc::extract_params(encoded)?;
        Ok(actual.memory_kib < minimum.memory_kib
            || actual.iterations < minimum.iterations
            || actual.parallelism < minimum.parallelism)
    }

    /// Generate a salt of the default length.
    pub fn generate_salt(&self) -> Vec<u8> {
        self.generate_salt_with_length(self.default_salt_length())
    }

    /// Generate a salt of the given length in bytes.
    pub fn generate_salt_with_length(&self, length: usize) -> Vec<u8> {
        let mut salt = vec![0u8; length];
        self.salt_source.fill(&mut salt);
        salt
    }

    fn basic_request<'a>(
        &self,
        params: HashParams,
        password: &'a [u8],
        salt: &'a [u8],
        output_len: usize,
    ) -> ComputeRequest<'a> {
        ComputeRequest {
            version: Argon2Version::default(),
            params,
            password,
            salt,
            secret: &[],
            associated_data: &[],
            output_len,
        }
    }
}

impl fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("variant", &self.variant())
            .field("default_salt_length", &self.default_salt_length())
            .field("default_hash_length", &self.default_hash_length())
            .finish()
    }
}
