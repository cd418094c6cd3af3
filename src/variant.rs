use std::fmt;
use std::str::FromStr;

use argon2::{Algorithm, Version};

use crate::error::Argon2KitError;

/// Argon2 algorithm variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argon2Variant {
    /// Data-dependent addressing. Fast, but only for side-channel-free environments.
    Argon2d,
    /// Data-independent addressing, resistant to side channels.
    Argon2i,
    /// Hybrid of the two; the recommended default for password hashing.
    Argon2id,
}

impl Argon2Variant {
    /// PHC identifier, as it appears after the leading `$` of an encoded hash.
    pub fn tag(self) -> &'static str {
        match self {
            Argon2Variant::Argon2d => "argon2d",
            Argon2Variant::Argon2i => "argon2i",
            Argon2Variant::Argon2id => "argon2id",
        }
    }

    pub(crate) fn algorithm(self) -> Algorithm {
        match self {
            Argon2Variant::Argon2d => Algorithm::Argon2d,
            Argon2Variant::Argon2i => Algorithm::Argon2i,
            Argon2Variant::Argon2id => Algorithm::Argon2id,
        }
    }
}

impl fmt::Display for Argon2Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Argon2Variant {
    type Err = Argon2KitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "argon2d" => Ok(Argon2Variant::Argon2d),
            "argon2i" => Ok(Argon2Variant::Argon2i),
            "argon2id" => Ok(Argon2Variant::Argon2id),
            other => Err(Argon2KitError::UnsupportedVariant(other.to_string())),
        }
    }
}

/// Version of the Argon2 algorithm, embedded in encoded hashes as `v=16` / `v=19`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Argon2Version {
    V0x10,
    #[default]
    V0x13,
}

impl Argon2Version {
    /// Decimal value used on the wire.
    pub fn number(self) -> u32 {
        match self {
            Argon2Version::V0x10 => 0x10,
            Argon2Version::V0x13 => 0x13,
        }
    }

    pub(crate) fn from_number(number: u32) -> Option<Self> {
        match number {
            0x10 => Some(Argon2Version::V0x10),
            0x13 => Some(Argon2Version::V0x13),
            _ => None,
        }
    }

    pub(crate) fn to_primitive(self) -> Version {
        match self {
            Argon2Version::V0x10 => Version::V0x10,
            Argon2Version::V0x13 => Version::V0x13,
        }
    }
}
