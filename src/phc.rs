use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine as _;

use crate::error::Argon2KitError;
use crate::params::HashParams;
use crate::variant::{Argon2Variant, Argon2Version};

/// Layout:
///   $argon2<variant>$v=<version>$m=<mem>,t=<iter>,p=<par>$<salt>$<hash>
/// with unpadded standard base64 in the last two segments. A missing hash
/// segment is invalid.

/// Fields recovered by a full decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodedHash {
    pub variant: Argon2Variant,
    pub version: Argon2Version,
    pub params: HashParams,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

/// Structural slices of an encoded hash, before any base64 work.
struct Fields<'a> {
    variant: Argon2Variant,
    version_digits: &'a str,
    params: HashParams,
    salt_b64: &'a str,
    hash_b64: &'a str,
}

/// Render the canonical encoded form. Deterministic, and built into a buffer
/// sized exactly by [`encoded_len`] so it never reallocates.
pub(crate) fn encode(
    variant: Argon2Variant,
    version: Argon2Version,
    params: HashParams,
    salt: &[u8],
    hash: &[u8],
) -> String {
    use std::fmt::Write;

    let exact = encoded_len(variant, version, params, salt.len(), hash.len());
    let mut out = String::with_capacity(exact);

    out.push('$');
    out.push_str(variant.tag());
    let _ = write!(
        out,
        "$v={}$m={},t={},p={}",
        version.number(),
        params.memory_kib,
        params.iterations,
        params.parallelism
    );
    out.push('$');
    STANDARD_NO_PAD.encode_string(salt, &mut out);
    out.push('$');
    STANDARD_NO_PAD.encode_string(hash, &mut out);

    debug_assert_eq!(out.len(), exact);
    out
}

/// Fully decode an encoded hash, including its base64 payload.
pub(crate) fn decode(encoded: &str) -> Result<DecodedHash, Argon2KitError> {
    let invalid = || Argon2KitError::InvalidHashFormat(encoded.to_string());
    let fields = parse_fields(encoded)?;

    let number: u32 = fields.version_digits.parse().map_err(|_| invalid())?;
    let version = Argon2Version::from_number(number).ok_or_else(invalid)?;

    let salt = STANDARD_NO_PAD
        .decode(fields.salt_b64)
        .map_err(|_| invalid())?;
    let hash = STANDARD_NO_PAD
        .decode(fields.hash_b64)
        .map_err(|_| invalid())?;

    Ok(DecodedHash {
        variant: fields.variant,
        version,
        params: fields.params,
        salt,
        hash,
    })
}

/// Pull the cost parameters out of an encoded hash without touching the
/// base64 payload. This is all a rehash policy check needs.
pub(crate) fn extract_params(encoded: &str) -> Result<HashParams, Argon2KitError> {
    Ok(parse_fields(encoded)?.params)
}

/// Exact length of the encoded form: fixed punctuation plus the decimal digit
/// counts and unpadded-base64 expansion of every variable field.
pub(crate) fn encoded_len(
    variant: Argon2Variant,
    version: Argon2Version,
    params: HashParams,
    salt_len: usize,
    hash_len: usize,
) -> usize {
    1 + variant.tag().len()
        + 3 // "$v="
        + digits(version.number())
        + 3 // "$m="
        + digits(params.memory_kib)
        + 3 // ",t="
        + digits(params.iterations)
        + 3 // ",p="
        + digits(params.parallelism)
        + 1
        + b64_len(salt_len)
        + 1
        + b64_len(hash_len)
}

fn parse_fields(encoded: &str) -> Result<Fields<'_>, Argon2KitError> {
    let invalid = || Argon2KitError::InvalidHashFormat(encoded.to_string());

    let mut parts = encoded.split('$');
    if parts.next() != Some("") {
        return Err(invalid());
    }
    let tag = parts.next().ok_or_else(invalid)?;
    let version_field = parts.next().ok_or_else(invalid)?;
    let params_field = parts.next().ok_or_else(invalid)?;
    let salt_b64 = parts.next().ok_or_else(invalid)?;
    let hash_b64 = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    let variant: Argon2Variant = tag.parse().map_err(|_| invalid())?;

    let version_digits = version_field.strip_prefix("v=").ok_or_else(invalid)?;
    if version_digits.is_empty() || !version_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let params = parse_params(params_field).ok_or_else(invalid)?;

    if salt_b64.is_empty() || hash_b64.is_empty() {
        return Err(invalid());
    }

    Ok(Fields {
        variant,
        version_digits,
        params,
        salt_b64,
        hash_b64,
    })
}

fn parse_params(field: &str) -> Option<HashParams> {
    let mut numbers = field.split(',');
    let memory_kib = numbers.next()?.strip_prefix("m=")?.parse().ok()?;
    let iterations = numbers.next()?.strip_prefix("t=")?.parse().ok()?;
    let parallelism = numbers.next()?.strip_prefix("p=")?.parse().ok()?;
    if numbers.next().is_some() {
        return None;
    }
    Some(HashParams {
        iterations,
        memory_kib,
        parallelism,
    })
}

/// Unpadded base64 length: ceil(4n / 3).
fn b64_len(n: usize) -> usize {
    (n * 4 + 2) / 3
}

fn digits(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}
