use argon2::{Algorithm, Argon2, AssociatedData, ParamsBuilder};
use zeroize::Zeroizing;

use crate::error::Argon2KitError;
use crate::params::HashParams;
use crate::variant::Argon2Version;

/// One fully-specified request against the primitive. Secret (pepper) and
/// associated data are plain slices; empty means absent, which is the only
/// distinction the primitive itself makes.
pub(crate) struct ComputeRequest<'a> {
    pub version: Argon2Version,
    pub params: HashParams,
    pub password: &'a [u8],
    pub salt: &'a [u8],
    pub secret: &'a [u8],
    pub associated_data: &'a [u8],
    pub output_len: usize,
}

/// Run the primitive and return the raw digest in a self-wiping buffer.
///
/// Costs and lengths are handed over unvalidated; rejections come back as
/// [`Argon2KitError::InvalidParameters`] carrying the primitive's message.
pub(crate) fn compute(
    algorithm: Algorithm,
    request: &ComputeRequest<'_>,
) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
    let mut builder = ParamsBuilder::new();
    builder
        .m_cost(request.params.memory_kib)
        .t_cost(request.params.iterations)
        .p_cost(request.params.parallelism)
        .output_len(request.output_len);
    if !request.associated_data.is_empty() {
        builder.data(AssociatedData::new(request.associated_data).map_err(classify)?);
    }
    let params = builder.build().map_err(classify)?;

    let argon2 = if request.secret.is_empty() {
        Argon2::new(algorithm, request.version.to_primitive(), params)
    } else {
        Argon2::new_with_secret(
            request.secret,
            algorithm,
            request.version.to_primitive(),
            params,
        )
        .map_err(classify)?
    };

    let mut digest = Zeroizing::new(vec![0u8; request.output_len]);
    argon2
        .hash_password_into(request.password, request.salt, digest.as_mut_slice())
        .map_err(classify)?;

    Ok(digest)
}

/// Sort the primitive's typed errors into the crate taxonomy: rejections of
/// the supplied costs and lengths are `InvalidParameters`, everything else is
/// a generic computation failure.
fn classify(err: argon2::Error) -> Argon2KitError {
    use argon2::Error as E;
    match err {
        E::AdTooLong
        | E::KeyIdTooLong
        | E::MemoryTooLittle
        | E::MemoryTooMuch
        | E::OutputTooShort
        | E::OutputTooLong
        | E::PwdTooLong
        | E::SaltTooShort
        | E::SaltTooLong
        | E::SecretTooLong
        | E::ThreadsTooFew
        | E::ThreadsTooMany
        | E::TimeTooSmall => Argon2KitError::InvalidParameters(err.to_string()),
        other => Argon2KitError::Primitive(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Argon2Variant;

    fn request<'a>(params: HashParams, salt: &'a [u8], output_len: usize) -> ComputeRequest<'a> {
        ComputeRequest {
            version: Argon2Version::V0x13,
            params,
            password: b"password",
            salt,
            secret: &[],
            associated_data: &[],
            output_len,
        }
    }

    #[test]
    fn test_zero_costs_are_rejected_by_the_primitive() {
        let err = compute(
            Argon2Variant::Argon2i.algorithm(),
            &request(HashParams::new(0, 0, 0), b"saltsaltsalt", 32),
        )
        .unwrap_err();
        assert!(matches!(err, Argon2KitError::InvalidParameters(_)));
    }

    #[test]
    fn test_short_salt_is_a_parameter_error() {
        let err = compute(
            Argon2Variant::Argon2i.algorithm(),
            &request(HashParams::new(1, 8, 1), b"abc", 32),
        )
        .unwrap_err();
        assert!(matches!(err, Argon2KitError::InvalidParameters(_)));
    }

    #[test]
    fn test_tiny_output_is_a_parameter_error() {
        let err = compute(
            Argon2Variant::Argon2i.algorithm(),
            &request(HashParams::new(1, 8, 1), b"saltsaltsalt", 2),
        )
        .unwrap_err();
        assert!(matches!(err, Argon2KitError::InvalidParameters(_)));
    }

    #[test]
    fn test_secret_and_ad_change_the_digest() {
        let base = request(HashParams::new(1, 8, 1), b"saltsaltsalt", 32);
        let plain = compute(Argon2Variant::Argon2id.algorithm(), &base).unwrap();

        let peppered = compute(
            Argon2Variant::Argon2id.algorithm(),
            &ComputeRequest {
                secret: b"secret",
                ..request(HashParams::new(1, 8, 1), b"saltsaltsalt", 32)
            },
        )
        .unwrap();
        assert_ne!(plain.as_slice(), peppered.as_slice());

        let bound = compute(
            Argon2Variant::Argon2id.algorithm(),
            &ComputeRequest {
                associated_data: b"associated-data",
                ..request(HashParams::new(1, 8, 1), b"saltsaltsalt", 32)
            },
        )
        .unwrap();
        assert_ne!(plain.as_slice(), bound.as_slice());
        assert_ne!(peppered.as_slice(), bound.as_slice());
    }
}
