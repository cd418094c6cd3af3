use zeroize::Zeroizing;

use crate::error::Argon2KitError;
use crate::primitive::{self, ComputeRequest};
use crate::variant::Argon2Variant;

/// One primitive entry point with the variant already bound.
pub(crate) type ComputeFn =
    fn(&ComputeRequest<'_>) -> Result<Zeroizing<Vec<u8>>, Argon2KitError>;

/// Entry points a variant provides. `hash_raw` is absent where the reference
/// library never exposed a raw-hash call; `compute_ctx` is the full-context
/// path every variant supports.
pub(crate) struct VariantOps {
    pub hash_encoded: ComputeFn,
    pub hash_raw: Option<ComputeFn>,
    pub verify_encoded: ComputeFn,
    pub compute_ctx: ComputeFn,
}

fn compute_argon2d(
    request: &ComputeRequest<'_>,
) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
    primitive::compute(Argon2Variant::Argon2d.algorithm(), request)
}

fn compute_argon2i(
    request: &ComputeRequest<'_>,
) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
    primitive::compute(Argon2Variant::Argon2i.algorithm(), request)
}

fn compute_argon2id(
    request: &ComputeRequest<'_>,
) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
    primitive::compute(Argon2Variant::Argon2id.algorithm(), request)
}

// Argon2d never had a raw-hash entry point; the gap stays visible instead of
// being silently routed through the context path.
static ARGON2D_OPS: VariantOps = VariantOps {
    hash_encoded: compute_argon2d,
    hash_raw: None,
    verify_encoded: compute_argon2d,
    compute_ctx: compute_argon2d,
};

static ARGON2I_OPS: VariantOps = VariantOps {
    hash_encoded: compute_argon2i,
    hash_raw: Some(compute_argon2i),
    verify_encoded: compute_argon2i,
    compute_ctx: compute_argon2i,
};

static ARGON2ID_OPS: VariantOps = VariantOps {
    hash_encoded: compute_argon2id,
    hash_raw: Some(compute_argon2id),
    verify_encoded: compute_argon2id,
    compute_ctx: compute_argon2id,
};

fn ops_for(variant: Argon2Variant) -> &'static VariantOps {
    match variant {
        Argon2Variant::Argon2d => &ARGON2D_OPS,
        Argon2Variant::Argon2i => &ARGON2I_OPS,
        Argon2Variant::Argon2id => &ARGON2ID_OPS,
    }
}

/// A variant bound together with the salt and hash length policy it was
/// constructed with. All fields are fixed for the dispatcher's life.
#[derive(Debug)]
pub(crate) struct Dispatcher {
    variant: Argon2Variant,
    ops: &'static VariantOps,
    default_salt_length: usize,
    default_hash_length: usize,
}

impl Dispatcher {
    pub fn bind(
        variant: Argon2Variant,
        default_salt_length: usize,
        default_hash_length: usize,
    ) -> Self {
        Self {
            variant,
            ops: ops_for(variant),
            default_salt_length,
            default_hash_length,
        }
    }

    /// Bind from a configuration tag such as `"argon2id"`. Unknown tags fail
    /// here, at construction, not at call time.
    pub fn bind_tag(
        tag: &str,
        default_salt_length: usize,
        default_hash_length: usize,
    ) -> Result<Self, Argon2KitError> {
        Ok(Self::bind(
            tag.parse()?,
            default_salt_length,
            default_hash_length,
        ))
    }

    pub fn variant(&self) -> Argon2Variant {
        self.variant
    }

    pub fn default_salt_length(&self) -> usize {
        self.default_salt_length
    }

    pub fn default_hash_length(&self) -> usize {
        self.default_hash_length
    }

    pub fn hash_encoded(
        &self,
        request: &ComputeRequest<'_>,
    ) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
        (self.ops.hash_encoded)(request)
    }

    pub fn hash_raw(
        &self,
        request: &ComputeRequest<'_>,
    ) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
        match self.ops.hash_raw {
            Some(entry) => entry(request),
            None => Err(Argon2KitError::UnsupportedVariant(format!(
                "{} provides no raw-hash entry point",
                self.variant
            ))),
        }
    }

    pub fn verify_encoded(
        &self,
        request: &ComputeRequest<'_>,
    ) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
        (self.ops.verify_encoded)(request)
    }

    pub fn compute_ctx(
        &self,
        request: &ComputeRequest<'_>,
    ) -> Result<Zeroizing<Vec<u8>>, Argon2KitError> {
        (self.ops.compute_ctx)(request)
    }
}

impl std::fmt::Debug for VariantOps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantOps")
            .field("hash_raw", &self.hash_raw.is_some())
            .finish()
    }
}
