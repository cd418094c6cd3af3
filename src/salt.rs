use rand::rngs::OsRng;
use rand::RngCore;

/// Source of salt bytes for the hashing facade.
///
/// The facade takes this as an explicit dependency instead of reaching for a
/// process-wide generator, so tests can substitute a deterministic source.
/// Implementations must be safe for concurrent use from multiple threads.
pub trait SaltSource: Send + Sync {
    fn fill(&self, buf: &mut [u8]);
}

/// The operating system CSPRNG. Stateless, so concurrent callers need no
/// locking, and successive outputs are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl SaltSource for SystemRandom {
    fn fill(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}
