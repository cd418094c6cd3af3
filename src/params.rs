use serde::{Deserialize, Serialize};

/// Cost parameters for one hashing call.
///
/// Zero values are passed through to the primitive, which rejects them with a
/// parameter error; the facade never pre-validates costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    /// Number of passes over memory (t_cost).
    pub iterations: u32,
    /// Memory usage in kibibytes (m_cost).
    pub memory_kib: u32,
    /// Number of compute lanes, also used as the thread count.
    pub parallelism: u32,
}

impl HashParams {
    pub const fn new(iterations: u32, memory_kib: u32, parallelism: u32) -> Self {
        Self {
            iterations,
            memory_kib,
            parallelism,
        }
    }

    /// Balanced parameters for interactive logins, targeting roughly
    /// 0.5-1 second of hashing time on server hardware.
    pub fn interactive() -> Self {
        Self::new(3, 65536, 4) // 64 MiB
    }

    /// Reduced footprint for constrained devices.
    pub fn moderate() -> Self {
        Self::new(3, 32768, 2) // 32 MiB
    }

    /// High-cost parameters for rarely-unlocked secrets. May take several
    /// seconds per hash.
    pub fn sensitive() -> Self {
        Self::new(4, 262144, 4) // 256 MiB
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::interactive()
    }
}
