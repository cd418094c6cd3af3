pub const DEFAULT_SALT_LENGTH: usize = 16; // Matches the reference implementation's default
pub const DEFAULT_HASH_LENGTH: usize = 32; // 256-bit digest
