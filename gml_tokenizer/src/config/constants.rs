//! Compile-time constants
//!
//! Boundaries that are baked into the binary rather than read from the
//! environment. The scanning core itself is unbounded by design; these limits
//! only guard file ingestion.

/// Compile-time constants grouped by subsystem
pub mod compile_time {
    /// File ingestion boundaries
    pub mod file_processing {
        /// Maximum accepted source file size in bytes (10 MiB)
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Threshold above which a file is reported as large (1 MiB)
        pub const LARGE_FILE_THRESHOLD: u64 = 1024 * 1024;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::file_processing::*;

    #[test]
    fn test_limits_are_consistent() {
        assert!(LARGE_FILE_THRESHOLD <= MAX_FILE_SIZE);
        assert!(MAX_FILE_SIZE > 0);
    }
}
