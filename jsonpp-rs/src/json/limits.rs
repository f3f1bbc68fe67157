//! Resource limits for parsing.
//!
//! The grammar itself puts no bound on input size, nesting or string
//! length. Callers that parse untrusted files pick a preset or tune the
//! fields directly.
//!
//! - E140_InputTooLarge: total input size limit
//! - E141_NestingTooDeep: maximum nesting depth
//! - E142_StringTooLong: maximum string length
//!
//! Nesting is always capped at [`MAX_NESTING_DEPTH`], whatever the preset:
//! dropping, comparing and formatting a [`Value`](super::Value) recurse once
//! per level.

/// Hard ceiling on nesting depth, applied on top of every [`Limits`].
pub const MAX_NESTING_DEPTH: u64 = 1024;

/// Parsing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (E140)
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects (E141)
    pub max_nesting_depth: u64,
    /// Maximum string length in bytes (E142)
    pub max_string_length: u64,
}

impl Limits {
    /// Tight limits for small configuration files.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_nesting_depth: 64,        // 64 levels
            max_string_length: 64 * 1024, // 64 KiB
        }
    }

    /// Generous limits; the default.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64 MiB
            max_nesting_depth: 512,           // 512 levels
            max_string_length: 16 * 1024 * 1024,
        }
    }

    /// No size limits. Nesting stops at [`MAX_NESTING_DEPTH`].
    pub const fn unbounded() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: MAX_NESTING_DEPTH,
            max_string_length: u64::MAX,
        }
    }

    /// Nesting depth actually enforced: the configured value, clamped to
    /// [`MAX_NESTING_DEPTH`].
    pub const fn nesting_depth(&self) -> u64 {
        if self.max_nesting_depth < MAX_NESTING_DEPTH {
            self.max_nesting_depth
        } else {
            MAX_NESTING_DEPTH
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert_eq!(limits.max_input_size, 1024 * 1024);
        assert_eq!(limits.max_nesting_depth, 64);
        assert_eq!(limits.max_string_length, 64 * 1024);
    }

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(Limits::default(), Limits::lenient());
        assert!(Limits::lenient().max_input_size > Limits::strict().max_input_size);
        assert!(Limits::unbounded().max_nesting_depth > Limits::lenient().max_nesting_depth);
    }

    #[test]
    fn test_nesting_depth_is_clamped() {
        assert_eq!(Limits::strict().nesting_depth(), 64);
        assert_eq!(Limits::unbounded().nesting_depth(), MAX_NESTING_DEPTH);

        let mut limits = Limits::lenient();
        limits.max_nesting_depth = u64::MAX;
        assert_eq!(limits.nesting_depth(), MAX_NESTING_DEPTH);
    }
}
