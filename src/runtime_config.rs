//! Environment-based runtime configuration.
//!
//! One knob: `FAKEAPI_STACK_SIZE` sets the stack size for the per-connection
//! coroutines, in decimal (`16384`) or hex (`0x4000`). Generation is shallow
//! and CPU-bound, so the 16 KB default is plenty; raise it only if producers
//! grow deeper call chains.

use std::env;

const DEFAULT_STACK_SIZE: usize = 0x4000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = match env::var("FAKEAPI_STACK_SIZE") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(DEFAULT_STACK_SIZE)
                } else {
                    val.parse().unwrap_or(DEFAULT_STACK_SIZE)
                }
            }
            Err(_) => DEFAULT_STACK_SIZE,
        };
        RuntimeConfig { stack_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // single test: the variable is process-wide state
    #[test]
    fn test_stack_size_parsing() {
        env::remove_var("FAKEAPI_STACK_SIZE");
        assert_eq!(RuntimeConfig::from_env().stack_size, 0x4000);
        env::set_var("FAKEAPI_STACK_SIZE", "0x8000");
        assert_eq!(RuntimeConfig::from_env().stack_size, 0x8000);
        env::set_var("FAKEAPI_STACK_SIZE", "32768");
        assert_eq!(RuntimeConfig::from_env().stack_size, 32768);
        env::set_var("FAKEAPI_STACK_SIZE", "garbage");
        assert_eq!(RuntimeConfig::from_env().stack_size, 0x4000);
        env::remove_var("FAKEAPI_STACK_SIZE");
    }
}
