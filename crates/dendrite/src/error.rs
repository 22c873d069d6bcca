//! Error types for the layout engine.
//!
//! Placement itself has no error kinds: a request that exhausts its retry
//! budget degrades to an overlapping point rather than failing, because a
//! concept map that temporarily overlaps is preferable to one that fails to
//! render a node. The only fallible boundary is configuration.

use thiserror::Error;

/// Validation failures for [`crate::config::LayoutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout parameter `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("forbidden sector must lie strictly between 0 and 2π radians, got {0}")]
    ForbiddenSector(f32),

    #[error("layout parameter `{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("layout parameter `{name}` must be at least 1, got {value}")]
    ZeroCount { name: &'static str, value: usize },
}
