//! slowcore — shared library for slow computer applications

pub mod storage;
pub mod theme;

pub use theme::SlowTheme;

/// Read a path override from an environment variable.
/// Empty values are treated as unset.
pub fn env_path(var: &str) -> Option<std::path::PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(std::path::PathBuf::from)
}
