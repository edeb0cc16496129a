//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for ztodo's trace log.
///
/// Located at `/host/.local/share/zellij/ztodo` in the Zellij sandbox,
/// where `/host` points to the cwd of the last focused terminal (typically
/// the user's home directory), making the effective path
/// `~/.local/share/zellij/ztodo`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("ztodo")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_sandbox_relative() {
        assert_eq!(
            get_data_dir().to_str().unwrap(),
            "/host/.local/share/zellij/ztodo"
        );
    }
}
