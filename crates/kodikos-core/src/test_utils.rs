//! Helpers shared by unit tests that touch process-wide state.

use std::path::PathBuf;

/// Puts the process back in the directory it was in when created.
pub struct RestoreCwd(PathBuf);

impl RestoreCwd {
    pub fn capture() -> Self {
        RestoreCwd(std::env::current_dir().unwrap())
    }
}

impl Drop for RestoreCwd {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}
