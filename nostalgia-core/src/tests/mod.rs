use crate::Config;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_file: PathBuf) -> Config {
    Config {
        data_file,
        password: None,
        editor: None,
        date_format: "%d %b %Y".to_string(),
    }
}
