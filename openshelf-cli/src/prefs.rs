use std::path::PathBuf;

use log::trace;
use openshelf::theme::FileStore;

/// Environment override for the preference file location.
pub const CONFIG_ENV: &str = "OPENSHELF_CONFIG";

const CONFIG_FILE: &str = "openshelf/config.toml";

/// Opens the preference store at the explicit `path` when given, otherwise
/// at the default location.
pub fn store(path: Option<PathBuf>) -> FileStore {
    let path = path.unwrap_or_else(default_path);
    trace!("Using the preference file at '{}'", path.display());
    FileStore::new(path)
}

// Resolution order: env override, XDG config dir, ~/.config, current
// directory as the last resort.
fn default_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join(CONFIG_FILE);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join(CONFIG_FILE);
    }
    PathBuf::from("openshelf.toml")
}
