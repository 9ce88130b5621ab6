//! Configuration path utilities for monodeps.
//!
//! This module resolves the snapshot file path and expands shell
//! variables like `~` in paths.

/// Default path for the dependency snapshot file
const DEFAULT_SNAPSHOT_PATH: &str = "~/.monodeps/dependencies.txt";

/// Resolves the snapshot file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the
/// default snapshot path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use monodeps_core::config::get_snapshot_path;
///
/// // Use default path
/// let default_path = get_snapshot_path(&None);
///
/// // Use custom path
/// let custom_path = get_snapshot_path(&Some("/path/to/deps.txt".to_string()));
/// ```
pub fn get_snapshot_path(snapshot_path_arg: &Option<String>) -> String {
    let snapshot_path = match snapshot_path_arg {
        Some(snapshot_path) => snapshot_path,
        None => DEFAULT_SNAPSHOT_PATH,
    };

    shellexpand::tilde(snapshot_path).to_string()
}
