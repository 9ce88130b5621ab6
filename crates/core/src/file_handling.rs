//! File handling for the project manifest and the dependency snapshot.
//!
//! The manifest is a small YAML file naming the monorepo's subprojects,
//! an alternative to listing them on the command line:
//!
//! ```yaml
//! projects:
//!   - sub-one
//!   - sub-two
//! ```
//!
//! The snapshot file uses the plain textual format from
//! [`snapshot`](crate::snapshot) and is read back only when resuming.

use std::fs::{self, File};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// A YAML manifest naming the projects in the monorepo.
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectManifest {
    pub projects: Vec<String>,
}

/// Reads the project list from a YAML manifest file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not parse as a
/// manifest. Identifier validation happens later, when the registry is
/// built.
pub fn get_manifest_projects(path: &str) -> Result<Vec<String>> {
    let reader = match File::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            return Err(Error::io_error(
                "project manifest".to_string(),
                path.to_string(),
                e,
            ))
        }
    };

    let manifest: serde_yaml::Result<ProjectManifest> = serde_yaml::from_reader(reader);

    match manifest {
        Ok(manifest) => {
            debug!("Loaded {} projects from `{path}`", manifest.projects.len());
            Ok(manifest.projects)
        }
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "project manifest".to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads the snapshot file, if it exists.
///
/// Returns `None` when the file is absent, which is the normal first-run
/// case for `--resume`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_snapshot_file(path: &str) -> Result<Option<String>> {
    if !Path::exists(Path::new(path)) {
        return Ok(None);
    }

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) => Err(Error::io_error(
            "snapshot".to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Writes the rendered snapshot to disk, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or
/// written.
pub fn write_snapshot_file(path: &str, contents: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error("snapshot directory".to_string(), path.to_string(), e)
            })?;
        }
    }

    fs::write(path, contents)
        .map_err(|e| Error::io_error("snapshot".to_string(), path.to_string(), e))
}
