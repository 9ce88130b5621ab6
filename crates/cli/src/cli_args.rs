//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use clap::Parser;
use monodeps_core::error::{Error, Result};

/// Where the project list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    /// Identifiers given directly on the command line.
    Inline(Vec<String>),
    /// Path to a YAML manifest naming the projects.
    Manifest(String),
}

/// Command-line arguments for the monodeps CLI tool.
///
/// The project list is the only required input; it is supplied either as
/// positional identifiers or through a manifest file, never both.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Identifiers of the subprojects in the monorepo.
    ///
    /// Mutually exclusive with `--manifest`.
    #[arg(num_args(0..))]
    pub projects: Vec<String>,

    /// Path to a YAML manifest with a `projects:` list.
    ///
    /// Mutually exclusive with positional project identifiers.
    #[arg(long, short = 'm')]
    pub manifest: Option<String>,

    /// Path for the dependency snapshot file.
    ///
    /// If not provided, defaults to `~/.monodeps/dependencies.txt`.
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Pre-populate the graph from an existing snapshot file, if present.
    #[arg(long, short = 'r', action)]
    pub resume: bool,
}

impl Args {
    /// Determines where the project list comes from.
    ///
    /// # Errors
    ///
    /// Returns an error if both positional projects and a manifest are
    /// given, or if neither is.
    pub fn project_source(&self) -> Result<ProjectSource> {
        match (&self.manifest, self.projects.is_empty()) {
            (Some(_), false) => Err(Error::Misc(
                "Provide either project identifiers or --manifest, not both.".to_string(),
            )),
            (Some(manifest), true) => Ok(ProjectSource::Manifest(manifest.clone())),
            (None, false) => Ok(ProjectSource::Inline(self.projects.clone())),
            (None, true) => Err(Error::Misc(
                "No projects given. Pass identifiers or --manifest <path>.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["mdeps", "sub-one"]);

        assert_eq!(args.projects, vec!["sub-one"]);
        assert!(args.manifest.is_none());
        assert!(args.output.is_none());
        assert!(!args.resume);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["mdeps", "-m", "/custom/manifest.yml", "-o", "/custom/deps.txt", "-r"]);

        assert_eq!(args.manifest, Some("/custom/manifest.yml".to_string()));
        assert_eq!(args.output, Some("/custom/deps.txt".to_string()));
        assert!(args.resume);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "mdeps",
            "--manifest",
            "/custom/manifest.yml",
            "--output",
            "/custom/deps.txt",
            "--resume",
        ]);

        assert_eq!(args.manifest, Some("/custom/manifest.yml".to_string()));
        assert_eq!(args.output, Some("/custom/deps.txt".to_string()));
        assert!(args.resume);
    }

    #[test]
    fn test_project_source_inline() {
        let args = Args::parse_from(["mdeps", "sub-one", "sub-two"]);
        let source = args.project_source().unwrap();
        assert_eq!(
            source,
            ProjectSource::Inline(vec!["sub-one".to_string(), "sub-two".to_string()])
        );
    }

    #[test]
    fn test_project_source_manifest() {
        let args = Args::parse_from(["mdeps", "--manifest", "m.yml"]);
        let source = args.project_source().unwrap();
        assert_eq!(source, ProjectSource::Manifest("m.yml".to_string()));
    }

    #[test]
    fn test_project_source_both_is_an_error() {
        let args = Args::parse_from(["mdeps", "sub-one", "--manifest", "m.yml"]);
        assert!(args.project_source().is_err());
    }

    #[test]
    fn test_project_source_neither_is_an_error() {
        let args = Args::parse_from(["mdeps"]);
        assert!(args.project_source().is_err());
    }
}
