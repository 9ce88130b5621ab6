//! Monodeps CLI Library
//!
//! This crate provides the terminal interface for monodeps, a tool for
//! choosing, per subproject in a monorepo, which other subprojects it
//! depends on. It renders the project tree, runs the modal dependency
//! picker, and maps user gestures onto the core selection session.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`selection`]: The tree view, the modal picker, and the pure
//!   node-state styling that both use
//!
//! # Examples
//!
//! The CLI binary (`mdeps`) is started with the project list, either
//! inline or from a manifest:
//!
//! ```bash
//! # Projects on the command line
//! mdeps sub-one sub-two sub-three
//!
//! # Projects from a YAML manifest
//! mdeps --manifest monorepo.yml
//!
//! # Resume from a previously written snapshot
//! mdeps --resume sub-one sub-two sub-three
//!
//! # Write the snapshot somewhere specific
//! mdeps --output ./deps.txt sub-one sub-two
//! ```

pub mod cli_args;
pub mod selection;
