//! Interactive dependency selection and tree rendering.
//!
//! This module provides the terminal-based user interface for monodeps:
//! the project tree, the modal dependency picker, and the pure styling
//! that maps node states to glyphs and colors.
//!
//! # User Interface
//!
//! The tree view supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter on a project (or its placeholder row) to edit its dependencies
//! - 'q', Escape or Ctrl-C to quit
//!
//! The modal picker supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Space to toggle a candidate, with a live preview of the selection
//! - Typing after '/' to fuzzy-filter candidates
//! - Enter to commit, Escape to cancel

// Export public items from submodules
pub mod style;
pub mod tree;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use style::{node_style, NodeStyle};
pub use tree::{build_rows, Row};
pub use types::{ModalOutcome, TreeChoice};
pub use ui::{prompt_for_tree_choice, run_selection_modal};
