//! Monodeps Core Library
//!
//! This crate provides the dependency-selection state model for monodeps,
//! a terminal tool for choosing, per subproject in a monorepo, which other
//! subprojects it depends on.
//!
//! # Key Features
//!
//! - **Project Registry**: The immutable, ordered set of known projects
//! - **Dependency Sets**: Validated, atomically replaced per-project choices
//! - **Selection Sessions**: Open → Committed/Cancelled edit transactions
//! - **Read Model**: Per-project views and node states for rendering
//! - **Persistence**: A plain textual snapshot format with a symmetric loader
//! - **Error Handling**: One error type for every validation failure mode
//!
//! # Examples
//!
//! Committing a selection for one project:
//!
//! ```
//! use monodeps_core::graph::DependencyGraph;
//! use monodeps_core::registry::ProjectRegistry;
//! use monodeps_core::session::SelectionSession;
//!
//! let registry = ProjectRegistry::new(["sub-one", "sub-two", "sub-three"])?;
//! let mut graph = DependencyGraph::new(registry);
//!
//! let mut session = SelectionSession::open(&graph, "sub-one")?;
//! session.toggle("sub-two")?;
//! session.commit(&mut graph)?;
//!
//! assert!(graph.dependency_set_for("sub-one")?.contains("sub-two"));
//! # Ok::<(), monodeps_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod graph;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod view;
