//! The interactive selection session state machine.
//!
//! A session is one edit transaction for a single project's dependency
//! set: `Open` until the user resolves it, then `Committed` or `Cancelled`
//! and inert. All tentative state is private to the session, so a cancel
//! has nothing to roll back and a commit is the only moment the shared
//! graph is touched.

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::graph::DependencyGraph;

/// Lifecycle state of a [`SelectionSession`].
///
/// `Committed` and `Cancelled` are terminal; there are no further
/// transitions out of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Committed,
    Cancelled,
}

/// One interactive edit transaction for a single project's dependencies.
#[derive(Debug)]
pub struct SelectionSession {
    target: String,
    candidates: Vec<String>,
    tentative: IndexSet<String>,
    state: SessionState,
}

impl SelectionSession {
    /// Opens a session for `target`.
    ///
    /// Candidates are every other registered project, in registration
    /// order. The tentative selection is pre-seeded with the target's
    /// current dependencies so re-opening an edit shows the previous
    /// choice; nothing is destroyed until commit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProject`] if `target` is not registered.
    pub fn open(graph: &DependencyGraph, target: &str) -> Result<Self> {
        let candidates = graph.registry().candidates_for(target)?;
        let current = graph.dependency_set_for(target)?;

        let tentative = current
            .members()
            .iter()
            .filter(|member| candidates.iter().any(|candidate| candidate == *member))
            .cloned()
            .collect();

        Ok(Self {
            target: target.to_string(),
            candidates,
            tentative,
            state: SessionState::Open,
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The projects eligible for selection, in registration order.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The current tentative selection. Drives the live preview; has no
    /// effect on the graph until commit.
    #[must_use]
    pub fn tentative(&self) -> &IndexSet<String> {
        &self.tentative
    }

    #[must_use]
    pub fn is_selected(&self, candidate: &str) -> bool {
        self.tentative.contains(candidate)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(Error::SessionClosed)
        }
    }

    /// Flips `candidate`'s membership in the tentative selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCandidate`] if `candidate` is not among the
    /// session's candidates, or [`Error::SessionClosed`] if the session has
    /// been resolved.
    pub fn toggle(&mut self, candidate: &str) -> Result<()> {
        self.ensure_open()?;

        if !self.candidates.iter().any(|c| c == candidate) {
            return Err(Error::InvalidCandidate(candidate.to_string()));
        }

        if !self.tentative.shift_remove(candidate) {
            self.tentative.insert(candidate.to_string());
        }

        Ok(())
    }

    /// Resolves the session by replacing the target's dependency set with
    /// the tentative selection, all-or-nothing.
    ///
    /// On a validation failure the session stays `Open` so the caller can
    /// correct the tentative selection and try again; the graph is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Propagates [`DependencySet::replace`](crate::graph::DependencySet::replace)
    /// failures, or returns [`Error::SessionClosed`] if already resolved.
    pub fn commit(&mut self, graph: &mut DependencyGraph) -> Result<()> {
        self.ensure_open()?;

        graph.replace_dependencies(&self.target, self.tentative.clone())?;
        self.state = SessionState::Committed;
        Ok(())
    }

    /// Resolves the session without touching the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] if already resolved.
    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state = SessionState::Cancelled;
        Ok(())
    }
}
