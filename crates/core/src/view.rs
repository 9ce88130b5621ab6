//! The read model handed to the presentation layer.
//!
//! The presentation layer never inspects [`DependencyGraph`] internals; it
//! receives one [`ProjectView`] per project and derives a [`NodeState`] per
//! rendered node from it. Glyphs, colors and layout are entirely the
//! presentation layer's business.

use crate::graph::DependencyGraph;

/// Per-project read model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub id: String,
    /// Current dependencies, in selection order.
    pub dependencies: Vec<String>,
    /// Whether this project's set was the most recently committed one.
    pub committed_recently: bool,
    /// Whether this project's set has ever been committed.
    pub has_committed: bool,
}

impl ProjectView {
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Node state for the project's own (expandable) tree node.
    #[must_use]
    pub fn node_state(&self) -> NodeState {
        if self.dependencies.is_empty() {
            NodeState::ExpandableUnselected
        } else {
            NodeState::ExpandableSelected
        }
    }

    /// Node state for the project's placeholder leaf: "add" until the
    /// first commit, "reset" from then on (even for a committed empty set).
    #[must_use]
    pub fn placeholder_state(&self) -> NodeState {
        if self.has_committed {
            NodeState::LeafPlaceholderReset
        } else {
            NodeState::LeafPlaceholderAdd
        }
    }
}

/// Tagged node states a presentation layer must know how to style.
///
/// Derivation from selection state is deterministic and lives here; the
/// mapping from state to glyph/color is a pure function on the
/// presentation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    /// The synthetic root of the project tree.
    Root,
    /// A project node with no chosen dependencies.
    ExpandableUnselected,
    /// A project node with at least one chosen dependency.
    ExpandableSelected,
    /// Placeholder leaf for a project that has never committed a selection.
    LeafPlaceholderAdd,
    /// Placeholder leaf for a project with at least one committed selection.
    LeafPlaceholderReset,
    /// A chosen dependency, rendered as a leaf under its owner.
    Leaf,
}

impl DependencyGraph {
    /// Builds the per-project read model, in registration order.
    ///
    /// `recently_committed` is the identifier of the project whose set was
    /// committed last, if any; recency is a presentation-session notion and
    /// is not persisted.
    #[must_use]
    pub fn project_views(&self, recently_committed: Option<&str>) -> Vec<ProjectView> {
        self.registry()
            .iter()
            .map(|project| {
                // Construction guarantees a set for every registered project.
                let set = self
                    .dependency_set_for(project)
                    .unwrap_or_else(|_| unreachable!("registered project without a dependency set"));

                ProjectView {
                    id: project.to_string(),
                    dependencies: set.members().iter().cloned().collect(),
                    committed_recently: recently_committed == Some(project),
                    has_committed: set.has_committed(),
                }
            })
            .collect()
    }
}
