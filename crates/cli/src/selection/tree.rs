//! Row model for the project tree view.
//!
//! Builds a flat list of renderable rows from the core read model: a
//! synthetic root, one expandable node per project, its dependency leaves,
//! and one placeholder leaf to open (or re-open) the selection modal.
//! Pure and side-effect free; rendering happens in [`ui`](super::ui).

use monodeps_core::view::{NodeState, ProjectView};

/// Placeholder label for a project that has never committed a selection
pub const ADD_PLACEHOLDER_LABEL: &str = "add dependencies";
/// Placeholder label once a selection has been committed
pub const RESET_PLACEHOLDER_LABEL: &str = "edit dependencies";

/// One renderable row of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub state: NodeState,
    pub label: String,
    /// Indentation depth: 0 root, 1 project, 2 leaf.
    pub depth: usize,
    /// Index into the view list for project and leaf rows; `None` for the
    /// root.
    pub project: Option<usize>,
    /// Whether this row was part of the most recent commit's project.
    pub committed_recently: bool,
}

impl Row {
    /// Whether pressing Enter on this row opens a selection session.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        matches!(
            self.state,
            NodeState::ExpandableUnselected
                | NodeState::ExpandableSelected
                | NodeState::LeafPlaceholderAdd
                | NodeState::LeafPlaceholderReset
        )
    }
}

/// Builds the full row list for the tree view, in registration order.
#[must_use]
pub fn build_rows(views: &[ProjectView]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(views.len() * 2 + 1);

    rows.push(Row {
        state: NodeState::Root,
        label: "root".to_string(),
        depth: 0,
        project: None,
        committed_recently: false,
    });

    for (index, view) in views.iter().enumerate() {
        rows.push(Row {
            state: view.node_state(),
            label: view.id.clone(),
            depth: 1,
            project: Some(index),
            committed_recently: view.committed_recently,
        });

        for dependency in &view.dependencies {
            rows.push(Row {
                state: NodeState::Leaf,
                label: dependency.clone(),
                depth: 2,
                project: Some(index),
                committed_recently: view.committed_recently,
            });
        }

        let placeholder_label = if view.has_committed {
            RESET_PLACEHOLDER_LABEL
        } else {
            ADD_PLACEHOLDER_LABEL
        };

        rows.push(Row {
            state: view.placeholder_state(),
            label: placeholder_label.to_string(),
            depth: 2,
            project: Some(index),
            committed_recently: view.committed_recently,
        });
    }

    rows
}

/// Index of the first actionable row, used as the initial cursor position.
#[must_use]
pub fn first_actionable(rows: &[Row]) -> usize {
    rows.iter()
        .position(Row::is_actionable)
        .unwrap_or_default()
}
