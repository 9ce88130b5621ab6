//! Type definitions for the selection views and their UI state.

/// Resolved outcome of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChoice {
    /// Edit the dependencies of the project at this index into the view
    /// list.
    Edit(usize),
    Quit,
}

/// Resolved outcome of a modal selection session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Committed,
    Cancelled,
}

/// Direction to cycle through rows in a list view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for a view's viewport.
///
/// Tracks the visible portion of a list when there are more rows than fit
/// on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Cursor-plus-viewport state shared by the tree view and the modal.
#[derive(Clone, PartialEq, Debug)]
pub struct ListState {
    /// Currently selected row index
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
}

/// Complete UI state for the modal dependency picker.
#[derive(Clone, PartialEq, Debug)]
pub struct ModalState {
    pub list: ListState,
    /// Whether the user is currently filtering candidates
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
    /// Inline message from the last failed operation, shown until the next
    /// successful one
    pub error: Option<String>,
}
