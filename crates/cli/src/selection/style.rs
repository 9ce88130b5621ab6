//! Visual policy: the pure mapping from node state to presentation.
//!
//! The core derives a [`NodeState`] per row; everything about how a state
//! looks on screen is decided here and nowhere else.

use crossterm::style::Color;
use monodeps_core::view::NodeState;

/// Presentation descriptor for one node state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub glyph: &'static str,
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

/// Maps a node state to its presentation descriptor.
#[must_use]
pub fn node_style(state: NodeState) -> NodeStyle {
    match state {
        NodeState::Root => NodeStyle {
            glyph: "🌳 ",
            color: None,
            bold: true,
            italic: false,
        },
        NodeState::ExpandableUnselected => NodeStyle {
            glyph: "🚝 ",
            color: None,
            bold: false,
            italic: false,
        },
        NodeState::ExpandableSelected => NodeStyle {
            glyph: "🚝 ",
            color: Some(Color::Green),
            bold: false,
            italic: true,
        },
        NodeState::LeafPlaceholderAdd => NodeStyle {
            glyph: "➕ ",
            color: Some(Color::DarkGrey),
            bold: false,
            italic: false,
        },
        NodeState::LeafPlaceholderReset => NodeStyle {
            glyph: "🔃 ",
            color: Some(Color::DarkGrey),
            bold: false,
            italic: false,
        },
        NodeState::Leaf => NodeStyle {
            glyph: "🛑 ",
            color: None,
            bold: false,
            italic: false,
        },
    }
}
