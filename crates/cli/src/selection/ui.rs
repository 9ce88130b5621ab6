use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::Color::{DarkBlue, DarkGreen, Green, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, terminal, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;

use super::style::node_style;
use super::tree::{first_actionable, Row};
use super::types::CycleDirection::{Down, Up};
use super::types::{
    CycleDirection, ListState, ModalOutcome, ModalState, TreeChoice, ViewportState,
};
use monodeps_core::error::Result;
use monodeps_core::graph::DependencyGraph;
use monodeps_core::session::SelectionSession;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Runs the project tree view until the user picks a project to edit or
/// quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn prompt_for_tree_choice(rows: &[Row]) -> Result<TreeChoice> {
    let mut stdout = stdout();
    stdout.execute(EnterAlternateScreen)?;
    // Created before raw mode is enabled, so the alternate screen is left
    // even if enabling raw mode fails
    let _raw_mode_guard = RawModeGuard;
    enable_raw_mode()?;

    let (width, height) = terminal::size()?;
    let mut state = ListState {
        selected_index: first_actionable(rows),
        viewport: ViewportState {
            offset: 0,
            // Subtract 2 for header and spacer; never let a tiny terminal
            // leave a zero-row viewport
            height: height.saturating_sub(2).max(1),
            width,
        },
    };

    let mut force_redraw = true;

    loop {
        if force_redraw {
            redraw_tree(&state, rows)?;
            force_redraw = false;
        }

        if event::poll(Duration::from_millis(500))? {
            match event::read()? {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        state = move_selected_index(&state, rows.len(), Some(&Up));
                        force_redraw = true;
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        state = move_selected_index(&state, rows.len(), Some(&Down));
                        force_redraw = true;
                    }
                    KeyCode::Enter => {
                        let row = &rows[state.selected_index];
                        if row.is_actionable() {
                            if let Some(project) = row.project {
                                return Ok(TreeChoice::Edit(project));
                            }
                        }
                        // Nothing to do on this row
                        queue!(stdout, Print("\x07"))?;
                        stdout.flush()?;
                    }
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(TreeChoice::Quit);
                    }
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(TreeChoice::Quit),
                    _ => {}
                },
                Event::Resize(width, height) => {
                    state.viewport.width = width;
                    state.viewport.height = height.saturating_sub(2).max(1);
                    force_redraw = true;
                }
                _ => {}
            }
        }
    }
}

/// Runs the modal dependency picker for an open session until the user
/// commits or cancels.
///
/// Validation failures never abort the modal: they are rendered as an
/// inline message and the session stays open for correction.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven, or if the session
/// was not open to begin with.
pub fn run_selection_modal(
    session: &mut SelectionSession,
    graph: &mut DependencyGraph,
) -> Result<ModalOutcome> {
    let mut stdout = stdout();
    stdout.execute(EnterAlternateScreen)?;
    let _raw_mode_guard = RawModeGuard;
    enable_raw_mode()?;

    let (width, height) = terminal::size()?;
    let mut state = ModalState {
        list: ListState {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                // Header, spacer, preview, error and filter lines
                height: height.saturating_sub(5).max(1),
                width,
            },
        },
        is_filtering: false,
        filter_text: String::new(),
        error: None,
    };

    let mut visible = filter_candidates(session.candidates(), &state.filter_text);
    let mut force_redraw = true;

    loop {
        if force_redraw {
            redraw_modal(session, &state, &visible)?;
            force_redraw = false;
        }

        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                match key_event.code {
                    KeyCode::Up => {
                        state.list = move_selected_index(&state.list, visible.len(), Some(&Up));
                    }
                    KeyCode::Down => {
                        state.list = move_selected_index(&state.list, visible.len(), Some(&Down));
                    }
                    KeyCode::Char('k') if !state.is_filtering => {
                        state.list = move_selected_index(&state.list, visible.len(), Some(&Up));
                    }
                    KeyCode::Char('j') if !state.is_filtering => {
                        state.list = move_selected_index(&state.list, visible.len(), Some(&Down));
                    }
                    KeyCode::Char(' ') if !state.is_filtering => {
                        if let Some(candidate_index) = visible.get(state.list.selected_index) {
                            let candidate = session.candidates()[*candidate_index].clone();
                            match session.toggle(&candidate) {
                                Ok(()) => state.error = None,
                                Err(e) => state.error = Some(e.to_string()),
                            }
                        }
                    }
                    KeyCode::Enter => match session.commit(graph) {
                        Ok(()) => return Ok(ModalOutcome::Committed),
                        // Stay open; the user corrects the selection and
                        // commits again.
                        Err(e) => state.error = Some(e.to_string()),
                    },
                    KeyCode::Esc if state.is_filtering => {
                        state.is_filtering = false;
                        state.filter_text.clear();
                    }
                    KeyCode::Esc => {
                        session.cancel()?;
                        return Ok(ModalOutcome::Cancelled);
                    }
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        session.cancel()?;
                        return Ok(ModalOutcome::Cancelled);
                    }
                    KeyCode::Char('/') if !state.is_filtering => {
                        state.is_filtering = true;
                    }
                    KeyCode::Backspace if state.is_filtering => {
                        state.filter_text.pop();
                    }
                    KeyCode::Char(c) if state.is_filtering => {
                        state.filter_text.push(c);
                    }
                    _ => {}
                }

                visible = filter_candidates(session.candidates(), &state.filter_text);
                if state.list.selected_index >= visible.len() {
                    state.list.selected_index = visible.len().saturating_sub(1);
                    state.list.viewport.offset = 0;
                }
                force_redraw = true;
            }
            Event::Resize(width, height) => {
                state.list.viewport.width = width;
                state.list.viewport.height = height.saturating_sub(5).max(1);
                force_redraw = true;
            }
            _ => {}
        }
    }
}

fn redraw_tree(state: &ListState, rows: &[Row]) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(
        state.viewport.width,
        "\u{2191}/\u{2193}: Move   |   Enter: Edit dependencies   |   q: Quit",
    )?;

    let visible_rows = rows
        .iter()
        .skip(state.viewport.offset)
        .take(state.viewport.height as usize);

    for (i, row) in visible_rows.enumerate() {
        let is_selected = i + state.viewport.offset == state.selected_index;
        write_tree_row(i as u16 + 1, row, is_selected)?;
    }

    stdout.flush()?;
    Ok(())
}

fn write_tree_row(row_y: u16, row: &Row, is_selected: bool) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row_y), Clear(ClearType::CurrentLine))?;

    let style = node_style(row.state);
    let indent = "  ".repeat(row.depth);
    let marker = if row.committed_recently && row.depth == 1 {
        " (saved)"
    } else {
        ""
    };
    let content = format!("{indent}{}{}{marker}", style.glyph, row.label);

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    } else {
        if let Some(color) = style.color {
            queue!(stdout, SetForegroundColor(color))?;
        }
        if style.bold {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(stdout, SetAttribute(Attribute::Italic))?;
        }
    }

    queue!(
        stdout,
        Print(content),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

fn redraw_modal(session: &SelectionSession, state: &ModalState, visible: &[usize]) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let instructions = if state.is_filtering {
        "<esc>: Stop Filtering".to_string()
    } else {
        format!(
            "Select {}'s dependencies   |   {}/{}   |   Space: Toggle   Enter: Commit   Esc: Cancel   /: Filter",
            session.target(),
            pad_to_width_of(state.list.selected_index + 1, visible.len()),
            visible.len()
        )
    };
    print_header(state.list.viewport.width, &instructions)?;

    if visible.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Red),
            Print("No matching candidates!".to_string()),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Reset),
        )?;
    } else {
        let candidates = session.candidates();
        let shown = visible
            .iter()
            .skip(state.list.viewport.offset)
            .take(state.list.viewport.height as usize);

        for (i, candidate_index) in shown.enumerate() {
            let is_cursor = i + state.list.viewport.offset == state.list.selected_index;
            let candidate = &candidates[*candidate_index];
            write_candidate_row(i as u16 + 1, candidate, session.is_selected(candidate), is_cursor)?;
        }
    }

    let preview_y = state.list.viewport.height + 2;
    let preview = if session.tentative().is_empty() {
        "(none)".to_string()
    } else {
        session.tentative().iter().join(", ")
    };
    queue!(
        stdout,
        MoveTo(0, preview_y),
        SetAttribute(Attribute::Bold),
        Print("Selected: "),
        SetAttribute(Attribute::Reset),
        Print(preview),
    )?;

    if let Some(error) = &state.error {
        queue!(
            stdout,
            MoveTo(0, preview_y + 1),
            SetForegroundColor(Red),
            Print(error.clone()),
            SetForegroundColor(Reset),
        )?;
    }

    if state.is_filtering {
        queue!(
            stdout,
            MoveTo(0, preview_y + 2),
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", state.filter_text)),
            SetAttribute(Attribute::Reset),
        )?;
    }

    stdout.flush()?;
    Ok(())
}

fn write_candidate_row(row_y: u16, candidate: &str, is_picked: bool, is_cursor: bool) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row_y), Clear(ClearType::CurrentLine))?;

    let checkbox = if is_picked { "[x]" } else { "[ ]" };
    let content = format!("{checkbox} {candidate}");

    if is_cursor {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    } else if is_picked {
        queue!(
            stdout,
            SetForegroundColor(Green),
            SetAttribute(Attribute::Italic),
        )?;
    }

    queue!(
        stdout,
        Print(content),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print the header bar for a selection view
fn print_header(width: u16, instructions: &str) -> Result<()> {
    let mut stdout = stdout();

    let left_padding_size = 2usize;
    let left_padding = " ".repeat(left_padding_size);
    let right_padding = " ".repeat(
        (width as usize).saturating_sub(left_padding_size + instructions.chars().count()),
    );

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions.to_string()),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of(value: usize, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{value:>width$}")
}

/// Move the selected index in the given direction, scrolling the viewport
/// to keep it visible
#[must_use]
pub fn move_selected_index(
    state: &ListState,
    row_count: usize,
    direction: Option<&CycleDirection>,
) -> ListState {
    if row_count == 0 {
        return state.clone();
    }

    let mut new_index = state.selected_index;
    let mut state = state.clone();

    match direction {
        Some(Up) => {
            if new_index == 0 {
                new_index = row_count - 1;
                state.viewport.offset =
                    new_index.saturating_sub((state.viewport.height as usize).saturating_sub(1));
            } else {
                new_index -= 1;
                if new_index < state.viewport.offset {
                    state.viewport.offset = new_index;
                }
            }
        }
        Some(Down) => {
            new_index = (new_index + 1) % row_count;
            if new_index < state.selected_index {
                state.viewport.offset = 0;
            } else if new_index >= state.viewport.offset + state.viewport.height as usize {
                state.viewport.offset = new_index - state.viewport.height as usize + 1;
            }
        }
        None => {}
    }

    state.selected_index = new_index;
    state
}

/// Filter the candidate indexes against a fuzzy predicate
#[must_use]
pub fn filter_candidates(candidates: &[String], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..candidates.len()).collect();
    }

    let matcher = SkimMatcherV2::default();

    candidates
        .iter()
        .enumerate()
        .filter_map(|(i, candidate)| matcher.fuzzy_match(candidate, predicate).map(|_| i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_state(selected_index: usize, offset: usize, height: u16) -> ListState {
        ListState {
            selected_index,
            viewport: ViewportState {
                offset,
                height,
                width: 80,
            },
        }
    }

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_move_down_advances_and_wraps() {
        let state = list_state(0, 0, 10);
        let moved = move_selected_index(&state, 3, Some(&Down));
        assert_eq!(moved.selected_index, 1);

        let last = list_state(2, 0, 10);
        let wrapped = move_selected_index(&last, 3, Some(&Down));
        assert_eq!(wrapped.selected_index, 0);
        assert_eq!(wrapped.viewport.offset, 0);
    }

    #[test]
    fn test_move_up_wraps_and_scrolls_to_bottom() {
        let state = list_state(0, 0, 2);
        let moved = move_selected_index(&state, 5, Some(&Up));
        assert_eq!(moved.selected_index, 4);
        // The viewport follows the cursor to the end of the list.
        assert_eq!(moved.viewport.offset, 3);
    }

    #[test]
    fn test_move_down_scrolls_viewport() {
        let state = list_state(1, 0, 2);
        let moved = move_selected_index(&state, 5, Some(&Down));
        assert_eq!(moved.selected_index, 2);
        assert_eq!(moved.viewport.offset, 1);
    }

    #[test]
    fn test_move_up_wrap_with_zero_height_viewport() {
        // A degenerate viewport must never make wrapping panic.
        let state = list_state(0, 0, 0);
        let moved = move_selected_index(&state, 5, Some(&Up));
        assert_eq!(moved.selected_index, 4);
        assert_eq!(moved.viewport.offset, 4);
    }

    #[test]
    fn test_move_up_wrap_with_single_row_viewport() {
        let state = list_state(0, 0, 1);
        let moved = move_selected_index(&state, 3, Some(&Up));
        assert_eq!(moved.selected_index, 2);
        assert_eq!(moved.viewport.offset, 2);
    }

    #[test]
    fn test_raw_mode_guard_drop_restores_without_raw_mode() {
        // The guard is created before raw mode is enabled; dropping it in
        // that window must still restore the terminal cleanly.
        drop(RawModeGuard);
    }

    #[test]
    fn test_move_on_empty_list_is_a_no_op() {
        let state = list_state(0, 0, 10);
        let moved = move_selected_index(&state, 0, Some(&Down));
        assert_eq!(moved, state);
    }

    #[test]
    fn test_filter_empty_predicate_returns_all() {
        let candidates = candidates(&["sub-one", "sub-two", "sub-three"]);
        assert_eq!(filter_candidates(&candidates, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_fuzzy_matches() {
        let candidates = candidates(&["sub-one", "sub-two", "sub-three"]);
        let matched = filter_candidates(&candidates, "two");
        assert_eq!(matched, vec![1]);

        // Fuzzy: "st" hits the s...t subsequences.
        let matched = filter_candidates(&candidates, "st");
        assert!(matched.contains(&1));
        assert!(matched.contains(&2));
    }

    #[test]
    fn test_filter_no_matches() {
        let candidates = candidates(&["sub-one"]);
        assert!(filter_candidates(&candidates, "zzz").is_empty());
    }

    #[test]
    fn test_pad_to_width_of() {
        assert_eq!(pad_to_width_of(1, 100), "  1");
        assert_eq!(pad_to_width_of(42, 100), " 42");
        assert_eq!(pad_to_width_of(7, 9), "7");
    }
}
