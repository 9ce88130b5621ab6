//! The textual snapshot format for persisting dependency choices.
//!
//! One record per committed project, in registration order:
//!
//! ```text
//! sub-one: sub-two, sub-three
//! sub-two:
//! ```
//!
//! A record with no members is a deliberately committed empty set. A
//! project that has never committed a selection gets no record at all, so
//! the never-edited/edited distinction survives a write-and-resume cycle.
//!
//! Blank lines and lines starting with `#` are ignored on read. The loader
//! funnels every record through the same validation as an interactive
//! commit, so a snapshot can never smuggle in a self-dependency or an
//! unknown identifier, and it rejects a repeated owner instead of silently
//! keeping only the last record.

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::graph::DependencyGraph;
use crate::registry::ProjectRegistry;

/// Renders the graph as the textual snapshot format, one record per
/// committed project.
#[must_use]
pub fn render_snapshot(graph: &DependencyGraph) -> String {
    let mut out = String::new();

    for set in graph.dependency_sets() {
        if !set.has_committed() {
            continue;
        }

        out.push_str(set.owner());
        out.push(':');

        let mut first = true;
        for member in set.members() {
            out.push_str(if first { " " } else { ", " });
            out.push_str(member);
            first = false;
        }

        out.push('\n');
    }

    out
}

/// Parses snapshot `contents` into a graph over `registry`.
///
/// Every project named in a record is marked as committed; projects with
/// no record keep an empty, uncommitted set.
///
/// # Errors
///
/// Returns [`Error::MalformedSnapshotLine`] for a record without a `:`
/// separator, [`Error::UnknownProject`] for an unregistered owner or
/// member, [`Error::SelfDependency`] for a project listing itself, and
/// [`Error::DuplicateProject`] for a repeated owner.
pub fn parse_snapshot(registry: &ProjectRegistry, contents: &str) -> Result<DependencyGraph> {
    let mut graph = DependencyGraph::new(registry.clone());
    let mut seen_owners: IndexSet<String> = IndexSet::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((owner, member_list)) = line.split_once(':') else {
            return Err(Error::MalformedSnapshotLine {
                line: index + 1,
                content: raw_line.to_string(),
            });
        };

        let owner = owner.trim();
        if !seen_owners.insert(owner.to_string()) {
            return Err(Error::DuplicateProject(owner.to_string()));
        }

        let members: IndexSet<String> = member_list
            .split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .map(ToString::to_string)
            .collect();

        graph.replace_dependencies(owner, members)?;
    }

    Ok(graph)
}
