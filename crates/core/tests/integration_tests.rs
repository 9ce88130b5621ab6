//! Integration tests for monodeps-core
//!
//! These tests verify that the selection workflow works end-to-end:
//! registry construction, session lifecycle, graph updates, and snapshot
//! persistence together.

use indexmap::IndexSet;
use monodeps_core::{
    file_handling::{get_manifest_projects, read_snapshot_file, write_snapshot_file},
    graph::DependencyGraph,
    registry::ProjectRegistry,
    session::{SelectionSession, SessionState},
    snapshot::{parse_snapshot, render_snapshot},
};
use std::io::Write;
use tempfile::NamedTempFile;

fn registry_abc() -> ProjectRegistry {
    ProjectRegistry::new(["A", "B", "C"]).unwrap()
}

fn as_set(names: &[&str]) -> IndexSet<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Scenario from the selection workflow: open on A, toggle B and C,
/// commit. A depends on {B, C}; everything else stays empty.
#[test]
fn test_commit_workflow_updates_graph_and_snapshot() {
    let mut graph = DependencyGraph::new(registry_abc());

    let mut session = SelectionSession::open(&graph, "A").unwrap();
    session.toggle("B").unwrap();
    session.toggle("C").unwrap();
    session.commit(&mut graph).unwrap();
    assert_eq!(session.state(), SessionState::Committed);

    let snapshot = graph.snapshot();
    assert_eq!(snapshot["A"], as_set(&["B", "C"]));
    assert!(snapshot["B"].is_empty());
    assert!(snapshot["C"].is_empty());
}

/// Scenario: open on A, toggle B, cancel. The graph is exactly as it was
/// before the session.
#[test]
fn test_cancel_workflow_leaves_graph_unchanged() {
    let mut graph = DependencyGraph::new(registry_abc());
    let before = graph.snapshot();

    let mut session = SelectionSession::open(&graph, "A").unwrap();
    session.toggle("B").unwrap();
    session.cancel().unwrap();
    assert_eq!(session.state(), SessionState::Cancelled);

    assert_eq!(graph.snapshot(), before);
    assert!(graph.dependency_set_for("A").unwrap().is_empty());
}

/// No project ever appears in its own dependency set, through any path.
#[test]
fn test_no_self_dependency_through_any_path() {
    let registry = registry_abc();
    let mut graph = DependencyGraph::new(registry.clone());

    // The session path: the target is not offered as a candidate.
    let mut session = SelectionSession::open(&graph, "A").unwrap();
    assert!(session.toggle("A").is_err());

    // The loader path: a snapshot listing a self-dependency is rejected.
    assert!(parse_snapshot(&registry, "A: A\n").is_err());

    // Both checks left the graph untouched.
    session.toggle("B").unwrap();
    session.commit(&mut graph).unwrap();
    for (project, members) in graph.snapshot() {
        assert!(!members.contains(&project));
    }
}

/// Re-opening a session shows the previously committed choice.
#[test]
fn test_reopen_preseeds_previous_commit() {
    let mut graph = DependencyGraph::new(registry_abc());

    let mut session = SelectionSession::open(&graph, "A").unwrap();
    session.toggle("C").unwrap();
    session.commit(&mut graph).unwrap();

    // Re-open and verify the previous choice is pre-seeded.
    let reopened = SelectionSession::open(&graph, "A").unwrap();
    assert!(reopened.is_selected("C"));
    assert!(!reopened.is_selected("B"));
}

/// Full persistence cycle: commit, render, write, read, parse. The parsed
/// graph matches the committed one and keeps its committed flags.
#[test]
fn test_snapshot_file_round_trip() {
    let registry = registry_abc();
    let mut graph = DependencyGraph::new(registry.clone());

    let mut session = SelectionSession::open(&graph, "B").unwrap();
    session.toggle("A").unwrap();
    session.toggle("C").unwrap();
    session.commit(&mut graph).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deps.txt").to_str().unwrap().to_string();

    write_snapshot_file(&path, &render_snapshot(&graph)).unwrap();
    let contents = read_snapshot_file(&path).unwrap().unwrap();
    assert_eq!(contents, "B: A, C\n");

    let restored = parse_snapshot(&registry, &contents).unwrap();
    assert_eq!(restored.snapshot(), graph.snapshot());
    assert!(restored.dependency_set_for("B").unwrap().has_committed());
    // Projects that were never edited come back uncommitted.
    assert!(!restored.dependency_set_for("A").unwrap().has_committed());
}

/// The loader refuses identifiers the registry does not know, exactly like
/// an interactive commit would.
#[test]
fn test_loader_rejects_foreign_snapshot() {
    let registry = registry_abc();
    assert!(parse_snapshot(&registry, "D: A\n").is_err());
    assert!(parse_snapshot(&registry, "A: D\n").is_err());
}

/// Manifest file to registry to first session, end to end.
#[test]
fn test_manifest_to_session_workflow() {
    let yaml_content = r#"
projects:
  - sub-one
  - sub-two
  - sub-three
"#;
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let projects = get_manifest_projects(&temp_path).unwrap();
    let registry = ProjectRegistry::new(projects).unwrap();
    let mut graph = DependencyGraph::new(registry);

    let mut session = SelectionSession::open(&graph, "sub-one").unwrap();
    assert_eq!(session.candidates(), ["sub-two", "sub-three"]);
    session.toggle("sub-three").unwrap();
    session.commit(&mut graph).unwrap();

    assert_eq!(render_snapshot(&graph), "sub-one: sub-three\n");
}
