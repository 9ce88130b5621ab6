use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use monodeps_cli::cli_args::{Args, ProjectSource};
use monodeps_cli::selection;
use monodeps_cli::selection::tree::build_rows;
use monodeps_cli::selection::types::{ModalOutcome, TreeChoice};
use monodeps_core::error::Result;
use monodeps_core::graph::DependencyGraph;
use monodeps_core::registry::ProjectRegistry;
use monodeps_core::session::SelectionSession;
use monodeps_core::{config, file_handling, snapshot};
use std::process::ExitCode;

/// Build the registry from the configured project source
fn initialize_registry(args: &Args) -> Result<ProjectRegistry> {
    let names = match args.project_source()? {
        ProjectSource::Inline(names) => names,
        ProjectSource::Manifest(path) => {
            debug!("Loading project manifest from `{path}`");
            file_handling::get_manifest_projects(&path)?
        }
    };

    ProjectRegistry::new(names)
}

/// Build the graph, pre-populated from an existing snapshot when resuming
fn initialize_graph(
    args: &Args,
    registry: ProjectRegistry,
    snapshot_path: &str,
) -> Result<DependencyGraph> {
    if args.resume {
        if let Some(contents) = file_handling::read_snapshot_file(snapshot_path)? {
            debug!("Resuming from snapshot at `{snapshot_path}`");
            return snapshot::parse_snapshot(&registry, &contents);
        }
        info!("Resume was specified, but there is no snapshot at `{snapshot_path}`; starting fresh.");
    }

    Ok(DependencyGraph::new(registry))
}

fn save_snapshot(graph: &DependencyGraph, snapshot_path: &str) -> Result<()> {
    file_handling::write_snapshot_file(snapshot_path, &snapshot::render_snapshot(graph))
}

/// Run selection sessions until the user quits the tree view
fn run_interactive_loop(graph: &mut DependencyGraph, snapshot_path: &str) -> Result<()> {
    let mut last_committed: Option<String> = None;

    loop {
        let views = graph.project_views(last_committed.as_deref());
        let rows = build_rows(&views);

        match selection::prompt_for_tree_choice(&rows)? {
            TreeChoice::Edit(project_index) => {
                let target = views[project_index].id.clone();
                let mut session = SelectionSession::open(graph, &target)?;

                match selection::run_selection_modal(&mut session, graph)? {
                    ModalOutcome::Committed => {
                        let count = graph.dependency_set_for(&target)?.len();
                        info!("Committed {count} dependencies for `{target}`");
                        save_snapshot(graph, snapshot_path)?;
                        last_committed = Some(target);
                    }
                    ModalOutcome::Cancelled => {
                        debug!("Selection for `{target}` cancelled, graph unchanged");
                    }
                }
            }
            TreeChoice::Quit => return Ok(()),
        }
    }
}

fn print_summary(graph: &DependencyGraph) {
    println!("Dependency choices:");
    for (project, members) in graph.snapshot() {
        if members.is_empty() {
            println!("\t{project}: (none)");
        } else {
            println!("\t{project}: {}", members.iter().join(", "));
        }
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let snapshot_path = config::get_snapshot_path(&args.output);
    debug!("Snapshot path: `{snapshot_path}`");

    let registry = initialize_registry(&args)?;
    let mut graph = initialize_graph(&args, registry, &snapshot_path)?;

    run_interactive_loop(&mut graph, &snapshot_path)?;

    save_snapshot(&graph, &snapshot_path)?;
    print_summary(&graph);
    println!("Saved to {snapshot_path}");

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
