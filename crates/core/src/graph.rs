//! Dependency sets and the graph that aggregates them.
//!
//! A [`DependencySet`] holds the chosen dependencies for exactly one
//! project. The [`DependencyGraph`] owns one set per registered project and
//! is the only aggregate handed to persistence and the presentation layer.
//!
//! Sets are never patched in place: [`DependencySet::replace`] swaps the
//! whole membership atomically after validating it, and the interactive
//! flow only reaches it through a committed
//! [`SelectionSession`](crate::session::SelectionSession).

use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};
use crate::registry::ProjectRegistry;

/// The set of projects one project depends on.
#[derive(Debug, Clone)]
pub struct DependencySet {
    owner: String,
    members: IndexSet<String>,
    committed: bool,
}

impl DependencySet {
    fn new(owner: String) -> Self {
        Self {
            owner,
            members: IndexSet::new(),
            committed: false,
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Read-only view of the current membership.
    #[must_use]
    pub fn members(&self) -> &IndexSet<String> {
        &self.members
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether this set has ever been replaced by a committed selection.
    ///
    /// Distinguishes "never edited" from "deliberately committed empty",
    /// which drives the add-vs-reset placeholder in the tree view.
    #[must_use]
    pub fn has_committed(&self) -> bool {
        self.committed
    }

    /// Atomically replaces the membership with `new_members`.
    ///
    /// Every member must be registered and distinct from the owner. On
    /// failure the existing membership is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfDependency`] if `new_members` contains the
    /// owner, or [`Error::UnknownProject`] if it contains an unregistered
    /// identifier.
    pub fn replace(&mut self, registry: &ProjectRegistry, new_members: IndexSet<String>) -> Result<()> {
        for member in &new_members {
            if member == &self.owner {
                return Err(Error::SelfDependency(member.clone()));
            }

            if !registry.contains(member) {
                return Err(Error::UnknownProject(member.clone()));
            }
        }

        self.members = new_members;
        self.committed = true;
        Ok(())
    }
}

/// The mapping from every registered project to its dependency set.
///
/// Every project in the registry has exactly one set (possibly empty) at
/// all times after construction. Iteration order is registration order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    registry: ProjectRegistry,
    sets: IndexMap<String, DependencySet>,
}

impl DependencyGraph {
    /// Builds a graph with an empty dependency set for every registered
    /// project.
    #[must_use]
    pub fn new(registry: ProjectRegistry) -> Self {
        let sets = registry
            .iter()
            .map(|project| (project.to_string(), DependencySet::new(project.to_string())))
            .collect();

        Self { registry, sets }
    }

    #[must_use]
    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Returns the dependency set owned by `project`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProject`] if `project` is not registered.
    pub fn dependency_set_for(&self, project: &str) -> Result<&DependencySet> {
        self.sets
            .get(project)
            .ok_or_else(|| Error::UnknownProject(project.to_string()))
    }

    /// Replaces `project`'s dependency set. Only reachable from a session
    /// commit and the snapshot loader; the presentation layer never calls
    /// this directly.
    pub(crate) fn replace_dependencies(
        &mut self,
        project: &str,
        new_members: IndexSet<String>,
    ) -> Result<()> {
        let registry = &self.registry;
        let set = self
            .sets
            .get_mut(project)
            .ok_or_else(|| Error::UnknownProject(project.to_string()))?;

        set.replace(registry, new_members)
    }

    /// Iterates over every project's dependency set, in registration order.
    pub fn dependency_sets(&self) -> impl Iterator<Item = &DependencySet> {
        self.sets.values()
    }

    /// Read-only dump of the whole mapping, in registration order.
    #[must_use]
    pub fn snapshot(&self) -> IndexMap<String, IndexSet<String>> {
        self.sets
            .iter()
            .map(|(project, set)| (project.clone(), set.members().clone()))
            .collect()
    }
}
