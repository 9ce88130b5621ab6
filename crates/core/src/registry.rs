//! The project registry: the immutable set of known project identifiers.
//!
//! A registry is built once at startup from the configured project list and
//! never changes for the lifetime of a session. Every other part of the
//! model validates identifiers against it.

use indexmap::IndexSet;

use crate::error::{Error, Result};

/// The ordered, immutable set of project identifiers for a session.
///
/// Iteration order is registration order, which keeps rendering and
/// persistence reproducible.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    projects: IndexSet<String>,
}

impl ProjectRegistry {
    /// Builds a registry from an ordered list of project identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains a duplicate
    /// identifier, or contains an identifier that is empty, has whitespace,
    /// or uses a character reserved by the snapshot format (`:` or `,`).
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut projects = IndexSet::new();

        for name in names {
            let name = name.into();
            validate_project_id(&name)?;
            if !projects.insert(name.clone()) {
                return Err(Error::DuplicateProject(name));
            }
        }

        if projects.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        Ok(Self { projects })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterates over all registered project identifiers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(String::as_str)
    }

    /// Returns every registered project except `target`, in registration
    /// order. These are the projects eligible to become dependencies of
    /// `target` in a selection session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProject`] if `target` is not registered.
    pub fn candidates_for(&self, target: &str) -> Result<Vec<String>> {
        if !self.contains(target) {
            return Err(Error::UnknownProject(target.to_string()));
        }

        Ok(self
            .projects
            .iter()
            .filter(|project| project.as_str() != target)
            .cloned()
            .collect())
    }
}

fn validate_project_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::EmptyProjectId);
    }

    if id.chars().any(char::is_whitespace) {
        return Err(Error::IdWithWhitespace(id.to_string()));
    }

    for reserved in [':', ','] {
        if id.contains(reserved) {
            return Err(Error::ReservedIdCharacter(id.to_string(), reserved));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_exclude_target_in_order() {
        let registry = ProjectRegistry::new(["sub-one", "sub-two", "sub-three"]).unwrap();
        let candidates = registry.candidates_for("sub-one").unwrap();
        assert_eq!(candidates, vec!["sub-two", "sub-three"]);
    }

    #[test]
    fn test_candidates_for_unknown_target() {
        let registry = ProjectRegistry::new(["sub-one"]).unwrap();
        let result = registry.candidates_for("sub-two");
        assert!(matches!(result, Err(Error::UnknownProject(name)) if name == "sub-two"));
    }

    #[test]
    fn test_empty_list_rejected() {
        let names: Vec<String> = vec![];
        assert!(matches!(ProjectRegistry::new(names), Err(Error::EmptyRegistry)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ProjectRegistry::new(["sub-one", "sub-two", "sub-one"]);
        assert!(matches!(result, Err(Error::DuplicateProject(name)) if name == "sub-one"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = ProjectRegistry::new(["sub-one", ""]);
        assert!(matches!(result, Err(Error::EmptyProjectId)));
    }

    #[test]
    fn test_whitespace_id_rejected() {
        let result = ProjectRegistry::new(["sub one"]);
        assert!(matches!(result, Err(Error::IdWithWhitespace(_))));
    }

    #[test]
    fn test_reserved_character_rejected() {
        let result = ProjectRegistry::new(["sub:one"]);
        assert!(matches!(result, Err(Error::ReservedIdCharacter(_, ':'))));

        let result = ProjectRegistry::new(["sub,one"]);
        assert!(matches!(result, Err(Error::ReservedIdCharacter(_, ','))));
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let registry = ProjectRegistry::new(["b", "a", "c"]).unwrap();
        let names: Vec<&str> = registry.iter().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
