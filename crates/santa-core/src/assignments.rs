use crate::circle::Assignment;
use crate::error::{Result, SantaError};
use crate::token::Token;
use crate::{io, paths};
use std::path::Path;

/// The persisted giver → receiver table, one entry per participant.
#[derive(Debug, Clone)]
pub struct AssignmentStore {
    assignments: Vec<Assignment>,
}

impl AssignmentStore {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::assignments_path(root);
        if !path.exists() {
            return Err(SantaError::AssignmentsNotReady);
        }
        let data = std::fs::read_to_string(&path)?;
        let assignments: Vec<Assignment> = serde_json::from_str(&data)?;
        Ok(Self { assignments })
    }

    /// Persist the table unless a record already exists on disk.
    /// Returns true if this call wrote the record.
    pub fn init_if_missing(&self, root: &Path) -> Result<bool> {
        let data = serde_json::to_vec_pretty(&self.assignments)?;
        io::write_if_missing(&paths::assignments_path(root), &data)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn receiver_for(&self, giver: &Token) -> Option<&Token> {
        self.assignments
            .iter()
            .find(|a| &a.giver == giver)
            .map(|a| &a.receiver)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::build_circle;
    use tempfile::TempDir;

    fn store() -> AssignmentStore {
        let tokens = vec![Token::of("A"), Token::of("B"), Token::of("C")];
        AssignmentStore::new(build_circle(&tokens).unwrap())
    }

    #[test]
    fn roundtrips_through_disk() {
        let dir = TempDir::new().unwrap();
        let original = store();
        assert!(original.init_if_missing(dir.path()).unwrap());

        let loaded = AssignmentStore::load(dir.path()).unwrap();
        assert_eq!(loaded.assignments(), original.assignments());
    }

    #[test]
    fn init_if_missing_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let first = store();
        assert!(first.init_if_missing(dir.path()).unwrap());

        let reshuffled = AssignmentStore::new(
            build_circle(&[Token::of("C"), Token::of("A"), Token::of("B")]).unwrap(),
        );
        assert!(!reshuffled.init_if_missing(dir.path()).unwrap());

        let loaded = AssignmentStore::load(dir.path()).unwrap();
        assert_eq!(loaded.assignments(), first.assignments());
    }

    #[test]
    fn load_without_record_is_not_ready() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            AssignmentStore::load(dir.path()),
            Err(SantaError::AssignmentsNotReady)
        ));
    }

    #[test]
    fn receiver_lookup() {
        let s = store();
        assert_eq!(s.receiver_for(&Token::of("A")), Some(&Token::of("B")));
        assert_eq!(s.receiver_for(&Token::of("C")), Some(&Token::of("A")));
        assert!(s.receiver_for(&Token::of("Ningú")).is_none());
    }
}
