use crate::error::{Result, SantaError};
use crate::token::Token;
use crate::{io, paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// LinkEntry / LinkRegistry
// ---------------------------------------------------------------------------

/// One participant's personal link: an unguessable id mapped to their token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub id: Uuid,
    pub person: Token,
}

/// The persisted id → token index, one entry per participant.
///
/// Generated once per draw and treated as permanent; regenerating it would
/// invalidate every link already sent out.
#[derive(Debug, Clone)]
pub struct LinkRegistry {
    entries: Vec<LinkEntry>,
}

impl LinkRegistry {
    /// Mint a fresh v4 id for each token.
    pub fn generate(tokens: &[Token]) -> Self {
        let entries = tokens
            .iter()
            .map(|token| LinkEntry {
                id: Uuid::new_v4(),
                person: token.clone(),
            })
            .collect();
        Self { entries }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::links_path(root);
        if !path.exists() {
            return Err(SantaError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let entries: Vec<LinkEntry> = serde_json::from_str(&data)?;
        Ok(Self { entries })
    }

    /// Persist the registry unless a record already exists on disk.
    /// Returns true if this call wrote the record.
    pub fn init_if_missing(&self, root: &Path) -> Result<bool> {
        let data = serde_json::to_vec_pretty(&self.entries)?;
        io::write_if_missing(&paths::links_path(root), &data)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn find(&self, id: &Uuid) -> Option<&LinkEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Personal URL for a link id: `{public_url}/qui-hem-toca-a-mi/{id}`.
pub fn link_url(public_url: &str, id: &Uuid) -> String {
    format!(
        "{}/{}/{id}",
        public_url.trim_end_matches('/'),
        paths::LINK_PATH_PREFIX
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
