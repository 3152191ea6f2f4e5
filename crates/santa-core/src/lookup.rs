use crate::assignments::AssignmentStore;
use crate::config::Config;
use crate::error::{Result, SantaError};
use crate::links::LinkRegistry;
use crate::token::Token;
use std::path::Path;
use uuid::Uuid;

/// What a personal page shows: the visitor and who they give a present to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revelation {
    pub self_name: String,
    pub target_name: String,
}

/// Resolve a personal link id into the pair of display names.
///
/// Failure ladder: no registry record → `NotInitialized`; unknown id →
/// `LinkNotFound`; no assignment record → `AssignmentsNotReady`; giver absent
/// from the table → `AssignmentMissing`; a persisted token that no longer
/// matches any configured name → `DataIntegrity` (the config changed after
/// the draw).
pub fn resolve_link(root: &Path, config: &Config, id: &Uuid) -> Result<Revelation> {
    let registry = LinkRegistry::load(root)?;
    let entry = registry
        .find(id)
        .ok_or_else(|| SantaError::LinkNotFound(id.to_string()))?;

    let store = AssignmentStore::load(root)?;
    let receiver = store
        .receiver_for(&entry.person)
        .ok_or_else(|| SantaError::AssignmentMissing(entry.person.to_string()))?;

    let self_name = config
        .name_by_token(&entry.person)
        .ok_or_else(|| integrity(&entry.person))?;
    let target_name = config
        .name_by_token(receiver)
        .ok_or_else(|| integrity(receiver))?;

    Ok(Revelation {
        self_name: self_name.to_string(),
        target_name: target_name.to_string(),
    })
}

fn integrity(token: &Token) -> SantaError {
    tracing::warn!(%token, "persisted token has no configured participant");
    SantaError::DataIntegrity(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Participant;
    use crate::draw;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn config(names: &[&str]) -> Config {
        Config {
            people: names
                .iter()
                .map(|n| Participant {
                    name: n.to_string(),
                    phone: format!("+34600{:06}", n.len()),
                })
                .collect(),
            skip_sms: true,
            twilio: None,
        }
    }

    fn drawn(names: &[&str]) -> (TempDir, Config, LinkRegistry) {
        let dir = TempDir::new().unwrap();
        let cfg = config(names);
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = draw::ensure_draw(dir.path(), &cfg, &mut rng).unwrap();
        let links = outcome.links;
        (dir, cfg, links)
    }

    #[test]
    fn resolves_every_link_to_a_valid_pair() {
        let (dir, cfg, links) = drawn(&["Maria", "Joan", "Pere", "Anna"]);

        let mut seen_targets = Vec::new();
        for entry in links.entries() {
            let r = resolve_link(dir.path(), &cfg, &entry.id).unwrap();
            assert_ne!(r.self_name, r.target_name);
            assert!(cfg.people.iter().any(|p| p.name == r.self_name));
            assert!(cfg.people.iter().any(|p| p.name == r.target_name));
            seen_targets.push(r.target_name);
        }
        // Everyone receives exactly once.
        seen_targets.sort();
        seen_targets.dedup();
        assert_eq!(seen_targets.len(), 4);
    }

    #[test]
    fn unknown_id_is_link_not_found() {
        let (dir, cfg, _links) = drawn(&["Maria", "Joan"]);
        let err = resolve_link(dir.path(), &cfg, &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, SantaError::LinkNotFound(_)));
    }

    #[test]
    fn before_any_draw_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&["Maria", "Joan"]);
        let err = resolve_link(dir.path(), &cfg, &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, SantaError::NotInitialized));
    }

    #[test]
    fn missing_assignment_record_is_not_ready() {
        let (dir, cfg, links) = drawn(&["Maria", "Joan"]);
        std::fs::remove_file(crate::paths::assignments_path(dir.path())).unwrap();

        let id = links.entries()[0].id;
        let err = resolve_link(dir.path(), &cfg, &id).unwrap_err();
        assert!(matches!(err, SantaError::AssignmentsNotReady));
    }

    #[test]
    fn renamed_participant_is_a_data_integrity_error() {
        let (dir, mut cfg, links) = drawn(&["Maria", "Joan"]);
        // Operator edits the config after the draw.
        cfg.people[0].name = "Mariona".to_string();
        cfg.people[1].name = "Jan".to_string();

        let id = links.entries()[0].id;
        let err = resolve_link(dir.path(), &cfg, &id).unwrap_err();
        assert!(matches!(err, SantaError::DataIntegrity(_)));
    }
}
