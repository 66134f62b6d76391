//! Save/load of the player record
//!
//! Features:
//! - Versioned JSON envelope under a versioned storage key
//! - Missing fields fall back to defaults (older saves keep loading)
//! - Transient fields (velocity, grounding, teleport signal) are never stored
//! - Corrupt or unreadable saves degrade to a fresh record

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::PlayerRecord;

/// Current schema version
pub const SAVE_VERSION: u32 = 1;
/// Storage key; bumps with the schema version
pub const SAVE_KEY: &str = "speed_obby_save_v1";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("malformed save: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("save version {found} is newer than supported {}", SAVE_VERSION)]
    UnsupportedVersion { found: u32 },
}

/// Key/value backend for saves
pub trait SaveStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct SaveEnvelope {
    version: u32,
    #[serde(default)]
    record: PlayerRecord,
}

pub fn encode(record: &PlayerRecord) -> Result<String, PersistenceError> {
    #[derive(Serialize)]
    struct Borrowed<'a> {
        version: u32,
        record: &'a PlayerRecord,
    }
    Ok(serde_json::to_string(&Borrowed {
        version: SAVE_VERSION,
        record,
    })?)
}

/// Parse a save blob and repair its invariants
pub fn decode(json: &str) -> Result<PlayerRecord, PersistenceError> {
    let envelope: SaveEnvelope = serde_json::from_str(json)?;
    if envelope.version > SAVE_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: envelope.version,
        });
    }
    let mut record = envelope.record;
    record.normalize();
    Ok(record)
}

pub fn save(store: &mut impl SaveStore, record: &PlayerRecord) -> Result<(), PersistenceError> {
    let json = encode(record)?;
    store.write(SAVE_KEY, &json)
}

/// Load the saved record, or a fresh one when there is none or it is unusable
pub fn load(store: &impl SaveStore) -> PlayerRecord {
    match store.read(SAVE_KEY) {
        Ok(Some(json)) => match decode(&json) {
            Ok(record) => {
                log::info!("Loaded save (rebirths {}, speed {})", record.rebirths, record.speed);
                record
            }
            Err(e) => {
                log::warn!("Discarding unreadable save: {}", e);
                PlayerRecord::default()
            }
        },
        Ok(None) => {
            log::info!("No save found, starting fresh");
            PlayerRecord::default()
        }
        Err(e) => {
            log::warn!("Could not read save: {}", e);
            PlayerRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;
    use glam::Vec2;

    #[test]
    fn test_save_then_load_drops_transients() {
        let mut store = MemoryStore::default();
        let mut record = PlayerRecord {
            speed: 1234.0,
            rebirths: 2,
            world: 3,
            checkpoint: Vec2::new(1135.0, 470.0),
            velocity: Vec2::new(9.0, 9.0),
            is_grounded: true,
            teleport_id: 17,
            ..Default::default()
        };
        record.collected_ids.insert("magma_1".into());
        save(&mut store, &record).unwrap();

        let loaded = load(&store);
        assert_eq!(loaded.speed, 1234.0);
        assert_eq!(loaded.rebirths, 2);
        assert_eq!(loaded.world, 3);
        assert!(loaded.collected_ids.contains("magma_1"));
        assert_eq!(loaded.velocity, Vec2::ZERO);
        assert!(!loaded.is_grounded);
        assert_eq!(loaded.teleport_id, 0);
        assert_eq!(loaded.position, Vec2::new(1135.0, 470.0));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let record = decode(r#"{"version":1,"record":{"speed":50.0}}"#).unwrap();
        assert_eq!(record.speed, 50.0);
        assert_eq!(record.attack, 1.0);
        assert_eq!(record.max_health, 100.0);
        assert_eq!(record.equipped_skin, "default");
    }

    #[test]
    fn test_corrupt_save_falls_back() {
        let mut store = MemoryStore::default();
        store.write(SAVE_KEY, "{not json").unwrap();
        assert_eq!(load(&store), PlayerRecord::default());
    }

    #[test]
    fn test_future_version_rejected() {
        let err = decode(r#"{"version":99,"record":{}}"#).unwrap_err();
        assert!(matches!(err, PersistenceError::UnsupportedVersion { found: 99 }));
    }

    #[test]
    fn test_empty_store_is_fresh() {
        assert_eq!(load(&MemoryStore::default()), PlayerRecord::default());
    }
}
