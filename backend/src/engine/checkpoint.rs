//! Checkpoint - Save/Restore Quote State
//!
//! A snapshot carries the quote state plus a hash of the effective pricing
//! tables it was priced against. Storage is the host's job; snapshots are
//! JSON strings in and out.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same state + same tables reprices to identical totals
//! - **Line Integrity**: stone ids are non-empty and unique
//! - **Tables Matching**: a strict restore requires the same tables hash

use crate::models::quote::QuoteState;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use thiserror::Error;

/// Snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors capturing or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Pricing tables changed since capture (snapshot {snapshot}, current {current})")]
    TablesMismatch { snapshot: String, current: String },

    #[error("Invalid quote state: {0}")]
    InvalidState(String),
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Quote state bound to the tables it was priced with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    pub version: u32,

    pub state: QuoteState,

    /// SHA256 of the canonical effective tables (for validation)
    pub tables_hash: String,
}

impl QuoteSnapshot {
    pub fn capture<T: Serialize>(state: &QuoteState, tables: &T) -> Result<Self, SnapshotError> {
        validate_state(state)?;
        Ok(Self {
            version: SNAPSHOT_VERSION,
            state: state.clone(),
            tables_hash: compute_tables_hash(tables)?,
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: QuoteSnapshot =
            serde_json::from_str(json).map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }

    /// Restore only if `tables` hash to the captured value.
    pub fn restore<T: Serialize>(&self, tables: &T) -> Result<QuoteState, SnapshotError> {
        let current = compute_tables_hash(tables)?;
        if current != self.tables_hash {
            return Err(SnapshotError::TablesMismatch {
                snapshot: self.tables_hash.clone(),
                current,
            });
        }
        self.restore_lenient()
    }

    /// Restore regardless of table changes; the host reprices against
    /// whatever tables are current.
    pub fn restore_lenient(&self) -> Result<QuoteState, SnapshotError> {
        validate_state(&self.state)?;
        Ok(self.state.clone())
    }

    pub fn into_state(self) -> QuoteState {
        self.state
    }
}

// ============================================================================
// Tables Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of pricing tables
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on map iteration order.
pub fn compute_tables_hash<T: Serialize>(tables: &T) -> Result<String, SnapshotError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(tables)
        .map_err(|e| SnapshotError::Serialization(format!("Tables serialization failed: {}", e)))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| SnapshotError::Serialization(format!("Tables serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate quote state integrity
///
/// Checks:
/// - Quote number and currency code are present
/// - Stone ids are non-empty and unique
pub fn validate_state(state: &QuoteState) -> Result<(), SnapshotError> {
    if state.quote_no.trim().is_empty() {
        return Err(SnapshotError::InvalidState("quote number is empty".to_string()));
    }
    if state.currency.trim().is_empty() {
        return Err(SnapshotError::InvalidState("currency code is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for (index, stone) in state.stones.iter().enumerate() {
        if stone.id.is_empty() {
            return Err(SnapshotError::InvalidState(format!(
                "stone line {} has no id",
                index + 1
            )));
        }
        if !seen.insert(stone.id.as_str()) {
            return Err(SnapshotError::InvalidState(format!(
                "duplicate stone id '{}'",
                stone.id
            )));
        }
    }
    Ok(())
}
