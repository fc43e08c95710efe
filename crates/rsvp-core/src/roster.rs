//! Guest roster snapshot
//!
//! A [`Roster`] is loaded once per session and never mutated afterwards.
//! Each record's [`NameParts`] are computed at construction and kept
//! alongside it, read-only.

use std::hash::{Hash, Hasher};

use ahash::AHasher;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::normalize::{name_parts, NameParts};

/// A registered guest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestRecord {
    /// Display name, free text
    pub name: String,
    /// Party size including the guest, at least 1
    pub max_guests: u32,
}

impl GuestRecord {
    pub fn new(name: impl Into<String>, max_guests: u32) -> Self {
        Self {
            name: name.into(),
            max_guests,
        }
    }
}

/// Wire shape of a roster entry before validation
#[derive(Debug, Deserialize)]
struct RawGuestRecord {
    #[serde(default)]
    name: Option<String>,
    max_guests: i64,
}

/// Immutable, ordered roster with cached name parts
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<GuestRecord>,
    parts: Vec<NameParts>,
    fingerprint: String,
}

impl Roster {
    /// Build a snapshot, rejecting blank names and zero capacities.
    pub fn new(records: Vec<GuestRecord>) -> RosterResult<Self> {
        for (index, record) in records.iter().enumerate() {
            validate(index, &record.name, i64::from(record.max_guests))?;
        }

        let parts: Vec<NameParts> = records.iter().map(|r| name_parts(&r.name)).collect();
        let fingerprint = compute_fingerprint(&records);

        debug!(
            records = records.len(),
            fingerprint = %fingerprint,
            "Roster snapshot built"
        );

        Ok(Self {
            records,
            parts,
            fingerprint,
        })
    }

    /// Decode a JSON array of `{"name": ..., "max_guests": ...}` records.
    pub fn from_json(json: &str) -> RosterResult<Self> {
        let raw: Vec<RawGuestRecord> =
            serde_json::from_str(json).map_err(|e| RosterError::Parse(e.to_string()))?;

        let mut records = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            let name = entry.name.unwrap_or_default();
            validate(index, &name, entry.max_guests)?;
            let max_guests =
                u32::try_from(entry.max_guests).map_err(|_| RosterError::InvalidCapacity {
                    index,
                    name: name.clone(),
                    max_guests: entry.max_guests,
                })?;
            records.push(GuestRecord { name, max_guests });
        }

        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in roster order
    pub fn records(&self) -> &[GuestRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&GuestRecord> {
        self.records.get(index)
    }

    /// Records paired with their cached name parts, in roster order
    pub fn iter(&self) -> impl Iterator<Item = (&GuestRecord, &NameParts)> {
        self.records.iter().zip(self.parts.iter())
    }

    /// Hash of names and capacities, for change detection on reload
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            parts: Vec::new(),
            fingerprint: compute_fingerprint(&[]),
        }
    }
}

fn validate(index: usize, name: &str, max_guests: i64) -> RosterResult<()> {
    if name.trim().is_empty() {
        return Err(RosterError::EmptyName { index });
    }
    if max_guests < 1 {
        return Err(RosterError::InvalidCapacity {
            index,
            name: name.to_string(),
            max_guests,
        });
    }
    Ok(())
}

fn compute_fingerprint(records: &[GuestRecord]) -> String {
    let mut hasher = AHasher::default();
    for r in records {
        r.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}
