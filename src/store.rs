// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persistence for index snapshots.
//!
//! A saved index is three JSON artifacts in one directory:
//!
//! - `inverted_index.json`: stem → sorted list of doc ids
//! - `positional_index.json`: stem → doc id → sorted list of positions
//! - `all_docs.json`: sorted list of every doc id in the universe
//!
//! The split mirrors the logical model and keeps each artifact readable on
//! its own. Ordered containers serialize sorted, so saving the same snapshot
//! twice yields byte-identical artifacts.
//!
//! [`load`] distinguishes two failure modes that callers must treat very
//! differently: [`StoreError::NotFound`] means no artifacts at all, go
//! build; [`StoreError::Corrupt`] means artifacts present but missing
//! pieces or unparsable, stop. Rebuilding over a corrupt index would
//! silently discard whatever the damaged files still describe.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::types::{IndexSnapshot, InvertedIndex, PositionalIndex};

/// Artifact filenames inside the index directory.
pub const INVERTED_FILE: &str = "inverted_index.json";
pub const POSITIONAL_FILE: &str = "positional_index.json";
pub const UNIVERSE_FILE: &str = "all_docs.json";

const ARTIFACTS: [&str; 3] = [INVERTED_FILE, POSITIONAL_FILE, UNIVERSE_FILE];

/// Write all three artifacts, creating the directory if needed.
pub fn save(snapshot: &IndexSnapshot, dir: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(dir)?;
    write_artifact(dir, INVERTED_FILE, &snapshot.inverted)?;
    write_artifact(dir, POSITIONAL_FILE, &snapshot.positional)?;
    write_artifact(dir, UNIVERSE_FILE, &snapshot.universe)?;
    Ok(())
}

/// Read a previously saved snapshot back.
///
/// All three artifacts absent: `NotFound`. Any other bad shape (a subset
/// of artifacts, unreadable files, JSON that does not parse): `Corrupt`.
pub fn load(dir: &Path) -> Result<IndexSnapshot, StoreError> {
    let present = ARTIFACTS
        .iter()
        .filter(|name| dir.join(name).exists())
        .count();
    if present == 0 {
        return Err(StoreError::NotFound);
    }
    if present < ARTIFACTS.len() {
        let missing = ARTIFACTS
            .iter()
            .find(|name| !dir.join(name).exists())
            .unwrap_or(&ARTIFACTS[0]);
        return Err(StoreError::Corrupt {
            artifact: missing.to_string(),
            detail: "artifact missing from a partially saved index".to_string(),
        });
    }

    Ok(IndexSnapshot {
        inverted: read_artifact::<InvertedIndex>(dir, INVERTED_FILE)?,
        positional: read_artifact::<PositionalIndex>(dir, POSITIONAL_FILE)?,
        universe: read_artifact(dir, UNIVERSE_FILE)?,
    })
}

fn write_artifact<T: serde::Serialize>(
    dir: &Path,
    name: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|e| StoreError::Corrupt {
        artifact: name.to_string(),
        detail: e.to_string(),
    })?;
    fs::write(dir.join(name), json)?;
    Ok(())
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, StoreError> {
    let raw = fs::read_to_string(dir.join(name)).map_err(|e| StoreError::Corrupt {
        artifact: name.to_string(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
        artifact: name.to_string(),
        detail: e.to_string(),
    })
}
