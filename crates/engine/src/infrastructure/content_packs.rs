//! Filesystem content pack source.
//!
//! Layout: one directory per pack under the packs root, each holding a
//! `manifest.json` (with `UniqueID`) and a `TrainStops.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use transit_domain::PackId;

use crate::infrastructure::ports::{ContentPack, ContentPackSource, LoadedPack, PackLoadError};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const STOPS_FILE: &str = "TrainStops.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Manifest {
    #[serde(rename = "UniqueID")]
    unique_id: String,
}

/// Reads packs from sub-directories of a root directory.
pub struct DirectoryPackSource {
    root: PathBuf,
}

impl DirectoryPackSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Sub-directories of the root in name order.
    fn pack_dirs(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %self.root.display(),
                    error = %e,
                    "Content pack directory unreadable"
                );
                return Vec::new();
            }
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        dirs
    }
}

impl ContentPackSource for DirectoryPackSource {
    fn load_packs(&self) -> Vec<LoadedPack> {
        let mut packs = Vec::new();
        for dir in self.pack_dirs() {
            match load_pack(&dir) {
                Ok(pack) => {
                    tracing::debug!(
                        pack_id = %pack.id,
                        train_stops = pack.content.train_stops.len(),
                        boat_stops = pack.content.boat_stops.len(),
                        "Loaded content pack"
                    );
                    packs.push(pack);
                }
                Err(e) if e.is_missing_file() => {
                    tracing::error!(
                        pack = %dir.display(),
                        error = %e,
                        "Content pack is missing a required file"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        pack = %dir.display(),
                        error = %e,
                        "Skipping unreadable content pack"
                    );
                }
            }
        }
        packs
    }
}

/// Load a single pack directory.
pub fn load_pack(dir: &Path) -> Result<LoadedPack, PackLoadError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest: Manifest = read_json(&manifest_path)?;
    let id = PackId::new(manifest.unique_id).map_err(|e| PackLoadError::Manifest {
        path: manifest_path.clone(),
        message: e.to_string(),
    })?;

    let content: ContentPack = read_json(&dir.join(STOPS_FILE))?;
    Ok(LoadedPack { id, content })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, PackLoadError> {
    if !path.is_file() {
        return Err(PackLoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).map_err(|source| PackLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PackLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use transit_domain::NetworkKind;

    fn write_pack(root: &Path, dir: &str, manifest: Option<&str>, stops: Option<&str>) {
        let pack_dir = root.join(dir);
        fs::create_dir_all(&pack_dir).expect("create pack dir");
        if let Some(manifest) = manifest {
            fs::write(pack_dir.join(MANIFEST_FILE), manifest).expect("write manifest");
        }
        if let Some(stops) = stops {
            fs::write(pack_dir.join(STOPS_FILE), stops).expect("write stops");
        }
    }

    #[test]
    fn loads_packs_in_directory_order() {
        let root = TempDir::new().expect("temp dir");
        write_pack(
            root.path(),
            "b-harbor",
            Some(r#"{"UniqueID": "Author.Harbor"}"#),
            Some(r#"{"BoatStops": [{"TargetMapName": "Harbor", "Cost": 100}]}"#),
        );
        write_pack(
            root.path(),
            "a-forest",
            Some(r#"{"UniqueID": "Author.Forest", "Name": "Forest"}"#),
            Some(r#"{"TrainStops": [{"TargetMapName": "Forest", "Cost": 50}]}"#),
        );

        let packs = DirectoryPackSource::new(root.path()).load_packs();

        let ids: Vec<&str> = packs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["Author.Forest", "Author.Harbor"]);
        assert_eq!(packs[0].content.stops(NetworkKind::Train).len(), 1);
        assert_eq!(packs[1].content.stops(NetworkKind::Boat)[0].cost, 100);
    }

    #[test]
    fn skips_pack_without_stops_file() {
        let root = TempDir::new().expect("temp dir");
        write_pack(root.path(), "empty", Some(r#"{"UniqueID": "Author.Empty"}"#), None);

        assert!(DirectoryPackSource::new(root.path()).load_packs().is_empty());
        let err = load_pack(&root.path().join("empty")).expect_err("pack rejected");
        assert!(err.is_missing_file());
    }

    #[test]
    fn skips_malformed_pack_and_keeps_others() {
        let root = TempDir::new().expect("temp dir");
        write_pack(
            root.path(),
            "broken",
            Some(r#"{"UniqueID": "Author.Broken"}"#),
            Some("{ not json"),
        );
        write_pack(
            root.path(),
            "fine",
            Some(r#"{"UniqueID": "Author.Fine"}"#),
            Some("{}"),
        );

        let packs = DirectoryPackSource::new(root.path()).load_packs();
        assert_eq!(packs.len(), 1);
        assert_eq!(packs[0].id.as_str(), "Author.Fine");

        let err = load_pack(&root.path().join("broken")).expect_err("pack rejected");
        assert!(matches!(err, PackLoadError::Parse { .. }));
    }

    #[test]
    fn blank_manifest_id_is_rejected() {
        let root = TempDir::new().expect("temp dir");
        write_pack(root.path(), "blank", Some(r#"{"UniqueID": " "}"#), Some("{}"));

        let err = load_pack(&root.path().join("blank")).expect_err("pack rejected");
        assert!(matches!(err, PackLoadError::Manifest { .. }));
    }

    #[test]
    fn missing_root_yields_no_packs() {
        let root = TempDir::new().expect("temp dir");
        let source = DirectoryPackSource::new(root.path().join("does-not-exist"));
        assert!(source.load_packs().is_empty());
    }
}
