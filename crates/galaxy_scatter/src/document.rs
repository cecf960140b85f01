//! The persisted map document: stars plus wormhole edges.
//!
//! One document is written per run under `<output_root>/<epoch>/`. Documents
//! are created, never updated or appended to.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::stars::{Star, Uid};

/// File name of the JSON document inside a run directory.
pub const DOCUMENT_FILE_NAME: &str = "galaxy_map.json";

/// A referential edge between two stars, serialized as `[uid1, uid2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wormhole(pub Uid, pub Uid);

impl Wormhole {
    pub fn new(uid1: Uid, uid2: Uid) -> Self {
        Self(uid1, uid2)
    }

    /// Zero-based star indices, or an error when either uid lies outside `1..=star_count`.
    pub fn indices(&self, star_count: usize) -> Result<(usize, usize)> {
        let resolve = |uid: Uid| -> Option<usize> {
            let idx = (uid as usize).checked_sub(1)?;
            (idx < star_count).then_some(idx)
        };
        match (resolve(self.0), resolve(self.1)) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(Error::InvalidWormholeReference {
                uid1: self.0,
                uid2: self.1,
                star_count,
            }),
        }
    }
}

impl From<(Uid, Uid)> for Wormhole {
    fn from((uid1, uid2): (Uid, Uid)) -> Self {
        Self(uid1, uid2)
    }
}

/// Checks every wormhole against `1..=star_count`.
pub fn validate_wormholes(wormholes: &[Wormhole], star_count: usize) -> Result<()> {
    for wormhole in wormholes {
        wormhole.indices(star_count)?;
    }
    Ok(())
}

/// Stars in uid order and the wormholes connecting them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapDocument {
    pub stars: Vec<Star>,
    pub wormholes: Vec<Wormhole>,
}

impl MapDocument {
    /// Assembles a document. Wormholes are passed through unchanged.
    pub fn new(stars: Vec<Star>, wormholes: Vec<Wormhole>) -> Self {
        Self { stars, wormholes }
    }

    pub fn validate_wormholes(&self) -> Result<()> {
        validate_wormholes(&self.wormholes, self.stars.len())
    }

    /// Star coordinates in uid order.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.stars.iter().map(|s| [s.x, s.y]).collect()
    }

    /// Star display names in uid order.
    pub fn names(&self) -> Vec<String> {
        self.stars.iter().map(|s| s.name.clone()).collect()
    }

    /// Pretty JSON with four-space indentation.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| Error::Other(e.to_string()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Writes the document to `path`, failing if the file already exists.
    ///
    /// A write that fails midway removes the partial file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        write_new_file(path, |file| file.write_all(json.as_bytes()))?;
        info!(
            "Wrote {} stars and {} wormholes to {}.",
            self.stars.len(),
            self.wormholes.len(),
            path.display()
        );
        Ok(())
    }
}

/// Creates `path` exclusively and fills it with `write`. On failure the file is removed.
fn write_new_file(
    path: &Path,
    write: impl FnOnce(&mut fs::File) -> std::io::Result<()>,
) -> Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(e) = write(&mut file).and_then(|()| file.flush()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("Could not remove partial document {}: {cleanup}.", path.display());
        }
        return Err(e.into());
    }
    Ok(())
}

/// Seconds since the Unix epoch.
pub fn unix_epoch_now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| Error::Other(format!("system clock before Unix epoch: {e}")))
}

/// `<output_root>/<epoch>`.
pub fn run_directory(output_root: impl AsRef<Path>, epoch: u64) -> PathBuf {
    output_root.as_ref().join(epoch.to_string())
}

/// Creates the run directory for `epoch` and writes `document` into it as
/// [`DOCUMENT_FILE_NAME`].
///
/// Returns the path of the written document.
pub fn persist(
    document: &MapDocument,
    output_root: impl AsRef<Path>,
    epoch: u64,
) -> Result<PathBuf> {
    persist_as(document, output_root, epoch, DOCUMENT_FILE_NAME)
}

/// Like [`persist`], with a caller-chosen file name.
pub fn persist_as(
    document: &MapDocument,
    output_root: impl AsRef<Path>,
    epoch: u64,
    file_name: &str,
) -> Result<PathBuf> {
    let name = Path::new(file_name);
    if file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
        return Err(Error::InvalidConfig(format!(
            "document name '{file_name}' must be a plain file name"
        )));
    }
    let dir = run_directory(output_root, epoch);
    fs::create_dir_all(&dir)?;
    let path = dir.join(name);
    document.write_json(&path)?;
    Ok(path)
}
