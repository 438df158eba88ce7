use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A parsed, validated tile-map document. Tile ids are stored row-major;
/// row 0 is the top of the level. Interpretation of ids (colors, spawn
/// markers) is left to the game.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDoc {
    width: u32,
    height: u32,
    tile_size_px: u32,
    tile_ids: Vec<u16>,
    start_row: u32,
    start_col: u32,
}

#[derive(Debug, Error)]
pub enum LevelDocError {
    #[error("failed to read levels directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no level documents (*.json) found in {path}")]
    NoLevels { path: PathBuf },
    #[error("failed to read level document {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level document {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("level document {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

#[derive(Debug, Deserialize)]
struct RawLevelDoc {
    width: u32,
    height: u32,
    tilewidth: u32,
    data: Vec<u16>,
    properties: RawLevelProperties,
}

#[derive(Debug, Deserialize)]
struct RawLevelProperties {
    start_row: u32,
    start_col: u32,
}

/// All `*.json` documents in the directory, sorted by file name so level
/// order is stable across platforms. An empty set is a startup error.
pub fn discover_level_files(levels_dir: &Path) -> Result<Vec<PathBuf>, LevelDocError> {
    let entries = fs::read_dir(levels_dir).map_err(|source| LevelDocError::ReadDir {
        path: levels_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LevelDocError::ReadDir {
            path: levels_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(LevelDocError::NoLevels {
            path: levels_dir.to_path_buf(),
        });
    }
    Ok(files)
}

pub fn load_level_doc(path: &Path) -> Result<LevelDoc, LevelDocError> {
    let raw_text = fs::read_to_string(path).map_err(|source| LevelDocError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut deserializer = serde_json::Deserializer::from_str(&raw_text);
    let raw: RawLevelDoc = serde_path_to_error::deserialize(&mut deserializer).map_err(
        |error| LevelDocError::Parse {
            path: path.to_path_buf(),
            message: format!("{} (at {})", error.inner(), error.path()),
        },
    )?;

    validate_raw_doc(path, &raw)?;

    Ok(LevelDoc {
        width: raw.width,
        height: raw.height,
        tile_size_px: raw.tilewidth,
        tile_ids: raw.data,
        start_row: raw.properties.start_row,
        start_col: raw.properties.start_col,
    })
}

fn validate_raw_doc(path: &Path, raw: &RawLevelDoc) -> Result<(), LevelDocError> {
    let malformed = |reason: String| LevelDocError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    if raw.width == 0 || raw.height == 0 {
        return Err(malformed(format!(
            "dimensions must be non-zero, got {}x{}",
            raw.width, raw.height
        )));
    }
    if raw.tilewidth == 0 {
        return Err(malformed("tilewidth must be non-zero".to_string()));
    }

    let expected = raw.width as usize * raw.height as usize;
    if raw.data.len() != expected {
        return Err(malformed(format!(
            "tile count mismatch: expected {expected}, got {}",
            raw.data.len()
        )));
    }

    if raw.properties.start_row >= raw.height || raw.properties.start_col >= raw.width {
        return Err(malformed(format!(
            "start position ({}, {}) is outside the {}x{} grid",
            raw.properties.start_row, raw.properties.start_col, raw.width, raw.height
        )));
    }

    Ok(())
}

impl LevelDoc {
    /// Builds a document from already-validated parts. Useful for tests and
    /// generated content; file loading goes through [`load_level_doc`].
    pub fn from_parts(
        width: u32,
        height: u32,
        tile_size_px: u32,
        tile_ids: Vec<u16>,
        start_row: u32,
        start_col: u32,
    ) -> Self {
        debug_assert_eq!(tile_ids.len(), width as usize * height as usize);
        Self {
            width,
            height,
            tile_size_px,
            tile_ids,
            start_row,
            start_col,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size_px(&self) -> u32 {
        self.tile_size_px
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn start_col(&self) -> u32 {
        self.start_col
    }

    pub fn tile_id_at(&self, row: u32, col: u32) -> Option<u16> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let index = row as usize * self.width as usize + col as usize;
        self.tile_ids.get(index).copied()
    }

    pub fn tile_ids(&self) -> &[u16] {
        &self.tile_ids
    }
}
