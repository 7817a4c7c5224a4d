//! JSON file persistence for rosters.
//!
//! The adapter never keeps its own copy of a roster: [`save`] borrows one and
//! [`load`] hands back a fresh one for the caller to install.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{LoadError, SaveError};
use crate::model::Roster;

/// Indentation width used by [`save`].
pub const DEFAULT_INDENT: usize = 4;

/// Write `roster` to `path` as pretty-printed JSON, overwriting any existing
/// file.
pub fn save(roster: &Roster, path: &Path) -> Result<(), SaveError> {
    save_with_indent(roster, path, DEFAULT_INDENT)
}

/// Like [`save`], with a custom indentation width.
pub fn save_with_indent(roster: &Roster, path: &Path, indent: usize) -> Result<(), SaveError> {
    let bytes = to_json(roster, indent)?;
    let io_err = |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), students = roster.len(), "roster saved");
    Ok(())
}

/// Encode a roster as indented JSON.
pub fn to_json(roster: &Roster, indent: usize) -> Result<Vec<u8>, SaveError> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    roster.serialize(&mut ser).map_err(SaveError::Serialize)?;
    Ok(buf)
}

/// Read a roster from `path`.
///
/// Checks are made in order: the file must exist, must be non-empty, and must
/// hold a valid student -> subject -> grade JSON object.
pub fn load(path: &Path) -> Result<Roster, LoadError> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if metadata.len() == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), "attempting to open file");
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(bytes = content.len(), "parsing JSON");
    // Tolerate a UTF-8 byte order mark left by some editors.
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let roster: Roster =
        serde_json::from_str(content).map_err(|source| LoadError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), students = roster.len(), "roster loaded");
    Ok(roster)
}

/// Read a roster from `path`, falling back to an empty one.
///
/// Never fails: on any [`LoadError`] the empty roster comes back together with
/// the diagnostic.
pub fn load_or_empty(path: &Path) -> (Roster, Option<LoadError>) {
    match load(path) {
        Ok(roster) => (roster, None),
        Err(e) => {
            tracing::warn!("{e}");
            (Roster::new(), Some(e))
        }
    }
}
