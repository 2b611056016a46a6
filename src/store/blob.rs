use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error on {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn serialization(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a JSON blob, or `None` when nothing has been persisted yet.
///
/// A zero-length file counts as "nothing persisted"; any other unparsable
/// content is an error so a corrupt blob is never silently replaced.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let f = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no blob on disk");
            return Ok(None);
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let len = f.metadata().map_err(|e| StoreError::io(path, e))?.len();
    if len == 0 {
        warn!(path = %path.display(), "empty blob treated as absent");
        return Ok(None);
    }

    let value = serde_json::from_reader(BufReader::new(f))
        .map_err(|e| StoreError::serialization(path, e))?;
    Ok(Some(value))
}

/// Write a JSON blob atomically: temp file, fsync, rename over the target.
pub fn persist_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);

    let f = fs::File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, e))?;
    let mut writer = BufWriter::new(f);
    serde_json::to_writer(&mut writer, value)
        .map_err(|e| StoreError::serialization(&temp_path, e))?;
    writer.flush().map_err(|e| StoreError::io(&temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| StoreError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
