//! JSON save/load of a string-keyed record.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::PersistError;

/// String keys mapped to arbitrary JSON values.
pub type Record = Map<String, Value>;

pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PersistError> {
    let io_err = |source| PersistError::Io { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value).map_err(|source| PersistError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    debug!(path = %path.display(), "saved json");
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, PersistError> {
    let data = fs::read(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&data).map_err(|source| PersistError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "loaded json");
    Ok(value)
}

pub fn save_to_file(path: &Path, record: &Record) -> Result<(), PersistError> {
    save_json(path, record)
}

pub fn load_from_file(path: &Path) -> Result<Record, PersistError> {
    load_json(path)
}
