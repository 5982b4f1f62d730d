//! A simple local storage system for arbridge
//! Stores objects in ~/.arbridge as JSON files, one file per key.
//!
//! This is the persistence layer backing user-added custom chain
//! definitions. Reads of a missing key return `None`; a malformed blob is a
//! parse error propagated to the caller rather than silently discarded.

use serde::{de::DeserializeOwned, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::PathBuf;

use arbridge_common::utils::io::{delete_path, read_file, write_file};
use error::Error;

pub mod error;

/// Returns the on-disk path for a storage key, `~/.arbridge/<key>.json`.
#[allow(deprecated)]
pub fn store_path(key: &str) -> Result<PathBuf, Error> {
    let home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;

    Ok(home.join(".arbridge").join(format!("{key}.json")))
}

/// Check if a stored object exists
///
/// ```
/// use arbridge_storage::{write_store, exists};
///
/// write_store("exists_key", &"value").expect("!");
///
/// assert!(exists("exists_key").expect("!"));
/// assert!(!exists("non_existent_key").expect("!"));
/// ```
pub fn exists(key: &str) -> Result<bool, Error> {
    Ok(store_path(key)?.exists())
}

/// Read a stored object, deserializing it from JSON.
///
/// Returns `Ok(None)` if nothing is stored under the key. A stored blob that
/// fails to parse is an [`Error::Parse`].
///
/// ```
/// use arbridge_storage::{write_store, read_store};
///
/// write_store("read_store_key", &"value").expect("!");
///
/// assert_eq!(read_store::<String>("read_store_key").expect("!").expect("!"), "value");
/// ```
pub fn read_store<T>(key: &str) -> Result<Option<T>, Error>
where
    T: DeserializeOwned, {
    let path = store_path(key)?;

    let contents = match read_file(
        path.to_str()
            .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
    ) {
        Ok(contents) => contents,
        Err(_) => return Ok(None),
    };

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_str::<T>(&contents)?;

    Ok(Some(value))
}

/// Store an object, serializing it to JSON.
///
/// The whole object is serialized and written on every call.
///
/// ```
/// use arbridge_storage::{write_store, read_store};
///
/// write_store("write_store_key", &vec![1u64, 2, 3]).expect("!");
///
/// assert_eq!(read_store::<Vec<u64>>("write_store_key").expect("!").expect("!"), vec![1, 2, 3]);
/// ```
pub fn write_store<T>(key: &str, value: &T) -> Result<(), Error>
where
    T: Serialize, {
    let path = store_path(key)?;
    let contents = serde_json::to_string(value)?;

    write_file(
        path.to_str()
            .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        &contents,
    )
    .map_err(|e| Error::Generic(format!("failed to write store file: {e:?}")))?;

    Ok(())
}

/// Delete a stored object
///
/// ```
/// use arbridge_storage::{write_store, delete_store, exists};
///
/// write_store("delete_store_key", &"value").expect("!");
/// assert!(exists("delete_store_key").expect("!"));
///
/// delete_store("delete_store_key").expect("!");
/// assert!(!exists("delete_store_key").expect("!"));
/// ```
pub fn delete_store(key: &str) -> Result<(), Error> {
    let path = store_path(key)?;

    if path.exists() {
        tracing::debug!("deleting stored object '{}'", key);
        delete_path(
            path.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        );
    }

    Ok(())
}
