//! JSON export of a [`TagCloud`] built on `serde_json`.

use std::fs;
use std::path::Path;

use crate::cloud::TagCloud;
use crate::error::{Result, TagCloudError};

/// Serialises the cloud (source, requested size and alphabetical entries) to JSON.
pub fn to_json(cloud: &TagCloud, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(cloud)?
    } else {
        serde_json::to_string(cloud)?
    };
    Ok(json)
}

/// Writes the JSON representation of the cloud to `path`.
pub fn save_json<P: AsRef<Path>>(cloud: &TagCloud, path: P, pretty: bool) -> Result<()> {
    let json = to_json(cloud, pretty)?;
    fs::write(path.as_ref(), json)
        .map_err(|err| TagCloudError::io(err, Some(path.as_ref().to_path_buf())))
}

/// Parses a cloud previously produced by [`to_json`].
pub fn from_json(json: &str) -> Result<TagCloud> {
    Ok(serde_json::from_str(json)?)
}
