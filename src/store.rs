//! # Profile Store
//!
//! Named profile persistence: a single JSON file mapping profile names to raw
//! profile configs. Stored configs are raw on purpose; validation happens
//! when a config is turned into a [`Profile`](crate::profile::Profile), so
//! one bad saved entry never blocks loading the rest.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::LabelError;
use crate::profile::ProfileConfig;

/// Stored profiles by name, sorted for stable file output.
pub type ProfileMap = BTreeMap<String, ProfileConfig>;

/// Load the profile map from `path`. A missing file is an empty store.
pub fn load_profiles(path: &Path) -> Result<ProfileMap, LabelError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ProfileMap::new()),
        Err(e) => Err(e.into()),
    }
}

/// Write the whole profile map to `path` as pretty-printed JSON.
pub fn save_profiles(path: &Path, profiles: &ProfileMap) -> Result<(), LabelError> {
    let text = serde_json::to_string_pretty(profiles)?;
    fs::write(path, text)?;
    Ok(())
}

/// Insert or replace one named profile.
pub fn save_profile(path: &Path, name: &str, config: ProfileConfig) -> Result<(), LabelError> {
    let mut profiles = load_profiles(path)?;
    profiles.insert(name.to_string(), config);
    save_profiles(path, &profiles)
}

/// Remove a named profile. Returns whether it existed; the file is only
/// rewritten when it did.
pub fn delete_profile(path: &Path, name: &str) -> Result<bool, LabelError> {
    let mut profiles = load_profiles(path)?;
    let existed = profiles.remove(name).is_some();
    if existed {
        save_profiles(path, &profiles)?;
    }
    Ok(existed)
}
