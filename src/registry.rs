//! Sample lookups against a devfile registry
//!
//! The registry index itself is fetched by the `registry-index` crate; this
//! module turns index entries into what the rest of the application needs:
//! the clone URL of a named sample and the list of available sample types.

use crate::constants::registry::ORIGIN_REMOTE;
use anyhow::{Result, anyhow};
use registry_index::{IndexEntry, RegistryClient};
use serde::Serialize;

/// Description of a sample used for project type detection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevfileType {
    pub name: String,
    pub language: String,
    pub project_type: String,
    pub tags: Vec<String>,
}

impl From<&IndexEntry> for DevfileType {
    fn from(entry: &IndexEntry) -> Self {
        Self {
            name: entry.name.clone(),
            language: entry.language.clone(),
            project_type: entry.project_type.clone(),
            tags: entry.tags.clone(),
        }
    }
}

/// Origin remote of the sample called `name`
///
/// Entries without git information or with an empty origin are skipped, so
/// a later entry with the same name can still match.
pub fn find_sample_remote(entries: &[IndexEntry], name: &str) -> Option<String> {
    entries
        .iter()
        .filter(|entry| entry.name == name)
        .find_map(|entry| entry.git.as_ref()?.remote(ORIGIN_REMOTE))
        .map(str::to_string)
}

/// Look up the repository URL of a sample in the registry
pub async fn sample_repo_url(
    client: &RegistryClient,
    name: &str,
    registry_url: &str,
) -> Result<String> {
    let entries = client.get_sample_index(registry_url).await?;
    find_sample_remote(&entries, name)
        .ok_or_else(|| anyhow!("unable to find sample with a name {} in the registry", name))
}

/// List the sample types offered by the registry
pub async fn sample_devfile_types(
    client: &RegistryClient,
    registry_url: &str,
) -> Result<Vec<DevfileType>> {
    let entries = client.get_sample_index(registry_url).await?;
    Ok(entries.iter().map(DevfileType::from).collect())
}
