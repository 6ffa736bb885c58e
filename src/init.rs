use crate::api::PromptzApi;
use crate::config::PromptzConfig;
use crate::error::Result;
use crate::store::fs::FileStore;

/// Build a ready-to-use file-backed API at the per-user default location.
///
/// The data file itself is created lazily on the first mutating operation;
/// a fresh install simply lists no categories.
pub fn initialize() -> Result<PromptzApi<FileStore>> {
    let config = PromptzConfig::resolve()?;
    Ok(initialize_with(config))
}

/// Build a file-backed API at an explicit location.
pub fn initialize_with(config: PromptzConfig) -> PromptzApi<FileStore> {
    PromptzApi::new(FileStore::new(config.data_file))
}
