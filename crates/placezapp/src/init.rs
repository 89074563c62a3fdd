use crate::api::PlacezApi;
use crate::config::PlacezConfig;
use crate::error::{PlacezError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SESSION_DIR: &str = "session";

pub struct PlacezContext {
    pub api: PlacezApi<FsBackend>,
    pub config: PlacezConfig,
    pub data_dir: PathBuf,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "placez", "placez")
        .ok_or_else(|| PlacezError::Config("Could not determine home directory".to_string()))
}

/// Picks the data directory: an explicit override, then the configured
/// `data_dir`, then the platform data directory.
pub fn resolve_data_dir(config: &PlacezConfig, data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override.or_else(|| config.data_dir.clone()) {
        return Ok(dir);
    }
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// Wires the API to `<data_dir>` for places and `<data_dir>/session` for the login.
pub fn open_at(data_dir: &Path, config: PlacezConfig) -> Result<PlacezContext> {
    let local = FsBackend::new(data_dir.to_path_buf());
    let session = FsBackend::new(data_dir.join(SESSION_DIR));
    let api = PlacezApi::new(local, session);
    api.initialize()?;

    debug!(data_dir = %data_dir.display(), "placez context ready");
    Ok(PlacezContext {
        api,
        config,
        data_dir: data_dir.to_path_buf(),
    })
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<PlacezContext> {
    let config = match project_dirs() {
        Ok(dirs) => PlacezConfig::load_or_default(dirs.config_dir()),
        Err(_) => PlacezConfig::default(),
    };
    let data_dir = resolve_data_dir(&config, data_override)?;
    open_at(&data_dir, config)
}
