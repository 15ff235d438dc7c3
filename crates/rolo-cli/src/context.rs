use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::config::Config;
use rolo_source::RemoteSource;
use rolo_store::LocalStore;
use rolo_types::Contact;

/// Shared command environment: data directory, lazily loaded config, and
/// constructors for the store and remote source.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    pub offline: bool,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, offline: bool) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            offline,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let config_path = self.data_dir.join("config.toml");
            Config::load_from(&config_path)
        })
    }

    pub fn open_store(&self) -> LocalStore {
        LocalStore::open(&self.data_dir)
    }

    pub fn remote_source(&self) -> Result<RemoteSource> {
        let api = &self.config()?.api;
        Ok(RemoteSource::new(
            &api.endpoint,
            api.batch_size,
            api.nationality.clone(),
        )?)
    }

    /// Fetch the remote batch, honoring offline mode.
    ///
    /// Offline returns an empty batch; a fetch failure degrades the same way
    /// after reporting the single user-facing message on stderr. Local state
    /// is never at risk either way.
    pub fn fetch_remote(&self) -> Result<Vec<Contact>> {
        if self.offline {
            return Ok(Vec::new());
        }
        match self.remote_source()?.fetch() {
            Ok(contacts) => Ok(contacts),
            Err(err) => {
                eprintln!("{}", crate::output::FETCH_ERROR_MESSAGE);
                eprintln!("  ({})", err);
                Ok(Vec::new())
            }
        }
    }
}
