use super::{Connect, Db, Shared};
use crate::{driver::Driver, Config, Result};

use std::sync::Arc;

/// Configures and opens a [`Db`].
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn project(&mut self, project: impl Into<String>) -> &mut Self {
        self.config.project = project.into();
        self
    }

    pub fn instance(&mut self, instance: impl Into<String>) -> &mut Self {
        self.config.instance = instance.into();
        self
    }

    pub fn database(&mut self, database: impl Into<String>) -> &mut Self {
        self.config.database = database.into();
        self
    }

    /// Adds a backend-specific option, passed to the driver on connect.
    pub fn option(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let config = std::mem::take(&mut self.config);
        self.config = config.with_option(name, value);
        self
    }

    /// Replaces the whole configuration, e.g. one read with
    /// [`Config::from_env`].
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Opens a session using the driver selected by `url`.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    /// Opens a session on `driver`.
    ///
    /// The configuration is checked before the driver is touched; a connect
    /// failure from the driver is returned as is.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.config.validate()?;

        let connection = driver.connect(&self.config).await?;

        log::debug!("session opened; database={}", self.config.database_path());

        Ok(Db {
            shared: Arc::new(Shared {
                config: self.config.clone(),
                connection,
            }),
        })
    }
}
