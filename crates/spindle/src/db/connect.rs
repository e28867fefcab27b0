use crate::{Error, Result};

use spindle_core::driver::{Config, Connection, Driver};
use spindle_core::async_trait;

use url::Url;

/// A driver chosen from a connection URL.
///
/// Supported schemes depend on the enabled cargo features:
///
/// * `sqlite::memory:` and `sqlite:<path>` with the `sqlite` feature.
#[derive(Debug)]
pub struct Connect {
    url: Url,
}

impl Connect {
    pub fn new(url: &str) -> Result<Connect> {
        let url = Url::parse(url)
            .map_err(|err| Error::invalid_config(format!("invalid connection URL `{url}`: {err}")))?;
        Ok(Connect { url })
    }
}

#[async_trait]
impl Driver for Connect {
    async fn connect(&self, config: &Config) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "sqlite" => connect_sqlite(&self.url, config).await,
            scheme => Err(Error::invalid_config(format!(
                "unsupported database; scheme={scheme}; url={}",
                self.url
            ))),
        }
    }
}

#[cfg(feature = "sqlite")]
async fn connect_sqlite(url: &Url, config: &Config) -> Result<Box<dyn Connection>> {
    let driver = spindle_driver_sqlite::Sqlite::new(url.as_str())?;
    driver.connect(config).await
}

#[cfg(not(feature = "sqlite"))]
async fn connect_sqlite(_url: &Url, _config: &Config) -> Result<Box<dyn Connection>> {
    Err(Error::invalid_config("`sqlite` feature not enabled"))
}
