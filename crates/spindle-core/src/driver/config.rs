use crate::{Error, Result};
use serde::Deserialize;

/// Identifies the database a session talks to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    pub project: String,
    pub instance: String,
    pub database: String,

    /// Backend-specific options, passed through to the driver untouched.
    #[serde(default)]
    pub options: Vec<ClientOption>,
}

/// A named option handed to the driver when connecting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientOption {
    pub name: String,
    pub value: String,
}

impl Config {
    pub fn new(
        project: impl Into<String>,
        instance: impl Into<String>,
        database: impl Into<String>,
    ) -> Config {
        Config {
            project: project.into(),
            instance: instance.into(),
            database: database.into(),
            options: vec![],
        }
    }

    /// Reads the configuration from `PROJECT_ID`, `INSTANCE_ID` and
    /// `DATABASE_ID`.
    pub fn from_env() -> Result<Config> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| Error::invalid_config(format!("environment variable `{name}` not set")))
        };

        let config = Config::new(var("PROJECT_ID")?, var("INSTANCE_ID")?, var("DATABASE_ID")?);
        config.validate()?;
        Ok(config)
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Config {
        self.options.push(ClientOption {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Returns the value of the last option named `name`.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|option| option.name == name)
            .map(|option| option.value.as_str())
    }

    /// Checks that every identifier is set and is a single path segment.
    pub fn validate(&self) -> Result<()> {
        for (what, value) in [
            ("project", &self.project),
            ("instance", &self.instance),
            ("database", &self.database),
        ] {
            if value.is_empty() {
                return Err(Error::invalid_config(format!("{what} id is empty")));
            }

            if value.contains('/') {
                return Err(Error::invalid_config(format!(
                    "{what} id `{value}` contains `/`"
                )));
            }
        }

        Ok(())
    }

    /// The fully-qualified database name,
    /// `projects/{project}/instances/{instance}/databases/{database}`.
    pub fn database_path(&self) -> String {
        format!(
            "projects/{}/instances/{}/databases/{}",
            self.project, self.instance, self.database
        )
    }
}
