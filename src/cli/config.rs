use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::{collections::BTreeMap, fs::File, path::PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub hosts: BTreeMap<String, Host>,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    /// Base URL of the API, e.g. `https://videos.example.com`
    pub url: String,
    /// Static bearer token; a token saved by `vidup login` takes precedence
    #[serde(default, deserialize_with = "secret")]
    pub token: Option<SecretString>,
}

fn secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.map(|token| SecretString::new(token.into())))
}

impl Config {
    /// # Errors
    /// Will return an error if the file can not be opened or parsed
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let file = File::open(&config_path)
            .with_context(|| format!("unable to open: {}", config_path.display()))?;

        let config: Self =
            serde_yaml_ng::from_reader(file).context("unable to parse config file")?;

        Ok(config)
    }

    /// Get the host from the config.yml
    ///
    /// # Errors
    /// Will return an error if the host is not defined
    pub fn get_host(&self, name: &str) -> Result<&Host> {
        self.hosts
            .get(name)
            .with_context(|| format!("could not find host {name}"))
    }

    /// The named host, or the only configured one when no name is given.
    ///
    /// # Errors
    /// Will return an error if the host can not be determined
    pub fn select_host<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a Host)> {
        if let Some(name) = name {
            return Ok((name, self.get_host(name)?));
        }

        let mut hosts = self.hosts.iter();

        match (hosts.next(), hosts.next()) {
            (Some((name, host)), None) => Ok((name.as_str(), host)),
            (None, _) => Err(anyhow!("no hosts defined in the config file")),
            (Some(_), Some(_)) => Err(anyhow!(
                "more than one host defined, choose one with --host"
            )),
        }
    }
}
