use anyhow::{anyhow, Context as _, Result};
use mhs_core::entities::{Activity, StudentEmail};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "mergington.toml";

const ENV_NAME_ADDRESS: &str = "MERGINGTON_ADDRESS";
const ENV_NAME_PORT: &str = "MERGINGTON_PORT";
const ENV_NAME_SEED_FILE: &str = "MERGINGTON_SEED_FILE";

pub struct Config {
    pub webserver: WebServer,
    pub seed: Seed,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let raw_config = match file_path {
            Some(file_path) => {
                let file_path = file_path.as_ref();
                log::info!("Load configuration from {}", file_path.display());
                let cfg_string = fs::read_to_string(file_path)
                    .with_context(|| format!("Unable to read {}", file_path.display()))?;
                toml::from_str(&cfg_string)?
            }
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE_NAME) {
                Ok(cfg_string) => {
                    log::info!("Load configuration from {DEFAULT_CONFIG_FILE_NAME}");
                    toml::from_str(&cfg_string)?
                }
                Err(err) => match err.kind() {
                    ErrorKind::NotFound => {
                        log::info!(
                            "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                        );
                        Ok(raw::Config::default())
                    }
                    _ => Err(err),
                }?,
            },
        };
        let raw_config = apply_env_overrides(raw_config, |name| env::var(name).ok())?;
        Self::try_from(raw_config)
    }
}

fn apply_env_overrides<F>(mut cfg: raw::Config, var: F) -> Result<raw::Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut webserver = cfg.webserver.unwrap_or_default();
    if let Some(address) = var(ENV_NAME_ADDRESS) {
        webserver.address = address;
    }
    if let Some(port) = var(ENV_NAME_PORT) {
        webserver.port = port
            .parse()
            .with_context(|| format!("Invalid {ENV_NAME_PORT} '{port}'"))?;
    }
    cfg.webserver = Some(webserver);
    if let Some(file) = var(ENV_NAME_SEED_FILE) {
        cfg.seed.get_or_insert_with(Default::default).file = Some(file.into());
    }
    Ok(cfg)
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct Seed {
    /// `None` selects the built-in activities.
    pub file: Option<PathBuf>,
}

impl Seed {
    pub fn load_activities(&self) -> Result<Vec<Activity>> {
        let seed_file = match &self.file {
            Some(file) => {
                log::info!("Load activities from {}", file.display());
                let seed_string = fs::read_to_string(file)
                    .with_context(|| format!("Unable to read {}", file.display()))?;
                toml::from_str(&seed_string)
                    .with_context(|| format!("Invalid activities in {}", file.display()))?
            }
            None => {
                log::info!("No activities file specified => load default activities.");
                raw::SeedFile::default()
            }
        };
        Ok(seed_file.activities.into_iter().map(Into::into).collect())
    }
}

impl From<raw::Activity> for Activity {
    fn from(from: raw::Activity) -> Self {
        let raw::Activity {
            name,
            description,
            schedule,
            max_participants,
            participants,
        } = from;
        Self {
            name: name.into(),
            description,
            schedule,
            max_participants,
            participants: participants.into_iter().map(StudentEmail::from).collect(),
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { webserver, seed } = from;

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();

        let address = address
            .parse()
            .map_err(|err| anyhow!("Invalid webserver address '{address}': {err}"))?;

        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Seed { file } = seed.unwrap_or_default();
        let seed = Seed { file };

        Ok(Self { webserver, seed })
    }
}
