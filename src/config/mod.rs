use anyhow::{anyhow, Result};
use sdb_entities::geo::DistanceMetric;
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "schooldb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_PORT: &str = "PORT";

const IN_MEMORY_DB: &str = ":memory:";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub ranking: Ranking,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(env::var(ENV_NAME_DB_URL).ok(), env::var(ENV_NAME_PORT).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self, db_url: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(db_url) = db_url {
            self.db.set_url(db_url);
        }
        if let Some(port) = port {
            self.webserver.port = port
                .trim()
                .parse()
                .map_err(|err| anyhow!("Invalid {ENV_NAME_PORT} '{port}': {err}"))?;
        }
        Ok(())
    }
}

pub struct Db {
    /// SQLite database file or URL
    pub url: String,
    pub pool_size: u32,
}

impl Db {
    /// Each connection to an in-memory database opens
    /// a new database, i.e. a single connection is used.
    pub fn set_url(&mut self, url: String) {
        if url == IN_MEMORY_DB && self.pool_size > 1 {
            log::warn!("Limiting connection pool size of in-memory database to 1");
            self.pool_size = 1;
        }
        self.url = url;
    }
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct Ranking {
    pub distance_metric: DistanceMetric,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            ranking,
        } = from;

        let raw::Db {
            database,
            connection_pool_size,
            host,
            user,
            password,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be positive"));
        }
        for (key, value) in [("host", host), ("user", user), ("password", password)] {
            if value.is_some() {
                log::warn!("Ignoring database option '{key}': not supported by SQLite");
            }
        }
        let mut db = Db {
            url: String::new(),
            pool_size: connection_pool_size,
        };
        db.set_url(database);

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Ranking { distance_metric } = ranking.unwrap_or_default();
        let distance_metric = distance_metric
            .parse()
            .map_err(|_| anyhow!("Unknown distance metric '{distance_metric}'"))?;
        let ranking = Ranking { distance_metric };

        Ok(Self {
            db,
            webserver,
            ranking,
        })
    }
}
