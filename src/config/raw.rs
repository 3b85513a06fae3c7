use serde::Deserialize;
use std::net::IpAddr;

const DEFAULT_CONFIG_FILE: &str = include_str!("schooldb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub ranking: Option<Ranking>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub database: String,
    pub connection_pool_size: u32,
    // Only meaningful for database servers
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ranking {
    pub distance_metric: String,
}

impl Default for Ranking {
    fn default() -> Self {
        Config::default().ranking.expect("Ranking configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.db.is_some());
        assert!(cfg.webserver.is_some());
        assert!(cfg.ranking.is_some());
    }

    #[test]
    fn default_db_config() {
        let db = Db::default();
        assert_eq!(db.database, "schooldb.sqlite");
        assert!(db.connection_pool_size > 0);
        assert!(db.host.is_none());
        assert!(db.user.is_none());
        assert!(db.password.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
[db]
database = "/var/lib/schooldb/db.sqlite"
connection-pool-size = 2
host = "localhost"
user = "root"
password = ""
"#,
        )
        .unwrap();
        let db = cfg.db.unwrap();
        assert_eq!(db.host.as_deref(), Some("localhost"));
        assert_eq!(db.password.as_deref(), Some(""));
        assert!(cfg.webserver.is_none());
        assert!(cfg.ranking.is_none());
    }
}
