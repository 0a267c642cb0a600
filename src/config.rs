use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_DATA_PATH: &str = "data/dhikr.json";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
}

impl Config {
    /// Reads `APP_DATA_PATH` and `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_values(env::var("APP_DATA_PATH").ok(), env::var("PORT").ok())
    }

    pub fn from_values(data_path: Option<String>, port: Option<String>) -> Self {
        let data_path = data_path
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let port = port
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { data_path, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = Config::from_values(Some("/tmp/x.json".into()), Some("http".into()));
        assert_eq!(config.data_path, PathBuf::from("/tmp/x.json"));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.addr().port(), DEFAULT_PORT);
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_values(Some("state.json".into()), Some(" 9090 ".into()));
        assert_eq!(config.data_path, PathBuf::from("state.json"));
        assert_eq!(config.port, 9090);
    }
}
