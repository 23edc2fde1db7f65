use eyre::Result;
use eyre::WrapErr;
use lazy_static::lazy_static;
use log::warn;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

// Default URL to use for validators
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";

// Default number (count) of top staked nodes to consider
pub const DEFAULT_COUNT: i64 = 100;

const CONFIG_DIR_NAME: &str = ".highly-staked";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Solana CLI executable, looked up in PATH when not absolute
    pub solana_exe: PathBuf,
    pub url: String,
    pub count: i64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            solana_exe: PathBuf::from("solana"),
            url: TESTNET_URL.to_string(),
            count: DEFAULT_COUNT,
        }
    }
}

impl GlobalConfig {

    /// `<CONFIG_DIR>/<executable stem>.toml`, falling back to the package name.
    pub fn path() -> PathBuf {
        let stem = env::current_exe()
            .map_err(|e| warn!("Cannot resolve the executable path: {}", e))
            .ok()
            .and_then(|exe| exe.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        CONFIG_DIR.join(format!("{}.toml", stem))
    }

    /// Reads a TOML config file; keys it leaves out keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file at {:?}", path))?;
        toml::from_str(&config_str).wrap_err("Failed to parse config TOML")
    }

    /// Config file settings when the file exists, then environment overrides.
    pub fn load() -> Self {
        let config_path = Self::path();

        let mut config = if config_path.exists() {
            Self::from_file(&config_path).unwrap_or_else(|err| {
                warn!("Error loading config: {:#}. Using defaults.", err);
                Self::default()
            })
        } else {
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Overrides fields from `SOLANA`, `VALIDATORS_URL` and `VALIDATORS_COUNT`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SOLANA") {
            self.solana_exe = PathBuf::from(val);
        }
        if let Some(val) = lookup("VALIDATORS_URL") {
            self.url = val;
        }
        if let Some(val) = lookup("VALIDATORS_COUNT") {
            match val.parse() {
                Ok(count) => self.count = count,
                Err(e) => warn!("Ignoring VALIDATORS_COUNT={:?}: {}", val, e),
            }
        }
    }
}

/// `$HIGHLY_STAKED_DIR` when set, else `.highly-staked` under the home
/// directory, else under the working directory.
fn config_dir(env_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> PathBuf {
    env_dir
        .or_else(|| home_dir.map(|home| home.join(CONFIG_DIR_NAME)))
        .unwrap_or_else(|| {
            warn!("No home directory, looking for config in ./{}", CONFIG_DIR_NAME);
            PathBuf::from(CONFIG_DIR_NAME)
        })
}

lazy_static! {
    pub static ref CONFIG: GlobalConfig = GlobalConfig::load();

    pub static ref CONFIG_DIR: PathBuf = config_dir(
        env::var_os("HIGHLY_STAKED_DIR").map(PathBuf::from),
        home::home_dir(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GlobalConfig::default();
        assert_eq!(config.solana_exe, PathBuf::from("solana"));
        assert_eq!(config.url, "https://api.testnet.solana.com");
        assert_eq!(config.count, 100);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("highly-staked-query.toml");
        fs::write(&path, "url = \"https://api.mainnet-beta.solana.com\"\n").unwrap();

        let config = GlobalConfig::from_file(&path).unwrap();
        assert_eq!(config.url, "https://api.mainnet-beta.solana.com");
        assert_eq!(config.count, DEFAULT_COUNT);
        assert_eq!(config.solana_exe, PathBuf::from("solana"));
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "count = \"many\"").unwrap();
        assert!(GlobalConfig::from_file(&path).is_err());
        assert!(GlobalConfig::from_file(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_config_dir() {
        let home = Some(PathBuf::from("/home/sol"));
        assert_eq!(
            config_dir(Some(PathBuf::from("/etc/highly-staked")), home.clone()),
            PathBuf::from("/etc/highly-staked")
        );
        assert_eq!(config_dir(None, home), PathBuf::from("/home/sol/.highly-staked"));
        assert_eq!(config_dir(None, None), PathBuf::from(".highly-staked"));
    }

    #[test]
    fn test_path_is_toml_in_config_dir() {
        let path = GlobalConfig::path();
        assert_eq!(path.parent(), Some(CONFIG_DIR.as_path()));
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("toml"));
    }

    #[test]
    fn test_apply_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SOLANA", "/opt/solana/bin/solana"),
            ("VALIDATORS_URL", "http://localhost:8899"),
            ("VALIDATORS_COUNT", "25"),
        ]
        .into_iter()
        .collect();

        let mut config = GlobalConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.solana_exe, PathBuf::from("/opt/solana/bin/solana"));
        assert_eq!(config.url, "http://localhost:8899");
        assert_eq!(config.count, 25);
    }

    #[test]
    fn test_apply_overrides_ignores_bad_count() {
        let mut config = GlobalConfig::default();
        config.apply_overrides(|key| (key == "VALIDATORS_COUNT").then(|| "lots".to_string()));
        assert_eq!(config, GlobalConfig::default());
    }
}
