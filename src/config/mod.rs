use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the CSV cutting table.
    pub data_file: String,
    /// Path of the known-clients YAML list.
    pub clients_file: String,
    /// Operator identity stamped on every entry.
    pub operator_name: String,
    pub matricule: String,
    /// SHA-256 hex digests of the two API keys. Empty = role disabled.
    #[serde(default)]
    pub operator_key_sha256: String,
    #[serde(default)]
    pub supervisor_key_sha256: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file().to_string_lossy().to_string(),
            clients_file: Self::clients_file().to_string_lossy().to_string(),
            operator_name: String::new(),
            matricule: String::new(),
            operator_key_sha256: String::new(),
            supervisor_key_sha256: String::new(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("cutlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".cutlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("cutlog.conf")
    }

    /// Return the full path of the CSV cutting table
    pub fn data_file() -> PathBuf {
        Self::config_dir().join("cutting_table.csv")
    }

    /// Return the full path of the known-clients list
    pub fn clients_file() -> PathBuf {
        Self::config_dir().join("clients.yaml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, data file and clients file.
    /// `custom_data` overrides the data file location (used by tests).
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode to keep the user's file intact)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
