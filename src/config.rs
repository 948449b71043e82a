use std::path::PathBuf;

use clap::ValueEnum;

/// Which backend holds the workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// One pretty-printed JSON file, rewritten on every save.
    Json,
    /// A SQLite database.
    Sqlite,
    /// Process memory only.
    Memory,
}

impl StoreKind {
    fn default_file(&self) -> &'static str {
        match self {
            StoreKind::Json | StoreKind::Memory => "workflows.json",
            StoreKind::Sqlite => "workflows.db",
        }
    }
}

/// Settings for `serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    /// Data file; defaults to `workflows.json` / `workflows.db` in the
    /// working directory.
    pub data_file: Option<PathBuf>,
    /// Pre-built editor frontend to serve for unmatched paths.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            store: StoreKind::Json,
            data_file: None,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The data file with a leading `~` expanded to `$HOME`.
    pub fn data_path(&self) -> PathBuf {
        let path = self
            .data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.store.default_file()));

        match path.strip_prefix("~") {
            Ok(rest) => {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(rest)
            }
            Err(_) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_file_follows_store_kind() {
        let mut cfg = ServerConfig::default();
        assert_eq!(cfg.data_path(), PathBuf::from("workflows.json"));
        cfg.store = StoreKind::Sqlite;
        assert_eq!(cfg.data_path(), PathBuf::from("workflows.db"));
        assert_eq!(cfg.addr(), "127.0.0.1:4000");
    }

    #[test]
    fn explicit_data_file_wins() {
        let cfg = ServerConfig {
            data_file: Some(PathBuf::from("/var/lib/tradeflow/wf.json")),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.data_path(), PathBuf::from("/var/lib/tradeflow/wf.json"));
    }
}
