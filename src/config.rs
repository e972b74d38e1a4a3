use crate::error::{config_error, PlanningResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default directory for uploaded planning documents
pub const DEFAULT_UPLOAD_DIR: &str = "data/uploads";
/// Default directory for exported documents
pub const DEFAULT_EXPORT_DIR: &str = "data/exports";
/// Default directory for templates and generated sample plannings
pub const DEFAULT_TEMPLATE_DIR: &str = "data/templates";

/// Main configuration structure for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Application environment name (development, production)
    pub app_env: String,
    /// Verbose diagnostics toggle
    pub debug: bool,
    /// Directory where uploaded planning documents are stored
    pub upload_dir: String,
    /// Directory where exported documents are written
    pub export_dir: String,
    /// Directory where templates and sample plannings are written
    pub template_dir: String,
}

/// Optional overrides loaded from `config/semainier.toml`
#[derive(Debug, Default, Deserialize)]
struct FileOverrides {
    upload_dir: Option<String>,
    export_dir: Option<String>,
    template_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> PlanningResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| String::from("development"));

        let debug = match env::var("DEBUG") {
            Ok(value) => parse_bool(&value)
                .ok_or_else(|| config_error(&format!("Invalid DEBUG value: {}", value)))?,
            Err(_) => true,
        };

        let mut upload_dir =
            env::var("UPLOAD_DIR").unwrap_or_else(|_| String::from(DEFAULT_UPLOAD_DIR));
        let mut export_dir =
            env::var("EXPORT_DIR").unwrap_or_else(|_| String::from(DEFAULT_EXPORT_DIR));
        let mut template_dir =
            env::var("TEMPLATE_DIR").unwrap_or_else(|_| String::from(DEFAULT_TEMPLATE_DIR));

        // Merge directory overrides from file if it exists
        if let Ok(content) = fs::read_to_string("config/semainier.toml") {
            let overrides: FileOverrides = toml::from_str(&content)?;
            if let Some(dir) = overrides.upload_dir {
                upload_dir = dir;
            }
            if let Some(dir) = overrides.export_dir {
                export_dir = dir;
            }
            if let Some(dir) = overrides.template_dir {
                template_dir = dir;
            }
        }

        Ok(Config {
            app_env,
            debug,
            upload_dir,
            export_dir,
            template_dir,
        })
    }

    /// Path to the upload directory
    pub fn upload_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }

    /// Path to the export directory
    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export_dir)
    }

    /// Path to the template directory
    pub fn template_path(&self) -> PathBuf {
        PathBuf::from(&self.template_dir)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "True" | "yes" => Some(true),
        "0" | "false" | "False" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_path_accessors() {
        let config = Config {
            app_env: "development".to_string(),
            debug: true,
            upload_dir: "data/uploads".to_string(),
            export_dir: "data/exports".to_string(),
            template_dir: "data/templates".to_string(),
        };

        assert_eq!(config.upload_path(), PathBuf::from("data/uploads"));
        assert_eq!(config.export_path(), PathBuf::from("data/exports"));
        assert_eq!(config.template_path(), PathBuf::from("data/templates"));
    }
}
