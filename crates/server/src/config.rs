use serde::Deserialize;
use std::path::PathBuf;
use tax_forms::{Capabilities, TemplateDir};

/// Environment variable naming the configuration file (without extension)
pub const CONFIG_ENV: &str = "TAX_FORMS_CONFIG";

/// Configuration file used when `TAX_FORMS_CONFIG` is unset
pub const DEFAULT_CONFIG: &str = "config/default";

/// Prefix of environment overrides, e.g. `TAX_FORMS__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "TAX_FORMS";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub templates: TemplatesConfig,
    pub capabilities: CapabilitiesConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    pub dir: PathBuf,
    pub schedule_c: String,
    pub schedule_e: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
            schedule_c: "f1040sc.pdf".to_string(),
            schedule_e: "f1040se.pdf".to_string(),
        }
    }
}

/// Backends the operator allows; a backend missing from the build stays off
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CapabilitiesConfig {
    pub template_filling: bool,
    pub drawing: bool,
}

impl Default for CapabilitiesConfig {
    fn default() -> Self {
        Self {
            template_filling: true,
            drawing: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load from `TAX_FORMS_CONFIG` (or `config/default`) plus environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
        Self::load_from(&path)
    }

    /// Load from an optional file, with environment variables layered on top
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Template store described by the `templates` section
    pub fn template_store(&self) -> TemplateDir {
        TemplateDir::new(&self.templates.dir)
            .with_file_names(&self.templates.schedule_c, &self.templates.schedule_e)
    }

    /// Compiled-in backends, restricted by the `capabilities` section
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::probe().restrict(
            self.capabilities.template_filling,
            self.capabilities.drawing,
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
