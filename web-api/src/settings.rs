use config::{Config, ConfigError, File};
use serde::Deserialize;
use strum::{AsRefStr, EnumString};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub api: ApiSettings,
    pub engine: engine::Settings,
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Production,
    Test,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub ip: String,
    pub port: u16,
    pub num_workers: Option<u32>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse::<Environment>().ok())
            .unwrap_or(Environment::Local);

        Self::from_environment(environment)
    }

    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let environment = environment.as_ref();

        Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(true))
            .add_source(config::Environment::with_prefix("FLOTILLA_API").separator("__"))
            .set_override("environment", environment)?
            .build()?
            .try_deserialize()
    }

    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }
}

impl ApiSettings {
    pub fn listener_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_files_deserialize_for_every_environment() {
        for environment in [
            Environment::Local,
            Environment::Development,
            Environment::Production,
            Environment::Test,
        ] {
            let settings = Settings::from_environment(environment).unwrap();

            assert_eq!(settings.environment, environment);
            assert_eq!(settings.engine.mission_days, 30);
            assert_eq!(settings.engine.trajectory_limit, 50);
        }
    }
}

