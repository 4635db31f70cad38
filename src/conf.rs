use config::Config;
use serde::{Deserialize, Serialize};
///  fn settings() -> & 'static RwLock<Config>
///  fn rebit() -> &' static RwLock<Rebit>
///
///  struct Rebit
use std::sync::{OnceLock, RwLock};

/// get settings
/// use rebit get the typed Rebit instance
///
/// # Returns
/// * `&'static RwLock<Config>` - config instance
pub fn settings() -> &'static RwLock<Config> {
    static CONFIG: OnceLock<RwLock<Config>> = OnceLock::new();
    CONFIG.get_or_init(|| RwLock::new(init_config()))
}

/// get rebit instance
///
/// missing keys fall back to `Rebit::default()`, an unreadable config is reported and ignored
/// # Returns
/// * `&'static RwLock<Rebit>` - rebit instance
pub fn rebit() -> &'static RwLock<Rebit> {
    static REBIT: OnceLock<RwLock<Rebit>> = OnceLock::new();
    REBIT.get_or_init(|| {
        let loaded = match settings().read() {
            Ok(guard) => guard.clone().try_deserialize::<Rebit>(),
            Err(e) => {
                tracing::warn!("settings lock poisoned: {}", e);
                Ok(Rebit::default())
            }
        };
        RwLock::new(loaded.unwrap_or_else(|e| {
            tracing::warn!("rebit loading error, using defaults: {}", e);
            Rebit::default()
        }))
    })
}

/// init config
/// # Returns
/// * `Config` - config instance
fn init_config() -> Config {
    //development production testing
    let run_mode = std::env::var("TYPER_RUN_MODE").unwrap_or("development".to_string());
    let config_path = std::env::var("TYPER_CONFIG_PATH").unwrap_or("config".to_string());

    tracing::info!("TYPER_RUN_MODE={}, config file path: {}", run_mode, config_path);

    let conf = config::File::with_name(&format!("{config_path}/config.yml")).required(false);
    let mode = config::File::with_name(&format!("{config_path}/{run_mode}.yml")).required(false);
    let local = config::File::with_name(&format!("{config_path}/local.yml")).required(false);

    let builder = Config::builder()
        .add_source(conf)
        .add_source(mode)
        .add_source(local)
        .add_source(config::Environment::with_prefix("TYPER").separator("__"));

    builder.build().unwrap_or_else(|e| {
        tracing::warn!("config build error, using empty config: {}", e);
        Config::default()
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Rebit {
    pub name: String,
    pub log: Log,
}

impl Default for Rebit {
    fn default() -> Self {
        Rebit { name: "typer".to_string(), log: Log::default() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Log {
    /// EnvFilter directives, e.g. `info` or `typer=trace`
    pub level: String,
    pub console: bool,
    /// directory of the daily rolling log file, empty disables it
    pub dirs: String,
}

impl Default for Log {
    fn default() -> Self {
        Log { level: "info".to_string(), console: true, dirs: String::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebit_defaults() {
        let rebit = rebit().read().unwrap();
        assert!(!rebit.name.is_empty());
        assert!(!rebit.log.level.is_empty());
    }

    #[test]
    fn test_log_partial_deserialize() {
        let c = Config::builder()
            .set_override("log.level", "typer=trace")
            .unwrap()
            .build()
            .unwrap();
        let rebit: Rebit = c.try_deserialize().unwrap();
        assert_eq!(rebit.name, "typer");
        assert_eq!(rebit.log, Log { level: "typer=trace".to_string(), console: true, dirs: String::new() });
    }
}
