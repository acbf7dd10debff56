use shared_types::{AppConfig, DemoConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment override for the simulated login latency.
const LOGIN_DELAY_ENV: &str = "DEMO_LOGIN_DELAY_MS";

/// Read `config.toml` (and `.env`), then store the result in the global
/// `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file falls back to the demo defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!("{CONFIG_PATH} not found ({e}), using demo defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config.demo, std::env::var(LOGIN_DELAY_ENV).ok());
        tracing::info!(
            login_delay_ms = config.demo.login_delay_ms,
            login_role = %config.demo.login_role,
            "Loaded demo config"
        );
        config
    })
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse {CONFIG_PATH}: {e}, using demo defaults");
        AppConfig::default()
    })
}

fn apply_env_overrides(demo: &mut DemoConfig, delay: Option<String>) {
    let Some(raw) = delay else {
        return;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) => demo.login_delay_ms = ms,
        Err(_) => tracing::warn!("Ignoring non-numeric {LOGIN_DELAY_ENV}={raw}"),
    }
}
