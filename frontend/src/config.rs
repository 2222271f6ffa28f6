use anyhow::Context;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Raw runtime configuration as shipped in `config.json` or a window global.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "PAGE_SIZE")]
    pub page_size: Option<usize>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    /// Keeps values already set and fills the gaps from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            page_size: self.page_size.or(fallback.page_size),
            time_zone: self.time_zone.or(fallback.time_zone),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.page_size.is_some() && self.time_zone.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub page_size: usize,
    pub time_zone: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            time_zone: Tz::UTC,
        }
    }
}

impl AppConfig {
    pub fn from_runtime(raw: RuntimeConfig) -> Self {
        let api_base_url = raw
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let page_size = raw
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let time_zone = match raw.time_zone.as_deref().map(str::trim) {
            None | Some("") => Tz::UTC,
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone `{}` in runtime config, using UTC", name);
                Tz::UTC
            }),
        };
        Self {
            api_base_url,
            page_size,
            time_zone,
        }
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_window_global(name: &str) -> Option<RuntimeConfig> {
    let win = web_sys::window()?;
    let any = js_sys::Reflect::get(&win, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw: String = js_sys::JSON::stringify(&any).ok()?.into();
    match serde_json::from_str::<RuntimeConfig>(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed window.{}: {}", name, err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> Option<String> {
    None
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__LEAVEFLOW_ENV (env.js) wins over window.__LEAVEFLOW_CONFIG
    let env = read_window_global("__LEAVEFLOW_ENV").unwrap_or_default();
    let config = read_window_global("__LEAVEFLOW_CONFIG").unwrap_or_default();
    env.or(config)
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let url = config_json_url().context("config.json location is unknown")?;
    let response = reqwest::get(&url)
        .await
        .context("failed to fetch config.json")?;
    if !response.status().is_success() {
        anyhow::bail!("config.json returned status {}", response.status());
    }
    response
        .json::<RuntimeConfig>()
        .await
        .context("config.json is not a valid runtime config")
}

pub async fn await_config() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let mut raw = snapshot_from_globals();
    if !raw.is_complete() {
        match fetch_runtime_config().await {
            Ok(fetched) => raw = raw.or(fetched),
            Err(err) => log::warn!("Runtime config fallback to defaults: {:#}", err),
        }
    }
    let resolved = AppConfig::from_runtime(raw);
    let _ = APP_CONFIG.set(resolved.clone());
    APP_CONFIG.get().cloned().unwrap_or(resolved)
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

fn cached_or_default() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub fn page_size() -> usize {
    cached_or_default().page_size
}

pub fn current_time_zone() -> Tz {
    cached_or_default().time_zone
}

pub async fn init() {
    let config = await_config().await;
    log::info!(
        "Runtime config resolved: api_base_url={}, page_size={}, time_zone={}",
        config.api_base_url,
        config.page_size,
        config.time_zone.name()
    );
}
