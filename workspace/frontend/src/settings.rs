use cropdash_common::{DashboardConfig, DEFAULT_CROP, DEFAULT_FORECAST_PERIODS};
use log::Level;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "cropdash_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 5000)
    pub api_port: u16,

    /// API path prefix, empty when the routes sit at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Crop whose forecast is shown before the user picks one
    pub default_crop: Option<String>,

    /// Number of future periods requested from the forecast endpoint
    pub forecast_periods: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            default_crop: Some(DEFAULT_CROP.to_string()),
            forecast_periods: DEFAULT_FORECAST_PERIODS,
            toast_duration_ms: 5000,
        }
    }
}

fn read(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            // Local development gets verbose logging
            if hostname == "localhost" || hostname == "127.0.0.1" {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(&storage);
        }

        settings
    }

    fn apply_overrides(&mut self, storage: &Storage) {
        if let Some(api_host) = read(storage, "api_host") {
            self.api_host = api_host;
        }

        if let Some(port) = read(storage, "api_port").and_then(|p| p.parse::<u16>().ok()) {
            self.api_port = port;
        }

        if let Some(api_path) = read(storage, "api_path") {
            self.api_path = api_path;
        }

        if let Some(use_https) = read(storage, "api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }

        if let Some(level) = read(storage, "log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }

        // An empty value disables the default selection
        if let Some(crop) = read(storage, "default_crop") {
            let crop = crop.trim();
            self.default_crop = (!crop.is_empty()).then(|| crop.to_string());
        }

        if let Some(periods) = read(storage, "forecast_periods").and_then(|p| p.parse::<u32>().ok()) {
            if periods > 0 {
                self.forecast_periods = periods;
            }
        }

        if let Some(duration) = read(storage, "toast_duration_ms").and_then(|d| d.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            default_crop: self.default_crop.clone(),
            forecast_periods: self.forecast_periods,
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
