use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_endpoint_path, validate_non_empty_string, validate_positive_number, validate_range,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub skills_path: String,
    pub projects_path: String,
    pub contact_path: String,
    /// Absent means requests never time out.
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            skills_path: "/api/skills".to_string(),
            projects_path: "/api/projects".to_string(),
            contact_path: "/api/contact".to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub scrolled_threshold_px: f64,
    pub section_offset_px: f64,
    pub scroll_offset_px: f64,
    pub counter_duration_ms: u64,
    pub bar_restore_delay_ms: u64,
    pub copy_revert_ms: u64,
    pub visibility_threshold: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
            section_offset_px: 100.0,
            scroll_offset_px: 80.0,
            counter_duration_ms: 2000,
            bar_restore_delay_ms: 100,
            copy_revert_ms: 2000,
            visibility_threshold: 0.5,
        }
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), path)
    }
}

impl ConfigProvider for ClientConfig {
    fn skills_url(&self) -> String {
        self.endpoint(&self.api.skills_path)
    }

    fn projects_url(&self) -> String {
        self.endpoint(&self.api.projects_path)
    }

    fn contact_url(&self) -> String {
        self.endpoint(&self.api.contact_path)
    }

    fn scrolled_threshold_px(&self) -> f64 {
        self.behavior.scrolled_threshold_px
    }

    fn section_offset_px(&self) -> f64 {
        self.behavior.section_offset_px
    }

    fn scroll_offset_px(&self) -> f64 {
        self.behavior.scroll_offset_px
    }

    fn counter_duration_ms(&self) -> u64 {
        self.behavior.counter_duration_ms
    }

    fn bar_restore_delay_ms(&self) -> u64 {
        self.behavior.bar_restore_delay_ms
    }

    fn copy_revert_ms(&self) -> u64 {
        self.behavior.copy_revert_ms
    }

    fn visibility_threshold(&self) -> f64 {
        self.behavior.visibility_threshold
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api.base_url", &self.api.base_url)?;
        validate_url("api.base_url", &self.api.base_url)?;
        validate_endpoint_path("api.skills_path", &self.api.skills_path)?;
        validate_endpoint_path("api.projects_path", &self.api.projects_path)?;
        validate_endpoint_path("api.contact_path", &self.api.contact_path)?;

        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        validate_positive_number(
            "behavior.counter_duration_ms",
            self.behavior.counter_duration_ms,
            1,
        )?;
        validate_range(
            "behavior.visibility_threshold",
            self.behavior.visibility_threshold,
            f64::MIN_POSITIVE,
            1.0,
        )?;

        Ok(())
    }
}
