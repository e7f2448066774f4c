use crate::domain::model::HttpResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Network capability used by the renderers and the contact form.
///
/// Implementations report transport failures as errors; any HTTP status,
/// including 4xx/5xx, is a successful exchange.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Asynchronous clipboard API. Fails when unavailable or rejected.
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Legacy copy command acting on the currently selected text.
    fn exec_copy(&self, selection: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn skills_url(&self) -> String;
    fn projects_url(&self) -> String;
    fn contact_url(&self) -> String;
    fn scrolled_threshold_px(&self) -> f64;
    fn section_offset_px(&self) -> f64;
    fn scroll_offset_px(&self) -> f64;
    fn counter_duration_ms(&self) -> u64;
    fn bar_restore_delay_ms(&self) -> u64;
    fn copy_revert_ms(&self) -> u64;
    fn visibility_threshold(&self) -> f64;
}
