use crate::core::HttpClient;
use crate::utils::error::{PortfolioError, Result};
use serde::de::DeserializeOwned;

/// GETs `url` and decodes a JSON body. Non-2xx statuses are errors.
pub async fn fetch_json<T: DeserializeOwned>(client: &dyn HttpClient, url: &str) -> Result<T> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).await?;
    tracing::debug!("API response status: {}", response.status);

    if !response.is_success() {
        return Err(PortfolioError::Status {
            status: response.status,
            url: url.to_string(),
        });
    }

    Ok(serde_json::from_str(&response.body)?)
}
