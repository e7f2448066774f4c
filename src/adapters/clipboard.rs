use crate::core::Clipboard;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-process clipboard. Either copy mechanism can be switched off to
/// emulate hosts without clipboard support.
#[derive(Debug)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    api_available: bool,
    legacy_available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::with_support(true, true)
    }

    pub fn with_support(api_available: bool, legacy_available: bool) -> Self {
        Self {
            contents: Mutex::new(None),
            api_available,
            legacy_available,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|contents| contents.clone())
    }

    fn store(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| PortfolioError::clipboard(format!("clipboard lock poisoned: {}", e)))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if !self.api_available {
            return Err(PortfolioError::clipboard("clipboard API unavailable"));
        }
        self.store(text)
    }

    fn exec_copy(&self, selection: &str) -> Result<()> {
        if !self.legacy_available {
            return Err(PortfolioError::clipboard("copy command unsupported"));
        }
        self.store(selection)
    }
}
