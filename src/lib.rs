pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientConfig;

pub use adapters::{MemoryClipboard, ReqwestHttpClient};
pub use crate::core::app::{App, Event, Outcome, Target};
pub use crate::core::escape::escape_html;
pub use crate::core::page::UiContext;
pub use utils::error::{PortfolioError, Result};
