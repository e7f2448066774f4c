// Adapters layer: concrete implementations of the domain ports.

pub mod clipboard;
pub mod http;

pub use clipboard::MemoryClipboard;
pub use http::ReqwestHttpClient;
