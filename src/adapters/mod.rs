// Adapters layer: concrete display and http implementations of the domain ports.

pub mod display;
pub mod http;

pub use display::PageDisplay;
pub use http::HttpFetcher;
