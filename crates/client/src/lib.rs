//! `stockroom-client`
//!
//! **Responsibility:** configuration and typed access to the products REST API.
//!
//! The backend is the authority for every record; this crate only moves
//! products over HTTP and classifies failures. It builds for native targets and
//! for `wasm32` (where `reqwest` rides on the browser's `fetch`).

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ProductApi;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::HttpProductApi;
