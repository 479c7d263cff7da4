/// Vagon Streams management API integration module
///
/// This module provides the signed HTTP client for the Vagon Streams
/// management API together with its request and response types.
///
/// ## Request Flow
///
/// 1. An endpoint method shapes its arguments into a typed request struct
/// 2. The struct is serialized once: query string for GET, JSON body otherwise
/// 3. A fresh nonce and millisecond timestamp are generated
/// 4. The canonical payload is signed with HMAC-SHA256 using the API secret
/// 5. The request is sent, bounded by the optional request timeout
/// 6. Non-success statuses become `ApiError::Http`; success bodies are decoded
pub mod client;
pub mod config;
pub mod options;
pub mod requests;
pub mod resources;
pub mod signing;
pub mod transport;
pub mod types;

pub use client::VagonClient;
pub use config::Configuration;
pub use options::*;
pub use resources::*;
pub use signing::{HmacSigner, SignedHeaders, Signer};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{ApiError, VagonError};
