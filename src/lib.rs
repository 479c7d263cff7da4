//! Vagon Streams SDK
//!
//! A Rust client for the Vagon Streams management API.
//!
//! This SDK provides:
//! - HMAC-SHA256 request signing with a fresh nonce and timestamp per call
//! - Typed methods for application, stream, machine, and user management
//! - Closed enums for every configuration option the API accepts
//! - Error types that separate HTTP error responses from transport failures
//!
//! # Pagination
//!
//! Paginated calls take `Option<u32>` for `page` and `per_page` and always
//! send both. Unset values fall back to page 1 with 100 items for
//! applications and streams, and 20 items for machine and visitor session
//! statistics. The statistics endpoints therefore send `page=1&per_page=20`
//! even when no arguments are given.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use vagon_streams_sdk::{Configuration, Region, VagonClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Configuration::new("api-key", "api-secret")
//!     .with_request_timeout(Duration::from_secs(15));
//! let client = VagonClient::new(config)?;
//!
//! // List applications (page 1, 100 per page)
//! let apps = client.application_list(None, None).await?;
//! for app in &apps.applications {
//!     println!("{} ({})", app.attributes.name, app.id);
//! }
//!
//! // Hand a machine in Frankfurt to a visitor
//! let assigned = client
//!     .machine_assign("stream-123", Region::Frankfurt, None)
//!     .await?;
//! println!("Connect at {}", assigned.connection_link);
//! # Ok(())
//! # }
//! ```

pub mod streams_api;

// Re-export commonly used types and functions
pub use streams_api::{
    client::VagonClient,
    config::{Configuration, API_BASE_URL},
    options::{
        CapacityType, DockPosition, DurationAutoTurnOff, DurationIdle, DurationMaximumSession,
        GameEngine, KeyMappingSelection, Microphone, Region, Resolution, Sound,
    },
    requests::{HttpMethod, RequestDescriptor},
    resources::{
        Application, ApplicationAttributes, ApplicationConfigurationSet,
        ApplicationListResponse, Capacity, CoreApiResponse, Executable, ExecutableAttributes,
        Machine, MachineAssignResponse, MachineAttributes, MachineGetResponse, MachineStatsQuery,
        MachineStatsResponse, MachinesListResponse, StreamConfig, StreamConfigResponse,
        StreamConfigResponseAttributes, StreamCreatePayload, StreamCreateResponse,
        StreamListResponse, StreamMachineStatusChangeResponse, StreamStatusChangeResponse,
        UserCreateApiResponse,
    },
    signing::{HmacSigner, SignedHeaders, Signer},
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
    types::{ApiError, VagonError},
};
