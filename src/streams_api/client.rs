use crate::streams_api::config::Configuration;
use crate::streams_api::options::Region;
use crate::streams_api::requests::{
    endpoint, HttpMethod, MachineAssignRequest, MachineStopRequest, PageQuery,
    RequestDescriptor, StatsQuery, StreamCreateRequest, StreamListQuery, UserCreateRequest,
    DEFAULT_LIST_PER_PAGE, DEFAULT_PAGE, DEFAULT_STATS_PER_PAGE,
};
use crate::streams_api::resources::{
    ApplicationConfigurationSet, ApplicationListResponse, CoreApiResponse, MachineAssignResponse,
    MachineGetResponse, MachineStatsQuery, MachineStatsResponse, MachinesListResponse,
    StreamConfig, StreamConfigResponse, StreamCreatePayload, StreamCreateResponse,
    StreamListResponse, StreamMachineStatusChangeResponse, StreamStatusChangeResponse,
    UserCreateApiResponse,
};
use crate::streams_api::signing::{HmacSigner, SignedHeaders, Signer};
use crate::streams_api::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::streams_api::types::{ApiError, VagonError};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// HTTP client for the Vagon Streams management API
///
/// Every call is signed with the configured key pair and sent as exactly one
/// HTTP request. The client holds no mutable state, so it can be cloned and
/// shared freely between tasks.
#[derive(Debug, Clone)]
pub struct VagonClient {
    config: Arc<Configuration>,
    transport: Arc<dyn Transport>,
    signer: Arc<dyn Signer>,
}

impl VagonClient {
    /// Create a new Vagon Streams API client
    ///
    /// Fails with [`VagonError::Config`] before any network activity when the
    /// API key or secret is empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vagon_streams_sdk::{Configuration, VagonClient};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = VagonClient::new(Configuration::new("api-key", "api-secret"))?;
    /// let apps = client.application_list(None, None).await?;
    /// println!("Found {} applications", apps.count);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Configuration) -> Result<Self, VagonError> {
        config.validate()?;
        tracing::debug!(
            "Creating VagonClient with base URL: {} (timeout: {:?})",
            config.base_url(),
            config.request_timeout()
        );

        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(ReqwestTransport::new()),
            signer: Arc::new(HmacSigner),
        })
    }

    /// Create a client from `VAGON_API_KEY` / `VAGON_API_SECRET`
    pub fn from_env() -> Result<Self, VagonError> {
        Self::new(Configuration::from_env()?)
    }

    /// Replace the HTTP transport
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Replace the nonce/timestamp/signature source
    pub fn with_signer(mut self, signer: impl Signer + 'static) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Get the configuration this client was built from
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Turn a descriptor into a signed request
    ///
    /// Computes a fresh nonce and timestamp on every call.
    pub fn build_request(&self, descriptor: &RequestDescriptor) -> Result<HttpRequest, ApiError> {
        let base = self.config.base_url().trim_end_matches('/');
        let mut url = url::Url::parse(&format!("{}{}", base, descriptor.path()))?;
        if !descriptor.query().is_empty() {
            url.query_pairs_mut().extend_pairs(descriptor.query());
        }

        let method = descriptor.method();
        let body = if method.is_read_only() {
            ""
        } else {
            descriptor.body_or_empty()
        };

        let signed = SignedHeaders::compute(
            self.signer.as_ref(),
            self.config.api_key(),
            self.config.api_secret(),
            method,
            url.path(),
            body,
        );

        let mut headers = vec![("Authorization".to_string(), signed.authorization)];
        if descriptor.body().is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body: (!method.is_read_only()).then(|| body.to_string()),
        })
    }

    /// Sign, send, and decode one call
    async fn request<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, VagonError> {
        let request = self.build_request(&descriptor)?;
        tracing::debug!("Sending {} {}", descriptor.method().as_str(), descriptor.path());

        let response = match self.config.request_timeout() {
            Some(limit) => tokio::time::timeout(limit, self.transport.send(request))
                .await
                .map_err(|_| ApiError::Timeout(limit))??,
            None => self.transport.send(request).await?,
        };

        tracing::debug!(
            "Received response with status: {} for {} {}",
            response.status,
            descriptor.method().as_str(),
            descriptor.path()
        );

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        serde_json::from_str(&response.body).map_err(|e| {
            ApiError::Parse(format!("Failed to parse response: {}", e)).into()
        })
    }

    /// List applications
    ///
    /// `page` defaults to 1 and `per_page` to 100.
    pub async fn application_list(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<ApplicationListResponse, VagonError> {
        let query = PageQuery {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_LIST_PER_PAGE),
        };
        let descriptor =
            RequestDescriptor::new(HttpMethod::Get, endpoint("/applications")).with_data(&query)?;
        self.request(descriptor).await
    }

    /// Update application settings
    ///
    /// The response body is returned untyped.
    pub async fn application_config_set(
        &self,
        application_id: &str,
        config: &ApplicationConfigurationSet,
    ) -> Result<serde_json::Value, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Put,
            endpoint(&format!("/applications/{}", application_id)),
        )
        .with_data(config)?;
        self.request(descriptor).await
    }

    /// List the streams of an application
    ///
    /// `page` defaults to 1 and `per_page` to 100.
    pub async fn stream_list(
        &self,
        application_id: &str,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<StreamListResponse, VagonError> {
        let query = StreamListQuery {
            application_id,
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_LIST_PER_PAGE),
        };
        let descriptor =
            RequestDescriptor::new(HttpMethod::Get, endpoint("/streams")).with_data(&query)?;
        self.request(descriptor).await
    }

    /// Create a stream for an application
    pub async fn stream_create(
        &self,
        application_id: &str,
        config: &StreamCreatePayload,
    ) -> Result<StreamCreateResponse, VagonError> {
        let body = StreamCreateRequest {
            application_id,
            config,
        };
        let descriptor =
            RequestDescriptor::new(HttpMethod::Post, endpoint("/streams")).with_data(&body)?;
        self.request(descriptor).await
    }

    /// Pause a stream
    pub async fn stream_pause(
        &self,
        stream_id: &str,
    ) -> Result<StreamStatusChangeResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Put,
            endpoint(&format!("/streams/{}/pause", stream_id)),
        );
        self.request(descriptor).await
    }

    /// Reactivate a paused stream
    pub async fn stream_activate(
        &self,
        stream_id: &str,
    ) -> Result<StreamStatusChangeResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Put,
            endpoint(&format!("/streams/{}/activate", stream_id)),
        );
        self.request(descriptor).await
    }

    /// Delete a stream
    pub async fn stream_delete(
        &self,
        stream_id: &str,
    ) -> Result<StreamStatusChangeResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Delete,
            endpoint(&format!("/streams/{}", stream_id)),
        );
        self.request(descriptor).await
    }

    /// Fetch the full configuration of a stream
    pub async fn stream_config_get(
        &self,
        stream_id: &str,
    ) -> Result<StreamConfigResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Get,
            endpoint(&format!("/streams/{}/config", stream_id)),
        );
        self.request(descriptor).await
    }

    /// Replace the configuration of a stream
    ///
    /// The response body is returned untyped.
    pub async fn stream_config_set(
        &self,
        stream_id: &str,
        config: &StreamConfig,
    ) -> Result<serde_json::Value, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Put,
            endpoint(&format!("/streams/{}/config", stream_id)),
        )
        .with_data(config)?;
        self.request(descriptor).await
    }

    /// List the machines currently attached to a stream
    pub async fn machine_list(&self, stream_id: &str) -> Result<MachinesListResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Get,
            endpoint(&format!("/streams/{}/machines", stream_id)),
        );
        self.request(descriptor).await
    }

    /// Start a new machine for a stream
    pub async fn machine_start(
        &self,
        stream_id: &str,
    ) -> Result<StreamMachineStatusChangeResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Post,
            endpoint(&format!("/streams/{}/start-machine", stream_id)),
        );
        self.request(descriptor).await
    }

    /// Stop one machine of a stream
    pub async fn machine_stop(
        &self,
        stream_id: &str,
        machine_id: &str,
    ) -> Result<CoreApiResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Post,
            endpoint(&format!("/streams/{}/stop-machine", stream_id)),
        )
        .with_data(&MachineStopRequest { machine_id })?;
        self.request(descriptor).await
    }

    /// Assign a machine in `region` to a visitor
    ///
    /// Returns the connection link the visitor should open.
    pub async fn machine_assign(
        &self,
        stream_id: &str,
        region: Region,
        user_id: Option<&str>,
    ) -> Result<MachineAssignResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Post,
            endpoint(&format!("/streams/{}/assign-machine", stream_id)),
        )
        .with_data(&MachineAssignRequest { region, user_id })?;
        self.request(descriptor).await
    }

    /// Fetch a single machine by id
    pub async fn stream_machine_get(
        &self,
        machine_id: &str,
    ) -> Result<MachineGetResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Get,
            endpoint(&format!("/machines/{}", machine_id)),
        );
        self.request(descriptor).await
    }

    /// Machine usage statistics
    ///
    /// `page` defaults to 1 and `per_page` to 20. Both are always sent in the
    /// query string, so a call with `None` still requests `page=1&per_page=20`.
    pub async fn stream_machine_stats(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
        query: Option<&MachineStatsQuery>,
    ) -> Result<MachineStatsResponse, VagonError> {
        let query = StatsQuery {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_STATS_PER_PAGE),
            filter: query,
        };
        let descriptor =
            RequestDescriptor::new(HttpMethod::Get, endpoint("/machines")).with_data(&query)?;
        self.request(descriptor).await
    }

    /// Register a visitor user by email
    pub async fn user_create(&self, email: &str) -> Result<UserCreateApiResponse, VagonError> {
        let descriptor = RequestDescriptor::new(HttpMethod::Post, endpoint("/users"))
            .with_data(&UserCreateRequest { email })?;
        self.request(descriptor).await
    }

    /// Remove a visitor user
    pub async fn user_remove(&self, user_id: &str) -> Result<CoreApiResponse, VagonError> {
        let descriptor = RequestDescriptor::new(
            HttpMethod::Delete,
            endpoint(&format!("/users/{}", user_id)),
        );
        self.request(descriptor).await
    }

    /// Visitor session statistics
    ///
    /// `page` defaults to 1 and `per_page` to 20. Both are always sent in the
    /// query string, like [`stream_machine_stats`](Self::stream_machine_stats).
    /// The response body is returned untyped.
    pub async fn visitor_session_stats(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
        query: Option<&MachineStatsQuery>,
    ) -> Result<serde_json::Value, VagonError> {
        let query = StatsQuery {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_STATS_PER_PAGE),
            filter: query,
        };
        let descriptor =
            RequestDescriptor::new(HttpMethod::Get, endpoint("/sessions")).with_data(&query)?;
        self.request(descriptor).await
    }
}
