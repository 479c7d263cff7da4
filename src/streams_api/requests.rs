//! Request descriptors and the typed parameter structs each endpoint sends.
//!
//! Every endpoint turns its arguments into one of the structs below and hands
//! it to [`RequestDescriptor::with_data`], which is the only place request
//! data is serialized. GET data becomes query parameters, anything else
//! becomes a JSON body.

use crate::streams_api::options::Region;
use crate::streams_api::resources::{MachineStatsQuery, StreamCreatePayload};
use crate::streams_api::types::ApiError;
use serde::Serialize;
use serde_json::Value;

/// Root of every management endpoint path
pub const API_PATH_PREFIX: &str = "/app-stream-management/v2";

/// Default page for every paginated endpoint
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size for application and stream listings
pub const DEFAULT_LIST_PER_PAGE: u32 = 100;
/// Default page size for machine and visitor session statistics
pub const DEFAULT_STATS_PER_PAGE: u32 = 20;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Uppercase verb, as it appears in the signing payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// GET carries its data in the query string and signs an empty body
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One logical API call: verb, path and already-serialized data
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestDescriptor {
    /// Describe a call with no data
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Attach request data
    ///
    /// For GET the top-level fields of `data` become query parameters; string,
    /// number and boolean values are written as-is, nulls are skipped, and
    /// nested arrays or objects are rejected. For every other verb `data` is
    /// serialized to a JSON body string.
    pub fn with_data<D: Serialize + ?Sized>(mut self, data: &D) -> Result<Self, ApiError> {
        if self.method.is_read_only() {
            self.query = query_pairs(data)?;
        } else {
            let body = serde_json::to_string(data).map_err(|e| {
                ApiError::Request(format!("Failed to serialize request body: {}", e))
            })?;
            self.body = Some(body);
        }
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path relative to the base URL, without query string
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if data was attached to a non-GET call
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Body as it enters the signing payload: empty when there is none
    pub fn body_or_empty(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

fn query_pairs<D: Serialize + ?Sized>(data: &D) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(data)
        .map_err(|e| ApiError::Request(format!("Failed to serialize query parameters: {}", e)))?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::Request(format!(
                "Query parameters must be a JSON object, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value_str = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ApiError::Request(format!(
                    "Query parameter '{}' must be a string, number or boolean",
                    key
                )))
            }
        };
        pairs.push((key, value_str));
    }
    Ok(pairs)
}

/// Build an absolute endpoint path under [`API_PATH_PREFIX`]
pub(crate) fn endpoint(suffix: &str) -> String {
    format!("{}{}", API_PATH_PREFIX, suffix)
}

/// `page` / `per_page` query
#[derive(Debug, Serialize)]
pub(crate) struct PageQuery {
    pub page: u32,
    pub per_page: u32,
}

/// Query for `stream_list`
#[derive(Debug, Serialize)]
pub(crate) struct StreamListQuery<'a> {
    pub application_id: &'a str,
    pub page: u32,
    pub per_page: u32,
}

/// Body for `stream_create`
#[derive(Debug, Serialize)]
pub(crate) struct StreamCreateRequest<'a> {
    pub application_id: &'a str,
    pub config: &'a StreamCreatePayload,
}

/// Body for `machine_stop`
#[derive(Debug, Serialize)]
pub(crate) struct MachineStopRequest<'a> {
    pub machine_id: &'a str,
}

/// Body for `machine_assign`
#[derive(Debug, Serialize)]
pub(crate) struct MachineAssignRequest<'a> {
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
}

/// Body for `user_create`
#[derive(Debug, Serialize)]
pub(crate) struct UserCreateRequest<'a> {
    pub email: &'a str,
}

/// Query for machine and visitor session statistics
#[derive(Debug, Serialize)]
pub(crate) struct StatsQuery<'a> {
    pub page: u32,
    pub per_page: u32,
    #[serde(flatten)]
    pub filter: Option<&'a MachineStatsQuery>,
}
