use crate::streams_api::options::{
    CapacityType, DockPosition, DurationAutoTurnOff, DurationIdle, DurationMaximumSession,
    GameEngine, KeyMappingSelection, Microphone, Region, Resolution, Sound,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope fields present on every API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreApiResponse {
    #[serde(default)]
    pub client_code: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Machine capacity reserved in one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub region: Region,
    pub total_capacity: u32,
}

/// Full stream configuration
///
/// Sent as-is by `stream_config_set` and embedded in `stream_config_get`
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    pub resolution: Resolution,
    pub sound: Sound,
    pub microphone: Microphone,
    pub auto_turn_off_duration: DurationAutoTurnOff,
    pub maximum_session_duration: DurationMaximumSession,
    pub idle_duration: DurationIdle,
    pub launch_arguments: String,
    pub dark_mode: bool,
    pub collect_info: bool,
    pub password: String,
    pub password_protection: String,
    pub dock_position: DockPosition,
    pub keyboard_layout: String,
    pub user_session_data: bool,
    pub boost_enabled: bool,
    pub pixel_streaming_enabled: bool,
    pub port_access_enabled: bool,
    pub capacity_type: CapacityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacities: Option<Vec<Capacity>>,
    pub restart_application: bool,
    pub auto_start_application: bool,
    pub collect_application_logs: bool,
    pub game_engine: GameEngine,
    pub project_name: String,
    pub company_name: String,
    pub product_name: String,
    pub region_optimization: bool,
    pub show_play_page: bool,
}

/// Uploaded executable attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutableAttributes {
    pub executable_name: String,
    #[serde(default)]
    pub launch_arguments: Option<String>,
    #[serde(default)]
    pub restart_arguments: Option<String>,
    pub file: String,
    pub version: i64,
    pub active: bool,
    pub created_at: String,
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
}

/// Executable resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Executable {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: ExecutableAttributes,
}

/// Application attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationAttributes {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub friendly_status: String,
    pub os: String,
    #[serde(default)]
    pub active_executable: Option<Executable>,
}

/// Application resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: ApplicationAttributes,
    #[serde(default)]
    pub performance: Option<String>,
    #[serde(default)]
    pub enterprise: serde_json::Value,
    #[serde(default)]
    pub pro: serde_json::Value,
}

/// Response of `application_list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<Application>,
    pub count: u32,
    pub page: u32,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Settings accepted by `application_config_set`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfigurationSet {
    pub application_name: String,
    pub key_mapping_selection: KeyMappingSelection,
    pub changeable_key_mapping: bool,
    pub machine_type_id: u32,
}

/// Response of `stream_list`
///
/// Stream entries are passed through untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamListResponse {
    pub streams: Vec<serde_json::Value>,
    pub count: u32,
    pub page: u32,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Capacity settings for a new stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamCreatePayload {
    pub application_id: String,
    pub capacities: Vec<Capacity>,
    pub capacity_type: CapacityType,
}

/// Status-only attributes returned by pause/activate/delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamStatusAttributes {
    pub status: String,
}

/// Response of `stream_pause`, `stream_activate` and `stream_delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamStatusChangeResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: StreamStatusAttributes,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Attributes of a freshly created stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamCreateAttributes {
    pub status: String,
    pub application_id: String,
}

/// Response of `stream_create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamCreateResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: StreamCreateAttributes,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Stream configuration plus display texts and the owning application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfigResponseAttributes {
    #[serde(flatten)]
    pub config: StreamConfig,
    #[serde(default)]
    pub texts: HashMap<String, String>,
    pub application: Application,
}

/// Response of `stream_config_get`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfigResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub config: StreamConfig,
    pub attributes: StreamConfigResponseAttributes,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Machine attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineAttributes {
    pub start_at: String,
    pub status: String,
    pub end_at: String,
    pub friendly_status: String,
    pub connection_status: String,
    /// Region identifier as reported by the API, compare with [`Region::as_str`]
    pub region: String,
    pub uid: String,
    pub cost: f64,
    pub duration: f64,
    pub application_name: String,
    pub application_id: String,
    pub stream_id: String,
    pub stream_name: String,
    pub machine_type: String,
    #[serde(default)]
    pub public_ip_address: Option<String>,
}

/// Machine resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: MachineAttributes,
}

/// Response of `machine_list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachinesListResponse {
    pub machines: Vec<Machine>,
    pub count: u32,
    pub page: u32,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Response of `stream_machine_stats`
pub type MachineStatsResponse = MachinesListResponse;

/// Response of `machine_start`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamMachineStatusChangeResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: MachineAttributes,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Response of `machine_assign`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineAssignResponse {
    pub connection_link: String,
    pub machine: Machine,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Response of `stream_machine_get`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineGetResponse {
    pub machine: Machine,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// User attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAttributes {
    pub email: String,
}

/// Response of `user_create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreateApiResponse {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: UserAttributes,
    #[serde(flatten)]
    pub core: CoreApiResponse,
}

/// Optional filters for machine and visitor session statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineStatsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
}
