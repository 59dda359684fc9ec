//! GraphQL wire types for the Nautobot API

use serde::{Deserialize, Deserializer, Serialize};

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    /// Raw query text, sent verbatim
    pub query: String,
}

impl GraphqlRequest {
    /// Wrap a raw query document
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Top-level GraphQL response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    /// Query result, absent when the query failed as a whole
    #[serde(default)]
    pub data: Option<DeviceData>,
    /// Errors reported by the GraphQL layer
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    /// Consume the response and return its devices (empty when none were returned)
    #[must_use]
    pub fn into_devices(self) -> Vec<Device> {
        self.data
            .and_then(|data| data.devices)
            .unwrap_or_default()
    }
}

/// `data` object of a device query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceData {
    /// Devices matched by the query
    #[serde(default)]
    pub devices: Option<Vec<Device>>,
}

/// Single error entry from the GraphQL `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    /// Human readable message
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Device record as returned by Nautobot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Device name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Device role
    #[serde(default)]
    pub role: Option<Role>,
    /// Device location
    #[serde(default)]
    pub location: Option<Location>,
    /// Primary IPv4 address, usually in CIDR notation
    #[serde(default)]
    pub primary_ip4: Option<IpAddress>,
}

impl Device {
    /// Role name, if a role is assigned
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|role| role.name.as_str())
    }

    /// Location name, empty when no location is set
    #[must_use]
    pub fn location_name(&self) -> &str {
        self.location
            .as_ref()
            .map_or("", |location| location.name.as_str())
    }

    /// Primary address as reported, including any prefix length
    #[must_use]
    pub fn primary_address(&self) -> Option<&str> {
        self.primary_ip4.as_ref().map(|ip| ip.address.as_str())
    }
}

/// Device role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Device location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// IP address object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAddress {
    /// Address with optional prefix length, e.g. `192.0.2.1/24`
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

// Nautobot emits explicit nulls for unset scalar fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
