//! nautobot-sd-api: Shared wire types
//!
//! Contains the GraphQL request/response types spoken with Nautobot and the
//! target group format served to Prometheus HTTP service discovery.

pub mod graphql;
pub mod targets;

pub use graphql::{
    Device, DeviceData, GraphqlError, GraphqlRequest, GraphqlResponse, IpAddress, Location, Role,
};
pub use targets::{DATACENTER_LABEL, JOB_LABEL, TargetGroup};
