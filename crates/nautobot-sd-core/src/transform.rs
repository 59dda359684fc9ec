//! Device to scrape target transformation

use nautobot_sd_api::{Device, TargetGroup};

/// How the job label of each target is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobLabel<'a> {
    /// Device role name
    Role,
    /// Fixed value, usually the query document name
    Fixed(&'a str),
}

/// Strip a trailing prefix length from an address
///
/// Everything from the first `/` that is followed by a digit is removed, so
/// `10.0.0.5/24` becomes `10.0.0.5`. Addresses without one are returned as is.
#[must_use]
pub fn normalize_address(address: &str) -> &str {
    let bytes = address.as_bytes();
    address
        .match_indices('/')
        .find(|(i, _)| bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        .map_or(address, |(i, _)| &address[..i])
}

/// Turn devices into target groups
///
/// A device yields one group when its primary address is non-empty once the
/// prefix length is stripped and it has a role with a non-empty name; anything
/// else is dropped. Input order is kept.
#[must_use]
pub fn transform(devices: &[Device], job: JobLabel<'_>) -> Vec<TargetGroup> {
    devices
        .iter()
        .filter_map(|device| {
            let address = device
                .primary_address()
                .map(normalize_address)
                .filter(|a| !a.is_empty())?;
            let role = device.role_name().filter(|r| !r.is_empty())?;
            let job = match job {
                JobLabel::Role => role,
                JobLabel::Fixed(name) => name,
            };
            Some(TargetGroup::new(address, job, device.location_name()))
        })
        .collect()
}
