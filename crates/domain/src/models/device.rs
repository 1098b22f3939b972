//! Device domain model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Connectivity status of a field device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// Registered but no accepted reading yet.
    #[default]
    Unknown,
    /// Has synced at least one reading.
    Online,
}

impl DeviceStatus {
    /// Returns the string representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Unknown => "unknown",
            DeviceStatus::Online => "online",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(DeviceStatus::Unknown),
            "online" | "active" => Ok(DeviceStatus::Online),
            _ => Err(format!(
                "Invalid device status: {}. Must be one of: unknown, online",
                s
            )),
        }
    }
}

/// Represents a registered densitometer in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: Uuid,
    pub serial_number: String,
    pub name: String,
    pub status: DeviceStatus,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// Whether the device reported activity within `window` before `now`.
    ///
    /// A `last_seen_at` later than `now` does not count.
    pub fn is_active_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.last_seen_at
            .is_some_and(|seen| seen >= now - window && seen <= now)
    }
}

/// A device known ahead of time, used to seed the in-memory registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceSeed {
    pub serial_number: String,
    #[serde(default)]
    pub name: String,
}

/// Device summary for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub id: Uuid,
    pub serial_number: String,
    pub name: String,
    pub status: DeviceStatus,
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl From<Device> for DeviceSummary {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            serial_number: device.serial_number,
            name: device.name,
            status: device.status,
            last_seen_at: device.last_seen_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(last_seen_at: Option<DateTime<Utc>>) -> Device {
        Device {
            id: Uuid::new_v4(),
            serial_number: "SER-001".to_string(),
            name: "Clinic densitometer".to_string(),
            status: DeviceStatus::Unknown,
            last_seen_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_device_status_round_trip_labels() {
        assert_eq!("online".parse::<DeviceStatus>().unwrap(), DeviceStatus::Online);
        assert_eq!("active".parse::<DeviceStatus>().unwrap(), DeviceStatus::Online);
        assert_eq!("unknown".parse::<DeviceStatus>().unwrap(), DeviceStatus::Unknown);
        assert!("offline".parse::<DeviceStatus>().is_err());
        assert_eq!(DeviceStatus::default(), DeviceStatus::Unknown);
    }

    #[test]
    fn test_is_active_within() {
        let now = Utc::now();
        let window = Duration::minutes(5);
        assert!(device(Some(now)).is_active_within(window, now));
        assert!(!device(Some(now - Duration::minutes(10))).is_active_within(window, now));
        assert!(!device(Some(now + Duration::days(365))).is_active_within(window, now));
        assert!(!device(None).is_active_within(window, now));
    }

    #[test]
    fn test_device_summary_serialization() {
        let summary: DeviceSummary = device(None).into();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["serialNumber"], "SER-001");
        assert_eq!(json["status"], "unknown");
        assert!(json["lastSeenAt"].is_null());
    }
}
