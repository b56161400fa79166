// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Device and app metadata supplied by the host runtime.
//!
//! The tracker reads this once, during [`crate::Tracker::initialize`]. Hosts
//! implement [`DeviceInfoProvider`] against their platform APIs; hosts that
//! know everything up front can use [`StaticDeviceInfo`].

use async_trait::async_trait;
use mixlite_core::{DisplaySize, DistinctId, PlatformDetails};

use crate::error::Result;

/// App manifest metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppManifest {
	pub name: String,
	pub slug: String,
	pub version: String,
}

/// Everything the provider can answer synchronously.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
	/// Stable device identifier, if the host exposes one.
	pub device_id: Option<DistinctId>,
	pub device_name: String,
	pub manifest: AppManifest,
	pub display: DisplaySize,
	pub platform: PlatformDetails,
}

/// Source of device/runtime metadata.
#[async_trait]
pub trait DeviceInfoProvider: Send + Sync {
	/// Reads the synchronous metadata.
	fn snapshot(&self) -> Result<DeviceSnapshot>;

	/// Resolves the host's web view user agent.
	async fn user_agent(&self) -> Result<String>;
}

/// A provider backed by fixed values.
///
/// # Example
///
/// ```
/// use mixlite::{AppManifest, DeviceSnapshot, DisplaySize, PlatformDetails, StaticDeviceInfo};
///
/// let provider = StaticDeviceInfo::new(
///     DeviceSnapshot {
///         device_id: Some("device-1".into()),
///         device_name: "Pixel".to_string(),
///         manifest: AppManifest {
///             name: "App".to_string(),
///             slug: "app".to_string(),
///             version: "1.0.0".to_string(),
///         },
///         display: DisplaySize::new(412.0, 915.0),
///         platform: PlatformDetails::Other,
///     },
///     "Mozilla/5.0 (Linux; Android 14)",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StaticDeviceInfo {
	snapshot: DeviceSnapshot,
	user_agent: String,
}

impl StaticDeviceInfo {
	pub fn new(snapshot: DeviceSnapshot, user_agent: impl Into<String>) -> Self {
		Self {
			snapshot,
			user_agent: user_agent.into(),
		}
	}
}

#[async_trait]
impl DeviceInfoProvider for StaticDeviceInfo {
	fn snapshot(&self) -> Result<DeviceSnapshot> {
		Ok(self.snapshot.clone())
	}

	async fn user_agent(&self) -> Result<String> {
		Ok(self.user_agent.clone())
	}
}
