// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session metadata attached to every dispatched event.
//!
//! The enrichment set is captured once when the tracker initializes and is
//! then written into the `properties` object of each event payload:
//!
//! | Property | Source |
//! |----------|--------|
//! | `distinct_id` | current identity, when one is set |
//! | `token` | project token |
//! | `user_agent` | host web view user agent |
//! | `app_name`, `app_id`, `app_version` | app manifest |
//! | `screen_size` | display dimensions as `WxH` |
//! | `client_id` | device identifier |
//! | `device_name` | host device name |
//! | `platform` | iOS platform string, or `android` on other hosts |
//! | `model`, `os_version` | iOS hosts only |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identity::DistinctId;
use crate::token::ProjectToken;

/// Platform label used for every host that is not iOS-like.
pub const FALLBACK_PLATFORM: &str = "android";

/// Display dimensions of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
	pub width: f64,
	pub height: f64,
}

impl DisplaySize {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

impl std::fmt::Display for DisplaySize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}x{}",
			format_dimension(self.width),
			format_dimension(self.height)
		)
	}
}

// Whole dimensions print without a trailing ".0".
fn format_dimension(value: f64) -> String {
	if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
		format!("{}", value as i64)
	} else {
		format!("{value}")
	}
}

/// Host platform details.
///
/// Only iOS-like hosts report a model and OS version; every other host is
/// labelled [`FALLBACK_PLATFORM`] with neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformDetails {
	Ios {
		platform: String,
		model: String,
		os_version: String,
	},
	Other,
}

impl PlatformDetails {
	/// The value written to the `platform` property.
	pub fn label(&self) -> &str {
		match self {
			PlatformDetails::Ios { platform, .. } => platform,
			PlatformDetails::Other => FALLBACK_PLATFORM,
		}
	}

	pub fn model(&self) -> Option<&str> {
		match self {
			PlatformDetails::Ios { model, .. } => Some(model),
			PlatformDetails::Other => None,
		}
	}

	pub fn os_version(&self) -> Option<&str> {
		match self {
			PlatformDetails::Ios { os_version, .. } => Some(os_version),
			PlatformDetails::Other => None,
		}
	}
}

/// The device/app metadata captured at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
	pub user_agent: String,
	pub app_name: String,
	pub app_slug: String,
	pub app_version: String,
	pub screen_size: String,
	pub client_id: Option<DistinctId>,
	pub device_name: String,
	pub platform: PlatformDetails,
}

impl Enrichment {
	/// Writes the enrichment set into `properties`.
	///
	/// Enrichment keys overwrite caller-supplied keys of the same name.
	/// `distinct_id` is written only when `distinct_id` is `Some`.
	pub fn apply(
		&self,
		properties: &mut Map<String, Value>,
		token: &ProjectToken,
		distinct_id: Option<&DistinctId>,
	) {
		if let Some(id) = distinct_id {
			properties.insert("distinct_id".to_string(), id.to_value());
		}

		properties.insert("token".to_string(), Value::from(token.expose()));
		properties.insert("user_agent".to_string(), Value::from(self.user_agent.as_str()));
		properties.insert("app_name".to_string(), Value::from(self.app_name.as_str()));
		properties.insert("app_id".to_string(), Value::from(self.app_slug.as_str()));
		properties.insert("app_version".to_string(), Value::from(self.app_version.as_str()));
		properties.insert("screen_size".to_string(), Value::from(self.screen_size.as_str()));
		properties.insert(
			"client_id".to_string(),
			self.client_id
				.as_ref()
				.map(DistinctId::to_value)
				.unwrap_or(Value::Null),
		);
		properties.insert("device_name".to_string(), Value::from(self.device_name.as_str()));
		properties.insert("platform".to_string(), Value::from(self.platform.label()));
		if let Some(model) = self.platform.model() {
			properties.insert("model".to_string(), Value::from(model));
		}
		if let Some(os_version) = self.platform.os_version() {
			properties.insert("os_version".to_string(), Value::from(os_version));
		}
	}
}
