// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracker configuration.
//!
//! [`TrackerConfigLayer`] holds optional values that can be merged from
//! several sources (a config file section, the process environment, code),
//! and [`TrackerConfigLayer::finalize`] resolves them into a
//! [`TrackerConfig`] with defaults applied.
//!
//! The process environment is only read by [`TrackerConfigLayer::from_env`],
//! which the host calls at its boundary. Nothing inside the tracker looks at
//! environment variables.

use std::time::Duration;

use mixlite_core::{ProjectToken, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const ENV_TOKEN: &str = "MIXLITE_TOKEN";
pub const ENV_BASE_URL: &str = "MIXLITE_BASE_URL";
pub const ENV_ENVIRONMENT: &str = "MIXLITE_ENV";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MIXLITE_REQUEST_TIMEOUT_SECS";

/// Deployment context of the host application.
///
/// `Test` suppresses not-sent diagnostics entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	Test,
	Development,
	#[default]
	Production,
}

impl Environment {
	pub fn suppresses_diagnostics(&self) -> bool {
		matches!(self, Environment::Test)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Environment::Test => "test",
			Environment::Development => "development",
			Environment::Production => "production",
		}
	}
}

impl std::fmt::Display for Environment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Environment {
	type Err = TrackerError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"test" => Ok(Environment::Test),
			"dev" | "development" => Ok(Environment::Development),
			"prod" | "production" => Ok(Environment::Production),
			other => Err(TrackerError::InvalidConfig(format!(
				"unknown environment: {other}"
			))),
		}
	}
}

/// How dispatched requests are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
	/// Spawn the send on the current tokio runtime and return immediately.
	/// Without a runtime the send is awaited inline. Sends still running
	/// when the runtime shuts down are dropped unless awaited through
	/// `Tracker::flush`.
	#[default]
	Detached,
	/// Await the send before the tracking call returns.
	Await,
}

/// Resolved tracker configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
	/// Project token. `None` puts the tracker in the not-configured state.
	pub token: Option<ProjectToken>,
	/// Collection origin, without a trailing slash.
	pub base_url: String,
	pub environment: Environment,
	/// Timeout for the HTTP transport.
	pub request_timeout: Duration,
	pub dispatch_mode: DispatchMode,
}

impl Default for TrackerConfig {
	fn default() -> Self {
		TrackerConfigLayer::default().finalize()
	}
}

/// Configuration layer for the tracker (all fields optional for merging).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TrackerConfigLayer {
	pub token: Option<ProjectToken>,
	pub base_url: Option<String>,
	pub environment: Option<Environment>,
	pub request_timeout_secs: Option<u64>,
	pub dispatch_mode: Option<DispatchMode>,
}

impl TrackerConfigLayer {
	/// Reads a layer from the `MIXLITE_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads a layer through `lookup`, using the `MIXLITE_*` keys.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let environment = lookup(ENV_ENVIRONMENT)
			.map(|value| value.parse::<Environment>())
			.transpose()?;

		let request_timeout_secs = lookup(ENV_REQUEST_TIMEOUT_SECS)
			.map(|value| {
				value.trim().parse::<u64>().map_err(|e| {
					TrackerError::InvalidConfig(format!("{ENV_REQUEST_TIMEOUT_SECS}: {e}"))
				})
			})
			.transpose()?;

		Ok(Self {
			token: lookup(ENV_TOKEN).map(ProjectToken::new),
			base_url: lookup(ENV_BASE_URL),
			environment,
			request_timeout_secs,
			dispatch_mode: None,
		})
	}

	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: Self) {
		if other.token.is_some() {
			self.token = other.token;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.request_timeout_secs.is_some() {
			self.request_timeout_secs = other.request_timeout_secs;
		}
		if other.dispatch_mode.is_some() {
			self.dispatch_mode = other.dispatch_mode;
		}
	}

	/// Convert to resolved configuration with defaults applied.
	///
	/// An empty token counts as no token.
	pub fn finalize(self) -> TrackerConfig {
		TrackerConfig {
			token: self.token.filter(|token| !token.is_empty()),
			base_url: self
				.base_url
				.as_deref()
				.unwrap_or(DEFAULT_BASE_URL)
				.trim_end_matches('/')
				.to_string(),
			environment: self.environment.unwrap_or_default(),
			request_timeout: Duration::from_secs(
				self.request_timeout_secs
					.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
			),
			dispatch_mode: self.dispatch_mode.unwrap_or_default(),
		}
	}
}
