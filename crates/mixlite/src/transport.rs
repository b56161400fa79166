// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound request transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{Result, TrackerError};

/// Issues a single GET for a fully formed dispatch URL.
///
/// The response body is never read. Implementations report failures so the
/// tracker can log them; the tracker does not retry.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, url: &str) -> Result<()>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	/// Creates a transport using the shared client with `timeout`.
	pub fn new(timeout: Duration) -> Result<Self> {
		let client = mixlite_common_http::new_client_with_timeout(timeout)
			.map_err(TrackerError::RequestFailed)?;
		Ok(Self { client })
	}

	/// Creates a transport that sends `user_agent` instead of the default,
	/// e.g. the host's web view User-Agent.
	pub fn with_user_agent(user_agent: impl Into<String>, timeout: Duration) -> Result<Self> {
		let client = mixlite_common_http::builder_with_user_agent(user_agent)
			.timeout(timeout)
			.build()?;
		Ok(Self { client })
	}

	/// Creates a transport around an existing client.
	pub fn with_client(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, url: &str) -> Result<()> {
		let response = self.client.get(url).send().await?;

		let status = response.status();
		if !status.is_success() {
			debug!(status = status.as_u16(), "Collection endpoint returned non-success status");
			return Err(TrackerError::ServerError {
				status: status.as_u16(),
			});
		}

		Ok(())
	}
}
