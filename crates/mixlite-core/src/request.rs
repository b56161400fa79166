// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dispatch URL formatting.
//!
//! A validated payload is sent as a single GET request:
//!
//! ```text
//! <base-url>/<category>#<operation>?data=<encoded-payload>
//! ```

use crate::error::{CoreError, Result};
use crate::operation::{validate_operation, Category};
use crate::payload::{decode_payload, encode_payload};

/// Default analytics collection origin.
pub const DEFAULT_BASE_URL: &str = "https://api.mixpanel.com";

/// A validated, encoded request ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
	pub category: Category,
	pub operation: String,
	pub data: String,
}

impl DispatchRequest {
	/// Validates `operation` for `category` and encodes `payload`.
	pub fn new<T>(category: Category, operation: &str, payload: &T) -> Result<Self>
	where
		T: serde::Serialize + ?Sized,
	{
		validate_operation(operation, category)?;
		Ok(Self {
			category,
			operation: operation.to_string(),
			data: encode_payload(payload)?,
		})
	}

	/// Formats the full request URL against `base_url`.
	pub fn url(&self, base_url: &str) -> String {
		format!(
			"{}/{}#{}?data={}",
			base_url.trim_end_matches('/'),
			self.category,
			self.operation,
			self.data
		)
	}

	/// Parses a URL produced by [`DispatchRequest::url`].
	///
	/// Returns the base URL alongside the request.
	pub fn parse(url: &str) -> Result<(String, Self)> {
		let malformed = || CoreError::MalformedUrl(url.to_string());

		let (path, rest) = url.split_once('#').ok_or_else(malformed)?;
		let (base_url, category) = path.rsplit_once('/').ok_or_else(malformed)?;
		let (operation, data) = rest.split_once("?data=").ok_or_else(malformed)?;

		Ok((
			base_url.to_string(),
			Self {
				category: category.parse()?,
				operation: operation.to_string(),
				data: data.to_string(),
			},
		))
	}

	/// Decodes the `data` parameter back into JSON.
	pub fn decode(&self) -> Result<serde_json::Value> {
		decode_payload(&self.data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_url_format() {
		let request = DispatchRequest {
			category: Category::Track,
			operation: "live-event".to_string(),
			data: "abc=".to_string(),
		};
		assert_eq!(
			request.url(DEFAULT_BASE_URL),
			"https://api.mixpanel.com/track#live-event?data=abc="
		);
	}

	#[test]
	fn test_url_trims_trailing_slash_on_base() {
		let request = DispatchRequest {
			category: Category::Groups,
			operation: "group-set".to_string(),
			data: "x".to_string(),
		};
		assert_eq!(
			request.url("http://localhost:8080/"),
			"http://localhost:8080/groups#group-set?data=x"
		);
	}

	#[test]
	fn test_new_rejects_invalid_operation() {
		let result = DispatchRequest::new(Category::Engage, "invalid-op", &json!({}));
		assert!(matches!(result, Err(CoreError::InvalidOperation { .. })));
	}

	#[test]
	fn test_parse_round_trips_url_and_payload() {
		let payload = json!({"$token": "T", "$distinct_id": 1, "plan": "pro"});
		let request = DispatchRequest::new(Category::Engage, "profile-set", &payload).unwrap();
		let url = request.url(DEFAULT_BASE_URL);

		let (base, parsed) = DispatchRequest::parse(&url).unwrap();
		assert_eq!(base, DEFAULT_BASE_URL);
		assert_eq!(parsed, request);
		assert_eq!(parsed.decode().unwrap(), payload);
	}

	#[test]
	fn test_parse_rejects_malformed_urls() {
		assert!(matches!(
			DispatchRequest::parse("https://api.mixpanel.com/track?data=x"),
			Err(CoreError::MalformedUrl(_))
		));
		assert!(matches!(
			DispatchRequest::parse("https://api.mixpanel.com/track#live-event"),
			Err(CoreError::MalformedUrl(_))
		));
		assert!(matches!(
			DispatchRequest::parse("https://api.mixpanel.com/people#x?data=y"),
			Err(CoreError::UnknownCategory(_))
		));
	}
}
