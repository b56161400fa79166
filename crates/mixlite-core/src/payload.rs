// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Payload shapes and the transport encoding.
//!
//! Event payloads (`/track`) carry the event name and an enriched property
//! object. Profile and group payloads (`/engage`, `/groups`) are a flat
//! object keyed by `$token` and `$distinct_id` plus the caller's properties.
//!
//! On the wire a payload is its JSON text encoded as URL-safe base64.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enrichment::Enrichment;
use crate::error::Result;
use crate::identity::DistinctId;
use crate::token::ProjectToken;

/// Event name used for identity creation.
pub const IDENTIFY_EVENT: &str = "$identify";

/// A `/track` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
	pub event: String,
	#[serde(default)]
	pub properties: Map<String, Value>,
}

impl EventPayload {
	pub fn new(event: impl Into<String>, properties: Map<String, Value>) -> Self {
		Self {
			event: event.into(),
			properties,
		}
	}

	/// The `$identify` event with no caller properties.
	pub fn identify() -> Self {
		Self::new(IDENTIFY_EVENT, Map::new())
	}

	/// Attaches session metadata to the payload (builder pattern).
	pub fn enrich(
		mut self,
		enrichment: &Enrichment,
		token: &ProjectToken,
		distinct_id: Option<&DistinctId>,
	) -> Self {
		enrichment.apply(&mut self.properties, token, distinct_id);
		self
	}
}

/// Builds an `/engage` or `/groups` payload.
///
/// Caller properties are written after `$token` and `$distinct_id`, so a
/// caller key of the same name wins.
pub fn profile_payload(
	token: &ProjectToken,
	distinct_id: &DistinctId,
	properties: Map<String, Value>,
) -> Map<String, Value> {
	let mut data = Map::new();
	data.insert("$token".to_string(), Value::from(token.expose()));
	data.insert("$distinct_id".to_string(), distinct_id.to_value());
	data.extend(properties);
	data
}

/// Serializes `payload` to JSON and encodes it for the `data` query parameter.
pub fn encode_payload<T>(payload: &T) -> Result<String>
where
	T: Serialize + ?Sized,
{
	let json = serde_json::to_vec(payload)?;
	Ok(URL_SAFE.encode(json))
}

/// Reverses [`encode_payload`].
pub fn decode_payload(encoded: &str) -> Result<Value> {
	let bytes = URL_SAFE.decode(encoded)?;
	Ok(serde_json::from_slice(&bytes)?)
}
