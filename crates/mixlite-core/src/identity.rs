// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Distinct IDs used to correlate events with a user.

use serde::{Deserialize, Serialize};

/// The identifier the analytics service uses to tie events to a user.
///
/// Hosts hand out both numeric account IDs and opaque device strings, and
/// the remote service keeps whichever JSON type it receives, so both are
/// preserved as-is in payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistinctId {
	Number(i64),
	Text(String),
}

impl DistinctId {
	/// Converts the ID to a JSON value for embedding in a payload.
	pub fn to_value(&self) -> serde_json::Value {
		match self {
			DistinctId::Number(n) => serde_json::Value::from(*n),
			DistinctId::Text(s) => serde_json::Value::from(s.as_str()),
		}
	}
}

impl std::fmt::Display for DistinctId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DistinctId::Number(n) => write!(f, "{n}"),
			DistinctId::Text(s) => f.write_str(s),
		}
	}
}

impl From<i64> for DistinctId {
	fn from(n: i64) -> Self {
		DistinctId::Number(n)
	}
}

impl From<i32> for DistinctId {
	fn from(n: i32) -> Self {
		DistinctId::Number(n.into())
	}
}

impl From<u32> for DistinctId {
	fn from(n: u32) -> Self {
		DistinctId::Number(n.into())
	}
}

impl From<String> for DistinctId {
	fn from(s: String) -> Self {
		DistinctId::Text(s)
	}
}

impl From<&str> for DistinctId {
	fn from(s: &str) -> Self {
		DistinctId::Text(s.to_string())
	}
}

impl From<DistinctId> for serde_json::Value {
	fn from(id: DistinctId) -> Self {
		id.to_value()
	}
}
