// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The project token that authenticates outgoing payloads.
//!
//! The token travels inside every payload, so it has to be exposed when a
//! payload is built, but it must never show up in logs. [`ProjectToken`]
//! redacts itself in `Debug`, `Display` and `Serialize`, and zeroizes its
//! memory on drop.
//!
//! ```
//! use mixlite_core::ProjectToken;
//!
//! let token = ProjectToken::new("abc123");
//! assert_eq!(format!("{token}"), "[REDACTED]");
//! assert_eq!(token.expose(), "abc123");
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

/// A project token wrapper that never prints its value.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct ProjectToken {
	inner: String,
}

impl ProjectToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			inner: token.into(),
		}
	}

	/// Explicitly access the token.
	pub fn expose(&self) -> &str {
		&self.inner
	}

	/// Returns true if the token is the empty string.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for ProjectToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ProjectToken").field(&REDACTED).finish()
	}
}

impl fmt::Display for ProjectToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl Serialize for ProjectToken {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

impl<'de> Deserialize<'de> for ProjectToken {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(ProjectToken::new)
	}
}

impl From<String> for ProjectToken {
	fn from(token: String) -> Self {
		Self::new(token)
	}
}

impl From<&str> for ProjectToken {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_debug_is_redacted() {
		let token = ProjectToken::new("secret-token");
		assert_eq!(format!("{token:?}"), "ProjectToken(\"[REDACTED]\")");
	}

	#[test]
	fn test_serialize_is_redacted() {
		let token = ProjectToken::new("secret-token");
		assert_eq!(serde_json::to_string(&token).unwrap(), "\"[REDACTED]\"");
	}

	#[test]
	fn test_deserialize_reads_plain_value() {
		let token: ProjectToken = serde_json::from_str("\"abc\"").unwrap();
		assert_eq!(token.expose(), "abc");
	}

	proptest! {
		#[test]
		fn display_never_leaks(value in "[a-z0-9]{12,64}") {
			let token = ProjectToken::new(value.clone());
			let shown = format!("{token} {token:?}");
			prop_assert!(!shown.contains(&value));
			prop_assert_eq!(token.expose(), value.as_str());
		}
	}
}
