// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for payload construction and validation.

use thiserror::Error;

use crate::operation::Category;

/// Errors raised while validating, encoding or decoding tracker payloads.
#[derive(Debug, Error)]
pub enum CoreError {
	#[error("'{operation}' is not a valid Mixpanel operation for the {category} endpoint. This operation will not be tracked.")]
	InvalidOperation {
		operation: String,
		category: Category,
	},

	#[error("unknown endpoint category: {0}")]
	UnknownCategory(String),

	#[error("malformed dispatch url: {0}")]
	MalformedUrl(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("payload decode error: {0}")]
	Decode(#[from] base64::DecodeError),
}

/// A specialized `Result` type for core tracker operations.
pub type Result<T> = std::result::Result<T, CoreError>;
