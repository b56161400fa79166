// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error and outcome types for the tracker SDK.
//!
//! Tracking operations never fail from the caller's point of view. Each one
//! returns an [`Outcome`]: either the request was handed to the transport,
//! or it was diverted to the diagnostic sink for the reason carried in the
//! [`TrackerError`].

use mixlite_core::{Category, CoreError};
use thiserror::Error;

/// Logged when a tracker is constructed without a project token.
pub const NO_TOKEN_MESSAGE: &str = "No token was provided. Please provide a valid Mixpanel token when constructing a Tracker.";

/// Tracker SDK errors.
#[derive(Debug, Error)]
pub enum TrackerError {
	/// No project token was configured.
	#[error("{}", NO_TOKEN_MESSAGE)]
	NotConfigured,

	/// `initialize` has not completed.
	#[error("tracker is not initialized; call initialize() before any other operation")]
	NotReady,

	/// A profile or group operation was attempted with no identified user.
	#[error("userId not found. {operation} will not be tracked.")]
	UnknownUser { operation: String },

	/// The operation is not in the category's allow-list.
	#[error("'{operation}' is not a valid Mixpanel operation for the {category} endpoint. This operation will not be tracked.")]
	InvalidOperation {
		operation: String,
		category: Category,
	},

	/// The tracker was built without a device info provider.
	#[error("a device info provider is required")]
	MissingDeviceInfo,

	/// The device info provider failed during initialization.
	#[error("device info provider failed: {0}")]
	Provider(String),

	/// Configuration could not be parsed.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// Properties were given as a JSON value that is not an object.
	#[error("properties must be a JSON object, got {0}")]
	InvalidProperties(&'static str),

	/// Building or encoding the payload failed.
	#[error("payload error: {0}")]
	Payload(CoreError),

	/// HTTP request failed.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The collection endpoint answered with a non-success status.
	#[error("server error ({status})")]
	ServerError { status: u16 },
}

impl From<CoreError> for TrackerError {
	fn from(err: CoreError) -> Self {
		match err {
			CoreError::InvalidOperation {
				operation,
				category,
			} => TrackerError::InvalidOperation {
				operation,
				category,
			},
			other => TrackerError::Payload(other),
		}
	}
}

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// What happened to a tracking call.
#[derive(Debug)]
pub enum Outcome {
	/// `requests` requests were handed to the transport.
	Dispatched { requests: usize },
	/// Nothing was sent.
	Diverted(TrackerError),
}

impl Outcome {
	pub fn is_dispatched(&self) -> bool {
		matches!(self, Outcome::Dispatched { .. })
	}

	/// The reason nothing was sent, if the call was diverted.
	pub fn diversion(&self) -> Option<&TrackerError> {
		match self {
			Outcome::Dispatched { .. } => None,
			Outcome::Diverted(reason) => Some(reason),
		}
	}

	/// Number of requests handed to the transport.
	pub fn requests(&self) -> usize {
		match self {
			Outcome::Dispatched { requests } => *requests,
			Outcome::Diverted(_) => 0,
		}
	}
}

impl From<Result<()>> for Outcome {
	fn from(result: Result<()>) -> Self {
		match result {
			Ok(()) => Outcome::Dispatched { requests: 1 },
			Err(reason) => Outcome::Diverted(reason),
		}
	}
}
