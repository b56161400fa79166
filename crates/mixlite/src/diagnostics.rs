// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Local fallback output for calls that are not sent.
//!
//! When the tracker is not configured or not ready, each call's arguments
//! are written to a [`DiagnosticSink`] instead of the network, prefixed with
//! [`NOT_SENT_PREFIX`]. This helps during local development when analytics
//! is not wired up. Each one is followed by a [`HINTS`] line. In the
//! [`Environment::Test`] environment both are suppressed.
//!
//! Rejections (an unknown operation, or a profile update without a user)
//! are always reported.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::Environment;
use crate::error::TrackerError;

/// Marker that starts every not-sent line.
pub const NOT_SENT_PREFIX: &str = "Not sent to Mixpanel: ";

/// Emitted after each not-sent line.
pub const HINTS: &str =
	"HINTS: Provide a valid Mixpanel token. Call initialize() before any others.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
	/// A call diverted from the network by gating.
	NotSent,
	/// A call refused by validation.
	Rejected,
	/// Setup advice following a not-sent line.
	Hint,
}

/// A single line of diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub kind: DiagnosticKind,
	pub message: String,
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.message)
	}
}

/// Receives diagnostic lines. Must not panic or block.
pub trait DiagnosticSink: Send + Sync {
	fn emit(&self, diagnostic: &Diagnostic);
}

/// Writes diagnostics through `tracing` under the `mixlite::diagnostic` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn emit(&self, diagnostic: &Diagnostic) {
		match diagnostic.kind {
			DiagnosticKind::NotSent | DiagnosticKind::Hint => {
				info!(target: "mixlite::diagnostic", "{}", diagnostic.message)
			}
			DiagnosticKind::Rejected => warn!(target: "mixlite::diagnostic", "{}", diagnostic.message),
		}
	}
}

/// Formats diagnostic lines and applies environment suppression.
#[derive(Clone)]
pub(crate) struct Diagnostics {
	sink: Arc<dyn DiagnosticSink>,
	environment: Environment,
}

impl Diagnostics {
	pub(crate) fn new(sink: Arc<dyn DiagnosticSink>, environment: Environment) -> Self {
		Self { sink, environment }
	}

	/// Reports a call that was diverted from the network.
	pub(crate) fn not_sent(&self, subject: &str, detail: Option<&Value>) {
		if self.environment.suppresses_diagnostics() {
			return;
		}

		self.sink.emit(&Diagnostic {
			kind: DiagnosticKind::NotSent,
			message: not_sent_line(subject, detail),
		});
		self.sink.emit(&Diagnostic {
			kind: DiagnosticKind::Hint,
			message: HINTS.to_string(),
		});
	}

	/// Reports a call refused by validation.
	pub(crate) fn rejected(&self, reason: &TrackerError) {
		self.sink.emit(&Diagnostic {
			kind: DiagnosticKind::Rejected,
			message: reason.to_string(),
		});
	}
}

fn not_sent_line(subject: &str, detail: Option<&Value>) -> String {
	match detail {
		Some(detail) => format!("{NOT_SENT_PREFIX}{subject} {detail}"),
		None => format!("{NOT_SENT_PREFIX}{subject}"),
	}
}
