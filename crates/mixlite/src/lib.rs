// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-side Mixpanel tracker.
//!
//! This crate records events, user identity changes, and profile updates
//! from an application and sends each one to a Mixpanel-compatible
//! collection endpoint as a single GET with a base64-encoded JSON payload.
//!
//! # Quick Start
//!
//! ```ignore
//! use mixlite::{Properties, StaticDeviceInfo, Tracker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tracker = Tracker::builder()
//!         .token("project-token")
//!         .device_info(StaticDeviceInfo::new(snapshot, user_agent))
//!         .build()?;
//!
//!     // Capture device metadata; nothing is sent before this.
//!     tracker.initialize().await?;
//!
//!     tracker
//!         .track("Checkout", Properties::new().insert("total", 42), "live-event")
//!         .await;
//!
//!     tracker.identify("user@example.com").await;
//!     tracker
//!         .update_profile("profile-set", Properties::new().insert("plan", "pro"))
//!         .await;
//!
//!     // Back to the device identity.
//!     tracker.reset().await;
//!
//!     // Wait for background sends before the runtime exits.
//!     tracker.flush().await;
//!     Ok(())
//! }
//! ```
//!
//! # Gating
//!
//! Without a token, or before `initialize()` completes, calls are not sent.
//! Their arguments are written to the [`DiagnosticSink`] prefixed with
//! [`NOT_SENT_PREFIX`] instead, and the call returns [`Outcome::Diverted`].
//!
//! # Operations
//!
//! Each endpoint has a fixed allow-list of operations. An unlisted operation
//! is reported to the sink and nothing is sent:
//!
//! | Endpoint | Operations |
//! |----------|------------|
//! | `track` | `live-event`, `past-events`, `create-identity`, ... |
//! | `engage` | `profile-set`, `profile-set-once`, `profile-unset`, ... |
//! | `groups` | `group-set`, `group-set-once`, `group-union`, ... |
//!
//! # Configuration
//!
//! ```ignore
//! use mixlite::{Tracker, TrackerConfigLayer};
//!
//! let tracker = Tracker::builder()
//!     .config(TrackerConfigLayer::from_env()?.finalize())
//!     .device_info(provider)
//!     .build()?;
//! ```

pub mod config;
pub mod device;
pub mod diagnostics;
pub mod error;
pub mod properties;
pub mod tracker;
pub mod transport;

pub use config::{DispatchMode, Environment, TrackerConfig, TrackerConfigLayer};
pub use device::{AppManifest, DeviceInfoProvider, DeviceSnapshot, StaticDeviceInfo};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink, HINTS, NOT_SENT_PREFIX};
pub use error::{Outcome, Result, TrackerError, NO_TOKEN_MESSAGE};
pub use properties::Properties;
pub use tracker::{Tracker, TrackerBuilder};
pub use transport::{HttpTransport, Transport};

// Re-export types from mixlite-core that users may need
pub use mixlite_core::{
	decode_payload, Category, DispatchRequest, DisplaySize, DistinctId, Enrichment,
	PlatformDetails, ProjectToken,
};
