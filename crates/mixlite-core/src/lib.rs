// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the mixlite analytics tracker.
//!
//! This crate holds the wire-level pieces shared by the tracker SDK
//! (`mixlite`): endpoint categories and their operation allow-lists, the
//! session enrichment set, payload builders, and the encoding used for the
//! `data` query parameter.
//!
//! # Example
//!
//! ```
//! use mixlite_core::{
//!     Category, DispatchRequest, DistinctId, EventPayload, ProjectToken,
//!     DEFAULT_BASE_URL,
//! };
//!
//! let token = ProjectToken::new("T");
//! let payload = mixlite_core::profile_payload(
//!     &token,
//!     &DistinctId::from(123),
//!     serde_json::Map::new(),
//! );
//!
//! let request = DispatchRequest::new(Category::Engage, "profile-set", &payload).unwrap();
//! assert!(request.url(DEFAULT_BASE_URL).starts_with("https://api.mixpanel.com/engage#profile-set?data="));
//!
//! assert!(DispatchRequest::new(Category::Engage, "invalid-op", &payload).is_err());
//!
//! let identify =
//!     DispatchRequest::new(Category::Track, "create-identity", &EventPayload::identify()).unwrap();
//! assert_eq!(identify.decode().unwrap()["event"], "$identify");
//! ```

pub mod enrichment;
pub mod error;
pub mod identity;
pub mod operation;
pub mod payload;
pub mod request;
pub mod token;

pub use enrichment::{DisplaySize, Enrichment, PlatformDetails, FALLBACK_PLATFORM};
pub use error::{CoreError, Result};
pub use identity::DistinctId;
pub use operation::{
	validate_operation, Category, CREATE_IDENTITY, GROUP_OPERATIONS, PROFILE_OPERATIONS,
	TRACK_OPERATIONS,
};
pub use payload::{decode_payload, encode_payload, profile_payload, EventPayload, IDENTIFY_EVENT};
pub use request::{DispatchRequest, DEFAULT_BASE_URL};
pub use token::{ProjectToken, REDACTED};
