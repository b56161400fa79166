// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client for mixlite.
//!
//! Every outbound request goes through a client built here so the
//! User-Agent header is the same across transports.

mod client;

pub use client::{
	builder, builder_with_user_agent, new_client_with_timeout, user_agent,
};
