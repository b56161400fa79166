// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Endpoint categories and their operation allow-lists.
//!
//! Every dispatched request targets one of three categories, each of which
//! accepts a closed set of operations. The operation is appended to the
//! request path as a URL fragment:
//!
//! | Category | Path | Reference |
//! |----------|------|-----------|
//! | [`Category::Track`] | `/track` | <https://developer.mixpanel.com/reference/events> |
//! | [`Category::Engage`] | `/engage` | <https://developer.mixpanel.com/reference/user-profiles> |
//! | [`Category::Groups`] | `/groups` | <https://developer.mixpanel.com/reference/group-profiles> |
//!
//! Validation is an exact, case-sensitive membership test.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Valid operations for event tracking interactions.
pub const TRACK_OPERATIONS: &[&str] = &[
	"create-identity",
	"live-event",
	"live-event-deduplicate",
	"past-events-batch",
	"past-events",
];

/// Valid operations for user profile interactions.
pub const PROFILE_OPERATIONS: &[&str] = &[
	"profile-set",
	"profile-set-once",
	"profile-numerical-add",
	"profile-list-append",
	"profile-list-remove",
	"profile-unset",
	"profile-batch-update",
	"profile-delete",
];

/// Valid operations for group profile interactions.
pub const GROUP_OPERATIONS: &[&str] = &[
	"group-set",
	"group-set-once",
	"group-unset",
	"group-remove-from-list",
	"group-union",
	"group-delete",
];

/// Operation used by identify and reset.
pub const CREATE_IDENTITY: &str = "create-identity";

/// A dispatch endpoint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	/// Events (`/track`).
	Track,
	/// User profiles (`/engage`).
	Engage,
	/// Group profiles (`/groups`).
	Groups,
}

impl Category {
	pub const ALL: [Category; 3] = [Category::Track, Category::Engage, Category::Groups];

	/// The URL path segment for this category.
	pub fn as_str(&self) -> &'static str {
		match self {
			Category::Track => "track",
			Category::Engage => "engage",
			Category::Groups => "groups",
		}
	}

	/// The closed set of operations accepted by this category.
	pub fn operations(&self) -> &'static [&'static str] {
		match self {
			Category::Track => TRACK_OPERATIONS,
			Category::Engage => PROFILE_OPERATIONS,
			Category::Groups => GROUP_OPERATIONS,
		}
	}

	/// Returns true if `operation` is in this category's allow-list.
	pub fn allows(&self, operation: &str) -> bool {
		self.operations().contains(&operation)
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl std::str::FromStr for Category {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"track" => Ok(Category::Track),
			"engage" => Ok(Category::Engage),
			"groups" => Ok(Category::Groups),
			other => Err(CoreError::UnknownCategory(other.to_string())),
		}
	}
}

/// Checks `operation` against the allow-list of `category`.
pub fn validate_operation(operation: &str, category: Category) -> Result<()> {
	if category.allows(operation) {
		Ok(())
	} else {
		Err(CoreError::InvalidOperation {
			operation: operation.to_string(),
			category,
		})
	}
}
