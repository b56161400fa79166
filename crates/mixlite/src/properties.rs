// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Helper for building event, profile and group properties.

use serde_json::{Map, Value};

use crate::error::{Result, TrackerError};

/// A builder for constructing event, profile or group properties.
///
/// # Example
///
/// ```
/// use mixlite::Properties;
///
/// let props = Properties::new()
///     .insert("screen", "checkout")
///     .insert("items", 3)
///     .insert("total", 99.99)
///     .insert("is_premium", true);
/// assert_eq!(props.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
	inner: Map<String, Value>,
}

impl Properties {
	/// Creates a new empty Properties builder.
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a key-value pair into the properties.
	///
	/// The value can be any type that implements `Into<serde_json::Value>`,
	/// including strings, numbers, booleans, arrays, and nested objects.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Merges another Properties into this one.
	///
	/// If both contain the same key, the value from `other` takes precedence.
	pub fn merge(mut self, other: Properties) -> Self {
		self.inner.extend(other.inner);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Converts the properties into a `serde_json::Value` object.
	pub fn into_value(self) -> Value {
		Value::Object(self.inner)
	}

	/// Converts the properties into the underlying JSON map.
	pub fn into_map(self) -> Map<String, Value> {
		self.inner
	}
}

impl From<Properties> for Value {
	fn from(props: Properties) -> Self {
		props.into_value()
	}
}

impl TryFrom<Value> for Properties {
	type Error = TrackerError;

	fn try_from(value: Value) -> Result<Self> {
		let kind = match value {
			Value::Object(map) => return Ok(Self { inner: map }),
			Value::Null => "null",
			Value::Bool(_) => "a boolean",
			Value::Number(_) => "a number",
			Value::String(_) => "a string",
			Value::Array(_) => "an array",
		};
		Err(TrackerError::InvalidProperties(kind))
	}
}

impl From<Map<String, Value>> for Properties {
	fn from(map: Map<String, Value>) -> Self {
		Self { inner: map }
	}
}
