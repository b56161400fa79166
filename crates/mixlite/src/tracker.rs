// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The tracker: session state, gating, enrichment and dispatch.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use mixlite_core::{
	profile_payload, Category, DispatchRequest, DistinctId, Enrichment, EventPayload,
	ProjectToken, CREATE_IDENTITY,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{DispatchMode, Environment, TrackerConfig};
use crate::device::DeviceInfoProvider;
use crate::diagnostics::{DiagnosticSink, Diagnostics, TracingSink};
use crate::error::{Outcome, Result, TrackerError, NO_TOKEN_MESSAGE};
use crate::properties::Properties;
use crate::transport::{HttpTransport, Transport};

/// Builder for constructing a [`Tracker`].
pub struct TrackerBuilder {
	config: TrackerConfig,
	device_info: Option<Arc<dyn DeviceInfoProvider>>,
	transport: Option<Arc<dyn Transport>>,
	sink: Option<Arc<dyn DiagnosticSink>>,
}

impl TrackerBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			config: TrackerConfig::default(),
			device_info: None,
			transport: None,
			sink: None,
		}
	}

	/// Replaces the whole configuration, e.g. one resolved from a
	/// [`crate::TrackerConfigLayer`].
	pub fn config(mut self, config: TrackerConfig) -> Self {
		self.config = config;
		self
	}

	/// Sets the project token. An empty token counts as no token.
	pub fn token(mut self, token: impl Into<String>) -> Self {
		let token = ProjectToken::new(token);
		self.config.token = (!token.is_empty()).then_some(token);
		self
	}

	/// Sets the collection origin.
	///
	/// Example: `https://api-eu.mixpanel.com`
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.config.base_url = url.into();
		self
	}

	pub fn environment(mut self, environment: Environment) -> Self {
		self.config.environment = environment;
		self
	}

	/// Sets the HTTP request timeout. Ignored when a custom transport is set.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	pub fn dispatch_mode(mut self, mode: DispatchMode) -> Self {
		self.config.dispatch_mode = mode;
		self
	}

	/// Sets the device/runtime metadata provider. Required.
	pub fn device_info(mut self, provider: impl DeviceInfoProvider + 'static) -> Self {
		self.device_info = Some(Arc::new(provider));
		self
	}

	/// Replaces the default HTTP transport.
	pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
		self.transport = Some(Arc::new(transport));
		self
	}

	/// Replaces the default [`TracingSink`].
	pub fn diagnostic_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
		self.sink = Some(Arc::new(sink));
		self
	}

	/// Builds the Tracker.
	///
	/// A missing token is not an error: the tracker is built in the
	/// not-configured state and diverts every call to the diagnostic sink.
	pub fn build(self) -> Result<Tracker> {
		let device_info = self.device_info.ok_or(TrackerError::MissingDeviceInfo)?;

		let mut config = self.config;
		config.base_url = config.base_url.trim_end_matches('/').to_string();

		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(HttpTransport::new(config.request_timeout)?),
		};

		let sink = self.sink.unwrap_or_else(|| Arc::new(TracingSink));
		let diagnostics = Diagnostics::new(sink, config.environment);

		if config.token.is_none() {
			diagnostics.rejected(&TrackerError::NotConfigured);
		}

		info!(
			base_url = %config.base_url,
			environment = %config.environment,
			configured = config.token.is_some(),
			"Tracker constructed"
		);

		Ok(Tracker {
			config,
			device_info,
			transport,
			diagnostics,
			session: SessionState::default(),
			in_flight: Vec::new(),
		})
	}
}

impl Default for TrackerBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// An event waiting in the pending buffer.
#[derive(Debug, Clone)]
struct PendingEvent {
	name: String,
	properties: Map<String, Value>,
}

#[derive(Debug, Default)]
struct SessionState {
	ready: bool,
	current_user_id: Option<DistinctId>,
	device_id: Option<DistinctId>,
	enrichment: Option<Enrichment>,
	pending: VecDeque<PendingEvent>,
	events_sent: u64,
}

/// Client-side event tracker.
///
/// Every dispatching operation requires a project token and a completed
/// [`Tracker::initialize`]. Calls that fail either check are written to the
/// diagnostic sink and return [`Outcome::Diverted`]; they are never queued
/// for later.
///
/// In [`DispatchMode::Detached`] sends run as tasks on the current tokio
/// runtime. Call [`Tracker::flush`] before the runtime shuts down, or the
/// sends still in flight are dropped with it.
///
/// # Example
///
/// ```ignore
/// use mixlite::{Properties, Tracker};
///
/// let mut tracker = Tracker::builder()
///     .token("project-token")
///     .device_info(provider)
///     .build()?;
///
/// tracker.initialize().await?;
///
/// tracker
///     .track("Viewed", Properties::new().insert("screen", "home"), "live-event")
///     .await;
/// tracker.identify(456).await;
/// tracker
///     .update_profile("profile-set", Properties::new().insert("plan", "pro"))
///     .await;
/// tracker.reset().await;
/// tracker.flush().await;
/// ```
pub struct Tracker {
	config: TrackerConfig,
	device_info: Arc<dyn DeviceInfoProvider>,
	transport: Arc<dyn Transport>,
	diagnostics: Diagnostics,
	session: SessionState,
	in_flight: Vec<JoinHandle<()>>,
}

impl Tracker {
	/// Creates a new builder for constructing a Tracker.
	pub fn builder() -> TrackerBuilder {
		TrackerBuilder::new()
	}

	/// Captures device and app metadata and marks the tracker ready.
	///
	/// Readiness is set only after every field has been captured. A provider
	/// failure is returned to the caller and leaves the tracker not ready.
	pub async fn initialize(&mut self) -> Result<()> {
		if self.config.token.is_none() {
			self.diagnostics
				.not_sent(&format!("init: {NO_TOKEN_MESSAGE}"), None);
			return Ok(());
		}

		let snapshot = self.device_info.snapshot()?;
		let user_agent = self.device_info.user_agent().await?;

		let enrichment = Enrichment {
			user_agent,
			app_name: snapshot.manifest.name,
			app_slug: snapshot.manifest.slug,
			app_version: snapshot.manifest.version,
			screen_size: snapshot.display.to_string(),
			client_id: snapshot.device_id.clone(),
			device_name: snapshot.device_name,
			platform: snapshot.platform,
		};

		info!(
			platform = enrichment.platform.label(),
			app_version = %enrichment.app_version,
			has_device_id = snapshot.device_id.is_some(),
			"Tracker initialized"
		);

		self.session.device_id = snapshot.device_id.clone();
		self.session.current_user_id = snapshot.device_id;
		self.session.enrichment = Some(enrichment);
		self.session.ready = true;

		Ok(())
	}

	/// Tracks an event under a `track` operation such as `live-event`.
	///
	/// The event is queued and the queue is flushed immediately.
	pub async fn track(
		&mut self,
		name: impl Into<String>,
		properties: impl Into<Properties>,
		operation: &str,
	) -> Outcome {
		let name = name.into();
		let properties = properties.into();

		if let Err(reason) = self.gate() {
			self.diagnostics
				.not_sent(&format!("track: {name}"), Some(&properties.into_value()));
			return Outcome::Diverted(reason);
		}

		self.session.pending.push_back(PendingEvent {
			name,
			properties: properties.into_map(),
		});
		self.drain_pending(operation).await
	}

	/// Identifies the current user and sends a `$identify` event.
	///
	/// The new identity is set before the event is enriched, so the event
	/// and everything after it carry `user_id` as `distinct_id`.
	pub async fn identify(&mut self, user_id: impl Into<DistinctId>) -> Outcome {
		let user_id = user_id.into();

		if let Err(reason) = self.gate() {
			self.diagnostics.not_sent(&format!("identify: {user_id}"), None);
			return Outcome::Diverted(reason);
		}

		self.session.current_user_id = Some(user_id);
		let result = match self.enrich(EventPayload::identify()) {
			Ok(payload) => self.push(Category::Track, CREATE_IDENTITY, &payload).await,
			Err(reason) => Err(reason),
		};
		Outcome::from(result)
	}

	/// Restores the identity captured from the device at initialization.
	pub async fn reset(&mut self) -> Outcome {
		if let Err(reason) = self.gate() {
			let device_id = self
				.session
				.device_id
				.as_ref()
				.map(ToString::to_string)
				.unwrap_or_else(|| "unknown".to_string());
			self.diagnostics.not_sent(&format!("reset: {device_id}"), None);
			return Outcome::Diverted(reason);
		}

		match self.session.device_id.clone() {
			Some(device_id) => self.identify(device_id).await,
			None => {
				self.session.current_user_id = None;
				let reason = TrackerError::UnknownUser {
					operation: CREATE_IDENTITY.to_string(),
				};
				self.diagnostics.rejected(&reason);
				Outcome::Diverted(reason)
			}
		}
	}

	/// Applies a user profile operation such as `profile-set`.
	pub async fn update_profile(
		&mut self,
		operation: &str,
		properties: impl Into<Properties>,
	) -> Outcome {
		self.update(Category::Engage, operation, properties.into())
			.await
	}

	/// Applies a group profile operation such as `group-set`.
	pub async fn update_group(&mut self, operation: &str, properties: impl Into<Properties>) -> Outcome {
		self.update(Category::Groups, operation, properties.into())
			.await
	}

	pub fn is_configured(&self) -> bool {
		self.config.token.is_some()
	}

	pub fn is_ready(&self) -> bool {
		self.session.ready
	}

	pub fn current_user_id(&self) -> Option<&DistinctId> {
		self.session.current_user_id.as_ref()
	}

	/// The device identifier captured at initialization.
	pub fn device_id(&self) -> Option<&DistinctId> {
		self.session.device_id.as_ref()
	}

	pub fn enrichment(&self) -> Option<&Enrichment> {
		self.session.enrichment.as_ref()
	}

	/// Number of events waiting to be flushed.
	pub fn pending_len(&self) -> usize {
		self.session.pending.len()
	}

	/// Waits for every detached send started by this tracker to finish.
	pub async fn flush(&mut self) {
		for handle in std::mem::take(&mut self.in_flight) {
			if let Err(e) = handle.await {
				debug!(error = %e, "Analytics send task did not complete");
			}
		}
	}

	/// Number of detached sends that have not finished yet.
	pub fn in_flight_len(&self) -> usize {
		self.in_flight
			.iter()
			.filter(|handle| !handle.is_finished())
			.count()
	}

	/// Number of tracked events drained and handed to the transport.
	pub fn events_sent(&self) -> u64 {
		self.session.events_sent
	}

	pub fn config(&self) -> &TrackerConfig {
		&self.config
	}

	/// Returns the token once the tracker is both configured and ready.
	fn gate(&self) -> Result<&ProjectToken> {
		let token = self
			.config
			.token
			.as_ref()
			.ok_or(TrackerError::NotConfigured)?;
		if !self.session.ready {
			return Err(TrackerError::NotReady);
		}
		Ok(token)
	}

	// Drains the pending buffer in arrival order.
	async fn drain_pending(&mut self, operation: &str) -> Outcome {
		let mut requests = 0;
		let mut last_reason = None;

		while let Some(event) = self.session.pending.pop_front() {
			let result = match self.enrich(EventPayload::new(event.name, event.properties)) {
				Ok(payload) => self.push(Category::Track, operation, &payload).await,
				Err(reason) => Err(reason),
			};

			match result {
				Ok(()) => {
					requests += 1;
					self.session.events_sent += 1;
				}
				Err(reason) => last_reason = Some(reason),
			}
		}

		match (requests, last_reason) {
			(0, Some(reason)) => Outcome::Diverted(reason),
			(requests, _) => Outcome::Dispatched { requests },
		}
	}

	async fn update(&mut self, category: Category, operation: &str, properties: Properties) -> Outcome {
		let token = match self.gate() {
			Ok(token) => token,
			Err(reason) => {
				self.diagnostics
					.not_sent(&format!("{operation}:"), Some(&properties.into_value()));
				return Outcome::Diverted(reason);
			}
		};
		let Some(user_id) = self.session.current_user_id.as_ref() else {
			let reason = TrackerError::UnknownUser {
				operation: operation.to_string(),
			};
			self.diagnostics.rejected(&reason);
			return Outcome::Diverted(reason);
		};

		let payload = profile_payload(token, user_id, properties.into_map());
		Outcome::from(self.push(category, operation, &payload).await)
	}

	fn enrich(&self, payload: EventPayload) -> Result<EventPayload> {
		let token = self.gate()?;
		let enrichment = self
			.session
			.enrichment
			.as_ref()
			.ok_or(TrackerError::NotReady)?;

		Ok(payload.enrich(enrichment, token, self.session.current_user_id.as_ref()))
	}

	/// Validates, encodes and sends one payload.
	async fn push<T>(&mut self, category: Category, operation: &str, payload: &T) -> Result<()>
	where
		T: Serialize + ?Sized,
	{
		let request = match DispatchRequest::new(category, operation, payload) {
			Ok(request) => request,
			Err(err) => {
				let reason = TrackerError::from(err);
				self.diagnostics.rejected(&reason);
				return Err(reason);
			}
		};

		debug!(category = %category, operation = %operation, "Dispatching analytics request");
		let url = request.url(&self.config.base_url);
		self.send(url).await;
		Ok(())
	}

	async fn send(&mut self, url: String) {
		if self.config.dispatch_mode == DispatchMode::Detached {
			if let Ok(runtime) = tokio::runtime::Handle::try_current() {
				let transport = Arc::clone(&self.transport);
				self.in_flight.retain(|handle| !handle.is_finished());
				self.in_flight.push(runtime.spawn(async move {
					if let Err(e) = transport.send(&url).await {
						debug!(error = %e, "Analytics request failed");
					}
				}));
				return;
			}
		}

		if let Err(e) = self.transport.send(&url).await {
			debug!(error = %e, "Analytics request failed");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::device::{AppManifest, DeviceSnapshot, StaticDeviceInfo};
	use crate::diagnostics::{Diagnostic, DiagnosticKind};
	use async_trait::async_trait;
	use mixlite_core::{DisplaySize, PlatformDetails};
	use proptest::prelude::*;
	use std::sync::Mutex;

	#[derive(Clone, Default)]
	struct RecordingTransport {
		urls: Arc<Mutex<Vec<String>>>,
	}

	impl RecordingTransport {
		fn urls(&self) -> Vec<String> {
			self.urls.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl Transport for RecordingTransport {
		async fn send(&self, url: &str) -> Result<()> {
			self.urls.lock().unwrap().push(url.to_string());
			Ok(())
		}
	}

	#[derive(Clone, Default)]
	struct RecordingSink {
		lines: Arc<Mutex<Vec<Diagnostic>>>,
	}

	impl RecordingSink {
		fn lines(&self) -> Vec<Diagnostic> {
			self.lines.lock().unwrap().clone()
		}
	}

	impl DiagnosticSink for RecordingSink {
		fn emit(&self, diagnostic: &Diagnostic) {
			self.lines.lock().unwrap().push(diagnostic.clone());
		}
	}

	struct FailingProvider;

	#[async_trait]
	impl DeviceInfoProvider for FailingProvider {
		fn snapshot(&self) -> Result<DeviceSnapshot> {
			Ok(snapshot(Some(DistinctId::from(1))))
		}

		async fn user_agent(&self) -> Result<String> {
			Err(TrackerError::Provider("web view unavailable".to_string()))
		}
	}

	fn snapshot(device_id: Option<DistinctId>) -> DeviceSnapshot {
		DeviceSnapshot {
			device_id,
			device_name: "Test Phone".to_string(),
			manifest: AppManifest {
				name: "App".to_string(),
				slug: "app".to_string(),
				version: "1.0.0".to_string(),
			},
			display: DisplaySize::new(375.0, 812.0),
			platform: PlatformDetails::Other,
		}
	}

	fn tracker(token: Option<&str>) -> (Tracker, RecordingTransport, RecordingSink) {
		let transport = RecordingTransport::default();
		let sink = RecordingSink::default();
		let mut builder = Tracker::builder()
			.environment(Environment::Development)
			.dispatch_mode(DispatchMode::Await)
			.device_info(StaticDeviceInfo::new(
				snapshot(Some(DistinctId::from(123))),
				"UA",
			))
			.transport(transport.clone())
			.diagnostic_sink(sink.clone());
		if let Some(token) = token {
			builder = builder.token(token);
		}
		(builder.build().unwrap(), transport, sink)
	}

	#[test]
	fn test_builder_requires_device_info() {
		let result = TrackerBuilder::new().token("T").build();
		assert!(matches!(result, Err(TrackerError::MissingDeviceInfo)));
	}

	#[test]
	fn test_builder_normalizes_base_url() {
		let tracker = Tracker::builder()
			.token("T")
			.base_url("https://api-eu.mixpanel.com/")
			.device_info(StaticDeviceInfo::new(snapshot(None), "UA"))
			.transport(RecordingTransport::default())
			.build()
			.unwrap();
		assert_eq!(tracker.config().base_url, "https://api-eu.mixpanel.com");
	}

	#[test]
	fn test_empty_token_is_not_configured() {
		let (tracker, _, sink) = tracker(Some(""));
		assert!(!tracker.is_configured());
		assert_eq!(sink.lines()[0].message, NO_TOKEN_MESSAGE);
	}

	#[test]
	fn test_builder_uses_http_transport_by_default() {
		let result = Tracker::builder()
			.token("T")
			.device_info(StaticDeviceInfo::new(snapshot(None), "UA"))
			.build();
		assert!(result.is_ok());
	}

	#[test]
	fn test_initialize_sets_identity_and_readiness() {
		let (mut tracker, _, _) = tracker(Some("T"));
		assert!(!tracker.is_ready());

		tokio_test::block_on(tracker.initialize()).unwrap();

		assert!(tracker.is_ready());
		assert_eq!(tracker.device_id(), Some(&DistinctId::from(123)));
		assert_eq!(tracker.current_user_id(), Some(&DistinctId::from(123)));
		let enrichment = tracker.enrichment().unwrap();
		assert_eq!(enrichment.screen_size, "375x812");
		assert_eq!(enrichment.user_agent, "UA");
	}

	#[tokio::test]
	async fn test_initialize_without_token_is_diagnostic_only() {
		let (mut tracker, _, sink) = tracker(None);
		tracker.initialize().await.unwrap();

		assert!(!tracker.is_ready());
		let lines = sink.lines();
		let not_sent = lines
			.iter()
			.rfind(|line| line.kind == DiagnosticKind::NotSent)
			.unwrap();
		assert_eq!(
			not_sent.message,
			format!("Not sent to Mixpanel: init: {NO_TOKEN_MESSAGE}")
		);
		assert_eq!(lines.last().unwrap().kind, DiagnosticKind::Hint);
	}

	#[test]
	fn test_gate_checks_token_then_readiness() {
		let (unconfigured, _, _) = tracker(None);
		assert!(matches!(unconfigured.gate(), Err(TrackerError::NotConfigured)));

		let (mut tracker, _, _) = tracker(Some("T"));
		assert!(matches!(tracker.gate(), Err(TrackerError::NotReady)));

		tokio_test::block_on(tracker.initialize()).unwrap();
		assert_eq!(tracker.gate().unwrap().expose(), "T");
	}

	#[tokio::test]
	async fn test_provider_failure_propagates_and_leaves_tracker_not_ready() {
		let mut tracker = Tracker::builder()
			.token("T")
			.device_info(FailingProvider)
			.transport(RecordingTransport::default())
			.build()
			.unwrap();

		let result = tracker.initialize().await;
		assert!(matches!(result, Err(TrackerError::Provider(_))));
		assert!(!tracker.is_ready());
		assert!(tracker.current_user_id().is_none());
	}

	#[tokio::test]
	async fn test_track_drains_buffer_and_counts_sent() {
		let (mut tracker, transport, _) = tracker(Some("T"));
		tracker.initialize().await.unwrap();

		let outcome = tracker
			.track("Viewed", Properties::new().insert("a", 1), "live-event")
			.await;

		assert_eq!(outcome.requests(), 1);
		assert_eq!(tracker.pending_len(), 0);
		assert_eq!(tracker.events_sent(), 1);
		assert_eq!(transport.urls().len(), 1);
	}

	#[tokio::test]
	async fn test_track_drains_backlog_in_arrival_order() {
		let (mut tracker, transport, _) = tracker(Some("T"));
		tracker.initialize().await.unwrap();

		for name in ["first", "second"] {
			tracker.session.pending.push_back(PendingEvent {
				name: name.to_string(),
				properties: Map::new(),
			});
		}
		let outcome = tracker.track("third", Properties::new(), "live-event").await;

		assert_eq!(outcome.requests(), 3);
		let names: Vec<String> = transport
			.urls()
			.iter()
			.map(|url| {
				let (_, request) = DispatchRequest::parse(url).unwrap();
				request.decode().unwrap()["event"]
					.as_str()
					.unwrap()
					.to_string()
			})
			.collect();
		assert_eq!(names, ["first", "second", "third"]);
	}

	#[tokio::test]
	async fn test_track_with_invalid_operation_drains_without_sending() {
		let (mut tracker, transport, sink) = tracker(Some("T"));
		tracker.initialize().await.unwrap();

		let outcome = tracker.track("Viewed", Properties::new(), "profile-set").await;

		assert!(matches!(
			outcome.diversion(),
			Some(TrackerError::InvalidOperation { .. })
		));
		assert_eq!(tracker.pending_len(), 0);
		assert_eq!(tracker.events_sent(), 0);
		assert!(transport.urls().is_empty());
		let last = sink.lines().pop().unwrap();
		assert!(last.message.contains("'profile-set'"));
		assert!(last.message.contains("track endpoint"));
	}

	#[tokio::test]
	async fn test_reset_without_device_id_clears_identity() {
		let transport = RecordingTransport::default();
		let mut tracker = Tracker::builder()
			.token("T")
			.dispatch_mode(DispatchMode::Await)
			.device_info(StaticDeviceInfo::new(snapshot(None), "UA"))
			.transport(transport.clone())
			.build()
			.unwrap();
		tracker.initialize().await.unwrap();
		tracker.identify("user-1").await;
		assert_eq!(transport.urls().len(), 1);

		let outcome = tracker.reset().await;

		assert!(matches!(
			outcome.diversion(),
			Some(TrackerError::UnknownUser { .. })
		));
		assert!(tracker.current_user_id().is_none());
		assert_eq!(transport.urls().len(), 1);
	}

	#[tokio::test]
	async fn test_detached_dispatch_is_awaited_by_flush() {
		let transport = RecordingTransport::default();
		let mut tracker = Tracker::builder()
			.token("T")
			.dispatch_mode(DispatchMode::Detached)
			.device_info(StaticDeviceInfo::new(snapshot(None), "UA"))
			.transport(transport.clone())
			.build()
			.unwrap();
		tracker.initialize().await.unwrap();

		let outcome = tracker.identify("user-1").await;
		assert!(outcome.is_dispatched());

		tracker.flush().await;
		assert_eq!(tracker.in_flight_len(), 0);
		assert_eq!(transport.urls().len(), 1);
	}

	#[test]
	fn test_detached_dispatch_without_runtime_sends_inline() {
		let transport = RecordingTransport::default();
		let mut tracker = Tracker::builder()
			.token("T")
			.device_info(StaticDeviceInfo::new(snapshot(None), "UA"))
			.transport(transport.clone())
			.build()
			.unwrap();

		futures::executor::block_on(async {
			assert!(tokio::runtime::Handle::try_current().is_err());
			tracker.initialize().await.unwrap();
			tracker.identify("user-1").await;
		});

		assert!(tracker.in_flight.is_empty());
		assert_eq!(transport.urls().len(), 1);
	}

	#[test]
	fn test_flush_before_runtime_exit_keeps_detached_sends() {
		let transport = RecordingTransport::default();
		let mut tracker = Tracker::builder()
			.token("T")
			.device_info(StaticDeviceInfo::new(snapshot(None), "UA"))
			.transport(transport.clone())
			.build()
			.unwrap();

		tokio_test::block_on(async {
			tracker.initialize().await.unwrap();
			tracker.identify("user-1").await;
			tracker.track("Viewed", Properties::new(), "live-event").await;
			tracker.flush().await;
		});

		assert_eq!(transport.urls().len(), 2);
	}

	proptest! {
		#[test]
		fn profile_operations_dispatch_only_when_listed(operation in "[a-z-]{1,24}") {
			let (mut tracker, transport, _) = tracker(Some("T"));
			tokio_test::block_on(tracker.initialize()).unwrap();

			let outcome = tokio_test::block_on(tracker.update_profile(&operation, Properties::new()));
			let listed = Category::Engage.allows(&operation);

			prop_assert_eq!(outcome.is_dispatched(), listed);
			prop_assert_eq!(transport.urls().len(), usize::from(listed));
		}
	}
}
