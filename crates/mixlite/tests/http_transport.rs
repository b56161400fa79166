// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP transport tests against a local mock collector.

use std::time::Duration;

use mixlite::{
	AppManifest, DeviceSnapshot, DispatchMode, DisplaySize, DistinctId, Environment,
	HttpTransport, PlatformDetails, Properties, StaticDeviceInfo, Tracker, TrackerConfigLayer,
	TrackerError, Transport,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

fn android_device() -> StaticDeviceInfo {
	StaticDeviceInfo::new(
		DeviceSnapshot {
			device_id: Some(DistinctId::from("device-abc")),
			device_name: "Pixel".to_string(),
			manifest: AppManifest {
				name: "App".to_string(),
				slug: "app".to_string(),
				version: "1.0.0".to_string(),
			},
			display: DisplaySize::new(412.0, 915.0),
			platform: PlatformDetails::Other,
		},
		"Mozilla/5.0 (Linux; Android 14)",
	)
}

/// The fragment (`#operation?data=...`) never leaves the client, so the
/// collector only sees a bare GET on the category path.
#[tokio::test]
async fn dispatch_reaches_category_path_without_fragment() {
	init_tracing();
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/track"))
		.respond_with(ResponseTemplate::new(200))
		.expect(2)
		.mount(&server)
		.await;

	let config = TrackerConfigLayer {
		base_url: Some(format!("{}/", server.uri())),
		environment: Some(Environment::Development),
		dispatch_mode: Some(DispatchMode::Await),
		request_timeout_secs: Some(5),
		..Default::default()
	}
	.finalize();

	let mut tracker = Tracker::builder()
		.config(config)
		.token("T")
		.device_info(android_device())
		.build()
		.unwrap();
	tracker.initialize().await.unwrap();

	tracker
		.track("Viewed", Properties::new().insert("a", 1), "live-event")
		.await;
	tracker.identify("user-1").await;

	let requests = server.received_requests().await.unwrap();
	assert_eq!(requests.len(), 2);
	for request in &requests {
		assert_eq!(request.url.path(), "/track");
		assert!(request.url.query().is_none());
		assert!(request.url.fragment().is_none());
	}
}

#[tokio::test]
async fn profile_update_hits_engage_path() {
	init_tracing();
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/engage"))
		.respond_with(ResponseTemplate::new(200))
		.expect(1)
		.mount(&server)
		.await;

	let mut tracker = Tracker::builder()
		.token("T")
		.base_url(server.uri())
		.dispatch_mode(DispatchMode::Await)
		.device_info(android_device())
		.build()
		.unwrap();
	tracker.initialize().await.unwrap();

	let outcome = tracker
		.update_profile("profile-set", Properties::new().insert("plan", "pro"))
		.await;
	assert!(outcome.is_dispatched());
}

#[tokio::test]
async fn server_error_is_reported_by_transport() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(503))
		.mount(&server)
		.await;

	let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
	let result = transport
		.send(&format!("{}/track#live-event?data=e30=", server.uri()))
		.await;

	assert!(matches!(result, Err(TrackerError::ServerError { status: 503 })));
}

#[tokio::test]
async fn server_error_does_not_surface_from_tracking_call() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(500))
		.expect(1)
		.mount(&server)
		.await;

	let mut tracker = Tracker::builder()
		.token("T")
		.base_url(server.uri())
		.dispatch_mode(DispatchMode::Await)
		.device_info(android_device())
		.build()
		.unwrap();
	tracker.initialize().await.unwrap();

	let outcome = tracker.track("Viewed", Properties::new(), "live-event").await;

	assert!(outcome.is_dispatched());
	assert_eq!(tracker.events_sent(), 1);
}

#[tokio::test]
async fn detached_dispatch_completes_in_background() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/groups"))
		.respond_with(ResponseTemplate::new(200))
		.expect(1)
		.mount(&server)
		.await;

	let mut tracker = Tracker::builder()
		.token("T")
		.base_url(server.uri())
		.dispatch_mode(DispatchMode::Detached)
		.device_info(android_device())
		.build()
		.unwrap();
	tracker.initialize().await.unwrap();

	let outcome = tracker
		.update_group("group-set", Properties::new().insert("$group_key", "company"))
		.await;
	assert!(outcome.is_dispatched());

	tracker.flush().await;
	assert_eq!(tracker.in_flight_len(), 0);
	assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/track"))
		.and(header("user-agent", "Mozilla/5.0 (Linux; Android 14)"))
		.respond_with(ResponseTemplate::new(200))
		.expect(1)
		.mount(&server)
		.await;

	let device = android_device();
	let transport = HttpTransport::with_user_agent(
		"Mozilla/5.0 (Linux; Android 14)",
		Duration::from_secs(5),
	)
	.unwrap();
	let mut tracker = Tracker::builder()
		.token("T")
		.base_url(server.uri())
		.dispatch_mode(DispatchMode::Await)
		.device_info(device)
		.transport(transport)
		.build()
		.unwrap();
	tracker.initialize().await.unwrap();

	tracker.track("Viewed", Properties::new(), "live-event").await;
}
