// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sends a few calls using configuration from `MIXLITE_*` variables.
//!
//! ```sh
//! MIXLITE_TOKEN=... RUST_LOG=mixlite=debug cargo run -p mixlite --example track
//! ```

use mixlite::{
	AppManifest, DeviceSnapshot, DispatchMode, DisplaySize, PlatformDetails, Properties,
	StaticDeviceInfo, Tracker, TrackerConfigLayer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let mut layer = TrackerConfigLayer {
		dispatch_mode: Some(DispatchMode::Await),
		..Default::default()
	};
	layer.merge(TrackerConfigLayer::from_env()?);

	let device = StaticDeviceInfo::new(
		DeviceSnapshot {
			device_id: Some("demo-device".into()),
			device_name: "Demo Device".to_string(),
			manifest: AppManifest {
				name: "Demo".to_string(),
				slug: "demo".to_string(),
				version: env!("CARGO_PKG_VERSION").to_string(),
			},
			display: DisplaySize::new(1080.0, 1920.0),
			platform: PlatformDetails::Other,
		},
		mixlite_common_http::user_agent(),
	);

	let mut tracker = Tracker::builder()
		.config(layer.finalize())
		.device_info(device)
		.build()?;
	tracker.initialize().await?;

	tracker
		.track("Demo Started", Properties::new().insert("source", "example"), "live-event")
		.await;
	tracker.identify("demo-user").await;
	tracker
		.update_profile("profile-set", Properties::new().insert("$set", serde_json::json!({"plan": "free"})))
		.await;
	tracker.reset().await;

	tracing::info!(events_sent = tracker.events_sent(), "Done");
	Ok(())
}
