//! Browser entrypoint: builds the emulated bridge, publishes it, and mounts the mock control
//! panel.

mod controls;

pub use controls::{format_location_report, MockControls};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use miniapp_bridge::{install, BridgeConfig, WebApp};

    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);

    let services = bridge_host_web::build_host_services();
    log::info!(
        "bridge host strategy: {} ({:?})",
        bridge_host_web::host_strategy_name(),
        services.capabilities
    );
    let app = match WebApp::new(BridgeConfig::default(), services).and_then(install) {
        Ok(app) => app,
        Err(err) => {
            log::error!("bridge setup failed: {err}");
            return;
        }
    };

    let resized = app.clone();
    if let Err(err) =
        bridge_host_web::install_resize_listener(move |height| resized.handle_viewport_change(height))
    {
        log::warn!("viewport tracking unavailable: {err}");
    }

    leptos::mount_to_body(move || leptos::view! { <MockControls app=app /> });

    if let Err(err) = bridge_host_web::dispatch_document_event("telegram-web-app-ready") {
        log::warn!("ready notification failed: {err}");
    }
}
