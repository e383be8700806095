use leptos::*;
use miniapp_bridge::{LocationSample, WebApp};

const PANEL_STYLE: &str = "position: fixed; top: 10px; right: 10px; background-color: rgba(0,0,0,0.1); padding: 10px; border-radius: 5px; z-index: 9999; font-size: 12px;";
const BUTTON_STYLE: &str = "display: block; margin: 5px 0; padding: 5px;";

/// Alert text shown after a location request from the control panel.
pub fn format_location_report(sample: &LocationSample) -> String {
    format!(
        "Location received:\nLat: {}\nLng: {}\nAccuracy: {}m\nProvider: {}",
        sample.latitude,
        sample.longitude,
        sample.accuracy,
        sample.provider.as_str()
    )
}

/// Floating panel that plays the native host: flips the theme, presses buttons, and exercises
/// location.
#[component]
pub fn MockControls(app: WebApp) -> impl IntoView {
    let theme_app = app.clone();
    let main_app = app.clone();
    let back_app = app.clone();
    let location_app = app;

    view! {
        <div class="mock-telegram-controls" style=PANEL_STYLE>
            <button type="button" style=BUTTON_STYLE on:click=move |_| {
                theme_app.toggle_theme();
            }>
                "Toggle Theme"
            </button>
            <button type="button" style=BUTTON_STYLE on:click=move |_| {
                main_app.main_button().trigger_click();
            }>
                "Trigger Main Button"
            </button>
            <button type="button" style=BUTTON_STYLE on:click=move |_| {
                back_app.back_button().trigger_click();
            }>
                "Trigger Back Button"
            </button>
            <div style="margin-top: 10px; color: #666;">"Mock Telegram WebApp"</div>
            <button type="button" style=BUTTON_STYLE on:click=move |_| {
                let app = location_app.clone();
                spawn_local(async move {
                    let sample = app.location_manager().request_location().await;
                    app.show_alert(&format_location_report(&sample)).await;
                });
            }>
                "Test Location Request"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use miniapp_bridge::LocationProvider;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn location_report_lists_coordinates_and_provider() {
        let sample = LocationSample {
            latitude: 37.7749,
            longitude: -122.4194,
            provider: LocationProvider::Synthetic,
            accuracy: 100.0,
            timestamp: 1_698_154_157_000,
        };

        assert_eq!(
            format_location_report(&sample),
            "Location received:\nLat: 37.7749\nLng: -122.4194\nAccuracy: 100m\nProvider: synthetic"
        );
    }
}
