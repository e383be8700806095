use std::rc::Rc;

use bridge_host::{HostCapabilities, HostServices, HostStrategy};

use crate::{
    WebClipboardService, WebDialogService, WebExternalUrlService, WebGeolocationService,
    WebLocalStorage, WebPageService, WebTimerService,
};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Returns the capability posture for the compile-time selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Builds the host-service bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            storage: Rc::new(WebLocalStorage),
            geolocation: Rc::new(WebGeolocationService),
            dialogs: Rc::new(WebDialogService),
            clipboard: Rc::new(WebClipboardService),
            external_urls: Rc::new(WebExternalUrlService),
            page: Rc::new(WebPageService),
            timers: Rc::new(WebTimerService),
            capabilities: host_capabilities(),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices::headless(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_matches_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(services.capabilities, host_capabilities());
        assert_eq!(host_strategy_name(), services.host_strategy.as_str());
    }
}
