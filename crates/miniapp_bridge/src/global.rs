//! Page-wide publication slot for the single bridge instance.
//!
//! A page installs exactly one [`WebApp`] at startup. Embedding code that finds no installed
//! bridge must run in its degraded, bridge-free mode.

use std::cell::RefCell;

use crate::{BridgeError, WebApp};

thread_local! {
    static INSTALLED_BRIDGE: RefCell<Option<WebApp>> = const { RefCell::new(None) };
}

/// Publishes `app` as the page's bridge and returns a handle to it.
///
/// # Errors
///
/// Returns [`BridgeError::AlreadyInstalled`] if a bridge is already published; the existing
/// bridge is kept.
pub fn install(app: WebApp) -> Result<WebApp, BridgeError> {
    INSTALLED_BRIDGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(BridgeError::AlreadyInstalled);
        }
        *slot = Some(app.clone());
        log::info!("Telegram WebApp Mock initialized");
        Ok(app)
    })
}

/// Returns the published bridge, or `None` when the page runs without one.
pub fn installed() -> Option<WebApp> {
    INSTALLED_BRIDGE.with(|slot| slot.borrow().clone())
}

#[cfg(test)]
mod tests {
    use bridge_host::HostServices;

    use super::*;
    use crate::BridgeConfig;

    fn bridge() -> WebApp {
        WebApp::new(BridgeConfig::default(), HostServices::headless()).expect("bridge")
    }

    #[test]
    fn absent_until_installed_then_single_instance() {
        assert!(installed().is_none());

        let app = install(bridge()).expect("first install");
        app.main_button().set_text("Installed");
        assert_eq!(
            installed().expect("installed").main_button().text(),
            "Installed"
        );

        assert!(matches!(
            install(bridge()),
            Err(BridgeError::AlreadyInstalled)
        ));
        assert_eq!(
            installed().expect("installed").main_button().text(),
            "Installed"
        );
    }
}
