//! The composed bridge handle published to the page as `Telegram.WebApp`.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use bridge_host::{unix_time_secs_now, HostCapabilities, HostServices, HostStrategy};

use crate::{
    buttons::{HeaderButton, HeaderButtonKind, MainButton},
    cloud_storage::CloudStorage,
    config::BridgeConfig,
    events::{
        DispatchReport, EventHandler, EventKind, EventPayload, EventRegistry, InvoiceClosed,
        InvoiceStatus, ViewportChanged,
    },
    haptics::HapticFeedback,
    identity::WebAppInitData,
    location::LocationManager,
    popup::{PopupParams, PopupResult, ScanQrPopupParams},
    theme::{ColorScheme, Theme, ThemeParams},
    BridgeError, BridgeFuture,
};

const QR_PROMPT: &str = "Enter mock QR code text:";
const QR_PROMPT_DEFAULT: &str = "https://t.me/example";
const CLIPBOARD_PROMPT: &str = "Mock clipboard (clipboard API may be unavailable):";
const CLIPBOARD_PROMPT_DEFAULT: &str = "Mock clipboard text";

#[derive(Debug, Clone, Copy)]
struct Viewport {
    height: f64,
    stable_height: f64,
}

#[derive(Debug, Clone, Default)]
struct Chrome {
    is_ready: bool,
    is_expanded: bool,
    is_closing_confirmation_enabled: bool,
    close_requested: bool,
    header_color: String,
    background_color: String,
}

struct WebAppInner {
    config: BridgeConfig,
    init_data: String,
    init_data_unsafe: WebAppInitData,
    events: EventRegistry,
    theme: RefCell<Theme>,
    viewport: Cell<Viewport>,
    chrome: RefCell<Chrome>,
    main_button: MainButton,
    back_button: HeaderButton,
    settings_button: HeaderButton,
    haptic_feedback: HapticFeedback,
    cloud_storage: CloudStorage,
    location_manager: LocationManager,
    services: HostServices,
}

/// The emulated host bridge (`Telegram.WebApp`).
///
/// A cheap-to-clone handle: clones are the same bridge. Build one per page at startup and
/// publish it with [`crate::install`]; it lives until the page is torn down.
///
/// Methods fall in two groups. The bridge surface (`ready`, `main_button`, `show_popup`, …) is
/// what a Mini App calls. The host side ([`Self::toggle_theme`],
/// [`Self::handle_viewport_change`], [`Self::trigger_event`]) stands in for the native host
/// and is driven by the control panel and the page's resize listener.
#[derive(Clone)]
pub struct WebApp {
    inner: Rc<WebAppInner>,
}

impl WebApp {
    /// Builds the bridge over the injected host services.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InitDataEncode`] if the configured identity cannot be encoded.
    pub fn new(config: BridgeConfig, services: HostServices) -> Result<Self, BridgeError> {
        let init_data_unsafe = WebAppInitData {
            query_id: config.query_id.clone(),
            user: config.user.clone(),
            auth_date: config.auth_date.unwrap_or_else(unix_time_secs_now),
            hash: config.hash.clone(),
        };
        let init_data = init_data_unsafe.to_query_string()?;

        let events = EventRegistry::default();
        let theme = Theme::new(config.color_scheme);
        let height = services.page.viewport_height();

        let inner = WebAppInner {
            init_data,
            init_data_unsafe,
            main_button: MainButton::new(events.clone(), theme.params()),
            back_button: HeaderButton::new(HeaderButtonKind::Back, events.clone()),
            settings_button: HeaderButton::new(HeaderButtonKind::Settings, events.clone()),
            haptic_feedback: HapticFeedback::default(),
            cloud_storage: CloudStorage::new(services.storage.clone(), &config.storage_prefix),
            location_manager: LocationManager::new(
                services.geolocation.clone(),
                services.dialogs.clone(),
                config.fallback_location,
            )
            .with_device_geolocation(services.capabilities.device_geolocation),
            events,
            theme: RefCell::new(theme),
            viewport: Cell::new(Viewport {
                height,
                stable_height: height,
            }),
            chrome: RefCell::new(Chrome {
                header_color: config.header_color.clone(),
                background_color: config.background_color.clone(),
                ..Chrome::default()
            }),
            services,
            config,
        };
        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// Raw init-data query string (`initData`).
    pub fn init_data(&self) -> &str {
        &self.inner.init_data
    }

    /// Decoded init data (`initDataUnsafe`). Its hash is not validated.
    pub fn init_data_unsafe(&self) -> &WebAppInitData {
        &self.inner.init_data_unsafe
    }

    /// Reported bridge API version.
    pub fn version(&self) -> &str {
        &self.inner.config.version
    }

    /// Reported host platform token.
    pub fn platform(&self) -> &str {
        &self.inner.config.platform
    }

    /// Strategy of the injected host services.
    pub fn host_strategy(&self) -> HostStrategy {
        self.inner.services.host_strategy
    }

    /// Capability posture of the injected host services.
    pub fn host_capabilities(&self) -> HostCapabilities {
        self.inner.services.capabilities
    }

    /// Current color scheme.
    pub fn color_scheme(&self) -> ColorScheme {
        self.inner.theme.borrow().color_scheme()
    }

    /// Current theme tokens.
    pub fn theme_params(&self) -> ThemeParams {
        self.inner.theme.borrow().params().clone()
    }

    /// Current viewport height.
    pub fn viewport_height(&self) -> f64 {
        self.inner.viewport.get().height
    }

    /// Last stable viewport height. Equal to [`Self::viewport_height`] in this emulator.
    pub fn viewport_stable_height(&self) -> f64 {
        self.inner.viewport.get().stable_height
    }

    /// Whether [`Self::ready`] has been called.
    pub fn is_ready(&self) -> bool {
        self.inner.chrome.borrow().is_ready
    }

    /// Whether [`Self::expand`] has been called.
    pub fn is_expanded(&self) -> bool {
        self.inner.chrome.borrow().is_expanded
    }

    /// Whether [`Self::close`] has been called.
    pub fn is_close_requested(&self) -> bool {
        self.inner.chrome.borrow().close_requested
    }

    /// Whether closing asks for confirmation.
    pub fn is_closing_confirmation_enabled(&self) -> bool {
        self.inner.chrome.borrow().is_closing_confirmation_enabled
    }

    /// Current header color.
    pub fn header_color(&self) -> String {
        self.inner.chrome.borrow().header_color.clone()
    }

    /// Current background color.
    pub fn background_color(&self) -> String {
        self.inner.chrome.borrow().background_color.clone()
    }

    /// Signals that the Mini App has finished loading.
    pub fn ready(&self) {
        self.inner.chrome.borrow_mut().is_ready = true;
        log::info!("WebApp ready called");
    }

    /// Expands the Mini App to full height.
    pub fn expand(&self) {
        self.inner.chrome.borrow_mut().is_expanded = true;
        log::info!("WebApp expanded");
    }

    /// Asks the host to close the Mini App. Only recorded by the emulator.
    pub fn close(&self) {
        self.inner.chrome.borrow_mut().close_requested = true;
        log::info!("WebApp close called");
    }

    /// Makes closing ask for confirmation.
    pub fn enable_closing_confirmation(&self) {
        self.inner.chrome.borrow_mut().is_closing_confirmation_enabled = true;
        log::info!("Closing confirmation enabled");
    }

    /// Makes closing immediate.
    pub fn disable_closing_confirmation(&self) {
        self.inner.chrome.borrow_mut().is_closing_confirmation_enabled = false;
        log::info!("Closing confirmation disabled");
    }

    /// Sets the header color.
    pub fn set_header_color(&self, color: &str) {
        self.inner.chrome.borrow_mut().header_color = color.to_string();
        log::info!("Header color set to {color}");
    }

    /// Sets the background color and paints the hosting page with it.
    pub fn set_background_color(&self, color: &str) {
        self.inner.chrome.borrow_mut().background_color = color.to_string();
        self.inner.services.page.apply_background_color(color);
        log::info!("Background color set to {color}");
    }

    /// Main button (`MainButton`).
    pub fn main_button(&self) -> &MainButton {
        &self.inner.main_button
    }

    /// Back button (`BackButton`).
    pub fn back_button(&self) -> &HeaderButton {
        &self.inner.back_button
    }

    /// Settings button (`SettingsButton`).
    pub fn settings_button(&self) -> &HeaderButton {
        &self.inner.settings_button
    }

    /// Haptic feedback (`HapticFeedback`).
    pub fn haptic_feedback(&self) -> &HapticFeedback {
        &self.inner.haptic_feedback
    }

    /// Cloud store (`CloudStorage`).
    pub fn cloud_storage(&self) -> &CloudStorage {
        &self.inner.cloud_storage
    }

    /// Location capability (`LocationManager`).
    pub fn location_manager(&self) -> &LocationManager {
        &self.inner.location_manager
    }

    /// Shows a popup through the page's alert dialog.
    ///
    /// Resolves with the first configured button's id regardless of how the dialog was
    /// dismissed. Never fails.
    pub fn show_popup<'a>(&'a self, params: &'a PopupParams) -> BridgeFuture<'a, PopupResult> {
        Box::pin(async move {
            log::info!("Show popup: {params:?}");
            self.inner.services.dialogs.alert(&params.alert_text()).await;
            PopupResult {
                button_id: params.buttons.first().and_then(|button| button.id.clone()),
            }
        })
    }

    /// Shows an alert and resolves once it is dismissed. Never fails.
    pub fn show_alert<'a>(&'a self, message: &'a str) -> BridgeFuture<'a, ()> {
        Box::pin(async move {
            log::info!("Show alert: {message}");
            self.inner.services.dialogs.alert(message).await;
        })
    }

    /// Asks a yes/no question. Resolves `false` when the host cannot ask. Never fails.
    pub fn show_confirm<'a>(&'a self, message: &'a str) -> BridgeFuture<'a, bool> {
        Box::pin(async move {
            log::info!("Show confirm: {message}");
            self.inner.services.dialogs.confirm(message).await
        })
    }

    fn open_in_new_context(&self, url: &str) {
        if let Err(err) = self.inner.services.external_urls.open_in_new_context(url) {
            log::warn!("opening {url} failed: {err}");
        }
    }

    /// Opens an external link in a new browsing context.
    pub fn open_link(&self, url: &str) {
        log::info!("Opening link: {url}");
        self.open_in_new_context(url);
    }

    /// Opens a Telegram link in a new browsing context.
    pub fn open_telegram_link(&self, url: &str) {
        log::info!("Opening Telegram link: {url}");
        self.open_in_new_context(url);
    }

    /// Opens an invoice and simulates it being paid.
    ///
    /// `callback`, if given, is appended to the `invoiceClosed` handlers and the URL is opened
    /// immediately. The returned future waits the configured delay, then dispatches
    /// `invoiceClosed` with status `paid`; drive it (for example by spawning it) to deliver the
    /// notification. Never fails.
    pub fn open_invoice<'a>(
        &'a self,
        url: &'a str,
        callback: Option<EventHandler>,
    ) -> BridgeFuture<'a, ()> {
        log::info!("Opening invoice: {url}");
        if let Some(callback) = callback {
            self.inner.events.subscribe(EventKind::InvoiceClosed, callback);
        }
        self.open_in_new_context(url);

        let delay = Duration::from_millis(u64::from(self.inner.config.invoice_close_delay_ms));
        Box::pin(async move {
            self.inner.services.timers.sleep(delay).await;
            self.trigger_event(
                EventKind::InvoiceClosed,
                &EventPayload::Invoice(InvoiceClosed {
                    url: url.to_string(),
                    status: InvoiceStatus::Paid,
                }),
            );
        })
    }

    /// Simulates the QR scanner: after the configured delay the human is asked for the code
    /// text, and non-empty text is dispatched on `qrTextReceived`. Never fails.
    pub fn show_scan_qr_popup<'a>(&'a self, params: &'a ScanQrPopupParams) -> BridgeFuture<'a, ()> {
        Box::pin(async move {
            log::info!("Show QR popup: {params:?}");
            let delay = Duration::from_millis(u64::from(self.inner.config.qr_prompt_delay_ms));
            self.inner.services.timers.sleep(delay).await;
            let text = self
                .inner
                .services
                .dialogs
                .prompt(QR_PROMPT, QR_PROMPT_DEFAULT)
                .await
                .filter(|text| !text.is_empty());
            if let Some(text) = text {
                self.trigger_event(EventKind::QrTextReceived, &EventPayload::Text(text));
            }
        })
    }

    /// Closes the QR scanner. Only logged by the emulator.
    pub fn close_scan_qr_popup(&self) {
        log::info!("Close QR popup");
    }

    /// Reads clipboard text, passes it to `callback`, and dispatches `clipboardTextReceived`.
    ///
    /// When the clipboard cannot be read the human is asked for substitute text; if they cancel
    /// or leave it empty, neither the callback nor the event fires. Never fails.
    pub fn read_text_from_clipboard<'a>(
        &'a self,
        callback: impl FnOnce(&str) + 'a,
    ) -> BridgeFuture<'a, ()> {
        Box::pin(async move {
            log::info!("Read text from clipboard");
            let services = &self.inner.services;
            let text = match services.clipboard.read_text().await {
                Ok(text) => Some(text),
                Err(err) => {
                    log::warn!("Failed to read clipboard: {err}");
                    services
                        .dialogs
                        .prompt(CLIPBOARD_PROMPT, CLIPBOARD_PROMPT_DEFAULT)
                        .await
                        .filter(|text| !text.is_empty())
                }
            };
            if let Some(text) = text {
                callback(&text);
                self.trigger_event(EventKind::ClipboardTextReceived, &EventPayload::Text(text));
            }
        })
    }

    /// Requests permission to message the user. Always granted.
    pub fn request_write_access(&self) -> BridgeFuture<'_, bool> {
        Box::pin(async {
            log::info!("Requesting write access");
            true
        })
    }

    /// Requests the user's phone contact. Always granted.
    pub fn request_contact(&self) -> BridgeFuture<'_, bool> {
        Box::pin(async {
            log::info!("Requesting contact");
            true
        })
    }

    /// Sends data to the bot. One-way: no acknowledgment.
    pub fn send_data(&self, data: &str) {
        log::info!("Sending data to bot: {data}");
    }

    /// Switches to inline mode with `query`. Only logged by the emulator.
    pub fn switch_inline_query(&self, query: &str, chat_types: &[&str]) {
        log::info!("Switch inline query: {query} {chat_types:?}");
    }

    /// Subscribes `handler` to the event named `name`. Unknown names are ignored.
    pub fn on_event(&self, name: &str, handler: EventHandler) -> &Self {
        self.inner.events.subscribe_named(name, handler);
        self
    }

    /// Removes one registration of `handler` from the event named `name`. Unknown names are
    /// ignored.
    pub fn off_event(&self, name: &str, handler: &EventHandler) -> &Self {
        self.inner.events.unsubscribe_named(name, handler);
        self
    }

    /// Shared event registry.
    pub fn events(&self) -> &EventRegistry {
        &self.inner.events
    }

    /// Host side: dispatches `kind` to its handlers.
    pub fn trigger_event(&self, kind: EventKind, payload: &EventPayload) -> DispatchReport {
        self.inner.events.dispatch(kind, payload)
    }

    /// Host side: flips the color scheme and dispatches `themeChanged`. Returns the new scheme.
    pub fn toggle_theme(&self) -> ColorScheme {
        let scheme = {
            let mut theme = self.inner.theme.borrow_mut();
            theme.toggle();
            theme.color_scheme()
        };
        log::info!("Theme toggled to {}", scheme.as_str());
        self.trigger_event(EventKind::ThemeChanged, &EventPayload::Empty);
        scheme
    }

    /// Host side: records a new viewport height and dispatches `viewportChanged` (always
    /// reported stable).
    pub fn handle_viewport_change(&self, height: f64) {
        self.inner.viewport.set(Viewport {
            height,
            stable_height: height,
        });
        self.trigger_event(
            EventKind::ViewportChanged,
            &EventPayload::Viewport(ViewportChanged {
                height,
                is_state_stable: true,
            }),
        );
    }
}
