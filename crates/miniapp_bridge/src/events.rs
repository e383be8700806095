//! Named bridge events and the callback registry behind them.
//!
//! Event names form a closed set ([`EventKind`]). The string-keyed entry points
//! (`*_named`) silently ignore names outside that set, so no new event category can ever be
//! created at runtime.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    panic::{catch_unwind, AssertUnwindSafe},
    rc::Rc,
};

use serde::{Deserialize, Serialize};

/// Every event the bridge can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// The hosting viewport changed height.
    ViewportChanged,
    /// The color scheme flipped.
    ThemeChanged,
    /// The main button was pressed.
    MainButtonClicked,
    /// The back button was pressed.
    BackButtonClicked,
    /// The settings button was pressed.
    SettingsButtonClicked,
    /// An invoice opened with `openInvoice` was closed.
    InvoiceClosed,
    /// A popup was closed.
    PopupClosed,
    /// The QR scanner produced text.
    QrTextReceived,
    /// Clipboard text was read.
    ClipboardTextReceived,
}

impl EventKind {
    /// All event kinds, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::ViewportChanged,
        Self::ThemeChanged,
        Self::MainButtonClicked,
        Self::BackButtonClicked,
        Self::SettingsButtonClicked,
        Self::InvoiceClosed,
        Self::PopupClosed,
        Self::QrTextReceived,
        Self::ClipboardTextReceived,
    ];

    /// Returns the bridge's wire name for this event.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ViewportChanged => "viewportChanged",
            Self::ThemeChanged => "themeChanged",
            Self::MainButtonClicked => "mainButtonClicked",
            Self::BackButtonClicked => "backButtonClicked",
            Self::SettingsButtonClicked => "settingsButtonClicked",
            Self::InvoiceClosed => "invoiceClosed",
            Self::PopupClosed => "popupClosed",
            Self::QrTextReceived => "qrTextReceived",
            Self::ClipboardTextReceived => "clipboardTextReceived",
        }
    }

    /// Resolves a wire name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a `viewportChanged` event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportChanged {
    /// New viewport height in CSS pixels.
    pub height: f64,
    /// Whether the viewport has settled. Always `true` in this emulator.
    pub is_state_stable: bool,
}

/// Settlement state reported by `invoiceClosed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Paid. The only status this emulator reports.
    Paid,
    /// Cancelled by the user.
    Cancelled,
    /// Payment failed.
    Failed,
    /// Awaiting settlement.
    Pending,
}

/// Payload of an `invoiceClosed` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceClosed {
    /// Invoice URL passed to `openInvoice`.
    pub url: String,
    /// Settlement state.
    pub status: InvoiceStatus,
}

/// Data passed to every handler of one dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    /// No payload (`themeChanged`, button clicks).
    Empty,
    /// `viewportChanged`.
    Viewport(ViewportChanged),
    /// `invoiceClosed`.
    Invoice(InvoiceClosed),
    /// `popupClosed`.
    Popup {
        /// Identifier of the pressed button, if any.
        button_id: Option<String>,
    },
    /// `qrTextReceived` and `clipboardTextReceived`.
    Text(String),
}

impl EventPayload {
    /// Returns the text carried by a [`EventPayload::Text`] payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

type HandlerFn = dyn Fn(&EventPayload) -> Result<(), String>;

/// Shareable callback handle registered against an event.
///
/// Identity is by handle: clones of one handle are the same callback, two handles built from
/// equal closures are not. Unsubscribing therefore requires a clone of the subscribed handle.
///
/// Panics are caught only on unwinding targets. On `wasm32-unknown-unknown` a panic aborts the
/// instance, so in the browser per-callback isolation covers [`EventHandler::fallible`] errors.
#[derive(Clone)]
pub struct EventHandler(Rc<HandlerFn>);

impl EventHandler {
    /// Wraps an infallible callback.
    pub fn new(callback: impl Fn(&EventPayload) + 'static) -> Self {
        Self(Rc::new(move |payload| {
            callback(payload);
            Ok(())
        }))
    }

    /// Wraps a callback that may report failure; failures are logged by the registry.
    pub fn fallible(callback: impl Fn(&EventPayload) -> Result<(), String> + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Returns whether both handles refer to the same callback.
    pub fn same_handler(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0).cast::<()>() == Rc::as_ptr(&other.0).cast::<()>()
    }

    fn invoke(&self, payload: &EventPayload) -> Result<(), String> {
        match catch_unwind(AssertUnwindSafe(|| (self.0)(payload))) {
            Ok(result) => result,
            Err(_) => Err("handler panicked".to_string()),
        }
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventHandler")
            .field(&Rc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Outcome of one dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Handlers called.
    pub invoked: usize,
    /// Handlers that returned an error or panicked.
    pub failed: usize,
}

/// Ordered callback lists keyed by [`EventKind`]. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    handlers: Rc<RefCell<BTreeMap<EventKind, Vec<EventHandler>>>>,
}

impl EventRegistry {
    /// Appends `handler` to `kind`'s list. Duplicates are kept.
    pub fn subscribe(&self, kind: EventKind, handler: EventHandler) {
        self.handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    /// Removes the first registration of `handler` under `kind`.
    ///
    /// Returns whether a registration was removed.
    pub fn unsubscribe(&self, kind: EventKind, handler: &EventHandler) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let Some(list) = handlers.get_mut(&kind) else {
            return false;
        };
        match list.iter().position(|h| h.same_handler(handler)) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Calls every handler registered for `kind`, in registration order, with `payload`.
    ///
    /// The handler list is snapshotted first, so handlers may subscribe or unsubscribe while
    /// running; changes take effect from the next dispatch. A failing handler is logged and the
    /// remaining handlers still run. A panicking handler counts as failed only where panics
    /// unwind; in the browser it aborts the instance.
    pub fn dispatch(&self, kind: EventKind, payload: &EventPayload) -> DispatchReport {
        let snapshot = self
            .handlers
            .borrow()
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        let mut report = DispatchReport::default();
        for handler in &snapshot {
            report.invoked += 1;
            if let Err(err) = handler.invoke(payload) {
                report.failed += 1;
                log::warn!("{kind} handler failed: {err}");
            }
        }
        report
    }

    /// Returns how many registrations `kind` currently has.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.borrow().get(&kind).map_or(0, Vec::len)
    }

    /// String-keyed [`Self::subscribe`]. Unknown names are ignored and return `false`.
    pub fn subscribe_named(&self, name: &str, handler: EventHandler) -> bool {
        match EventKind::parse(name) {
            Some(kind) => {
                self.subscribe(kind, handler);
                true
            }
            None => {
                log::debug!("ignoring subscription to unknown event `{name}`");
                false
            }
        }
    }

    /// String-keyed [`Self::unsubscribe`]. Unknown names are ignored and return `false`.
    pub fn unsubscribe_named(&self, name: &str, handler: &EventHandler) -> bool {
        EventKind::parse(name).is_some_and(|kind| self.unsubscribe(kind, handler))
    }

    /// String-keyed [`Self::dispatch`]. Unknown names dispatch nothing.
    pub fn dispatch_named(&self, name: &str, payload: &EventPayload) -> DispatchReport {
        EventKind::parse(name)
            .map(|kind| self.dispatch(kind, payload))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> EventHandler {
        let log = Rc::clone(log);
        EventHandler::new(move |_| log.borrow_mut().push(tag.to_string()))
    }

    #[test]
    fn wire_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(EventKind::parse("mainButtonPressed"), None);
        assert_eq!(
            serde_json::to_string(&EventKind::QrTextReceived).expect("json"),
            "\"qrTextReceived\""
        );
    }

    #[test]
    fn duplicate_subscriptions_fire_twice_and_unsubscribe_removes_one() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = EventRegistry::default();
        let handler = recorder(&log, "a");
        registry.subscribe(EventKind::ThemeChanged, handler.clone());
        registry.subscribe(EventKind::ThemeChanged, handler.clone());

        registry.dispatch(EventKind::ThemeChanged, &EventPayload::Empty);
        assert_eq!(log.borrow().len(), 2);

        assert!(registry.unsubscribe(EventKind::ThemeChanged, &handler));
        assert_eq!(registry.handler_count(EventKind::ThemeChanged), 1);
        registry.dispatch(EventKind::ThemeChanged, &EventPayload::Empty);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn unsubscribe_matches_by_handle_not_by_behavior() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = EventRegistry::default();
        registry.subscribe(EventKind::MainButtonClicked, recorder(&log, "a"));

        assert!(!registry.unsubscribe(EventKind::MainButtonClicked, &recorder(&log, "a")));
        assert!(!registry.unsubscribe(EventKind::BackButtonClicked, &recorder(&log, "a")));
        assert_eq!(registry.handler_count(EventKind::MainButtonClicked), 1);
    }

    #[test]
    fn failing_handlers_do_not_stop_dispatch() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = EventRegistry::default();
        registry.subscribe(
            EventKind::QrTextReceived,
            EventHandler::fallible(|_| Err("boom".to_string())),
        );
        registry.subscribe(
            EventKind::QrTextReceived,
            EventHandler::new(|_| panic!("handler blew up")),
        );
        registry.subscribe(EventKind::QrTextReceived, recorder(&log, "survivor"));

        let report = registry.dispatch(
            EventKind::QrTextReceived,
            &EventPayload::Text("https://t.me/example".to_string()),
        );

        assert_eq!(
            report,
            DispatchReport {
                invoked: 3,
                failed: 2
            }
        );
        assert_eq!(*log.borrow(), vec!["survivor".to_string()]);
    }

    #[test]
    fn handlers_may_mutate_registry_during_dispatch() {
        let registry = EventRegistry::default();
        let inner_registry = registry.clone();
        let late_calls = Rc::new(RefCell::new(0));
        let late_calls_in = Rc::clone(&late_calls);
        registry.subscribe(
            EventKind::PopupClosed,
            EventHandler::new(move |_| {
                let late_calls = Rc::clone(&late_calls_in);
                inner_registry.subscribe(
                    EventKind::PopupClosed,
                    EventHandler::new(move |_| *late_calls.borrow_mut() += 1),
                );
            }),
        );

        let first = registry.dispatch(EventKind::PopupClosed, &EventPayload::Empty);
        assert_eq!(first.invoked, 1);
        assert_eq!(*late_calls.borrow(), 0);
        assert_eq!(registry.handler_count(EventKind::PopupClosed), 2);
    }

    #[test]
    fn unknown_names_are_noops() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = EventRegistry::default();
        let handler = recorder(&log, "x");

        assert!(!registry.subscribe_named("customEvent", handler.clone()));
        assert!(!registry.unsubscribe_named("customEvent", &handler));
        assert_eq!(
            registry.dispatch_named("customEvent", &EventPayload::Empty),
            DispatchReport::default()
        );
        assert!(EventKind::ALL
            .iter()
            .all(|kind| registry.handler_count(*kind) == 0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn named_entry_points_reach_the_typed_lists() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = EventRegistry::default();
        let handler = recorder(&log, "named");

        assert!(registry.subscribe_named("settingsButtonClicked", handler.clone()));
        registry.dispatch(EventKind::SettingsButtonClicked, &EventPayload::Empty);
        assert!(registry.unsubscribe_named("settingsButtonClicked", &handler));
        registry.dispatch_named("settingsButtonClicked", &EventPayload::Empty);

        assert_eq!(*log.borrow(), vec!["named".to_string()]);
    }

    #[test]
    fn viewport_payload_serializes_with_wire_field_names() {
        let payload = EventPayload::Viewport(ViewportChanged {
            height: 640.0,
            is_state_stable: true,
        });
        assert_eq!(
            serde_json::to_value(&payload).expect("json"),
            serde_json::json!({"height": 640.0, "isStateStable": true})
        );
    }
}
