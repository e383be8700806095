//! Main, back, and settings buttons.
//!
//! Each button owns its [`ButtonState`]; callers read snapshots and mutate only through the
//! button's own methods. Mutators return `&Self` so calls can be chained, mirroring the host
//! bridge's fluent style.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    events::{DispatchReport, EventHandler, EventKind, EventPayload, EventRegistry},
    theme::ThemeParams,
};

/// Snapshot of a button's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    /// Shown to the user.
    pub is_visible: bool,
    /// Accepts presses.
    pub is_active: bool,
    /// Shows a progress indicator.
    pub is_progress_visible: bool,
    /// Label.
    pub text: String,
    /// Fill color.
    pub color: String,
    /// Label color.
    pub text_color: String,
}

impl ButtonState {
    fn hidden(text: &str, color: &str, text_color: &str) -> Self {
        Self {
            is_visible: false,
            is_active: true,
            is_progress_visible: false,
            text: text.to_string(),
            color: color.to_string(),
            text_color: text_color.to_string(),
        }
    }
}

/// Partial main-button update (`setParams`). Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MainButtonParams {
    /// New label.
    pub text: Option<String>,
    /// New fill color.
    pub color: Option<String>,
    /// New label color.
    pub text_color: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// New visibility.
    pub is_visible: Option<bool>,
}

impl MainButtonParams {
    /// Extracts the recognized fields from an arbitrary JSON value.
    ///
    /// Fields with the wrong type are dropped one by one; a non-object yields an empty update.
    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let flag = |key: &str| value.get(key).and_then(Value::as_bool);
        Self {
            text: text("text"),
            color: text("color"),
            text_color: text("text_color"),
            is_active: flag("is_active"),
            is_visible: flag("is_visible"),
        }
    }
}

/// Bottom main button.
#[derive(Debug, Clone)]
pub struct MainButton {
    state: Rc<RefCell<ButtonState>>,
    events: EventRegistry,
}

impl MainButton {
    pub(crate) fn new(events: EventRegistry, theme: &ThemeParams) -> Self {
        Self {
            state: Rc::new(RefCell::new(ButtonState::hidden(
                "CONTINUE",
                &theme.button_color,
                &theme.button_text_color,
            ))),
            events,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ButtonState {
        self.state.borrow().clone()
    }

    /// Whether the button is shown.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible
    }

    /// Whether the button accepts presses.
    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active
    }

    /// Whether the progress indicator is shown.
    pub fn is_progress_visible(&self) -> bool {
        self.state.borrow().is_progress_visible
    }

    /// Current label.
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Sets the label.
    pub fn set_text(&self, text: impl Into<String>) -> &Self {
        let text = text.into();
        log::info!("MainButton text set to: {text}");
        self.state.borrow_mut().text = text;
        self
    }

    /// Registers a click handler.
    pub fn on_click(&self, handler: EventHandler) -> &Self {
        self.events.subscribe(EventKind::MainButtonClicked, handler);
        self
    }

    /// Removes one registration of a click handler.
    pub fn off_click(&self, handler: &EventHandler) -> &Self {
        self.events.unsubscribe(EventKind::MainButtonClicked, handler);
        self
    }

    /// Shows the button.
    pub fn show(&self) -> &Self {
        self.state.borrow_mut().is_visible = true;
        log::info!("MainButton shown");
        self
    }

    /// Hides the button.
    pub fn hide(&self) -> &Self {
        self.state.borrow_mut().is_visible = false;
        log::info!("MainButton hidden");
        self
    }

    /// Makes the button accept presses.
    pub fn enable(&self) -> &Self {
        self.state.borrow_mut().is_active = true;
        self
    }

    /// Makes the button ignore presses.
    pub fn disable(&self) -> &Self {
        self.state.borrow_mut().is_active = false;
        self
    }

    /// Shows the progress indicator. Unless `leave_active`, the button is also deactivated.
    pub fn show_progress(&self, leave_active: bool) -> &Self {
        let mut state = self.state.borrow_mut();
        state.is_progress_visible = true;
        if !leave_active {
            state.is_active = false;
        }
        drop(state);
        self
    }

    /// Hides the progress indicator. The active flag is left as is.
    pub fn hide_progress(&self) -> &Self {
        self.state.borrow_mut().is_progress_visible = false;
        self
    }

    /// Applies a partial update. Empty strings count as absent.
    pub fn set_params(&self, params: &MainButtonParams) -> &Self {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        let mut state = self.state.borrow_mut();
        if let Some(text) = non_empty(&params.text) {
            state.text = text;
        }
        if let Some(color) = non_empty(&params.color) {
            state.color = color;
        }
        if let Some(text_color) = non_empty(&params.text_color) {
            state.text_color = text_color;
        }
        if let Some(is_active) = params.is_active {
            state.is_active = is_active;
        }
        if let Some(is_visible) = params.is_visible {
            state.is_visible = is_visible;
        }
        drop(state);
        self
    }

    /// [`Self::set_params`] over an untyped JSON update; mistyped fields are skipped.
    pub fn set_params_json(&self, params: &Value) -> &Self {
        self.set_params(&MainButtonParams::from_json(params))
    }

    /// Host side: simulates a press by dispatching `mainButtonClicked`.
    pub fn trigger_click(&self) -> DispatchReport {
        self.events
            .dispatch(EventKind::MainButtonClicked, &EventPayload::Empty)
    }
}

/// Which header button a [`HeaderButton`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButtonKind {
    /// Back navigation.
    Back,
    /// Settings menu entry.
    Settings,
}

impl HeaderButtonKind {
    fn click_event(self) -> EventKind {
        match self {
            Self::Back => EventKind::BackButtonClicked,
            Self::Settings => EventKind::SettingsButtonClicked,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Back => "BackButton",
            Self::Settings => "SettingsButton",
        }
    }
}

/// Back or settings button; only visibility and clicks are modeled.
#[derive(Debug, Clone)]
pub struct HeaderButton {
    kind: HeaderButtonKind,
    state: Rc<RefCell<ButtonState>>,
    events: EventRegistry,
}

impl HeaderButton {
    pub(crate) fn new(kind: HeaderButtonKind, events: EventRegistry) -> Self {
        Self {
            kind,
            state: Rc::new(RefCell::new(ButtonState::hidden("", "", ""))),
            events,
        }
    }

    /// Which button this is.
    pub fn kind(&self) -> HeaderButtonKind {
        self.kind
    }

    /// Current state snapshot.
    pub fn state(&self) -> ButtonState {
        self.state.borrow().clone()
    }

    /// Whether the button is shown.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible
    }

    /// Registers a click handler.
    pub fn on_click(&self, handler: EventHandler) -> &Self {
        self.events.subscribe(self.kind.click_event(), handler);
        self
    }

    /// Removes one registration of a click handler.
    pub fn off_click(&self, handler: &EventHandler) -> &Self {
        self.events.unsubscribe(self.kind.click_event(), handler);
        self
    }

    /// Shows the button.
    pub fn show(&self) -> &Self {
        self.state.borrow_mut().is_visible = true;
        log::info!("{} shown", self.kind.label());
        self
    }

    /// Hides the button.
    pub fn hide(&self) -> &Self {
        self.state.borrow_mut().is_visible = false;
        log::info!("{} hidden", self.kind.label());
        self
    }

    /// Host side: simulates a press by dispatching the button's click event.
    pub fn trigger_click(&self) -> DispatchReport {
        self.events
            .dispatch(self.kind.click_event(), &EventPayload::Empty)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn main_button() -> MainButton {
        MainButton::new(EventRegistry::default(), &ThemeParams::light())
    }

    #[test]
    fn main_button_starts_hidden_active_and_labelled_continue() {
        assert_eq!(
            main_button().state(),
            ButtonState {
                is_visible: false,
                is_active: true,
                is_progress_visible: false,
                text: "CONTINUE".to_string(),
                color: "#31a6f7".to_string(),
                text_color: "#ffffff".to_string(),
            }
        );
    }

    #[test]
    fn mutators_chain() {
        let button = main_button();
        button.set_text("Pay").show().disable().enable().hide().show();
        let state = button.state();
        assert_eq!(state.text, "Pay");
        assert!(state.is_visible);
        assert!(state.is_active);
    }

    #[test]
    fn progress_deactivates_unless_asked_to_leave_active() {
        let button = main_button();
        button.show_progress(false);
        assert!(button.is_progress_visible());
        assert!(!button.is_active());

        button.hide_progress().enable().show_progress(true);
        assert!(button.is_progress_visible());
        assert!(button.is_active());

        button.hide_progress();
        assert!(!button.is_progress_visible());
        assert!(button.is_active());
    }

    #[test]
    fn set_params_touches_only_present_fields() {
        let button = main_button();
        button.show();
        let before = button.state();
        button.set_params(&MainButtonParams {
            text: Some("Go".to_string()),
            ..MainButtonParams::default()
        });

        assert_eq!(
            button.state(),
            ButtonState {
                text: "Go".to_string(),
                ..before
            }
        );
    }

    #[test]
    fn set_params_skips_empty_strings() {
        let button = main_button();
        button.set_params(&MainButtonParams {
            text: Some(String::new()),
            color: Some("#ff0000".to_string()),
            is_visible: Some(true),
            ..MainButtonParams::default()
        });
        let state = button.state();
        assert_eq!(state.text, "CONTINUE");
        assert_eq!(state.color, "#ff0000");
        assert!(state.is_visible);
    }

    #[test]
    fn set_params_json_ignores_mistyped_fields() {
        let button = main_button();
        button.set_params_json(&json!({
            "text": 42,
            "text_color": "#000000",
            "is_active": "no",
            "is_visible": true,
            "unrelated": [1, 2]
        }));
        let state = button.state();
        assert_eq!(state.text, "CONTINUE");
        assert_eq!(state.text_color, "#000000");
        assert!(state.is_active);
        assert!(state.is_visible);

        button.set_params_json(&json!("not an object"));
        assert_eq!(button.state(), state);
    }

    #[test]
    fn trigger_click_reaches_registered_handlers_until_removed() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let handler = EventHandler::new(move |_| counter.set(counter.get() + 1));
        let button = main_button();

        button.on_click(handler.clone());
        assert_eq!(button.trigger_click().invoked, 1);
        button.off_click(&handler);
        assert_eq!(button.trigger_click().invoked, 0);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn header_buttons_dispatch_their_own_events() {
        let events = EventRegistry::default();
        let back = HeaderButton::new(HeaderButtonKind::Back, events.clone());
        let settings = HeaderButton::new(HeaderButtonKind::Settings, events.clone());
        back.on_click(EventHandler::new(|_| {}));

        assert_eq!(events.handler_count(EventKind::BackButtonClicked), 1);
        assert_eq!(events.handler_count(EventKind::SettingsButtonClicked), 0);
        assert_eq!(settings.trigger_click().invoked, 0);
        assert_eq!(back.trigger_click().invoked, 1);

        back.show();
        assert!(back.is_visible());
        assert!(!settings.is_visible());
        settings.show().hide();
        assert!(!settings.state().is_visible);
    }
}
