//! Haptic feedback stubs. Nothing vibrates; signals are logged and kept for inspection.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

/// Impact strength for [`HapticFeedback::impact_occurred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Light tap.
    Light,
    /// Medium tap.
    Medium,
    /// Heavy tap.
    Heavy,
    /// Rigid tap.
    Rigid,
    /// Soft tap.
    Soft,
}

/// Outcome type for [`HapticFeedback::notification_occurred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Failure.
    Error,
    /// Success.
    Success,
    /// Warning.
    Warning,
}

/// One haptic request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticSignal {
    /// `impactOccurred`.
    Impact(ImpactStyle),
    /// `notificationOccurred`.
    Notification(NotificationType),
    /// `selectionChanged`.
    SelectionChanged,
}

/// Haptic feedback surface. Clones share the signal history.
#[derive(Debug, Clone, Default)]
pub struct HapticFeedback {
    history: Rc<RefCell<Vec<HapticSignal>>>,
}

impl HapticFeedback {
    /// Requests an impact.
    pub fn impact_occurred(&self, style: ImpactStyle) -> &Self {
        log::info!("Haptic impact: {style:?}");
        self.record(HapticSignal::Impact(style))
    }

    /// Requests a notification pattern.
    pub fn notification_occurred(&self, kind: NotificationType) -> &Self {
        log::info!("Haptic notification: {kind:?}");
        self.record(HapticSignal::Notification(kind))
    }

    /// Requests a selection tick.
    pub fn selection_changed(&self) -> &Self {
        log::info!("Haptic selection changed");
        self.record(HapticSignal::SelectionChanged)
    }

    /// Signals requested so far, oldest first.
    pub fn history(&self) -> Vec<HapticSignal> {
        self.history.borrow().clone()
    }

    fn record(&self, signal: HapticSignal) -> &Self {
        self.history.borrow_mut().push(signal);
        self
    }
}
