//! Device geolocation contracts and non-browser adapters.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`GeolocationService`] async methods.
pub type GeolocationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Raw position reported by the device geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePosition {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Accuracy radius in meters.
    pub accuracy: f64,
    /// Acquisition time as unix milliseconds.
    pub timestamp_ms: u64,
}

/// Reason a device position could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// The host exposes no geolocation capability at all.
    #[error("geolocation is not supported by this host")]
    Unsupported,
    /// The user or host policy refused access.
    #[error("geolocation permission denied: {0}")]
    PermissionDenied(String),
    /// The device could not determine a position.
    #[error("geolocation position unavailable: {0}")]
    PositionUnavailable(String),
    /// The acquisition did not finish in time.
    #[error("geolocation request timed out: {0}")]
    Timeout(String),
    /// Any other host failure.
    #[error("geolocation request failed: {0}")]
    Failed(String),
}

impl GeolocationError {
    /// Maps a W3C `GeolocationPositionError.code` to a typed error.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            1 => Self::PermissionDenied(message),
            2 => Self::PositionUnavailable(message),
            3 => Self::Timeout(message),
            _ => Self::Failed(message),
        }
    }
}

/// Geolocation permission posture as reported by the host's permission API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Access is already granted.
    Granted,
    /// The host will ask the user on the next acquisition.
    Prompt,
    /// Access is refused.
    Denied,
}

impl PermissionState {
    /// Parses the permission API's state token (`granted`, `prompt`, `denied`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "granted" => Some(Self::Granted),
            "prompt" => Some(Self::Prompt),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

/// Host service for one-shot device geolocation.
pub trait GeolocationService {
    /// Attempts a fresh position acquisition. Implementations must not cache results.
    fn current_position<'a>(
        &'a self,
    ) -> GeolocationFuture<'a, Result<DevicePosition, GeolocationError>>;

    /// Queries the geolocation permission posture.
    ///
    /// Returns `Err` when the host has no permission API to ask.
    fn permission_state<'a>(&'a self) -> GeolocationFuture<'a, Result<PermissionState, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Geolocation service for hosts without any geolocation capability.
pub struct UnsupportedGeolocationService;

impl GeolocationService for UnsupportedGeolocationService {
    fn current_position<'a>(
        &'a self,
    ) -> GeolocationFuture<'a, Result<DevicePosition, GeolocationError>> {
        Box::pin(async { Err(GeolocationError::Unsupported) })
    }

    fn permission_state<'a>(&'a self) -> GeolocationFuture<'a, Result<PermissionState, String>> {
        Box::pin(async { Err("permissions API unavailable".to_string()) })
    }
}

#[derive(Debug, Clone)]
/// Scripted geolocation service that answers every request with the same outcome.
///
/// Clones share the request counter, which lets tests observe that each request is a fresh
/// acquisition.
pub struct FixedGeolocationService {
    outcome: Result<DevicePosition, GeolocationError>,
    permission: Option<PermissionState>,
    requests: Rc<Cell<usize>>,
}

impl FixedGeolocationService {
    /// Service that always reports `position`, with permission already granted.
    pub fn granted(position: DevicePosition) -> Self {
        Self {
            outcome: Ok(position),
            permission: Some(PermissionState::Granted),
            requests: Rc::default(),
        }
    }

    /// Service whose acquisitions always fail with `error`.
    pub fn failing(error: GeolocationError) -> Self {
        let permission = match &error {
            GeolocationError::PermissionDenied(_) => Some(PermissionState::Denied),
            _ => None,
        };
        Self {
            outcome: Err(error),
            permission,
            requests: Rc::default(),
        }
    }

    /// Overrides the reported permission posture; `None` models a missing permission API.
    pub fn with_permission(mut self, permission: Option<PermissionState>) -> Self {
        self.permission = permission;
        self
    }

    /// Returns how many acquisitions have been attempted.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl GeolocationService for FixedGeolocationService {
    fn current_position<'a>(
        &'a self,
    ) -> GeolocationFuture<'a, Result<DevicePosition, GeolocationError>> {
        Box::pin(async move {
            self.requests.set(self.requests.get() + 1);
            self.outcome.clone()
        })
    }

    fn permission_state<'a>(&'a self) -> GeolocationFuture<'a, Result<PermissionState, String>> {
        Box::pin(async move {
            self.permission
                .ok_or_else(|| "permissions API unavailable".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn position() -> DevicePosition {
        DevicePosition {
            latitude: 51.5,
            longitude: -0.12,
            accuracy: 12.0,
            timestamp_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn error_codes_map_to_typed_errors() {
        assert_eq!(
            GeolocationError::from_code(1, "User denied"),
            GeolocationError::PermissionDenied("User denied".to_string())
        );
        assert_eq!(
            GeolocationError::from_code(2, "no fix"),
            GeolocationError::PositionUnavailable("no fix".to_string())
        );
        assert_eq!(
            GeolocationError::from_code(3, "slow"),
            GeolocationError::Timeout("slow".to_string())
        );
        assert_eq!(
            GeolocationError::from_code(9, "odd"),
            GeolocationError::Failed("odd".to_string())
        );
    }

    #[test]
    fn permission_tokens_parse() {
        assert_eq!(PermissionState::parse("granted"), Some(PermissionState::Granted));
        assert_eq!(PermissionState::parse("prompt"), Some(PermissionState::Prompt));
        assert_eq!(PermissionState::parse("denied"), Some(PermissionState::Denied));
        assert_eq!(PermissionState::parse("maybe"), None);
    }

    #[test]
    fn fixed_service_counts_every_request() {
        let service = FixedGeolocationService::granted(position());
        let observer = service.clone();
        let service_obj: &dyn GeolocationService = &service;

        assert_eq!(block_on(service_obj.current_position()), Ok(position()));
        assert_eq!(block_on(service_obj.current_position()), Ok(position()));
        assert_eq!(observer.requests(), 2);
        assert_eq!(
            block_on(service_obj.permission_state()),
            Ok(PermissionState::Granted)
        );
    }

    #[test]
    fn denied_service_reports_denied_permission() {
        let service =
            FixedGeolocationService::failing(GeolocationError::PermissionDenied("no".into()));
        assert_eq!(
            block_on(service.permission_state()),
            Ok(PermissionState::Denied)
        );
        assert!(block_on(service.current_position()).is_err());
    }

    #[test]
    fn unsupported_service_fails_both_queries() {
        let service = UnsupportedGeolocationService;
        assert_eq!(
            block_on(service.current_position()),
            Err(GeolocationError::Unsupported)
        );
        assert!(block_on(service.permission_state()).is_err());
    }
}
