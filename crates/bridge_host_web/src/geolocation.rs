//! Device geolocation adapter backed by `navigator.geolocation` and the Permissions API.

use bridge_host::{
    DevicePosition, GeolocationError, GeolocationFuture, GeolocationService, PermissionState,
};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser geolocation adapter. Each call performs a fresh `getCurrentPosition`.
pub struct WebGeolocationService;

impl GeolocationService for WebGeolocationService {
    fn current_position<'a>(
        &'a self,
    ) -> GeolocationFuture<'a, Result<DevicePosition, GeolocationError>> {
        Box::pin(async move { bridge::current_position().await })
    }

    fn permission_state<'a>(&'a self) -> GeolocationFuture<'a, Result<PermissionState, String>> {
        Box::pin(async move { bridge::geolocation_permission_state().await })
    }
}
