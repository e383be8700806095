//! Location requests with a synthetic fallback.
//!
//! [`LocationManager::request_location`] tries the device first, unless the host reports no
//! device geolocation, and falls back to a fixed coordinate on any failure, so it always
//! resolves with a sample. Nothing is cached: every request is a fresh acquisition.

use std::rc::Rc;

use bridge_host::{
    unix_time_ms_now, CapabilityStatus, DialogService, GeolocationService, PermissionState,
};
use serde::{Deserialize, Serialize};

use crate::{config::FallbackLocation, BridgeFuture};

/// Where a [`LocationSample`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationProvider {
    /// Real device geolocation.
    Device,
    /// Fixed fallback coordinate.
    Synthetic,
}

impl LocationProvider {
    /// Wire token (`device` / `synthetic`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Synthetic => "synthetic",
        }
    }
}

/// One location reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Source of the reading.
    pub provider: LocationProvider,
    /// Accuracy radius in meters.
    pub accuracy: f64,
    /// Acquisition time as unix milliseconds.
    pub timestamp: u64,
}

/// Location capability (`LocationManager`).
#[derive(Clone)]
pub struct LocationManager {
    geolocation: Rc<dyn GeolocationService>,
    dialogs: Rc<dyn DialogService>,
    device_geolocation: CapabilityStatus,
    fallback: FallbackLocation,
}

impl LocationManager {
    /// Builds a manager over the host's geolocation, asking through `dialogs` when the host
    /// cannot report permission state.
    pub fn new(
        geolocation: Rc<dyn GeolocationService>,
        dialogs: Rc<dyn DialogService>,
        fallback: FallbackLocation,
    ) -> Self {
        Self {
            geolocation,
            dialogs,
            device_geolocation: CapabilityStatus::Available,
            fallback,
        }
    }

    /// Records the host's device-geolocation posture. With
    /// [`CapabilityStatus::Unavailable`] requests skip the device and resolve synthetic.
    pub fn with_device_geolocation(mut self, status: CapabilityStatus) -> Self {
        self.device_geolocation = status;
        self
    }

    fn synthetic(&self) -> LocationSample {
        LocationSample {
            latitude: self.fallback.latitude,
            longitude: self.fallback.longitude,
            provider: LocationProvider::Synthetic,
            accuracy: self.fallback.accuracy,
            timestamp: unix_time_ms_now(),
        }
    }

    /// Requests the current location. Never fails: any device error yields the synthetic
    /// fallback sample.
    pub fn request_location(&self) -> BridgeFuture<'_, LocationSample> {
        Box::pin(async move {
            log::info!("Location requested");
            if self.device_geolocation == CapabilityStatus::Unavailable {
                log::debug!("host has no device geolocation; using synthetic location");
                return self.synthetic();
            }
            match self.geolocation.current_position().await {
                Ok(position) => {
                    let sample = LocationSample {
                        latitude: position.latitude,
                        longitude: position.longitude,
                        provider: LocationProvider::Device,
                        accuracy: position.accuracy,
                        timestamp: position.timestamp_ms,
                    };
                    log::info!("Location obtained: {sample:?}");
                    sample
                }
                Err(err) => {
                    let sample = self.synthetic();
                    log::warn!("device location unavailable ({err}); using synthetic location");
                    sample
                }
            }
        })
    }

    /// Asks for location permission. Resolves whether it is (now) granted; never fails.
    ///
    /// A `prompt` posture is settled by attempting one acquisition. Without a permission API
    /// the human is asked directly.
    pub fn request_user_location_permission(&self) -> BridgeFuture<'_, bool> {
        Box::pin(async move {
            log::info!("Requesting user location permission");
            match self.geolocation.permission_state().await {
                Ok(PermissionState::Granted) => true,
                Ok(PermissionState::Prompt) => self.geolocation.current_position().await.is_ok(),
                Ok(PermissionState::Denied) => false,
                Err(err) => {
                    log::debug!("permission query unavailable ({err}); asking directly");
                    self.dialogs
                        .confirm("Allow this site to access your location?")
                        .await
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use bridge_host::{
        DevicePosition, DialogRecord, FixedGeolocationService, GeolocationError,
        ScriptedDialogService, UnsupportedGeolocationService,
    };
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    const LONDON: DevicePosition = DevicePosition {
        latitude: 51.5074,
        longitude: -0.1278,
        accuracy: 8.0,
        timestamp_ms: 1_700_000_000_000,
    };

    fn manager(geolocation: impl GeolocationService + 'static) -> LocationManager {
        LocationManager::new(
            Rc::new(geolocation),
            Rc::new(ScriptedDialogService::default()),
            FallbackLocation::default(),
        )
    }

    #[test]
    fn device_position_is_wrapped_as_device_sample() {
        let sample = block_on(manager(FixedGeolocationService::granted(LONDON)).request_location());
        assert_eq!(
            sample,
            LocationSample {
                latitude: 51.5074,
                longitude: -0.1278,
                provider: LocationProvider::Device,
                accuracy: 8.0,
                timestamp: 1_700_000_000_000,
            }
        );
    }

    #[test]
    fn every_failure_falls_back_to_synthetic() {
        for error in [
            GeolocationError::PermissionDenied("denied".into()),
            GeolocationError::PositionUnavailable("no fix".into()),
            GeolocationError::Timeout("slow".into()),
        ] {
            let sample = block_on(manager(FixedGeolocationService::failing(error)).request_location());
            assert_eq!(sample.provider, LocationProvider::Synthetic);
            assert_eq!(sample.latitude, 37.7749);
            assert_eq!(sample.longitude, -122.4194);
            assert_eq!(sample.accuracy, 100.0);
        }
    }

    #[test]
    fn each_request_is_a_fresh_acquisition() {
        let geolocation = FixedGeolocationService::granted(LONDON);
        let manager = manager(geolocation.clone());
        block_on(manager.request_location());
        block_on(manager.request_location());
        assert_eq!(geolocation.requests(), 2);
    }

    #[test]
    fn unavailable_posture_skips_the_device() {
        let geolocation = FixedGeolocationService::granted(LONDON);
        let manager = manager(geolocation.clone())
            .with_device_geolocation(CapabilityStatus::Unavailable);

        let sample = block_on(manager.request_location());

        assert_eq!(sample.provider, LocationProvider::Synthetic);
        assert_eq!(geolocation.requests(), 0);
    }

    #[test]
    fn user_activation_posture_still_asks_the_device() {
        let geolocation = FixedGeolocationService::granted(LONDON);
        let manager = manager(geolocation.clone())
            .with_device_geolocation(CapabilityStatus::RequiresUserActivation);

        let sample = block_on(manager.request_location());

        assert_eq!(sample.provider, LocationProvider::Device);
        assert_eq!(geolocation.requests(), 1);
    }

    #[test]
    fn permission_follows_reported_state() {
        assert!(block_on(
            manager(FixedGeolocationService::granted(LONDON)).request_user_location_permission()
        ));
        assert!(!block_on(
            manager(FixedGeolocationService::failing(
                GeolocationError::PermissionDenied("no".into())
            ))
            .request_user_location_permission()
        ));
    }

    #[test]
    fn prompt_state_is_settled_by_one_acquisition() {
        let granting = FixedGeolocationService::granted(LONDON)
            .with_permission(Some(PermissionState::Prompt));
        assert!(block_on(
            manager(granting.clone()).request_user_location_permission()
        ));
        assert_eq!(granting.requests(), 1);

        let refusing = FixedGeolocationService::failing(GeolocationError::Timeout("t".into()))
            .with_permission(Some(PermissionState::Prompt));
        assert!(!block_on(manager(refusing).request_user_location_permission()));
    }

    #[test]
    fn missing_permission_api_asks_the_human() {
        let dialogs = ScriptedDialogService::default();
        dialogs.push_confirm(true);
        let manager = LocationManager::new(
            Rc::new(UnsupportedGeolocationService),
            Rc::new(dialogs.clone()),
            FallbackLocation::default(),
        );

        assert!(block_on(manager.request_user_location_permission()));
        assert_eq!(
            dialogs.shown(),
            vec![DialogRecord::Confirm(
                "Allow this site to access your location?".to_string()
            )]
        );
    }
}
