//! Where distances are measured from.

use crate::models::Coordinate;

/// Used when the browser cannot or will not report a position (Lower Manhattan).
pub const DEFAULT_REFERENCE: Coordinate = Coordinate::new(40.7128, -74.0060);

/// Anything that may know the rider's current position.
pub trait LocationProvider {
    fn current(&self) -> Option<Coordinate>;
}

/// A provider that always reports the same point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    fn current(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}

/// A provider with nothing to report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl LocationProvider for NoLocation {
    fn current(&self) -> Option<Coordinate> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub coordinate: Coordinate,
    pub is_fallback: bool,
}

impl ReferencePoint {
    /// The provider's position if it has a valid one, else `fallback`.
    pub fn resolve(provider: &impl LocationProvider, fallback: Coordinate) -> Self {
        match provider.current().filter(Coordinate::is_valid) {
            Some(coordinate) => Self {
                coordinate,
                is_fallback: false,
            },
            None => Self {
                coordinate: fallback,
                is_fallback: true,
            },
        }
    }
}

/// Asks the browser for the current position once and stores it in `target`.
/// Denial or absence of geolocation leaves `target` untouched.
#[cfg(target_arch = "wasm32")]
pub fn request_browser_location(target: leptos::RwSignal<Option<Coordinate>>) {
    use leptos::logging::warn;
    use leptos::SignalSet;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
        warn!("[LOCATION] Geolocation unavailable, using default reference point");
        return;
    };

    let on_success = Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
        let coords = position.coords();
        target.set(Some(Coordinate::new(coords.latitude(), coords.longitude())));
    });
    let on_error = Closure::once_into_js(move |_err: JsValue| {
        warn!("[LOCATION] Position request denied or failed, using default reference point");
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
    ) {
        warn!("[LOCATION] Could not request position: {:?}", err);
    }
}
