//! Equirectangular projection of café coordinates onto the SVG map canvas.

use crate::models::Coordinate;

/// Smallest latitude/longitude span in degrees, so one café still gets a frame.
const MIN_SPAN_DEGREES: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
    width: f64,
    height: f64,
    padding: f64,
}

impl MapProjection {
    /// Fits a projection around `points` on a `width` x `height` canvas.
    /// Returns `None` when no point is finite.
    pub fn fit<I>(points: I, width: f64, height: f64, padding: f64) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for point in points.into_iter().filter(Coordinate::is_finite) {
            bounds = Some(match bounds {
                None => (point.latitude, point.latitude, point.longitude, point.longitude),
                Some((min_lat, max_lat, min_lon, max_lon)) => (
                    min_lat.min(point.latitude),
                    max_lat.max(point.latitude),
                    min_lon.min(point.longitude),
                    max_lon.max(point.longitude),
                ),
            });
        }
        let (min_lat, max_lat, min_lon, max_lon) = bounds?;
        let (min_lat, max_lat) = widen(min_lat, max_lat);
        let (min_lon, max_lon) = widen(min_lon, max_lon);

        Some(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            width,
            height,
            padding,
        })
    }

    /// Canvas position of `point`, north up. `None` for non-finite points.
    pub fn project(&self, point: Coordinate) -> Option<(f64, f64)> {
        if !point.is_finite() {
            return None;
        }
        let inner_w = (self.width - 2.0 * self.padding).max(0.0);
        let inner_h = (self.height - 2.0 * self.padding).max(0.0);
        let x_frac = (point.longitude - self.min_lon) / (self.max_lon - self.min_lon);
        let y_frac = (self.max_lat - point.latitude) / (self.max_lat - self.min_lat);
        Some((
            self.padding + x_frac * inner_w,
            self.padding + y_frac * inner_h,
        ))
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

fn widen(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span >= MIN_SPAN_DEGREES {
        (min, max)
    } else {
        let mid = (min + max) / 2.0;
        (mid - MIN_SPAN_DEGREES / 2.0, mid + MIN_SPAN_DEGREES / 2.0)
    }
}
