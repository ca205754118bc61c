use crate::geo::consts::EARTH_RADIUS_KM;
use crate::geo::models::LatLng;

/// Great-circle distance by the Haversine formula, rounded to whole
/// kilometers. Both points are range-checked by [`LatLng::new`], so raw
/// coordinates outside of the valid ranges never get this far.
///
/// The Earth is treated as a sphere of radius [`EARTH_RADIUS_KM`], which is
/// within roughly 0.5% of the geodesic distance. Good enough to score a
/// guess, not for navigation. Longitude wraparound needs no special casing
/// because only the sine of the half difference is used.
pub fn great_circle_distance_km(from: LatLng, to: LatLng) -> u64 {
    let phi_1 = from.lat().to_radians();
    let phi_2 = to.lat().to_radians();
    let delta_phi = (to.lat() - from.lat()).to_radians();
    let delta_lambda = (to.lng() - from.lng()).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    (EARTH_RADIUS_KM * c).round() as u64
}
