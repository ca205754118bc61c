/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// `(lower bound in km, points)`, ordered by ascending lower bound. A distance
/// falls into the last tier whose lower bound it reaches.
pub const SCORE_TIERS: [(u64, u64); 7] = [
    (0, 1000),
    (50, 800),
    (100, 600),
    (250, 400),
    (500, 200),
    (1000, 100),
    (2000, 50),
];
