//! Greenwich and local mean sidereal time (IAU 1982 expression).

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich mean sidereal time in degrees at a given JD (UT).
///
/// Meeus eq. 12.4, valid for any instant (not just 0h UT).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let gmst = 280.460_618_37
        + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    gmst.rem_euclid(360.0)
}

/// Local mean sidereal time in degrees (east longitude positive).
pub fn local_sidereal_deg(jd_ut: f64, longitude_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_deg).rem_euclid(360.0)
}
