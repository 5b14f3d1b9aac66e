//! Sunrise/sunset by the hour-angle method with iterative refinement.
//!
//! Standard spherical astronomy (Meeus ch. 15, USNO): from the Sun's
//! RA/Dec, compute the hour angle at which its center reaches the target
//! depression, locate the meridian transit from local sidereal time, then
//! step the estimate and re-evaluate until it settles.

use bhaskar_time::local_sidereal_deg;

use crate::error::EphemError;
use crate::frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::sun::sun_apparent_longitude;

/// Maximum refinement iterations.
const MAX_ITERATIONS: usize = 6;

/// Convergence threshold in days (~0.09 s).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rate: degrees of hour angle per UT day.
const SIDEREAL_RATE_DEG: f64 = 360.985_647_366_29;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Sun's equatorial RA/Dec in degrees at a given JD.
fn sun_ra_dec(jd: f64) -> (f64, f64) {
    let lon = sun_apparent_longitude(jd);
    let eps = mean_obliquity_deg(jd);
    ecliptic_to_equatorial(lon, 0.0, eps)
}

/// One evaluation of the event time estimate.
///
/// Returns `Ok(Some(jd))` for a refined estimate, `Ok(None)` for a polar
/// condition at this declination.
fn estimate_event(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_guess: f64,
    h0_target_deg: f64,
) -> Option<f64> {
    let (ra, dec) = sun_ra_dec(jd_guess);
    let phi = location.latitude_rad();
    let dec_rad = dec.to_radians();

    let cos_h0 = (h0_target_deg.to_radians().sin() - phi.sin() * dec_rad.sin())
        / (phi.cos() * dec_rad.cos());
    if !(-1.0..=1.0).contains(&cos_h0) {
        return None;
    }
    let h0_deg = cos_h0.acos().to_degrees();

    // Hour angle of the Sun at the guess, normalized to [-180, 180)
    let lst = local_sidereal_deg(jd_guess, location.longitude_deg);
    let mut ha = (lst - ra).rem_euclid(360.0);
    if ha >= 180.0 {
        ha -= 360.0;
    }

    // Transit when HA = 0; event at -H0 (rise) or +H0 (set)
    let target_ha = if event.is_rising() { -h0_deg } else { h0_deg };
    Some(jd_guess + (target_ha - ha) / SIDEREAL_RATE_DEG)
}

/// Compute a sunrise or sunset event.
///
/// `jd_ut_noon` is the approximate local noon of the desired date; use
/// [`approximate_local_noon_jd`]. Polar day/night is reported as a
/// variant, not an error.
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    if !(-90.0..=90.0).contains(&location.latitude_deg) {
        return Err(EphemError::InvalidLocation("latitude must be in [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&location.longitude_deg) {
        return Err(EphemError::InvalidLocation(
            "longitude must be in [-180, 180]",
        ));
    }

    let h0_target = config.target_altitude_deg();

    // Polar check at noon declination
    let (_, dec_noon) = sun_ra_dec(jd_ut_noon);
    let phi = location.latitude_rad();
    let dec_rad = dec_noon.to_radians();
    let cos_h0 = (h0_target.to_radians().sin() - phi.sin() * dec_rad.sin())
        / (phi.cos() * dec_rad.cos());
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    let mut jd = jd_ut_noon;
    for _ in 0..MAX_ITERATIONS {
        let Some(next) = estimate_event(location, event, jd, h0_target) else {
            // Declination drifted across the polar boundary mid-refinement
            return Ok(if cos_h0 > 0.0 {
                RiseSetResult::NeverRises
            } else {
                RiseSetResult::NeverSets
            });
        };
        let delta = (next - jd).abs();
        jd = next;
        if delta < CONVERGENCE_DAYS {
            return Ok(RiseSetResult::Event { jd });
        }
    }
    Err(EphemError::NoConvergence("rise/set refinement"))
}
