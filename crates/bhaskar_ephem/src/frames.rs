//! Obliquity, nutation, and ecliptic -> equatorial conversion.

use bhaskar_time::jd_to_centuries;

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial).
///
/// 23deg 26' 21.448" at J2000.0, decreasing ~47" per century.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    23.439_291_111 - (46.8150 * t + 0.000_59 * t * t - 0.001_813 * t * t * t) / 3600.0
}

/// Nutation in longitude in degrees (two largest terms).
///
/// Dominated by the 18.6-year node term (-17.20") and the semiannual solar
/// term (-1.32"). Sufficient for arcsecond-level apparent longitudes.
pub fn nutation_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    (-17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()) / 3600.0
}

/// Convert ecliptic longitude/latitude (degrees) to equatorial RA/Dec
/// (degrees), given the obliquity in degrees.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (lon, lat, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::J2000_JD;

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity_deg(J2000_JD);
        assert!((eps - 23.439_291).abs() < 1e-5);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(mean_obliquity_deg(J2000_JD + 36_525.0) < mean_obliquity_deg(J2000_JD));
    }

    #[test]
    fn nutation_is_small() {
        for i in 0..50 {
            let jd = J2000_JD + i as f64 * 211.7;
            let dpsi = nutation_longitude_deg(jd);
            assert!(dpsi.abs() < 20.0 / 3600.0, "dpsi {dpsi} out of range");
        }
    }

    #[test]
    fn equinox_maps_to_zero_ra() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(ra.abs() < 1e-10);
        assert!(dec.abs() < 1e-10);
    }

    #[test]
    fn solstice_declination_is_obliquity() {
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((ra - 90.0).abs() < 1e-10);
        assert!((dec - 23.44).abs() < 1e-10);
    }
}
