//! Geocentric solar longitude (Meeus ch. 25, "low accuracy" series).
//!
//! Good to ~0.01 deg, which is under a second of tithi drift. The apparent
//! variant applies nutation and the constant aberration term and is what
//! sidereal (ayanamsha-corrected) positions are built from.

use bhaskar_time::jd_to_centuries;

use crate::frames::nutation_longitude_deg;

/// Sun's geometric mean longitude in degrees.
pub fn sun_mean_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    (280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t).rem_euclid(360.0)
}

/// Sun's mean anomaly in degrees.
pub fn sun_mean_anomaly(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).rem_euclid(360.0)
}

/// Equation of center in degrees.
fn equation_of_center(t: f64, mean_anomaly_deg: f64) -> f64 {
    let m = mean_anomaly_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Sun's true geometric geocentric ecliptic longitude in degrees [0, 360).
pub fn sun_true_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = sun_mean_longitude(jd);
    let m = sun_mean_anomaly(jd);
    (l0 + equation_of_center(t, m)).rem_euclid(360.0)
}

/// Sun's apparent geocentric ecliptic longitude in degrees [0, 360).
///
/// True longitude corrected for nutation and annual aberration (-20.5").
pub fn sun_apparent_longitude(jd: f64) -> f64 {
    (sun_true_longitude(jd) + nutation_longitude_deg(jd) - 0.005_69).rem_euclid(360.0)
}

/// Sun's radius-vector (distance) in AU.
pub fn sun_distance_au(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let m = sun_mean_anomaly(jd).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let nu = m + equation_of_center(t, sun_mean_anomaly(jd)).to_radians();
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::{J2000_JD, calendar_to_jd};

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: true longitude 199.90988 deg
        let jd = 2_448_908.5;
        let lon = sun_true_longitude(jd);
        assert!((lon - 199.909_88).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn march_equinox_near_zero() {
        // 2024 March 20, 03:06 UTC
        let jd = calendar_to_jd(2024, 3, 20.0 + 3.1 / 24.0);
        let lon = sun_apparent_longitude(jd);
        let dist_from_zero = lon.min(360.0 - lon);
        assert!(dist_from_zero < 0.05, "got {lon}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let jd = J2000_JD + 100.0;
        let d = (sun_true_longitude(jd + 1.0) - sun_true_longitude(jd)).rem_euclid(360.0);
        assert!((0.9..1.1).contains(&d), "daily motion {d}");
    }

    #[test]
    fn longitude_in_range() {
        for i in 0..366 {
            let lon = sun_true_longitude(J2000_JD + i as f64);
            assert!((0.0..360.0).contains(&lon));
        }
    }

    #[test]
    fn distance_near_one_au() {
        for i in 0..12 {
            let d = sun_distance_au(J2000_JD + i as f64 * 30.0);
            assert!((0.98..1.02).contains(&d), "distance {d}");
        }
    }
}
