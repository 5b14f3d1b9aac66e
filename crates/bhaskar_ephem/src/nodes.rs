//! Mean lunar node: Rahu (ascending) and Ketu (descending).
//!
//! The mean node regresses through the full zodiac in ~18.6 years. Vedic
//! practice overwhelmingly uses the mean node; the true-node oscillation
//! (+-1.7 deg) is out of scope here.

use bhaskar_time::jd_to_centuries;

/// Mean ascending node longitude in degrees [0, 360) (Meeus 47.7).
pub fn mean_lunar_node_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let omega = 125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t * t
        + t * t * t / 467_441.0
        - t * t * t * t / 60_616_000.0;
    omega.rem_euclid(360.0)
}

/// Rahu's tropical longitude (the mean ascending node).
pub fn rahu_longitude(jd: f64) -> f64 {
    mean_lunar_node_deg(jd)
}

/// Ketu's tropical longitude (always opposite Rahu).
pub fn ketu_longitude(jd: f64) -> f64 {
    (mean_lunar_node_deg(jd) + 180.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::J2000_JD;

    #[test]
    fn node_at_j2000() {
        let n = mean_lunar_node_deg(J2000_JD);
        assert!((n - 125.044_547_9).abs() < 1e-6);
    }

    #[test]
    fn node_regresses() {
        let a = mean_lunar_node_deg(J2000_JD);
        let b = mean_lunar_node_deg(J2000_JD + 10.0);
        // ~0.053 deg/day backward
        let delta = (a - b).rem_euclid(360.0);
        assert!((0.4..0.7).contains(&delta), "10-day regression {delta}");
    }

    #[test]
    fn ketu_opposes_rahu() {
        let jd = J2000_JD + 1234.0;
        let diff = (ketu_longitude(jd) - rahu_longitude(jd)).rem_euclid(360.0);
        assert!((diff - 180.0).abs() < 1e-12);
    }

    #[test]
    fn full_cycle_about_18_6_years() {
        let jd = J2000_JD;
        let later = jd + 6798.38; // draconic node period in days
        let diff = (mean_lunar_node_deg(jd) - mean_lunar_node_deg(later)).rem_euclid(360.0);
        let dist = diff.min(360.0 - diff);
        assert!(dist < 1.0, "cycle closure off by {dist}");
    }
}
