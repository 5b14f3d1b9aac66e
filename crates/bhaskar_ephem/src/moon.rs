//! Geocentric lunar longitude (truncated ELP-2000 series, Meeus ch. 47).
//!
//! Carries the 32 largest longitude terms plus the A1/A2/(L'-F) additives,
//! with the eccentricity factor E applied to terms involving the solar
//! anomaly. Truncation error is a few arcseconds of longitude.

use bhaskar_time::jd_to_centuries;

use crate::frames::nutation_longitude_deg;

/// One periodic term: multiples of (D, M, M', F) and the sine coefficient
/// in units of 1e-6 degrees.
struct LonTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    sin_coeff: f64,
}

const LON_TERMS: [LonTerm; 32] = [
    LonTerm { d: 0, m: 0, mp: 1, f: 0, sin_coeff: 6_288_774.0 },
    LonTerm { d: 2, m: 0, mp: -1, f: 0, sin_coeff: 1_274_027.0 },
    LonTerm { d: 2, m: 0, mp: 0, f: 0, sin_coeff: 658_314.0 },
    LonTerm { d: 0, m: 0, mp: 2, f: 0, sin_coeff: 213_618.0 },
    LonTerm { d: 0, m: 1, mp: 0, f: 0, sin_coeff: -185_116.0 },
    LonTerm { d: 0, m: 0, mp: 0, f: 2, sin_coeff: -114_332.0 },
    LonTerm { d: 2, m: 0, mp: -2, f: 0, sin_coeff: 58_793.0 },
    LonTerm { d: 2, m: -1, mp: -1, f: 0, sin_coeff: 57_066.0 },
    LonTerm { d: 2, m: 0, mp: 1, f: 0, sin_coeff: 53_322.0 },
    LonTerm { d: 2, m: -1, mp: 0, f: 0, sin_coeff: 45_758.0 },
    LonTerm { d: 0, m: 1, mp: -1, f: 0, sin_coeff: -40_923.0 },
    LonTerm { d: 1, m: 0, mp: 0, f: 0, sin_coeff: -34_720.0 },
    LonTerm { d: 0, m: 1, mp: 1, f: 0, sin_coeff: -30_383.0 },
    LonTerm { d: 2, m: 0, mp: 0, f: -2, sin_coeff: 15_327.0 },
    LonTerm { d: 0, m: 0, mp: 1, f: 2, sin_coeff: -12_528.0 },
    LonTerm { d: 0, m: 0, mp: 1, f: -2, sin_coeff: 10_980.0 },
    LonTerm { d: 4, m: 0, mp: -1, f: 0, sin_coeff: 10_675.0 },
    LonTerm { d: 0, m: 0, mp: 3, f: 0, sin_coeff: 10_034.0 },
    LonTerm { d: 4, m: 0, mp: -2, f: 0, sin_coeff: 8_548.0 },
    LonTerm { d: 2, m: 1, mp: -1, f: 0, sin_coeff: -7_888.0 },
    LonTerm { d: 2, m: 1, mp: 0, f: 0, sin_coeff: -6_766.0 },
    LonTerm { d: 1, m: 0, mp: -1, f: 0, sin_coeff: -5_163.0 },
    LonTerm { d: 1, m: 1, mp: 0, f: 0, sin_coeff: 4_987.0 },
    LonTerm { d: 2, m: -1, mp: 1, f: 0, sin_coeff: 4_036.0 },
    LonTerm { d: 2, m: 0, mp: 2, f: 0, sin_coeff: 3_994.0 },
    LonTerm { d: 4, m: 0, mp: 0, f: 0, sin_coeff: 3_861.0 },
    LonTerm { d: 2, m: 0, mp: -3, f: 0, sin_coeff: 3_665.0 },
    LonTerm { d: 0, m: 1, mp: -2, f: 0, sin_coeff: -2_689.0 },
    LonTerm { d: 2, m: 0, mp: -1, f: 2, sin_coeff: -2_602.0 },
    LonTerm { d: 2, m: -1, mp: -2, f: 0, sin_coeff: 2_390.0 },
    LonTerm { d: 1, m: 0, mp: 1, f: 0, sin_coeff: -2_348.0 },
    LonTerm { d: 2, m: -2, mp: 0, f: 0, sin_coeff: 2_236.0 },
];

/// Fundamental arguments in degrees at T centuries: (L', D, M, M', F).
fn fundamental_args(t: f64) -> (f64, f64, f64, f64, f64) {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t
        + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t
        + t * t * t / 545_868.0
        - t * t * t * t / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t
        + t * t * t / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t
        + t * t * t / 69_699.0
        - t * t * t * t / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t
        - t * t * t / 3_526_000.0
        + t * t * t * t / 863_310_000.0;
    (lp, d, m, mp, f)
}

/// Moon's geometric geocentric ecliptic longitude in degrees [0, 360).
pub fn moon_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let (lp, d, m, mp, f) = fundamental_args(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum = 0.0;
    for term in &LON_TERMS {
        let arg = (term.d as f64 * d
            + term.m as f64 * m
            + term.mp as f64 * mp
            + term.f as f64 * f)
            .to_radians();
        let e_factor = match term.m.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += term.sin_coeff * e_factor * arg.sin();
    }

    // Additive terms: Venus perturbation (A1), Jupiter (A2), and flattening.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin();
    sum += 1962.0 * (lp - f).to_radians().sin();
    sum += 318.0 * a2.sin();

    (lp + sum * 1e-6).rem_euclid(360.0)
}

/// Moon's apparent geocentric ecliptic longitude (nutation applied).
pub fn moon_apparent_longitude(jd: f64) -> f64 {
    (moon_longitude(jd) + nutation_longitude_deg(jd)).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::{J2000_JD, calendar_to_jd};
    use crate::sun::sun_true_longitude;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: geometric longitude 134.290182 - nutation gives
        // apparent 133.167265; geometric from the full series is 133.162655.
        let jd = 2_448_724.5;
        let lon = moon_longitude(jd);
        assert!((lon - 133.162_655).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn new_moon_2000_01_06() {
        // New moon 2000-01-06 18:14 UTC: elongation from the Sun near zero
        let jd = calendar_to_jd(2000, 1, 6.0 + (18.0 + 14.0 / 60.0) / 24.0);
        let elong = (moon_longitude(jd) - sun_true_longitude(jd)).rem_euclid(360.0);
        let dist = elong.min(360.0 - elong);
        assert!(dist < 0.5, "elongation {elong}");
    }

    #[test]
    fn advances_about_thirteen_degrees_per_day() {
        let jd = J2000_JD + 50.0;
        let d = (moon_longitude(jd + 1.0) - moon_longitude(jd)).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&d), "daily motion {d}");
    }

    #[test]
    fn longitude_in_range() {
        for i in 0..60 {
            let lon = moon_longitude(J2000_JD + i as f64 * 0.7);
            assert!((0.0..360.0).contains(&lon));
        }
    }

    #[test]
    fn sidereal_month_period() {
        // After one sidereal month (27.32166 d) longitude returns near start
        let jd = J2000_JD + 200.0;
        let a = moon_longitude(jd);
        let b = moon_longitude(jd + 27.321_66);
        let diff = (b - a).rem_euclid(360.0);
        let dist = diff.min(360.0 - diff);
        assert!(dist < 3.0, "drift {dist}");
    }
}
