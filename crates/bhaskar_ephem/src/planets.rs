//! Geocentric planetary longitudes from mean Keplerian elements.
//!
//! Uses the Standish "Approximate Positions of the Planets" element table
//! (valid 1800-2050): osculating elements and centennial rates at J2000,
//! a Newton solve of Kepler's equation, and a heliocentric-to-geocentric
//! transform through the Earth-Moon barycenter. Light-time and planetary
//! aberration are below the accuracy target and are not applied.

use bhaskar_time::jd_to_centuries;

use crate::error::EphemError;

/// Validity range of the element table: 1800-01-01 .. 2050-01-01.
const JD_MIN: f64 = 2_378_496.5;
const JD_MAX: f64 = 2_469_807.5;

/// The five true planets of Vedic astrology (Sun/Moon/nodes live elsewhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All five planets in distance order.
pub const ALL_PLANETS: [Planet; 5] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

/// Keplerian elements at J2000 plus centennial rates.
///
/// Fields: semi-major axis (AU), eccentricity, inclination (deg), mean
/// longitude (deg), longitude of perihelion (deg), longitude of the
/// ascending node (deg).
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    peri: (f64, f64),
    node: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARY: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

impl Planet {
    const fn elements(self) -> &'static Elements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }
}

/// Solve Kepler's equation E - e sin E = M by Newton iteration.
///
/// All angles in radians. Converges in a handful of steps for planetary
/// eccentricities.
fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> Result<f64, EphemError> {
    let m = mean_anomaly_rad;
    let mut big_e = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..50 {
        let delta = (big_e - e * big_e.sin() - m) / (1.0 - e * big_e.cos());
        big_e -= delta;
        if delta.abs() < 1e-12 {
            return Ok(big_e);
        }
    }
    Err(EphemError::NoConvergence("kepler equation"))
}

/// Heliocentric J2000-ecliptic rectangular coordinates in AU.
fn heliocentric_xyz(el: &Elements, t_centuries: f64) -> Result<(f64, f64, f64), EphemError> {
    let a = el.a.0 + el.a.1 * t_centuries;
    let e = el.e.0 + el.e.1 * t_centuries;
    let i = (el.i.0 + el.i.1 * t_centuries).to_radians();
    let l = el.l.0 + el.l.1 * t_centuries;
    let peri = el.peri.0 + el.peri.1 * t_centuries;
    let node = (el.node.0 + el.node.1 * t_centuries).to_radians();

    let omega = (peri).to_radians() - node; // argument of perihelion
    let m = (l - peri).rem_euclid(360.0).to_radians();

    let big_e = solve_kepler(m, e)?;
    let x_orb = a * (big_e.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * big_e.sin();

    let (cw, sw) = (omega.cos(), omega.sin());
    let (cn, sn) = (node.cos(), node.sin());
    let (ci, si) = (i.cos(), i.sin());

    let x = (cw * cn - sw * sn * ci) * x_orb + (-sw * cn - cw * sn * ci) * y_orb;
    let y = (cw * sn + sw * cn * ci) * x_orb + (-sw * sn + cw * cn * ci) * y_orb;
    let z = (sw * si) * x_orb + (cw * si) * y_orb;
    Ok((x, y, z))
}

/// Geocentric ecliptic longitude of a planet in degrees [0, 360).
pub fn planet_geocentric_longitude(planet: Planet, jd: f64) -> Result<f64, EphemError> {
    if !(JD_MIN..=JD_MAX).contains(&jd) {
        return Err(EphemError::EpochOutOfRange(
            "planetary elements valid 1800-2050",
        ));
    }
    let t = jd_to_centuries(jd);
    let (px, py, _pz) = heliocentric_xyz(planet.elements(), t)?;
    let (ex, ey, _ez) = heliocentric_xyz(&EARTH_MOON_BARY, t)?;
    let lon = (py - ey).atan2(px - ex).to_degrees();
    Ok(lon.rem_euclid(360.0))
}

/// Whether a planet is in retrograde (apparent backward) motion at `jd`.
///
/// Central difference of geocentric longitude over one day.
pub fn is_retrograde(planet: Planet, jd: f64) -> Result<bool, EphemError> {
    let before = planet_geocentric_longitude(planet, jd - 0.5)?;
    let after = planet_geocentric_longitude(planet, jd + 0.5)?;
    let mut rate = after - before;
    if rate > 180.0 {
        rate -= 360.0;
    } else if rate < -180.0 {
        rate += 360.0;
    }
    Ok(rate < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::J2000_JD;
    use crate::sun::sun_true_longitude;

    fn angular_sep(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn all_longitudes_in_range() {
        for planet in ALL_PLANETS {
            for i in 0..24 {
                let lon = planet_geocentric_longitude(planet, J2000_JD + i as f64 * 100.0)
                    .expect("in range");
                assert!((0.0..360.0).contains(&lon), "{} {lon}", planet.name());
            }
        }
    }

    #[test]
    fn venus_max_elongation_bound() {
        // Venus never strays more than ~47.8 deg from the Sun
        for i in 0..600 {
            let jd = J2000_JD + i as f64;
            let v = planet_geocentric_longitude(Planet::Venus, jd).unwrap();
            let s = sun_true_longitude(jd);
            assert!(angular_sep(v, s) < 50.0, "day {i}: sep {}", angular_sep(v, s));
        }
    }

    #[test]
    fn mercury_max_elongation_bound() {
        for i in 0..200 {
            let jd = J2000_JD + i as f64;
            let m = planet_geocentric_longitude(Planet::Mercury, jd).unwrap();
            let s = sun_true_longitude(jd);
            assert!(angular_sep(m, s) < 30.0);
        }
    }

    #[test]
    fn mars_has_retrograde_and_direct_phases() {
        // One synodic period of Mars (~780 d) contains both
        let mut saw_retro = false;
        let mut saw_direct = false;
        for i in 0..78 {
            let jd = J2000_JD + i as f64 * 10.0;
            if is_retrograde(Planet::Mars, jd).unwrap() {
                saw_retro = true;
            } else {
                saw_direct = true;
            }
        }
        assert!(saw_retro && saw_direct);
    }

    #[test]
    fn saturn_moves_slowly() {
        let a = planet_geocentric_longitude(Planet::Saturn, J2000_JD).unwrap();
        let b = planet_geocentric_longitude(Planet::Saturn, J2000_JD + 365.25).unwrap();
        // Saturn covers ~12 deg/year heliocentrically; geocentric wobble
        // stays well under 30 deg
        assert!(angular_sep(a, b) < 30.0);
    }

    #[test]
    fn epoch_out_of_range_rejected() {
        let err = planet_geocentric_longitude(Planet::Mars, 2_000_000.0);
        assert!(matches!(err, Err(EphemError::EpochOutOfRange(_))));
    }

    #[test]
    fn kepler_converges_for_circular_orbit() {
        let e = solve_kepler(1.234, 0.0).unwrap();
        assert!((e - 1.234).abs() < 1e-12);
    }
}
