//! Graha longitudes bridging the ephemeris to the Vedic layer.

use bhaskar_ephem::{
    Planet, is_retrograde, ketu_longitude, moon_apparent_longitude,
    planet_geocentric_longitude, rahu_longitude, sun_apparent_longitude,
};
use bhaskar_vedic::{AyanamshaSystem, Graha, tropical_to_sidereal};

use crate::error::JyotishError;

/// Tropical geocentric ecliptic longitude of a graha in degrees [0, 360).
pub fn graha_tropical_longitude(graha: Graha, jd: f64) -> Result<f64, JyotishError> {
    let lon = match graha {
        Graha::Surya => sun_apparent_longitude(jd),
        Graha::Chandra => moon_apparent_longitude(jd),
        Graha::Mangal => planet_geocentric_longitude(Planet::Mars, jd)?,
        Graha::Buddh => planet_geocentric_longitude(Planet::Mercury, jd)?,
        Graha::Guru => planet_geocentric_longitude(Planet::Jupiter, jd)?,
        Graha::Shukra => planet_geocentric_longitude(Planet::Venus, jd)?,
        Graha::Shani => planet_geocentric_longitude(Planet::Saturn, jd)?,
        Graha::Rahu => rahu_longitude(jd),
        Graha::Ketu => ketu_longitude(jd),
    };
    Ok(lon)
}

/// Sidereal longitude of a graha in degrees [0, 360).
pub fn graha_sidereal_longitude(
    graha: Graha,
    jd: f64,
    system: AyanamshaSystem,
) -> Result<f64, JyotishError> {
    Ok(tropical_to_sidereal(
        graha_tropical_longitude(graha, jd)?,
        system,
        jd,
    ))
}

/// Whether a graha is in apparent retrograde motion at `jd`.
///
/// The Sun and Moon are always direct; the mean nodes are always
/// retrograde; the five planets are sampled over one day.
pub fn graha_is_retrograde(graha: Graha, jd: f64) -> Result<bool, JyotishError> {
    let retro = match graha {
        Graha::Surya | Graha::Chandra => false,
        Graha::Rahu | Graha::Ketu => true,
        Graha::Mangal => is_retrograde(Planet::Mars, jd)?,
        Graha::Buddh => is_retrograde(Planet::Mercury, jd)?,
        Graha::Guru => is_retrograde(Planet::Jupiter, jd)?,
        Graha::Shukra => is_retrograde(Planet::Venus, jd)?,
        Graha::Shani => is_retrograde(Planet::Saturn, jd)?,
    };
    Ok(retro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::J2000_JD;
    use bhaskar_vedic::ALL_GRAHAS;

    #[test]
    fn all_grahas_yield_longitudes() {
        for graha in ALL_GRAHAS {
            let lon = graha_tropical_longitude(graha, J2000_JD).unwrap();
            assert!((0.0..360.0).contains(&lon), "{} {lon}", graha.name());
        }
    }

    #[test]
    fn ketu_opposes_rahu() {
        let rahu = graha_tropical_longitude(Graha::Rahu, J2000_JD).unwrap();
        let ketu = graha_tropical_longitude(Graha::Ketu, J2000_JD).unwrap();
        let sep = (rahu - ketu).rem_euclid(360.0);
        assert!((sep - 180.0).abs() < 1e-9);
    }

    #[test]
    fn sidereal_trails_tropical_by_ayanamsha() {
        let trop = graha_tropical_longitude(Graha::Surya, J2000_JD).unwrap();
        let sid =
            graha_sidereal_longitude(Graha::Surya, J2000_JD, AyanamshaSystem::Lahiri).unwrap();
        let diff = (trop - sid).rem_euclid(360.0);
        assert!((diff - 23.853).abs() < 1e-6);
    }

    #[test]
    fn luminaries_never_retrograde() {
        assert!(!graha_is_retrograde(Graha::Surya, J2000_JD).unwrap());
        assert!(!graha_is_retrograde(Graha::Chandra, J2000_JD).unwrap());
        assert!(graha_is_retrograde(Graha::Rahu, J2000_JD).unwrap());
    }
}
