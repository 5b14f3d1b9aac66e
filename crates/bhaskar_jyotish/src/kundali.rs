//! Birth chart: lagna, graha placements, whole-sign bhavas.

use bhaskar_ephem::GeoLocation;
use bhaskar_time::local_sidereal_deg;
use bhaskar_vedic::{
    ALL_GRAHAS, AyanamshaSystem, ayanamsha_deg, nakshatra_from_longitude, rashi_from_longitude,
    tropical_to_sidereal,
};

use crate::error::JyotishError;
use crate::kundali_types::{GrahaPosition, Kundali, LagnaInfo};
use crate::positions::{graha_is_retrograde, graha_sidereal_longitude};

/// Tropical ecliptic longitude of the ascendant in degrees [0, 360).
///
/// Standard spherical formula from the ramc (right ascension of the
/// meridian, equal to local sidereal time) and the obliquity:
///
/// `tan(asc) = cos(ramc) / -(sin(ramc) cos(eps) + tan(phi) sin(eps))`
pub fn ascendant_tropical_deg(jd: f64, location: &GeoLocation) -> f64 {
    let ramc = local_sidereal_deg(jd, location.longitude_deg).to_radians();
    let eps = bhaskar_ephem::mean_obliquity_deg(jd).to_radians();
    let phi = location.latitude_rad();
    let asc = ramc
        .cos()
        .atan2(-(ramc.sin() * eps.cos() + phi.tan() * eps.sin()));
    asc.to_degrees().rem_euclid(360.0)
}

/// Sidereal ascendant with its rashi and nakshatra classification.
pub fn lagna_at(
    jd: f64,
    location: &GeoLocation,
    system: AyanamshaSystem,
) -> Result<LagnaInfo, JyotishError> {
    if !(-90.0..=90.0).contains(&location.latitude_deg) {
        return Err(JyotishError::InvalidInput("latitude must be in [-90, 90]"));
    }
    let sidereal = tropical_to_sidereal(ascendant_tropical_deg(jd, location), system, jd);
    let rashi = rashi_from_longitude(sidereal);
    let nakshatra = nakshatra_from_longitude(sidereal);
    Ok(LagnaInfo {
        longitude_deg: sidereal,
        rashi: rashi.rashi,
        degrees_in_rashi: rashi.degrees_in_rashi,
        nakshatra: nakshatra.nakshatra,
        pada: nakshatra.pada,
    })
}

/// Complete whole-sign birth chart for a birth instant and place.
pub fn kundali_at(
    jd: f64,
    location: &GeoLocation,
    system: AyanamshaSystem,
) -> Result<Kundali, JyotishError> {
    tracing::debug!(jd, system = system.name(), "computing kundali");
    let lagna = lagna_at(jd, location, system)?;
    let lagna_rashi_index = lagna.rashi.index();

    let mut grahas = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let longitude = graha_sidereal_longitude(graha, jd, system)?;
        let rashi = rashi_from_longitude(longitude);
        let nakshatra = nakshatra_from_longitude(longitude);
        // Whole-sign house: the lagna's rashi is bhava 1
        let bhava = ((rashi.rashi.index() + 12 - lagna_rashi_index) % 12 + 1) as u8;
        grahas.push(GrahaPosition {
            graha,
            longitude_deg: longitude,
            rashi: rashi.rashi,
            degrees_in_rashi: rashi.degrees_in_rashi,
            nakshatra: nakshatra.nakshatra,
            pada: nakshatra.pada,
            bhava,
            retrograde: graha_is_retrograde(graha, jd)?,
        });
    }

    Ok(Kundali {
        lagna,
        grahas,
        ayanamsha: system,
        ayanamsha_deg: ayanamsha_deg(system, jd),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_time::{J2000_JD, calendar_to_jd};
    use bhaskar_vedic::Graha;

    const DELHI: GeoLocation = GeoLocation {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
    };

    #[test]
    fn ascendant_advances_through_all_rashis_in_a_day() {
        // The lagna sweeps the whole zodiac in one sidereal day
        let jd = calendar_to_jd(2024, 3, 20.0);
        let mut seen = std::collections::HashSet::new();
        for i in 0..96 {
            let asc = ascendant_tropical_deg(jd + i as f64 / 96.0, &DELHI);
            seen.insert((asc / 30.0) as usize);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn ascendant_moves_forward() {
        let jd = J2000_JD;
        let a = ascendant_tropical_deg(jd, &DELHI);
        let b = ascendant_tropical_deg(jd + 1.0 / 1440.0, &DELHI);
        // ~0.25 deg/min at mid latitudes, always positive
        let rate = (b - a).rem_euclid(360.0);
        assert!(rate > 0.0 && rate < 2.0, "rate {rate}");
    }

    #[test]
    fn chart_has_nine_grahas_and_valid_bhavas() {
        let chart = kundali_at(J2000_JD, &DELHI, AyanamshaSystem::Lahiri).unwrap();
        assert_eq!(chart.grahas.len(), 9);
        for pos in &chart.grahas {
            assert!((1..=12).contains(&pos.bhava), "{}", pos.graha.name());
            assert!((0.0..360.0).contains(&pos.longitude_deg));
            assert!((0.0..30.0).contains(&pos.degrees_in_rashi));
        }
    }

    #[test]
    fn graha_in_lagna_rashi_occupies_first_bhava() {
        let chart = kundali_at(J2000_JD, &DELHI, AyanamshaSystem::Lahiri).unwrap();
        for pos in &chart.grahas {
            if pos.rashi == chart.lagna.rashi {
                assert_eq!(pos.bhava, 1);
            }
        }
    }

    #[test]
    fn rahu_ketu_in_opposite_bhavas() {
        let chart = kundali_at(J2000_JD, &DELHI, AyanamshaSystem::Lahiri).unwrap();
        let rahu = chart.graha(Graha::Rahu).unwrap().bhava;
        let ketu = chart.graha(Graha::Ketu).unwrap().bhava;
        assert_eq!((i16::from(rahu) - i16::from(ketu)).rem_euclid(12), 6);
    }

    #[test]
    fn invalid_latitude_rejected() {
        let bad = GeoLocation::new(95.0, 0.0);
        let err = kundali_at(J2000_JD, &bad, AyanamshaSystem::Lahiri);
        assert!(matches!(err, Err(JyotishError::InvalidInput(_))));
    }

    #[test]
    fn serializes_to_json() {
        let chart = kundali_at(J2000_JD, &DELHI, AyanamshaSystem::Lahiri).unwrap();
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["grahas"].as_array().unwrap().len(), 9);
        assert!(json["lagna"]["rashi"].is_string());
    }
}
