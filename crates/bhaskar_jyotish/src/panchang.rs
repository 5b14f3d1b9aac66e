//! The five panchang limbs: tithi, nakshatra, yoga, karana, vaar.
//!
//! Each angular limb is classified at an instant, then its active
//! interval is bounded by searching the defining angle backward to the
//! segment start and forward to the segment end. A combined computation
//! anchors all five at sunrise, the opening of the vedic day.

use bhaskar_ephem::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, compute_rise_set,
};
use bhaskar_time::{UtcTime, calendar_to_jd};
use bhaskar_vedic::{
    AyanamshaSystem, KARANA_SEGMENT_DEG, NAKSHATRA_SPAN_DEG, TITHI_SEGMENT_DEG, YOGA_SEGMENT_DEG,
    ayanamsha_deg, karana_from_elongation, nakshatra_from_longitude, normalize_360,
    tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};

use crate::error::JyotishError;
use crate::panchang_types::{
    KaranaInfo, NakshatraInfo, PanchangInfo, TithiInfo, VaarInfo, YogaInfo,
};
use crate::positions::graha_sidereal_longitude;
use crate::search_util::find_angle_boundary;
use bhaskar_vedic::Graha;

/// Coarse scan step for boundary searches, in days.
///
/// The slowest defining angle (elongation near apogee, ~10 deg/day)
/// still moves 2.5 deg per step, so a segment boundary is always
/// bracketed within a handful of steps.
const SCAN_STEP_DAYS: f64 = 0.25;

/// Moon-Sun elongation in degrees [0, 360) at `jd`.
pub fn elongation_at(jd: f64) -> Result<f64, JyotishError> {
    let moon = graha_sidereal_longitude(Graha::Chandra, jd, AyanamshaSystem::Lahiri)?;
    let sun = graha_sidereal_longitude(Graha::Surya, jd, AyanamshaSystem::Lahiri)?;
    Ok(normalize_360(moon - sun))
}

/// Sum of sidereal Sun and Moon longitudes in degrees [0, 360) at `jd`.
pub fn sidereal_sum_at(jd: f64, system: AyanamshaSystem) -> Result<f64, JyotishError> {
    let moon = graha_sidereal_longitude(Graha::Chandra, jd, system)?;
    let sun = graha_sidereal_longitude(Graha::Surya, jd, system)?;
    Ok(normalize_360(moon + sun))
}

/// Sidereal longitude of the Moon in degrees [0, 360) at `jd`.
pub fn moon_sidereal_longitude_at(
    jd: f64,
    system: AyanamshaSystem,
) -> Result<f64, JyotishError> {
    graha_sidereal_longitude(Graha::Chandra, jd, system)
}

/// Bound the active segment: search backward to where the angle entered
/// it and forward to where it leaves.
fn segment_bounds<F>(
    eval: &F,
    start_target_deg: f64,
    end_target_deg: f64,
    jd: f64,
    label: &'static str,
) -> Result<(f64, f64), JyotishError>
where
    F: Fn(f64) -> Result<f64, JyotishError>,
{
    let start = find_angle_boundary(eval, start_target_deg, jd, -SCAN_STEP_DAYS, label)?;
    let end = find_angle_boundary(eval, end_target_deg, jd, SCAN_STEP_DAYS, label)?;
    Ok((start, end))
}

/// Tithi at `jd`, with its start and end instants.
pub fn tithi_at(jd: f64) -> Result<TithiInfo, JyotishError> {
    let position = tithi_from_elongation(elongation_at(jd)?);
    let start_deg = position.index as f64 * TITHI_SEGMENT_DEG;
    let (start, end) = segment_bounds(
        &elongation_at,
        start_deg,
        start_deg + TITHI_SEGMENT_DEG,
        jd,
        "tithi",
    )?;
    Ok(TithiInfo {
        number: position.number_in_paksha(),
        name: position.name(),
        paksha: position.paksha,
        start: UtcTime::from_jd(start),
        end: UtcTime::from_jd(end),
    })
}

/// Nakshatra occupied by the Moon at `jd`, with its interval.
pub fn nakshatra_at(jd: f64, system: AyanamshaSystem) -> Result<NakshatraInfo, JyotishError> {
    let eval = move |t: f64| moon_sidereal_longitude_at(t, system);
    let position = nakshatra_from_longitude(eval(jd)?);
    let start_deg = position.nakshatra.start_deg();
    let (start, end) = segment_bounds(
        &eval,
        start_deg,
        start_deg + NAKSHATRA_SPAN_DEG,
        jd,
        "nakshatra",
    )?;
    Ok(NakshatraInfo {
        nakshatra: position.nakshatra,
        pada: position.pada,
        lord: position.nakshatra.vimshottari_lord(),
        start: UtcTime::from_jd(start),
        end: UtcTime::from_jd(end),
    })
}

/// Yoga at `jd`, with its interval.
pub fn yoga_at(jd: f64, system: AyanamshaSystem) -> Result<YogaInfo, JyotishError> {
    let eval = move |t: f64| sidereal_sum_at(t, system);
    let position = yoga_from_sum(eval(jd)?);
    let start_deg = position.yoga.index() as f64 * YOGA_SEGMENT_DEG;
    let (start, end) =
        segment_bounds(&eval, start_deg, start_deg + YOGA_SEGMENT_DEG, jd, "yoga")?;
    Ok(YogaInfo {
        yoga: position.yoga,
        start: UtcTime::from_jd(start),
        end: UtcTime::from_jd(end),
    })
}

/// Karana at `jd`, with its interval.
pub fn karana_at(jd: f64) -> Result<KaranaInfo, JyotishError> {
    let position = karana_from_elongation(elongation_at(jd)?);
    let start_deg = position.segment as f64 * KARANA_SEGMENT_DEG;
    let (start, end) = segment_bounds(
        &elongation_at,
        start_deg,
        start_deg + KARANA_SEGMENT_DEG,
        jd,
        "karana",
    )?;
    Ok(KaranaInfo {
        karana: position.karana,
        start: UtcTime::from_jd(start),
        end: UtcTime::from_jd(end),
    })
}

/// Weekday of the local civil day containing `jd_ut`.
pub fn vaar_at(jd_ut: f64, utc_offset_hours: f64) -> VaarInfo {
    let vaar = vaar_from_jd(jd_ut + utc_offset_hours / 24.0);
    VaarInfo {
        vaar,
        english_name: vaar.english_name(),
        lord: vaar.lord(),
    }
}

fn rise_set_jd(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_noon: f64,
) -> Result<f64, JyotishError> {
    match compute_rise_set(location, event, jd_noon, &RiseSetConfig::default())? {
        RiseSetResult::Event { jd } => Ok(jd),
        RiseSetResult::NeverRises => Err(JyotishError::NoSunrise("polar night")),
        RiseSetResult::NeverSets => Err(JyotishError::NoSunrise("midnight sun")),
    }
}

/// Sunrise, sunset and next sunrise bracketing the vedic day of a local
/// civil date. All returned JDs are UT.
pub fn vedic_day_sun_events(
    year: i32,
    month: u32,
    day: u32,
    utc_offset_hours: f64,
    location: &GeoLocation,
) -> Result<(f64, f64, f64), JyotishError> {
    if !(1..=12).contains(&month) {
        return Err(JyotishError::InvalidInput("month must be 1-12"));
    }
    if !(1..=31).contains(&day) {
        return Err(JyotishError::InvalidInput("day must be 1-31"));
    }
    if !(-14.0..=14.0).contains(&utc_offset_hours) {
        return Err(JyotishError::InvalidInput("offset must be in [-14, +14]"));
    }
    let local_midnight_ut = calendar_to_jd(year, month, f64::from(day)) - utc_offset_hours / 24.0;
    let noon = local_midnight_ut + 0.5;
    let sunrise = rise_set_jd(location, RiseSetEvent::Sunrise, noon)?;
    let sunset = rise_set_jd(location, RiseSetEvent::Sunset, noon)?;
    let next_sunrise = rise_set_jd(location, RiseSetEvent::Sunrise, noon + 1.0)?;
    Ok((sunrise, sunset, next_sunrise))
}

/// Complete panchang for a local civil date, anchored at sunrise.
pub fn panchang_for_date(
    year: i32,
    month: u32,
    day: u32,
    utc_offset_hours: f64,
    location: &GeoLocation,
    system: AyanamshaSystem,
) -> Result<PanchangInfo, JyotishError> {
    tracing::debug!(year, month, day, "computing panchang");
    let (sunrise, sunset, next_sunrise) =
        vedic_day_sun_events(year, month, day, utc_offset_hours, location)?;
    Ok(PanchangInfo {
        sunrise: UtcTime::from_jd(sunrise),
        sunset: UtcTime::from_jd(sunset),
        next_sunrise: UtcTime::from_jd(next_sunrise),
        tithi: tithi_at(sunrise)?,
        nakshatra: nakshatra_at(sunrise, system)?,
        yoga: yoga_at(sunrise, system)?,
        karana: karana_at(sunrise)?,
        vaar: vaar_at(sunrise, utc_offset_hours),
        ayanamsha_deg: ayanamsha_deg(system, sunrise),
    })
}
