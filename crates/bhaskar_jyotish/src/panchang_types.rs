//! Result types for panchang computation.

use bhaskar_time::UtcTime;
use bhaskar_vedic::{Graha, Karana, Nakshatra, Paksha, Vaar, Yoga};
use serde::Serialize;

/// A tithi with its active interval.
#[derive(Debug, Clone, Serialize)]
pub struct TithiInfo {
    /// One-based number within the paksha, 1 through 15.
    pub number: usize,
    /// Tithi name (Pratipada .. Chaturdashi, Purnima, Amavasya).
    pub name: &'static str,
    pub paksha: Paksha,
    /// Instant the tithi began (UT).
    pub start: UtcTime,
    /// Instant the tithi ends (UT).
    pub end: UtcTime,
}

/// A nakshatra occupation with its active interval.
#[derive(Debug, Clone, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada number, 1 through 4.
    pub pada: u8,
    /// Vimshottari lord of the mansion.
    pub lord: Graha,
    pub start: UtcTime,
    pub end: UtcTime,
}

/// A yoga with its active interval.
#[derive(Debug, Clone, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub start: UtcTime,
    pub end: UtcTime,
}

/// A karana with its active interval.
#[derive(Debug, Clone, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    pub start: UtcTime,
    pub end: UtcTime,
}

/// The weekday and its lord.
#[derive(Debug, Clone, Serialize)]
pub struct VaarInfo {
    pub vaar: Vaar,
    pub english_name: &'static str,
    pub lord: Graha,
}

/// The five panchang limbs for one vedic day, anchored at sunrise.
#[derive(Debug, Clone, Serialize)]
pub struct PanchangInfo {
    /// Sunrise opening the vedic day (UT).
    pub sunrise: UtcTime,
    /// Sunset of the same civil day (UT).
    pub sunset: UtcTime,
    /// Sunrise of the following day, closing the vedic day (UT).
    pub next_sunrise: UtcTime,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaar: VaarInfo,
    /// Ayanamsha applied, in degrees.
    pub ayanamsha_deg: f64,
}
