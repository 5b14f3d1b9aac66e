//! Result types for the birth chart.

use bhaskar_vedic::{AyanamshaSystem, Graha, Nakshatra, Rashi};
use serde::Serialize;

/// One graha placed in the chart.
#[derive(Debug, Clone, Serialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Degrees traversed within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// Pada number, 1 through 4.
    pub pada: u8,
    /// Whole-sign house counted from the lagna, 1 through 12.
    pub bhava: u8,
    pub retrograde: bool,
}

/// The ascendant.
#[derive(Debug, Clone, Serialize)]
pub struct LagnaInfo {
    /// Sidereal ecliptic longitude of the ascendant in degrees.
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Degrees traversed within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// A whole-sign birth chart.
#[derive(Debug, Clone, Serialize)]
pub struct Kundali {
    pub lagna: LagnaInfo,
    /// The nine grahas in traditional order.
    pub grahas: Vec<GrahaPosition>,
    pub ayanamsha: AyanamshaSystem,
    /// Ayanamsha applied, in degrees.
    pub ayanamsha_deg: f64,
}

impl Kundali {
    /// Position of a given graha.
    pub fn graha(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.grahas.iter().find(|p| p.graha == graha)
    }

    /// Grahas occupying a whole-sign house, 1 through 12.
    pub fn grahas_in_bhava(&self, bhava: u8) -> impl Iterator<Item = &GrahaPosition> {
        self.grahas.iter().filter(move |p| p.bhava == bhava)
    }
}
