//! Types for nakshatra-based dasha systems.

use bhaskar_time::UtcTime;
use bhaskar_vedic::Graha;
use serde::Serialize;

/// Mean days per dasha year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// One entity in a dasha sequence: a named lord and its period length.
#[derive(Debug, Clone, Copy)]
pub struct DashaEntity {
    /// Display name of the period ("Shukra", or a yogini name).
    pub name: &'static str,
    /// Ruling graha.
    pub graha: Graha,
    /// Full-cycle period length in years.
    pub years: f64,
}

/// Configuration of a nakshatra-based dasha system.
///
/// The Moon's birth nakshatra selects the opening entity through
/// `start_offset`, and the fraction of the nakshatra already traversed
/// consumes the same fraction of the opening period.
#[derive(Debug, Clone, Copy)]
pub struct NakshatraDashaConfig {
    pub system_name: &'static str,
    /// Entities in sequence order.
    pub entities: &'static [DashaEntity],
    /// Total cycle length in years (sum of all entity periods).
    pub total_years: f64,
    /// Opening entity index = (nakshatra index + offset) mod entity count.
    pub start_offset: usize,
}

/// One dasha period at some level of the hierarchy.
#[derive(Debug, Clone, Serialize)]
pub struct DashaPeriod {
    /// Display name of the entity ruling the period.
    pub entity: &'static str,
    pub graha: Graha,
    pub start: UtcTime,
    pub end: UtcTime,
    /// JD (UT) bounds of the period.
    pub start_jd: f64,
    pub end_jd: f64,
    /// 0 = mahadasha, 1 = antardasha, 2 = pratyantardasha.
    pub level: u8,
    /// Position within the parent (or the cycle, at level 0).
    pub order: usize,
    /// Index of the parent period in the flattened hierarchy.
    pub parent_idx: Option<usize>,
}

impl DashaPeriod {
    /// Whether the period is running at `jd`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    /// Period length in years.
    pub fn span_years(&self) -> f64 {
        (self.end_jd - self.start_jd) / DAYS_PER_YEAR
    }
}

/// The chain of periods running at one instant, outermost first.
#[derive(Debug, Clone, Serialize)]
pub struct DashaSnapshot {
    pub system: &'static str,
    pub at: UtcTime,
    /// Mahadasha, then antardasha, then pratyantardasha.
    pub chain: Vec<DashaPeriod>,
}
