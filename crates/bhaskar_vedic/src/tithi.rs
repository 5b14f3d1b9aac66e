//! Tithi (lunar day) classification.
//!
//! A tithi is one 12-degree step of the Moon-Sun elongation. Thirty
//! tithis make a lunation: fifteen in the waxing (Shukla) paksha ending
//! at Purnima, fifteen in the waning (Krishna) paksha ending at
//! Amavasya.

/// Width of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing: elongation [0, 180).
    Shukla,
    /// Waning: elongation [180, 360).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names within a paksha; the fifteenth differs by paksha.
const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// An elongation resolved into a tithi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// Zero-based index in the lunation, 0 (Shukla Pratipada) through
    /// 29 (Amavasya).
    pub index: usize,
    pub paksha: Paksha,
    /// Degrees of elongation traversed within the tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiPosition {
    /// Tithi name without the paksha qualifier.
    ///
    /// Total for any index value: out-of-range indices clamp to the
    /// last plain name instead of panicking.
    pub const fn name(&self) -> &'static str {
        match self.index {
            14 => "Purnima",
            29 => "Amavasya",
            i => {
                let i = i % 15;
                TITHI_NAMES[if i < 14 { i } else { 13 }]
            }
        }
    }

    /// One-based tithi number within its paksha, 1 through 15.
    pub const fn number_in_paksha(&self) -> usize {
        self.index % 15 + 1
    }

    /// Fraction of the tithi already traversed, [0, 1).
    pub fn fraction_traversed(&self) -> f64 {
        self.degrees_in_tithi / TITHI_SEGMENT_DEG
    }
}

crate::impl_serialize_as_name!(Paksha);

/// Classify a Moon-Sun elongation (degrees) into its tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = elongation_deg.rem_euclid(360.0);
    let index = ((elong / TITHI_SEGMENT_DEG) as usize).min(29);
    let paksha = if index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiPosition {
        index,
        paksha,
        degrees_in_tithi: elong - index as f64 * TITHI_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_starts_shukla_pratipada() {
        let t = tithi_from_elongation(0.0);
        assert_eq!(t.index, 0);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.name(), "Pratipada");
        assert_eq!(t.number_in_paksha(), 1);
    }

    #[test]
    fn full_moon_is_purnima() {
        let t = tithi_from_elongation(179.0);
        assert_eq!(t.index, 14);
        assert_eq!(t.name(), "Purnima");
        assert_eq!(t.paksha, Paksha::Shukla);
    }

    #[test]
    fn paksha_flips_at_180() {
        let t = tithi_from_elongation(180.0);
        assert_eq!(t.index, 15);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.name(), "Pratipada");
        assert_eq!(t.number_in_paksha(), 1);
    }

    #[test]
    fn last_tithi_is_amavasya() {
        let t = tithi_from_elongation(359.999);
        assert_eq!(t.index, 29);
        assert_eq!(t.name(), "Amavasya");
        assert_eq!(t.number_in_paksha(), 15);
    }

    #[test]
    fn boundaries_half_open() {
        assert_eq!(tithi_from_elongation(11.999_999).index, 0);
        assert_eq!(tithi_from_elongation(12.0).index, 1);
        assert_eq!(tithi_from_elongation(360.0).index, 0);
    }

    #[test]
    fn name_is_total_for_hand_built_positions() {
        // index 44 folds to 14 in the paksha; must not index past the
        // 14 plain names
        let odd = TithiPosition {
            index: 44,
            paksha: Paksha::Krishna,
            degrees_in_tithi: 0.0,
        };
        assert_eq!(odd.name(), "Chaturdashi");
    }

    #[test]
    fn fraction_traversed() {
        let t = tithi_from_elongation(18.0);
        assert_eq!(t.index, 1);
        assert!((t.fraction_traversed() - 0.5).abs() < 1e-12);
    }
}
