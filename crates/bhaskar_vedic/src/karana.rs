//! Karana (half-tithi) classification.
//!
//! Sixty 6-degree segments of the Moon-Sun elongation per lunation.
//! Four karanas are fixed: Kimstughna opens the lunation, and Shakuni,
//! Chatushpada and Naga close it. The remaining 56 segments cycle
//! through the seven movable karanas starting at Bava.

/// Width of one karana in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The eleven karanas: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this is one of the four fixed (sthira) karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

crate::impl_serialize_as_name!(Karana);

/// The seven movable karanas in cycle order.
const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

/// An elongation resolved into a karana.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// Zero-based segment index in the lunation, 0 through 59.
    pub segment: usize,
    /// Degrees of elongation traversed within the karana, [0, 6).
    pub degrees_in_karana: f64,
}

/// Classify a Moon-Sun elongation (degrees) into its karana.
///
/// Segment 0 is Kimstughna; segments 1 through 56 cycle the movable
/// seven starting at Bava; segments 57, 58, 59 are Shakuni, Chatushpada
/// and Naga.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = elongation_deg.rem_euclid(360.0);
    let segment = ((elong / KARANA_SEGMENT_DEG) as usize).min(59);
    let karana = match segment {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        s => MOVABLE[(s - 1) % 7],
    };
    KaranaPosition {
        karana,
        segment,
        degrees_in_karana: elong - segment as f64 * KARANA_SEGMENT_DEG,
    }
}
