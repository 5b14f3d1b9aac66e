//! Rashi (sidereal zodiac sign) classification and attributes.
//!
//! Twelve equal 30-degree segments of the sidereal ecliptic, starting at
//! Mesha. The varna and vashya attributes feed the marriage-matching
//! kutas and use the whole-sign assignment.

/// Width of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The twelve rashis in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All twelve rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Varna (social class) of a rashi, ordered highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

impl Varna {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brahmin => "Brahmin",
            Self::Kshatriya => "Kshatriya",
            Self::Vaishya => "Vaishya",
            Self::Shudra => "Shudra",
        }
    }

    /// Rank with Brahmin highest (3) down to Shudra (0).
    pub const fn rank(self) -> u8 {
        match self {
            Self::Brahmin => 3,
            Self::Kshatriya => 2,
            Self::Vaishya => 1,
            Self::Shudra => 0,
        }
    }
}

/// Vashya (dominance group) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vashya {
    /// Quadruped signs.
    Chatushpada,
    /// Human signs.
    Manava,
    /// Water signs.
    Jalachara,
    /// Wild beast (Simha only).
    Vanachara,
    /// Insect/scorpion (Vrishchika only).
    Keeta,
}

impl Vashya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chatushpada => "Chatushpada",
            Self::Manava => "Manava",
            Self::Jalachara => "Jalachara",
            Self::Vanachara => "Vanachara",
            Self::Keeta => "Keeta",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Chatushpada => 0,
            Self::Manava => 1,
            Self::Jalachara => 2,
            Self::Vanachara => 3,
            Self::Keeta => 4,
        }
    }
}

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Zero-based index in zodiacal order (Mesha = 0).
    pub const fn index(self) -> usize {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrishchika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi from its zero-based index, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_RASHIS[index % 12]
    }

    /// Start of this rashi in sidereal ecliptic longitude, degrees.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * RASHI_SPAN_DEG
    }

    /// Varna by element: water signs Brahmin, fire Kshatriya, earth
    /// Vaishya, air Shudra.
    pub const fn varna(self) -> Varna {
        match self {
            Self::Karka | Self::Vrishchika | Self::Meena => Varna::Brahmin,
            Self::Mesha | Self::Simha | Self::Dhanu => Varna::Kshatriya,
            Self::Vrishabha | Self::Kanya | Self::Makara => Varna::Vaishya,
            Self::Mithuna | Self::Tula | Self::Kumbha => Varna::Shudra,
        }
    }

    /// Vashya group, whole-sign assignment.
    pub const fn vashya(self) -> Vashya {
        match self {
            Self::Mesha | Self::Vrishabha | Self::Dhanu => Vashya::Chatushpada,
            Self::Mithuna | Self::Kanya | Self::Tula | Self::Kumbha => Vashya::Manava,
            Self::Karka | Self::Makara | Self::Meena => Vashya::Jalachara,
            Self::Simha => Vashya::Vanachara,
            Self::Vrishchika => Vashya::Keeta,
        }
    }
}

crate::impl_serialize_as_name!(Rashi, Varna, Vashya);

/// A sidereal longitude resolved into a rashi and offset within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPosition {
    pub rashi: Rashi,
    /// Degrees traversed within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Classify a sidereal ecliptic longitude into its rashi.
pub fn rashi_from_longitude(sidereal_deg: f64) -> RashiPosition {
    let lon = sidereal_deg.rem_euclid(360.0);
    let index = (lon / RASHI_SPAN_DEG) as usize;
    RashiPosition {
        rashi: Rashi::from_index(index),
        degrees_in_rashi: lon - index as f64 * RASHI_SPAN_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(360.0).rashi, Rashi::Mesha);
    }

    #[test]
    fn degrees_in_rashi() {
        let pos = rashi_from_longitude(95.5);
        assert_eq!(pos.rashi, Rashi::Karka);
        assert!((pos.degrees_in_rashi - 5.5).abs() < 1e-12);
    }

    #[test]
    fn index_round_trip() {
        for rashi in ALL_RASHIS {
            assert_eq!(Rashi::from_index(rashi.index()), rashi);
        }
    }

    #[test]
    fn varna_covers_elements() {
        assert_eq!(Rashi::Karka.varna(), Varna::Brahmin);
        assert_eq!(Rashi::Mesha.varna(), Varna::Kshatriya);
        assert_eq!(Rashi::Vrishabha.varna(), Varna::Vaishya);
        assert_eq!(Rashi::Kumbha.varna(), Varna::Shudra);
        assert!(Varna::Brahmin.rank() > Varna::Shudra.rank());
    }

    #[test]
    fn vashya_special_cases() {
        assert_eq!(Rashi::Simha.vashya(), Vashya::Vanachara);
        assert_eq!(Rashi::Vrishchika.vashya(), Vashya::Keeta);
        assert_eq!(Rashi::Meena.vashya(), Vashya::Jalachara);
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(serde_json::to_string(&Rashi::Dhanu).unwrap(), "\"Dhanu\"");
    }
}
