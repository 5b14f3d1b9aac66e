//! Nakshatra (lunar mansion) classification and matching attributes.
//!
//! The 27-fold scheme: equal segments of 360/27 degrees starting at the
//! sidereal zero point, each split into four padas. The yoni, gana and
//! nadi attributes drive the marriage kutas; the lord drives the
//! Vimshottari dasha sequence.

use crate::graha::Graha;

/// Width of one nakshatra in degrees (13 deg 20 min).
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Width of one pada in degrees (3 deg 20 min).
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in zodiacal order.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Gana (temperament class) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Deva => 0,
            Self::Manushya => 1,
            Self::Rakshasa => 2,
        }
    }
}

/// Nadi (pulse/humor class) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adi => "Adi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }
}

/// Yoni animal of a nakshatra. Fourteen animals cover the 27 mansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoni {
    Ashwa,
    Gaja,
    Mesha,
    Sarpa,
    Shwan,
    Marjara,
    Mushaka,
    Gau,
    Mahisha,
    Vyaghra,
    Mriga,
    Vanara,
    Nakula,
    Simha,
}

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwa => "Ashwa",
            Self::Gaja => "Gaja",
            Self::Mesha => "Mesha",
            Self::Sarpa => "Sarpa",
            Self::Shwan => "Shwan",
            Self::Marjara => "Marjara",
            Self::Mushaka => "Mushaka",
            Self::Gau => "Gau",
            Self::Mahisha => "Mahisha",
            Self::Vyaghra => "Vyaghra",
            Self::Mriga => "Mriga",
            Self::Vanara => "Vanara",
            Self::Nakula => "Nakula",
            Self::Simha => "Simha",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Ashwa => 0,
            Self::Gaja => 1,
            Self::Mesha => 2,
            Self::Sarpa => 3,
            Self::Shwan => 4,
            Self::Marjara => 5,
            Self::Mushaka => 6,
            Self::Gau => 7,
            Self::Mahisha => 8,
            Self::Vyaghra => 9,
            Self::Mriga => 10,
            Self::Vanara => 11,
            Self::Nakula => 12,
            Self::Simha => 13,
        }
    }
}

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Zero-based index in zodiacal order (Ashwini = 0).
    pub fn index(self) -> usize {
        ALL_NAKSHATRAS
            .iter()
            .position(|n| *n == self)
            .unwrap_or(0)
    }

    /// Nakshatra from its zero-based index, wrapping modulo 27.
    pub const fn from_index(index: usize) -> Self {
        ALL_NAKSHATRAS[index % 27]
    }

    /// Start of this nakshatra in sidereal longitude, degrees.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_DEG
    }

    /// Ruling graha in the Vimshottari sequence: the nine lords repeat
    /// three times across the 27 mansions, starting with Ketu.
    pub fn vimshottari_lord(self) -> Graha {
        const LORDS: [Graha; 9] = [
            Graha::Ketu,
            Graha::Shukra,
            Graha::Surya,
            Graha::Chandra,
            Graha::Mangal,
            Graha::Rahu,
            Graha::Guru,
            Graha::Shani,
            Graha::Buddh,
        ];
        LORDS[self.index() % 9]
    }

    /// Gana (temperament) class.
    pub const fn gana(self) -> Gana {
        match self {
            Self::Ashwini
            | Self::Mrigashira
            | Self::Punarvasu
            | Self::Pushya
            | Self::Hasta
            | Self::Swati
            | Self::Anuradha
            | Self::Shravana
            | Self::Revati => Gana::Deva,
            Self::Bharani
            | Self::Rohini
            | Self::Ardra
            | Self::PurvaPhalguni
            | Self::UttaraPhalguni
            | Self::PurvaAshadha
            | Self::UttaraAshadha
            | Self::PurvaBhadrapada
            | Self::UttaraBhadrapada => Gana::Manushya,
            Self::Krittika
            | Self::Ashlesha
            | Self::Magha
            | Self::Chitra
            | Self::Vishakha
            | Self::Jyeshtha
            | Self::Mula
            | Self::Dhanishta
            | Self::Shatabhisha => Gana::Rakshasa,
        }
    }

    /// Nadi class. The pattern repeats every nine mansions.
    pub fn nadi(self) -> Nadi {
        const PATTERN: [Nadi; 9] = [
            Nadi::Adi,
            Nadi::Madhya,
            Nadi::Antya,
            Nadi::Antya,
            Nadi::Madhya,
            Nadi::Adi,
            Nadi::Adi,
            Nadi::Madhya,
            Nadi::Antya,
        ];
        PATTERN[self.index() % 9]
    }

    /// Yoni animal.
    pub const fn yoni(self) -> Yoni {
        match self {
            Self::Ashwini | Self::Shatabhisha => Yoni::Ashwa,
            Self::Bharani | Self::Revati => Yoni::Gaja,
            Self::Krittika | Self::Pushya => Yoni::Mesha,
            Self::Rohini | Self::Mrigashira => Yoni::Sarpa,
            Self::Ardra | Self::Mula => Yoni::Shwan,
            Self::Punarvasu | Self::Ashlesha => Yoni::Marjara,
            Self::Magha | Self::PurvaPhalguni => Yoni::Mushaka,
            Self::UttaraPhalguni | Self::UttaraBhadrapada => Yoni::Gau,
            Self::Hasta | Self::Swati => Yoni::Mahisha,
            Self::Chitra | Self::Vishakha => Yoni::Vyaghra,
            Self::Anuradha | Self::Jyeshtha => Yoni::Mriga,
            Self::PurvaAshadha | Self::Shravana => Yoni::Vanara,
            Self::UttaraAshadha => Yoni::Nakula,
            Self::Dhanishta | Self::PurvaBhadrapada => Yoni::Simha,
        }
    }
}

crate::impl_serialize_as_name!(Nakshatra, Gana, Nadi, Yoni);

/// A sidereal longitude resolved into nakshatra, pada and offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// Pada number, 1 through 4.
    pub pada: u8,
    /// Degrees traversed within the nakshatra, [0, 360/27).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraPosition {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn fraction_traversed(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN_DEG
    }
}

/// Classify a sidereal ecliptic longitude into its nakshatra and pada.
pub fn nakshatra_from_longitude(sidereal_deg: f64) -> NakshatraPosition {
    let lon = sidereal_deg.rem_euclid(360.0);
    let index = ((lon / NAKSHATRA_SPAN_DEG) as usize).min(26);
    let offset = lon - index as f64 * NAKSHATRA_SPAN_DEG;
    let pada = ((offset / PADA_SPAN_DEG) as u8).min(3) + 1;
    NakshatraPosition {
        nakshatra: Nakshatra::from_index(index),
        pada,
        degrees_in_nakshatra: offset,
    }
}
