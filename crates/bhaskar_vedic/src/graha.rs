//! The nine grahas and their static relationship tables.
//!
//! Covers rashi lordship, exaltation, Vimshottari period lengths and the
//! classical natural-friendship matrix used by the graha maitri kuta.

use crate::rashi::Rashi;

/// The nine grahas of Vedic astrology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All nine grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Friendship {
    Friend,
    Neutral,
    Enemy,
}

impl Friendship {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
        }
    }
}

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Zero-based index in traditional order (Surya = 0).
    pub const fn index(self) -> usize {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Whether this is a shadow graha (lunar node).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Exaltation rashi.
    pub const fn exaltation(self) -> Rashi {
        match self {
            Self::Surya => Rashi::Mesha,
            Self::Chandra => Rashi::Vrishabha,
            Self::Mangal => Rashi::Makara,
            Self::Buddh => Rashi::Kanya,
            Self::Guru => Rashi::Karka,
            Self::Shukra => Rashi::Meena,
            Self::Shani => Rashi::Tula,
            Self::Rahu => Rashi::Vrishabha,
            Self::Ketu => Rashi::Vrishchika,
        }
    }

    /// Debilitation rashi: opposite the exaltation.
    pub const fn debilitation(self) -> Rashi {
        Rashi::from_index(self.exaltation().index() + 6)
    }

    /// Vimshottari mahadasha length in years.
    pub const fn vimshottari_years(self) -> f64 {
        match self {
            Self::Surya => 6.0,
            Self::Chandra => 10.0,
            Self::Mangal => 7.0,
            Self::Buddh => 17.0,
            Self::Guru => 16.0,
            Self::Shukra => 20.0,
            Self::Shani => 19.0,
            Self::Rahu => 18.0,
            Self::Ketu => 7.0,
        }
    }
}

crate::impl_serialize_as_name!(Graha, Friendship);

/// Lord of a rashi (classical sevenfold lordship).
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrishchika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Natural relationship of `graha` toward `other`.
///
/// Classical table; the relation is not symmetric (Chandra counts nobody
/// an enemy, but Shukra counts Chandra one).
pub const fn natural_relation(graha: Graha, other: Graha) -> Friendship {
    use Friendship::{Enemy, Friend, Neutral};
    use Graha::{Buddh, Chandra, Guru, Ketu, Mangal, Rahu, Shani, Shukra, Surya};
    if graha.index() == other.index() {
        return Friend;
    }
    match graha {
        Surya => match other {
            Chandra | Mangal | Guru => Friend,
            Buddh => Neutral,
            _ => Enemy,
        },
        Chandra => match other {
            Surya | Buddh => Friend,
            _ => Neutral,
        },
        Mangal => match other {
            Surya | Chandra | Guru => Friend,
            Shukra | Shani => Neutral,
            _ => Enemy,
        },
        Buddh => match other {
            Surya | Shukra => Friend,
            Chandra => Enemy,
            _ => Neutral,
        },
        Guru => match other {
            Surya | Chandra | Mangal => Friend,
            Buddh | Shukra => Enemy,
            _ => Neutral,
        },
        Shukra => match other {
            Buddh | Shani => Friend,
            Surya | Chandra => Enemy,
            _ => Neutral,
        },
        Shani => match other {
            Buddh | Shukra => Friend,
            Guru => Neutral,
            _ => Enemy,
        },
        Rahu => match other {
            Buddh | Shukra | Shani => Friend,
            Guru | Ketu => Neutral,
            _ => Enemy,
        },
        Ketu => match other {
            Mangal | Shukra | Shani => Friend,
            Buddh | Guru | Rahu => Neutral,
            _ => Enemy,
        },
    }
}
