//! Vaar (weekday) classification.
//!
//! The civil weekday of a JD(UT) instant. JD 0.0 fell on a Monday at
//! noon; shifting by 1.5 days aligns the floor with Sunday = 0.

use crate::graha::Graha;

/// The seven vaars, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivar,
    Somvar,
    Mangalvar,
    Budhvar,
    Guruvar,
    Shukravar,
    Shanivar,
}

/// All seven vaars, Sunday first.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivar,
    Vaar::Somvar,
    Vaar::Mangalvar,
    Vaar::Budhvar,
    Vaar::Guruvar,
    Vaar::Shukravar,
    Vaar::Shanivar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivar => "Ravivar",
            Self::Somvar => "Somvar",
            Self::Mangalvar => "Mangalvar",
            Self::Budhvar => "Budhvar",
            Self::Guruvar => "Guruvar",
            Self::Shukravar => "Shukravar",
            Self::Shanivar => "Shanivar",
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivar => "Sunday",
            Self::Somvar => "Monday",
            Self::Mangalvar => "Tuesday",
            Self::Budhvar => "Wednesday",
            Self::Guruvar => "Thursday",
            Self::Shukravar => "Friday",
            Self::Shanivar => "Saturday",
        }
    }

    /// Zero-based index, Sunday = 0.
    pub const fn index(self) -> usize {
        match self {
            Self::Ravivar => 0,
            Self::Somvar => 1,
            Self::Mangalvar => 2,
            Self::Budhvar => 3,
            Self::Guruvar => 4,
            Self::Shukravar => 5,
            Self::Shanivar => 6,
        }
    }

    /// Ruling graha of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivar => Graha::Surya,
            Self::Somvar => Graha::Chandra,
            Self::Mangalvar => Graha::Mangal,
            Self::Budhvar => Graha::Buddh,
            Self::Guruvar => Graha::Guru,
            Self::Shukravar => Graha::Shukra,
            Self::Shanivar => Graha::Shani,
        }
    }
}

crate::impl_serialize_as_name!(Vaar);

/// Weekday of a JD(UT) instant, using the civil midnight-to-midnight day.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let index = ((jd + 1.5).floor().rem_euclid(7.0)) as usize;
    ALL_VAARS[index]
}
