//! Pure Vedic classification math and reference tables.
//!
//! Every function here is closed-form arithmetic over longitudes already
//! computed elsewhere: no ephemeris queries, no I/O. This is the single
//! home for the tithi/nakshatra/yoga/karana segment formulas and the
//! static attribute tables (lordship, friendship, yoni, gana, nadi) that
//! the orchestration layers consume.

/// Implement `serde::Serialize` for an enum as its display `name()`.
macro_rules! impl_serialize_as_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.name())
                }
            }
        )+
    };
}

pub mod ayanamsha;
pub mod graha;
pub mod karana;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, tropical_to_sidereal};
pub use graha::{ALL_GRAHAS, Friendship, Graha, natural_relation, rashi_lord};
pub use karana::{KARANA_SEGMENT_DEG, Karana, KaranaPosition, karana_from_elongation};
pub use nakshatra::{
    ALL_NAKSHATRAS, Gana, NAKSHATRA_SPAN_DEG, Nadi, Nakshatra, NakshatraPosition, PADA_SPAN_DEG,
    Yoni, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiPosition, Varna, Vashya, rashi_from_longitude,
};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiPosition, tithi_from_elongation};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};

pub(crate) use impl_serialize_as_name;
