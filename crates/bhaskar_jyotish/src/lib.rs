//! Panchang, kundali, dasha, dosha and marriage-matching computations.
//!
//! This crate ties the ephemeris to the Vedic classification layer:
//! boundary searches turn instantaneous angles into panchang intervals,
//! the chart module places the grahas into whole-sign bhavas, and the
//! dasha engine runs any nakshatra-based period system from one
//! configuration.

pub mod dasha;
pub mod dasha_types;
pub mod dosha;
pub mod error;
pub mod kundali;
pub mod kundali_types;
pub mod kuta;
pub mod panchang;
pub mod panchang_types;
pub mod positions;
pub mod search_util;

pub use dasha::{
    dasha_balance, dasha_hierarchy, dasha_hierarchy_for_birth, dasha_snapshot,
    dasha_snapshot_for_birth, mahadashas, sub_periods, vimshottari_config, yogini_config,
};
pub use dasha_types::{
    DAYS_PER_YEAR, DashaEntity, DashaPeriod, DashaSnapshot, NakshatraDashaConfig,
};
pub use dosha::{
    KaalSarpDirection, KaalSarpInfo, MangalDoshaInfo, kaal_sarp_dosha, mangal_dosha,
};
pub use error::JyotishError;
pub use kundali::{ascendant_tropical_deg, kundali_at, lagna_at};
pub use kundali_types::{GrahaPosition, Kundali, LagnaInfo};
pub use kuta::{
    KutaScore, MAX_KUTA_POINTS, MatchReport, MatchVerdict, ashta_koota, ashta_koota_for_births,
};
pub use panchang::{
    elongation_at, karana_at, moon_sidereal_longitude_at, nakshatra_at, panchang_for_date,
    sidereal_sum_at, tithi_at, vaar_at, vedic_day_sun_events, yoga_at,
};
pub use panchang_types::{
    KaranaInfo, NakshatraInfo, PanchangInfo, TithiInfo, VaarInfo, YogaInfo,
};
pub use positions::{graha_is_retrograde, graha_sidereal_longitude, graha_tropical_longitude};
pub use search_util::{find_angle_boundary, normalize_to_pm180};
