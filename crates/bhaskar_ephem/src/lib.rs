//! Self-contained analytic ephemeris.
//!
//! Geocentric ecliptic longitudes for the bodies Vedic astrology needs,
//! from closed-form series — no kernel files, no external library:
//! - Sun: Meeus ch. 25 (equation of center on the mean longitude)
//! - Moon: truncated ELP-2000 series, Meeus ch. 47
//! - Mercury..Saturn: Standish mean Keplerian elements (1800-2050) with a
//!   Newton solve of Kepler's equation, heliocentric then geocentric
//! - Rahu/Ketu: mean lunar node polynomial
//!
//! Accuracy is a small fraction of an arcminute for the Sun, a few
//! arcminutes for the Moon and planets — well inside the minute-level
//! panchang target.

pub mod error;
pub mod frames;
pub mod moon;
pub mod nodes;
pub mod planets;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

pub use error::EphemError;
pub use frames::{ecliptic_to_equatorial, mean_obliquity_deg, nutation_longitude_deg};
pub use moon::{moon_apparent_longitude, moon_longitude};
pub use nodes::{ketu_longitude, mean_lunar_node_deg, rahu_longitude};
pub use planets::{Planet, is_retrograde, planet_geocentric_longitude};
pub use riseset::{approximate_local_noon_jd, compute_rise_set};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use sun::{sun_apparent_longitude, sun_true_longitude};
