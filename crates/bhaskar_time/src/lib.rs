//! Calendar, Julian Day, and sidereal time primitives.
//!
//! Everything in this workspace runs on a single JD(UT) timeline: civil
//! input times carry a fixed UTC offset and are converted to UTC once, at
//! the boundary. Panchang-level accuracy (around a minute) does not warrant
//! a separate dynamical time scale.

pub mod error;
pub mod julian;
pub mod local;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use local::LocalTime;
pub use sidereal::{gmst_deg, local_sidereal_deg};
pub use utc_time::UtcTime;
