//! Boundary search over slowly-varying angular quantities.
//!
//! The panchang elements are defined by an angle (elongation, sum,
//! longitude) crossing a segment boundary. All of these angles advance
//! monotonically at a bounded rate (under 15 degrees per day), so a
//! coarse scan for a sign change followed by bisection is reliable.

use crate::error::JyotishError;

/// Maximum coarse scan steps before giving up on a bracket.
const MAX_SCAN_STEPS: usize = 60;

/// Bisection iterations; halving a one-day bracket 50 times reaches
/// well below a millisecond.
const BISECTION_ITERATIONS: usize = 50;

/// Normalize an angular difference to [-180, 180).
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// Find the instant at which `eval` crosses `target_deg`.
///
/// Scans from `jd_start` in steps of `step_days` (negative to search
/// backward) until the signed offset from the target changes sign, then
/// bisects the bracket. `eval` must be monotonically increasing through
/// the target at the crossing.
pub fn find_angle_boundary<F>(
    eval: &F,
    target_deg: f64,
    jd_start: f64,
    step_days: f64,
    label: &'static str,
) -> Result<f64, JyotishError>
where
    F: Fn(f64) -> Result<f64, JyotishError>,
{
    let offset = |jd: f64| -> Result<f64, JyotishError> {
        Ok(normalize_to_pm180(eval(jd)? - target_deg))
    };

    let mut prev_jd = jd_start;
    let mut prev_off = offset(prev_jd)?;
    if prev_off == 0.0 {
        return Ok(prev_jd);
    }

    let mut bracket = None;
    for i in 1..=MAX_SCAN_STEPS {
        let jd = jd_start + i as f64 * step_days;
        let off = offset(jd)?;
        if off == 0.0 {
            return Ok(jd);
        }
        if off.signum() != prev_off.signum() {
            bracket = Some((prev_jd, prev_off, jd));
            break;
        }
        prev_jd = jd;
        prev_off = off;
    }
    let Some((mut a, mut off_a, mut b)) = bracket else {
        return Err(JyotishError::SearchFailed(label));
    };

    for _ in 0..BISECTION_ITERATIONS {
        let mid = 0.5 * (a + b);
        let off_mid = offset(mid)?;
        if off_mid == 0.0 {
            return Ok(mid);
        }
        if off_mid.signum() == off_a.signum() {
            a = mid;
            off_a = off_mid;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}
