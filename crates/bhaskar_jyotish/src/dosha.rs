//! Chart doshas: Mangal (Kuja) dosha and Kaal Sarp dosha.

use bhaskar_vedic::Graha;
use serde::Serialize;

use crate::error::JyotishError;
use crate::kundali_types::Kundali;

/// Houses from which Mangal afflicts: 1, 2, 4, 7, 8, 12.
const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Mangal dosha assessment.
#[derive(Debug, Clone, Serialize)]
pub struct MangalDoshaInfo {
    pub present: bool,
    /// Afflicting house counted from the lagna, if any.
    pub from_lagna: Option<u8>,
    /// Afflicting house counted from the Moon, if any.
    pub from_chandra: Option<u8>,
}

fn house_between(from_rashi_index: usize, to_rashi_index: usize) -> u8 {
    ((to_rashi_index + 12 - from_rashi_index) % 12 + 1) as u8
}

/// Assess Mangal dosha from the lagna and from the Moon.
pub fn mangal_dosha(chart: &Kundali) -> Result<MangalDoshaInfo, JyotishError> {
    let mangal = chart
        .graha(Graha::Mangal)
        .ok_or(JyotishError::InvalidInput("chart is missing Mangal"))?;
    let chandra = chart
        .graha(Graha::Chandra)
        .ok_or(JyotishError::InvalidInput("chart is missing Chandra"))?;

    let from_lagna_house = mangal.bhava;
    let from_chandra_house = house_between(chandra.rashi.index(), mangal.rashi.index());

    let from_lagna = MANGAL_DOSHA_HOUSES
        .contains(&from_lagna_house)
        .then_some(from_lagna_house);
    let from_chandra = MANGAL_DOSHA_HOUSES
        .contains(&from_chandra_house)
        .then_some(from_chandra_house);

    Ok(MangalDoshaInfo {
        present: from_lagna.is_some() || from_chandra.is_some(),
        from_lagna,
        from_chandra,
    })
}

/// Direction of the nodal axis enclosing the grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KaalSarpDirection {
    /// All grahas in the arc from Rahu forward to Ketu.
    RahuToKetu,
    /// All grahas in the arc from Ketu forward to Rahu.
    KetuToRahu,
}

/// Kaal Sarp dosha assessment.
#[derive(Debug, Clone, Serialize)]
pub struct KaalSarpInfo {
    pub present: bool,
    pub direction: Option<KaalSarpDirection>,
}

/// Whether `lon` lies in the half-open arc from `from` forward
/// (increasing longitude) to `to`.
fn in_forward_arc(lon: f64, from: f64, to: f64) -> bool {
    let span = (to - from).rem_euclid(360.0);
    let offset = (lon - from).rem_euclid(360.0);
    offset < span
}

/// Assess Kaal Sarp dosha: all seven bodily grahas hemmed within one
/// side of the Rahu-Ketu axis.
pub fn kaal_sarp_dosha(chart: &Kundali) -> Result<KaalSarpInfo, JyotishError> {
    let rahu = chart
        .graha(Graha::Rahu)
        .ok_or(JyotishError::InvalidInput("chart is missing Rahu"))?
        .longitude_deg;
    let ketu = chart
        .graha(Graha::Ketu)
        .ok_or(JyotishError::InvalidInput("chart is missing Ketu"))?
        .longitude_deg;

    let others: Vec<f64> = chart
        .grahas
        .iter()
        .filter(|p| !p.graha.is_node())
        .map(|p| p.longitude_deg)
        .collect();
    if others.len() != 7 {
        return Err(JyotishError::InvalidInput("chart is missing grahas"));
    }

    let all_rahu_side = others.iter().all(|&lon| in_forward_arc(lon, rahu, ketu));
    let all_ketu_side = others.iter().all(|&lon| in_forward_arc(lon, ketu, rahu));

    let direction = if all_rahu_side {
        Some(KaalSarpDirection::RahuToKetu)
    } else if all_ketu_side {
        Some(KaalSarpDirection::KetuToRahu)
    } else {
        None
    };
    Ok(KaalSarpInfo {
        present: direction.is_some(),
        direction,
    })
}
