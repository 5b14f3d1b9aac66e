//! Ashta koota marriage matching: eight scores totalling 36 points.
//!
//! All eight kutas derive from the two Moon placements alone (rashi and
//! nakshatra), scored groom-against-bride with the classical tables.

use bhaskar_vedic::{
    AyanamshaSystem, Friendship, Gana, NakshatraPosition, RashiPosition, Vashya,
    nakshatra_from_longitude, natural_relation, rashi_from_longitude, rashi_lord,
};
use serde::Serialize;

use crate::error::JyotishError;
use crate::panchang::moon_sidereal_longitude_at;

/// Maximum obtainable total.
pub const MAX_KUTA_POINTS: f64 = 36.0;

/// One scored kuta.
#[derive(Debug, Clone, Serialize)]
pub struct KutaScore {
    pub name: &'static str,
    pub points: f64,
    pub max_points: f64,
    /// Short note naming the compared attributes.
    pub detail: String,
}

/// Overall verdict bands on the 36-point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchVerdict {
    Excellent,
    VeryGood,
    Acceptable,
    NotRecommended,
}

impl MatchVerdict {
    /// Bands: above 32 excellent, above 24 good, 18 and up acceptable.
    /// Strict upper cuts so that half-point totals (32.5, 24.5) land in
    /// the higher band.
    pub const fn from_total(total: f64) -> Self {
        if total > 32.0 {
            Self::Excellent
        } else if total > 24.0 {
            Self::VeryGood
        } else if total >= 18.0 {
            Self::Acceptable
        } else {
            Self::NotRecommended
        }
    }
}

/// Full matching report.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub kutas: Vec<KutaScore>,
    pub total: f64,
    pub max_total: f64,
    pub verdict: MatchVerdict,
}

/// One partner's Moon placement.
#[derive(Debug, Clone, Copy)]
struct MoonPlacement {
    rashi: RashiPosition,
    nakshatra: NakshatraPosition,
}

impl MoonPlacement {
    fn from_longitude(moon_sidereal_deg: f64) -> Self {
        Self {
            rashi: rashi_from_longitude(moon_sidereal_deg),
            nakshatra: nakshatra_from_longitude(moon_sidereal_deg),
        }
    }
}

/// Varna (1): full point unless the bride's varna outranks the groom's.
fn varna_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    let g = groom.rashi.rashi.varna();
    let b = bride.rashi.rashi.varna();
    let points = if g.rank() >= b.rank() { 1.0 } else { 0.0 };
    KutaScore {
        name: "Varna",
        points,
        max_points: 1.0,
        detail: format!("{} / {}", g.name(), b.name()),
    }
}

/// Vashya (2): mutual dominance table over the five groups, groom rows.
fn vashya_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    // Rows/columns: Chatushpada, Manava, Jalachara, Vanachara, Keeta
    const TABLE: [[f64; 5]; 5] = [
        [2.0, 1.0, 1.0, 0.0, 1.0],
        [1.0, 2.0, 0.5, 0.0, 1.0],
        [1.0, 0.5, 2.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 2.0, 0.0],
        [1.0, 1.0, 1.0, 0.0, 2.0],
    ];
    let g: Vashya = groom.rashi.rashi.vashya();
    let b: Vashya = bride.rashi.rashi.vashya();
    KutaScore {
        name: "Vashya",
        points: TABLE[g.index()][b.index()],
        max_points: 2.0,
        detail: format!("{} / {}", g.name(), b.name()),
    }
}

/// Tara (3): count nakshatras each way; remainders 3, 5 and 7 mod 9
/// (Vipat, Pratyari, Naidhana) forfeit that direction's 1.5 points.
fn tara_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    let g = groom.nakshatra.nakshatra.index();
    let b = bride.nakshatra.nakshatra.index();
    let score_direction = |from: usize, to: usize| -> f64 {
        let count = (to + 27 - from) % 27 + 1;
        if matches!(count % 9, 3 | 5 | 7) { 0.0 } else { 1.5 }
    };
    let points = score_direction(b, g) + score_direction(g, b);
    KutaScore {
        name: "Tara",
        points,
        max_points: 3.0,
        detail: format!(
            "{} / {}",
            groom.nakshatra.nakshatra.name(),
            bride.nakshatra.nakshatra.name()
        ),
    }
}

/// Yoni (4): 14x14 animal affinity table, 4 for the same animal down to
/// 0 for sworn enemies.
fn yoni_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    // Rows/columns in Yoni::index order: Ashwa, Gaja, Mesha, Sarpa,
    // Shwan, Marjara, Mushaka, Gau, Mahisha, Vyaghra, Mriga, Vanara,
    // Nakula, Simha
    const TABLE: [[u8; 14]; 14] = [
        [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 1, 3, 2, 1],
        [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
        [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
        [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
        [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
        [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
        [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
        [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
        [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1],
        [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
        [1, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
        [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
        [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
        [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4],
    ];
    let g = groom.nakshatra.nakshatra.yoni();
    let b = bride.nakshatra.nakshatra.yoni();
    KutaScore {
        name: "Yoni",
        points: f64::from(TABLE[g.index()][b.index()]),
        max_points: 4.0,
        detail: format!("{} / {}", g.name(), b.name()),
    }
}

/// Graha maitri (5): natural relation between the Moon-sign lords, read
/// both ways.
fn graha_maitri_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    use Friendship::{Enemy, Friend, Neutral};
    let g_lord = rashi_lord(groom.rashi.rashi);
    let b_lord = rashi_lord(bride.rashi.rashi);
    let ab = natural_relation(g_lord, b_lord);
    let ba = natural_relation(b_lord, g_lord);
    let points = match (ab, ba) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    };
    KutaScore {
        name: "Graha Maitri",
        points,
        max_points: 5.0,
        detail: format!("{} / {}", g_lord.name(), b_lord.name()),
    }
}

/// Gana (6): temperament table, groom rows over Deva, Manushya,
/// Rakshasa.
fn gana_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    const TABLE: [[f64; 3]; 3] = [
        [6.0, 6.0, 1.0],
        [5.0, 6.0, 0.0],
        [1.0, 0.0, 6.0],
    ];
    let g: Gana = groom.nakshatra.nakshatra.gana();
    let b: Gana = bride.nakshatra.nakshatra.gana();
    KutaScore {
        name: "Gana",
        points: TABLE[g.index()][b.index()],
        max_points: 6.0,
        detail: format!("{} / {}", g.name(), b.name()),
    }
}

/// Bhakoot (7): all points unless the rashis sit 2/12, 5/9 or 6/8 from
/// each other.
fn bhakoot_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    let g = groom.rashi.rashi.index();
    let b = bride.rashi.rashi.index();
    let d = (b + 12 - g) % 12;
    let afflicted = matches!(d, 1 | 11 | 4 | 8 | 5 | 7);
    KutaScore {
        name: "Bhakoot",
        points: if afflicted { 0.0 } else { 7.0 },
        max_points: 7.0,
        detail: format!(
            "{} / {}",
            groom.rashi.rashi.name(),
            bride.rashi.rashi.name()
        ),
    }
}

/// Nadi (8): full points only when the nadis differ.
fn nadi_kuta(groom: &MoonPlacement, bride: &MoonPlacement) -> KutaScore {
    let g = groom.nakshatra.nakshatra.nadi();
    let b = bride.nakshatra.nakshatra.nadi();
    KutaScore {
        name: "Nadi",
        points: if g == b { 0.0 } else { 8.0 },
        max_points: 8.0,
        detail: format!("{} / {}", g.name(), b.name()),
    }
}

/// Score all eight kutas from the two Moon sidereal longitudes.
pub fn ashta_koota(groom_moon_sidereal_deg: f64, bride_moon_sidereal_deg: f64) -> MatchReport {
    let groom = MoonPlacement::from_longitude(groom_moon_sidereal_deg);
    let bride = MoonPlacement::from_longitude(bride_moon_sidereal_deg);
    let kutas = vec![
        varna_kuta(&groom, &bride),
        vashya_kuta(&groom, &bride),
        tara_kuta(&groom, &bride),
        yoni_kuta(&groom, &bride),
        graha_maitri_kuta(&groom, &bride),
        gana_kuta(&groom, &bride),
        bhakoot_kuta(&groom, &bride),
        nadi_kuta(&groom, &bride),
    ];
    let total = kutas.iter().map(|k| k.points).sum();
    MatchReport {
        kutas,
        total,
        max_total: MAX_KUTA_POINTS,
        verdict: MatchVerdict::from_total(total),
    }
}

/// Score a match from two birth instants, computing the Moon positions.
pub fn ashta_koota_for_births(
    groom_birth_jd: f64,
    bride_birth_jd: f64,
    system: AyanamshaSystem,
) -> Result<MatchReport, JyotishError> {
    let groom_moon = moon_sidereal_longitude_at(groom_birth_jd, system)?;
    let bride_moon = moon_sidereal_longitude_at(bride_birth_jd, system)?;
    Ok(ashta_koota(groom_moon, bride_moon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_vedic::{NAKSHATRA_SPAN_DEG, RASHI_SPAN_DEG};

    /// Sidereal longitude placing the Moon mid-way into a nakshatra.
    fn mid_nakshatra(index: usize) -> f64 {
        (index as f64 + 0.5) * NAKSHATRA_SPAN_DEG
    }

    #[test]
    fn identical_moons_score_high_but_lose_nadi() {
        let report = ashta_koota(mid_nakshatra(0), mid_nakshatra(0));
        let nadi = report.kutas.iter().find(|k| k.name == "Nadi").unwrap();
        assert_eq!(nadi.points, 0.0);
        let yoni = report.kutas.iter().find(|k| k.name == "Yoni").unwrap();
        assert_eq!(yoni.points, 4.0);
        let gana = report.kutas.iter().find(|k| k.name == "Gana").unwrap();
        assert_eq!(gana.points, 6.0);
    }

    #[test]
    fn max_total_is_36() {
        let report = ashta_koota(mid_nakshatra(3), mid_nakshatra(12));
        assert_eq!(report.max_total, 36.0);
        assert_eq!(report.kutas.len(), 8);
        let sum: f64 = report.kutas.iter().map(|k| k.max_points).sum();
        assert_eq!(sum, 36.0);
        assert!(report.total <= report.max_total);
    }

    #[test]
    fn tara_self_count_scores_full() {
        // Same nakshatra both ways: count 1, remainder 1, auspicious
        let report = ashta_koota(mid_nakshatra(5), mid_nakshatra(5));
        let tara = report.kutas.iter().find(|k| k.name == "Tara").unwrap();
        assert_eq!(tara.points, 3.0);
    }

    #[test]
    fn tara_vipat_forfeits_one_direction() {
        // Groom 2 counted from bride 0: count 3 (Vipat) -> 0.
        // Bride 0 counted from groom 2: count 26, 26 % 9 = 8 -> 1.5.
        let report = ashta_koota(mid_nakshatra(2), mid_nakshatra(0));
        let tara = report.kutas.iter().find(|k| k.name == "Tara").unwrap();
        assert_eq!(tara.points, 1.5);
    }

    #[test]
    fn yoni_sworn_enemies_score_zero() {
        // Ashwini (Ashwa) vs Hasta (Mahisha)
        let report = ashta_koota(mid_nakshatra(0), mid_nakshatra(12));
        let yoni = report.kutas.iter().find(|k| k.name == "Yoni").unwrap();
        assert_eq!(yoni.points, 0.0);
    }

    #[test]
    fn yoni_table_is_symmetric() {
        for a in 0..27 {
            for b in 0..27 {
                let ab = ashta_koota(mid_nakshatra(a), mid_nakshatra(b));
                let ba = ashta_koota(mid_nakshatra(b), mid_nakshatra(a));
                let score = |r: &MatchReport| {
                    r.kutas.iter().find(|k| k.name == "Yoni").unwrap().points
                };
                assert_eq!(score(&ab), score(&ba), "nakshatras {a} {b}");
            }
        }
    }

    #[test]
    fn bhakoot_six_eight_scores_zero() {
        // Mesha and Kanya moons: 6 apart one way, 8 the other
        let groom = 0.5 * RASHI_SPAN_DEG;
        let bride = 5.5 * RASHI_SPAN_DEG;
        let report = ashta_koota(groom, bride);
        let bhakoot = report.kutas.iter().find(|k| k.name == "Bhakoot").unwrap();
        assert_eq!(bhakoot.points, 0.0);
    }

    #[test]
    fn bhakoot_three_eleven_scores_full() {
        // Mesha and Mithuna: the 3/11 relation is unafflicted
        let report = ashta_koota(0.5 * RASHI_SPAN_DEG, 2.5 * RASHI_SPAN_DEG);
        let bhakoot = report.kutas.iter().find(|k| k.name == "Bhakoot").unwrap();
        assert_eq!(bhakoot.points, 7.0);
    }

    #[test]
    fn same_lord_is_full_maitri() {
        // Mesha and Vrishchika share Mangal
        let report = ashta_koota(0.5 * RASHI_SPAN_DEG, 7.5 * RASHI_SPAN_DEG);
        let maitri = report
            .kutas
            .iter()
            .find(|k| k.name == "Graha Maitri")
            .unwrap();
        assert_eq!(maitri.points, 5.0);
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(MatchVerdict::from_total(36.0), MatchVerdict::Excellent);
        assert_eq!(MatchVerdict::from_total(30.0), MatchVerdict::VeryGood);
        assert_eq!(MatchVerdict::from_total(20.0), MatchVerdict::Acceptable);
        assert_eq!(MatchVerdict::from_total(10.0), MatchVerdict::NotRecommended);
    }

    #[test]
    fn half_point_totals_round_into_the_higher_band() {
        // Half-point kutas (vashya, tara) make x.5 totals reachable
        assert_eq!(MatchVerdict::from_total(32.5), MatchVerdict::Excellent);
        assert_eq!(MatchVerdict::from_total(32.0), MatchVerdict::VeryGood);
        assert_eq!(MatchVerdict::from_total(24.5), MatchVerdict::VeryGood);
        assert_eq!(MatchVerdict::from_total(24.0), MatchVerdict::Acceptable);
        assert_eq!(MatchVerdict::from_total(18.0), MatchVerdict::Acceptable);
        assert_eq!(MatchVerdict::from_total(17.5), MatchVerdict::NotRecommended);
    }

    #[test]
    fn report_serializes() {
        let report = ashta_koota(mid_nakshatra(3), mid_nakshatra(16));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kutas"].as_array().unwrap().len(), 8);
        assert!(json["verdict"].is_string());
    }
}
