//! Nakshatra-based dasha engines: Vimshottari and Yogini.
//!
//! Both systems share one mechanism. The Moon's birth nakshatra selects
//! the opening lord; the fraction of the nakshatra already traversed
//! consumes the same fraction of the opening period; thereafter the
//! lords cycle in fixed order with fixed period lengths. Sub-periods
//! divide the parent proportionally to each lord's full-cycle share,
//! starting from the parent's own lord.

use bhaskar_vedic::{AyanamshaSystem, Graha, nakshatra_from_longitude};

use crate::dasha_types::{
    DAYS_PER_YEAR, DashaEntity, DashaPeriod, DashaSnapshot, NakshatraDashaConfig,
};
use crate::error::JyotishError;
use crate::panchang::moon_sidereal_longitude_at;
use bhaskar_time::UtcTime;

/// Vimshottari: nine lords, 120 years, opening lord directly indexed by
/// the nakshatra (Ashwini opens with Ketu).
pub const fn vimshottari_config() -> NakshatraDashaConfig {
    const ENTITIES: [DashaEntity; 9] = [
        DashaEntity { name: "Ketu", graha: Graha::Ketu, years: 7.0 },
        DashaEntity { name: "Shukra", graha: Graha::Shukra, years: 20.0 },
        DashaEntity { name: "Surya", graha: Graha::Surya, years: 6.0 },
        DashaEntity { name: "Chandra", graha: Graha::Chandra, years: 10.0 },
        DashaEntity { name: "Mangal", graha: Graha::Mangal, years: 7.0 },
        DashaEntity { name: "Rahu", graha: Graha::Rahu, years: 18.0 },
        DashaEntity { name: "Guru", graha: Graha::Guru, years: 16.0 },
        DashaEntity { name: "Shani", graha: Graha::Shani, years: 19.0 },
        DashaEntity { name: "Buddh", graha: Graha::Buddh, years: 17.0 },
    ];
    NakshatraDashaConfig {
        system_name: "Vimshottari",
        entities: &ENTITIES,
        total_years: 120.0,
        start_offset: 0,
    }
}

/// Yogini: eight yoginis, 36 years, opening yogini at
/// (nakshatra index + 3) mod 8 (Ashwini opens with Bhramari).
pub const fn yogini_config() -> NakshatraDashaConfig {
    const ENTITIES: [DashaEntity; 8] = [
        DashaEntity { name: "Mangala", graha: Graha::Chandra, years: 1.0 },
        DashaEntity { name: "Pingala", graha: Graha::Surya, years: 2.0 },
        DashaEntity { name: "Dhanya", graha: Graha::Guru, years: 3.0 },
        DashaEntity { name: "Bhramari", graha: Graha::Mangal, years: 4.0 },
        DashaEntity { name: "Bhadrika", graha: Graha::Buddh, years: 5.0 },
        DashaEntity { name: "Ulka", graha: Graha::Shani, years: 6.0 },
        DashaEntity { name: "Siddha", graha: Graha::Shukra, years: 7.0 },
        DashaEntity { name: "Sankata", graha: Graha::Rahu, years: 8.0 },
    ];
    NakshatraDashaConfig {
        system_name: "Yogini",
        entities: &ENTITIES,
        total_years: 36.0,
        start_offset: 3,
    }
}

/// Opening entity index and the unexpired fraction of its period, from
/// the Moon's sidereal longitude at birth.
pub fn dasha_balance(config: &NakshatraDashaConfig, moon_sidereal_deg: f64) -> (usize, f64) {
    let position = nakshatra_from_longitude(moon_sidereal_deg);
    let index = (position.nakshatra.index() + config.start_offset) % config.entities.len();
    (index, 1.0 - position.fraction_traversed())
}

fn make_period(
    entity: &DashaEntity,
    start_jd: f64,
    end_jd: f64,
    level: u8,
    order: usize,
    parent_idx: Option<usize>,
) -> DashaPeriod {
    DashaPeriod {
        entity: entity.name,
        graha: entity.graha,
        start: UtcTime::from_jd(start_jd),
        end: UtcTime::from_jd(end_jd),
        start_jd,
        end_jd,
        level,
        order,
        parent_idx,
    }
}

/// One full cycle of mahadashas from birth, the first shortened by the
/// traversed fraction of the birth nakshatra.
pub fn mahadashas(
    config: &NakshatraDashaConfig,
    birth_jd: f64,
    moon_sidereal_deg: f64,
) -> Vec<DashaPeriod> {
    let (start_index, balance) = dasha_balance(config, moon_sidereal_deg);
    let count = config.entities.len();
    let mut periods = Vec::with_capacity(count);
    let mut jd = birth_jd;
    for order in 0..count {
        let entity = &config.entities[(start_index + order) % count];
        let fraction = if order == 0 { balance } else { 1.0 };
        let end = jd + entity.years * fraction * DAYS_PER_YEAR;
        periods.push(make_period(entity, jd, end, 0, order, None));
        jd = end;
    }
    periods
}

/// Sub-periods of a parent, proportional to each lord's full-cycle
/// share and opening with the parent's own lord.
pub fn sub_periods(
    config: &NakshatraDashaConfig,
    parent: &DashaPeriod,
    parent_idx: usize,
) -> Vec<DashaPeriod> {
    let count = config.entities.len();
    let parent_span = parent.end_jd - parent.start_jd;
    let start_index = config
        .entities
        .iter()
        .position(|e| e.name == parent.entity)
        .unwrap_or(0);
    let mut periods = Vec::with_capacity(count);
    let mut jd = parent.start_jd;
    for order in 0..count {
        let entity = &config.entities[(start_index + order) % count];
        let end = jd + parent_span * entity.years / config.total_years;
        periods.push(make_period(
            entity,
            jd,
            end,
            parent.level + 1,
            order,
            Some(parent_idx),
        ));
        jd = end;
    }
    // Absorb accumulated rounding into the last period
    if let Some(last) = periods.last_mut() {
        last.end_jd = parent.end_jd;
        last.end = UtcTime::from_jd(parent.end_jd);
    }
    periods
}

/// Flattened hierarchy down to `max_level` (0 = mahadashas only,
/// 2 = through pratyantardashas). Children follow their parents;
/// `parent_idx` points into the returned vector.
pub fn dasha_hierarchy(
    config: &NakshatraDashaConfig,
    birth_jd: f64,
    moon_sidereal_deg: f64,
    max_level: u8,
) -> Vec<DashaPeriod> {
    let mut result = Vec::new();
    let mut frontier: Vec<usize> = Vec::new();
    for period in mahadashas(config, birth_jd, moon_sidereal_deg) {
        result.push(period);
        frontier.push(result.len() - 1);
    }
    for _ in 0..max_level {
        let mut next_frontier = Vec::new();
        for parent_idx in frontier {
            let parent = result[parent_idx].clone();
            for child in sub_periods(config, &parent, parent_idx) {
                result.push(child);
                next_frontier.push(result.len() - 1);
            }
        }
        frontier = next_frontier;
    }
    result
}

/// The chain of periods running at `at_jd`, outermost first.
///
/// Returns an empty chain if `at_jd` falls outside the first full cycle
/// from birth.
pub fn dasha_snapshot(
    config: &NakshatraDashaConfig,
    birth_jd: f64,
    moon_sidereal_deg: f64,
    at_jd: f64,
    max_level: u8,
) -> DashaSnapshot {
    let mut chain = Vec::new();
    let mut current = mahadashas(config, birth_jd, moon_sidereal_deg)
        .into_iter()
        .find(|p| p.contains(at_jd));
    while let Some(period) = current {
        let descend = period.level < max_level;
        let parent = period.clone();
        let parent_idx = chain.len();
        chain.push(period);
        current = if descend {
            sub_periods(config, &parent, parent_idx)
                .into_iter()
                .find(|p| p.contains(at_jd))
        } else {
            None
        };
    }
    DashaSnapshot {
        system: config.system_name,
        at: UtcTime::from_jd(at_jd),
        chain,
    }
}

/// Convenience: dasha hierarchy from a birth instant, computing the
/// Moon's position internally.
pub fn dasha_hierarchy_for_birth(
    config: &NakshatraDashaConfig,
    birth_jd: f64,
    system: AyanamshaSystem,
    max_level: u8,
) -> Result<Vec<DashaPeriod>, JyotishError> {
    let moon = moon_sidereal_longitude_at(birth_jd, system)?;
    Ok(dasha_hierarchy(config, birth_jd, moon, max_level))
}

/// Convenience: running-period chain from a birth instant.
pub fn dasha_snapshot_for_birth(
    config: &NakshatraDashaConfig,
    birth_jd: f64,
    at_jd: f64,
    system: AyanamshaSystem,
    max_level: u8,
) -> Result<DashaSnapshot, JyotishError> {
    let moon = moon_sidereal_longitude_at(birth_jd, system)?;
    Ok(dasha_snapshot(config, birth_jd, moon, at_jd, max_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhaskar_vedic::NAKSHATRA_SPAN_DEG;

    const BIRTH_JD: f64 = 2_451_545.0;

    #[test]
    fn vimshottari_full_cycle_is_120_years() {
        // Moon at the exact start of Ashwini: full Ketu balance
        let periods = mahadashas(&vimshottari_config(), BIRTH_JD, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].entity, "Ketu");
        let total = periods.last().unwrap().end_jd - periods[0].start_jd;
        assert!((total / DAYS_PER_YEAR - 120.0).abs() < 1e-9);
    }

    #[test]
    fn half_traversed_nakshatra_halves_opening_period() {
        let periods = mahadashas(&vimshottari_config(), BIRTH_JD, NAKSHATRA_SPAN_DEG / 2.0);
        assert_eq!(periods[0].entity, "Ketu");
        assert!((periods[0].span_years() - 3.5).abs() < 1e-9);
        // Second period is unshortened
        assert_eq!(periods[1].entity, "Shukra");
        assert!((periods[1].span_years() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn lord_sequence_wraps() {
        // Moon in Bharani: opens with Shukra, ends with Ketu
        let periods = mahadashas(&vimshottari_config(), BIRTH_JD, NAKSHATRA_SPAN_DEG + 0.1);
        assert_eq!(periods[0].entity, "Shukra");
        assert_eq!(periods[8].entity, "Ketu");
    }

    #[test]
    fn periods_are_contiguous() {
        let periods = mahadashas(&vimshottari_config(), BIRTH_JD, 123.456);
        for pair in periods.windows(2) {
            assert!((pair[0].end_jd - pair[1].start_jd).abs() < 1e-9);
        }
    }

    #[test]
    fn antardashas_partition_parent() {
        let config = vimshottari_config();
        let periods = mahadashas(&config, BIRTH_JD, 0.0);
        let children = sub_periods(&config, &periods[1], 1);
        assert_eq!(children.len(), 9);
        // Opens with the parent's own lord
        assert_eq!(children[0].entity, periods[1].entity);
        assert!((children[0].start_jd - periods[1].start_jd).abs() < 1e-9);
        assert!((children.last().unwrap().end_jd - periods[1].end_jd).abs() < 1e-9);
        // Shukra antardasha of Shukra mahadasha: 20 * 20 / 120 years
        assert!((children[0].span_years() - 20.0 * 20.0 / 120.0).abs() < 1e-6);
    }

    #[test]
    fn hierarchy_counts_and_parent_links() {
        let config = vimshottari_config();
        let flat = dasha_hierarchy(&config, BIRTH_JD, 0.0, 1);
        assert_eq!(flat.len(), 9 + 81);
        for period in &flat {
            match period.level {
                0 => assert!(period.parent_idx.is_none()),
                1 => {
                    let parent = &flat[period.parent_idx.unwrap()];
                    assert_eq!(parent.level, 0);
                    assert!(parent.start_jd <= period.start_jd);
                    assert!(period.end_jd <= parent.end_jd + 1e-9);
                }
                _ => panic!("unexpected level"),
            }
        }
    }

    #[test]
    fn snapshot_chain_is_nested() {
        let config = vimshottari_config();
        let at = BIRTH_JD + 15.0 * DAYS_PER_YEAR;
        let snap = dasha_snapshot(&config, BIRTH_JD, 0.0, at, 2);
        assert_eq!(snap.chain.len(), 3);
        assert_eq!(snap.chain[0].level, 0);
        assert_eq!(snap.chain[2].level, 2);
        for pair in snap.chain.windows(2) {
            assert!(pair[0].start_jd <= pair[1].start_jd);
            assert!(pair[1].end_jd <= pair[0].end_jd + 1e-9);
            assert!(pair[1].contains(at));
        }
        // 15 years from birth with full Ketu balance: inside Shukra
        assert_eq!(snap.chain[0].entity, "Shukra");
    }

    #[test]
    fn snapshot_agrees_with_materialized_hierarchy() {
        // The snapshot path never materializes the full tree; it must
        // still land on exactly the periods the hierarchy contains.
        let config = vimshottari_config();
        let moon = 217.3;
        for offset_years in [0.5, 15.0, 40.0, 95.0] {
            let at = BIRTH_JD + offset_years * DAYS_PER_YEAR;
            let snap = dasha_snapshot(&config, BIRTH_JD, moon, at, 2);
            let flat = dasha_hierarchy(&config, BIRTH_JD, moon, 2);
            assert_eq!(snap.chain.len(), 3, "at {offset_years}y");
            for period in &snap.chain {
                let materialized = flat
                    .iter()
                    .find(|p| p.level == period.level && p.contains(at))
                    .unwrap();
                assert_eq!(materialized.entity, period.entity);
                assert!((materialized.start_jd - period.start_jd).abs() < 1e-9);
                assert!((materialized.end_jd - period.end_jd).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn snapshot_outside_cycle_is_empty() {
        let config = vimshottari_config();
        let snap = dasha_snapshot(&config, BIRTH_JD, 0.0, BIRTH_JD - 1.0, 2);
        assert!(snap.chain.is_empty());
    }

    #[test]
    fn yogini_cycle_is_36_years() {
        let periods = mahadashas(&yogini_config(), BIRTH_JD, 0.0);
        assert_eq!(periods.len(), 8);
        // Ashwini opens with Bhramari
        assert_eq!(periods[0].entity, "Bhramari");
        let total = periods.last().unwrap().end_jd - periods[0].start_jd;
        assert!((total / DAYS_PER_YEAR - 36.0).abs() < 1e-9);
    }

    #[test]
    fn yogini_entities_sum_to_total() {
        let config = yogini_config();
        let sum: f64 = config.entities.iter().map(|e| e.years).sum();
        assert!((sum - config.total_years).abs() < 1e-12);
    }
}
