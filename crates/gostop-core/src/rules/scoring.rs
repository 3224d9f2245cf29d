use crate::model::captured::CapturedPile;
use crate::model::card::{CardKind, RibbonKind};
use crate::model::month::Month;
use crate::rules::config::{RuleConfig, ScoringTable};

/// Per-category contributions of a captured pile, in base points
/// (before sweep bonuses and go multipliers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub brights: u32,
    pub godori: u32,
    pub animals: u32,
    pub ribbon_sets: u32,
    pub ribbons: u32,
    pub junk: u32,
    pub total: u32,
}

/// Score a captured pile against a table. Total over every pile
/// composition, zero when nothing reaches a threshold.
pub fn base_score(pile: &CapturedPile, table: &ScoringTable) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let bright_count = pile.brights().len();
    let has_rain = pile.brights().iter().any(|card| card.is_rain_bright());
    breakdown.brights = match bright_count {
        0..=2 => 0,
        3 if has_rain => table.bright_three_with_rain,
        3 => table.bright_three,
        4 => table.bright_four,
        _ => table.bright_five,
    };

    let bird_count = pile.animals().iter().filter(|c| c.is_godori_bird()).count();
    if bird_count == 3 {
        breakdown.godori = table.godori;
    }

    let diverted_cup = table.sake_cup_as_junk
        && pile.animals().iter().any(|card| card.is_sake_cup());
    let animal_count = pile.animals().len() as u32 - u32::from(diverted_cup);
    breakdown.animals = count_bonus(animal_count, table.animal_count_threshold);

    breakdown.ribbon_sets = ribbon_set_count(pile) * table.ribbon_set;
    breakdown.ribbons = count_bonus(pile.ribbons().len() as u32, table.ribbon_count_threshold);

    let junk_total: u32 = pile.junk().iter().map(|card| card.junk_value()).sum::<u32>()
        + if diverted_cup { 2 } else { 0 };
    breakdown.junk = count_bonus(junk_total, table.junk_count_threshold);

    breakdown.total = breakdown.brights
        + breakdown.godori
        + breakdown.animals
        + breakdown.ribbon_sets
        + breakdown.ribbons
        + breakdown.junk;
    breakdown
}

/// Final round score: base points plus sweep bonuses, scaled by the
/// go multiplier table.
pub fn round_score(
    pile: &CapturedPile,
    rules: &RuleConfig,
    go_count: u32,
    sweep_count: u32,
) -> u32 {
    let base = base_score(pile, &rules.scoring).total;
    (base + sweep_count * rules.scoring.sweep_bonus) * rules.go_multiplier(go_count)
}

fn count_bonus(count: u32, threshold: u32) -> u32 {
    if count >= threshold {
        count - threshold + 1
    } else {
        0
    }
}

fn ribbon_set_count(pile: &CapturedPile) -> u32 {
    let mut sets = 0;
    let poem = pile
        .ribbons()
        .iter()
        .filter(|c| matches!(c.kind, CardKind::Ribbon(RibbonKind::RedPoem)))
        .count();
    if poem == 3 {
        sets += 1;
    }
    let blue = pile
        .ribbons()
        .iter()
        .filter(|c| matches!(c.kind, CardKind::Ribbon(RibbonKind::Blue)))
        .count();
    if blue == 3 {
        sets += 1;
    }
    // The plain set is April/May/July; the December ribbon is plain
    // but belongs to no set.
    let plain_set = [Month::April, Month::May, Month::July]
        .iter()
        .all(|month| pile.ribbons().iter().any(|c| c.month == *month));
    if plain_set {
        sets += 1;
    }
    sets
}
