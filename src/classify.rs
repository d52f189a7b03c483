use serde::Serialize;

use crate::models::UniversityBenchmarkNormalized;

/// At most this many universities are presented per tier.
pub const TIER_CAP: usize = 5;

const REACH_FLOOR: f64 = -10.0;
const STRENGTHEN_FLOOR: f64 = -25.0;

/// Fit category for a university relative to the student's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitTier {
    Reach,
    Strengthen,
    Stretch,
}

impl FitTier {
    pub const ALL: [FitTier; 3] = [FitTier::Reach, FitTier::Strengthen, FitTier::Stretch];

    pub fn heading(self) -> &'static str {
        match self {
            FitTier::Reach => "Within Reach Universities",
            FitTier::Strengthen => "Needs Strengthening",
            FitTier::Stretch => "Significant Gaps",
        }
    }

    // Reach lists best fit first (least negative gap); the other tiers list
    // the closest-to-qualifying universities first.
    fn sort_order(self) -> SortOrder {
        match self {
            FitTier::Reach => SortOrder::GapDescending,
            FitTier::Strengthen | FitTier::Stretch => SortOrder::GapAscending,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SortOrder {
    GapDescending,
    GapAscending,
}

pub fn tier_for(score_gap_pct: f64) -> FitTier {
    if score_gap_pct >= REACH_FLOOR {
        FitTier::Reach
    } else if score_gap_pct >= STRENGTHEN_FLOOR {
        FitTier::Strengthen
    } else {
        FitTier::Stretch
    }
}

/// One presentation tier: sorted per the tier's directive and capped at
/// [`TIER_CAP`] entries. A tier nothing qualified for is simply empty.
#[derive(Debug, Clone, Serialize)]
pub struct TierTable {
    pub tier: FitTier,
    pub universities: Vec<UniversityBenchmarkNormalized>,
}

/// Partitions normalized benchmark records into the three fit tiers.
/// Input records are not mutated; tiers always come back in
/// Reach, Strengthen, Stretch order.
pub fn classify(records: &[UniversityBenchmarkNormalized]) -> Vec<TierTable> {
    FitTier::ALL
        .into_iter()
        .map(|tier| {
            let mut universities: Vec<UniversityBenchmarkNormalized> = records
                .iter()
                .filter(|record| tier_for(record.score_gap_pct) == tier)
                .cloned()
                .collect();

            universities.sort_by(|a, b| {
                let ascending = a
                    .score_gap_pct
                    .partial_cmp(&b.score_gap_pct)
                    .unwrap_or(std::cmp::Ordering::Equal);
                match tier.sort_order() {
                    SortOrder::GapAscending => ascending,
                    SortOrder::GapDescending => ascending.reverse(),
                }
            });
            universities.truncate(TIER_CAP);

            TierTable { tier, universities }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uni(name: &str, score_gap_pct: f64) -> UniversityBenchmarkNormalized {
        UniversityBenchmarkNormalized {
            university_name: name.to_string(),
            total_benchmark_score: 50.0,
            score_gap_pct,
        }
    }

    fn tier_of<'a>(tables: &'a [TierTable], tier: FitTier) -> &'a TierTable {
        tables.iter().find(|t| t.tier == tier).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive_on_the_tier_above() {
        assert_eq!(tier_for(-10.0), FitTier::Reach);
        assert_eq!(tier_for(-10.01), FitTier::Strengthen);
        assert_eq!(tier_for(-25.0), FitTier::Strengthen);
        assert_eq!(tier_for(-25.01), FitTier::Stretch);
        assert_eq!(tier_for(0.0), FitTier::Reach);
        assert_eq!(tier_for(12.5), FitTier::Reach);
    }

    #[test]
    fn reach_sorts_descending_and_caps_at_five() {
        let records: Vec<UniversityBenchmarkNormalized> = (0..8)
            .map(|i| uni(&format!("U{i}"), -9.0 + i as f64))
            .collect();

        let tables = classify(&records);
        let reach = tier_of(&tables, FitTier::Reach);
        assert_eq!(reach.universities.len(), TIER_CAP);
        let gaps: Vec<f64> = reach.universities.iter().map(|u| u.score_gap_pct).collect();
        // The five highest gaps, best fit first.
        assert_eq!(gaps, vec![-2.0, -3.0, -4.0, -5.0, -6.0]);
    }

    #[test]
    fn strengthen_and_stretch_sort_ascending() {
        let records = vec![
            uni("A", -12.0),
            uni("B", -24.0),
            uni("C", -18.0),
            uni("D", -30.0),
            uni("E", -26.0),
        ];

        let tables = classify(&records);
        let strengthen = tier_of(&tables, FitTier::Strengthen);
        let names: Vec<&str> = strengthen
            .universities
            .iter()
            .map(|u| u.university_name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        let stretch = tier_of(&tables, FitTier::Stretch);
        let names: Vec<&str> = stretch
            .universities
            .iter()
            .map(|u| u.university_name.as_str())
            .collect();
        assert_eq!(names, vec!["D", "E"]);
    }

    #[test]
    fn empty_tiers_are_empty_not_errors() {
        let records = vec![uni("Only Reach", 5.0)];

        let tables = classify(&records);
        assert_eq!(tables.len(), 3);
        assert_eq!(tier_of(&tables, FitTier::Reach).universities.len(), 1);
        assert!(tier_of(&tables, FitTier::Strengthen).universities.is_empty());
        assert!(tier_of(&tables, FitTier::Stretch).universities.is_empty());
    }

    #[test]
    fn input_order_does_not_leak_into_tiers() {
        let records = vec![uni("Second", -8.0), uni("First", -2.0)];

        let tables = classify(&records);
        let reach = tier_of(&tables, FitTier::Reach);
        assert_eq!(reach.universities[0].university_name, "First");
        assert_eq!(reach.universities[1].university_name, "Second");
    }
}
