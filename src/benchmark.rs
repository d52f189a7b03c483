use crate::error::DegenerateBenchmark;
use crate::models::{UniversityBenchmarkNormalized, UniversityBenchmarkRaw};

// Q1 is reported out of 20 and rescaled to a 40-point share of the total;
// the remaining components are out of 80 combined and rescaled to 60 points.
const Q1_RAW_MAX: f64 = 20.0;
const Q1_SCALED_MAX: f64 = 40.0;
const OTHER_RAW_MAX: f64 = 80.0;
const OTHER_SCALED_MAX: f64 = 60.0;

/// Round half away from zero to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rescales one raw benchmark row onto the questionnaire's 0-100 scale and
/// computes its Score Gap % against the student's total.
///
/// The gap is computed from the rounded benchmark score, so the score shown
/// in a report and the gap next to it always agree.
pub fn normalize(
    raw: &UniversityBenchmarkRaw,
    student_total: f64,
) -> Result<UniversityBenchmarkNormalized, DegenerateBenchmark> {
    let scaled_q1 = (raw.q1 / Q1_RAW_MAX) * Q1_SCALED_MAX;
    let other_total: f64 = raw.others.iter().sum();
    let scaled_other = (other_total / OTHER_RAW_MAX) * OTHER_SCALED_MAX;
    let total_benchmark_score = round2(scaled_q1 + scaled_other);

    if total_benchmark_score == 0.0 {
        return Err(DegenerateBenchmark {
            university: raw.university_name.clone(),
        });
    }

    let score_gap_pct = ((student_total - total_benchmark_score) / total_benchmark_score) * 100.0;

    Ok(UniversityBenchmarkNormalized {
        university_name: raw.university_name.clone(),
        total_benchmark_score,
        score_gap_pct,
    })
}

/// Normalizes every row, same order as the input. Degenerate rows are skipped
/// and reported back rather than aborting the batch.
pub fn normalize_all(
    rows: &[UniversityBenchmarkRaw],
    student_total: f64,
) -> (Vec<UniversityBenchmarkNormalized>, Vec<DegenerateBenchmark>) {
    let mut normalized = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for row in rows {
        match normalize(row, student_total) {
            Ok(record) => normalized.push(record),
            Err(err) => skipped.push(err),
        }
    }

    (normalized, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, q1: f64, others: &[f64]) -> UniversityBenchmarkRaw {
        UniversityBenchmarkRaw {
            university_name: name.to_string(),
            q1,
            others: others.to_vec(),
        }
    }

    #[test]
    fn full_scale_row_normalizes_to_100() {
        let row = raw("Full Marks U", 20.0, &[10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0]);
        let record = normalize(&row, 50.0).unwrap();
        assert_eq!(record.total_benchmark_score, 100.0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // scaled_q1 = 26.0, scaled_other = 30.5 / 80 * 60 = 22.875,
        // sum 48.875 rounds up to 48.88.
        let row = raw("Rounding U", 13.0, &[10.5, 20.0]);
        let record = normalize(&row, 30.0).unwrap();
        assert_eq!(record.total_benchmark_score, 48.88);
    }

    #[test]
    fn gap_uses_the_rounded_score() {
        let row = raw("Rounding U", 13.0, &[10.5, 20.0]);
        let record = normalize(&row, 30.0).unwrap();
        let expected = ((30.0 - 48.88) / 48.88) * 100.0;
        assert!((record.score_gap_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn gap_sign_follows_student_standing() {
        // Benchmark normalizes to exactly 50.00.
        let row = raw("Midpoint U", 10.0, &[20.0, 20.0]);

        assert!(normalize(&row, 60.0).unwrap().score_gap_pct > 0.0);
        assert_eq!(normalize(&row, 50.0).unwrap().score_gap_pct, 0.0);
        assert!(normalize(&row, 40.0).unwrap().score_gap_pct < 0.0);
    }

    #[test]
    fn absent_components_contribute_zero() {
        let row = raw("Sparse U", 10.0, &[]);
        let record = normalize(&row, 30.0).unwrap();
        assert_eq!(record.total_benchmark_score, 20.0);
    }

    #[test]
    fn zero_total_is_degenerate() {
        let row = raw("Empty U", 0.0, &[]);
        let err = normalize(&row, 30.0).unwrap_err();
        assert_eq!(err.university, "Empty U");
    }

    #[test]
    fn degenerate_rows_are_skipped_not_fatal() {
        let rows = vec![
            raw("Good U", 15.0, &[30.0, 30.0]),
            raw("Empty U", 0.0, &[]),
            raw("Other U", 10.0, &[40.0]),
        ];

        let (normalized, skipped) = normalize_all(&rows, 30.0);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].university_name, "Good U");
        assert_eq!(normalized[1].university_name, "Other U");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].university, "Empty U");
    }
}
