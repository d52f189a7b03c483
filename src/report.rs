use std::fmt::Write;

use chrono::NaiveDate;

use crate::classify::TierTable;
use crate::error::DegenerateBenchmark;
use crate::models::{ProfileScore, Question};
use crate::session::StudentIntro;

pub fn build_report(
    student: &StudentIntro,
    questions: &[Question],
    score: &ProfileScore,
    tiers: &[TierTable],
    skipped: &[DegenerateBenchmark],
    generated_on: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Admit Readiness Report: {}", student.name);
    let _ = writeln!(output, "Generated on {}", generated_on);
    let _ = writeln!(output);
    let _ = writeln!(output, "- Class: {}", student.class_level);
    if let Some(board) = &student.board {
        let _ = writeln!(output, "- Board: {}", board);
    }
    if let Some(school) = &student.school {
        let _ = writeln!(output, "- School: {}", school);
    }
    if let Some(city) = &student.city {
        let _ = writeln!(output, "- City: {}", city);
    }
    let _ = writeln!(output, "- Interested Course: {}", student.course);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Total Profile Score: {}", score.total);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Profile Responses");

    for response in score.responses.iter() {
        let text = questions
            .iter()
            .find(|q| q.id == response.question_id)
            .map(|q| q.text.as_str())
            .unwrap_or("(question not in catalog)");
        match &response.selected_label {
            Some(label) => {
                let _ = writeln!(
                    output,
                    "- Q{}. {}: {} ({} points)",
                    response.question_id, text, label, response.points
                );
            }
            None => {
                let _ = writeln!(
                    output,
                    "- Q{}. {}: not answered (0 points)",
                    response.question_id, text
                );
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## University Fit Overview");

    for table in tiers.iter() {
        if table.universities.is_empty() {
            continue;
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "### {}", table.tier.heading());
        for university in table.universities.iter() {
            let _ = writeln!(
                output,
                "- {}: benchmark {:.2}, gap {:.2}%",
                university.university_name,
                university.total_benchmark_score,
                university.score_gap_pct
            );
        }
    }

    if !skipped.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Excluded Benchmark Rows");
        for skip in skipped.iter() {
            let _ = writeln!(
                output,
                "- {}: benchmark total is zero, no gap computed",
                skip.university
            );
        }
    }

    output
}
