use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::models::{ChoiceOption, Question, UniversityBenchmarkRaw};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course {0:?} not found in catalog")]
    MissingCourse(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Loads the ordered question set for one course from the questions CSV.
///
/// Columns: `course, question_id, question_text, option_a, score_a, ...
/// option_e, score_e`. Option slots a course does not use are left empty and
/// become absent options, so a question carries between one and five choices.
pub fn load_questions(path: &Path, course: &str) -> Result<Vec<Question>, CatalogError> {
    #[derive(serde::Deserialize)]
    struct QuestionRow {
        course: String,
        question_id: u32,
        question_text: String,
        option_a: Option<String>,
        score_a: Option<f64>,
        option_b: Option<String>,
        score_b: Option<f64>,
        option_c: Option<String>,
        score_c: Option<f64>,
        option_d: Option<String>,
        score_d: Option<f64>,
        option_e: Option<String>,
        score_e: Option<f64>,
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut questions = Vec::new();

    for result in reader.deserialize::<QuestionRow>() {
        let row = result?;
        if row.course != course {
            continue;
        }

        let slots = [
            ("A", row.option_a, row.score_a),
            ("B", row.option_b, row.score_b),
            ("C", row.option_c, row.score_c),
            ("D", row.option_d, row.score_d),
            ("E", row.option_e, row.score_e),
        ];
        let options = slots
            .into_iter()
            .filter_map(|(letter, text, score)| {
                text.map(|text| ChoiceOption {
                    label: format!("{letter}) {}", text.trim()),
                    points: score.unwrap_or(0.0),
                })
            })
            .collect();

        questions.push(Question {
            id: row.question_id,
            text: row.question_text,
            options,
        });
    }

    if questions.is_empty() {
        return Err(CatalogError::MissingCourse(course.to_string()));
    }
    Ok(questions)
}

/// Loads the benchmark rows for one course from the benchmarks CSV.
///
/// Columns: `course, university, q1, q2, ... q10`. Only `q1` is required;
/// empty component cells are simply absent and contribute nothing.
pub fn load_benchmarks(
    path: &Path,
    course: &str,
) -> Result<Vec<UniversityBenchmarkRaw>, CatalogError> {
    #[derive(serde::Deserialize)]
    struct BenchmarkRow {
        course: String,
        university: String,
        q1: f64,
        q2: Option<f64>,
        q3: Option<f64>,
        q4: Option<f64>,
        q5: Option<f64>,
        q6: Option<f64>,
        q7: Option<f64>,
        q8: Option<f64>,
        q9: Option<f64>,
        q10: Option<f64>,
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize::<BenchmarkRow>() {
        let row = result?;
        if row.course != course {
            continue;
        }

        let others = [
            row.q2, row.q3, row.q4, row.q5, row.q6, row.q7, row.q8, row.q9, row.q10,
        ]
        .into_iter()
        .flatten()
        .collect();

        rows.push(UniversityBenchmarkRaw {
            university_name: row.university,
            q1: row.q1,
            others,
        });
    }

    if rows.is_empty() {
        return Err(CatalogError::MissingCourse(course.to_string()));
    }
    Ok(rows)
}

/// Loads the student's selections. Columns: `question_id, selected_label`;
/// an empty label means the question was left unanswered.
pub fn load_answers(path: &Path) -> Result<HashMap<u32, Option<String>>, CatalogError> {
    #[derive(serde::Deserialize)]
    struct AnswerRow {
        question_id: u32,
        selected_label: Option<String>,
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut answers = HashMap::new();

    for result in reader.deserialize::<AnswerRow>() {
        let row = result?;
        answers.insert(row.question_id, row.selected_label);
    }

    Ok(answers)
}

/// Lists the distinct courses in the questions CSV, in first-seen order.
pub fn list_courses(path: &Path) -> Result<Vec<String>, CatalogError> {
    let mut reader = csv::Reader::from_path(path)?;
    let course_index = reader
        .headers()?
        .iter()
        .position(|h| h == "course")
        .unwrap_or(0);

    let mut courses: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(course) = record.get(course_index) {
            if !courses.iter().any(|c| c == course) {
                courses.push(course.to_string());
            }
        }
    }

    Ok(courses)
}
