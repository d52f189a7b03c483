use serde::{Deserialize, Serialize};

/// One answer choice for a question. Labels carry the letter prefix the
/// student sees, e.g. "A) Published research work".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<ChoiceOption>,
}

/// One scored answer. `selected_label` is `None` when the question was left
/// unanswered, in which case `points` is always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: u32,
    pub selected_label: Option<String>,
    pub points: f64,
}

/// The scored questionnaire pass: one response per question, in the order the
/// questions were presented, with `total` equal to the sum of their points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileScore {
    pub total: f64,
    pub responses: Vec<Response>,
}

/// A university's admitted-student profile on the course rubric, in raw
/// (unnormalized) component scores. `others` holds whichever of the Q2..Q10
/// components the catalog provides; absent components simply contribute zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityBenchmarkRaw {
    pub university_name: String,
    pub q1: f64,
    pub others: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UniversityBenchmarkNormalized {
    pub university_name: String,
    /// Benchmark rescaled onto the questionnaire's 0-100 scale, rounded to
    /// two decimal places.
    pub total_benchmark_score: f64,
    /// Percentage by which the student's total exceeds (positive) or falls
    /// short of (negative) the rounded benchmark score.
    pub score_gap_pct: f64,
}
