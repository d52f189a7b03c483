use std::collections::HashMap;

use crate::error::InvalidSelection;
use crate::models::{ProfileScore, Question, Response};

/// Scores one questionnaire pass.
///
/// `selections` maps question id to the chosen option label. A `None` value,
/// or a question absent from the map entirely, means "not yet answered" and
/// contributes zero points. Responses come back in the order the questions
/// were supplied.
pub fn score_responses(
    questions: &[Question],
    selections: &HashMap<u32, Option<String>>,
) -> Result<ProfileScore, InvalidSelection> {
    for id in selections.keys() {
        if !questions.iter().any(|q| q.id == *id) {
            return Err(InvalidSelection::UnknownQuestion(*id));
        }
    }

    let mut responses = Vec::with_capacity(questions.len());
    let mut total = 0.0;

    for question in questions {
        let selected = selections.get(&question.id).and_then(|s| s.clone());
        let response = match selected {
            Some(label) => {
                let points = question
                    .options
                    .iter()
                    .find(|opt| opt.label == label)
                    .map(|opt| opt.points)
                    .ok_or_else(|| InvalidSelection::UnknownOption {
                        question_id: question.id,
                        label: label.clone(),
                    })?;
                total += points;
                Response {
                    question_id: question.id,
                    selected_label: Some(label),
                    points,
                }
            }
            None => Response {
                question_id: question.id,
                selected_label: None,
                points: 0.0,
            },
        };
        responses.push(response);
    }

    Ok(ProfileScore { total, responses })
}
