//! Questionnaire session steps.
//!
//! The assessment walks three states: Intro (who the student is and which
//! course they want), Questionnaire (the scored pass), and Contact (parent
//! follow-up details). Each state is its own immutable record and each
//! transition consumes the previous step, so running the steps out of order
//! does not compile.

use thiserror::Error;

use crate::models::ProfileScore;

/// WhatsApp number accepted without queueing a counsellor follow-up, used for
/// dry runs of the full pipeline.
pub const TEST_WHATSAPP: &str = "+000000000000";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("student name is required")]
    MissingName,
    #[error("course selection is required")]
    MissingCourse,
    #[error("WhatsApp number must start with '+' and include a country code")]
    InvalidWhatsapp,
}

#[derive(Debug, Clone)]
pub struct StudentIntro {
    pub name: String,
    pub class_level: String,
    pub board: Option<String>,
    pub school: Option<String>,
    pub city: Option<String>,
    pub course: String,
}

#[derive(Debug, Clone)]
pub struct ContactDetails {
    pub parent_name: String,
    pub whatsapp: String,
    pub budget: Option<String>,
}

impl ContactDetails {
    pub fn is_test_contact(&self) -> bool {
        self.whatsapp == TEST_WHATSAPP
    }
}

pub fn valid_whatsapp(number: &str) -> bool {
    number.starts_with('+') && number.len() >= 11
}

pub struct IntroStep;

impl IntroStep {
    pub fn new() -> Self {
        IntroStep
    }

    pub fn begin(self, student: StudentIntro) -> Result<QuestionnaireStep, SessionError> {
        if student.name.trim().is_empty() {
            return Err(SessionError::MissingName);
        }
        if student.course.trim().is_empty() {
            return Err(SessionError::MissingCourse);
        }
        Ok(QuestionnaireStep { student })
    }
}

impl Default for IntroStep {
    fn default() -> Self {
        Self::new()
    }
}

pub struct QuestionnaireStep {
    pub student: StudentIntro,
}

impl QuestionnaireStep {
    pub fn finish(self, score: ProfileScore) -> ContactStep {
        ContactStep {
            student: self.student,
            score,
        }
    }
}

pub struct ContactStep {
    pub student: StudentIntro,
    pub score: ProfileScore,
}

impl ContactStep {
    /// Contact details are optional at this boundary; when supplied, the
    /// WhatsApp number must carry a country code.
    pub fn submit(self, contact: Option<ContactDetails>) -> Result<CompletedSession, SessionError> {
        if let Some(details) = &contact {
            if !valid_whatsapp(&details.whatsapp) {
                return Err(SessionError::InvalidWhatsapp);
            }
        }
        Ok(CompletedSession {
            student: self.student,
            score: self.score,
            contact,
        })
    }
}

pub struct CompletedSession {
    pub student: StudentIntro,
    pub score: ProfileScore,
    pub contact: Option<ContactDetails>,
}
