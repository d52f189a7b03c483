use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};

mod benchmark;
mod catalog;
mod classify;
mod error;
mod models;
mod report;
mod scoring;
mod session;

use session::{ContactDetails, IntroStep, StudentIntro};

#[derive(Parser)]
#[command(name = "admit-readiness")]
#[command(about = "Course readiness scoring and university fit benchmarking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses available in the question catalog
    Courses {
        #[arg(long)]
        questions: PathBuf,
    },
    /// Score a student's questionnaire answers
    Score {
        #[arg(long)]
        questions: PathBuf,
        #[arg(long)]
        answers: PathBuf,
        #[arg(long)]
        course: String,
        /// Emit the profile score as JSON instead of a text summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the full pipeline and write a markdown report
    Report {
        #[arg(long)]
        questions: PathBuf,
        #[arg(long)]
        benchmarks: PathBuf,
        #[arg(long)]
        answers: PathBuf,
        #[arg(long)]
        course: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        class: String,
        #[arg(long)]
        board: Option<String>,
        #[arg(long)]
        school: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        parent_name: Option<String>,
        #[arg(long)]
        whatsapp: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Courses { questions } => {
            let courses = catalog::list_courses(&questions)
                .with_context(|| format!("failed to read {}", questions.display()))?;
            if courses.is_empty() {
                println!("No courses found in the catalog.");
                return Ok(());
            }
            println!("Available courses:");
            for course in courses {
                println!("- {course}");
            }
        }
        Commands::Score {
            questions,
            answers,
            course,
            json,
        } => {
            let question_set = catalog::load_questions(&questions, &course)
                .with_context(|| format!("failed to load questions for {course:?}"))?;
            let selections = catalog::load_answers(&answers)
                .with_context(|| format!("failed to read {}", answers.display()))?;
            let score = scoring::score_responses(&question_set, &selections)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&score)?);
                return Ok(());
            }

            println!("Total profile score: {}", score.total);
            for (question, response) in question_set.iter().zip(score.responses.iter()) {
                match &response.selected_label {
                    Some(label) => println!(
                        "- Q{}. {}: {} ({} points)",
                        question.id, question.text, label, response.points
                    ),
                    None => println!("- Q{}. {}: not answered", question.id, question.text),
                }
            }
        }
        Commands::Report {
            questions,
            benchmarks,
            answers,
            course,
            name,
            class,
            board,
            school,
            city,
            parent_name,
            whatsapp,
            budget,
            out,
        } => {
            let session = IntroStep::new().begin(StudentIntro {
                name,
                class_level: class,
                board,
                school,
                city,
                course: course.clone(),
            })?;

            let question_set = catalog::load_questions(&questions, &course)
                .with_context(|| format!("failed to load questions for {course:?}"))?;
            let selections = catalog::load_answers(&answers)
                .with_context(|| format!("failed to read {}", answers.display()))?;
            let score = scoring::score_responses(&question_set, &selections)?;
            let session = session.finish(score);

            let contact = match (parent_name, whatsapp) {
                (Some(parent_name), Some(whatsapp)) => Some(ContactDetails {
                    parent_name,
                    whatsapp,
                    budget,
                }),
                _ => None,
            };
            let completed = session.submit(contact)?;

            let rows = catalog::load_benchmarks(&benchmarks, &course)
                .with_context(|| format!("failed to load benchmarks for {course:?}"))?;
            let (normalized, skipped) = benchmark::normalize_all(&rows, completed.score.total);
            let tiers = classify::classify(&normalized);

            let rendered = report::build_report(
                &completed.student,
                &question_set,
                &completed.score,
                &tiers,
                &skipped,
                Utc::now().date_naive(),
            );
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());

            if !skipped.is_empty() {
                println!(
                    "Skipped {} benchmark row(s) with zero totals; see the report for details.",
                    skipped.len()
                );
            }
            if let Some(contact) = completed.contact {
                if !contact.is_test_contact() {
                    println!(
                        "Counsellor follow-up queued for {} ({}).",
                        contact.parent_name, contact.whatsapp
                    );
                }
            }
        }
    }

    Ok(())
}
