use crate::infra::{parse_answer, parse_date, parse_symptom, InMemoryAssessmentRepository};
use chrono::{Duration, Local, NaiveDate, Utc};
use clap::Args;
use pcos_screen::appointments::{AppointmentBook, AppointmentRequest};
use pcos_screen::assessment::{
    explain, AssessmentInput, AssessmentOutput, ResultSummary, RiskEngine, ScoreBreakdown,
    MAX_RISK_SCORE,
};
use pcos_screen::config::HistoryConfig;
use pcos_screen::error::AppError;
use pcos_screen::history::{AssessmentService, UserId};
use pcos_screen::qa;
use pcos_screen::recommendations::{self, RecommendationBundle};
use serde::Serialize;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Age in years as typed into the questionnaire
    #[arg(long, default_value = "")]
    pub(crate) age: String,
    /// Whether periods are regular (yes/no)
    #[arg(long, value_parser = parse_answer)]
    pub(crate) regular_periods: Option<String>,
    /// Whether a close relative has PCOS (yes/no)
    #[arg(long, value_parser = parse_answer)]
    pub(crate) family_history: Option<String>,
    /// Reported symptom id; repeat for several symptoms
    #[arg(long = "symptom", value_parser = parse_symptom)]
    pub(crate) symptoms: Vec<String>,
    /// Print the per-factor score contributions
    #[arg(long)]
    pub(crate) explain: bool,
    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// User id the demo assessments are stored under
    #[arg(long, default_value = "demo-user")]
    pub(crate) user: String,
    /// Appointment date (YYYY-MM-DD). Defaults to one week from today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) appointment_date: Option<NaiveDate>,
    /// Free-text search applied to the expert Q&A listing
    #[arg(long, default_value = "diet")]
    pub(crate) qa_search: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessReport {
    result: AssessmentOutput,
    summary: ResultSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
    recommendations: RecommendationBundle,
}

impl AssessArgs {
    fn into_input(self) -> (AssessmentInput, bool, bool) {
        let AssessArgs {
            age,
            regular_periods,
            family_history,
            symptoms,
            explain,
            json,
        } = self;

        let mut input = AssessmentInput::new(
            age,
            regular_periods.unwrap_or_default(),
            family_history.unwrap_or_default(),
        );
        for symptom in symptoms {
            input = input.with_symptom(symptom, true);
        }
        (input, explain, json)
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let (input, show_breakdown, as_json) = args.into_input();
    let report = build_report(&input, show_breakdown);

    if as_json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Report serialization failed: {err}"),
        }
        return Ok(());
    }

    render_report(&report);
    Ok(())
}

fn build_report(input: &AssessmentInput, show_breakdown: bool) -> AssessReport {
    let engine = RiskEngine::standard();
    let result = engine.predict(input);
    let summary = explain(&result, input.symptom_count());
    let breakdown = show_breakdown.then(|| engine.breakdown(input));
    let recommendations = recommendations::for_assessment(&result, &input.age);

    AssessReport {
        result,
        summary,
        breakdown,
        recommendations,
    }
}

fn render_report(report: &AssessReport) {
    let AssessReport {
        result,
        summary,
        breakdown,
        recommendations,
    } = report;

    println!("PCOS risk assessment");
    println!(
        "- Risk level: {} ({}% | score {}/{} | confidence {}%)",
        result.risk_level,
        result.risk_percentage,
        result.risk_score,
        MAX_RISK_SCORE,
        result.confidence_score
    );
    println!("- {}", summary.headline);
    println!("  {}", summary.guidance);

    if summary.factors.is_empty() {
        println!("Key factors: none identified");
    } else {
        println!("Key factors:");
        for factor in &summary.factors {
            println!("  - {}: {}", factor.title, factor.detail);
        }
    }

    if let Some(breakdown) = breakdown {
        println!("Score contributions (base {:.2}):", breakdown.base_score);
        for contribution in &breakdown.contributions {
            println!(
                "  - {}: +{:.2} ({})",
                contribution.factor, contribution.points, contribution.notes
            );
        }
    }

    println!("Recommended plans:");
    println!(
        "  - Diet: {} ({} food groups, {} tips)",
        recommendations.diet.title,
        recommendations.diet.foods.len(),
        recommendations.diet.tips.len()
    );
    println!(
        "  - Exercise: {} ({} routines, {} tips)",
        recommendations.exercise.title,
        recommendations.exercise.routines.len(),
        recommendations.exercise.tips.len()
    );

    println!("Next steps:");
    for step in &summary.next_steps {
        println!("  - {}: {}", step.title, step.detail);
    }
    println!("\n{}", summary.disclaimer);
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        user,
        appointment_date,
        qa_search,
    } = args;

    let user_id = UserId(user);
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = AssessmentService::new(repository, HistoryConfig::default());

    println!("PCOS screening demo for {}", user_id.0);

    let first_taken = Utc::now() - Duration::days(30);
    let first = service.submit_at(user_id.clone(), demo_initial_answers(), first_taken)?;
    let second = service.submit(user_id.clone(), demo_follow_up_answers())?;
    for record in [&first, &second] {
        println!(
            "- Stored {} on {}: {} risk ({}%)",
            record.id.0,
            record.created_at.format("%Y-%m-%d"),
            record.result.risk_level,
            record.result.risk_percentage
        );
    }

    println!("\nRisk trend (oldest first)");
    for point in service.trend(&user_id)? {
        println!("  {} -> {}%", point.date, point.risk_percentage);
    }

    if let Some(latest) = service.latest(&user_id)? {
        let plans = service.recommendations(&latest.id)?;
        println!("\nPlans for latest assessment {}", latest.id.0);
        println!("- Diet: {}", plans.diet.title);
        for group in &plans.diet.foods {
            println!("    {}: {}", group.category, group.items.join(", "));
        }
        println!("- Exercise: {}", plans.exercise.title);
        for routine in &plans.exercise.routines {
            println!("    {} ({})", routine.name, routine.frequency);
        }
    }

    let answers = qa::filter(&qa_search, None);
    println!("\nExpert Q&A matching '{}': {} result(s)", qa_search, answers.len());
    for entry in answers {
        println!(
            "  - [{}] {} ({})",
            entry.category, entry.question, entry.expert.name
        );
    }

    let book = AppointmentBook::new();
    let date = appointment_date.unwrap_or_else(|| Local::now().date_naive() + Duration::days(7));
    let confirmation = book.book(demo_appointment_request(date))?;
    println!("\nAppointment booking");
    println!("- {}", confirmation.message);
    println!("- {} appointment(s) on the books", book.list().len());

    Ok(())
}

fn demo_initial_answers() -> AssessmentInput {
    AssessmentInput::new("27", "no", "yes")
        .with_symptom("hair-growth", true)
        .with_symptom("weight-gain", true)
        .with_symptom("acne", true)
        .with_symptom("fatigue", true)
}

fn demo_follow_up_answers() -> AssessmentInput {
    AssessmentInput::new("27", "yes", "yes")
        .with_symptom("acne", true)
        .with_symptom("fatigue", true)
        .with_symptom("mood-changes", true)
}

fn demo_appointment_request(date: NaiveDate) -> AppointmentRequest {
    AppointmentRequest {
        doctor_name: "Dr. Michael Chen".to_string(),
        specialization: "endocrinologist".to_string(),
        date: Some(date),
        time: "10:30".to_string(),
        location: "City Endocrine Center".to_string(),
        notes: Some("Bring the latest assessment summary".to_string()),
    }
}
