use crate::infra::parse_date;
use chrono::NaiveDate;
use clap::Args;
use rehab_ai::config::AppConfig;
use rehab_ai::error::AppError;
use rehab_ai::workflows::eligibility::{ClientProfile, EligibilityScreener};
use rehab_ai::workflows::matching::{Job, JobMatcher, JobMatchingRequest};
use rehab_ai::workflows::reporting::{
    export_report_as, load_cases, ExportFormat, RSA911Report, ReportGenerator, ReportPeriod,
};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Client profile JSON file
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print the full screening result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Job matching request JSON file
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Job catalog JSON file (array of postings)
    #[arg(long)]
    pub(crate) jobs: PathBuf,
    /// Minimum match score; defaults to APP_MATCH_MIN_SCORE
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Print the full match list as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Case records JSON file (array of cases)
    #[arg(long)]
    pub(crate) cases: PathBuf,
    /// First service start date included (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: NaiveDate,
    /// Last service start date included (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) end: NaiveDate,
    /// Agency name printed on the report
    #[arg(long)]
    pub(crate) agency: String,
    /// Agency code; defaults to APP_AGENCY_CODE
    #[arg(long)]
    pub(crate) agency_code: Option<String>,
    /// Export format (json, csv, html); prints a summary when omitted
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<ExportFormat>,
    /// Write the export to this path instead of stdout
    #[arg(long, requires = "format")]
    pub(crate) output: Option<PathBuf>,
}

fn parse_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse().map_err(|err| format!("{err}"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let payload: serde_json::Value = read_json(&args.profile)?;
    let profile = ClientProfile::from_value(payload)?;
    let result = EligibilityScreener::new().screen(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Eligibility screening for {}", result.client_id);
    for assessment in &result.assessments {
        println!(
            "- {}: {} | confidence {}% | priority {} | ~{} days",
            assessment.program.label(),
            if assessment.eligible { "eligible" } else { "not eligible" },
            assessment.confidence,
            assessment.priority.label(),
            assessment.estimated_processing_time
        );
    }
    match result.recommended_program {
        Some(program) => println!("Recommended program: {}", program.label()),
        None => println!("Recommended program: none"),
    }
    println!("Overall priority: {}", result.overall_priority.label());
    println!("Next steps:");
    for step in &result.next_steps {
        println!("  - {step}");
    }

    Ok(())
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let request = JobMatchingRequest::from_value(read_json(&args.request)?)?;
    let jobs: Vec<Job> = read_json(&args.jobs)?;
    let min_score = args
        .min_score
        .unwrap_or(f64::from(config.matching.min_score));
    let matches = JobMatcher::for_threshold(min_score)
        .map(|matcher| matcher.find_matches(&request, &jobs))
        .unwrap_or_default();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "{} of {} postings scored at least {} for {}",
        matches.matches.len(),
        jobs.len(),
        min_score,
        request.client_id
    );
    for result in &matches.matches {
        let breakdown = &result.breakdown;
        println!(
            "- [{}] {} at {} ({})",
            result.match_score, result.job.title, result.job.company, result.job.location
        );
        println!(
            "    skills {} | accessibility {} | certification {} | preferences {}",
            breakdown.skills_score,
            breakdown.accessibility_score,
            breakdown.certification_score,
            breakdown.preferences_score
        );
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let cases = load_cases(BufReader::new(File::open(&args.cases)?))?;
    let generator = ReportGenerator::new(&args.agency)
        .with_agency_code(args.agency_code.unwrap_or(config.reporting.agency_code));
    let report = generator.generate(&cases, ReportPeriod::new(args.start, args.end));

    let Some(format) = args.format else {
        render_report_summary(&report);
        return Ok(());
    };

    let exported = export_report_as(&report, format)?;
    match args.output {
        Some(path) => {
            fs::write(&path, exported.content)?;
            println!("Wrote {} to {}", exported.filename, path.display());
        }
        None => println!("{}", exported.content),
    }

    Ok(())
}

fn render_report_summary(report: &RSA911Report) {
    let summary = &report.summary;
    let outcomes = &report.outcomes;
    let costs = &report.costs;

    println!(
        "{} for {} ({}), {} to {}",
        report.report_id,
        report.agency_name,
        report.agency_code,
        report.report_period.start,
        report.report_period.end
    );
    println!(
        "- {} cases | {} closed | {} active | {} successful ({}%)",
        summary.total_cases,
        summary.closed_cases,
        summary.active_cases,
        summary.successful_outcomes,
        summary.success_rate
    );
    println!(
        "- Outcomes: {} employed | {} education | {} self-employed | {} unsuccessful | {} other",
        outcomes.employed,
        outcomes.education,
        outcomes.self_employed,
        outcomes.unsuccessful,
        outcomes.other
    );
    println!(
        "- Services: {} delivered over {} hours",
        report.services.total_services, report.services.total_hours
    );
    for top in &report.services.top_services {
        println!("    {}: {}", top.service, top.count);
    }
    println!(
        "- Costs: ${:.2} total | ${:.2} per client | ${:.2} per successful outcome",
        costs.total_costs, costs.average_cost_per_client, costs.cost_per_successful_outcome
    );
}
