use super::ExportError;
use crate::workflows::reporting::views::RSA911Report;

type Row = Vec<String>;

fn row<const N: usize>(fields: [&str; N]) -> Row {
    fields.iter().map(|field| field.to_string()).collect()
}

fn labeled(label: &str, value: impl ToString) -> Row {
    vec![label.to_string(), value.to_string()]
}

fn write_section(rows: &[Row]) -> Result<String, ExportError> {
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in rows {
        writer.write_record(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ::csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Labeled sections separated by a blank line.
pub(super) fn render(report: &RSA911Report) -> Result<String, ExportError> {
    let period = format!(
        "{} to {}",
        report.report_period.start, report.report_period.end
    );
    let summary = &report.summary;
    let outcomes = &report.outcomes;
    let costs = &report.costs;

    let sections = [
        vec![
            labeled("RSA-911 Report", &report.report_id),
            labeled("Agency", &report.agency_name),
            labeled("Period", period),
        ],
        vec![
            row(["Summary"]),
            row(["Metric", "Value"]),
            labeled("Total Cases", summary.total_cases),
            labeled("Closed Cases", summary.closed_cases),
            labeled("Active Cases", summary.active_cases),
            labeled("Successful Outcomes", summary.successful_outcomes),
            labeled("Success Rate", format!("{}%", summary.success_rate)),
        ],
        vec![
            row(["Outcomes"]),
            row(["Outcome", "Count"]),
            labeled("Employed", outcomes.employed),
            labeled("Education", outcomes.education),
            labeled("Self-Employed", outcomes.self_employed),
            labeled("Unsuccessful", outcomes.unsuccessful),
            labeled("Other", outcomes.other),
        ],
        vec![
            row(["Cost Analysis"]),
            row(["Metric", "Amount"]),
            labeled("Total Costs", format!("${}", costs.total_costs)),
            labeled(
                "Average Cost Per Client",
                format!("${}", costs.average_cost_per_client),
            ),
            labeled(
                "Cost Per Successful Outcome",
                format!("${}", costs.cost_per_successful_outcome),
            ),
        ],
    ];

    let rendered = sections
        .iter()
        .map(|rows| write_section(rows))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rendered.join("\n").trim_end_matches('\n').to_string())
}
