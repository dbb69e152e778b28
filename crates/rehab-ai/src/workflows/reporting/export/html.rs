use crate::workflows::reporting::views::RSA911Report;
use std::fmt::{self, Write};

const STYLE: &str = "\
    body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; }
    h1, h2 { color: #333; }
    table { width: 100%; border-collapse: collapse; margin: 20px 0; }
    th, td { padding: 12px; text-align: left; border: 1px solid #ddd; }
    th { background-color: #f4f4f4; font-weight: bold; }
    .summary { background-color: #f9f9f9; padding: 15px; margin: 20px 0; border-radius: 5px; }
    .metric { display: flex; justify-content: space-between; margin: 10px 0; }";

pub(super) fn render(report: &RSA911Report) -> Result<String, fmt::Error> {
    let mut html = String::new();
    let report_id = escape_html(&report.report_id);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "  <meta charset=\"UTF-8\">")?;
    writeln!(
        html,
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(html, "  <title>RSA-911 Report - {report_id}</title>")?;
    writeln!(html, "  <style>\n{STYLE}\n  </style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "  <h1>RSA-911 Report: {report_id}</h1>")?;

    writeln!(
        html,
        "  <div class=\"summary\" role=\"region\" aria-label=\"Report Header\">"
    )?;
    writeln!(
        html,
        "    <p><strong>Agency:</strong> {} ({})</p>",
        escape_html(&report.agency_name),
        escape_html(&report.agency_code)
    )?;
    writeln!(
        html,
        "    <p><strong>Report Period:</strong> {} to {}</p>",
        report.report_period.start, report.report_period.end
    )?;
    writeln!(
        html,
        "    <p><strong>Generated:</strong> {}</p>",
        report.generated_date.format("%Y-%m-%d")
    )?;
    writeln!(html, "  </div>")?;

    let summary = &report.summary;
    open_section(&mut html, "summary-heading", "Summary")?;
    writeln!(html, "    <div class=\"summary\">")?;
    metric(&mut html, "Total Cases", summary.total_cases)?;
    metric(&mut html, "Closed Cases", summary.closed_cases)?;
    metric(&mut html, "Active Cases", summary.active_cases)?;
    metric(&mut html, "Successful Outcomes", summary.successful_outcomes)?;
    metric(&mut html, "Success Rate", format!("{}%", summary.success_rate))?;
    writeln!(html, "    </div>")?;
    writeln!(html, "  </section>")?;

    let outcomes = &report.outcomes;
    open_section(&mut html, "outcomes-heading", "Outcome Statistics")?;
    table(
        &mut html,
        "Outcome Statistics",
        ("Outcome", "Count"),
        [
            ("Employed", outcomes.employed),
            ("Education", outcomes.education),
            ("Self-Employed", outcomes.self_employed),
            ("Unsuccessful", outcomes.unsuccessful),
            ("Other", outcomes.other),
        ]
        .iter()
        .map(|(label, count)| (label.to_string(), *count)),
    )?;
    writeln!(
        html,
        "    <p><strong>Average Wage:</strong> {}/hour</p>",
        format_money(outcomes.average_wage)
    )?;
    writeln!(
        html,
        "    <p><strong>Average Hours Worked:</strong> {} hours/week</p>",
        outcomes.average_hours_worked
    )?;
    writeln!(html, "  </section>")?;

    let costs = &report.costs;
    open_section(&mut html, "costs-heading", "Cost Analysis")?;
    writeln!(html, "    <div class=\"summary\">")?;
    metric(&mut html, "Total Costs", format_money(costs.total_costs))?;
    metric(
        &mut html,
        "Average Cost Per Client",
        format_money(costs.average_cost_per_client),
    )?;
    metric(
        &mut html,
        "Cost Per Successful Outcome",
        format_money(costs.cost_per_successful_outcome),
    )?;
    writeln!(html, "    </div>")?;
    writeln!(html, "  </section>")?;

    let services = &report.services;
    open_section(&mut html, "services-heading", "Service Statistics")?;
    writeln!(
        html,
        "    <p><strong>Total Services:</strong> {}</p>",
        services.total_services
    )?;
    writeln!(
        html,
        "    <p><strong>Total Hours:</strong> {}</p>",
        services.total_hours
    )?;
    writeln!(html, "    <h3>Top Services</h3>")?;
    table(
        &mut html,
        "Top Services",
        ("Service", "Count"),
        services
            .top_services
            .iter()
            .map(|top| (top.service.clone(), top.count)),
    )?;
    writeln!(html, "  </section>")?;

    writeln!(html, "</body>")?;
    write!(html, "</html>")?;

    Ok(html)
}

fn open_section(html: &mut String, id: &str, heading: &str) -> fmt::Result {
    writeln!(html)?;
    writeln!(html, "  <section aria-labelledby=\"{id}\">")?;
    writeln!(html, "    <h2 id=\"{id}\">{heading}</h2>")
}

fn metric(html: &mut String, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(
        html,
        "      <div class=\"metric\"><span>{label}:</span> <strong>{}</strong></div>",
        escape_html(&value.to_string())
    )
}

fn table(
    html: &mut String,
    label: &str,
    (first, second): (&str, &str),
    rows: impl Iterator<Item = (String, usize)>,
) -> fmt::Result {
    writeln!(html, "    <table role=\"table\" aria-label=\"{label}\">")?;
    writeln!(html, "      <thead>")?;
    writeln!(
        html,
        "        <tr><th scope=\"col\">{first}</th><th scope=\"col\">{second}</th></tr>"
    )?;
    writeln!(html, "      </thead>")?;
    writeln!(html, "      <tbody>")?;
    for (name, count) in rows {
        writeln!(
            html,
            "        <tr><td>{}</td><td>{count}</td></tr>",
            escape_html(&name)
        )?;
    }
    writeln!(html, "      </tbody>")?;
    writeln!(html, "    </table>")
}

/// `$1,234.50` style currency with thousands separators.
fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
