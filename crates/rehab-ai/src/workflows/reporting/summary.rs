use super::domain::{AgeBand, CaseOutcome, ReportCase};
use super::views::{
    CostAnalysis, Demographics, OutcomeStatistics, ReportSummary, ServiceStatistics, ServiceTally,
    TopService,
};
use std::collections::BTreeMap;

const TOP_SERVICE_LIMIT: usize = 5;

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

pub(crate) fn summarize(cases: &[ReportCase]) -> ReportSummary {
    let total_cases = cases.len();
    let closed_cases = cases.iter().filter(|case| case.is_closed()).count();
    let successful_outcomes = cases
        .iter()
        .filter(|case| case.has_successful_outcome())
        .count();

    ReportSummary {
        total_cases,
        new_cases: total_cases,
        closed_cases,
        active_cases: total_cases - closed_cases,
        successful_outcomes,
        success_rate: round_to(ratio(successful_outcomes as f64, closed_cases) * 100.0, 1),
    }
}

pub(crate) fn demographics(cases: &[ReportCase]) -> Demographics {
    let mut age_distribution: BTreeMap<String, usize> = AgeBand::ordered()
        .into_iter()
        .map(|band| (band.label().to_string(), 0))
        .collect();
    let mut disability_types = BTreeMap::new();
    let mut gender_distribution = BTreeMap::new();
    let mut ethnicity_distribution = BTreeMap::new();

    for case in cases {
        *age_distribution
            .entry(AgeBand::for_age(case.client_age).label().to_string())
            .or_insert(0) += 1;

        for disability in &case.disability {
            *disability_types.entry(disability.clone()).or_insert(0) += 1;
        }

        if let Some(gender) = &case.gender {
            *gender_distribution.entry(gender.clone()).or_insert(0) += 1;
        }

        if let Some(ethnicity) = &case.ethnicity {
            *ethnicity_distribution.entry(ethnicity.clone()).or_insert(0) += 1;
        }
    }

    Demographics {
        age_distribution,
        disability_types,
        gender_distribution,
        ethnicity_distribution,
    }
}

pub(crate) fn outcome_statistics(cases: &[ReportCase]) -> OutcomeStatistics {
    let closed: Vec<&ReportCase> = cases.iter().filter(|case| case.is_closed()).collect();
    let count = |outcome: CaseOutcome| {
        closed
            .iter()
            .filter(|case| case.outcome == Some(outcome))
            .count()
    };

    let employment: Vec<_> = closed
        .iter()
        .filter_map(|case| case.employment_details.as_ref())
        .collect();
    let wage_total: f64 = employment.iter().map(|details| details.salary).sum();
    let hours_total: f64 = employment.iter().map(|details| details.hours).sum();

    OutcomeStatistics {
        total_closures: closed.len(),
        employed: count(CaseOutcome::Employed),
        education: count(CaseOutcome::Education),
        self_employed: count(CaseOutcome::SelfEmployed),
        unsuccessful: count(CaseOutcome::Unsuccessful),
        other: count(CaseOutcome::Other),
        average_wage: round_to(ratio(wage_total, employment.len()), 2),
        average_hours_worked: round_to(ratio(hours_total, employment.len()), 1),
    }
}

pub(crate) fn service_statistics(cases: &[ReportCase]) -> ServiceStatistics {
    let mut services_by_type: BTreeMap<String, ServiceTally> = BTreeMap::new();
    // First-seen order, used to break count ties in the top list.
    let mut seen: Vec<&str> = Vec::new();
    let mut total_services = 0;
    let mut total_hours = 0.0;

    for service in cases.iter().flat_map(|case| &case.services_provided) {
        total_services += 1;
        total_hours += service.hours;

        let tally = services_by_type
            .entry(service.service_type.clone())
            .or_insert_with(|| {
                seen.push(&service.service_type);
                ServiceTally::default()
            });
        tally.count += 1;
        tally.hours += service.hours;
    }

    let mut top_services: Vec<TopService> = seen
        .into_iter()
        .map(|service| TopService {
            service: service.to_string(),
            count: services_by_type
                .get(service)
                .map(|tally| tally.count)
                .unwrap_or_default(),
        })
        .collect();
    top_services.sort_by(|a, b| b.count.cmp(&a.count));
    top_services.truncate(TOP_SERVICE_LIMIT);

    ServiceStatistics {
        total_services,
        total_hours: round_to(total_hours, 1),
        services_by_type,
        top_services,
    }
}

pub(crate) fn cost_analysis(cases: &[ReportCase]) -> CostAnalysis {
    let mut costs_by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut total_costs = 0.0;

    for cost in cases.iter().flat_map(|case| &case.costs) {
        total_costs += cost.amount;
        *costs_by_category.entry(cost.category.clone()).or_insert(0.0) += cost.amount;
    }

    let successful = cases
        .iter()
        .filter(|case| case.has_successful_outcome())
        .count();

    CostAnalysis {
        total_costs: round_to(total_costs, 2),
        average_cost_per_client: round_to(ratio(total_costs, cases.len()), 2),
        costs_by_category,
        cost_per_successful_outcome: round_to(ratio(total_costs, successful), 2),
    }
}
