pub mod eligibility;
pub mod matching;
pub mod pathway;
pub mod reporting;
