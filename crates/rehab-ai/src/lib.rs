//! Scoring and aggregation core for vocational rehabilitation casework.
//!
//! Each workflow is a pure function of its inputs: eligibility screening across
//! benefit programs, accessibility-aware job matching, RSA-911 report
//! aggregation and export, and pathway resource recommendations.

pub mod config;
pub mod envelope;
pub mod error;
pub mod telemetry;
pub mod workflows;
