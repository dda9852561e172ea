//! Integration tests module
//!
//! End-to-end tests for the feedback analyzer, including:
//! - Pasted text and CSV intake through to saved reports
//! - Error handling and degraded resources

pub mod error_scenarios;
pub mod pipeline_test;
