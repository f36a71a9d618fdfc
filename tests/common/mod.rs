#![allow(dead_code)]

pub use termplan_test_utils::builders;
pub use termplan_test_utils::init_tracing;

use std::error::Error;

pub type TestResult = Result<(), Box<dyn Error>>;
