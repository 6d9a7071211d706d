//! Shared test harness modules for the Daytrip CLI.

use super::*;

mod unit;
