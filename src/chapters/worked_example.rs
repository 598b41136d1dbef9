//! Simple vs compound interest for the lending example in the chapter prose
//!
//! $1000 lent at 10% a year. Simple interest pays 10% of the principal every
//! year; compound interest pays 10% of the principal plus interest so far.
//! Simple interest is a presentation comparison and is computed here, not by
//! the calculator.

use serde::Serialize;

use crate::error::Result;
use crate::projection::{compute_trajectory, round_cents, CompoundingParameters};

pub const LENDING_PRINCIPAL: f64 = 1_000.0;
pub const LENDING_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub simple: f64,
    pub compound: f64,
}

impl ComparisonRow {
    /// Extra value earned by compounding over simple interest
    pub fn advantage(&self) -> f64 {
        round_cents(self.compound - self.simple)
    }
}

/// One row per year of the lending example
pub fn lending_example(years: u32) -> Result<Vec<ComparisonRow>> {
    let params = CompoundingParameters::new(LENDING_PRINCIPAL, 0.0, LENDING_RATE, years);
    let rows = compute_trajectory(&params)?
        .iter()
        .map(|point| ComparisonRow {
            year: point.period,
            simple: round_cents(LENDING_PRINCIPAL * (1.0 + LENDING_RATE * f64::from(point.period))),
            compound: point.value,
        })
        .collect();
    Ok(rows)
}

/// Row for a given year, if the table reaches it
pub fn row_for_year(rows: &[ComparisonRow], year: u32) -> Option<&ComparisonRow> {
    rows.iter().find(|row| row.year == year)
}
