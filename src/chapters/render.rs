//! Stateless chapter dispatch
//!
//! Rendering a chapter depends only on the chapter and the context passed in.
//! No navigation state is kept between calls.

use log::debug;

use super::chapter::Chapter;
use super::content;
use crate::display::{format_currency, render_chart, DEFAULT_CHART_WIDTH};
use crate::error::Result;
use crate::inputs::FormInputs;
use crate::projection::{compute_final_value, TrajectoryCache};

/// Everything a chapter may draw on
pub struct RenderContext<'a> {
    /// Instructional text for the Home chapter
    pub instructions: &'a str,
    /// Calculator inputs for the Compounding machine chapter
    pub inputs: &'a FormInputs,
    pub cache: &'a TrajectoryCache,
    pub chart_width: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(instructions: &'a str, inputs: &'a FormInputs, cache: &'a TrajectoryCache) -> Self {
        Self {
            instructions,
            inputs,
            cache,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

pub fn render(chapter: Chapter, ctx: &RenderContext<'_>) -> Result<String> {
    debug!("Rendering chapter {}", chapter);
    match chapter {
        Chapter::Home => Ok(format!("{}\n{}\n", ctx.instructions.trim_end(), content::HOME_HINT)),
        Chapter::CompoundingMachine => render_compounding(ctx),
        Chapter::FinanceStarterKit => Ok(content::FINANCE_STARTER_KIT.to_string()),
        Chapter::Investing => Ok(content::INVESTING.to_string()),
    }
}

/// Calculator section: final value line and growth chart
pub fn render_calculator(ctx: &RenderContext<'_>) -> Result<String> {
    let params = ctx.inputs.to_parameters()?;
    let final_value = compute_final_value(&params)?;
    let trajectory = ctx.cache.get_or_compute(&params)?;

    let mut out = String::new();
    out.push_str(&format!("You'll have this left: {}\n\n", format_currency(final_value)));
    out.push_str(content::GROWTH_HEADING);
    out.push_str("\n\n");
    out.push_str(&render_chart(&trajectory, ctx.chart_width));
    if !trajectory.is_empty() {
        out.push('\n');
        out.push_str(content::CHART_NOTE);
        out.push('\n');
    }
    Ok(out)
}

fn render_compounding(ctx: &RenderContext<'_>) -> Result<String> {
    let calculator = render_calculator(ctx)?;
    Ok([
        content::COMPOUNDING_INTRO,
        content::TRY_IT_OUT,
        calculator.as_str(),
        content::COMPOUNDING_OUTRO,
    ]
    .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompoundingError;

    #[test]
    fn test_home_shows_instructions_verbatim() {
        let inputs = FormInputs::default();
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("# Hello\n\n*reader*", &inputs, &cache);

        let page = render(Chapter::Home, &ctx).unwrap();
        assert!(page.starts_with("# Hello\n\n*reader*\n"));
        assert!(page.contains("select a chapter"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_compounding_runs_calculator() {
        let inputs = FormInputs {
            principal: 1000,
            annual_contribution: 0,
            years: 3,
            interest_rate_pct: 10.0,
        };
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("", &inputs, &cache);

        let page = render(Chapter::CompoundingMachine, &ctx).unwrap();
        assert!(page.contains("You'll have this left: $1,331.00"));
        assert!(page.contains("### Growth over time"));
        assert!(page.contains("$1,210.00"));
        assert!(page.contains("Chess and compounding"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_compounding_reuses_cache() {
        let inputs = FormInputs::default();
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("", &inputs, &cache);

        let first = render(Chapter::CompoundingMachine, &ctx).unwrap();
        let second = render(Chapter::CompoundingMachine, &ctx).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_zero_years_has_no_chart() {
        let inputs = FormInputs { years: 0, ..Default::default() };
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("", &inputs, &cache);

        let section = render_calculator(&ctx).unwrap();
        assert!(section.contains("$1,000.00"));
        assert!(!section.contains(" | "));
        assert!(!section.contains("rounded to the cent"));
    }

    #[test]
    fn test_overflowing_rate_with_zero_principal() {
        let inputs = FormInputs {
            principal: 0,
            annual_contribution: 0,
            years: 100,
            interest_rate_pct: 1_000_000.0,
        };
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("", &inputs, &cache);

        let section = render_calculator(&ctx).unwrap();
        assert!(section.contains("You'll have this left: $0.00"));
        assert!(!section.contains("NaN"));
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        let inputs = FormInputs { years: 250, ..Default::default() };
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("", &inputs, &cache);

        assert!(matches!(
            render(Chapter::CompoundingMachine, &ctx),
            Err(CompoundingError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_static_chapters_ignore_inputs() {
        let inputs = FormInputs { years: 250, ..Default::default() };
        let cache = TrajectoryCache::new();
        let ctx = RenderContext::new("", &inputs, &cache);

        assert!(render(Chapter::FinanceStarterKit, &ctx).unwrap().contains("**Income**"));
        assert!(render(Chapter::Investing, &ctx).unwrap().contains("under construction"));
    }
}
