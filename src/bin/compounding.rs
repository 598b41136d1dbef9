//! Terminal front end for the compounding machine
//!
//! ```bash
//! # Run the calculator with the form defaults ($1000, 10 years, 8%)
//! compounding run
//!
//! # $1000 plus $100 a year at 8% for 10 years, as CSV
//! compounding run --contribution 100 --format csv
//!
//! # Open a chapter
//! compounding chapter "Finance starter kit"
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use compounding_machine::chapters::{self, Chapter, RenderContext};
use compounding_machine::display::{format_currency, render_chart, result_to_json, write_trajectory_csv};
use compounding_machine::{compound, FormInputs, TrajectoryCache};

#[derive(Parser)]
#[command(name = "compounding")]
#[command(author, version, about = "Compound interest calculator and personal finance chapters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the compounding calculator
    Run(RunArgs),

    /// Render one chapter
    Chapter(ChapterArgs),

    /// List the available chapters
    Chapters,
}

#[derive(Args)]
struct FormArgs {
    /// JSON file with form inputs; flags override its values
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Starting principal in dollars
    #[arg(long)]
    principal: Option<u64>,

    /// Amount added at the start of each year
    #[arg(long)]
    contribution: Option<u64>,

    /// Number of years (0-100)
    #[arg(long)]
    years: Option<u32>,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<f64>,
}

impl FormArgs {
    fn resolve(&self) -> Result<FormInputs> {
        let mut inputs = match &self.inputs {
            Some(path) => FormInputs::from_json_file(path)
                .with_context(|| format!("Failed to load inputs from {}", path.display()))?,
            None => FormInputs::default(),
        };
        if let Some(principal) = self.principal {
            inputs.principal = principal;
        }
        if let Some(contribution) = self.contribution {
            inputs.annual_contribution = contribution;
        }
        if let Some(years) = self.years {
            inputs.years = years;
        }
        if let Some(rate) = self.rate {
            inputs.interest_rate_pct = rate;
        }
        Ok(inputs)
    }
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    form: FormArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Width of the chart bars
    #[arg(long, default_value_t = compounding_machine::display::DEFAULT_CHART_WIDTH)]
    width: usize,
}

#[derive(Args)]
struct ChapterArgs {
    /// Chapter title or slug, e.g. "Compounding machine" or compounding-machine
    name: String,

    #[command(flatten)]
    form: FormArgs,

    /// Instructions file shown on the Home chapter
    #[arg(long)]
    instructions: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Final value and bar chart
    #[default]
    Table,
    /// Trajectory as year,value rows
    Csv,
    /// Full result as JSON
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Chapter(args) => chapter(args),
        Commands::Chapters => {
            for chapter in Chapter::ALL {
                println!("{:<22} {}", chapter.title(), chapter.slug());
            }
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    let inputs = args.form.resolve()?;
    let params = inputs.to_parameters().context("Invalid calculator inputs")?;
    let result = compound(&params)?;

    match args.format {
        OutputFormat::Table => {
            println!("You'll have this left: {}", format_currency(result.final_value));
            println!();
            println!("Growth over time (rounded to the cent each year)");
            print!("{}", render_chart(&result.trajectory, args.width));
        }
        OutputFormat::Csv => {
            write_trajectory_csv(io::stdout().lock(), &result.trajectory)?;
        }
        OutputFormat::Json => {
            println!("{}", result_to_json(&result)?);
        }
    }
    Ok(())
}

fn chapter(args: ChapterArgs) -> Result<()> {
    let chapter: Chapter = args.name.parse()?;
    let inputs = args.form.resolve()?;

    let instructions = if chapter == Chapter::Home {
        let path = args.instructions.unwrap_or_else(chapters::default_instructions_path);
        chapters::load_instructions(&path)
            .with_context(|| format!("Failed to load instructions from {}", path.display()))?
    } else {
        String::new()
    };

    let cache = TrajectoryCache::new();
    let ctx = RenderContext::new(&instructions, &inputs, &cache);
    print!("{}", chapters::render(chapter, &ctx)?);
    Ok(())
}
