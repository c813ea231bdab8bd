//! Plain student roster generator
//!
//! Writes a title block, the report table header and a column of
//! synthetic Portuguese student names.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use uminho_enrollment_gen::generator::{StudentGenerator, StudentProfile, DEFAULT_ROSTER_SIZE};
use uminho_enrollment_gen::names::PortugueseNames;
use uminho_enrollment_gen::xlsx;

#[derive(Parser)]
#[command(name = "students-xlsx")]
#[command(about = "Generate a synthetic student roster workbook", long_about = None)]
struct Cli {
    /// Output Excel file
    #[arg(short, long, default_value = "students.xlsx")]
    output: PathBuf,

    /// Number of students to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROSTER_SIZE)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = StudentGenerator::new(PortugueseNames, StudentProfile::roster());
    let students = generator.generate_students(cli.count, &mut rng);
    log::info!("Generated {} students", students.len());

    xlsx::write_student_roster_xlsx(&students, &cli.output)
        .context("Failed to write Excel file")?;

    println!("Excel file '{}' generated successfully.", cli.output.display());
    Ok(())
}
