use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hybrid_sort::strategy_name;
use log::info;

use crate::cli::{
    Cli, Command, DEFAULT_MAX_S, DEFAULT_MIN_S, DEFAULT_OPTIMAL_S_SIZES, DEFAULT_VARY_N_SIZES,
};
use crate::dataset::DataGenerator;
use crate::experiments::{self, CompareRecord, OptimalSRecord, VaryNRecord, VarySRecord};
use crate::table::{CsvRow, write_csv_file};

pub const VARY_N_FILE: &str = "results_vary_n.csv";
pub const VARY_S_FILE: &str = "results_vary_S.csv";
pub const OPTIMAL_S_FILE: &str = "results_optimal_S.csv";
pub const COMPARE_FILE: &str = "results_compare.csv";

pub fn run(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;
    let mut generator = DataGenerator::new(cli.seed, cli.max_value)?;
    info!(
        "keys in [1, {}], seed {:?}, writing to {}",
        generator.max_value(),
        cli.seed,
        cli.out_dir.display()
    );

    let command = cli.command.clone().unwrap_or_default();
    run_command(&command, &mut generator, &cli.out_dir)
}

pub fn run_command(
    command: &Command,
    generator: &mut DataGenerator,
    out_dir: &Path,
) -> Result<()> {
    match command {
        Command::VaryN { threshold, sizes } => {
            run_vary_n(generator, out_dir, *threshold, sizes_or(sizes, &DEFAULT_VARY_N_SIZES))
        }
        Command::VaryS { n, min_s, max_s } => run_vary_s(generator, out_dir, *n, *min_s, *max_s),
        Command::OptimalS {
            sizes,
            min_s,
            max_s,
        } => run_optimal_s(
            generator,
            out_dir,
            sizes_or(sizes, &DEFAULT_OPTIMAL_S_SIZES),
            *min_s,
            *max_s,
        ),
        Command::Compare { threshold, n } => run_compare(generator, out_dir, *threshold, *n),
        Command::All {
            threshold,
            n,
            compare_n,
        } => {
            run_vary_n(generator, out_dir, *threshold, &DEFAULT_VARY_N_SIZES)?;
            run_vary_s(generator, out_dir, *n, DEFAULT_MIN_S, DEFAULT_MAX_S)?;
            run_optimal_s(
                generator,
                out_dir,
                &DEFAULT_OPTIMAL_S_SIZES,
                DEFAULT_MIN_S,
                DEFAULT_MAX_S,
            )?;
            run_compare(generator, out_dir, *threshold, *compare_n)
        }
    }
}

fn run_vary_n(
    generator: &mut DataGenerator,
    out_dir: &Path,
    threshold: usize,
    sizes: &[usize],
) -> Result<()> {
    let records = experiments::vary_n(generator, threshold, sizes)?;

    println!("\n=== Vary n, S={threshold} ===");
    println!("{:>12} {:>15} {:>15} {:>12}", "n", "comparisons", "n*log2(n)", "seconds");
    for VaryNRecord {
        n,
        comparisons,
        n_log2_n,
        seconds,
    } in &records
    {
        println!("{n:>12} {comparisons:>15} {n_log2_n:>15.0} {seconds:>12.6}");
    }

    persist(out_dir, VARY_N_FILE, &records)
}

fn run_vary_s(
    generator: &mut DataGenerator,
    out_dir: &Path,
    n: usize,
    min_s: usize,
    max_s: usize,
) -> Result<()> {
    let records = experiments::vary_s(generator, n, min_s..=max_s)?;

    println!("\n=== Vary S, n={n} ===");
    println!("{:>6} {:>15} {:>12}", "S", "comparisons", "seconds");
    for VarySRecord {
        threshold,
        comparisons,
        seconds,
    } in &records
    {
        println!("{threshold:>6} {comparisons:>15} {seconds:>12.6}");
    }

    persist(out_dir, VARY_S_FILE, &records)
}

fn run_optimal_s(
    generator: &mut DataGenerator,
    out_dir: &Path,
    sizes: &[usize],
    min_s: usize,
    max_s: usize,
) -> Result<()> {
    let records = experiments::optimal_s(generator, sizes, min_s..=max_s)?;

    println!("\n=== Optimal S in [{min_s}, {max_s}] ===");
    println!("{:>12} {:>10} {:>15}", "n", "optimal S", "comparisons");
    for OptimalSRecord {
        n,
        optimal_threshold,
        comparisons,
    } in &records
    {
        println!("{n:>12} {optimal_threshold:>10} {comparisons:>15}");
    }

    persist(out_dir, OPTIMAL_S_FILE, &records)
}

fn run_compare(
    generator: &mut DataGenerator,
    out_dir: &Path,
    threshold: usize,
    n: usize,
) -> Result<()> {
    let records = experiments::compare(generator, threshold, n)?;

    println!("\n=== Hybrid sort vs merge sort, n={n}, S={threshold} ===");
    for CompareRecord {
        strategy,
        comparisons,
        seconds,
        ..
    } in &records
    {
        println!(
            "  {:<12}: {comparisons:>12} comparisons | {seconds:.6}s",
            strategy_name(*strategy)
        );
    }
    if let [hybrid, merge] = records.as_slice() {
        if merge.comparisons > 0 && merge.seconds > 0.0 {
            println!(
                "  hybrid/merge: {:.4} comparisons, {:.4} time",
                hybrid.comparisons as f64 / merge.comparisons as f64,
                hybrid.seconds / merge.seconds
            );
        }
    }

    persist(out_dir, COMPARE_FILE, &records)
}

fn persist<R: CsvRow>(out_dir: &Path, file_name: &str, records: &[R]) -> Result<()> {
    let path: PathBuf = out_dir.join(file_name);
    write_csv_file(&path, records)?;
    info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

fn sizes_or<'a>(sizes: &'a [usize], defaults: &'a [usize]) -> &'a [usize] {
    if sizes.is_empty() { defaults } else { sizes }
}
