use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hybrid_sort::DEFAULT_THRESHOLD;

use crate::dataset::DEFAULT_MAX_VALUE;

pub const DEFAULT_VARY_N_SIZES: [usize; 13] = [
    1_000, 2_000, 5_000, 10_000, 20_000, 50_000, 100_000, 200_000, 500_000, 1_000_000, 2_000_000,
    5_000_000, 10_000_000,
];
pub const DEFAULT_OPTIMAL_S_SIZES: [usize; 5] = [1_000, 5_000, 10_000, 50_000, 100_000];
pub const DEFAULT_SWEEP_N: usize = 100_000;
pub const DEFAULT_COMPARE_N: usize = 10_000_000;
pub const DEFAULT_MIN_S: usize = 1;
pub const DEFAULT_MAX_S: usize = 100;

/// Comparison-count experiments for hybrid merge/insertion sort.
#[derive(Parser, Debug)]
#[command(name = "experiment", version)]
pub struct Cli {
    /// Directory that receives the CSV results
    #[arg(long, global = true, default_value = ".")]
    pub out_dir: PathBuf,

    /// Seed for the array generator (OS entropy when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Generated keys are uniform in [1, max-value]
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_VALUE,
          value_parser = clap::value_parser!(i64).range(1..))]
    pub max_value: i64,

    /// Log filter passed to env_logger (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Experiment to run; all of them when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fixed threshold, growing input size
    VaryN {
        #[arg(short = 's', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Comma separated sizes, `k`/`m` suffixes allowed
        #[arg(long, value_delimiter = ',', value_parser = parse_count)]
        sizes: Vec<usize>,
    },
    /// Fixed input, threshold swept over [min-s, max-s]
    VaryS {
        #[arg(short, long, default_value_t = DEFAULT_SWEEP_N, value_parser = parse_count)]
        n: usize,

        #[arg(long, default_value_t = DEFAULT_MIN_S)]
        min_s: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_S)]
        max_s: usize,
    },
    /// Threshold with the fewest comparisons for each size
    OptimalS {
        #[arg(long, value_delimiter = ',', value_parser = parse_count)]
        sizes: Vec<usize>,

        #[arg(long, default_value_t = DEFAULT_MIN_S)]
        min_s: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_S)]
        max_s: usize,
    },
    /// Hybrid sort against merge sort on one large input, with timings
    Compare {
        #[arg(short = 's', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        #[arg(short, long, default_value_t = DEFAULT_COMPARE_N, value_parser = parse_count)]
        n: usize,
    },
    /// Every experiment with its default parameters
    All {
        #[arg(short = 's', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Input size of the threshold sweep
        #[arg(short, long, default_value_t = DEFAULT_SWEEP_N, value_parser = parse_count)]
        n: usize,

        /// Input size of the hybrid/merge comparison
        #[arg(long, default_value_t = DEFAULT_COMPARE_N, value_parser = parse_count)]
        compare_n: usize,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::All {
            threshold: DEFAULT_THRESHOLD,
            n: DEFAULT_SWEEP_N,
            compare_n: DEFAULT_COMPARE_N,
        }
    }
}

/// Parses `1500`, `100k`, `2.5m` into an element count.
pub fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.trim().to_lowercase();
    let (num_str, multiplier) = if let Some(num) = s.strip_suffix('m') {
        (num, 1_000_000)
    } else if let Some(num) = s.strip_suffix('k') {
        (num, 1_000)
    } else {
        (s.as_str(), 1)
    };

    if let Ok(n) = num_str.parse::<usize>() {
        return n
            .checked_mul(multiplier)
            .ok_or_else(|| format!("Count '{}' is too large", s));
    }

    let n = num_str
        .parse::<f64>()
        .map_err(|e| format!("Invalid number '{}': {}", s, e))?;
    if !n.is_finite() || n < 0.0 {
        return Err(format!("Invalid count '{}'", s));
    }
    let count = n * multiplier as f64;
    if count.fract() != 0.0 {
        return Err(format!("Count '{}' is not a whole number", s));
    }
    if count >= usize::MAX as f64 {
        return Err(format!("Count '{}' is too large", s));
    }
    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_with_suffixes() {
        assert_eq!(parse_count("1500"), Ok(1_500));
        assert_eq!(parse_count("100k"), Ok(100_000));
        assert_eq!(parse_count("10M"), Ok(10_000_000));
        assert_eq!(parse_count("2.5m"), Ok(2_500_000));
        assert!(parse_count("ten").is_err());
        assert!(parse_count("-3k").is_err());
    }

    #[test]
    fn fractional_and_huge_counts_are_rejected() {
        assert_eq!(parse_count("1e3"), Ok(1_000));
        assert!(parse_count("1.5").is_err());
        assert!(parse_count("0.0005k").is_err());
        assert!(parse_count("1e30").is_err());
        assert!(parse_count("1e20m").is_err());
        assert!(parse_count("nan").is_err());
        assert!(parse_count("inf").is_err());
        assert!(Cli::try_parse_from(["experiment", "vary-n", "--sizes", "1e30"]).is_err());
    }

    #[test]
    fn no_subcommand_runs_everything() {
        let cli = Cli::try_parse_from(["experiment"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.max_value, DEFAULT_MAX_VALUE);
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }

    #[test]
    fn subcommand_flags() {
        let cli = Cli::try_parse_from([
            "experiment",
            "--seed",
            "7",
            "vary-n",
            "-s",
            "8",
            "--sizes",
            "1k,20k",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(
            cli.command,
            Some(Command::VaryN {
                threshold: 8,
                sizes: vec![1_000, 20_000],
            })
        );

        let cli =
            Cli::try_parse_from(["experiment", "vary-s", "-n", "50k", "--max-s", "20"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::VaryS {
                n: 50_000,
                min_s: DEFAULT_MIN_S,
                max_s: 20,
            })
        );
    }

    #[test]
    fn max_value_must_be_positive() {
        assert!(Cli::try_parse_from(["experiment", "--max-value", "0"]).is_err());
    }
}
