use std::ops::RangeInclusive;
use std::time::Instant;

use anyhow::{Result, ensure};
use hybrid_sort::{Comparisons, Strategy, sort_i64, strategy_name};
use log::{debug, info, warn};

use crate::dataset::DataGenerator;
use crate::table::CsvRow;

/// Above this, insertion-sort leaves alone cost on the order of `S^2 / 4`
/// comparisons each.
const LARGE_THRESHOLD: usize = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct VaryNRecord {
    pub n: usize,
    pub comparisons: Comparisons,
    /// `n * log2(n)` reference curve.
    pub n_log2_n: f64,
    pub seconds: f64,
}

impl CsvRow for VaryNRecord {
    const HEADER: &'static [&'static str] = &["n", "comparisons", "n_log2_n", "seconds"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.n.to_string(),
            self.comparisons.to_string(),
            format!("{:.0}", self.n_log2_n),
            format!("{:.6}", self.seconds),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VarySRecord {
    pub threshold: usize,
    pub comparisons: Comparisons,
    pub seconds: f64,
}

impl CsvRow for VarySRecord {
    const HEADER: &'static [&'static str] = &["S", "comparisons", "seconds"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.threshold.to_string(),
            self.comparisons.to_string(),
            format!("{:.6}", self.seconds),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptimalSRecord {
    pub n: usize,
    pub optimal_threshold: usize,
    pub comparisons: Comparisons,
}

impl CsvRow for OptimalSRecord {
    const HEADER: &'static [&'static str] = &["n", "optimal_S", "comparisons"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.n.to_string(),
            self.optimal_threshold.to_string(),
            self.comparisons.to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompareRecord {
    pub strategy: Strategy,
    pub n: usize,
    pub comparisons: Comparisons,
    pub seconds: f64,
}

impl CsvRow for CompareRecord {
    const HEADER: &'static [&'static str] = &["algorithm", "n", "S", "comparisons", "seconds"];

    fn fields(&self) -> Vec<String> {
        let threshold = match self.strategy {
            Strategy::HybridSort { threshold } => threshold.to_string(),
            Strategy::InsertionSort | Strategy::MergeSort => String::new(),
        };
        vec![
            strategy_name(self.strategy).to_string(),
            self.n.to_string(),
            threshold,
            self.comparisons.to_string(),
            format!("{:.6}", self.seconds),
        ]
    }
}

/// Hybrid sort at a fixed threshold over inputs of each size, one fresh
/// random array per size.
pub fn vary_n(
    generator: &mut DataGenerator,
    threshold: usize,
    sizes: &[usize],
) -> Result<Vec<VaryNRecord>> {
    check_threshold(threshold);
    info!("vary n: S={threshold}, {} sizes", sizes.len());

    let strategy = Strategy::HybridSort { threshold };
    let mut records = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let mut data = generator.generate(n);
        let (comparisons, seconds) = timed_sort(strategy, &mut data)?;
        debug!("n={n} comparisons={comparisons} seconds={seconds:.6}");
        records.push(VaryNRecord {
            n,
            comparisons,
            n_log2_n: n_log2_n(n),
            seconds,
        });
    }
    Ok(records)
}

/// Hybrid sort of one random array of `n` keys for every threshold in
/// `thresholds`; each run sorts its own copy.
pub fn vary_s(
    generator: &mut DataGenerator,
    n: usize,
    thresholds: RangeInclusive<usize>,
) -> Result<Vec<VarySRecord>> {
    check_sweep(&thresholds)?;
    info!("vary S: n={n}, S in {thresholds:?}");

    let base = generator.generate(n);
    let mut records = Vec::with_capacity(thresholds.clone().count());
    for threshold in thresholds {
        let mut data = base.clone();
        let (comparisons, seconds) = timed_sort(Strategy::HybridSort { threshold }, &mut data)?;
        debug!("S={threshold} comparisons={comparisons} seconds={seconds:.6}");
        records.push(VarySRecord {
            threshold,
            comparisons,
            seconds,
        });
    }
    Ok(records)
}

/// Exhaustive search for the threshold with the fewest comparisons at each
/// size. Ties go to the smallest threshold.
pub fn optimal_s(
    generator: &mut DataGenerator,
    sizes: &[usize],
    thresholds: RangeInclusive<usize>,
) -> Result<Vec<OptimalSRecord>> {
    check_sweep(&thresholds)?;
    info!("optimal S: {} sizes, S in {thresholds:?}", sizes.len());

    let mut records = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let base = generator.generate(n);
        let mut best: Option<(usize, Comparisons)> = None;
        for threshold in thresholds.clone() {
            let mut data = base.clone();
            let (comparisons, _) = timed_sort(Strategy::HybridSort { threshold }, &mut data)?;
            if best.is_none_or(|(_, fewest)| comparisons < fewest) {
                best = Some((threshold, comparisons));
            }
        }

        if let Some((optimal_threshold, comparisons)) = best {
            debug!("n={n} optimal S={optimal_threshold} comparisons={comparisons}");
            records.push(OptimalSRecord {
                n,
                optimal_threshold,
                comparisons,
            });
        }
    }
    Ok(records)
}

/// Hybrid sort and pure merge sort on copies of the same random array.
pub fn compare(
    generator: &mut DataGenerator,
    threshold: usize,
    n: usize,
) -> Result<Vec<CompareRecord>> {
    check_threshold(threshold);
    info!("compare: n={n}, S={threshold}");

    let base = generator.generate(n);
    let strategies = [Strategy::HybridSort { threshold }, Strategy::MergeSort];
    let mut records = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let mut data = base.clone();
        let (comparisons, seconds) = timed_sort(strategy, &mut data)?;
        debug!(
            "{} comparisons={comparisons} seconds={seconds:.6}",
            strategy_name(strategy)
        );
        records.push(CompareRecord {
            strategy,
            n,
            comparisons,
            seconds,
        });
    }
    Ok(records)
}

pub fn n_log2_n(n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let n = n as f64;
    n * n.log2()
}

fn timed_sort(strategy: Strategy, data: &mut [i64]) -> Result<(Comparisons, f64)> {
    let start = Instant::now();
    let comparisons = sort_i64(strategy, data);
    let seconds = start.elapsed().as_secs_f64();
    ensure!(
        data.is_sorted(),
        "{} left {} elements unsorted",
        strategy_name(strategy),
        data.len()
    );
    Ok((comparisons, seconds))
}

fn check_threshold(threshold: usize) {
    if threshold == 0 {
        warn!("threshold 0 behaves like threshold 1");
    } else if threshold > LARGE_THRESHOLD {
        warn!("threshold {threshold} makes insertion-sort leaves quadratic");
    }
}

fn check_sweep(thresholds: &RangeInclusive<usize>) -> Result<()> {
    ensure!(
        !thresholds.is_empty(),
        "empty threshold sweep {}..={}",
        thresholds.start(),
        thresholds.end()
    );
    check_threshold(*thresholds.start());
    check_threshold(*thresholds.end());
    Ok(())
}
