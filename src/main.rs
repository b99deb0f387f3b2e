//! Benchmark runner: resolve sizes, run the timed y^T*A*x loop, report
//! result and estimated memory bandwidth.

use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use ytax::sizes::{Config, resolve_dims};
use ytax::ytax_parallel;

/// y^T*A*x host reduction benchmark.
///
/// Size flags are exponents of 2: `-N 12` means 4096 rows. Whatever
/// subset of {rows, columns, size} is given, the rest is derived
/// (defaults work out to 4096 x 1024 = 2^22 elements).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Exponent num: number of rows is 2^num (default: 2^12 = 4096)
    #[arg(short = 'N', long = "rows", value_name = "EXP",
          value_parser = clap::value_parser!(u32).range(..=62))]
    rows: Option<u32>,

    /// Exponent num: number of columns is 2^num (default: 2^10 = 1024)
    #[arg(short = 'M', long = "columns", value_name = "EXP",
          value_parser = clap::value_parser!(u32).range(..=62))]
    columns: Option<u32>,

    /// Exponent num: total matrix size is 2^num (default: 2^22 = 4096*1024)
    #[arg(short = 'S', long = "size", value_name = "EXP",
          value_parser = clap::value_parser!(u32).range(..=62))]
    size: Option<u32>,

    /// Number of repetitions
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    nrepeat: i64,

    /// Maximum worker threads (default: all available cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let rows = args.rows.map(|exp| {
        let n = 1i64 << exp;
        println!("  User N is {}", n);
        n
    });
    let cols = args.columns.map(|exp| {
        let m = 1i64 << exp;
        println!("  User M is {}", m);
        m
    });
    let total = args.size.map(|exp| {
        let s = 1i64 << exp;
        println!("  User S is {}", s);
        s
    });

    let resolved = resolve_dims(rows, cols, total);
    println!(
        "  Total size S = {} M = {} N = {}",
        resolved.s, resolved.m, resolved.n
    );

    let config = match resolved.validate(args.nrepeat) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("  {}", err);
            return ExitCode::FAILURE;
        }
    };

    let num_threads = args
        .threads
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, NonZeroUsize::get));

    run(&config, num_threads);
    ExitCode::SUCCESS
}

/// Allocate the all-ones buffers, run the timed repetition loop, and
/// print the performance summary.
fn run(config: &Config, num_threads: usize) {
    let n = config.rows;
    let m = config.cols;

    let y = vec![1.0f64; n];
    let x = vec![1.0f64; m];
    let a = vec![1.0f64; n * m];

    // Every input is exactly 1.0, so the reduction is exactly N*M as a
    // double (integral doubles are exact up to 2^53).
    let solution = n as f64 * m as f64;

    let start = Instant::now();

    for repeat in 0..config.nrepeat {
        let result = ytax_parallel(&y, &a, &x, n, m, num_threads);

        if repeat + 1 == config.nrepeat {
            println!("  Computed result for {} x {} is {:.6}", n, m, result);
        }

        // Soft check: warn and keep going.
        if result != solution {
            println!("  Error: result( {:.6} ) != solution( {:.6} )", result, solution);
        }
    }

    let time = start.elapsed().as_secs_f64();

    // Bandwidth model per repetition: each row of A is read once, the x
    // vector is re-read for every row, the y vector is read once.
    let gbytes = 1.0e-9 * (8 * (m + m * n + n)) as f64;

    println!(
        "  M( {} ) N( {} ) nrepeat ( {} ) problem( {} MB ) time( {} s ) bandwidth( {} GB/s )",
        m,
        n,
        config.nrepeat,
        gbytes * 1000.0,
        time,
        gbytes * config.nrepeat as f64 / time
    );
}
