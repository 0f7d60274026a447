//! Benchmark for the sieve and report
//!
//! This benchmark sieves up to the given bound, writes the report to a scratch file, and
//! reports how long each step took.

use clap::Parser;
use primes_benchmark_runner::BenchmarkRunner;

#[derive(Parser)]
struct Config {
    /// Every prime below this number is found
    #[arg(short = 'b', long, value_name = "NUMBER", default_value = "1000")]
    bound: usize,
    /// Number of iterations to run
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "1")]
    iterations: usize,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    println!("Sieve Benchmark");
    println!("===============");
    println!("Bound: {}", config.bound);
    println!("Iterations: {}", config.iterations);
    println!();

    let runner = BenchmarkRunner::new()?;

    let mut total_sieve_time = 0;
    let mut total_report_time = 0;

    for i in 1..=config.iterations {
        if config.iterations > 1 {
            println!("--- Iteration {i} ---");
        }

        let stats = runner.run_benchmark(config.bound)?;

        total_sieve_time += stats.sieve_time_us;
        total_report_time += stats.report_time_us;

        if config.iterations > 1 {
            println!();
        }
    }

    if config.iterations > 1 {
        let iterations = config.iterations as u128;
        println!("===============================================================================");
        println!("Average results over {} iterations:", config.iterations);
        println!("-------------------------------------------------------------------------------");
        println!("Average sieve time: {} us", total_sieve_time / iterations);
        println!("Average report time: {} us", total_report_time / iterations);
        println!("Total sieve time: {total_sieve_time} us");
        println!("Total report time: {total_report_time} us");
        println!("===============================================================================");
    }

    Ok(())
}
