//! Display functions for command results

use super::formatters::with_thousands;
use crate::commands::{BenchmarkResult, SearchReport};
use colored::Colorize;

/// Print the result of a single search
pub fn print_search_report(report: &SearchReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Descrambling: {}",
        report.letters.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Some(rendered) = &report.rendered {
        println!("\n{}", "Matching Words:".bright_cyan().bold());
        print!("{rendered}");
    }

    let count = report.outcome.matches.len();
    let summary = format!("{} matches found.", with_thousands(count));
    println!();
    if count > 0 {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
    }
    println!(
        "   Guesses:          {}",
        with_thousands(report.outcome.guesses)
    );
}

/// Print the runtime line reported after a search
pub fn print_runtime(runtime: &str) {
    println!("   {}", runtime.bright_black());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let recovery_pct = if result.total_searches > 0 {
        result.recovered as f64 / result.total_searches as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Searches:         {}", with_thousands(result.total_searches));
    println!(
        "   Recovered:        {}",
        format!("{} ({recovery_pct:.1}%)", with_thousands(result.recovered))
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches).green()
    );
    println!("   Total guesses:    {}", with_thousands(result.total_guesses));
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);
}
