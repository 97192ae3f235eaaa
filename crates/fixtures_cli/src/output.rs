use colored::*;
use fixtures_assert::MatchReport;
use serde_json::json;

pub fn print_match_report(report: &MatchReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &MatchReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  COMPARISON REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Data sets MATCH".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Data sets DIFFER".red().bold()
        );
    }

    if !report.failures.is_empty() {
        println!("\n{}", "Differences:".red().bold());
        for (i, failure) in report.failures.iter().enumerate() {
            println!("  {}. {}", i + 1, failure.to_string().red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Expected tables: {}", report.stats.expected_tables);
    println!("  Actual tables:   {}", report.stats.actual_tables);
    println!("  Tables compared: {}", report.stats.tables_compared);
    println!("  Rows compared:   {}", report.stats.rows_compared);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &MatchReport) {
    let output = json!({
        "passed": report.passed,
        "failures": report.failures.iter().map(|f| json!({
            "table": f.table(),
            "message": f.to_string(),
        })).collect::<Vec<_>>(),
        "summary": {
            "expected_tables": report.stats.expected_tables,
            "actual_tables": report.stats.actual_tables,
            "tables_compared": report.stats.tables_compared,
            "rows_compared": report.stats.rows_compared,
            "duration_ms": report.stats.duration_ms,
        }
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to serialize report: {}", e)),
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
