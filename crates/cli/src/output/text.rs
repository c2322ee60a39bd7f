use colored::Colorize;
use request_detect::report::{BatchReport, Classification};

fn set_color(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}

fn mark(matched: bool) -> colored::ColoredString {
    if matched {
        "✓".green().bold()
    } else {
        "✗".dimmed()
    }
}

pub fn print_single(name: &str, matched: bool, no_color: bool) {
    set_color(no_color);
    println!("  {} {}", mark(matched), name);
}

pub fn print_classification(classification: &Classification, detectors: &[&str], no_color: bool) {
    set_color(no_color);

    for name in detectors {
        println!("  {} {}", mark(classification.is(name)), name);
    }

    if classification.matched.is_empty() {
        println!("\n  No detector matched.");
    } else {
        println!("\n  Matched: {}", classification.matched.join(", ").bold());
    }
}

pub fn print_batch(report: &BatchReport, no_color: bool) {
    set_color(no_color);

    println!();
    println!("{}", "  request-detect - Batch Classification".bold());
    println!("  Requests: {}", report.total_requests);
    println!();

    for failure in &report.failures {
        println!(
            "  [{}] request #{}: {}",
            "ERROR".red().bold(),
            failure.index,
            failure.error
        );
    }
    if !report.failures.is_empty() {
        println!();
    }

    println!("{}", "  Summary".bold().underline());
    for (name, count) in &report.matches_by_detector {
        println!("    {:<20} {}", name, count);
    }
    println!("    {:<20} {}", "Any match", report.matched_requests);
    println!("    {:<20} {}", "Classified", report.classified_requests);
    println!("    {:<20} {}", "Failed", report.failures.len());
    println!();
}
