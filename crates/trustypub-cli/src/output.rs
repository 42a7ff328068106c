//! Output formatting utilities.

use trustypub_core::ValidationReport;

/// Prints a verification report as a small table.
pub fn print_report(file: &str, report: &ValidationReport) {
    println!("{:<14} {}", "FILE", file);
    println!(
        "{:<14} {}",
        "IDENTITY",
        report
            .trusty
            .as_ref()
            .map(|t| t.as_str().to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("{:<14} {}", "INTEGRITY", yes_no(report.integrity));
    println!("{:<14} {}", "SIGNED", yes_no(report.signed));
    println!(
        "{:<14} {}",
        "AUTHENTICITY",
        match report.authenticity {
            Some(ok) => yes_no(ok),
            None => "-",
        }
    );
    for message in &report.messages {
        println!("  note: {}", message);
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
