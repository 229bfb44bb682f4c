//! Console rendering of an integrity report.

use rehearse_core::{Catalog, IntegrityReport};

/// How many leading characters of a question identify it in listings.
const PREVIEW_LEN: usize = 50;

pub fn print_report(report: &IntegrityReport, catalog: &Catalog, top: usize) {
    if !report.errors.is_empty() {
        println!("ERRORS:");
        for error in &report.errors {
            println!("  - {error}");
        }
        println!();
    }
    if !report.warnings.is_empty() {
        println!("WARNINGS:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
        println!();
    }

    if report.is_valid() {
        println!("dataset is valid");
    } else {
        println!("dataset has {} error(s)", report.errors.len());
    }

    let stats = &report.stats;
    println!();
    println!("STATISTICS:");
    println!("  {} unique questions", stats.question_count);
    println!("  {} themes", stats.theme_count);
    println!("  {} total references", stats.reference_count);
    println!("  {} shared references", stats.shared_count);

    if !stats.per_theme.is_empty() {
        println!();
        println!("QUESTIONS PER THEME:");
        for theme in &stats.per_theme {
            println!("  {:>3}  {}", theme.count, theme.name);
        }
    }

    let shared: Vec<_> = stats
        .most_referenced
        .iter()
        .filter(|entry| entry.count > 1)
        .take(top)
        .collect();
    if !shared.is_empty() {
        println!();
        println!("MOST SHARED QUESTIONS:");
        for entry in shared {
            let preview = catalog
                .question(&entry.id)
                .map(|question| preview(question.prompt()))
                .unwrap_or_default();
            println!("  referenced {} times - {}: {}", entry.count, entry.id, preview);
        }
    }
}

fn preview(text: &str) -> String {
    let mut shortened: String = text.chars().take(PREVIEW_LEN).collect();
    if text.chars().count() > PREVIEW_LEN {
        shortened.push_str("...");
    }
    shortened
}
