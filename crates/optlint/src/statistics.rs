use colored::Colorize;
use optlint_core::diagnostic::Diagnostic;
use std::collections::BTreeMap;

/// Print how many times each obsolete option was found, most frequent
/// first.
pub fn print_statistics(diagnostics: &[&Diagnostic]) {
    if diagnostics.is_empty() {
        println!("All checks passed!");
        return;
    }

    for (count, key) in count_by_option(diagnostics) {
        println!("{:>5} {}", count.to_string().bold(), key.bold().red());
    }
}

fn count_by_option<'a>(diagnostics: &[&'a Diagnostic]) -> Vec<(usize, &'a str)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &diagnostic in diagnostics {
        *counts.entry(diagnostic.option.legacy_key.as_str()).or_default() += 1;
    }

    let mut sorted: Vec<(usize, &str)> = counts.into_iter().map(|(key, n)| (n, key)).collect();
    // Stable sort: ties stay in alphabetical order.
    sorted.sort_by(|a, b| b.0.cmp(&a.0));
    sorted
}
