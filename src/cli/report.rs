//! Report formatting and printing utilities.
//!
//! Separate from the command logic so commands can be used as a library
//! without printing side effects.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthChar;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, ExportSummary, ImportSummary, InitSummary,
};
use crate::task::TranslationTask;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Display width of msgids in issue details.
const MSGID_DISPLAY_WIDTH: usize = 60;

/// Display width of msgids in export examples.
const EXAMPLE_DISPLAY_WIDTH: usize = 80;

/// Number of example entries shown after an export.
const MAX_EXAMPLES: usize = 3;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Import(summary) => print_import(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Checking translations in {}/",
        summary.locale_base.display()
    );
    let _ = writeln!(
        writer,
        "Loaded {} technical exclusions\n",
        summary.exclusions_loaded
    );

    for locale in &summary.locales {
        if locale.is_clean() {
            let detail = if verbose {
                format!("OK ({} entries)", locale.entries_checked)
            } else {
                "OK".to_string()
            };
            let _ = writeln!(writer, "  {:8}: {}", locale.locale, detail.green());
            continue;
        }

        let _ = writeln!(
            writer,
            "  {:8}: {} empty, {} untranslated (msgstr=msgid)",
            locale.locale,
            locale.empty_count().to_string().red(),
            locale.untranslated_count().to_string().red()
        );
        if verbose {
            for issue in &locale.issues {
                let _ = writeln!(
                    writer,
                    "           [{}] {}",
                    issue.rule.to_string().cyan(),
                    issue.location().unwrap_or("unknown")
                );
                let _ = writeln!(
                    writer,
                    "             \"{}\"  {}",
                    truncate(&issue.msgid, MSGID_DISPLAY_WIDTH),
                    issue.description().dimmed()
                );
            }
        }
    }

    let total = summary.total_issues();
    let _ = writeln!(
        writer,
        "\nSummary: {} locales, {} clean, {} total issues",
        summary.locales.len(),
        summary.clean_locales(),
        total
    );

    if total > 0 {
        let _ = writeln!(
            writer,
            "\n{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} incomplete {}",
                total,
                if total == 1 { "translation" } else { "translations" }
            )
            .red()
        );
        if !verbose {
            let _ = writeln!(
                writer,
                "Run with {} for details on each issue.",
                "--verbose".cyan()
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            "All translations are complete.".green()
        );
    }
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    let file = &summary.file;

    let _ = writeln!(writer, "Parsed {}", summary.catalog_path.display());
    if summary.exclusions_loaded > 0 {
        let _ = writeln!(
            writer,
            "Loaded {} technical exclusions",
            summary.exclusions_loaded
        );
    }

    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        "Extraction complete!".green()
    );
    if summary.limited && file.total_untranslated > file.untranslated_count {
        let _ = writeln!(
            writer,
            "- Untranslated entries: {} (limited from {})",
            file.untranslated_count, file.total_untranslated
        );
    } else {
        let _ = writeln!(
            writer,
            "- Untranslated entries: {}",
            file.untranslated_count
        );
    }
    if summary.limited && file.total_fuzzy > file.fuzzy_count {
        let _ = writeln!(
            writer,
            "- Fuzzy entries: {} (limited from {})",
            file.fuzzy_count, file.total_fuzzy
        );
    } else {
        let _ = writeln!(writer, "- Fuzzy entries: {}", file.fuzzy_count);
    }
    if file.excluded_count > 0 {
        let _ = writeln!(
            writer,
            "- Excluded technical terms: {}",
            file.excluded_count
        );
    }
    let _ = writeln!(
        writer,
        "- Output saved to: {}",
        summary.output_path.display().to_string().cyan()
    );

    if !file.entries.is_empty() {
        let _ = writeln!(writer, "\nExample untranslated entries:");
        for (i, task) in file.entries.iter().take(MAX_EXAMPLES).enumerate() {
            print_example(i + 1, task, writer);
        }
    }
}

fn print_example<W: Write>(number: usize, task: &TranslationTask, writer: &mut W) {
    let location = task
        .locations
        .first()
        .map(String::as_str)
        .unwrap_or("No location");
    let _ = writeln!(writer, "\n{}. {}", number, location.blue());
    let _ = writeln!(
        writer,
        "   msgid: {}",
        truncate(&task.msgid, EXAMPLE_DISPLAY_WIDTH)
    );
}

fn print_import<W: Write>(summary: &ImportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Loaded translations from {}",
        summary.task_file.display()
    );

    let Some(backup) = &summary.backup_path else {
        let _ = writeln!(
            writer,
            "\n{} {} in {}:",
            "Would update".yellow().bold(),
            summary.catalog_path.display(),
            "dry run".dimmed()
        );
        print_update_counts(summary, writer);
        let _ = writeln!(
            writer,
            "Run without {} to write the catalog.",
            "--dry-run".cyan()
        );
        return;
    };

    let _ = writeln!(writer, "Created backup: {}", backup.display());
    let _ = writeln!(
        writer,
        "\n{} {}",
        SUCCESS_MARK.green(),
        format!("Updated {}", summary.catalog_path.display()).green()
    );
    print_update_counts(summary, writer);

    let mo_path = summary.catalog_path.with_extension("mo");
    let _ = writeln!(writer, "\nDon't forget to compile the catalog:");
    let _ = writeln!(
        writer,
        "  msgfmt {} -o {}",
        summary.catalog_path.display(),
        mo_path.display()
    );
}

fn print_update_counts<W: Write>(summary: &ImportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "- Translations updated: {}",
        summary.stats.updated
    );
    let _ = writeln!(
        writer,
        "- Fuzzy flags cleared: {}",
        summary.stats.fuzzy_cleared
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

/// Shorten `text` to `max_width` display columns, on a single line.
fn truncate(text: &str, max_width: usize) -> String {
    let single_line = text.replace('\n', "\\n");
    let mut width = 0;
    let mut out = String::new();
    for c in single_line.chars() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            out.push_str("...");
            return out;
        }
        out.push(c);
    }
    out
}
