use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use html_retrofit::{apply_files, check_files, mobile, patch, FileOutcome, FileReport, Rule};
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "html-retrofit")]
#[command(about = "Idempotent mobile-responsiveness retrofits for legacy HTML files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the retrofit rules to HTML files
    Apply {
        /// Files to process (defaults to the built-in page list)
        files: Vec<PathBuf>,

        /// Dry run - show what would be changed without modifying files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show unified diff of changes
        #[arg(short, long)]
        diff: bool,
    },

    /// Check which files would change, without applying
    Status {
        /// Files to check (defaults to the built-in page list)
        files: Vec<PathBuf>,
    },

    /// List the built-in retrofit rules
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            files,
            dry_run,
            diff,
        } => cmd_apply(files, dry_run, diff),

        Commands::Status { files } => cmd_status(files),

        Commands::Rules => cmd_rules(),
    }
}

/// Resolve the file list: explicit arguments win, otherwise the built-in
/// page list relative to the current working directory.
fn resolve_files(files: Vec<PathBuf>) -> Vec<PathBuf> {
    if files.is_empty() {
        mobile::DEFAULT_FILES.iter().map(PathBuf::from).collect()
    } else {
        files
    }
}

/// Show unified diff between original and patched content.
fn display_diff(file: &Path, original: &str, modified: &str) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (patched)", file.display()).dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
    println!();
}

fn report_line(report: &FileReport, dry_run: bool) {
    match &report.outcome {
        FileOutcome::Updated { events } => {
            if dry_run {
                println!(
                    "{} Would update {}",
                    "✓".green(),
                    report.path.display()
                );
            } else {
                println!("{} Updated {}", "✓".green(), report.path.display());
            }
            for event in events.iter().filter(|e| e.applied()) {
                println!("  {}", event);
            }
        }
        FileOutcome::Unchanged => {
            println!(
                "{} No changes needed for {}",
                "⊙".yellow(),
                report.path.display()
            );
        }
        FileOutcome::Missing => {
            println!(
                "{} File not found: {}",
                "⊘".cyan(),
                report.path.display()
            );
        }
    }
}

fn summarize(reports: &[FileReport]) {
    let updated = reports
        .iter()
        .filter(|r| matches!(r.outcome, FileOutcome::Updated { .. }))
        .count();
    let unchanged = reports
        .iter()
        .filter(|r| r.outcome == FileOutcome::Unchanged)
        .count();
    let missing = reports
        .iter()
        .filter(|r| r.outcome == FileOutcome::Missing)
        .count();

    println!();
    println!("{}", "Summary:".bold());
    println!("  {} updated", format!("{}", updated).green());
    println!("  {} unchanged", format!("{}", unchanged).yellow());
    println!("  {} missing", format!("{}", missing).cyan());
}

fn cmd_apply(files: Vec<PathBuf>, dry_run: bool, show_diff: bool) -> Result<()> {
    let files = resolve_files(files);
    let rules = mobile::retrofit_rules();
    rules.validate()?;

    if dry_run {
        println!("{}", "[DRY RUN - no files will be modified]".cyan());
    }

    // Capture content of existing targets up front so --diff can render even
    // after the files have been rewritten.
    let mut before = Vec::new();
    if show_diff {
        for path in &files {
            if path.exists() {
                if let Ok(content) = fs::read_to_string(path) {
                    before.push((path.clone(), content));
                }
            }
        }
    }

    let reports = if dry_run {
        check_files(&files, &rules)?
    } else {
        apply_files(&files, &rules)?
    };

    for report in &reports {
        report_line(report, dry_run);

        if show_diff {
            if let FileOutcome::Updated { .. } = report.outcome {
                if let Some((path, original)) = before.iter().find(|(p, _)| *p == report.path) {
                    let patched = patch::apply_rules(original, &rules);
                    display_diff(path, original, &patched.content);
                }
            }
        }
    }

    summarize(&reports);
    Ok(())
}

fn cmd_status(files: Vec<PathBuf>) -> Result<()> {
    let files = resolve_files(files);
    let rules = mobile::retrofit_rules();
    rules.validate()?;

    println!("{}", "Retrofit Status Report".bold());
    println!();

    let reports = check_files(&files, &rules)?;
    for report in &reports {
        report_line(report, true);
    }

    summarize(&reports);
    Ok(())
}

fn cmd_rules() -> Result<()> {
    let rules = mobile::retrofit_rules();

    println!("{}", "Built-in retrofit rules (in order):".bold());
    for rule in &rules {
        match rule {
            Rule::InsertLineAfter {
                label,
                guard,
                line,
                ..
            } => {
                println!("  {} ({})", label.bold(), "insert-line-after".dimmed());
                println!("    guard:  {}", guard);
                println!("    insert: {}", line);
            }
            Rule::ReplaceAll {
                label,
                search,
                replace,
            } => {
                println!("  {} ({})", label.bold(), "replace-all".dimmed());
                println!("    search:  {}", search);
                println!("    replace: {}", replace);
            }
        }
    }

    println!();
    println!("{} rules", rules.len());
    Ok(())
}
