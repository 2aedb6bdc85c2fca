use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use theme_doctor_color::{Rgb, WCAG_AA_NORMAL_TEXT, contrast_ratio};

use crate::adjust::suggest_adjustment;
use crate::audit::AuditSession;
use crate::error::{AuditError, Result};
use crate::report;
use crate::theme::CONSOLE_COLOR_KEYS;
use crate::util::{OutputIntegration, output_for};

#[derive(Debug, Parser)]
#[command(
    name = "theme_doctor",
    about = "WCAG AA contrast auditor for terminal color themes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Audit every theme JSON file in a directory and write reports.
    Audit(AuditArgs),

    /// Check one foreground/background pair against a requirement.
    Check(CheckArgs),

    /// Search for a foreground adjustment that meets a target ratio.
    Suggest(SuggestArgs),

    /// Print the fixed checklist and console-color keys.
    #[command(name = "list-checks")]
    ListChecks,
}

#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Directory containing theme JSON files.
    #[arg(long = "themes-dir", default_value = "themes")]
    pub themes_dir: PathBuf,

    /// Directory the report files are written into.
    #[arg(long = "reports-dir", default_value = "reports")]
    pub reports_dir: PathBuf,

    /// Print the summary only; write no report files.
    #[arg(long)]
    pub skip_reports: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Foreground color (6 hex digits, optional leading '#').
    pub foreground: String,

    /// Background color (6 hex digits, optional leading '#').
    pub background: String,

    /// Required contrast ratio.
    #[arg(long, default_value_t = WCAG_AA_NORMAL_TEXT)]
    pub requirement: f64,
}

#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Foreground color (6 hex digits, optional leading '#').
    pub foreground: String,

    /// Background color (6 hex digits, optional leading '#').
    pub background: String,

    /// Target contrast ratio the adjustment should reach.
    #[arg(long, default_value_t = WCAG_AA_NORMAL_TEXT)]
    pub target: f64,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Audit(args) => run_audit(args),
        Commands::Check(args) => run_check(args),
        Commands::Suggest(args) => run_suggest(args),
        Commands::ListChecks => {
            run_list_checks();
            Ok(())
        }
    }
}

pub fn run_audit(args: AuditArgs) -> Result<()> {
    let integration = OutputIntegration::detect();
    let ui = output_for(&integration);

    let session = AuditSession::run(&args.themes_dir)?;
    let summary = session.summary();

    if !integration.should_emit_json() {
        println!("{}", report::render_summary(&session));
    }

    if !args.skip_reports {
        let paths = report::write_reports(&session, &args.reports_dir)?;
        ui.info(&format!("detailed report: {}", paths.text.display()));
        ui.info(&format!("markdown report: {}", paths.markdown.display()));
        ui.info(&format!("json report: {}", paths.json.display()));
    }

    for error in &session.errors {
        ui.error(&format!("skipped {}: {}", error.source, error.message));
    }

    // Contrast failures are findings, not a processing error; only a broken
    // run makes the exit code non-zero.
    if summary.failing > 0 {
        ui.warning(&format!(
            "{} theme(s) failed WCAG AA compliance",
            summary.failing
        ));
    } else {
        ui.success("all themes passed WCAG AA compliance");
    }

    if integration.should_emit_json() {
        println!(
            "{}",
            serde_json::json!({
                "command": "audit",
                "status": "ok",
                "summary": summary,
                "errors": session.errors,
                "reports_dir": (!args.skip_reports).then(|| args.reports_dir.display().to_string()),
                "integration": integration,
            })
        );
    }

    Ok(())
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let integration = OutputIntegration::detect();

    let foreground = Rgb::parse_hex(&args.foreground)?;
    let background = Rgb::parse_hex(&args.background)?;
    let ratio = contrast_ratio(foreground, background);
    let passes = ratio >= args.requirement;
    let suggestion = if passes {
        None
    } else {
        suggest_adjustment(foreground, background, args.requirement)
    };

    if integration.should_emit_json() {
        println!(
            "{}",
            serde_json::json!({
                "command": "check",
                "foreground": foreground,
                "background": background,
                "ratio": ratio,
                "requirement": args.requirement,
                "passes": passes,
                "suggestion": suggestion,
                "integration": integration,
            })
        );
    } else {
        println!(
            "{foreground} on {background}: {ratio:.2}:1 (required: {:.1}:1) {}",
            args.requirement,
            if passes { "PASS" } else { "FAIL" }
        );
        match &suggestion {
            Some(suggestion) => println!(
                "Suggested fix: {} {foreground} → {} ({:.2}:1)",
                suggestion.direction.as_str(),
                suggestion.color,
                suggestion.ratio
            ),
            None if !passes => {
                println!("No foreground adjustment improves this pair.");
            }
            None => {}
        }
    }

    if passes {
        Ok(())
    } else {
        Err(AuditError::exit(1, "contrast requirement not met"))
    }
}

pub fn run_suggest(args: SuggestArgs) -> Result<()> {
    let integration = OutputIntegration::detect();

    let foreground = Rgb::parse_hex(&args.foreground)?;
    let background = Rgb::parse_hex(&args.background)?;
    let suggestion = suggest_adjustment(foreground, background, args.target);

    if integration.should_emit_json() {
        println!(
            "{}",
            serde_json::json!({
                "command": "suggest",
                "foreground": foreground,
                "background": background,
                "target": args.target,
                "suggestion": suggestion,
                "integration": integration,
            })
        );
        return Ok(());
    }

    match suggestion {
        Some(suggestion) => {
            println!(
                "{} {foreground} → {} ({:.2}:1, target {:.1}:1)",
                suggestion.direction.as_str(),
                suggestion.color,
                suggestion.ratio,
                args.target
            );
            if suggestion.ratio < args.target {
                println!("Best improvement found still misses the target.");
            }
        }
        None => {
            let ratio = contrast_ratio(foreground, background);
            if ratio >= args.target {
                println!("Pair already meets the target ({ratio:.2}:1).");
            } else {
                println!("No foreground adjustment improves this pair.");
            }
        }
    }

    Ok(())
}

fn run_list_checks() {
    println!("Fixed checks:");
    println!("  Primary text (foreground on background)      4.5:1  Primary");
    println!("  Cursor visibility (cursor on background)     3.0:1  UI Component");
    println!("  Selection visibility (foreground on selection) 4.5:1  Primary");
    println!();
    println!("Console colors (4.5:1, checked when present):");
    for key in CONSOLE_COLOR_KEYS {
        println!("  {key}");
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::error::AuditError;

    use super::{CheckArgs, Cli, Commands, run, run_check};

    #[test]
    fn check_arguments_default_to_normal_text_requirement() {
        let cli = Cli::try_parse_from(["theme_doctor", "check", "#000000", "#ffffff"])
            .expect("valid arguments");
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.foreground, "#000000");
                assert!((args.requirement - 4.5).abs() < f64::EPSILON);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn audit_arguments_have_directory_defaults() {
        let cli = Cli::try_parse_from(["theme_doctor", "audit"]).expect("valid arguments");
        match cli.command {
            Commands::Audit(args) => {
                assert_eq!(args.themes_dir, std::path::PathBuf::from("themes"));
                assert_eq!(args.reports_dir, std::path::PathBuf::from("reports"));
                assert!(!args.skip_reports);
            }
            other => panic!("expected audit command, got {other:?}"),
        }
    }

    #[test]
    fn passing_check_exits_cleanly() {
        let result = run_check(CheckArgs {
            foreground: "#ffffff".to_string(),
            background: "#000000".to_string(),
            requirement: 4.5,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn failing_check_exits_with_code_one() {
        let error = run_check(CheckArgs {
            foreground: "#fefefe".to_string(),
            background: "#ffffff".to_string(),
            requirement: 4.5,
        })
        .expect_err("low contrast should fail");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn malformed_color_is_rejected_before_any_math() {
        let error = run_check(CheckArgs {
            foreground: "#nothex".to_string(),
            background: "#ffffff".to_string(),
            requirement: 4.5,
        })
        .expect_err("malformed color should fail");
        assert!(matches!(error, AuditError::Color(_)));
    }

    #[test]
    fn list_checks_dispatches_successfully() {
        let result = run(Cli {
            command: Commands::ListChecks,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn missing_themes_directory_is_a_missing_path_error() {
        let cli = Cli::try_parse_from([
            "theme_doctor",
            "audit",
            "--themes-dir",
            "/tmp/theme_doctor/does-not-exist",
            "--skip-reports",
        ])
        .expect("valid arguments");

        match run(cli).expect_err("missing directory should fail") {
            AuditError::MissingPath { path } => {
                assert_eq!(path, std::path::PathBuf::from("/tmp/theme_doctor/does-not-exist"));
            }
            other => panic!("expected MissingPath, got {other}"),
        }
    }
}
