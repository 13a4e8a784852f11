//! Check command implementation.
//!
//! Lexes each input and reports every error token as a diagnostic with a
//! snippet of the offending line.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dfalex_lex::{locate, report_errors_in};
use dfalex_util::{Diagnostic, Handler, SourceFile};
use tracing::{debug, warn};

use crate::commands::common::{
    build_pool, error_messages, for_each_input, lex_file, validate_inputs,
};
use crate::commands::traits::{Command, RunSummary};
use crate::config::Config;
use crate::error::{LextError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Inputs to check; `-` is standard input.
    pub files: Vec<PathBuf>,
    /// Stop printing after this many diagnostics.
    pub max_errors: Option<usize>,
    /// Number of parallel jobs, overriding the configuration.
    pub jobs: Option<usize>,
}

/// Diagnostics found in one input.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Display name of the input.
    pub name: String,
    /// One diagnostic per error token, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Lex one input and diagnose its error tokens.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let lexed = lex_file(path)?;
    let source = SourceFile::new(lexed.name.as_str(), lexed.source());
    let handler = Handler::new();
    let found = report_errors_in(&source, &locate(&lexed.tokens), &handler);
    debug!(file = %lexed.name, errors = found, "checked");
    Ok(FileReport {
        name: lexed.name,
        diagnostics: handler.take(),
    })
}

/// Check command handler.
#[derive(Debug)]
pub struct CheckCommand {
    files: Vec<PathBuf>,
    verbose: bool,
    deny_errors: bool,
    max_errors: Option<usize>,
    jobs: usize,
}

impl CheckCommand {
    /// Render the reports, honouring the diagnostic limit.
    ///
    /// Returns the total number of diagnostics, printed or not.
    pub fn write_reports<W: Write>(&self, reports: &[FileReport], out: &mut W) -> Result<usize> {
        let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
        let limit = self.max_errors.unwrap_or(usize::MAX);

        let all = reports
            .iter()
            .flat_map(|r| r.diagnostics.iter().map(move |d| (r.name.as_str(), d)));
        for (name, diagnostic) in all.take(limit) {
            writeln!(out, "{}\n", diagnostic.render(Some(name)))?;
        }
        if total > limit {
            writeln!(out, "... and {} more", total - limit)?;
        }

        if total == 0 {
            writeln!(out, "No lexical errors in {} file(s)", reports.len())?;
        } else {
            writeln!(
                out,
                "{} lexical error(s) in {} file(s)",
                total,
                reports.iter().filter(|r| !r.diagnostics.is_empty()).count()
            )?;
        }
        Ok(total)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = RunSummary;

    fn new(args: Self::Args, config: &Config) -> Result<Self> {
        Ok(Self {
            verbose: args.verbose || config.verbose,
            deny_errors: config.check.deny_errors,
            max_errors: args.max_errors.or(config.check.max_errors),
            jobs: args.jobs.unwrap_or(config.jobs),
            files: args.files,
        })
    }

    fn execute(&self) -> Result<RunSummary> {
        validate_inputs(&self.files)?;
        let pool = build_pool(self.jobs)?;
        debug!(command = Self::name(), files = self.files.len(), jobs = self.jobs, "starting");

        let mut summary = RunSummary::default();
        let mut reports = Vec::with_capacity(self.files.len());
        for result in for_each_input(&pool, &self.files, check_file) {
            match result {
                Ok(report) => {
                    summary.files_processed += 1;
                    reports.push(report);
                }
                Err(e) => {
                    warn!("{}", e);
                    summary.files_failed += 1;
                }
            }
        }

        let stderr = io::stderr();
        let mut out = stderr.lock();
        summary.lexical_errors = self.write_reports(&reports, &mut out)?;
        out.flush()?;

        if self.verbose {
            eprintln!("Checked {} file(s)", summary.files_processed);
        }
        if !summary.all_read() {
            return Err(LextError::CommandExecution(format!(
                "{} {}",
                summary.files_failed,
                error_messages::FILES_FAILED
            )));
        }
        if self.deny_errors && summary.lexical_errors > 0 {
            return Err(LextError::CommandExecution(format!(
                "{} {}",
                summary.lexical_errors,
                error_messages::LEXICAL_ERRORS
            )));
        }
        Ok(summary)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<RunSummary> {
    CheckCommand::new(args, config)?.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn source_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    fn command(args: CheckArgs, config: &Config) -> CheckCommand {
        CheckCommand::new(args, config).unwrap()
    }

    #[test]
    fn test_check_file_finds_errors() {
        let file = source_file("int x = 08;\nchar c = '';\n");
        let report = check_file(file.path()).unwrap();
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.diagnostics[0].span.line, 1);
        assert_eq!(report.diagnostics[1].span.line, 2);
    }

    #[test]
    fn test_write_reports_renders_snippets() {
        let file = source_file("a # b\n");
        let report = check_file(file.path()).unwrap();
        let cmd = command(CheckArgs::default(), &Config::default());

        let mut out = Vec::new();
        let total = cmd.write_reports(&[report], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(total, 1);
        assert!(text.contains("error[E1001]: unexpected character: `#`"));
        assert!(text.contains("  1 | a # b"));
        assert!(text.contains("1 lexical error(s) in 1 file(s)"));
    }

    #[test]
    fn test_write_reports_respects_limit() {
        let file = source_file("# # #");
        let report = check_file(file.path()).unwrap();
        let cmd = command(
            CheckArgs {
                max_errors: Some(1),
                ..Default::default()
            },
            &Config::default(),
        );

        let mut out = Vec::new();
        assert_eq!(cmd.write_reports(&[report], &mut out).unwrap(), 3);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("error[E1001]").count(), 1);
        assert!(text.contains("... and 2 more"));
    }

    #[test]
    fn test_clean_file_passes() {
        let file = source_file("class A {}\n");
        let cmd = command(
            CheckArgs {
                files: vec![file.path().to_path_buf()],
                jobs: Some(1),
                ..Default::default()
            },
            &Config::default(),
        );
        let summary = cmd.execute().unwrap();
        assert_eq!(summary.files_processed, 1);
        assert_eq!(summary.lexical_errors, 0);
    }

    #[test]
    fn test_errors_fail_unless_allowed() {
        let file = source_file("x = @;\n");
        let args = CheckArgs {
            files: vec![file.path().to_path_buf()],
            jobs: Some(1),
            ..Default::default()
        };

        let denied = command(args.clone(), &Config::default()).execute();
        assert!(matches!(denied, Err(LextError::CommandExecution(_))));

        let mut config = Config::default();
        config.check.deny_errors = false;
        let allowed = command(args, &config).execute().unwrap();
        assert_eq!(allowed.lexical_errors, 1);
    }

    #[test]
    fn test_missing_file_fails() {
        let cmd = command(
            CheckArgs {
                files: vec![PathBuf::from("/nonexistent/A.java")],
                jobs: Some(1),
                ..Default::default()
            },
            &Config::default(),
        );
        assert!(matches!(cmd.execute(), Err(LextError::CommandExecution(_))));
    }
}
