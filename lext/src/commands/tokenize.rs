//! Tokenize command implementation.
//!
//! Prints the token sequence of each input, as text lines or JSON.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use dfalex_lex::{locate, SpannedToken, TokenKind};
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::common::{
    build_pool, error_messages, for_each_input, lex_file, validate_inputs, LexedFile,
    OutputFormat,
};
use crate::commands::traits::{Command, RunSummary};
use crate::config::Config;
use crate::error::{LextError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Inputs to tokenize; `-` is standard input.
    pub files: Vec<PathBuf>,
    /// Output format name, overriding the configuration.
    pub format: Option<String>,
    /// Leave out whitespace and comments.
    pub no_trivia: bool,
    /// Prefix each token with its position.
    pub spans: bool,
    /// Number of parallel jobs, overriding the configuration.
    pub jobs: Option<usize>,
}

/// Tokenize command handler.
#[derive(Debug)]
pub struct TokenizeCommand {
    files: Vec<PathBuf>,
    verbose: bool,
    format: OutputFormat,
    trivia: bool,
    spans: bool,
    jobs: usize,
}

/// One token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<SpanRecord>,
}

#[derive(Debug, Serialize)]
struct SpanRecord {
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

/// JSON output for one of several inputs.
#[derive(Debug, Serialize)]
struct FileRecord<'a> {
    file: &'a str,
    tokens: Vec<TokenRecord<'a>>,
}

impl TokenizeCommand {
    /// Write the tokens of one input.
    ///
    /// With `header` set, the output names the input: a `==> name <==` line
    /// for text, a `{"file", "tokens"}` object for JSON.
    pub fn write_file<W: Write>(&self, file: &LexedFile, header: bool, out: &mut W) -> Result<()> {
        let located = locate(&file.tokens);
        let shown = located
            .iter()
            .filter(|spanned| self.trivia || !spanned.token.is_trivia());

        match self.format {
            OutputFormat::Text => {
                if header {
                    writeln!(out, "==> {} <==", file.name)?;
                }
                for spanned in shown {
                    if self.spans {
                        writeln!(
                            out,
                            "{}:{} {}",
                            spanned.span.line, spanned.span.column, spanned.token
                        )?;
                    } else {
                        writeln!(out, "{}", spanned.token)?;
                    }
                }
            }
            OutputFormat::Json => {
                let tokens: Vec<_> = shown.map(|spanned| self.record(spanned)).collect();
                if header {
                    let record = FileRecord {
                        file: &file.name,
                        tokens,
                    };
                    serde_json::to_writer(&mut *out, &record)?;
                } else {
                    serde_json::to_writer(&mut *out, &tokens)?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn record<'a>(&self, spanned: &'a SpannedToken) -> TokenRecord<'a> {
        TokenRecord {
            kind: spanned.token.kind(),
            text: spanned.token.text(),
            span: self.spans.then(|| SpanRecord {
                start: spanned.span.start,
                end: spanned.span.end,
                line: spanned.span.line,
                column: spanned.span.column,
            }),
        }
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = RunSummary;

    fn new(args: Self::Args, config: &Config) -> Result<Self> {
        let format: OutputFormat = args
            .format
            .as_deref()
            .unwrap_or(config.output.format.as_str())
            .parse()?;
        Ok(Self {
            verbose: args.verbose || config.verbose,
            format,
            trivia: config.output.trivia && !args.no_trivia,
            spans: config.output.spans || args.spans,
            jobs: args.jobs.unwrap_or(config.jobs),
            files: args.files,
        })
    }

    fn execute(&self) -> Result<RunSummary> {
        validate_inputs(&self.files)?;
        let pool = build_pool(self.jobs)?;
        debug!(
            command = Self::name(),
            files = self.files.len(),
            jobs = self.jobs,
            format = %self.format,
            "starting"
        );

        let results = for_each_input(&pool, &self.files, lex_file);
        let header = self.files.len() > 1;
        let mut summary = RunSummary::default();

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for result in results {
            match result {
                Ok(file) => {
                    self.write_file(&file, header, &mut out)?;
                    summary.files_processed += 1;
                    summary.lexical_errors += file.tokens.iter().filter(|t| t.is_error()).count();
                }
                Err(e) => {
                    warn!("{}", e);
                    summary.files_failed += 1;
                }
            }
        }
        out.flush()?;

        if self.verbose {
            eprintln!(
                "Tokenized {} file(s), {} lexical error(s)",
                summary.files_processed, summary.lexical_errors
            );
        }
        if !summary.all_read() {
            return Err(LextError::CommandExecution(format!(
                "{} {}",
                summary.files_failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(summary)
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs, config: &Config) -> Result<RunSummary> {
    TokenizeCommand::new(args, config)?.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfalex_lex::tokenize;

    fn command(args: TokenizeArgs) -> TokenizeCommand {
        TokenizeCommand::new(args, &Config::default()).unwrap()
    }

    fn render(command: &TokenizeCommand, source: &str, header: bool) -> String {
        let file = LexedFile {
            name: "A.java".to_string(),
            tokens: tokenize(source),
        };
        let mut out = Vec::new();
        command.write_file(&file, header, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let cmd = command(TokenizeArgs::default());
        assert_eq!(
            render(&cmd, "x = 1", false),
            "IDENTIFIER \"x\"\nWHITESPACE \" \"\nOPERATOR \"=\"\nWHITESPACE \" \"\nINT_LITERAL \"1\"\n"
        );
    }

    #[test]
    fn test_text_output_with_spans_without_trivia() {
        let cmd = command(TokenizeArgs {
            no_trivia: true,
            spans: true,
            ..Default::default()
        });
        assert_eq!(
            render(&cmd, "a\n b", true),
            "==> A.java <==\n1:1 IDENTIFIER \"a\"\n2:2 IDENTIFIER \"b\"\n"
        );
    }

    #[test]
    fn test_json_output() {
        let cmd = command(TokenizeArgs {
            format: Some("json".to_string()),
            no_trivia: true,
            ..Default::default()
        });
        assert_eq!(
            render(&cmd, "int x;", false),
            "[{\"kind\":\"KEYWORD\",\"text\":\"int\"},{\"kind\":\"IDENTIFIER\",\"text\":\"x\"},{\"kind\":\"SEPARATOR\",\"text\":\";\"}]\n"
        );
    }

    #[test]
    fn test_json_output_with_header_and_spans() {
        let cmd = command(TokenizeArgs {
            format: Some("json".to_string()),
            spans: true,
            ..Default::default()
        });
        let value: serde_json::Value =
            serde_json::from_str(&render(&cmd, "é", true)).unwrap();
        assert_eq!(value["file"], "A.java");
        assert_eq!(value["tokens"][0]["kind"], "IDENTIFIER");
        assert_eq!(value["tokens"][0]["span"]["end"], 2);
        assert_eq!(value["tokens"][0]["span"]["column"], 1);
    }

    #[test]
    fn test_arguments_override_config() {
        let mut config = Config::default();
        config.output.format = "json".to_string();
        config.jobs = 3;
        let cmd = TokenizeCommand::new(
            TokenizeArgs {
                format: Some("text".to_string()),
                ..Default::default()
            },
            &config,
        )
        .unwrap();
        assert_eq!(cmd.format, OutputFormat::Text);
        assert_eq!(cmd.jobs, 3);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = TokenizeCommand::new(
            TokenizeArgs {
                format: Some("xml".to_string()),
                ..Default::default()
            },
            &Config::default(),
        );
        assert!(matches!(result, Err(LextError::Validation(_))));
    }

    #[test]
    fn test_no_inputs_rejected() {
        let result = command(TokenizeArgs::default()).execute();
        assert!(matches!(result, Err(LextError::Validation(_))));
    }
}
