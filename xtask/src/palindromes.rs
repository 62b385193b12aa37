//! Palindrome counting over a text file
//!
//! This module provides the `palindromes` subcommand. It is the text source
//! and tokenizer for the library: it reads a file, splits it on Unicode
//! whitespace and hands the words to `PalindromeFinder`.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use sparsedeque::palindrome::{
    CaseFolding, NormalizationPolicy, PalindromeCounts, PalindromeFinder, RetainedCharacters,
};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the palindromes subcommand
#[derive(Args, Debug)]
pub struct PalindromesArgs {
    /// Text file to scan (required)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Normalization policy YAML file
    #[arg(long, short = 'p')]
    pub policy: Option<PathBuf>,

    /// Override: keep letter case
    #[arg(long)]
    pub preserve_case: bool,

    /// Override: keep digits as well as letters
    #[arg(long)]
    pub keep_digits: bool,

    /// Only print the N most frequent palindromes
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    token: &'a str,
    count: usize,
}

pub fn run(args: PalindromesArgs) -> Result<()> {
    let file_policy = load_policy(args.policy.as_deref())?;
    let policy = resolve_policy(&args, file_policy);
    tracing::info!(?policy, input = %args.input.display(), "scanning for palindromes");

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let counts = PalindromeFinder::new(policy).find(text.split_whitespace());
    tracing::info!(
        distinct = counts.len(),
        total = counts.total(),
        "palindrome scan complete"
    );

    let output = render(&counts, args.top, args.format)?;
    print!("{output}");
    Ok(())
}

/// Load the normalization policy from YAML, or the default when no file is given
fn load_policy(path: Option<&Path>) -> Result<NormalizationPolicy> {
    let Some(path) = path else {
        return Ok(NormalizationPolicy::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy file: {}", path.display()))?;
    let policy = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse policy file: {}", path.display()))?;
    Ok(policy)
}

// Priority: CLI flag > policy file > default
fn resolve_policy(args: &PalindromesArgs, file_policy: NormalizationPolicy) -> NormalizationPolicy {
    let mut policy = file_policy;
    if args.preserve_case {
        policy = policy.with_case_folding(CaseFolding::Preserve);
    }
    if args.keep_digits {
        policy = policy.with_retained(RetainedCharacters::Alphanumeric);
    }
    policy
}

fn render(counts: &PalindromeCounts, top: Option<usize>, format: OutputFormat) -> Result<String> {
    let entries: Vec<(&str, usize)> = match top {
        Some(limit) => counts.most_common(limit),
        None => counts.iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (token, count) in entries {
                writeln!(output, "{token}\t{count}")?;
            }
            Ok(output)
        }
        OutputFormat::Json => {
            let json: Vec<JsonEntry<'_>> = entries
                .into_iter()
                .map(|(token, count)| JsonEntry { token, count })
                .collect();
            let mut output =
                serde_json::to_string_pretty(&json).context("Failed to serialize counts")?;
            output.push('\n');
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn args_with(preserve_case: bool, keep_digits: bool) -> PalindromesArgs {
        PalindromesArgs {
            input: PathBuf::from("unused.txt"),
            policy: None,
            preserve_case,
            keep_digits,
            top: None,
            format: OutputFormat::Text,
        }
    }

    #[rstest]
    fn test_load_policy_defaults_without_file() {
        let policy = load_policy(None).unwrap();
        assert_eq!(policy, NormalizationPolicy::default());
    }

    #[rstest]
    fn test_load_policy_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "case_folding: preserve\nretain: alphanumeric").unwrap();

        let policy = load_policy(Some(file.path())).unwrap();
        assert_eq!(
            policy,
            NormalizationPolicy::new(CaseFolding::Preserve, RetainedCharacters::Alphanumeric)
        );
    }

    #[rstest]
    fn test_load_policy_missing_file_reports_path() {
        let error = load_policy(Some(Path::new("/nonexistent/policy.yaml"))).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/policy.yaml"));
    }

    #[rstest]
    fn test_load_policy_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "case_folding: sideways").unwrap();
        assert!(load_policy(Some(file.path())).is_err());
    }

    #[rstest]
    #[case(false, false, NormalizationPolicy::default())]
    #[case(
        true,
        false,
        NormalizationPolicy::new(CaseFolding::Preserve, RetainedCharacters::Alphabetic)
    )]
    #[case(
        false,
        true,
        NormalizationPolicy::new(CaseFolding::Lowercase, RetainedCharacters::Alphanumeric)
    )]
    fn test_cli_flags_override_policy(
        #[case] preserve_case: bool,
        #[case] keep_digits: bool,
        #[case] expected: NormalizationPolicy,
    ) {
        let policy = resolve_policy(
            &args_with(preserve_case, keep_digits),
            NormalizationPolicy::default(),
        );
        assert_eq!(policy, expected);
    }

    #[rstest]
    fn test_render_text_in_first_seen_order() {
        let counts = PalindromeFinder::default().find("noon a noon".split_whitespace());
        let output = render(&counts, None, OutputFormat::Text).unwrap();
        assert_eq!(output, "noon\t2\na\t1\n");
    }

    #[rstest]
    fn test_render_top_limits_output() {
        let counts = PalindromeFinder::default().find("a bb bb ccc".split_whitespace());
        let output = render(&counts, Some(1), OutputFormat::Text).unwrap();
        assert_eq!(output, "bb\t2\n");
    }

    #[rstest]
    fn test_render_json() {
        let counts = PalindromeFinder::default().find(["Wow"]);
        let output = render(&counts, None, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, serde_json::json!([{ "token": "wow", "count": 1 }]));
    }

    #[rstest]
    fn test_run_missing_input_fails_with_context() {
        let mut args = args_with(false, false);
        args.input = PathBuf::from("/nonexistent/book.txt");
        let error = run(args).unwrap_err();
        assert!(format!("{error:#}").contains("Failed to read input file"));
    }
}
