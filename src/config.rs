use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::domain::error::ConfigError;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [10, 50, 200];
pub const DEFAULT_EXPORT_FILE_NAME: &str = "table_data.csv";
pub const DEFAULT_DELIMITER: u8 = b',';

/// What to do with a row whose cell count differs from the header count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowWidthPolicy {
    #[default]
    Reject,
    /// Keep the row: missing cells never match a column filter and sort
    /// below every present value.
    Tolerate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Allowed page sizes; the first entry is the default.
    pub page_size_options: Vec<usize>,
    pub row_width: RowWidthPolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            row_width: RowWidthPolicy::default(),
        }
    }
}

impl EngineOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        let mut seen = BTreeSet::new();
        for &size in &self.page_size_options {
            if size == 0 {
                return Err(ConfigError::ZeroPageSize);
            }
            if !seen.insert(size) {
                return Err(ConfigError::DuplicatePageSize(size));
            }
        }
        Ok(())
    }

    pub fn default_page_size(&self) -> Option<usize> {
        self.page_size_options.first().copied()
    }
}

/// Arguments of the `table-engine` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub global_filter: Option<String>,
    pub column_filters: Vec<(String, String)>,
    /// One entry per header click, applied in order.
    pub sort_clicks: Vec<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub export: Option<PathBuf>,
    pub delimiter: Option<u8>,
    pub verbose: bool,
}

pub const USAGE: &str = "usage: table-engine <file> [--filter TEXT] [--column NAME=TEXT]... \
[--sort NAME]... [--page N] [--page-size N] [--sheet NAME] [--export [PATH]] \
[--delimiter CHAR] [--verbose]";

impl CliConfig {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CliConfig::default();
        let mut input = None;
        let mut args = args.into_iter().peekable();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--filter" => config.global_filter = Some(next_value(&mut args, &arg)?),
                "--column" => {
                    let value = next_value(&mut args, &arg)?;
                    let (name, text) = value
                        .split_once('=')
                        .ok_or_else(|| anyhow!("--column expects NAME=TEXT, got: {value}"))?;
                    config
                        .column_filters
                        .push((name.to_string(), text.to_string()));
                }
                "--sort" => config.sort_clicks.push(next_value(&mut args, &arg)?),
                "--page" => config.page = Some(parse_number(&next_value(&mut args, &arg)?, &arg)?),
                "--page-size" => {
                    config.page_size = Some(parse_number(&next_value(&mut args, &arg)?, &arg)?)
                }
                "--sheet" => config.sheet = Some(next_value(&mut args, &arg)?),
                "--export" => {
                    let has_path = args.peek().is_some_and(|next| !next.starts_with("--"));
                    let path = if has_path {
                        PathBuf::from(next_value(&mut args, &arg)?)
                    } else {
                        PathBuf::from(DEFAULT_EXPORT_FILE_NAME)
                    };
                    config.export = Some(path);
                }
                "--delimiter" => {
                    let value = next_value(&mut args, &arg)?;
                    config.delimiter = Some(parse_delimiter(&value)?);
                }
                "--verbose" | "-v" => config.verbose = true,
                flag if flag.starts_with("--") => bail!("unknown option: {flag}\n{USAGE}"),
                _ => {
                    if input.replace(PathBuf::from(&arg)).is_some() {
                        bail!("only one input file is supported\n{USAGE}");
                    }
                }
            }
        }

        config.input = input.ok_or_else(|| anyhow!("an input file is required\n{USAGE}"))?;
        Ok(config)
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| anyhow!("{flag} expects a value\n{USAGE}"))
}

fn parse_number(value: &str, flag: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .with_context(|| format!("{flag} expects a positive number, got: {value}"))
}

fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] => Ok(*byte),
            _ => bail!("--delimiter expects a single ASCII character, got: {value}"),
        },
    }
}
