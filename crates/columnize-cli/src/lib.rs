//! Command-line front end for `columnize`.
//!
//! The binary is a thin shell around [`run`]: it parses [`Cli`], reads the
//! input bytes, and writes whatever [`run`] returns to stdout. Keeping the
//! pipeline here lets it be exercised without spawning a process.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use columnize::{gbk, rows_from_csv, rows_from_json_str, Columnize, Dataset, Measure, TableConfig};
use console::Term;

/// Render CSV, TSV or JSON input as an aligned text table.
#[derive(Debug, Parser)]
#[command(name = "columnize")]
#[command(version)]
pub struct Cli {
    /// Input file; stdin when absent or `-`
    pub file: Option<PathBuf>,

    /// Input format (default: from the file extension, else csv)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Treat the first CSV/TSV record as data instead of headers
    #[arg(long)]
    pub no_header_row: bool,

    /// Table config file (YAML, or JSON with a .json extension)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Table title
    #[arg(long)]
    pub title: Option<String>,

    /// Column header; repeat once per column. Replaces headers read from the input
    #[arg(long = "header", value_name = "TEXT")]
    pub headers: Vec<String>,

    /// Column mask such as `--:` or `:-:`; repeat once per column
    #[arg(long = "mask", value_name = "MASK")]
    pub masks: Vec<String>,

    /// Render without `|` borders
    #[arg(long)]
    pub no_border: bool,

    /// How display width is measured
    #[arg(long, value_enum)]
    pub measure: Option<MeasureArg>,

    /// Encoding of the input bytes
    #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
    pub encoding: Encoding,

    /// Encoding of the output bytes
    #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
    pub output_encoding: Encoding,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// When to bold the title and header lines
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log filter directive; overrides -v
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Yaml,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    Utf8,
    Gbk,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MeasureArg {
    Gbk,
    Unicode,
}

impl From<MeasureArg> for Measure {
    fn from(arg: MeasureArg) -> Self {
        match arg {
            MeasureArg::Gbk => Measure::Gbk,
            MeasureArg::Unicode => Measure::Unicode,
        }
    }
}

/// Properties of the stream the table is written to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputTarget {
    /// Terminal width in columns, when stdout is a terminal.
    pub width: Option<usize>,
    /// Whether title and header lines are bolded.
    pub color: bool,
}

impl OutputTarget {
    /// Inspects stdout.
    pub fn detect(choice: ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Auto => Term::stdout().features().colors_supported(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        OutputTarget {
            width: terminal_size::terminal_size().map(|(w, _)| w.0 as usize),
            color,
        }
    }
}

impl Cli {
    /// Whether input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_deref().is_none_or(|p| p == Path::new("-"))
    }

    /// The `tracing` filter used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> String {
        if let Some(level) = &self.log_level {
            return level.clone();
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }

    fn resolved_input_format(&self) -> InputFormat {
        if let Some(format) = self.input_format {
            return format;
        }
        let ext = self
            .file
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => InputFormat::Json,
            Some("tsv") | Some("tab") => InputFormat::Tsv,
            _ => InputFormat::Csv,
        }
    }

    fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TableConfig::default(),
        };

        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if !self.masks.is_empty() {
            config.masks = self.masks.clone();
        }
        if self.no_border {
            config.border = false;
        }
        if let Some(measure) = self.measure {
            config.measure = measure.into();
        }
        Ok(config)
    }
}

/// Turns raw input bytes into the bytes written to stdout.
pub fn run(cli: &Cli, input: &[u8], target: &OutputTarget) -> Result<Vec<u8>> {
    let text = decode_input(input, cli.encoding)?;
    let table = build_table(cli, &text)?;

    let output = match cli.format {
        OutputFormat::Table => {
            if let Some(width) = target.width {
                if table.table_width() > width {
                    tracing::warn!(
                        table_width = table.table_width(),
                        terminal_width = width,
                        "table is wider than the terminal"
                    );
                }
            }
            if target.color {
                emphasize(&table)
            } else {
                table.render().to_string()
            }
        }
        OutputFormat::Csv => table.to_csv()?,
        OutputFormat::Json => {
            let mut json = table.to_json()?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => table.to_yaml()?,
    };

    match cli.output_encoding {
        Encoding::Utf8 => Ok(output.into_bytes()),
        Encoding::Gbk => gbk::encode_gbk(&output).context("failed to encode output as GBK"),
    }
}

/// Builds the table from decoded input text.
///
/// Headers come from `--header` first, then the input, then the config file.
pub fn build_table(cli: &Cli, text: &str) -> Result<Columnize> {
    let config = cli.table_config()?;

    let format = cli.resolved_input_format();
    let mut dataset = parse_input(text, format, !cli.no_header_row)
        .with_context(|| format!("failed to parse {:?} input", format))?;
    tracing::info!(
        ?format,
        rows = dataset.rows.len(),
        columns = dataset.headers.len(),
        "parsed input"
    );

    if !cli.headers.is_empty() {
        dataset.headers = cli.headers.clone();
    }
    Ok(dataset.into_columnize(config.build()))
}

fn parse_input(text: &str, format: InputFormat, has_headers: bool) -> Result<Dataset> {
    let dataset = match format {
        InputFormat::Csv => rows_from_csv(text.as_bytes(), has_headers, b',')?,
        InputFormat::Tsv => rows_from_csv(text.as_bytes(), has_headers, b'\t')?,
        InputFormat::Json => rows_from_json_str(text)?,
    };
    Ok(dataset)
}

fn decode_input(input: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        Encoding::Utf8 => {
            let text = std::str::from_utf8(input)
                .context("input is not valid UTF-8 (try --encoding gbk)")?;
            Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
        }
        Encoding::Gbk => gbk::decode_gbk(input).context("failed to decode input as GBK"),
    }
}

/// Renders the table with its title and header lines in bold.
fn emphasize(table: &Columnize) -> String {
    let header_line = if table.title().is_some() { 2 } else { 0 };
    let mut out = String::with_capacity(table.render().len());

    for (i, line) in table.render().lines().enumerate() {
        let bold = (table.title().is_some() && i == 0)
            || (i == header_line && !table.headers().is_empty());
        if bold {
            out.push_str(&console::style(line).bold().force_styling(true).to_string());
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
