//! CLI argument definitions for the drawing renamer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use drawing_ingest::DEFAULT_INDEX_PAGE;
use drawing_model::AlignmentPolicy;

#[derive(Parser)]
#[command(
    name = "drawing-renamer",
    version,
    about = "Drawing Renamer - Rename extracted drawing pages from their drawing index",
    long_about = "Match extracted drawing pages to the entries of their drawing index sheet.\n\n\
                  Input pages are named {location}_{drawing set}_{print order}.pdf, e.g. 525_101_006.pdf.\n\
                  Matched pages are renamed {location}_{drawing set}_{print order}_{sheet}.pdf,\n\
                  e.g. sheet A3.5 on page 6 of set 525-101 becomes 525_101_006_A_3_5.pdf."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview or apply renames for a folder of extracted drawing pages.
    Rename(RenameArgs),

    /// Reconcile a filename list against an index document and print JSON.
    Reconcile(ReconcileArgs),

    /// List the known discipline codes.
    Disciplines,
}

#[derive(Parser)]
#[command(after_help = "workflow:\n  \
    1. Extract pages from a multi-page PDF into a folder\n  \
    2. Name files as {locnum}_{drawset}_{sequence}.pdf\n  \
    3. Run `drawing-renamer rename <FOLDER>` to preview renames\n  \
    4. Add --rename to execute, --csv to export for the database")]
pub struct RenameArgs {
    /// Folder containing extracted drawing PDFs.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Print order of the page that carries the drawing index.
    #[arg(long = "index-page", value_name = "N", default_value_t = DEFAULT_INDEX_PAGE)]
    pub index_page: u64,

    /// Text file, PDF or image with the index content (instead of the index page).
    #[arg(long = "index-file", value_name = "PATH")]
    pub index_file: Option<PathBuf>,

    /// Offset of the first drawing, in the key space of --alignment: a print
    /// order for print-order, a count of leading pages for position
    /// (auto-detected if omitted).
    #[arg(long = "first-drawing", value_name = "N")]
    pub first_drawing: Option<u64>,

    /// Rule used to pair files with index entries.
    #[arg(long = "alignment", value_enum, default_value = "print-order")]
    pub alignment: AlignmentArg,

    /// Actually rename files (default is a dry-run preview).
    #[arg(long = "rename")]
    pub rename: bool,

    /// Output CSV file path for database import.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub export: ExportArgs,

    /// Print extracted index text for debugging.
    #[arg(long = "show-text")]
    pub show_text: bool,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// ProjectTitle for CSV export.
    #[arg(long = "project-title", default_value = "")]
    pub project_title: String,

    /// DrawingDate (year as integer, e.g. 2024) for CSV export.
    #[arg(long = "drawing-date", default_value = "")]
    pub drawing_date: String,

    /// Keywords for CSV export.
    #[arg(long = "keywords", default_value = "")]
    pub keywords: String,

    /// Notes for CSV export (max 500 chars).
    #[arg(long = "notes", default_value = "")]
    pub notes: String,

    /// Contract number for CSV export (max 30 chars).
    #[arg(long = "contract-number", default_value = "")]
    pub contract_number: String,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Drawing list document (PDF, image, or text).
    #[arg(long = "index", value_name = "PATH")]
    pub index: PathBuf,

    /// Text file listing the drawing filenames, one per line.
    #[arg(long = "files", value_name = "PATH")]
    pub files: PathBuf,

    /// Offset of the first drawing, in the key space of --alignment.
    #[arg(long = "first-drawing", value_name = "N", default_value_t = 0)]
    pub first_drawing: u64,

    /// Rule used to pair files with index entries.
    #[arg(long = "alignment", value_enum, default_value = "position")]
    pub alignment: AlignmentArg,
}

/// CLI alignment policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum AlignmentArg {
    PrintOrder,
    Position,
}

impl From<AlignmentArg> for AlignmentPolicy {
    fn from(value: AlignmentArg) -> Self {
        match value {
            AlignmentArg::PrintOrder => AlignmentPolicy::PrintOrder,
            AlignmentArg::Position => AlignmentPolicy::Position,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rename_args(argv: &[&str]) -> RenameArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Rename(args) => args,
            _ => panic!("expected rename command"),
        }
    }

    #[test]
    fn test_rename_defaults() {
        let args = rename_args(&["drawing-renamer", "rename", "set"]);
        assert_eq!(args.index_page, DEFAULT_INDEX_PAGE);
        assert_eq!(args.first_drawing, None);
        assert_eq!(
            AlignmentPolicy::from(args.alignment),
            AlignmentPolicy::PrintOrder
        );
        assert!(!args.rename);
    }

    #[test]
    fn test_first_drawing_with_position_alignment() {
        let args = rename_args(&[
            "drawing-renamer",
            "rename",
            "set",
            "--alignment",
            "position",
            "--first-drawing",
            "2",
        ]);
        assert_eq!(args.first_drawing, Some(2));
        assert_eq!(AlignmentPolicy::from(args.alignment), AlignmentPolicy::Position);
    }

    #[test]
    fn test_reconcile_defaults_to_position() {
        let cli = Cli::try_parse_from([
            "drawing-renamer",
            "reconcile",
            "--index",
            "index.pdf",
            "--files",
            "files.txt",
        ])
        .unwrap();
        let Command::Reconcile(args) = cli.command else {
            panic!("expected reconcile command");
        };
        assert_eq!(args.first_drawing, 0);
        assert_eq!(AlignmentPolicy::from(args.alignment), AlignmentPolicy::Position);
    }
}
