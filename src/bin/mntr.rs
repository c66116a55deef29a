// src/bin/mntr.rs

//! Driver program _mntr_ drives the [_mntrlib_].
//!
//! Processes user-passed command-line arguments.
//! Then finds the solver monitor files (`.mntr`) in the passed directory,
//! oldest first, using [`discover_mntr_files_mtime`].
//!
//! For each monitor file found, a [`MntrReader`] reads the file and a
//! [`ChartData`] is made for each requested vertical column. Each
//! `ChartData` is printed as a one line summary (job name, greatest value,
//! release date) and optionally as a table of points.
//!
//! [_mntrlib_]: mntrlib
//! [`discover_mntr_files_mtime`]: mntrlib::readers::filepreprocessor::discover_mntr_files_mtime
//! [`MntrReader`]: mntrlib::readers::mntrreader::MntrReader
//! [`ChartData`]: mntrlib::printer::chart::ChartData

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::anyhow::Context;
use ::chrono::Local;
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::mntrlib::common::FPath;
use ::mntrlib::data::datatable::ColumnName;
use ::mntrlib::printer::chart::{ChartData, HORIZONTAL_DEFAULT, VERTICAL_DEFAULT};
use ::mntrlib::printer::printers::{ColorChoice, PrinterChart};
use ::mntrlib::readers::filepreprocessor::{discover_mntr_files_mtime, DiscoveredFiles};
use ::mntrlib::readers::mntrreader::MntrReader;
use ::mntrlib::{e_err, e_wrn};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

const CLI_HELP_AFTER: &str = concatcp!(
    r#"COLUMN may be one of:
    "loadstep", "substep", "attempts", "iterations", "total iterations",
    "increment", "time", "variable1", "variable2", "variable3", "variable4"
Underscores or dashes may replace spaces, e.g. "total_iterations".

The names of variable1 to variable4 are the last four fields of the variable
names header line of each monitor file.

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "mntr",
    version = concatcp!(
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Directory of monitor files. A path to a file selects the directory of
    /// that file.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    path: String,

    /// Only process monitor files with a file name containing FILTER.
    #[clap(
        short = 'f',
        long,
        verbatim_doc_comment,
    )]
    filter: Option<String>,

    /// Column of the horizontal axis.
    #[clap(
        short = 'x',
        long,
        verbatim_doc_comment,
        value_name = "COLUMN",
        value_parser = cli_parse_column,
        default_value_t = HORIZONTAL_DEFAULT,
    )]
    horizontal: ColumnName,

    /// Column(s) of the vertical axis. May be passed more than once.
    #[clap(
        short = 'y',
        long,
        verbatim_doc_comment,
        value_name = "COLUMN",
        value_parser = cli_parse_column,
        default_values_t = [VERTICAL_DEFAULT],
    )]
    vertical: Vec<ColumnName>,

    /// Only process the most recently modified monitor file.
    #[clap(
        short = 'l',
        long,
        verbatim_doc_comment,
    )]
    last: bool,

    /// Only list the monitor files found, oldest first, with their
    /// modification times.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    list: bool,

    /// Print every point of each series after its summary.
    #[clap(
        short = 't',
        long,
        verbatim_doc_comment,
    )]
    table: bool,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,
}

/// `clap` argument parser for a `ColumnName`.
fn cli_parse_column(value: &str) -> std::result::Result<ColumnName, String> {
    value.parse::<ColumnName>()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// processing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print the summary (and table if `table`) of each `vertical` series of
/// the monitor file at `fpath`.
fn process_file(
    fpath: &FPath,
    horizontal: ColumnName,
    vertical: &[ColumnName],
    table: bool,
    printer: &mut PrinterChart<::termcolor::StandardStream>,
) -> anyhow::Result<()> {
    defn!("({:?})", fpath);
    let mut reader = MntrReader::new(fpath.clone());
    for column in vertical.iter() {
        let chart: ChartData = ChartData::from_reader(&mut reader, horizontal, *column)
            .with_context(|| format!("failed to read {:?}", fpath))?;
        printer
            .print_summary(&chart)
            .context("failed to print summary")?;
        if table && !chart.is_empty() {
            printer
                .print_table(&chart)
                .context("failed to print table")?;
        }
    }
    reader.release();
    defx!();

    Ok(())
}

pub fn main() -> ExitCode {
    defn!();
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    defo!("color_choice {:?}", color_choice);

    let mut discovered: DiscoveredFiles = match discover_mntr_files_mtime(&args.path, args.filter.as_deref()) {
        Ok(val) => val,
        Err(err) => {
            e_err!("{:?}: {}", args.path, err);
            defx!("exitcode FAILURE");
            return ExitCode::FAILURE;
        }
    };
    if discovered.is_empty() {
        e_wrn!("no monitor files found for {:?}", args.path);
        defx!("exitcode SUCCESS");
        return ExitCode::SUCCESS;
    }
    if args.last {
        discovered = discovered.split_off(discovered.len() - 1);
    }

    let mut printer = PrinterChart::stdout(color_choice);

    if args.list {
        let mut ret = ExitCode::SUCCESS;
        for discovered_file in discovered.iter() {
            if let Err(err) = printer.print_discovered(discovered_file, &Local) {
                e_err!("{}", err);
                ret = ExitCode::FAILURE;
            }
        }
        defx!("exitcode {:?}", ret);
        return ret;
    }

    let mut ret = ExitCode::SUCCESS;
    for discovered_file in discovered.iter() {
        if let Err(err) = process_file(
            &discovered_file.fpath,
            args.horizontal,
            &args.vertical,
            args.table,
            &mut printer,
        ) {
            e_err!("{:#}", err);
            ret = ExitCode::FAILURE;
        }
    }
    defx!("exitcode {:?}", ret);

    ret
}
