// src/printer/printers.rs

//! Specialized printer struct [`PrinterChart`] for printing [`ChartData`]
//! and discovered monitor files with color.
//!
//! [`ChartData`]: crate::printer::chart::ChartData

use crate::printer::chart::ChartData;
use crate::readers::filepreprocessor::DiscoveredFile;

use std::io::{Result, Write};
use std::time::SystemTime;

use ::chrono::{DateTime, TimeZone};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

use crate::de_err;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Color of job names.
pub const COLOR_JOBNAME: Color = Color::Green;

/// Color of the greatest value of a series.
pub const COLOR_MAX: Color = Color::Yellow;

/// Color of the "no data yet" notice.
pub const COLOR_NODATA: Color = Color::Red;

/// [`strftime`] format of file modification times.
///
/// [`strftime`]: https://docs.rs/chrono/latest/chrono/format/strftime/index.html
pub const MTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Convert `systemtime` to a string in timezone `tz` using
/// [`MTIME_FORMAT`].
pub fn format_mtime<Tz: TimeZone>(
    systemtime: &SystemTime,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let dt: DateTime<Tz> = DateTime::<::chrono::Utc>::from(*systemtime).with_timezone(tz);

    dt.format(MTIME_FORMAT).to_string()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterChart
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A printer specialized for [`ChartData`] and [`DiscoveredFile`].
///
/// Writes to any [`WriteColor`], usually a [`termcolor::StandardStream`]
/// for stdout.
pub struct PrinterChart<W: WriteColor> {
    out: W,
    color_spec_jobname: ColorSpec,
    color_spec_max: ColorSpec,
    color_spec_nodata: ColorSpec,
}

/// Aliased [`Result`] returned by various [`PrinterChart`] functions.
/// The `usize` is the count of points printed.
///
/// [`Result`]: std::io::Result
pub type PrinterChartResult = Result<usize>;

impl PrinterChart<::termcolor::StandardStream> {
    /// Create a new `PrinterChart` for stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        PrinterChart::new(::termcolor::StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> PrinterChart<W> {
    /// Create a new `PrinterChart` writing to `out`.
    pub fn new(out: W) -> PrinterChart<W> {
        let mut color_spec_jobname = ColorSpec::new();
        color_spec_jobname.set_fg(Some(COLOR_JOBNAME));
        color_spec_jobname.set_bold(true);
        let mut color_spec_max = ColorSpec::new();
        color_spec_max.set_fg(Some(COLOR_MAX));
        let mut color_spec_nodata = ColorSpec::new();
        color_spec_nodata.set_fg(Some(COLOR_NODATA));

        PrinterChart {
            out,
            color_spec_jobname,
            color_spec_max,
            color_spec_nodata,
        }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_colored(
        &mut self,
        color_spec: &ColorSpec,
        value: &str,
    ) -> Result<()> {
        if let Err(err) = self.out.set_color(color_spec) {
            de_err!("set_color({:?}) returned error {}", color_spec, err);
            return Err(err);
        }
        self.out.write_all(value.as_bytes())?;
        self.out.reset()?;

        Ok(())
    }

    /// Print one summary line for `chart`:
    ///
    /// ```text
    /// <jobname>.  max: <y max>, time: <label>
    /// ```
    ///
    /// An empty `chart` prints `No data yet for <jobname>`.
    pub fn print_summary(
        &mut self,
        chart: &ChartData,
    ) -> PrinterChartResult {
        defn!("({:?})", chart.jobname);
        let max = match chart.y_max() {
            Some(val) => val,
            None => {
                let color_spec = self.color_spec_nodata.clone();
                self.write_colored(&color_spec, "No data yet for ")?;
                let color_spec = self.color_spec_jobname.clone();
                self.write_colored(&color_spec, &chart.jobname)?;
                writeln!(self.out)?;
                self.out.flush()?;
                defx!("no data");
                return Ok(0);
            }
        };
        let color_spec = self.color_spec_jobname.clone();
        self.write_colored(&color_spec, &chart.jobname)?;
        write!(self.out, ".  max: ")?;
        let color_spec = self.color_spec_max.clone();
        self.write_colored(&color_spec, &format!("{:.4}", max))?;
        writeln!(self.out, ", time: {}", chart.label)?;
        self.out.flush()?;
        defx!("printed {} points", chart.len());

        Ok(chart.len())
    }

    /// Print every `(x, y)` point of `chart`, one per line, after a line of
    /// the axis labels.
    pub fn print_table(
        &mut self,
        chart: &ChartData,
    ) -> PrinterChartResult {
        defn!("({:?})", chart.jobname);
        writeln!(self.out, "{:>20}  {:>20}", chart.x_label, chart.y_label)?;
        let mut printed: usize = 0;
        for (x, y) in chart.points() {
            writeln!(self.out, "{:>20}  {:>20}", x, y)?;
            printed += 1;
        }
        self.out.flush()?;
        defx!("printed {} points", printed);

        Ok(printed)
    }

    /// Print `discovered` as `<modification time>  <path>` with the
    /// modification time in timezone `tz`.
    pub fn print_discovered<Tz: TimeZone>(
        &mut self,
        discovered: &DiscoveredFile,
        tz: &Tz,
    ) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        writeln!(self.out, "{}  {}", format_mtime(&discovered.mtime, tz), discovered.fpath)?;

        self.out.flush()
    }
}
