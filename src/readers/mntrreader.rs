// src/readers/mntrreader.rs

//! Implements a [`MntrReader`], the owner of the content of one solver
//! monitor file and the source of its [`Metadata`] and [`DataTable`].
//!
//! [`Metadata`]: crate::data::header::Metadata
//! [`DataTable`]: crate::data::datatable::DataTable

use crate::common::{File, FPath, RawLine, RawLines};
use crate::data::datatable::DataTable;
use crate::data::header::{monitored_variables, parse_jobname, parse_release_date, HeaderLayout, Metadata};
use crate::readers::helpers::fpath_to_path;
use crate::readers::tokenizer::normalize_fields;

use std::fmt;
use std::io::{BufRead, BufReader, Error, ErrorKind, Result};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// MntrReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Lifecycle of the content of a [`MntrReader`].
///
/// `Unloaded` → `Loaded` by [`load`] or by any accessor.
/// `Loaded` → `Released` by [`release`].
/// `Released` → `Unloaded` only by [`set_path`].
///
/// [`load`]: MntrReader#method.load
/// [`release`]: MntrReader#method.release
/// [`set_path`]: MntrReader#method.set_path
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentState {
    Unloaded,
    Loaded,
    Released,
}

enum Content {
    Unloaded,
    Loaded(RawLines),
    Released,
}

/// A reader of one solver monitor file.
///
/// The entire file is read on first access to any header field or to the
/// data table and is kept until [`release`]. Header fields and the
/// `DataTable` are derived from the kept lines on each call;
/// [`data_table_cached`] keeps the most recent `DataTable`.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`release`]: MntrReader#method.release
/// [`data_table_cached`]: MntrReader#method.data_table_cached
/// [`Read`]: std::io::Read
pub struct MntrReader {
    path: Option<FPath>,
    layout: HeaderLayout,
    content: Content,
    /// Memoized result of `data_table`, cleared whenever `content` changes.
    datatable_cache: Option<DataTable>,
}

impl fmt::Debug for MntrReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        let lines: usize = match &self.content {
            Content::Loaded(lines) => lines.len(),
            _ => 0,
        };
        f.debug_struct("MntrReader")
            .field("path", &self.path)
            .field("layout", &self.layout)
            .field("state", &self.state())
            .field("lines", &lines)
            .field("datatable cached?", &self.datatable_cache.is_some())
            .finish()
    }
}

impl MntrReader {
    /// Create a new `MntrReader` for the file at `path` using the default
    /// [`HeaderLayout`]. The file is not read.
    pub fn new(path: FPath) -> MntrReader {
        MntrReader::new_with_layout(path, HeaderLayout::default())
    }

    /// Create a new `MntrReader` for the file at `path` with `layout`.
    pub fn new_with_layout(
        path: FPath,
        layout: HeaderLayout,
    ) -> MntrReader {
        defñ!("({:?}, {:?})", path, layout);
        MntrReader {
            path: Some(path),
            layout,
            content: Content::Unloaded,
            datatable_cache: None,
        }
    }

    /// The path of the file, `None` after [`release`].
    ///
    /// [`release`]: MntrReader#method.release
    pub fn path(&self) -> Option<&FPath> {
        self.path.as_ref()
    }

    pub const fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    pub fn state(&self) -> ContentState {
        match self.content {
            Content::Unloaded => ContentState::Unloaded,
            Content::Loaded(_) => ContentState::Loaded,
            Content::Released => ContentState::Released,
        }
    }

    /// Assign a new `path`. Any content is dropped; the next access reads
    /// the new file.
    pub fn set_path(
        &mut self,
        path: FPath,
    ) {
        defñ!("({:?})", path);
        self.path = Some(path);
        self.content = Content::Unloaded;
        self.datatable_cache = None;
    }

    /// Read the entire file, replacing any prior content.
    ///
    /// Lines are stored without their line terminators (`"\n"` or `"\r\n"`).
    /// Bytes that are not UTF-8, e.g. a Latin-1 job name, are replaced with
    /// `U+FFFD`.
    /// The file is closed before returning.
    pub fn load(&mut self) -> Result<()> {
        defn!("({:?})", self.path);
        let path: &FPath = match &self.path {
            Some(path) => path,
            None => {
                defx!("no path; released");
                return Err(error_released());
            }
        };
        let file: File = match File::open(fpath_to_path(path)) {
            Ok(val) => val,
            Err(err) => {
                defx!("File::open({:?}) error {}", path, err);
                return Err(err);
            }
        };
        let mut reader = BufReader::new(file);
        let mut lines: RawLines = RawLines::new();
        let mut buffer: Vec<u8> = Vec::<u8>::with_capacity(256);
        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    defx!("read error {}", err);
                    return Err(err);
                }
            }
            lines.push(bytes_to_rawline(&buffer));
        }
        defo!("read {} lines", lines.len());
        self.content = Content::Loaded(lines);
        self.datatable_cache = None;
        defx!();

        Ok(())
    }

    /// Drop the content and the path. Afterward every access is an
    /// [`ErrorKind::InvalidInput`] error until [`set_path`] is called.
    ///
    /// [`set_path`]: MntrReader#method.set_path
    pub fn release(&mut self) {
        defñ!("({:?})", self.path);
        self.content = Content::Released;
        self.path = None;
        self.datatable_cache = None;
    }

    /// Return the content, calling [`load`] first if needed.
    ///
    /// [`load`]: MntrReader#method.load
    fn lines(&mut self) -> Result<&[RawLine]> {
        match self.content {
            Content::Loaded(_) => {}
            Content::Unloaded => self.load()?,
            Content::Released => return Err(error_released()),
        }
        match &self.content {
            Content::Loaded(lines) => Ok(lines.as_slice()),
            _ => Err(error_released()),
        }
    }

    /// Return header line `line`, loading the file if needed.
    fn header_line(
        &mut self,
        line: usize,
    ) -> Result<&RawLine> {
        let layout: HeaderLayout = self.layout;
        let lines = self.lines()?;

        layout.line_at(lines, line)
    }

    /// Count of lines in the file.
    pub fn lines_count(&mut self) -> Result<usize> {
        Ok(self.lines()?.len())
    }

    /// The job name, from the job name line with its prefix removed.
    pub fn jobname(&mut self) -> Result<String> {
        let line = self.layout.jobname;
        let rawline = self.header_line(line)?;
        let jobname = parse_jobname(rawline, line)?;
        defñ!("return {:?}", jobname);

        Ok(jobname)
    }

    /// The release identifiers, the first two fields of the release line.
    pub fn release_version(&mut self) -> Result<Vec<String>> {
        let line = self.layout.release_date;
        let (release, _) = parse_release_date(self.header_line(line)?);

        Ok(release)
    }

    /// The release date and time, the fields of the release line after the
    /// release identifiers.
    pub fn release_datetime(&mut self) -> Result<Vec<String>> {
        let line = self.layout.release_date;
        let (_, datetime) = parse_release_date(self.header_line(line)?);

        Ok(datetime)
    }

    /// Every field of the variable names line.
    pub fn variable_names(&mut self) -> Result<Vec<String>> {
        let line = self.layout.variable_names;

        Ok(normalize_fields(self.header_line(line)?))
    }

    /// The names of `variable1` to `variable4`, the trailing four fields of
    /// the variable names line.
    pub fn monitored_variables(&mut self) -> Result<Vec<String>> {
        let variables = self.variable_names()?;

        Ok(monitored_variables(&variables).to_vec())
    }

    /// All header values. The header lines must all be present.
    pub fn metadata(&mut self) -> Result<Metadata> {
        let layout: HeaderLayout = self.layout;
        let lines = self.lines()?;

        Metadata::from_lines(lines, &layout)
    }

    /// Parse every data line into a new [`DataTable`].
    ///
    /// The data lines are parsed again on every call. A file without data
    /// lines returns an empty `DataTable`. A data line with too few numbers
    /// is an [`ErrorKind::InvalidData`] error.
    pub fn data_table(&mut self) -> Result<DataTable> {
        defn!("({:?})", self.path);
        let layout: HeaderLayout = self.layout;
        let lines = self.lines()?;
        let datalines = layout.data_lines(lines);
        match DataTable::from_lines(datalines, layout.first_data_line) {
            Ok(table) => {
                defx!("return DataTable with {} rows", table.len());
                Ok(table)
            }
            Err(err) => {
                defx!("error {}", err);
                Err(err.into())
            }
        }
    }

    /// As [`data_table`] but the `DataTable` is kept and returned again by
    /// later calls. The kept `DataTable` is dropped by [`load`],
    /// [`release`], and [`set_path`].
    ///
    /// [`data_table`]: MntrReader#method.data_table
    /// [`load`]: MntrReader#method.load
    /// [`release`]: MntrReader#method.release
    /// [`set_path`]: MntrReader#method.set_path
    pub fn data_table_cached(&mut self) -> Result<&DataTable> {
        let table: DataTable = match self.datatable_cache.take() {
            Some(table) => {
                defñ!("cache hit");
                table
            }
            None => self.data_table()?,
        };

        Ok(self.datatable_cache.insert(table))
    }
}

/// Convert one line read by `read_until` to a `RawLine` without its line
/// terminator.
fn bytes_to_rawline(bytes: &[u8]) -> RawLine {
    let bytes: &[u8] = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes: &[u8] = bytes.strip_suffix(b"\r").unwrap_or(bytes);

    String::from_utf8_lossy(bytes).into_owned()
}

fn error_released() -> Error {
    Error::new(ErrorKind::InvalidInput, "MntrReader was released; call set_path before further use")
}
