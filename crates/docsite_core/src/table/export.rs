//! CSV serialization and download of a table.

use crate::clock::Clock;
use crate::dom::{DomError, DomHost, DownloadFile, NodeId};
use crate::model::toast::ToastKind;
use crate::notify::ToastNotifier;
use crate::table::row_values;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

/// Byte-order mark prefixed to exported files so spreadsheets pick UTF-8.
pub const UTF8_BOM: char = '\u{feff}';
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

pub type ExportResult<T> = Result<T, ExportError>;

/// Table export failures.
#[derive(Debug)]
pub enum ExportError {
    Dom(DomError),
    Csv(csv::Error),
    Encoding(FromUtf8Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dom(err) => write!(f, "table export failed: {err}"),
            Self::Csv(err) => write!(f, "csv encoding failed: {err}"),
            Self::Encoding(err) => write!(f, "csv output is not valid UTF-8: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dom(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Encoding(err) => Some(err),
        }
    }
}

impl From<DomError> for ExportError {
    fn from(err: DomError) -> Self {
        Self::Dom(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Serializes every row of `table`, header rows included.
///
/// Each cell is trimmed, has `"` doubled and is always quoted. Rows are
/// joined with `\n`; there is no trailing newline and no BOM.
pub fn table_to_csv<H: DomHost + ?Sized>(host: &H, table: NodeId) -> ExportResult<String> {
    let mut lines = Vec::new();
    for row in host.all_by_tags(table, &["tr"])? {
        lines.push(encode_record(&row_values(host, row)?)?);
    }
    Ok(lines.join("\n"))
}

/// Exports `table` as a BOM-prefixed CSV download, then shows
/// `success_message` as a success toast.
///
/// An empty table still downloads a file containing only the BOM.
pub fn export_csv<H, C>(
    host: &mut H,
    notifier: &mut ToastNotifier<C>,
    table: NodeId,
    filename: &str,
    success_message: &str,
) -> ExportResult<DownloadFile>
where
    H: DomHost + ?Sized,
    C: Clock,
{
    let body = table_to_csv(&*host, table)?;
    let mut content = String::with_capacity(body.len() + UTF8_BOM.len_utf8());
    content.push(UTF8_BOM);
    content.push_str(&body);

    let file = DownloadFile {
        filename: filename.to_string(),
        mime_type: CSV_MIME_TYPE.to_string(),
        content,
    };
    host.download(file.clone())?;

    info!(
        "event=table_export module=table status=ok filename={} bytes={}",
        filename,
        file.bytes().len()
    );

    notifier.notify(host, success_message, ToastKind::Success)?;
    Ok(file)
}

/// One always-quoted CSV line without terminator; a row without cells is an
/// empty line.
fn encode_record(values: &[String]) -> ExportResult<String> {
    if values.is_empty() {
        return Ok(String::new());
    }
    let mut bytes = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut bytes);
        writer.write_record(values)?;
        writer.flush().map_err(csv::Error::from)?;
    }
    let mut line = String::from_utf8(bytes).map_err(ExportError::Encoding)?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}
