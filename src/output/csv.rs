//! CSV rendering of a URL list

use std::io;

/// Header row of every CSV export
pub const CSV_HEADER: &str = "url";

/// Renders URLs as a one-column CSV document with a `url` header
///
/// Rows end in `\n`; fields are quoted only when they need it.
pub fn render_csv(urls: &[String]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record([CSV_HEADER])?;
    for url in urls {
        writer.write_record([url])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}
