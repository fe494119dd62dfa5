// src/csv.rs
//
// Minimal CSV writer (quotes + CRLF-safe fields). The schema column embeds
// multi-line JSON and double quotes, so quoting is not optional here.

use std::io::{self, Write};

use crate::params::CSV_HEADERS;
use crate::runner::ResultRow;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Build the full export text: `Blog URL,Schema` header plus one row per
/// successfully processed URL.
pub fn to_export_string(rows: &[ResultRow]) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, &CSV_HEADERS, ',');
    for r in rows {
        let _ = write_row(&mut buf, &[r.blog_url.as_str(), r.schema.as_str()], ',');
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str, schema: &str) -> ResultRow {
        ResultRow { blog_url: url.to_string(), schema: schema.to_string() }
    }

    #[test]
    fn header_row_comes_first() {
        let out = to_export_string(&[]);
        assert_eq!(out, "Blog URL,Schema\n");
    }

    #[test]
    fn plain_fields_are_unquoted() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n");
    }

    #[test]
    fn quotes_and_newlines_are_escaped() {
        let out = to_export_string(&[row("http://a.example/", "line1\nsay \"hi\"")]);
        let mut lines = out.split_inclusive('\n');
        assert_eq!(lines.next().unwrap(), "Blog URL,Schema\n");
        let rest: String = lines.collect();
        assert_eq!(rest, "http://a.example/,\"line1\nsay \"\"hi\"\"\"\n");
    }

    #[test]
    fn commas_force_quoting() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b", "c"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",c\n");
    }
}
