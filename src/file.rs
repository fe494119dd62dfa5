// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::to_export_string;
use crate::params::DEFAULT_OUT_FILE;
use crate::runner::ResultRow;

/// Write the batch result table as a UTF-8 CSV file. A directory-looking
/// path (or an existing directory) gets `schemas.csv` appended.
/// Returns the final path written to.
pub fn write_schemas_csv(
    out: &Path,
    rows: &[ResultRow],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_out_path(out)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, to_export_string(rows))?;
    Ok(path)
}

fn resolve_out_path(p: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if p.as_os_str().is_empty() {
        return Ok(PathBuf::from(DEFAULT_OUT_FILE));
    }
    if p.is_dir() || looks_like_dir_hint(p) {
        ensure_directory(p)?;
        Ok(p.join(DEFAULT_OUT_FILE))
    } else {
        Ok(p.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("ld_scrape_{}", name));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p
    }

    #[test]
    fn writes_file_at_given_path() {
        let dir = tmp_dir("file_at_path");
        let out = dir.join("my.csv");
        let rows = vec![ResultRow {
            blog_url: "http://a.example/".into(),
            schema: "<script></script>".into(),
        }];

        let written = write_schemas_csv(&out, &rows).unwrap();
        assert_eq!(written, out);
        let text = fs::read_to_string(&written).unwrap();
        assert!(text.starts_with("Blog URL,Schema\n"));
        assert!(text.contains("http://a.example/"));
    }

    #[test]
    fn directory_path_gets_default_filename() {
        let dir = tmp_dir("dir_hint");
        let written = write_schemas_csv(&dir, &[]).unwrap();
        assert_eq!(written.file_name().unwrap(), DEFAULT_OUT_FILE);
        assert!(written.exists());
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tmp_dir("parents");
        let out = dir.join("a").join("b").join("out.csv");
        let written = write_schemas_csv(&out, &[]).unwrap();
        assert!(written.exists());
    }
}
