// src/cli.rs
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
};

use crate::fetch::HttpFetcher;
use crate::file;
use crate::params::{Params, DEFAULT_OUT_FILE};
use crate::progress::Progress;
use crate::runner::generate_schemas;

/// Surfaces per-URL notifications on stderr; the CSV goes to disk, so stdout
/// stays clean for `--print`.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn error(&mut self, msg: &str) {
        eprintln!("Error: {msg}");
    }
    fn item_done(&mut self, url: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, url);
    }
    fn finish(&mut self) {
        eprintln!("Done: {} of {} URL(s) produced schemas.", self.done, self.total);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let urls = collect_urls(&params)?;
    if urls.iter().all(|u| u.trim().is_empty()) {
        return Err("No URL provided.".into());
    }

    let fetcher = HttpFetcher::new(std::time::Duration::from_secs(params.timeout_secs))?;
    let mut prog = CliProgress { done: 0, total: 0 };
    let rows = generate_schemas(&fetcher, &urls, Some(&mut prog));

    if params.print_schemas {
        for row in &rows {
            println!("{}\n{}\n", row.blog_url, row.schema);
        }
    }

    let out = params.out.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE));
    let written = file::write_schemas_csv(&out, &rows)?;
    eprintln!("Wrote {} row(s) to {}", rows.len(), written.display());

    Ok(())
}

/// Input lines: positional URLs first, then the `--in` file (or stdin) in
/// file order. Blank lines are kept; the runner reports and skips them.
fn collect_urls(params: &Params) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut urls = params.urls.clone();

    if let Some(path) = &params.input {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)?
        };
        urls.extend(text.lines().map(|l| l.to_string()));
    }

    Ok(urls)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--in" => {
                let v = args.next().ok_or("Missing value for --in")?;
                params.input = Some(PathBuf::from(v)); }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if v == 0 { return Err("Timeout must be at least 1 second".into()); }
                params.timeout_secs = v; }
            "--print" => params.print_schemas = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') => return Err(format!("Unknown arg: {}", other).into()),
            url => params.urls.push(url.to_string()),
        }
    }

    Ok(())
}
