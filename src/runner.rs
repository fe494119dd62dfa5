// src/runner.rs
//
// Batch orchestration: input lines → Fetcher → Extractor → Schema Builder →
// result table. Strictly sequential; every failure is reported through the
// Progress sink and excluded from the table.

use std::collections::HashMap;

use crate::extract::extract_items;
use crate::fetch::Fetch;
use crate::progress::Progress;
use crate::schema::{self, ItemListSchema};

/// One successfully processed URL: the trimmed input URL and the finished
/// script block. Row order is input order, minus skipped entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub blog_url: String,
    pub schema: String,
}

/// Run the whole batch. Blank lines are skipped with a notification; a URL
/// that fails any stage contributes no row. Never returns an error: the
/// worst outcome is an empty table.
pub fn generate_schemas(
    fetcher: &dyn Fetch,
    urls: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<ResultRow> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }
    log::info!("Batch: Begin urls={}", urls.len());

    let mut rows = Vec::new();

    for raw in urls {
        let url = raw.trim();
        if url.is_empty() {
            if let Some(p) = progress.as_deref_mut() {
                p.error("Empty URL provided. Skipping.");
            }
            continue;
        }

        let body = match fetcher.get(url) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("Fetch: Failed url={url}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.error(&e.to_string());
                }
                continue;
            }
        };

        let items = match extract_items(&body, url) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Extract: No items url={url}");
                if let Some(p) = progress.as_deref_mut() {
                    p.error(&e.to_string());
                }
                continue;
            }
        };

        let count = items.len();
        match schema::to_script_tag(&ItemListSchema::new(items)) {
            Ok(script) => {
                log::debug!("Schema: OK url={url} items={count}");
                rows.push(ResultRow { blog_url: url.to_string(), schema: script });
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(url);
                }
            }
            Err(e) => {
                log::warn!("Schema: Serialize failed url={url}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.error(&format!("Unknown error occurred: {url}: {e}"));
                }
            }
        }
    }

    log::info!("Batch: Done rows={}", rows.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    rows
}

/// Process-wide memoization of whole-batch results, keyed by the trimmed,
/// order-preserving URL list. Identical input yields the identical table
/// without refetching (assuming the remote content is unchanged). Lives for
/// the process; cleared on restart only.
///
/// On a cache hit the per-URL error notifications from the original run are
/// not replayed.
#[derive(Default)]
pub struct SchemaCache {
    entries: HashMap<Vec<String>, Vec<ResultRow>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate(
        &mut self,
        fetcher: &dyn Fetch,
        urls: &[String],
        progress: Option<&mut dyn Progress>,
    ) -> Vec<ResultRow> {
        let key: Vec<String> = urls.iter().map(|u| u.trim().to_string()).collect();

        if let Some(hit) = self.entries.get(&key) {
            log::debug!("Cache: Hit urls={}", key.len());
            return hit.clone();
        }

        let rows = generate_schemas(fetcher, urls, progress);
        self.entries.insert(key, rows.clone());
        rows
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    use crate::error::FetchError;
    use reqwest::StatusCode;

    /// Canned-response fetcher; counts calls so tests can assert how many
    /// requests a batch actually issued.
    struct StubFetcher {
        pages: HashMap<String, String>,
        not_found: Vec<String>,
        calls: Cell<usize>,
    }

    impl StubFetcher {
        fn new() -> Self {
            Self { pages: HashMap::new(), not_found: Vec::new(), calls: Cell::new(0) }
        }
        fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
        fn missing(mut self, url: &str) -> Self {
            self.not_found.push(url.to_string());
            self
        }
    }

    impl Fetch for StubFetcher {
        fn get(&self, url: &str) -> Result<String, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.not_found.iter().any(|u| u == url) {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: StatusCode::NOT_FOUND,
                });
            }
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: StatusCode::NOT_FOUND,
                })
        }
    }

    #[derive(Default)]
    struct Collected {
        errors: Vec<String>,
        done: Vec<String>,
    }

    impl Progress for Collected {
        fn error(&mut self, msg: &str) {
            self.errors.push(msg.to_string());
        }
        fn item_done(&mut self, url: &str) {
            self.done.push(url.to_string());
        }
    }

    const TWO_POSTS: &str = r#"
        <a data-hook="anchorViewer" href="post-a">Post A</a>
        <a data-hook="anchorViewer" href="post-b">Post B</a>
    "#;

    fn urls(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn blank_lines_notify_and_skip_without_fetching() {
        let fetcher = StubFetcher::new().page("http://example.com/blog/", TWO_POSTS);
        let mut prog = Collected::default();

        let rows = generate_schemas(
            &fetcher,
            &urls(&["", "  ", "http://example.com/blog/"]),
            Some(&mut prog),
        );

        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(prog.errors.len(), 2);
        assert!(prog.errors.iter().all(|e| e == "Empty URL provided. Skipping."));
    }

    #[test]
    fn http_404_yields_no_row_and_names_the_url() {
        let fetcher = StubFetcher::new()
            .missing("http://gone.example/")
            .page("http://ok.example/", TWO_POSTS);
        let mut prog = Collected::default();

        let rows = generate_schemas(
            &fetcher,
            &urls(&["http://gone.example/", "http://ok.example/"]),
            Some(&mut prog),
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].blog_url, "http://ok.example/");
        assert_eq!(prog.done, vec!["http://ok.example/"]);
        assert_eq!(prog.errors.len(), 1);
        assert!(prog.errors[0].contains("http://gone.example/"));
        assert!(prog.errors[0].contains("404"));
    }

    #[test]
    fn zero_anchors_yields_no_row() {
        let fetcher = StubFetcher::new().page("http://empty.example/", "<p>no links</p>");
        let mut prog = Collected::default();

        let rows = generate_schemas(&fetcher, &urls(&["http://empty.example/"]), Some(&mut prog));

        assert!(rows.is_empty());
        assert!(prog.errors[0].contains("No anchorViewer elements found"));
        assert!(prog.errors[0].contains("http://empty.example/"));
    }

    #[test]
    fn input_is_trimmed_and_row_order_follows_input_order() {
        let fetcher = StubFetcher::new()
            .page("http://a.example/", TWO_POSTS)
            .page("http://b.example/", TWO_POSTS);

        let rows = generate_schemas(
            &fetcher,
            &urls(&["  http://a.example/  ", "http://b.example/"]),
            None,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].blog_url, "http://a.example/");
        assert_eq!(rows[1].blog_url, "http://b.example/");
    }

    #[test]
    fn cache_returns_identical_table_without_refetching() {
        let fetcher = StubFetcher::new().page("http://a.example/", TWO_POSTS);
        let mut cache = SchemaCache::new();

        let first = cache.get_or_generate(&fetcher, &urls(&["http://a.example/"]), None);
        let calls_after_first = fetcher.calls.get();
        // same batch, different surrounding whitespace → same key
        let second = cache.get_or_generate(&fetcher, &urls(&[" http://a.example/ "]), None);

        assert_eq!(first, second);
        assert_eq!(fetcher.calls.get(), calls_after_first);
    }

    #[test]
    fn cache_clear_forces_a_rerun() {
        let fetcher = StubFetcher::new().page("http://a.example/", TWO_POSTS);
        let mut cache = SchemaCache::new();

        cache.get_or_generate(&fetcher, &urls(&["http://a.example/"]), None);
        cache.clear();
        cache.get_or_generate(&fetcher, &urls(&["http://a.example/"]), None);

        assert_eq!(fetcher.calls.get(), 2);
    }
}
