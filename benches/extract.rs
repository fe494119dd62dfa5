// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ld_scrape::extract::extract_items;

fn synthetic_listing(posts: usize) -> String {
    let mut doc = String::from("<html><body><main>");
    for i in 0..posts {
        doc.push_str(&format!(
            r#"<article><h2><a data-hook="anchorViewer" href="post-{i}">Post number {i}</a></h2>
               <a href="/tag/misc">misc</a><p>Teaser text for post {i}.</p></article>"#
        ));
    }
    doc.push_str("</main></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let small = synthetic_listing(10);
    let large = synthetic_listing(500);

    c.bench_function("extract_10_posts", |b| {
        b.iter(|| {
            let items = extract_items(black_box(&small), "https://site.example/blog/");
            black_box(items.map(|v| v.len()).unwrap_or(0))
        })
    });

    c.bench_function("extract_500_posts", |b| {
        b.iter(|| {
            let items = extract_items(black_box(&large), "https://site.example/blog/");
            black_box(items.map(|v| v.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
