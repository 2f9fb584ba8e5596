//! Performance benchmarks for rs-pismo.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Parsing plus a full attribute snapshot of a small article
//! - Individual attributes on a pre-parsed document (memo cleared each time)
//! - Keyword analysis over growing amounts of text

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_pismo::attributes::keywords;
use rs_pismo::{extract, extract_with_options, Document, ExternalAttributeProvider, InternalAttributeProvider, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Ruby Inside | CoffeeScript: A New Language With A Pure Ruby Compiler</title>
    <meta name="author" content="Peter Cooper">
    <meta name="description" content="CoffeeScript is a new programming language.">
    <link rel="alternate" type="application/rss+xml" href="/feed">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>CoffeeScript: A New Language With A Pure Ruby Compiler</h1>
        <p class="byline">By Peter Cooper</p>
        <p>CoffeeScript is a new programming language with a pure Ruby compiler.
        It compiles to JavaScript and borrows ideas from Ruby and Python.</p>
        <img src="/wp-content/uploads/2010/01/coffeescript.png" width="400" height="300">
        <p>The compiler produces readable JavaScript that passes JavaScript Lint.</p>
        <object width="640" height="385">
            <param name="movie" value="http://www.youtube.com/v/dBtYXFXa5Ig"></param>
            <embed src="http://www.youtube.com/v/dBtYXFXa5Ig" type="application/x-shockwave-flash"></embed>
        </object>
    </article>
    <footer>
        <p>Copyright 2010</p>
    </footer>
</body>
</html>
"#;

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_all_images(c: &mut Criterion) {
    c.bench_function("extract_all_images", |b| {
        b.iter(|| {
            let options = Options {
                all_images: true,
                url: Some("http://www.rubyinside.com/coffeescript".to_string()),
                ..Options::default()
            };
            extract_with_options(black_box(SAMPLE_HTML), options)
        });
    });
}

fn bench_single_attributes(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribute");

    group.bench_function("title", |b| {
        b.iter(|| Document::from_html(black_box(SAMPLE_HTML), Options::default()).title());
    });
    group.bench_function("keywords", |b| {
        b.iter(|| Document::from_html(black_box(SAMPLE_HTML), Options::default()).keywords());
    });
    group.bench_function("videos", |b| {
        b.iter(|| Document::from_html(black_box(SAMPLE_HTML), Options::default()).videos());
    });

    group.finish();
}

fn bench_keyword_analysis(c: &mut Criterion) {
    let paragraph = "CoffeeScript compiles to JavaScript and borrows ideas from Ruby and Python. ";
    let mut group = c.benchmark_group("keyword_analysis");

    for repeat in [10_usize, 100, 1000] {
        let text = paragraph.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| keywords::analyze(black_box(text), 3, None));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_all_images,
    bench_single_attributes,
    bench_keyword_analysis
);
criterion_main!(benches);
