//! Comparison benchmarks: linkdown vs a greedy regex and pulldown-cmark
//!
//! Run with: cargo bench --bench comparison
//!
//! Compared:
//! - linkdown link resolver (this crate)
//! - greedy regex `\[(.+)\]\((.+)\)`, the single-replace link finder the
//!   scanner replaces; faster to write, wrong on adjacent links
//! - pulldown-cmark full conversion, for scale

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use regex::Regex;

/// Sample documents for benchmarking
mod samples {
    /// One link per line
    pub const SINGLE: &str = "Intro text with [a link](https://example.com) in the middle.";

    /// Several links on the same line
    pub const ADJACENT: &str =
        "See [docs](http://x) and [more](http://y), also [this](http://z) and [that](http://w).";

    /// Link text with no links at all
    pub const PLAIN: &str =
        "A long line of text without any brackets, parentheses or other link syntax in it.";

    /// Document for the full conversion comparison
    pub const DOCUMENT: &str = r#"# Title

Intro paragraph with [a link](https://example.com) and
[another](https://example.org/path_(x)).

## Section

Plain paragraph text.
"#;
}

/// Resolve links with linkdown
fn links_linkdown(line: &str) -> String {
    linkdown::resolve_links(line)
}

/// Resolve links with the greedy regex
fn links_regex(re: &Regex, line: &str) -> String {
    re.replace(line, "<a href=\"$2\">$1</a>").into_owned()
}

/// Convert with pulldown-cmark
fn convert_pulldown_cmark(input: &str) -> String {
    use pulldown_cmark::{Parser, html};
    let parser = Parser::new(input);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

fn greedy_regex() -> Regex {
    match Regex::new(r"\[(.+)\]\((.+)\)") {
        Ok(re) => re,
        Err(err) => panic!("invalid benchmark regex: {err}"),
    }
}

fn bench_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("links");
    let re = greedy_regex();

    for (name, line) in [
        ("single", samples::SINGLE),
        ("adjacent", samples::ADJACENT),
        ("plain", samples::PLAIN),
    ] {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::new("linkdown", name), line, |b, s| {
            b.iter(|| links_linkdown(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("regex", name), line, |b, s| {
            b.iter(|| links_regex(&re, black_box(s)))
        });
    }

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");
    let input = samples::DOCUMENT;
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("linkdown", |b| {
        b.iter(|| linkdown::convert(black_box(input)))
    });
    group.bench_function("pulldown-cmark", |b| {
        b.iter(|| convert_pulldown_cmark(black_box(input)))
    });

    group.finish();
}

/// Print how each approach handles the adjacent-link line once, so the
/// report shows why the numbers are not like for like.
fn report_adjacent_output() {
    let re = greedy_regex();
    let line = samples::ADJACENT;
    eprintln!("linkdown: {}", links_linkdown(line));
    eprintln!("regex:    {}", links_regex(&re, line));
}

fn bench_all(c: &mut Criterion) {
    report_adjacent_output();
    bench_links(c);
    bench_document(c);
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
