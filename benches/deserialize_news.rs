/// Benchmarks for News API response deserialization and query encoding.
///
/// Article pages are the hot path: `/everything` returns up to 100 articles per page.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use newsapi_client_sdk::ToQueryParams as _;
use newsapi_client_sdk::types::request::EverythingRequest;
use newsapi_client_sdk::types::response::{EverythingResponse, SourcesResponse};
use newsapi_client_sdk::types::{Language, SearchIn, SortBy, TimeZone as _, Utc};

const ARTICLE: &str = r#"{
    "source": {"id": "wired", "name": "Wired"},
    "author": "Lauren Goode",
    "title": "Go Turns 15",
    "description": "The programming language keeps growing.",
    "url": "https://www.wired.com/story/go-turns-15",
    "urlToImage": "https://media.wired.com/photos/go.jpg",
    "publishedAt": "2024-11-10T12:00:00Z",
    "content": "Go was announced in November 2009... [+3120 chars]"
}"#;

const SPARSE_ARTICLE: &str = r#"{
    "source": {"id": null, "name": "Hackaday"},
    "author": null,
    "title": "A Go Badge",
    "description": null,
    "url": "https://hackaday.com/go-badge",
    "urlToImage": null,
    "publishedAt": "2024-05-01T08:30:00Z",
    "content": null
}"#;

fn articles_page(size: usize) -> String {
    let articles: Vec<&str> = (0..size)
        .map(|i| if i % 2 == 0 { ARTICLE } else { SPARSE_ARTICLE })
        .collect();
    format!(
        r#"{{"status": "ok", "totalResults": {size}, "articles": [{}]}}"#,
        articles.join(",")
    )
}

fn bench_everything(c: &mut Criterion) {
    let mut group = c.benchmark_group("news/everything");

    for size in [1_usize, 20, 100] {
        let body = articles_page(size);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| {
                let _: EverythingResponse =
                    serde_json::from_str(std::hint::black_box(body)).expect("valid page");
            });
        });
    }

    group.finish();
}

fn bench_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("news/sources");

    let source = r#"{
        "id": "ars-technica",
        "name": "Ars Technica",
        "description": "The PC enthusiast's resource.",
        "url": "http://arstechnica.com",
        "category": "technology",
        "language": "en",
        "country": "us"
    }"#;
    let body = format!(
        r#"{{"status": "ok", "sources": [{}]}}"#,
        vec![source; 128].join(",")
    );

    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("directory", |b| {
        b.iter(|| {
            let _: SourcesResponse =
                serde_json::from_str(std::hint::black_box(&body)).expect("valid directory");
        });
    });

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("news/query");

    let request = EverythingRequest::builder()
        .q("golang")
        .search_in(SearchIn::Title)
        .domains(vec!["espn.com".to_owned(), "clickhole.com".to_owned()])
        .from(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single().expect("valid date"))
        .language(Language::English)
        .sort_by(SortBy::Popularity)
        .page_size(100)
        .page(2)
        .build();

    group.bench_function("everything", |b| {
        b.iter(|| std::hint::black_box(&request).query_params());
    });

    group.bench_function("everything_default", |b| {
        let empty = EverythingRequest::default();
        b.iter(|| std::hint::black_box(&empty).query_params());
    });

    group.finish();
}

criterion_group!(benches, bench_everything, bench_sources, bench_query);
criterion_main!(benches);
