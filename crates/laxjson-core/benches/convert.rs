use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use laxjson_core::parse_str;

/// A typical API payload: mixed scalars, a nested object per key, and an
/// array of objects.
static WEATHER: &str = r#"{"coord":{"lon":-0.13,"lat":51.51},"weather":[{"id":520,"main":"Rain","description":"light intensity shower rain","icon":"09d"}],"base":"stations","main":{"temp":280.32,"pressure":1012,"humidity":81,"temp_min":279.15,"temp_max":281.15},"visibility":10000,"wind":{"speed":4.1,"deg":80},"clouds":{"all":90},"dt":1485789600,"sys":{"type":1,"id":5091,"country":"GB","sunrise":1485762037,"sunset":1485794875},"id":2643743,"name":"London","cod":200}"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_str", |b| b.iter(|| parse_str(black_box(WEATHER))));
}

fn bench_navigate(c: &mut Criterion) {
    let doc = parse_str(WEATHER);
    c.bench_function("path", |b| {
        b.iter(|| {
            black_box(doc.path("weather[0].description").string_value());
            black_box(doc.path("main.temp").double_value());
            black_box(doc["wind"]["speed"].double_value());
        })
    });
}

fn bench_stringify(c: &mut Criterion) {
    let doc = parse_str(WEATHER);
    c.bench_function("stringify", |b| b.iter(|| black_box(doc.to_json())));
}

criterion_group!(convert, bench_parse, bench_navigate, bench_stringify);
criterion_main!(convert);
