use caseconv::{convert, segment, AcronymSet, CaseStyle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_segment(c: &mut Criterion) {
    let none = AcronymSet::default();
    let acronyms = AcronymSet::new(["HTTP", "XML", "JSON", "URL", "HÉÉP"]).unwrap();

    c.bench_function("segment camel", |b| {
        b.iter(|| segment(black_box("parseXMLHttpRequestFromURLString"), &none))
    });
    c.bench_function("segment camel with acronyms", |b| {
        b.iter(|| segment(black_box("parseXMLHTTPRequestFromURLString"), &acronyms))
    });
    c.bench_function("segment unicode", |b| {
        b.iter(|| segment(black_box("fooHÉÉPBarStringÉcoleNoël"), &acronyms))
    });
}

fn bench_convert(c: &mut Criterion) {
    let acronyms = AcronymSet::new(["HTTP", "XML"]).unwrap();

    for style in [CaseStyle::Camel, CaseStyle::Snake, CaseStyle::SeparateWords] {
        c.bench_function(&format!("convert to {}", style), |b| {
            b.iter(|| convert(black_box("FOO_HTTP_XML_bar-string.value"), style, &acronyms))
        });
    }
}

criterion_group!(benches, bench_segment, bench_convert);
criterion_main!(benches);
