use std::hint::black_box;

use codec_msg::HttpCodec;
use criterion::{Criterion, criterion_group, criterion_main};
use document_msg::Document;
use traits_msg::TextCodec;

const RAW: &str = "HTTP/1.1 200 OK\n\
                   Date: Sat, 30 Aug 2025 12:00:00 GMT\n\
                   Content-Type: text/html\n\
                   Set-Cookie: foo=bar\n\
                   Set-Cookie: lorem=ipsum\n\
                   \n\
                   <h1>Hello</h1>";

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode", |b| b.iter(|| HttpCodec.decode(black_box(RAW))));
}

fn bench_encode(c: &mut Criterion) {
    let document = HttpCodec.decode(RAW);
    c.bench_function("encode", |b| {
        b.iter(|| HttpCodec.encode(black_box(&document)).unwrap())
    });
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip", |b| {
        b.iter(|| {
            let document: Document = HttpCodec.decode(black_box(RAW));
            HttpCodec.encode(&document).unwrap()
        })
    });
}

criterion_group!(benches, bench_decode, bench_encode, bench_round_trip);
criterion_main!(benches);
