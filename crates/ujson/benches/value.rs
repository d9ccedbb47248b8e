use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};

fn large_document() -> Vec<u8> {
    let mut ids = String::from("[");
    for i in 0..10_000u32 {
        if i > 0 {
            ids.push(',');
        }
        // A spread of magnitudes so sort keys differ in length.
        ids.push_str(&(i.wrapping_mul(2_654_435_761) >> 3).to_string());
    }
    ids.push(']');
    format!(
        r#"{{"name":"bench","tags":["b","a","c"],"ids":{ids},"geo":{{"lat":37.7668,"lon":-122.3959}}}}"#
    )
    .into_bytes()
}

fn bench_decode(c: &mut Criterion) {
    let data = large_document();

    let mut group = c.benchmark_group("decode");
    group.bench_function("plain", |b| {
        b.iter(|| ujson::decode(&data).expect("valid JSON"));
    });
    group.bench_function("canonical", |b| {
        b.iter(|| ujson::decode_canonical(&data).expect("valid JSON"));
    });
    group.finish();

    let tree = ujson::decode(&data).expect("valid JSON");
    c.bench_function("to_json", |b| {
        b.iter(|| tree.to_json().expect("encoding succeeds"));
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
