use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wkt_reader::parse_wkt;

fn create_data() -> String {
    // A ring of 1000 points with a small hole
    let exterior: Vec<String> = (0..1000)
        .map(|i| {
            let angle = i as f64 / 1000. * std::f64::consts::TAU;
            format!("{:.6} {:.6}", angle.cos() * 100., angle.sin() * -100.)
        })
        .collect();
    format!(
        "POLYGON (({}, {}), (1 1, 2 1, 2 2, 1 1))",
        exterior.join(", "),
        exterior[0]
    )
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let multi = format!("MULTIPOLYGON ({})", vec![&data["POLYGON ".len()..]; 20].join(", "));

    c.bench_function("parse 1000-point polygon", |b| {
        b.iter(|| parse_wkt(black_box(&data)).unwrap())
    });

    c.bench_function("parse 20-polygon multipolygon", |b| {
        b.iter(|| parse_wkt(black_box(&multi)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
