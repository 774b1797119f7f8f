use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ubx_codec::{Mode, Registry, Value};

fn nav_sat_frame(registry: &Registry, num_svs: u8) -> Vec<u8> {
    let names: Vec<String> = (1..=num_svs)
        .flat_map(|i| [format!("svId_{:02}", i), format!("qualityInd_{:02}", i)])
        .collect();
    let mut fields = vec![("numSvs", Value::from(num_svs))];
    for (i, name) in names.iter().enumerate() {
        fields.push((name.as_str(), Value::from((i % 8) as u8)));
    }
    registry
        .build("NAV", "NAV-SAT", Mode::Get, &fields)
        .unwrap()
        .to_bytes()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let registry = Registry::global();

    let pvt = registry
        .build("NAV", "NAV-PVT", Mode::Get, &[("numSV", Value::from(12u8))])
        .unwrap()
        .to_bytes();
    c.bench_function("parse_nav_pvt", |b| {
        b.iter(|| registry.parse(black_box(&pvt)).unwrap())
    });

    for num_svs in [4u8, 32] {
        let frame = nav_sat_frame(registry, num_svs);
        c.bench_function(&format!("parse_nav_sat_{}", num_svs), |b| {
            b.iter(|| registry.parse(black_box(&frame)).unwrap())
        });
    }

    c.bench_function("build_cfg_msg_poll", |b| {
        b.iter(|| {
            registry
                .build(
                    "CFG",
                    "CFG-MSG",
                    Mode::Poll,
                    black_box(&[("msgClass", Value::from(0x01u8)), ("msgID", Value::from(0x07u8))]),
                )
                .unwrap()
        })
    });

    c.bench_function("checksum_nav_pvt", |b| {
        b.iter(|| ubx_codec::isvalid_checksum(black_box(&pvt)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
