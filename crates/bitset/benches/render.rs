use bitset::{BitSet, Configuration, Format};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_configuration(digit_count: usize) -> Configuration {
    let entries: Vec<(String, char)> = (0..digit_count)
        .map(|i| (format!("d{}", i), char::from_u32(0x41 + i as u32).unwrap()))
        .collect();

    Configuration::from_display(entries).unwrap()
}

fn gen_digits(configuration: &Configuration) -> Vec<String> {
    // Every third digit enabled
    configuration
        .digits()
        .enumerate()
        .filter(|(i, _)| i % 3 == 0)
        .map(|(_, digit)| digit.to_string())
        .collect()
}

fn bench_render(c: &mut Criterion) {
    for &digit_count in &[1usize, 8, 32, 64] {
        let configuration = gen_configuration(digit_count);
        let digits = gen_digits(&configuration);
        let bit_set = BitSet::new(digits.clone(), &configuration).unwrap();

        c.bench_function(&format!("from_digits_{}", digit_count), |b| {
            b.iter(|| {
                let _ = BitSet::new(digits.clone(), &configuration).unwrap();
            })
        });

        c.bench_function(&format!("to_s_long_{}", digit_count), |b| {
            b.iter(|| {
                let _ = bit_set.to_s(Format::Long).unwrap();
            })
        });

        c.bench_function(&format!("to_s_short_{}", digit_count), |b| {
            b.iter(|| {
                let _ = bit_set.to_s(Format::Short).unwrap();
            })
        });
    }
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
