use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use turtle_ps::parse_program;
use turtle_ps::parser::Scanner;

/// Generate programs of different shapes for benchmarking
fn generate_program(commands: usize, pattern: &str) -> String {
    let mut content = String::new();

    match pattern {
        "movement_heavy" => {
            for i in 0..commands {
                content.push_str(&format!("W {}\nT {:.2}\n", i % 50, (i as f64) * 0.5));
            }
        }
        "shape_heavy" => {
            for i in 0..commands {
                match i % 3 {
                    0 => content.push_str(&format!("R {} {:.1}\n", i % 8, 2.5)),
                    1 => content.push_str(&format!("M {} {} 4\n", i % 4, i % 5)),
                    2 => content.push_str(&format!("P {} {}\n", 3 + i % 6, 10)),
                    _ => unreachable!(),
                }
            }
        }
        "noisy" => {
            for i in 0..commands {
                content.push_str(&format!("# step {} q\nG {} {}\n", i, i, i * 2));
            }
        }
        _ => {
            for i in 0..commands {
                content.push_str(&format!(
                    "C {:.1} {:.1} {:.1} S {}\n",
                    (i % 10) as f64 / 10.0,
                    0.5,
                    0.25,
                    i % 20
                ));
            }
        }
    }

    content
}

/// Benchmark parsing single commands
fn bench_single_command_parsing(c: &mut Criterion) {
    let commands = vec![
        ("walk", "W 10"),
        ("color", "C 0.25 0.5 0.75"),
        ("grid", "M 10 12 3.5"),
        ("glued", "G-12.5 40e-1"),
        ("unknown_prefix", "abc def S 4"),
    ];

    let mut group = c.benchmark_group("single_command_parsing");

    for (name, src) in commands {
        group.bench_with_input(BenchmarkId::new("parse_program", name), &src, |b, src| {
            b.iter(|| black_box(parse_program(black_box(src))))
        });
    }

    group.finish();
}

/// Benchmark parsing throughput (bytes per second)
fn bench_parsing_throughput(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000, 100_000];
    let patterns = vec!["movement_heavy", "shape_heavy", "noisy", "mixed"];

    let mut group = c.benchmark_group("parsing_throughput");

    for &size in &sizes {
        for pattern in &patterns {
            let content = generate_program(size, pattern);

            group.throughput(Throughput::Bytes(content.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{}_{}", pattern, size), size),
                &content,
                |b, content| b.iter(|| black_box(parse_program(black_box(content)))),
            );
        }
    }

    group.finish();
}

/// Benchmark number scanning separately
fn bench_number_scanning(c: &mut Criterion) {
    let numbers = " 12 -3.75 0.5e2 +8 .25 1000000".repeat(100);

    c.bench_function("scan_floats", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(&numbers));
            let mut total = 0.0;
            while let Some(value) = scanner.read_float() {
                total += value;
            }
            black_box(total)
        })
    });
}

criterion_group!(
    parsing_benches,
    bench_single_command_parsing,
    bench_parsing_throughput,
    bench_number_scanning
);

criterion_main!(parsing_benches);
