use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rpn_calculator::interpreter::evaluate;

/// Builds an expression of roughly `minimum_length` bytes from a fixed cycle of terms,
/// occasionally wrapped in parentheses. Division is left out so no term divides by zero.
fn long_expression(minimum_length: usize) -> String {
    let terms = ["+ 172.43", "- 16864", "* 3.5", "+ (45030 - 162.7)", "* 0.5"];
    let mut expression = "38034".to_string();
    for term in terms.iter().cycle() {
        if expression.len() >= minimum_length {
            break;
        }
        expression.push(' ');
        expression.push_str(term);
    }
    expression
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "1 + 2 + 3".to_string(),
        "38034 - 172.432 * 16864 / 45030 - 162 / (663.45532 * 535)".to_string(),
        long_expression(1024),
        long_expression(10 * 1024),
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        let id = if expression.len() > 64 {
            format!("{} bytes", expression.len())
        } else {
            expression.clone()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(id),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression.as_bytes()));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
