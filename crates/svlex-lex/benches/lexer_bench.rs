//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package svlex-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use svlex_lex::Lexer;
use svlex_util::diagnostic::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, &handler);
    lexer.count()
}

fn bench_lexer_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_module");

    let source = "module counter(input clk, input rst_n, output reg [7:0] q);\n\
                  always @(posedge clk or negedge rst_n)\n\
                  if (!rst_n) q <= 8'h00; else q <= q + 1'b1;\n\
                  endmodule\n";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("small_module", |b| b.iter(|| lexer_token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("plain_integer", |b| b.iter(|| lexer_token_count(black_box("123456"))));
    group.bench_function("based_hex", |b| b.iter(|| lexer_token_count(black_box("32'hDEAD_BEEF"))));
    group.bench_function("real", |b| b.iter(|| lexer_token_count(black_box("3.14159"))));
    group.bench_function("time", |b| b.iter(|| lexer_token_count(black_box("10.5ns"))));

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box(r#""hello""#)))
    });
    group.bench_function("escaped_string", |b| {
        b.iter(|| lexer_token_count(black_box(r#""line1\nline2\tend""#)))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("simple", |b| b.iter(|| lexer_token_count(black_box("data_valid_r"))));
    group.bench_function("escaped", |b| b.iter(|| lexer_token_count(black_box("\\bus+signal \n"))));
    group.bench_function("system_tf", |b| b.iter(|| lexer_token_count(black_box("$display"))));

    group.finish();
}

fn bench_lexer_punctuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_punctuation");

    let source = "a <<<= b >>>= c ==? d !=? e |-> f <-> g";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("wide_operators", |b| b.iter(|| lexer_token_count(black_box(source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_module,
    bench_lexer_numbers,
    bench_lexer_strings,
    bench_lexer_identifiers,
    bench_lexer_punctuation
);
criterion_main!(benches);
