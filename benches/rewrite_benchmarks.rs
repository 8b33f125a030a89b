//! Benchmarks for the rewriting core
//!
//! Measures:
//! - Identity rewrites (pure traversal and rebuild cost)
//! - Tracing rewrites (traversal plus one synthesized node per expression)
//! - Deep operator chains (recursion depth and context push/pop)
//! - The JSON round trip the command-line tool performs
//!
//! Run with: cargo bench --bench rewrite_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quickcheck::Gen;
use std::time::Duration;

use ps_syntax_rewriter::ir::factory::SyntaxFactory;
use ps_syntax_rewriter::ir::ps_node::*;
use ps_syntax_rewriter::ir::visitor::{rewrite_tree, Identity};
use ps_syntax_rewriter::rewriters::TraceRewriter;
use test_utils::ir::fixtures::{three_statement_script, FIXTURE_FILE, THREE_STATEMENTS};
use test_utils::ir::generator::gen_script;

// ============================================================================
// Inputs
// ============================================================================

/// The fixture's statements repeated `copies` times.
fn repeated_script(copies: usize) -> ScriptBlockAst {
    let fixture = three_statement_script();
    let statements = match fixture.end_block.as_deref() {
        Some(block) => block.statements.clone(),
        None => Vec::new(),
    };
    let all = (0..copies).flat_map(|_| statements.iter().cloned()).collect();
    ScriptBlockAst::from_statements(Extent::whole(FIXTURE_FILE, THREE_STATEMENTS), all).unwrap()
}

/// `1 + 1 + ... + 1` with `length` operators, as a single statement.
fn operator_chain(length: usize) -> ScriptBlockAst {
    let factory = SyntaxFactory::global();
    let mut chain: Node = factory.constant(1).into();
    for _ in 0..length {
        chain = factory.add(chain, factory.constant(1).into()).unwrap().into();
    }
    let statement = factory.pipeline(vec![factory.command_expression(chain).unwrap().into()]).unwrap();
    ScriptBlockAst::from_statements(Extent::whole(FIXTURE_FILE, THREE_STATEMENTS), vec![statement.into()]).unwrap()
}

/// A fixed batch of generated scripts.
fn generated_scripts(count: usize, depth: usize) -> Vec<ScriptBlockAst> {
    let mut g = Gen::new(depth);
    (0..count).map(|_| gen_script(&mut g, depth)).collect()
}

// ============================================================================
// Benchmark: Identity and Tracing
// ============================================================================

fn bench_identity_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity_rewrite");

    for copies in [1, 10, 100].iter() {
        let script = repeated_script(*copies);
        group.bench_with_input(BenchmarkId::new("fixture", copies), &script, |b, script| {
            b.iter(|| black_box(rewrite_tree(script, &mut Identity, None).unwrap()))
        });
    }

    let scripts = generated_scripts(50, 4);
    group.bench_function("generated_batch", |b| {
        b.iter(|| {
            for script in &scripts {
                black_box(rewrite_tree(script, &mut Identity, None).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_trace_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_rewrite");

    for copies in [1, 10, 100].iter() {
        let script = repeated_script(*copies);
        group.bench_with_input(BenchmarkId::new("fixture", copies), &script, |b, script| {
            b.iter(|| black_box(rewrite_tree(script, &mut TraceRewriter::new(), None).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("fixture_skip_targets", copies), &script, |b, script| {
            b.iter(|| {
                let mut tracer = TraceRewriter::skipping_assignment_targets();
                black_box(rewrite_tree(script, &mut tracer, None).unwrap())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Deep Trees
// ============================================================================

fn bench_operator_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("operator_chain");

    for length in [10, 100, 250].iter() {
        let script = operator_chain(*length);
        group.bench_with_input(BenchmarkId::new("identity", length), &script, |b, script| {
            b.iter(|| black_box(rewrite_tree(script, &mut Identity, None).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("trace", length), &script, |b, script| {
            b.iter(|| black_box(rewrite_tree(script, &mut TraceRewriter::new(), None).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: JSON Round Trip
// ============================================================================

fn bench_json_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_round_trip");

    let json = serde_json::to_string(&Node::from(repeated_script(10))).unwrap();
    group.bench_function("deserialize_trace_serialize", |b| {
        b.iter(|| {
            let tree: Node = serde_json::from_str(black_box(&json)).unwrap();
            let traced = rewrite_tree(&tree, &mut TraceRewriter::new(), None).unwrap();
            black_box(serde_json::to_string(&traced).unwrap())
        })
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3));
    targets =
        bench_identity_rewrite,
        bench_trace_rewrite,
        bench_operator_chain,
        bench_json_round_trip
}

criterion_main!(benches);
