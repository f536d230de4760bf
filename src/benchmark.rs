use criterion::{black_box, criterion_group, criterion_main, Criterion};

use re2nfa::{fsm::RegexNfa, table::TransitionTable};

fn do_the_work(pattern: &str) -> TransitionTable {
    let mut nfa = RegexNfa::new(pattern);
    nfa.compile().unwrap();
    TransitionTable::extract(&nfa)
}

fn criterion_benchmark_transition_table(c: &mut Criterion) {
    let pattern = "((a|b)*c+(d|ab)+)*(a|b|c|d)+abcd";
    c.bench_function("compile and extract table", |b| {
        b.iter(|| do_the_work(black_box(pattern)))
    });
}

criterion_group!(benches, criterion_benchmark_transition_table);
criterion_main!(benches);
