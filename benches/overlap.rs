//! Benchmarks for overlap scoring and word relatedness.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lexirel::lesk::ExtendedLesk;
use lexirel::lexicon::{CachedLexicon, MemoryLexicon, SenseRecord};
use lexirel::overlap::OverlapScorer;
use lexirel::token::tokenize;

fn bench_overlap_score(c: &mut Criterion) {
    let scorer = OverlapScorer::default_english();
    let a = tokenize(
        "a motor vehicle with four wheels usually propelled by an internal combustion engine",
    );
    let b = tokenize("a vehicle carrying many passengers used for public transport on roads");

    c.bench_function("overlap_gloss_pair", |bench| {
        bench.iter(|| black_box(scorer.score(&a, &b)))
    });
}

fn bench_overlap_identical(c: &mut Criterion) {
    let scorer = OverlapScorer::default_english();
    let seq = tokenize(
        "something that serves as a means of transport for people or objects over land",
    );

    c.bench_function("overlap_identical_14", |bench| {
        bench.iter(|| black_box(scorer.score(&seq, &seq)))
    });
}

fn bench_word_relatedness(c: &mut Criterion) {
    let lexicon = MemoryLexicon::from_records(vec![
        SenseRecord::new("conveyance.n.01", "something that serves as a means of transport")
            .lemma("conveyance"),
        SenseRecord::new("vehicle.n.01", "a conveyance that transports people or objects")
            .lemma("vehicle")
            .hypernym("conveyance.n.01"),
        SenseRecord::new("car.n.01", "a motor vehicle with four wheels")
            .lemma("car")
            .lemma("auto")
            .example("he needs a car to get to work")
            .hypernym("vehicle.n.01"),
        SenseRecord::new("bus.n.01", "a vehicle carrying many passengers")
            .lemma("bus")
            .example("he always rode the bus to work")
            .hypernym("vehicle.n.01"),
    ])
    .unwrap();
    let lesk = ExtendedLesk::with_defaults(CachedLexicon::new(lexicon));

    c.bench_function("word_relatedness_car_bus", |bench| {
        bench.iter(|| black_box(lesk.word_relatedness("car", "bus")))
    });
}

criterion_group!(
    benches,
    bench_overlap_score,
    bench_overlap_identical,
    bench_word_relatedness
);
criterion_main!(benches);
