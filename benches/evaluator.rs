use criterion::{black_box, criterion_group, criterion_main, Criterion};

use poker_equity::deck::{DeckModel, STANDARD_DECK};
use poker_equity::enumeration::ExhaustiveEnumerator;
use poker_equity::equity_calculator::{enumerate_and_evaluate, EquityConfig, HoldemCalculator};
use poker_equity::hand_evaluator::evaluate;
use poker_equity::hand_range::parse_distribution;

fn evaluating_seven_cards(c: &mut Criterion) {
    let cards = STANDARD_DECK.parse_cards("AhKdQc9s7h4d2c").unwrap_or_default();
    c.bench_function("evaluate a 7 card hand", |b| {
        b.iter(|| evaluate(black_box(cards), 7))
    });
}

fn exhausting_river_completions(c: &mut Criterion) {
    let board = STANDARD_DECK.parse_cards("Ks7d4d").unwrap_or_default();
    let pocket = STANDARD_DECK.parse_cards("AhKh").unwrap_or_default();
    let dead = board | pocket;
    c.bench_function("evaluate every turn and river", |b| {
        b.iter(|| {
            ExhaustiveEnumerator::new(STANDARD_DECK.card_masks(), 2, dead)
                .map(|completion| evaluate(completion | dead, 7).bits())
                .max()
        })
    });
}

fn parsing_ranges(c: &mut Criterion) {
    c.bench_function("parse a mixed range", |b| {
        b.iter(|| parse_distribution(black_box("22+,A2s+,KTs+,QTs+,JTs,ATo+,KQo"), Default::default(), &STANDARD_DECK))
    });
}

fn computing_heads_up_equity(c: &mut Criterion) {
    let config = EquityConfig::default().exhaustive();
    c.bench_function("exhaustive heads up flop equity", |b| {
        b.iter(|| enumerate_and_evaluate(&HoldemCalculator, "Ks7d4d", "", "AhKh|Td9s", &config))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets =
        evaluating_seven_cards,
        exhausting_river_completions,
        parsing_ranges,
        computing_heads_up_equity,
}
criterion_main!(benches);
