use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use homegame::strategy::presets::AlwaysCall;
use homegame::{ACE, Card, JACK, KING, PokerHand, QUEEN, Seat, Suit, TEN, Table};

/// Benchmark evaluating a fixed five-card hand.
fn bench_eval_5_cards(c: &mut Criterion) {
    let cards = [
        Card(ACE, Suit::Spade),
        Card(KING, Suit::Spade),
        Card(9, Suit::Heart),
        Card(9, Suit::Diamond),
        Card(2, Suit::Club),
    ];

    c.bench_function("eval_5_cards", |b| {
        b.iter(|| PokerHand::new(cards));
    });
}

/// Benchmark the full 21-subset search over 7 cards.
fn bench_best_of_7_cards(c: &mut Criterion) {
    let cards = [
        Card(ACE, Suit::Spade),
        Card(KING, Suit::Spade),
        Card(QUEEN, Suit::Spade),
        Card(JACK, Suit::Spade),
        Card(TEN, Suit::Spade),
        Card(2, Suit::Heart),
        Card(3, Suit::Diamond),
    ];

    c.bench_function("best_of_7_cards", |b| {
        b.iter(|| PokerHand::best(&cards));
    });
}

/// Benchmark a single engine step at different table sizes.
fn bench_table_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_step");

    for n_players in [2, 6, 10] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{n_players}_players")),
            &n_players,
            |b, &n| {
                b.iter_batched(
                    || {
                        let seats = (0..n).map(|_| Seat::new(100, AlwaysCall)).collect();
                        Table::new(seats).unwrap()
                    },
                    |mut table| {
                        table.step().unwrap();
                        table
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark playing an entire game heads-up.
fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_heads_up", |b| {
        b.iter_batched(
            || {
                let seats = vec![Seat::new(50, AlwaysCall), Seat::new(50, AlwaysCall)];
                Table::new(seats).unwrap().with_seed(7).unwrap()
            },
            |mut table| {
                while !table.done() {
                    table.step().unwrap();
                }
                table
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(hand_evaluation, bench_eval_5_cards, bench_best_of_7_cards);
criterion_group!(table_operations, bench_table_step, bench_full_game);
criterion_main!(hand_evaluation, table_operations);
