//! Benchmark for the full turn pipeline

use criterion::{criterion_group, criterion_main, Criterion};

use saarc_sim::region::game::{Action, Game, GameConfig};

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("full_20_year_session", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::default());
            game.dispatch(Action::SelectCountry("India".to_string()))
                .unwrap();
            for _ in 0..20 {
                game.dispatch(Action::AdvanceYear).unwrap();
            }
            game.dispatch(Action::FinishGame).unwrap();
            game.final_score()
        })
    });

    c.bench_function("single_year_advance", |b| {
        let mut game = Game::new(GameConfig::default());
        game.dispatch(Action::SelectCountry("India".to_string()))
            .unwrap();
        b.iter(|| game.dispatch(Action::AdvanceYear).unwrap());
    });
}

criterion_group!(benches, bench_full_session);
criterion_main!(benches);
