use criterion::{black_box, criterion_group, criterion_main, Criterion};

use santorini_engine::{
    Board, Color, GameRng, GameSession, HeuristicStrategy, Player, RuleEngine, SessionConfig,
    StrategyKind, TurnStrategy,
};

fn bench_enumerate_opening(c: &mut Criterion) {
    let rules = RuleEngine::new();
    let mut board = Board::new();
    c.bench_function("enumerate_turns_opening", |b| {
        b.iter(|| rules.enumerate_turns(black_box(&mut board), Color::White))
    });
}

fn bench_heuristic_turn(c: &mut Criterion) {
    let board = Board::new();
    let player = Player::new(Color::White, StrategyKind::Heuristic);
    let mut strategy = HeuristicStrategy::new(GameRng::new(42));
    c.bench_function("heuristic_make_turn_opening", |b| {
        b.iter(|| strategy.make_turn(black_box(&board), &player, false))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = SessionConfig::default()
        .with_strategy(Color::White, StrategyKind::Heuristic)
        .with_strategy(Color::Blue, StrategyKind::Heuristic);
    c.bench_function("heuristic_vs_heuristic_game", |b| {
        b.iter(|| {
            let mut session = GameSession::automated(black_box(config)).unwrap();
            session.play_to_end().unwrap()
        })
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("board_clone", |b| b.iter(|| black_box(&board).clone()));
}

criterion_group!(
    benches,
    bench_enumerate_opening,
    bench_heuristic_turn,
    bench_full_game,
    bench_board_clone,
);
criterion_main!(benches);
