use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::snake::{
    AutopilotKind, Board, BotController, Direction, Point, Snake, SnakeGameState, SnakeSettings,
};

fn default_settings() -> SnakeSettings {
    SnakeSettings {
        board: Board::from_canvas(600, 500),
        ..SnakeSettings::default()
    }
}

/// A long snake winding up and down the board in one connected serpentine,
/// so the search has to route around it.
fn comb_state() -> SnakeGameState {
    let settings = default_settings();
    let mut body = Vec::new();
    for x in 2..46 {
        if x % 2 == 0 {
            body.extend((1..=35).map(|y| Point::new(x, y)));
        } else {
            body.extend((1..=35).rev().map(|y| Point::new(x, y)));
        }
    }
    // Head ends up at (45, 1), heading away from (45, 2).
    body.reverse();
    let snake = Snake::with_body(body, Some(Direction::Up));
    SnakeGameState::with_snake(settings, snake, Some(Point::new(48, 39)))
}

fn bench_single_move_open_board() {
    let mut rng = SessionRng::new(42);
    let state = SnakeGameState::new(default_settings(), &mut rng);
    black_box(BotController::calculate_move(AutopilotKind::Pathfinding, &state));
}

fn bench_single_move_comb() {
    let state = comb_state();
    black_box(BotController::calculate_move(AutopilotKind::Pathfinding, &state));
}

fn bench_full_game(kind: AutopilotKind) {
    let mut rng = SessionRng::new(7);
    let mut state = SnakeGameState::new(default_settings(), &mut rng);

    for _ in 0..5_000 {
        if let Some(direction) = BotController::calculate_move(kind, &state) {
            state.set_snake_direction(direction);
        }
        if state.update(&mut rng).is_terminal() {
            break;
        }
    }
    black_box(state.score());
}

fn autopilot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("autopilot");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("pathfinding_single_move_open", |b| {
        b.iter(bench_single_move_open_board)
    });

    group.bench_function("pathfinding_single_move_comb", |b| {
        b.iter(bench_single_move_comb)
    });

    group.bench_function("greedy_5000_ticks", |b| {
        b.iter(|| bench_full_game(AutopilotKind::Greedy))
    });

    group.bench_function("pathfinding_5000_ticks", |b| {
        b.iter(|| bench_full_game(AutopilotKind::Pathfinding))
    });

    group.finish();
}

criterion_group!(benches, autopilot_bench);
criterion_main!(benches);
