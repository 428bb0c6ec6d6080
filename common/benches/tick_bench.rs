use criterion::{Criterion, criterion_group, criterion_main};
use common::games::SessionRng;
use common::games::snake::{Autopilot, Block, Board, Difficulty, Scene, SnakeSession};

fn play_autopilot_game(seed: u64) -> u32 {
    let mut session = SnakeSession::new(
        30,
        30,
        Block::new(5, 10),
        Difficulty::default(),
        SessionRng::new(seed),
    );
    session.start().unwrap();

    for _ in 0..5_000 {
        let direction = Autopilot::calculate_move(session.snake(), session.board());
        session.steer(direction);
        session.tick();
        if let Scene::GameOver { final_score } = session.scene() {
            return final_score;
        }
    }
    session.snake().score()
}

fn fill_board_except_last_row(board: &mut Board) {
    for x in 0..board.width() as i32 {
        for y in 0..board.height() as i32 - 1 {
            board.add_block(Block::new(x, y));
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("autopilot_full_game", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            play_autopilot_game(seed)
        })
    });

    c.bench_function("generate_food_crowded_board", |b| {
        let mut rng = SessionRng::new(3);
        b.iter(|| {
            let mut board = Board::new(30, 30);
            fill_board_except_last_row(&mut board);
            board.generate_food(&mut rng)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
