use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sokoban_rules::core::{Direction, parse_level};
use std::hint::black_box;

const PUZZLES: &[(&str, &str)] = &[
    ("puzzle_1", r#"######
#@$ .#
######"#),
    ("puzzle_3", r#"########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########"#),
    ("puzzle_4", r#"       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########"#),
];

const WALK_LENGTH: usize = 1000;

fn random_walk(seed: u64) -> Vec<Direction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..WALK_LENGTH)
        .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
        .collect()
}

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_level");
    for &(name, puzzle) in PUZZLES {
        group.bench_with_input(BenchmarkId::new("parse", name), &puzzle, |b, &puzzle| {
            b.iter(|| parse_level(black_box(puzzle)))
        });
    }
    group.finish();
}

pub fn bench_random_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_walk");
    let walk = random_walk(42);
    for &(name, puzzle) in PUZZLES {
        group.bench_with_input(BenchmarkId::new("steps", name), &puzzle, |b, &puzzle| {
            b.iter_with_setup(
                || parse_level(puzzle).expect("benchmark level parses"),
                |mut board| {
                    for &direction in &walk {
                        black_box(board.step(direction));
                    }
                    black_box(board.is_solved())
                },
            );
        });
    }
    group.finish();
}

pub fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for &(name, puzzle) in PUZZLES {
        let board = parse_level(puzzle).expect("benchmark level parses");
        group.bench_function(BenchmarkId::new("to_string", name), |b| {
            b.iter(|| black_box(&board).to_string())
        });
    }
    group.finish();
}

criterion_group!(board_benches, bench_parse, bench_random_walk, bench_serialize);

criterion_main!(board_benches);
