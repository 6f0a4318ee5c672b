use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sudoku_techniques::{analyze_difficulty, find_next_logic_step, solve_sudoku, Grid};

const LINE: &str = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn criterion_benchmark(c: &mut Criterion) {
    let grid = Grid::from_str_line(LINE).unwrap();
    let flat = grid.to_bytes();

    c.bench_function("backtracking solve", |b| {
        b.iter(|| solve_sudoku(black_box(&grid)))
    });
    c.bench_function("first logic step", |b| {
        b.iter(|| find_next_logic_step(black_box(&grid), None))
    });
    c.bench_function("grade puzzle", |b| {
        b.iter(|| analyze_difficulty(black_box(&flat)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
