use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament::{build_draw, BracketSimulator, SimulationConfig};

fn field(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("Player {}", i)).collect()
}

fn rating(player: &str) -> f64 {
    1500.0 + (player.len() as f64 * 13.0) % 300.0
}

fn bench_simulate(c: &mut Criterion) {
    let draw = build_draw(&field(100), 128).expect("valid draw");
    let simulator = BracketSimulator::new(SimulationConfig::default());

    c.bench_function("simulate 128-draw x1000", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            simulator
                .simulate(black_box(&draw), &rating, 1000, &mut rng)
                .expect("simulation")
        })
    });

    c.bench_function("simulate_parallel 128-draw x1000", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            simulator
                .simulate_parallel(black_box(&draw), &rating, 1000, &mut rng)
                .expect("simulation")
        })
    });
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
