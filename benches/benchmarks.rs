criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_wheel_bins,
        spinning_seeded_wheel,
        cycling_martingale_round,
        running_cancellation_session,
        gathering_fibonacci_samples,
}

fn building_wheel_bins(c: &mut criterion::Criterion) {
    c.bench_function("populate all 38 Bins", |b| {
        b.iter(|| BinBuilder::new().build())
    });
}

fn spinning_seeded_wheel(c: &mut criterion::Criterion) {
    let ref mut wheel = Wheel::seeded(0);
    c.bench_function("spin a seeded Wheel", |b| {
        b.iter(|| wheel.spin().len())
    });
}

fn cycling_martingale_round(c: &mut criterion::Criterion) {
    let ref mut game = Game::new(Wheel::seeded(0), Table::default());
    let ref mut player = Martingale::new();
    c.bench_function("cycle one Martingale round", |b| {
        b.iter(|| {
            player.reset(STAKE, DURATION);
            game.cycle(player)
        })
    });
}

fn running_cancellation_session(c: &mut criterion::Criterion) {
    let ref mut simulator = Simulator::build(Strategy::Cancellation, Config::default()).unwrap();
    c.bench_function("run one Cancellation session", |b| {
        b.iter(|| simulator.session())
    });
}

fn gathering_fibonacci_samples(c: &mut criterion::Criterion) {
    c.bench_function("gather 50 Fibonacci sessions", |b| {
        b.iter(|| {
            let ref mut simulator =
                Simulator::build(Strategy::Fibonacci, Config::default()).unwrap();
            simulator.gather()
        })
    });
}

use roulette::players::*;
use roulette::*;
