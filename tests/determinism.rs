use lash::{presets, Chain, ChainConfig, Vec2};

#[test]
fn chain_deterministic() {
    let results: Vec<_> = (0..5)
        .map(|_| {
            let mut chain: Chain<f32> = Chain::new(
                11,
                1.0,
                ChainConfig::new()
                    .with_gravity(Vec2::new(0.0, 0.3))
                    .with_wind(Vec2::new(0.1, 0.0))
                    .with_iterations(8),
            );
            chain.init_line(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
            chain.set_start_anchor(Vec2::new(0.0, 10.0));
            for tick in 0..60u64 {
                if tick == 20 {
                    chain.apply_explosion_force(Vec2::new(5.0, 12.0), 3.0, 8.0);
                }
                chain.update(tick);
            }
            chain.positions()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn preset_deterministic() {
    let results: Vec<_> = (0..3)
        .map(|_| {
            let mut whip = presets::whip(Vec2::new(0.0f32, 0.0), 10, 4.0);
            for tick in 0..120u64 {
                whip.update(tick);
            }
            whip.positions()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
