use lash::{Chain, ChainConfig, Vec2};

fn free_chain(count: usize) -> Chain<f32> {
    // Stiffness 0 disables constraints so displacement comes from the
    // impulse alone.
    let mut chain = Chain::new(
        count,
        5.0,
        ChainConfig::new().with_damping(1.0).with_stiffness(0.0),
    );
    chain.init_line(Vec2::new(0.0, 0.0), Vec2::new(5.0 * (count - 1) as f32, 0.0));
    chain
}

#[test]
fn impulse_becomes_velocity_on_next_update() {
    let mut chain = free_chain(4);
    let impulse = Vec2::new(2.0, -3.0);
    chain.apply_impulse(2, impulse);

    // The implicit velocity changes immediately...
    let v = chain.velocity(2);
    assert!((v.x - impulse.x).abs() < 1e-6 && (v.y - impulse.y).abs() < 1e-6);

    // ...and materializes as displacement on the next update.
    let before = chain.position(2);
    chain.update(0);
    let moved = chain.position(2) - before;
    assert!((moved.x - impulse.x).abs() < 1e-5, "dx = {}", moved.x);
    assert!((moved.y - impulse.y).abs() < 1e-5, "dy = {}", moved.y);

    // Untouched particles did not move.
    assert_eq!(chain.velocity(0), Vec2::zero());
}

#[test]
fn impulse_out_of_range_is_a_no_op() {
    let mut chain = free_chain(3);
    let before = chain.positions();
    chain.apply_impulse(99, Vec2::new(100.0, 100.0));
    chain.update(0);
    for (a, b) in before.iter().zip(chain.positions().iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn impulse_on_anchored_particle_is_ignored() {
    let mut chain = free_chain(3);
    chain.set_start_anchor(Vec2::new(0.0, 0.0));
    chain.apply_impulse(0, Vec2::new(50.0, 50.0));
    assert_eq!(chain.velocity(0), Vec2::zero());
}

#[test]
fn global_impulse_skips_anchors() {
    let mut chain = free_chain(4);
    chain.set_start_anchor(Vec2::new(0.0, 0.0));
    chain.apply_global_impulse(Vec2::new(0.0, 4.0));

    assert_eq!(chain.velocity(0), Vec2::zero());
    for i in 1..4 {
        assert!((chain.velocity(i).y - 4.0).abs() < 1e-6, "particle {} missed the impulse", i);
    }
}

#[test]
fn explosion_falloff_is_linear_in_distance() {
    let mut chain = free_chain(4);
    // Particles at x = 0, 5, 10, 15. Blast at the origin, radius 20.
    chain.apply_explosion_force(Vec2::new(0.0, 0.0), 8.0, 20.0);

    // Particle exactly at the center is unaffected.
    assert_eq!(chain.velocity(0), Vec2::zero());

    // Others are pushed away from the center with magnitude
    // force * (1 - d / radius).
    for (i, d) in [(1usize, 5.0f32), (2, 10.0), (3, 15.0)] {
        let v = chain.velocity(i);
        let expected = 8.0 * (1.0 - d / 20.0);
        assert!(v.x > 0.0, "particle {} should be pushed along +x", i);
        assert!(
            (v.length() - expected).abs() < 1e-4,
            "particle {}: |v| = {}, expected {}",
            i, v.length(), expected,
        );
    }
}

#[test]
fn explosion_ignores_particles_outside_radius() {
    let mut chain = free_chain(4);
    chain.apply_explosion_force(Vec2::new(0.0, 0.0), 8.0, 5.0);
    // Particle 1 sits exactly at the radius; no impulse there either.
    for i in 1..4 {
        assert_eq!(chain.velocity(i), Vec2::zero(), "particle {} is at or beyond the radius", i);
    }
}
