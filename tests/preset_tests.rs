use lash::{presets, Vec2};

#[test]
fn whip_unfurls_from_the_handle() {
    let handle = Vec2::new(0.0f32, 0.0);
    let mut whip = presets::whip(handle, 10, 4.0);

    for tick in 0..240u64 {
        whip.update(tick);
    }

    assert_eq!(whip.position(0), handle);
    assert!(whip.tip_position().y > 10.0, "tip should hang well below the handle");
    // Settled near full extension, not bunched up.
    assert!(whip.total_length() > 0.8 * 9.0 * 4.0);
}

#[test]
fn rope_sags_between_its_anchors() {
    let a = Vec2::new(0.0f32, 0.0);
    let b = Vec2::new(60.0f32, 0.0);
    let mut rope = presets::rope(a, b, 12);

    for tick in 0..300u64 {
        rope.update(tick);
    }

    assert_eq!(rope.position(0), a);
    assert_eq!(rope.tip_position(), b);

    let mid = rope.position(6);
    assert!(mid.y > 0.5, "slack rope should sag at the middle, y = {}", mid.y);
}

#[test]
fn lightning_stays_nearly_straight() {
    let a = Vec2::new(0.0f32, 0.0);
    let b = Vec2::new(50.0f32, 0.0);
    let mut arc = presets::lightning(a, b, 8);

    // Kick it hard; with no gravity and both ends anchored it should
    // settle back toward the straight line.
    arc.apply_explosion_force(Vec2::new(25.0, 5.0), 6.0, 30.0);
    for tick in 0..300u64 {
        arc.update(tick);
    }

    for p in arc.positions() {
        assert!(p.y.abs() < 1.0, "arc should be nearly straight, got y = {}", p.y);
    }
}

#[test]
fn tentacle_reaches_downward_from_its_base() {
    let base = Vec2::new(5.0f32, 5.0);
    let mut tentacle = presets::tentacle(base, 8, 3.0);

    for tick in 0..120u64 {
        tentacle.update(tick);
    }

    assert_eq!(tentacle.position(0), base);
    assert!(tentacle.tip_position().y > base.y, "tentacle should droop below its base");
}
