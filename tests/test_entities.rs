use flappy_bird::compute::init_state;
use flappy_bird::config::Config;
use flappy_bird::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn rect_overlap_requires_shared_interior() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0))); // fully inside
    // Touching edges only
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    // Disjoint
    assert!(!a.overlaps(&Rect::new(20.0, 20.0, 5.0, 5.0)));
}

#[test]
fn avatar_spawns_centred_at_rest() {
    let config = Config::default();
    let avatar = Avatar::spawn(&config);
    assert_eq!(avatar.rect, Rect::new(70.0, 270.0, 60.0, 60.0));
    assert_eq!(avatar.velocity, 0.0);
    assert_eq!(avatar.mood, Mood::Happy);
}

#[test]
fn obstacle_shift_moves_both_blockers() {
    let mut o = Obstacle {
        top: Rect::new(100.0, 0.0, 70.0, 200.0),
        bottom: Rect::new(100.0, 350.0, 70.0, 250.0),
        scored: false,
    };
    o.shift_left(4.0);
    assert_eq!(o.top.x, 96.0);
    assert_eq!(o.bottom.x, 96.0);
    assert_eq!(o.right(), 166.0);
}

#[test]
fn obstacle_hits_either_blocker_but_not_the_gap() {
    let o = Obstacle {
        top: Rect::new(100.0, 0.0, 70.0, 200.0),
        bottom: Rect::new(100.0, 350.0, 70.0, 250.0),
        scored: false,
    };
    assert!(o.hits(&Rect::new(110.0, 180.0, 30.0, 30.0)));
    assert!(o.hits(&Rect::new(110.0, 340.0, 30.0, 30.0)));
    assert!(!o.hits(&Rect::new(110.0, 250.0, 30.0, 30.0)));
}

#[test]
fn effect_liveness_and_seconds_left() {
    let e = ActiveEffect { kind: PowerupKind::Shield, expires_at: 5000 };
    assert!(e.is_live(0));
    assert!(e.is_live(4999));
    assert!(!e.is_live(5000));
    assert_eq!(e.seconds_left(0), 5);
    assert_eq!(e.seconds_left(4001), 1);
    assert_eq!(e.seconds_left(6000), 0);
}

#[test]
fn flags_match_the_single_effect() {
    let mut s = init_state(Config::default(), 0);
    assert_eq!(s.flags(0), EffectFlags::default());

    for kind in PowerupKind::ALL {
        s.effect = Some(ActiveEffect { kind, expires_at: 1000 });
        let f = s.flags(500);
        let on = [f.shield, f.double_score, f.slow_motion].iter().filter(|b| **b).count();
        assert_eq!(on, 1, "{:?}", kind);
        assert_eq!(f.shield, kind == PowerupKind::Shield);
        assert_eq!(f.double_score, kind == PowerupKind::DoubleScore);
        assert_eq!(f.slow_motion, kind == PowerupKind::SlowMotion);

        // Past expiry every flag reads false even before the effect is cleared
        assert_eq!(s.flags(1000), EffectFlags::default());
    }
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Config::default(), 3);
    let mut cloned = original.clone();

    cloned.avatar.rect.y = 99.0;
    cloned.score = 999;
    cloned.powerups.push(Powerup {
        rect: Rect::new(0.0, 0.0, 30.0, 30.0),
        kind: PowerupKind::SlowMotion,
    });

    assert_eq!(original.avatar.rect.y, 270.0);
    assert_eq!(original.score, 0);
    assert!(original.powerups.is_empty());
}

#[test]
fn powerup_labels() {
    assert_eq!(PowerupKind::Shield.label(), "SHIELD");
    assert_eq!(PowerupKind::DoubleScore.label(), "DOUBLE");
    assert_eq!(PowerupKind::SlowMotion.label(), "SLOW");
}
