use super::*;

#[test]
fn seeded_entropy_is_replayable() {
    let mut a = ChaChaEntropy::seeded(7);
    let mut b = ChaChaEntropy::seeded(7);

    let draws_a: Vec<u32> = (0..8).map(|_| a.draw_u32(1, 3)).collect();
    let draws_b: Vec<u32> = (0..8).map(|_| b.draw_u32(1, 3)).collect();
    assert_eq!(draws_a, draws_b);

    let floats_a: Vec<f64> = (0..8).map(|_| a.draw_f64(0.2, 0.7)).collect();
    let floats_b: Vec<f64> = (0..8).map(|_| b.draw_f64(0.2, 0.7)).collect();
    assert_eq!(floats_a, floats_b);
}

#[test]
fn different_seeds_diverge() {
    let mut a = ChaChaEntropy::seeded(1);
    let mut b = ChaChaEntropy::seeded(2);

    let draws_a: Vec<f64> = (0..16).map(|_| a.draw_f64(0.0, 1.0)).collect();
    let draws_b: Vec<f64> = (0..16).map(|_| b.draw_f64(0.0, 1.0)).collect();
    assert_ne!(draws_a, draws_b);
}

#[test]
fn chacha_draws_stay_in_range() {
    let mut entropy = ChaChaEntropy::seeded(42);
    for _ in 0..1000 {
        let n = entropy.draw_u32(1, 3);
        assert!((1..=3).contains(&n));

        let f = entropy.draw_f64(0.1, 0.3);
        assert!((0.1..0.3).contains(&f));
    }
}

#[test]
fn degenerate_range_returns_low_bound() {
    let mut entropy = ChaChaEntropy::seeded(0);
    assert_eq!(entropy.draw_u32(5, 5), 5);
    assert_eq!(entropy.draw_f64(0.5, 0.5), 0.5);
}

#[test]
fn scripted_entropy_pops_in_order() {
    let mut entropy = ScriptedEntropy::new()
        .with_ints([3, 1, 2])
        .with_floats([0.5, 0.25]);

    assert_eq!(entropy.draw_u32(1, 3), 3);
    assert_eq!(entropy.draw_u32(1, 3), 1);
    assert_eq!(entropy.draw_u32(1, 3), 2);

    assert_eq!(entropy.draw_f64(0.0, 1.0), 0.5);
    assert_eq!(entropy.draw_f64(0.0, 1.0), 0.25);
}

#[test]
fn scripted_entropy_clamps_and_defaults_to_minimum() {
    let mut entropy = ScriptedEntropy::new().with_ints([99]);

    // Out-of-range draws are clamped into the requested range
    assert_eq!(entropy.draw_u32(1, 3), 3);

    // Exhausted scripts keep returning the range minimum
    assert_eq!(entropy.draw_u32(1, 3), 1);
    assert_eq!(entropy.draw_f64(0.2, 0.7), 0.2);
}
