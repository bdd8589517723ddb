use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn pointer_at_origin_gives_negative_half_coefficient() {
    for c in [10.0, 37.5, 150.0] {
        let v = compute_parallax(c, Dimensions::new(640.0, 480.0), Point::ORIGIN);
        assert_eq!(v, Vec2::new(-c / 2.0, -c / 2.0));
    }
}

#[test]
fn pointer_at_center_is_neutral() {
    let v = compute_parallax(10.0, Dimensions::new(200.0, 100.0), Point::new(100.0, 50.0));
    assert_eq!(v, Vec2::new(0.0, 0.0));
}

#[test]
fn pointer_at_far_corner_gives_positive_half_coefficient() {
    let v = compute_parallax(40.0, Dimensions::new(200.0, 100.0), Point::new(200.0, 100.0));
    assert_eq!(v, Vec2::new(20.0, 20.0));
}

#[test]
fn reset_is_zero() {
    assert_eq!(parallax_reset(), Vec2::ZERO);
}

#[test]
fn zero_extent_axis_does_not_divide_by_zero() {
    let v = compute_parallax(10.0, Dimensions::new(0.0, 100.0), Point::new(30.0, 100.0));
    assert_eq!(v, Vec2::new(-5.0, 5.0));
    assert!(v.x.is_finite());
}

#[test]
fn degenerate_range_coefficient_is_exact() {
    let mut rng = SmallRng::seed_from_u64(4);
    for _ in 0..32 {
        assert_eq!(
            draw_parallax_coefficient(Interval::new(10.0, 10.0), &mut rng),
            10.0
        );
    }
}
