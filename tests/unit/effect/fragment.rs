use super::*;
use crate::config::model::AreaMode;
use crate::foundation::core::Interval;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn reference_config(parallax: bool) -> EffectConfig {
    EffectConfig {
        fragment_count: 4,
        area: AreaMode::Fixed(vec![
            AreaSpec::new(80.0, 10.0, 3.0, 20.0),
            AreaSpec::new(2.0, 2.0, 4.0, 40.0),
            AreaSpec::new(30.0, 60.0, 3.0, 60.0),
            AreaSpec::new(10.0, 20.0, 50.0, 6.0),
        ]),
        parallax,
        parallax_range: Interval::new(10.0, 10.0),
        ..EffectConfig::default()
    }
}

#[test]
fn create_all_builds_every_index_in_order() {
    let cfg = reference_config(false);
    let mut rng = SmallRng::seed_from_u64(1);
    let frags = create_all(&cfg, Dimensions::new(400.0, 300.0), ClipStyle::Rect, &mut rng).unwrap();
    assert_eq!(frags.len(), 4);
    for (i, f) in frags.iter().enumerate() {
        assert_eq!(f.index, i);
        assert_eq!(f.parallax, None);
    }
    assert_eq!(
        frags[0].layout.clip,
        ClipDescriptor::Rect {
            top: 240.0,
            right: 52.0,
            bottom: 300.0,
            left: 40.0,
        }
    );
}

#[test]
fn degenerate_parallax_range_gives_exact_coefficients() {
    let cfg = reference_config(true);
    let mut rng = SmallRng::seed_from_u64(2);
    let frags =
        create_all(&cfg, Dimensions::new(400.0, 300.0), ClipStyle::Polygon, &mut rng).unwrap();
    assert!(frags.iter().all(|f| f.parallax == Some(10.0)));
}

#[test]
fn recompute_keeps_identity_and_coefficients() {
    let mut cfg = reference_config(true);
    cfg.parallax_range = Interval::new(10.0, 150.0);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut frags =
        create_all(&cfg, Dimensions::new(400.0, 300.0), ClipStyle::Rect, &mut rng).unwrap();
    let before: Vec<_> = frags.iter().map(|f| (f.index, f.parallax)).collect();

    recompute_all(&mut frags, &cfg, Dimensions::new(800.0, 600.0), ClipStyle::Rect, &mut rng)
        .unwrap();

    let after: Vec<_> = frags.iter().map(|f| (f.index, f.parallax)).collect();
    assert_eq!(before, after);
    assert_eq!(
        frags[0].layout.clip,
        ClipDescriptor::Rect {
            top: 480.0,
            right: 104.0,
            bottom: 600.0,
            left: 80.0,
        }
    );
}

#[test]
fn layouts_are_reproducible_for_a_seed() {
    let cfg = EffectConfig::default();
    let dims = Dimensions::new(1024.0, 768.0);
    let a = create_all(&cfg, dims, ClipStyle::Polygon, &mut SmallRng::seed_from_u64(9)).unwrap();
    let b = create_all(&cfg, dims, ClipStyle::Polygon, &mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 25);
}
