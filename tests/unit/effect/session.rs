use super::*;
use crate::config::model::AreaSpec;
use crate::foundation::error::FragError;
use crate::geometry::clip::ClipDescriptor;

fn reference_options() -> EffectOptions {
    EffectOptions::new()
        .fragment_count(4)
        .areas(vec![
            AreaSpec::new(80.0, 10.0, 3.0, 20.0),
            AreaSpec::new(2.0, 2.0, 4.0, 40.0),
            AreaSpec::new(30.0, 60.0, 3.0, 60.0),
            AreaSpec::new(10.0, 20.0, 50.0, 6.0),
        ])
        .parallax(true)
        .parallax_range(10.0, 10.0)
}

#[test]
fn construction_lays_out_every_fragment() {
    let fx = FragmentsEffect::with_seed(
        &reference_options(),
        Dimensions::new(400.0, 300.0),
        r#"url("img/1.jpg")"#,
        ClipStyle::Rect,
        7,
    )
    .unwrap();
    assert_eq!(fx.fragments().len(), 4);
    assert_eq!(fx.background(), "img/1.jpg");
    assert_eq!(fx.clip_style(), ClipStyle::Rect);
    assert_eq!(fx.dimensions(), Dimensions::new(400.0, 300.0));
    assert_eq!(fx.config().fragment_count, 4);
    assert_eq!(
        fx.fragments()[0].layout.clip,
        ClipDescriptor::Rect {
            top: 240.0,
            right: 52.0,
            bottom: 300.0,
            left: 40.0,
        }
    );
}

#[test]
fn config_error_aborts_construction() {
    let opts = reference_options().fragment_count(3);
    let err = FragmentsEffect::with_seed(
        &opts,
        Dimensions::new(400.0, 300.0),
        "a.png",
        ClipStyle::Polygon,
        0,
    )
    .unwrap_err();
    assert!(matches!(err, FragError::Config(_)));
}

#[test]
fn pointer_events_drive_parallax_targets() {
    let fx = FragmentsEffect::with_seed(
        &reference_options(),
        Dimensions::new(200.0, 100.0),
        "a.png",
        ClipStyle::Polygon,
        1,
    )
    .unwrap();

    let centered = fx.pointer_move(Point::new(100.0, 50.0));
    assert_eq!(centered, vec![Vec2::ZERO; 4]);

    let origin = fx.pointer_move(Point::ORIGIN);
    assert_eq!(origin, vec![Vec2::new(-5.0, -5.0); 4]);

    assert_eq!(fx.pointer_leave(), vec![Vec2::ZERO; 4]);
}

#[test]
fn parallax_disabled_yields_no_targets() {
    let fx = FragmentsEffect::with_seed(
        &EffectOptions::new(),
        Dimensions::new(200.0, 100.0),
        "a.png",
        ClipStyle::Polygon,
        1,
    )
    .unwrap();
    assert!(fx.pointer_move(Point::new(3.0, 4.0)).is_empty());
    assert!(fx.pointer_leave().is_empty());
    assert_eq!(fx.fragments().len(), 25);
}

#[test]
fn resize_recomputes_with_new_dimensions() {
    let mut fx = FragmentsEffect::with_seed(
        &reference_options(),
        Dimensions::new(400.0, 300.0),
        "a.png",
        ClipStyle::Rect,
        5,
    )
    .unwrap();
    fx.resize(Dimensions::new(800.0, 600.0)).unwrap();
    assert_eq!(fx.dimensions(), Dimensions::new(800.0, 600.0));
    assert_eq!(
        fx.fragments()[0].layout.clip.to_pixel_rect(fx.dimensions()),
        crate::Rect::new(80.0, 480.0, 104.0, 600.0)
    );
    assert!(fx.fragments().iter().all(|f| f.parallax == Some(10.0)));
}

#[test]
fn same_seed_same_layout() {
    let mk = || {
        FragmentsEffect::with_seed(
            &EffectOptions::new(),
            Dimensions::new(640.0, 480.0),
            "a.png",
            ClipStyle::Polygon,
            123,
        )
        .unwrap()
    };
    assert_eq!(mk().fragments(), mk().fragments());
}

#[test]
fn entropy_seeded_effect_builds() {
    let fx = FragmentsEffect::from_entropy(
        &EffectOptions::new().fragment_count(3),
        Dimensions::new(10.0, 10.0),
        "a.png",
        ClipStyle::Polygon,
    )
    .unwrap();
    assert_eq!(fx.fragments().len(), 3);
}
