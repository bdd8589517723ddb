use super::*;
use crate::config::model::AreaSpec;
use crate::effect::fragment::FragmentLayout;
use crate::geometry::clip::{ClipStyle, compute_clip};

fn checker(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x * 40) as u8, (y * 40) as u8, 200, 255])
    })
}

fn frag(index: usize, area: AreaSpec, dims: Dimensions, translation: Vec2) -> Fragment {
    Fragment {
        index,
        parallax: None,
        layout: FragmentLayout {
            area,
            clip: compute_clip(&area, dims, ClipStyle::Rect),
            translation,
        },
    }
}

#[test]
fn full_area_without_translation_reproduces_source() {
    let dims = Dimensions::new(4.0, 2.0);
    let src = checker(4, 2);
    let frags = [frag(0, AreaSpec::new(0.0, 0.0, 100.0, 100.0), dims, Vec2::ZERO)];
    let out = render_preview(&src, &frags, dims, &[]).unwrap();
    assert_eq!(out, src);
}

#[test]
fn translated_piece_moves_pixels() {
    let dims = Dimensions::new(4.0, 2.0);
    let src = checker(4, 2);
    // Left half, moved two pixels right.
    let frags = [frag(
        0,
        AreaSpec::new(0.0, 0.0, 50.0, 100.0),
        dims,
        Vec2::new(2.0, 0.0),
    )];
    let out = render_preview(&src, &frags, dims, &[]).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(2, 0), src.get_pixel(0, 0));
    assert_eq!(out.get_pixel(3, 1), src.get_pixel(1, 1));
}

#[test]
fn parallax_offsets_add_to_translation() {
    let dims = Dimensions::new(4.0, 2.0);
    let src = checker(4, 2);
    let frags = [frag(
        0,
        AreaSpec::new(0.0, 0.0, 25.0, 100.0),
        dims,
        Vec2::new(1.0, 0.0),
    )];
    let out = render_preview(&src, &frags, dims, &[Vec2::new(2.0, 0.0)]).unwrap();
    assert_eq!(out.get_pixel(3, 0), src.get_pixel(0, 0));
    assert_eq!(out.get_pixel(1, 0).0, [0, 0, 0, 0]);
}

#[test]
fn pieces_outside_the_canvas_are_dropped() {
    let dims = Dimensions::new(4.0, 2.0);
    let src = checker(4, 2);
    let frags = [frag(
        0,
        AreaSpec::new(0.0, 0.0, 50.0, 50.0),
        dims,
        Vec2::new(-100.0, -50.0),
    )];
    let out = render_preview(&src, &frags, dims, &[]).unwrap();
    assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn source_is_resized_to_the_container() {
    let dims = Dimensions::new(8.0, 4.0);
    let src = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
    let frags = [frag(0, AreaSpec::new(0.0, 0.0, 100.0, 100.0), dims, Vec2::ZERO)];
    let out = render_preview(&src, &frags, dims, &[]).unwrap();
    assert_eq!(out.dimensions(), (8, 4));
    for p in out.pixels() {
        for (got, want) in p.0.iter().zip([10u8, 20, 30, 255]) {
            assert!(got.abs_diff(want) <= 1, "{:?}", p.0);
        }
    }
}

#[test]
fn invalid_inputs_are_render_errors() {
    let src = checker(4, 2);
    assert!(matches!(
        render_preview(&src, &[], Dimensions::new(0.0, 2.0), &[]),
        Err(FragError::Render(_))
    ));
    let dims = Dimensions::new(4.0, 2.0);
    let frags = [frag(0, AreaSpec::new(0.0, 0.0, 10.0, 10.0), dims, Vec2::ZERO)];
    assert!(matches!(
        render_preview(&src, &frags, dims, &[Vec2::ZERO, Vec2::ZERO]),
        Err(FragError::Render(_))
    ));
}

#[test]
fn unbounded_containers_are_render_errors() {
    let src = checker(4, 2);
    for dims in [
        Dimensions::new(f64::INFINITY, 2.0),
        Dimensions::new(4.0, f64::NAN),
        Dimensions::new(MAX_PREVIEW_SIDE + 1.0, 2.0),
    ] {
        let err = render_preview(&src, &[], dims, &[]).unwrap_err();
        assert!(matches!(err, FragError::Render(_)), "{dims:?}");
    }
}
