use super::*;

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn over_transparent_src_keeps_dst() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn over_half_alpha_blends() {
    // 50% white over opaque black.
    let src = premultiply([255, 255, 255, 128]);
    let out = over([0, 0, 0, 255], src);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
}

#[test]
fn premultiply_roundtrips_opaque() {
    let px = [200, 100, 50, 255];
    assert_eq!(premultiply(px), px);
    assert_eq!(unpremultiply(premultiply(px)), px);
    assert_eq!(premultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
}
