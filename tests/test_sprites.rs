use get_ducked::entities::Vec2;
use get_ducked::sprites::*;

// ── Frame geometry ────────────────────────────────────────────────────────────

#[test]
fn duck_frames_share_dimensions() {
    for frame in DUCK_FLYING.iter().chain(DUCK_DYING.iter()) {
        assert_eq!(frame_width(frame), 5.0);
        assert_eq!(frame_height(frame), 2.0);
    }
}

#[test]
fn hunter_frames_share_dimensions() {
    for frame in &HUNTER_FRAMES {
        assert_eq!(frame_width(frame), 3.0);
        assert_eq!(frame_height(frame), 2.0);
    }
}

#[test]
fn plane_frames_share_dimensions() {
    for frame in &PLANE_FRAMES {
        assert_eq!(frame_width(frame), 9.0);
        assert_eq!(frame_height(frame), 2.0);
    }
}

#[test]
fn frame_width_uses_widest_row() {
    let ragged: Frame = &["ab", "abcd"];
    assert_eq!(frame_width(ragged), 4.0);
    assert_eq!(frame_height(ragged), 2.0);
}

// ── Bounding boxes ────────────────────────────────────────────────────────────

#[test]
fn rects_overlap_when_intersecting() {
    let duck = DUCK_FLYING[0]; // 5x2
    assert!(rects_overlap(
        Vec2::new(10.0, 10.0),
        duck,
        Vec2::new(13.0, 11.0),
        duck
    ));
}

#[test]
fn rects_do_not_overlap_when_touching_edges() {
    let duck = DUCK_FLYING[0]; // 5 wide
    assert!(!rects_overlap(
        Vec2::new(10.0, 10.0),
        duck,
        Vec2::new(15.0, 10.0),
        duck
    ));
}

#[test]
fn rects_do_not_overlap_when_apart() {
    let duck = DUCK_FLYING[0];
    assert!(!rects_overlap(
        Vec2::new(10.0, 10.0),
        duck,
        Vec2::new(40.0, 10.0),
        duck
    ));
}

#[test]
fn cell_in_frame_boundaries() {
    let duck = DUCK_FLYING[0]; // box x [10, 15), y [10, 12)
    let pos = Vec2::new(10.0, 10.0);
    assert!(cell_in_frame(Vec2::new(10.0, 10.0), pos, duck));
    assert!(cell_in_frame(Vec2::new(14.9, 11.9), pos, duck));
    assert!(!cell_in_frame(Vec2::new(15.0, 10.0), pos, duck));
    assert!(!cell_in_frame(Vec2::new(10.0, 12.0), pos, duck));
    assert!(!cell_in_frame(Vec2::new(9.9, 10.0), pos, duck));
}

// ── Masks ─────────────────────────────────────────────────────────────────────

#[test]
fn masks_overlap_on_direct_overlay() {
    let duck = DUCK_FLYING[0];
    let pos = Vec2::new(10.0, 10.0);
    assert!(masks_overlap(duck, pos, duck, pos));
}

#[test]
fn masks_overlap_requires_opaque_cells() {
    // The heart glyph sits at column 1 of " ♥ "; place it over the duck's
    // transparent top-left corner so only space cells coincide.
    let heart = HEART_FRAMES[0];
    let duck = DUCK_FLYING[0]; // top row "  \_ " — columns 0..2 transparent
    assert!(!masks_overlap(
        heart,
        Vec2::new(10.0, 5.0),
        duck,
        Vec2::new(11.0, 5.0)
    ));
    // One column to the right the glyph meets the wing
    assert!(masks_overlap(
        heart,
        Vec2::new(12.0, 5.0),
        duck,
        Vec2::new(11.0, 5.0)
    ));
}

#[test]
fn masks_disjoint_frames_do_not_overlap() {
    let duck = DUCK_FLYING[0];
    assert!(!masks_overlap(
        duck,
        Vec2::new(0.0, 0.0),
        duck,
        Vec2::new(20.0, 20.0)
    ));
}
