use image::{Rgba, RgbaImage};
use lightbulb_icon::draw::{draw_line, fill_ellipse, fill_rounded_rect, in_rounded_rect};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn canvas(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, CLEAR)
}

#[test]
fn test_horizontal_line_width() {
    let mut img = canvas(10);
    draw_line(&mut img, (2, 5), (7, 5), RED, 2);

    for x in 2..=7 {
        assert_eq!(*img.get_pixel(x, 4), RED);
        assert_eq!(*img.get_pixel(x, 5), RED);
        assert_eq!(*img.get_pixel(x, 6), CLEAR);
    }
    assert_eq!(*img.get_pixel(1, 5), CLEAR);
    assert_eq!(*img.get_pixel(8, 5), CLEAR);
}

#[test]
fn test_vertical_line_reversed_endpoints() {
    let mut img = canvas(10);
    draw_line(&mut img, (3, 8), (3, 1), BLUE, 1);

    for y in 1..=8 {
        assert_eq!(*img.get_pixel(3, y), BLUE);
    }
    assert_eq!(img.pixels().filter(|p| **p == BLUE).count(), 8);
}

#[test]
fn test_line_is_clipped_to_canvas() {
    let mut img = canvas(4);
    draw_line(&mut img, (-5, 1), (10, 1), RED, 1);
    assert_eq!(img.pixels().filter(|p| **p == RED).count(), 4);
}

#[test]
fn test_rounded_rect_corners_are_cut() {
    let bbox = [0, 0, 10, 10];
    assert!(!in_rounded_rect(0, 0, bbox, 4));
    assert!(in_rounded_rect(5, 0, bbox, 4));
    assert!(in_rounded_rect(5, 5, bbox, 4));
    assert!(in_rounded_rect(0, 0, bbox, 0));
    assert!(!in_rounded_rect(11, 5, bbox, 0));
}

#[test]
fn test_rounded_rect_fill_and_outline() {
    let mut img = canvas(12);
    fill_rounded_rect(&mut img, [1, 1, 10, 10], 3, BLUE, RED, 1);

    assert_eq!(*img.get_pixel(5, 1), RED);
    assert_eq!(*img.get_pixel(1, 5), RED);
    assert_eq!(*img.get_pixel(5, 5), BLUE);
    assert_eq!(*img.get_pixel(1, 1), CLEAR);
    assert_eq!(*img.get_pixel(11, 11), CLEAR);
}

#[test]
fn test_degenerate_rect_is_all_outline() {
    let mut img = canvas(8);
    fill_rounded_rect(&mut img, [2, 3, 5, 3], 0, BLUE, RED, 1);

    assert_eq!(img.pixels().filter(|p| **p == RED).count(), 4);
    assert_eq!(img.pixels().filter(|p| **p == BLUE).count(), 0);
}

#[test]
fn test_ellipse_fill_and_rim() {
    let mut img = canvas(21);
    fill_ellipse(&mut img, [0, 0, 20, 20], BLUE, RED, 2);

    assert_eq!(*img.get_pixel(10, 10), BLUE);
    assert_eq!(*img.get_pixel(9, 0), RED);
    assert_eq!(*img.get_pixel(10, 0), RED);
    assert_eq!(*img.get_pixel(11, 0), RED);
    assert_eq!(*img.get_pixel(0, 10), RED);
    assert_eq!(*img.get_pixel(0, 0), CLEAR);
    assert_eq!(*img.get_pixel(20, 20), CLEAR);
}

#[test]
fn test_ellipse_top_is_a_flat_run() {
    let mut img = canvas(21);
    fill_ellipse(&mut img, [0, 0, 20, 20], BLUE, RED, 2);

    let top: Vec<u32> = (0..21).filter(|&x| *img.get_pixel(x, 0) != CLEAR).collect();
    assert_eq!(top, (7..=13).collect::<Vec<u32>>());
}

#[test]
fn test_stadium_top_is_a_flat_run() {
    let mut img = canvas(12);
    fill_rounded_rect(&mut img, [0, 0, 7, 10], 4, BLUE, RED, 1);

    let top: Vec<u32> = (0..12).filter(|&x| *img.get_pixel(x, 0) == RED).collect();
    assert_eq!(top, vec![2, 3, 4, 5]);
    assert!(img.pixels().any(|p| *p == BLUE));
}
