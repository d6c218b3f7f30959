//! Minimal raster primitives for drawing onto an `RgbaImage`.
//!
//! Every primitive writes pixels directly (no alpha blending) and silently clips
//! whatever falls outside the canvas. Bounding boxes are `[x0, y0, x1, y1]` with
//! both corners inclusive, and coordinates are signed so shapes may hang off the
//! edge of the image. Shape tests sample pixel centres, so the top and bottom of
//! a round shape come out as flat runs rather than single-pixel spikes.

use image::{Rgba, RgbaImage};

/// Inclusive bounding box `[x0, y0, x1, y1]`
pub type BBox = [i32; 4];

/// Write a pixel if it lies on the canvas
fn put(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Visit every canvas pixel covered by `bbox`
fn for_each_in_bbox(img: &mut RgbaImage, bbox: BBox, mut f: impl FnMut(&mut RgbaImage, i32, i32)) {
    let [x0, y0, x1, y1] = bbox;
    let x_start = x0.max(0);
    let y_start = y0.max(0);
    let x_end = x1.min(img.width() as i32 - 1);
    let y_end = y1.min(img.height() as i32 - 1);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            f(img, x, y);
        }
    }
}

/// Pixel centre of integer coordinate `v`
fn centre(v: i32) -> f32 {
    v as f32 + 0.5
}

fn in_ellipse(x: i32, y: i32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let nx = (centre(x) - cx) / rx;
    let ny = (centre(y) - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Rounded box with continuous edges `[left, top, right, bottom)`
fn in_rounded_box(x: i32, y: i32, edges: [f32; 4], radius: f32) -> bool {
    let [left, top, right, bottom] = edges;
    if right <= left || bottom <= top {
        return false;
    }
    let (px, py) = (centre(x), centre(y));
    if px < left || px > right || py < top || py > bottom {
        return false;
    }

    let r = radius.min((right - left) / 2.0).min((bottom - top) / 2.0).max(0.0);

    // Distance past the straight edges, non-zero only inside a corner square
    let dx = (left + r - px).max(px - (right - r)).max(0.0);
    let dy = (top + r - py).max(py - (bottom - r)).max(0.0);
    dx * dx + dy * dy <= r * r
}

/// Continuous edges covering every pixel of `bbox`, shrunk by `inset`
fn edges(bbox: BBox, inset: i32) -> [f32; 4] {
    let [x0, y0, x1, y1] = bbox;
    [
        (x0 + inset) as f32,
        (y0 + inset) as f32,
        (x1 + 1 - inset) as f32,
        (y1 + 1 - inset) as f32,
    ]
}

/// Whether a pixel lies inside the rounded rectangle `bbox` with corner radius `radius`
pub fn in_rounded_rect(x: i32, y: i32, bbox: BBox, radius: i32) -> bool {
    in_rounded_box(x, y, edges(bbox, 0), radius as f32)
}

/// Fill the ellipse inscribed in `bbox`, then paint a rim `width` pixels thick
pub fn fill_ellipse(
    img: &mut RgbaImage,
    bbox: BBox,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: i32,
) {
    let [x0, y0, x1, y1] = bbox;
    let cx = (x0 + x1 + 1) as f32 / 2.0;
    let cy = (y0 + y1 + 1) as f32 / 2.0;
    let rx = (x1 - x0 + 1) as f32 / 2.0;
    let ry = (y1 - y0 + 1) as f32 / 2.0;
    let w = width as f32;

    for_each_in_bbox(img, bbox, |img, x, y| {
        if !in_ellipse(x, y, cx, cy, rx, ry) {
            return;
        }
        let color = if in_ellipse(x, y, cx, cy, rx - w, ry - w) {
            fill
        } else {
            outline
        };
        put(img, x, y, color);
    });
}

/// Fill a rounded rectangle, then paint an outline `width` pixels thick
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    bbox: BBox,
    radius: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: i32,
) {
    let outer = edges(bbox, 0);
    let inner = edges(bbox, width);
    let inner_radius = (radius - width).max(0) as f32;

    for_each_in_bbox(img, bbox, |img, x, y| {
        if !in_rounded_box(x, y, outer, radius as f32) {
            return;
        }
        let color = if in_rounded_box(x, y, inner, inner_radius) {
            fill
        } else {
            outline
        };
        put(img, x, y, color);
    });
}

/// Draw a straight line `width` pixels thick.
///
/// The stroke is stamped perpendicular to the line's dominant axis, so horizontal
/// and vertical lines keep their exact length and grow `width / 2` pixels towards
/// the origin side of the centre line.
pub fn draw_line(
    img: &mut RgbaImage,
    from: (i32, i32),
    to: (i32, i32),
    color: Rgba<u8>,
    width: i32,
) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let horizontal = dx >= -dy;
    let width = width.max(1);
    let offset = width / 2;
    let mut err = dx + dy;

    loop {
        for i in 0..width {
            if horizontal {
                put(img, x, y - offset + i, color);
            } else {
                put(img, x - offset + i, y, color);
            }
        }

        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
