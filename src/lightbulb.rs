//! Procedural lightbulb icon
//!
//! The drawing is authored on a 128×128 grid. Every offset is multiplied by
//! `size / 128` and truncated, so the icon is self-similar at each output size.

use crate::draw::{draw_line, fill_ellipse, fill_rounded_rect};
use anyhow::Result;
use image::{Rgba, RgbaImage};

/// The only sizes the icon is drawn at
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Side length of the grid the geometry is authored on
const DESIGN_SIZE: f32 = 128.0;

/// Filament and top ray appear from this size upwards
const DETAIL_MIN_SIZE: u32 = 32;

/// Side rays appear from this size upwards
const SIDE_RAYS_MIN_SIZE: u32 = 48;

/// Colours of the icon, readable on both light and dark toolbars
pub struct Palette;

impl Palette {
    /// Indigo bulb body
    pub const PRIMARY: Rgba<u8> = Rgba([79, 70, 229, 255]);
    /// Purple, kept with the brand colours but not painted
    pub const SECONDARY: Rgba<u8> = Rgba([124, 58, 237, 255]);
    /// Amber rays
    pub const ACCENT: Rgba<u8> = Rgba([245, 158, 11, 255]);
    /// Dark grey stroke around the bulb and base cap
    pub const OUTLINE: Rgba<u8> = Rgba([31, 41, 55, 255]);
    /// Threads and base cap
    pub const BASE: Rgba<u8> = Rgba([55, 65, 81, 255]);
    /// Yellow filament lines
    pub const FILAMENT: Rgba<u8> = Rgba([253, 224, 71, 255]);
    /// Translucent white contrast plate
    pub const PLATE: Rgba<u8> = Rgba([255, 255, 255, 230]);
    /// Light grey rim of the contrast plate
    pub const PLATE_RIM: Rgba<u8> = Rgba([229, 231, 235, 255]);

    /// Every named colour with a label, used by diagnostics
    pub const NAMED: [(&'static str, Rgba<u8>); 8] = [
        ("primary", Self::PRIMARY),
        ("secondary", Self::SECONDARY),
        ("accent", Self::ACCENT),
        ("outline", Self::OUTLINE),
        ("base", Self::BASE),
        ("filament", Self::FILAMENT),
        ("plate", Self::PLATE),
        ("plate rim", Self::PLATE_RIM),
    ];
}

/// Pixel geometry for one output size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    pub size: i32,
    pub stroke: i32,
    pub margin: i32,
    pub bulb_x: i32,
    pub bulb_y: i32,
    pub bulb_width: i32,
    pub bulb_height: i32,
    pub bulb_radius: i32,
    pub thread_y1: i32,
    pub thread_y2: i32,
    pub thread_margin: i32,
    pub base_x: i32,
    pub base_y: i32,
    pub base_width: i32,
    pub base_height: i32,
    pub base_radius: i32,
    pub filament_y: i32,
    pub filament_gap: i32,
    pub filament_width: i32,
    pub ray_length: i32,
    pub ray_gap: i32,
    pub side_ray_y: i32,
}

impl Geometry {
    pub fn new(size: u32) -> Self {
        let scale = size as f32 / DESIGN_SIZE;
        let scaled = |v: f32| (v * scale) as i32;
        let size = size as i32;

        let bulb_width = scaled(32.0);
        let bulb_height = scaled(45.0);
        let bulb_x = (size - bulb_width) / 2;
        let bulb_y = scaled(20.0);

        let thread_y1 = bulb_y + bulb_height + scaled(4.0);
        let thread_y2 = thread_y1 + scaled(4.0);

        let base_width = scaled(24.0);

        Self {
            size,
            stroke: scaled(2.0).max(1),
            margin: scaled(2.0),
            bulb_x,
            bulb_y,
            bulb_width,
            bulb_height,
            bulb_radius: scaled(16.0),
            thread_y1,
            thread_y2,
            thread_margin: scaled(4.0),
            base_x: (size - base_width) / 2,
            base_y: thread_y2 + scaled(4.0),
            base_width,
            base_height: scaled(6.0),
            base_radius: scaled(3.0),
            filament_y: bulb_y + scaled(15.0),
            filament_gap: scaled(8.0),
            filament_width: scaled(12.0),
            ray_length: scaled(8.0),
            ray_gap: scaled(4.0),
            side_ray_y: bulb_y + scaled(8.0),
        }
    }

    pub fn center_x(&self) -> i32 {
        self.size / 2
    }

    pub fn bulb_right(&self) -> i32 {
        self.bulb_x + self.bulb_width
    }

    pub fn bulb_bottom(&self) -> i32 {
        self.bulb_y + self.bulb_height
    }
}

/// Draw the lightbulb icon on a transparent `size`×`size` canvas
pub fn render_lightbulb(size: u32) -> Result<RgbaImage> {
    if !ICON_SIZES.contains(&size) {
        anyhow::bail!(
            "Unsupported icon size: {}. Supported sizes: {:?}",
            size,
            ICON_SIZES
        );
    }

    let g = Geometry::new(size);
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    // Contrast plate
    fill_ellipse(
        &mut img,
        [g.margin, g.margin, g.size - g.margin, g.size - g.margin],
        Palette::PLATE,
        Palette::PLATE_RIM,
        g.stroke,
    );

    // Bulb body
    fill_rounded_rect(
        &mut img,
        [g.bulb_x, g.bulb_y, g.bulb_right(), g.bulb_bottom()],
        g.bulb_radius,
        Palette::PRIMARY,
        Palette::OUTLINE,
        g.stroke,
    );

    // Screw threads, the lower one narrower
    draw_line(
        &mut img,
        (g.bulb_x + g.thread_margin, g.thread_y1),
        (g.bulb_right() - g.thread_margin, g.thread_y1),
        Palette::BASE,
        g.stroke,
    );
    draw_line(
        &mut img,
        (g.bulb_x + g.thread_margin * 2, g.thread_y2),
        (g.bulb_right() - g.thread_margin * 2, g.thread_y2),
        Palette::BASE,
        g.stroke,
    );

    // Base cap
    fill_rounded_rect(
        &mut img,
        [g.base_x, g.base_y, g.base_x + g.base_width, g.base_y + g.base_height],
        g.base_radius,
        Palette::BASE,
        Palette::OUTLINE,
        1,
    );

    if size >= DETAIL_MIN_SIZE {
        draw_filament(&mut img, &g);
        draw_rays(&mut img, &g, size >= SIDE_RAYS_MIN_SIZE);
    }

    Ok(img)
}

fn draw_filament(img: &mut RgbaImage, g: &Geometry) {
    let cx = g.center_x();

    let half = g.filament_width / 2;
    draw_line(
        img,
        (cx - half, g.filament_y),
        (cx + half, g.filament_y),
        Palette::FILAMENT,
        g.stroke,
    );

    let third = g.filament_width / 3;
    let lower_y = g.filament_y + g.filament_gap;
    draw_line(
        img,
        (cx - third, lower_y),
        (cx + third, lower_y),
        Palette::FILAMENT,
        g.stroke,
    );
}

fn draw_rays(img: &mut RgbaImage, g: &Geometry, side_rays: bool) {
    let cx = g.center_x();

    draw_line(
        img,
        (cx, g.bulb_y - g.ray_length),
        (cx, g.bulb_y),
        Palette::ACCENT,
        g.stroke,
    );

    if !side_rays {
        return;
    }

    let right = cx + g.bulb_width / 2 + g.ray_gap;
    draw_line(
        img,
        (right, g.side_ray_y),
        (right + g.ray_length, g.side_ray_y),
        Palette::ACCENT,
        g.stroke,
    );

    let left = cx - g.bulb_width / 2 - g.ray_gap;
    draw_line(
        img,
        (left, g.side_ray_y),
        (left - g.ray_length, g.side_ray_y),
        Palette::ACCENT,
        g.stroke,
    );
}
