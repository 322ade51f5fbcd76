//! Raster primitives over an [`image::RgbImage`] canvas.
//!
//! Everything here paints by direct pixel writes. Shape membership is decided
//! per pixel from simple distance tests, with coordinates clamped to the
//! canvas so a box touching the edge cannot write out of bounds.

use crate::geometry::BoundingBox;
use image::{Rgb, RgbImage};

/// Fill every row of the canvas with a color linearly interpolated between
/// `start` (top row) and `end` (bottom row), truncating per channel.
pub fn fill_vertical_gradient(img: &mut RgbImage, start: Rgb<u8>, end: Rgb<u8>) {
    let height = img.height();
    for y in 0..height {
        let t = y as f32 / height as f32;
        let color = Rgb([
            lerp_channel(start[0], end[0], t),
            lerp_channel(start[1], end[1], t),
            lerp_channel(start[2], end[2], t),
        ]);
        for x in 0..img.width() {
            img.put_pixel(x, y, color);
        }
    }
}

fn lerp_channel(start: u8, end: u8, t: f32) -> u8 {
    (start as f32 + (end as f32 - start as f32) * t) as u8
}

/// Fill a rectangle, corners inclusive.
pub fn fill_rect(img: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    for y in bbox.y0..=bbox.y1.min(img.height() - 1) {
        for x in bbox.x0..=bbox.x1.min(img.width() - 1) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Fill a rectangle with quarter-circle corners of the given radius.
pub fn fill_rounded_rect(img: &mut RgbImage, bbox: &BoundingBox, radius: u32, color: Rgb<u8>) {
    let r = radius as f32;
    let (x0, y0) = (bbox.x0 as f32, bbox.y0 as f32);
    let (x1, y1) = (bbox.x1 as f32, bbox.y1 as f32);

    for y in bbox.y0..=bbox.y1.min(img.height() - 1) {
        for x in bbox.x0..=bbox.x1.min(img.width() - 1) {
            let px = x as f32;
            let py = y as f32;

            // Distance past the inner (radius-inset) rectangle on each axis;
            // zero along the straight edges, so only corner pixels get the
            // circle test.
            let dx = if px < x0 + r {
                x0 + r - px
            } else if px > x1 - r {
                px - (x1 - r)
            } else {
                0.0
            };
            let dy = if py < y0 + r {
                y0 + r - py
            } else if py > y1 - r {
                py - (y1 - r)
            } else {
                0.0
            };

            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill the ellipse inscribed in the bounding box.
pub fn fill_ellipse(img: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    let (cx, cy) = bbox.center();
    let rx = bbox.width() as f32 / 2.0;
    let ry = bbox.height() as f32 / 2.0;

    for y in bbox.y0..=bbox.y1.min(img.height() - 1) {
        for x in bbox.x0..=bbox.x1.min(img.width() - 1) {
            let nx = (x as f32 - cx) / rx;
            let ny = (y as f32 - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Stroke an arc of the ellipse inscribed in the bounding box.
///
/// Angles are in degrees, measured clockwise from 3 o'clock with y pointing
/// down, sweeping clockwise from `start_deg` to `end_deg`; the stroke grows
/// inward from the ellipse boundary by `width` pixels.
pub fn stroke_arc(
    img: &mut RgbImage,
    bbox: &BoundingBox,
    start_deg: f32,
    end_deg: f32,
    width: u32,
    color: Rgb<u8>,
) {
    let (cx, cy) = bbox.center();
    let rx = bbox.width() as f32 / 2.0;
    let ry = bbox.height() as f32 / 2.0;
    let inner_rx = (rx - width as f32).max(0.0);
    let inner_ry = (ry - width as f32).max(0.0);

    let sweep_end = if end_deg <= start_deg {
        end_deg + 360.0
    } else {
        end_deg
    };

    for y in bbox.y0..=bbox.y1.min(img.height() - 1) {
        for x in bbox.x0..=bbox.x1.min(img.width() - 1) {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;

            let nx = dx / rx;
            let ny = dy / ry;
            if nx * nx + ny * ny > 1.0 {
                continue;
            }
            if inner_rx > 0.0 && inner_ry > 0.0 {
                let ix = dx / inner_rx;
                let iy = dy / inner_ry;
                if ix * ix + iy * iy < 1.0 {
                    continue;
                }
            }

            let mut angle = dy.atan2(dx).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            let in_sweep = (angle >= start_deg && angle <= sweep_end)
                || (angle + 360.0 >= start_deg && angle + 360.0 <= sweep_end);
            if in_sweep {
                img.put_pixel(x, y, color);
            }
        }
    }
}
