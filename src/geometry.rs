//! Derived layout for the padlock shapes.
//!
//! All scalars come from fixed ratios of the canvas size. Ratios are applied
//! with `f32` multiplication followed by a truncating cast, so the resulting
//! integers are stable for a given size.

/// Inclusive pixel-corner rectangle `[x0, y0] .. [x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Center of the box in pixel coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }
}

/// Bounding boxes for the four padlock shapes, in drawing order.
#[derive(Debug, Clone, Copy)]
pub struct LockGeometry {
    pub body: BoundingBox,
    pub shackle: BoundingBox,
    pub keyhole: BoundingBox,
    pub slot: BoundingBox,
}

impl LockGeometry {
    /// Compute the layout for a square canvas of the given size.
    ///
    /// Proportions, not clamping, keep everything on-canvas; that holds for
    /// the 1024px size this tool renders at but is not guaranteed for
    /// arbitrary sizes.
    pub fn for_size(size: u32) -> Self {
        // Lock body: 40% x 35% of the canvas, horizontally centered, top
        // at 45% of the canvas height.
        let body_width = (size as f32 * 0.4) as u32;
        let body_height = (size as f32 * 0.35) as u32;
        let body_x = (size - body_width) / 2;
        let body_y = (size as f32 * 0.45) as u32;
        let body = BoundingBox::new(body_x, body_y, body_width, body_height);

        // Shackle arc box: 60% x 80% of the body, centered over it, raised
        // by half its own height so the arc's ends meet the body top.
        let shackle_width = (body_width as f32 * 0.6) as u32;
        let shackle_height = (body_height as f32 * 0.8) as u32;
        let shackle_x = body_x + (body_width - shackle_width) / 2;
        let shackle_y = body_y - (shackle_height as f32 * 0.5) as u32;
        let shackle = BoundingBox::new(shackle_x, shackle_y, shackle_width, shackle_height);

        // Keyhole: circle with diameter 20% of the body width, centered
        // horizontally, 35% of the body height below the body top.
        let keyhole_size = (body_width as f32 * 0.2) as u32;
        let keyhole_x = body_x + (body_width - keyhole_size) / 2;
        let keyhole_y = body_y + (body_height as f32 * 0.35) as u32;
        let keyhole = BoundingBox::new(keyhole_x, keyhole_y, keyhole_size, keyhole_size);

        // Slot: 40% x 80% of the keyhole diameter, centered under it,
        // starting 5px above the keyhole bottom so the two shapes merge.
        let slot_width = (keyhole_size as f32 * 0.4) as u32;
        let slot_height = (keyhole_size as f32 * 0.8) as u32;
        let slot_x = keyhole_x + (keyhole_size - slot_width) / 2;
        let slot_y = keyhole_y + keyhole_size - 5;
        let slot = BoundingBox::new(slot_x, slot_y, slot_width, slot_height);

        Self {
            body,
            shackle,
            keyhole,
            slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_box_at_1024() {
        let geom = LockGeometry::for_size(1024);
        assert_eq!(geom.body.width(), 409);
        assert_eq!(geom.body.height(), 358);
        assert_eq!(geom.body.x0, 307);
        assert_eq!(geom.body.y0, 460);
    }

    #[test]
    fn shackle_box_at_1024() {
        let geom = LockGeometry::for_size(1024);
        assert_eq!(geom.shackle, BoundingBox::new(389, 317, 245, 286));
    }

    #[test]
    fn keyhole_and_slot_at_1024() {
        let geom = LockGeometry::for_size(1024);
        assert_eq!(geom.keyhole, BoundingBox::new(471, 585, 81, 81));

        // Slot starts 5px above the keyhole's bottom edge.
        assert_eq!(geom.slot, BoundingBox::new(495, 661, 32, 64));
        assert_eq!(geom.slot.y0, geom.keyhole.y1 - 5);
    }

    #[test]
    fn body_covers_canvas_center_at_1024() {
        let geom = LockGeometry::for_size(1024);
        assert!(geom.body.x0 <= 512 && 512 <= geom.body.x1);
        assert!(geom.body.y0 <= 512 && 512 <= geom.body.y1);
    }

    #[test]
    fn all_boxes_within_canvas_at_1024() {
        let geom = LockGeometry::for_size(1024);
        for bbox in [geom.body, geom.shackle, geom.keyhole, geom.slot] {
            assert!(bbox.x1 < 1024, "{bbox:?} exceeds canvas width");
            assert!(bbox.y1 < 1024, "{bbox:?} exceeds canvas height");
        }
    }
}
