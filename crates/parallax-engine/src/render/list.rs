use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::StackingOrder;

/// One card to draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    /// Final on-screen rectangle in logical pixels, scale already applied.
    pub rect: Rect,
    pub color: Color,
    /// Blur radius in logical pixels; `0` draws a crisp edge.
    pub blur: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone)]
struct Item {
    order: StackingOrder,
    seq: u32,
    sprite: Sprite,
}

/// Sprites for one frame, drawn back-to-front.
///
/// Paint order: ascending stacking order, then insertion order.
#[derive(Debug, Default)]
pub struct SpriteList {
    items: Vec<Item>,
    sorted: bool,
}

impl SpriteList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded sprites, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, order: StackingOrder, sprite: Sprite) {
        let seq = self.items.len() as u32;
        self.items.push(Item { order, seq, sprite });
        self.sorted = false;
    }

    /// Iterates sprites back-to-front.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &Sprite> {
        if !self.sorted {
            self.items.sort_by_key(|i| (i.order, i.seq));
            self.sorted = true;
        }
        self.items.iter().map(|i| &i.sprite)
    }
}
