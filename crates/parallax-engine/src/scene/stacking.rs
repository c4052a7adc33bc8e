use core::cmp::Ordering;

/// Stacking order of a moveable.
///
/// Higher values appear on top of lower values. Orders in a scene are the
/// dense range `1..=N`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct StackingOrder(pub u32);

impl StackingOrder {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Ord for StackingOrder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for StackingOrder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Assigns stacking orders by descending depth.
///
/// The farthest moveable gets `1` (bottom), the nearest gets `N` (top). Equal
/// depths keep their input order. Returned in input order.
pub fn assign_stacking_orders(depths: &[f32]) -> Vec<StackingOrder> {
    let mut indices: Vec<usize> = (0..depths.len()).collect();
    // Stable sort: ties keep insertion order.
    indices.sort_by(|&a, &b| depths[b].total_cmp(&depths[a]));

    let mut orders = vec![StackingOrder::default(); depths.len()];
    for (rank, &i) in indices.iter().enumerate() {
        orders[i] = StackingOrder::new(rank as u32 + 1);
    }
    orders
}
