use common::shapes::Rectangle;

/// One of the four children of a split node. The discriminant is the
/// child's index in `QuadTree::children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A stored object: the caller's payload and the rectangle it was inserted with.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub payload: T,
    pub rect: Rectangle,
}

impl<T> Entry<T> {
    pub fn new(payload: T, rect: Rectangle) -> Self {
        Self { payload, rect }
    }
}

/// Mid-lines of a node, as used by quadrant classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Midlines {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Midlines {
    #[inline(always)]
    pub(crate) fn of(bounds: &Rectangle) -> Self {
        Self {
            x: bounds.x + half_extent(bounds.width),
            y: bounds.y + half_extent(bounds.height),
        }
    }

    /// Band test against a rectangle. A rectangle whose far edge lies on a
    /// mid-line belongs to the top/left band.
    #[inline(always)]
    pub(crate) fn classify(self, rect: &Rectangle) -> Option<Quadrant> {
        let in_top = rect.y <= self.y && rect.y + rect.height <= self.y;
        let in_bottom = rect.y > self.y;
        let in_left = rect.x <= self.x && rect.x + rect.width <= self.x;
        let in_right = rect.x > self.x;

        match (in_top, in_bottom, in_left, in_right) {
            (true, _, true, _) => Some(Quadrant::TopLeft),
            (true, _, _, true) => Some(Quadrant::TopRight),
            (_, true, true, _) => Some(Quadrant::BottomLeft),
            (_, true, _, true) => Some(Quadrant::BottomRight),
            _ => None,
        }
    }
}

/// Integer half of an extent, truncated toward zero.
#[inline(always)]
pub(crate) fn half_extent(extent: f32) -> f32 {
    (extent / 2.0).trunc()
}
