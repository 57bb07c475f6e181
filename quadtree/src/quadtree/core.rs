use super::types::{half_extent, Midlines};
use super::*;
use crate::collision_detection::rectangle_contains_rectangle;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::trace;

impl<T> QuadTree<T> {
    /// Root node with the default configuration.
    ///
    /// `bounds` must be finite with positive width and height; degenerate
    /// bounds produce a degenerate partition rather than an error. Use
    /// [`QuadTree::try_new_with_config`] to have them rejected.
    pub fn new(bounds: Rectangle) -> Self {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Rectangle, config: Config) -> Self {
        debug_assert!(
            validate_bounds(&bounds).is_ok(),
            "degenerate quadtree bounds {:?}",
            bounds
        );
        Self::with_depth(bounds, 1, config)
    }

    pub fn try_new_with_config(bounds: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_bounds(&bounds)?;
        config.validate()?;
        Ok(Self::with_depth(bounds, 1, config))
    }

    /// Empty leaf at an explicit depth. `split` uses this for children.
    pub fn with_depth(bounds: Rectangle, depth: usize, config: Config) -> Self {
        debug_assert!(depth >= 1, "node depth starts at 1");
        Self {
            bounds,
            depth,
            config,
            objects: Vec::new(),
            children: None,
        }
    }

    /// Gives a leaf its four children. Stored entries are not moved.
    pub fn split(&mut self) {
        if self.children.is_some() {
            return;
        }

        let Rectangle {
            x,
            y,
            width,
            height,
        } = self.bounds;
        let half_w = half_extent(width);
        let half_h = half_extent(height);
        let (right_w, bottom_h) = match self.config.split_rounding {
            SplitRounding::Exact => (width - half_w, height - half_h),
            SplitRounding::Truncate => (half_w, half_h),
        };
        let depth = self.depth + 1;
        let config = self.config;

        self.children = Some(Box::new([
            QuadTree::with_depth(Rectangle::new(x, y, half_w, half_h), depth, config),
            QuadTree::with_depth(Rectangle::new(x + half_w, y, right_w, half_h), depth, config),
            QuadTree::with_depth(Rectangle::new(x, y + half_h, half_w, bottom_h), depth, config),
            QuadTree::with_depth(
                Rectangle::new(x + half_w, y + half_h, right_w, bottom_h),
                depth,
                config,
            ),
        ]));
        trace!(depth = self.depth, x, y, width, height, "split quadtree node");
    }

    /// The single child that would hold `rect`, or `None` on a leaf or when
    /// `rect` crosses a mid-line.
    pub fn classify_quadrant(&self, rect: &Rectangle) -> Option<Quadrant> {
        if self.children.is_none() {
            return None;
        }
        Midlines::of(&self.bounds).classify(rect)
    }

    /// Stores `payload` under `rect`.
    ///
    /// `rect` must have finite coordinates and non-negative extents. Rectangles
    /// outside this node's bounds are accepted and kept wherever quadrant
    /// classification stops.
    pub fn insert(&mut self, payload: T, rect: Rectangle) {
        debug_assert!(rect.is_valid(), "invalid rectangle {:?}", rect);
        self.place(Entry::new(payload, rect));
    }

    /// Like [`QuadTree::insert`], but rejects rectangles with non-finite
    /// coordinates or negative extents.
    pub fn try_insert(&mut self, payload: T, rect: Rectangle) -> QuadtreeResult<()> {
        if !rect.is_valid() {
            return Err(QuadtreeError::InvalidRectangleDims {
                width: rect.width,
                height: rect.height,
            });
        }
        self.place(Entry::new(payload, rect));
        Ok(())
    }

    fn place(&mut self, entry: Entry<T>) {
        if !rectangle_contains_rectangle(&self.bounds, &entry.rect) {
            trace!(rect = ?entry.rect, bounds = ?self.bounds, "inserting rectangle outside node bounds");
        }
        self.insert_entry(entry);
    }

    fn insert_entry(&mut self, entry: Entry<T>) {
        if let Some(quadrant) = self.classify_quadrant(&entry.rect) {
            if let Some(children) = self.children.as_mut() {
                children[quadrant.index()].insert_entry(entry);
                return;
            }
        }

        let overflowing = self.children.is_none()
            && self.objects.len() >= self.config.node_capacity
            && self.depth < self.config.max_depth;
        self.objects.push(entry);
        if overflowing {
            self.split();
            self.redistribute();
        }
    }

    /// Pushes every held entry that fits a single child down into it.
    fn redistribute(&mut self) {
        let midlines = Midlines::of(&self.bounds);
        let Some(children) = self.children.as_mut() else {
            return;
        };
        for entry in std::mem::take(&mut self.objects) {
            match midlines.classify(&entry.rect) {
                Some(quadrant) => children[quadrant.index()].insert_entry(entry),
                None => self.objects.push(entry),
            }
        }
    }
}

fn validate_bounds(bounds: &Rectangle) -> QuadtreeResult<()> {
    if !bounds.is_valid() || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Err(QuadtreeError::InvalidBounds {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}
