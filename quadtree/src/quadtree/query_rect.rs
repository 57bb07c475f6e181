use super::types::Midlines;
use super::*;
use crate::collision_detection::rectangle_rectangle;
use smallvec::SmallVec;

const QUERY_STACK_INLINE: usize = 32;

impl<T> QuadTree<T> {
    /// Candidate payloads for `rect`.
    ///
    /// Returns everything stored on the single descent path that quadrant
    /// classification picks for `rect`: this node's entries, then the
    /// classified child's, and so on. Entries are not filtered by exact
    /// intersection, and entries in sibling quadrants are never visited, so
    /// callers must run their own collision test on the result.
    pub fn query_region(&self, rect: &Rectangle) -> Vec<&T> {
        let mut found = Vec::new();
        self.query_region_with(rect, |payload| found.push(payload));
        found
    }

    pub fn query_region_with<'a, F>(&'a self, rect: &Rectangle, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let mut node = self;
        loop {
            for entry in &node.objects {
                f(&entry.payload);
            }
            match (node.classify_quadrant(rect), node.children.as_deref()) {
                (Some(quadrant), Some(children)) => node = &children[quadrant.index()],
                _ => return,
            }
        }
    }

    /// Payloads whose stored rectangle intersects `rect`, across every
    /// quadrant that could hold one. Shared edges do not count as overlap.
    pub fn query_intersecting(&self, rect: &Rectangle) -> Vec<&T> {
        let mut found = Vec::new();
        self.query_intersecting_with(rect, |payload| found.push(payload));
        found
    }

    pub fn query_intersecting_with<'a, F>(&'a self, rect: &Rectangle, mut f: F)
    where
        F: FnMut(&'a T),
    {
        let mut stack: SmallVec<[&'a QuadTree<T>; QUERY_STACK_INLINE]> = SmallVec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            for entry in &node.objects {
                if rectangle_rectangle(&entry.rect, rect) {
                    f(&entry.payload);
                }
            }
            let Some(children) = node.children.as_deref() else {
                continue;
            };
            // A child only holds rectangles lying entirely on its side of both
            // mid-lines, so it can be skipped when the query stays on the other side.
            let mid = Midlines::of(&node.bounds);
            let reaches_left = rect.left() < mid.x;
            let reaches_right = rect.right() > mid.x;
            let reaches_top = rect.top() < mid.y;
            let reaches_bottom = rect.bottom() > mid.y;
            if reaches_bottom && reaches_right {
                stack.push(&children[Quadrant::BottomRight.index()]);
            }
            if reaches_bottom && reaches_left {
                stack.push(&children[Quadrant::BottomLeft.index()]);
            }
            if reaches_top && reaches_right {
                stack.push(&children[Quadrant::TopRight.index()]);
            }
            if reaches_top && reaches_left {
                stack.push(&children[Quadrant::TopLeft.index()]);
            }
        }
    }
}
