use super::*;
use tracing::debug;

impl<T> QuadTree<T> {
    /// Entries stored in this node and all of its descendants.
    pub fn count(&self) -> usize {
        let nested: usize = self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(QuadTree::count).sum());
        self.objects.len() + nested
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
            && self
                .children
                .as_ref()
                .map_or(true, |children| children.iter().all(QuadTree::is_empty))
    }

    /// Drops every entry and child, leaving an empty leaf with the same
    /// bounds, depth and configuration.
    pub fn clear(&mut self) {
        if self.depth == 1 && (!self.objects.is_empty() || self.children.is_some()) {
            debug!(dropped = self.count(), "clearing quadtree");
        }
        self.objects.clear();
        if let Some(mut children) = self.children.take() {
            for child in children.iter_mut() {
                child.clear();
            }
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(QuadTree::node_count).sum())
    }

    /// Depth of the deepest node below (or at) this one.
    pub fn max_depth_reached(&self) -> usize {
        self.children.as_ref().map_or(self.depth, |children| {
            children
                .iter()
                .map(QuadTree::max_depth_reached)
                .max()
                .unwrap_or(self.depth)
        })
    }

    /// Bounds of this node and every descendant, parents before children.
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(self.bounds);
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.all_node_bounding_boxes(bounding_boxes);
            }
        }
    }

    /// Every stored entry, parents before children.
    pub fn all_entries<'a>(&'a self, entries: &mut Vec<&'a Entry<T>>) {
        entries.extend(self.objects.iter());
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.all_entries(entries);
            }
        }
    }
}
