//! Sprite quadtree.
//!
//! Every node is a `QuadTree<T>`: a leaf holding a short list of entries, or
//! a split node owning exactly four children that quarter its bounds. The
//! tree is meant to be filled once per update, queried, then cleared.

use common::shapes::Rectangle;

mod config;
mod core;
mod maintenance;
mod overlay;
mod query_rect;
mod types;

pub use config::{Config, SplitRounding};
pub use overlay::{OverlayItem, Palette};
pub use types::{Entry, Quadrant};

#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    bounds: Rectangle,
    depth: usize,
    config: Config,
    objects: Vec<Entry<T>>,
    children: Option<Box<[QuadTree<T>; 4]>>,
}

impl<T> QuadTree<T> {
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Entries stored at this node only, not its descendants.
    pub fn objects(&self) -> &[Entry<T>] {
        &self.objects
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Children in `Quadrant` order, or `None` for a leaf.
    pub fn children(&self) -> Option<&[QuadTree<T>; 4]> {
        self.children.as_deref()
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree<T>> {
        self.children
            .as_ref()
            .map(|children| &children[quadrant.index()])
    }
}
