//! Debug overlay description.
//!
//! The tree never draws. `debug_overlay` lists what a renderer should stroke
//! to visualize it: mid-lines of split nodes, the local entry count of each
//! node, and the outline of each stored rectangle tinted by node depth.

use super::*;

/// Outline colours indexed by `depth - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Colour for nodes at `depth`. Depths past the end of the palette reuse
    /// the last colour; an empty palette yields `None`.
    pub fn color_for_depth(&self, depth: usize) -> Option<&str> {
        let index = depth.saturating_sub(1).min(self.colors.len().checked_sub(1)?);
        self.colors.get(index).map(String::as_str)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(["black", "white", "red", "yellow", "green"])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayItem<'a> {
    Line {
        from: (f32, f32),
        to: (f32, f32),
    },
    CountLabel {
        at: (f32, f32),
        count: usize,
    },
    Outline {
        rect: Rectangle,
        color: Option<&'a str>,
    },
}

impl<T> QuadTree<T> {
    /// Overlay primitives for this node and its descendants, parents first.
    pub fn debug_overlay<'a>(&self, palette: &'a Palette) -> Vec<OverlayItem<'a>> {
        let mut items = Vec::new();
        self.collect_overlay(palette, &mut items);
        items
    }

    fn collect_overlay<'a>(&self, palette: &'a Palette, items: &mut Vec<OverlayItem<'a>>) {
        let Rectangle {
            x,
            y,
            width,
            height,
        } = self.bounds;
        let center = (x + width / 2.0, y + height / 2.0);

        if self.children.is_some() {
            items.push(OverlayItem::Line {
                from: (x, center.1),
                to: (x + width, center.1),
            });
            items.push(OverlayItem::Line {
                from: (center.0, y),
                to: (center.0, y + height),
            });
        }
        items.push(OverlayItem::CountLabel {
            at: center,
            count: self.objects.len(),
        });

        let color = palette.color_for_depth(self.depth);
        items.extend(self.objects.iter().map(|entry| OverlayItem::Outline {
            rect: entry.rect,
            color,
        }));

        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.collect_overlay(palette, items);
            }
        }
    }
}
