use crate::error::{QuadtreeError, QuadtreeResult};

/// How `split` sizes the right and bottom children when the parent's
/// extent does not halve evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SplitRounding {
    /// Right/bottom children take the remainder, so children tile the parent exactly.
    #[default]
    Exact,
    /// Every child is `trunc(width / 2) x trunc(height / 2)`. Odd extents leave
    /// a one-unit strip along the right and bottom edges uncovered.
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Objects a leaf holds before the next insert splits it.
    pub node_capacity: usize,
    /// Depth of the deepest node that may exist. The root is depth 1.
    pub max_depth: usize,
    pub split_rounding: SplitRounding,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 4,
            max_depth: 4,
            split_rounding: SplitRounding::Exact,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.node_capacity == 0 || self.max_depth == 0 {
            return Err(QuadtreeError::InvalidConfig {
                node_capacity: self.node_capacity,
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }
}
