use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "rectangle must have finite coordinates and non-negative width/height (width: {width}, height: {height})"
    )]
    InvalidRectangleDims { width: f32, height: f32 },
    #[error(
        "node bounds must be finite with positive width/height (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    #[error(
        "node_capacity and max_depth must both be at least 1 (node_capacity: {node_capacity}, max_depth: {max_depth})"
    )]
    InvalidConfig {
        node_capacity: usize,
        max_depth: usize,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
