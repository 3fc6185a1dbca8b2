//! Core types for the Wayfind indoor navigation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the rest of the workspace:
//! grid positions, cell contents, and the layout error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod position;

pub use cell::{
    is_structural_symbol, Cell, FloorGrid, CORRIDOR_SYMBOL, STAIR_SYMBOL, WALL_SYMBOL,
};
pub use error::GridError;
pub use position::Position;
