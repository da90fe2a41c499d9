//! Structure traversal
//!
//! Walks a structure document depth-first and renders every declaration in
//! document order.

mod structure_walker;


pub use structure_walker::*;
