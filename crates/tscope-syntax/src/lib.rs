//! Syntax tree types for the tscope scope analyzer.
//!
//! This crate is the boundary to the syntax frontend. It does not parse
//! anything; it defines the node shapes a frontend lowers into and the
//! generic child-slot table the analyzer walks with:
//! - `SyntaxKind` - Node type tags
//! - `NodeIndex` / `NodeList` - Stable node handles
//! - `Node` / `NodeArena` - Pooled node storage with `add_*` construction
//!   methods and `get_*` accessors
//! - `each_child` - Per-kind child slots in source order

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod kind;
pub use kind::{SyntaxKind, VariableDeclKind};

pub mod node;
pub use node::{AssignmentOperator, Node, NodeArena};

pub mod node_arena;

pub mod child_slots;
pub use child_slots::each_child;
