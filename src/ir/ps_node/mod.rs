// Script syntax tree
//
// Immutable node types for the scripting language, split into:
//
// - catalog: the closed list of node kinds, expanded into every per-kind table
// - extent: source positions and spans
// - tokens: operators, flags and literal values carried by nodes
// - node_types: one struct per node kind
// - node: the `Node` union, the `NodeRef` view and the `Ast` trait
// - node_impl: validating constructors
// - node_ref: child enumeration and pre-order traversal

pub(crate) mod catalog;
pub mod extent;
pub mod node;
pub mod node_impl;
pub mod node_ref;
pub mod node_types;
pub mod tokens;

pub use extent::{Extent, ScriptPosition};
pub use node::{Ast, FromNode, HasKind, Node, NodeKind, NodeRef};
pub use node_ref::Descendants;
pub use node_types::*;
pub use tokens::*;
