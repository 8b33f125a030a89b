//! Traversal over PowerShell syntax trees.
//!
//! - [`Rewriter`]: one `visit_*` method per node kind, each defaulting to a
//!   `walk_*` function that rebuilds the node from rewritten children
//! - [`SimpleRewriter`]: three hooks (statement, expression, other) layered on
//!   the default walk, with per-kind methods for the cases that need them
//! - [`Query`]: read-only analyses returning a value per node
//!
//! # Usage
//!
//! ```
//! use ps_syntax_rewriter::ir::ps_node::*;
//! use ps_syntax_rewriter::ir::visitor::{rewrite_tree, walk_variable_expression, RewriteContext, Rewriter};
//! use ps_syntax_rewriter::Result;
//!
//! struct Rename;
//!
//! impl Rewriter for Rename {
//!     fn visit_variable_expression(
//!         &mut self,
//!         node: &VariableExpressionAst,
//!         cx: &mut RewriteContext,
//!     ) -> Result<Node> {
//!         let mut var = walk_variable_expression(self, node, cx)?;
//!         var.variable_path = var.variable_path.to_uppercase();
//!         Ok(var.into())
//!     }
//! }
//!
//! let extent = Extent::whole("demo.ps1", "$total");
//! let script = VariableExpressionAst::new(extent, "total", false);
//! let renamed = rewrite_tree(&script, &mut Rename, None)?;
//! assert_eq!(renamed.variable_path, "TOTAL");
//! # Ok::<(), ps_syntax_rewriter::RewriteError>(())
//! ```
//!
//! # Pattern
//!
//! Each child is rewritten through [`rewrite`], which:
//! 1. Sets the expected shape for the child and pushes its extent as the
//!    factory's anchor
//! 2. Dispatches on the child's kind via `visit_node`
//! 3. Coerces the result to the expected shape
//! 4. Restores both pieces of state, also when the rewrite fails
//!
//! Parents are rebuilt only after all their children rewrote successfully, so
//! a failed traversal never yields a partial tree.

mod context;
mod query;
mod rewriter;
mod simple;

pub use context::RewriteContext;
pub use query::{query_descendants, Query};
pub use rewriter::*;
pub use simple::SimpleRewriter;
