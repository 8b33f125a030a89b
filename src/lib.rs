#![recursion_limit = "1024"]
pub mod error;
pub mod invoke;
pub mod ir;
pub mod logging;
pub mod rewriters;

pub use error::{Result, RewriteError};
pub use ir::kind::{AstType, Category, NodeKind};
pub use ir::shape::ExpectedShape;
pub use ir::visitor::{rewrite_tree, rewrite_tree_with, RewriteContext, Rewriter, SimpleRewriter};
