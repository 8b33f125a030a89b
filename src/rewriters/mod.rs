//! Ready-made rewriters built on the two-category facade.

pub mod trace;

pub use trace::TraceRewriter;
