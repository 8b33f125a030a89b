//! Execution boundary for rewritten scripts.
//!
//! The engine never runs scripts itself. A host supplies an [`Invoker`] that
//! executes a script block and writes whatever it produces to an
//! [`OutputSink`].

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::ir::ps_node::ScriptBlockAst;
use crate::ir::visitor::{rewrite_tree, Rewriter};

/// Receives the values a script writes to its output stream, in order.
pub trait OutputSink {
    fn write(&mut self, value: Value) -> anyhow::Result<()>;
}

impl OutputSink for Vec<Value> {
    fn write(&mut self, value: Value) -> anyhow::Result<()> {
        self.push(value);
        Ok(())
    }
}

/// Common interface for script execution hosts.
///
/// `invoke` runs synchronously: every value is written to `sink` before it
/// returns.
pub trait Invoker {
    fn invoke(&self, script: &ScriptBlockAst, sink: &mut dyn OutputSink) -> anyhow::Result<()>;

    /// Get a human-readable name for this host (for logging/debugging)
    fn backend_name(&self) -> &'static str;
}

/// Rewrites `script` with `rewriter`, then runs the result on `invoker`.
///
/// Returns the rewritten script. Nothing is executed when the rewrite fails.
pub fn rewrite_and_invoke<R>(
    invoker: &dyn Invoker,
    script: &ScriptBlockAst,
    rewriter: &mut R,
    sink: &mut dyn OutputSink,
) -> Result<ScriptBlockAst>
where
    R: Rewriter + ?Sized,
{
    let rewritten = rewrite_tree(script, rewriter, None)?;
    debug!(backend = invoker.backend_name(), "invoking rewritten script");
    invoker.invoke(&rewritten, sink)?;
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::ps_node::*;
    use crate::ir::visitor::{query_descendants, Identity, Query};

    /// Emits every constant in the script, in source order.
    struct Echo;

    struct Constants;

    impl Query for Constants {
        type Output = Option<Value>;

        fn visit_constant_expression(&mut self, node: &ConstantExpressionAst) -> Option<Value> {
            serde_json::to_value(&node.value).ok()
        }
    }

    impl Invoker for Echo {
        fn invoke(&self, script: &ScriptBlockAst, sink: &mut dyn OutputSink) -> anyhow::Result<()> {
            for value in query_descendants(&mut Constants, script).into_iter().flatten() {
                sink.write(value)?;
            }
            Ok(())
        }

        fn backend_name(&self) -> &'static str {
            "echo"
        }
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let extent = Extent::from_offsets("i.ps1", "1; 2", 0, 4);
        let statements = vec![
            Node::from(ConstantExpressionAst::new(extent.clone(), 1i64)),
            Node::from(ConstantExpressionAst::new(extent.clone(), 2i64)),
        ];
        let statements = statements
            .into_iter()
            .map(|e| CommandExpressionAst::new(extent.clone(), e, Vec::new()).map(Node::from))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        let script = ScriptBlockAst::from_statements(extent, statements).unwrap();

        let mut sink: Vec<Value> = Vec::new();
        let rewritten = rewrite_and_invoke(&Echo, &script, &mut Identity, &mut sink).unwrap();
        assert_eq!(rewritten, script);
        assert_eq!(sink.len(), 2);
    }
}
