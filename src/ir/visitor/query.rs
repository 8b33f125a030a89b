use crate::ir::ps_node::catalog::for_each_kind;
use crate::ir::ps_node::*;

macro_rules! define_query {
    ($( $variant:ident($ty:ident) => $visit:ident, $walk:ident, $witness:ident, $route:ident; )*) => {
        /// A read-only analysis with one method per node kind.
        ///
        /// Every method returns `Output::default()` unless overridden, so an
        /// analysis only implements the kinds it is interested in. Queries do
        /// not recurse on their own; see [`query_descendants`].
        pub trait Query {
            type Output: Default;

            /// Routes `node` to its kind's `visit_*` method.
            fn query(&mut self, node: NodeRef<'_>) -> Self::Output {
                match node {
                    $( NodeRef::$variant(n) => self.$visit(n), )*
                }
            }

            $(
                fn $visit(&mut self, _node: &$ty) -> Self::Output {
                    Self::Output::default()
                }
            )*
        }
    };
}

for_each_kind!(define_query);

/// Runs `q` on `root` and everything below it, in pre-order.
pub fn query_descendants<Q, A>(q: &mut Q, root: &A) -> Vec<Q::Output>
where
    Q: Query + ?Sized,
    A: Ast + ?Sized,
{
    root.as_node_ref().descendants().map(|node| q.query(node)).collect()
}
