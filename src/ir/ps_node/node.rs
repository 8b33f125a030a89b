//! The `Node` union over every concrete kind, its borrowed view `NodeRef`, and
//! the `Ast` trait implemented by both and by each concrete struct.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::for_each_kind;
use super::extent::Extent;
use super::node_types::*;
use crate::error::{Result, RewriteError};

/// Anything that sits in a syntax tree: a `Node`, a borrowed `NodeRef`, or one
/// of the concrete `XxxAst` structs.
pub trait Ast {
    fn kind(&self) -> NodeKind;
    fn extent(&self) -> &Extent;
    fn as_node_ref(&self) -> NodeRef<'_>;
}

/// Implemented by every concrete node struct.
pub trait HasKind: Sized {
    const KIND: NodeKind;

    /// Borrows the concrete node out of `node` when the kinds agree.
    fn from_ref(node: &Node) -> Option<&Self>;
}

/// Recovers a concrete value from a `Node`, failing when the kinds differ.
pub trait FromNode: Sized {
    fn from_node(node: Node) -> Result<Self>;
}

macro_rules! define_nodes {
    ($( $variant:ident($ty:ident) => $visit:ident, $walk:ident, $witness:ident, $route:ident; )*) => {
        /// One node of any kind. Owns its children exclusively, so `clone` is a
        /// deep copy and two trees never share structure.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type")]
        pub enum Node {
            $( $variant($ty), )*
        }

        /// A borrowed view of any node, including ones held in typed slots.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum NodeRef<'a> {
            $( $variant(&'a $ty), )*
        }

        /// Fieldless tag identifying a node kind at runtime.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum NodeKind {
            $( $variant, )*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( NodeKind::$variant => stringify!($variant), )*
                }
            }
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( Node::$variant(_) => NodeKind::$variant, )*
                }
            }

            pub fn extent(&self) -> &Extent {
                match self {
                    $( Node::$variant(n) => &n.extent, )*
                }
            }

            pub fn as_node_ref(&self) -> NodeRef<'_> {
                match self {
                    $( Node::$variant(n) => NodeRef::$variant(n), )*
                }
            }
        }

        impl<'a> NodeRef<'a> {
            pub fn kind(self) -> NodeKind {
                match self {
                    $( NodeRef::$variant(_) => NodeKind::$variant, )*
                }
            }

            pub fn extent(self) -> &'a Extent {
                match self {
                    $( NodeRef::$variant(n) => &n.extent, )*
                }
            }

            /// Deep-copies the viewed node into an owned `Node`.
            pub fn to_node(self) -> Node {
                match self {
                    $( NodeRef::$variant(n) => Node::$variant(n.clone()), )*
                }
            }
        }

        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }

            impl HasKind for $ty {
                const KIND: NodeKind = NodeKind::$variant;

                fn from_ref(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$variant(n) => Some(n),
                        _ => None,
                    }
                }
            }

            impl FromNode for $ty {
                fn from_node(node: Node) -> Result<Self> {
                    match node {
                        Node::$variant(n) => Ok(n),
                        other => Err(RewriteError::KindMismatch {
                            expected: NodeKind::$variant,
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl Ast for $ty {
                fn kind(&self) -> NodeKind {
                    NodeKind::$variant
                }

                fn extent(&self) -> &Extent {
                    &self.extent
                }

                fn as_node_ref(&self) -> NodeRef<'_> {
                    NodeRef::$variant(self)
                }
            }
        )*
    };
}

for_each_kind!(define_nodes);

impl FromNode for Node {
    fn from_node(node: Node) -> Result<Self> {
        Ok(node)
    }
}

impl Ast for Node {
    fn kind(&self) -> NodeKind {
        Node::kind(self)
    }

    fn extent(&self) -> &Extent {
        Node::extent(self)
    }

    fn as_node_ref(&self) -> NodeRef<'_> {
        Node::as_node_ref(self)
    }
}

impl Ast for NodeRef<'_> {
    fn kind(&self) -> NodeKind {
        NodeRef::kind(*self)
    }

    fn extent(&self) -> &Extent {
        NodeRef::extent(*self)
    }

    fn as_node_ref(&self) -> NodeRef<'_> {
        *self
    }
}

impl<T: Ast + ?Sized> Ast for Box<T> {
    fn kind(&self) -> NodeKind {
        (**self).kind()
    }

    fn extent(&self) -> &Extent {
        (**self).extent()
    }

    fn as_node_ref(&self) -> NodeRef<'_> {
        (**self).as_node_ref()
    }
}

impl<T: FromNode> FromNode for Box<T> {
    fn from_node(node: Node) -> Result<Self> {
        T::from_node(node).map(Box::new)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
