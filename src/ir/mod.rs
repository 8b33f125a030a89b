pub mod construct;
pub mod factory;
pub mod kind;
pub mod position;
pub mod ps_node;
pub mod shape;
pub mod update;
pub mod visitor;
