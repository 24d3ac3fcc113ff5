//! Flow networks in residual representation. Every inserted edge is stored as a pair of
//! arcs with consecutive indices (`2i` forward, `2i+1` backward), so the reverse of arc
//! `a` is `a ^ 1`.

pub mod max_flow;
pub mod min_cost_flow;

pub use max_flow::*;
pub use min_cost_flow::*;

pub type Capacity = i64;
pub type Cost = i64;

/// Handle of an edge returned on insertion; used to query its flow afterwards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArcId(pub(crate) usize);

impl ArcId {
    fn reverse(self) -> usize {
        self.0 ^ 1
    }
}
