pub mod errors;
pub mod flow;
pub mod geometry;
pub mod graph;
pub mod io;
pub mod log;
pub mod lp;
pub mod problems;
pub mod utils;

pub mod prelude {
    pub use super::errors::SolveError;
    pub use super::flow::*;
    pub use super::geometry::*;
    pub use super::graph::*;
    pub use super::io::TokenReader;
    pub use super::lp::*;
    pub use super::problems::{Driver, Flow, Problem};
}

#[cfg(test)]
mod testing;
