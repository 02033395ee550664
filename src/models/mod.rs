pub mod chart;
pub mod snapshot;
pub mod subgraph;
pub mod swap;

pub use chart::*;
pub use snapshot::*;
pub use subgraph::*;
pub use swap::*;
