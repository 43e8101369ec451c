mod edge;
mod error;
mod model;
mod scatter;

pub use edge::{Edge, Edges};
pub use error::GraphError;
pub use model::{GraphModel, NodeId};
pub use scatter::{PositionProvider, SphereScatter};
