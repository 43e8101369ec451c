pub mod edges;
pub mod picking;
pub mod plugin;
pub mod pointer;
pub mod scene;
pub mod sync;
