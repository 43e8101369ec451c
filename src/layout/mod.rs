mod drag;
mod forces;
mod simulator;

pub use drag::{DragState, HitTest, PointerInput};
pub use simulator::LayoutSimulator;
