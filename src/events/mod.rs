pub mod buttons;
pub mod pointer;

pub use buttons::wire_buttons;
pub use pointer::{wire_pointer_handlers, PointerWiring};
