pub mod pointer;
pub mod window;

pub use pointer::{wire_input_handlers, InputWiring};
pub use window::{wire_info_box, wire_resize};
