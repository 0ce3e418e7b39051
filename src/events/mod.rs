pub mod listener;
pub mod pointer;
pub mod scroll;

pub use listener::Listener;
pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll_handlers;
