pub mod choreographer;
pub mod config;
pub mod constants;
pub mod content;
pub mod frame;
pub mod picking;
pub mod popup;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod timers;
pub mod tracker;

pub use choreographer::*;
pub use config::*;
pub use constants::*;
pub use content::*;
pub use frame::*;
pub use picking::*;
pub use popup::*;
pub use scene::*;
pub use scroll::*;
pub use state::*;
pub use timers::*;
pub use tracker::*;
