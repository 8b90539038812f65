pub mod accordion;
pub mod constants;
pub mod layout;
pub mod parallax;
pub mod pointer;
pub mod scene;
pub mod shine;
pub mod waitlist;

pub use accordion::*;
pub use constants::*;
pub use layout::*;
pub use parallax::*;
pub use pointer::*;
pub use scene::*;
pub use shine::*;
pub use waitlist::*;
