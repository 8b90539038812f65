pub mod faq;
pub mod pointer;
pub mod tilt;
pub mod waitlist;

pub use faq::wire_faq_accordions;
pub use pointer::wire_hero_pointer;
pub use tilt::wire_tilt_cards;
pub use waitlist::wire_waitlist_form;
