//! Reusable UI components for the Harborline page
//!
//! All components render plain elements with class names and leave
//! behavior to the callbacks they are given.

mod button;
mod faq_item;
mod icon;
mod input;
mod slide_indicators;
mod toast_stack;

pub use button::*;
pub use faq_item::*;
pub use icon::*;
pub use input::*;
pub use slide_indicators::*;
pub use toast_stack::*;
