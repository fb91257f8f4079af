pub mod common;
pub mod contact_form;
pub mod content;
pub mod fly;
pub mod header;
pub mod hero;
pub mod icon;
pub mod pages;
pub mod sections;
pub mod tracking;

pub use icon::{Icon, icons};
