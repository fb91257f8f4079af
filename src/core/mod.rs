//! Core domain logic for the HEATWORKS site
//!
//! Everything here is free of DOM access so it can be unit tested on the
//! host. Browser glue lives in `crate::ui`.

#[cfg(feature = "ssr")]
pub mod api;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod faq;
pub mod fly;
pub mod forms;
pub mod parallax;
pub mod pricing;
