//! Core, DOM-free primitives and helpers for the page widgets.
pub mod breadcrumb;
pub mod dispatch;
pub mod filter;
pub mod font;
pub mod form;
pub mod install;
pub mod prefs;
pub mod theme;
pub mod toast;
pub mod validation;
