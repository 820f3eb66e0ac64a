//! DOM widgets attached to the server-rendered page.
pub(crate) mod accessibility;
pub mod breadcrumb;
pub(crate) mod disclosure;
pub(crate) mod dom;
pub(crate) mod form;
pub(crate) mod lazy_image;
pub mod modal;
pub(crate) mod search_filter;
pub mod skeleton;
pub mod toast;
