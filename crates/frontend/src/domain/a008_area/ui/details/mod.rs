//! Area add/edit screen.
//!
//! - view_model.rs: drives the state → districts → locations cascade
//! - view.rs: the form

mod view;
mod view_model;

pub use view::AreaDetails;
