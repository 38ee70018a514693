//! Design add/edit screen. The form is sent as multipart because it may
//! carry an image.
//!
//! - model.rs: FormData building and submission
//! - view.rs: the form

mod model;
mod view;

pub use view::DesignDetails;
