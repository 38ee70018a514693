//! Common types and traits for all master resources

pub mod master_form;
pub mod master_resource;

pub use master_form::MasterForm;
pub use master_resource::{MasterResource, MasterTab};
