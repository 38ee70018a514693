pub mod api;
pub mod ids;
pub mod lookup;
pub mod pagination;
pub mod status;
pub mod validation;
