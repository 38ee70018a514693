pub mod api_client;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dialogs;
pub mod icons;
pub mod lookup_api;
pub mod master;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
