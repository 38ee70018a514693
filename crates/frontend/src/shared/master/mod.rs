//! Building blocks shared by every master screen: the paged list, the
//! view modal and the add/edit form.

pub mod form_page;
pub mod form_vm;
pub mod list_page;
pub mod list_state;
pub mod list_vm;
pub mod view_modal;

pub use form_page::MasterFormPage;
pub use form_vm::MasterFormVm;
pub use list_page::{Column, MasterListPage};
pub use list_state::ListState;
pub use list_vm::MasterListVm;

use contracts::domain::common::MasterResource;

/// Read-only presentation of a record in the view modal.
pub trait MasterView: MasterResource {
    /// `(label, value)` lines of the view modal
    fn detail_rows(&self) -> Vec<(&'static str, String)>;

    fn image_url(&self) -> Option<String> {
        None
    }
}
