use serde::{de::DeserializeOwned, Serialize};

use crate::shared::validation::FieldErrors;

/// Editable DTO behind an add/edit screen.
///
/// `Default` is the blank "add" form; the edit screen starts from the
/// `/{res}/{id}/edit` payload.
pub trait MasterForm:
    Clone + Default + PartialEq + DeserializeOwned + Serialize + Send + Sync + 'static
{
    /// Client-side checks; an empty result means the form may be submitted.
    fn validate(&self) -> FieldErrors;
}
