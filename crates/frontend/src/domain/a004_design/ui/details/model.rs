use contracts::domain::a004_design::{Design, DesignForm};
use contracts::domain::common::MasterResource;
use contracts::shared::api::ApiError;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::shared::api_client;

/// Multipart updates are POSTed with a method override.
const METHOD_FIELD: &str = "_method";

fn form_data_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("could not build form data: {:?}", err))
}

fn build_form_data(form: &DesignForm, image: Option<&File>, update: bool) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(form_data_error)?;
    for (name, value) in form.multipart_fields() {
        data.append_with_str(name, &value).map_err(form_data_error)?;
    }
    if let Some(file) = image {
        data.append_with_blob_and_filename("image", file, &file.name())
            .map_err(form_data_error)?;
    }
    if update {
        data.append_with_str(METHOD_FIELD, "PUT").map_err(form_data_error)?;
    }
    Ok(data)
}

/// `POST design` or `POST design/{id}` with `_method=PUT`.
pub async fn save(form: DesignForm, image: Option<File>, id: Option<i64>) -> Result<String, ApiError> {
    let data = build_form_data(&form, image.as_ref(), id.is_some())?;
    let path = match id {
        Some(id) => Design::item_path(id),
        None => Design::resource_path().to_string(),
    };
    api_client::submit_multipart(&path, &data).await
}
