use contracts::shared::status;
use leptos::prelude::*;
use thaw::*;

use super::MasterView;
use crate::shared::modal_stack::ModalStackService;

/// Read-only record dialog opened from the eye button of a list row.
pub fn open_view_modal<R: MasterView>(modal: ModalStackService, record: R) {
    let title = format!("{} Details", R::element_name());
    let mut rows = record.detail_rows();
    rows.push(("Status", status::label(record.is_active()).to_string()));
    let image = record.image_url().filter(|url| !url.is_empty());

    modal.push_with_frame(
        Some("width: min(640px, 95vw);".to_string()),
        Some("modal--view".to_string()),
        move |handle| {
            let lines = rows
                .iter()
                .map(|(label, value)| {
                    let value = if value.trim().is_empty() {
                        "-".to_string()
                    } else {
                        value.clone()
                    };
                    view! {
                        <div class="details-grid__row">
                            <dt class="details-grid__label">{*label}</dt>
                            <dd class="details-grid__value">{value}</dd>
                        </div>
                    }
                })
                .collect_view();
            let image_view = image
                .clone()
                .map(|url| view! { <img class="details-grid__image" src=url alt="image" /> });

            view! {
                <div class="view-modal">
                    <div class="modal__header">
                        <h3 class="modal__title">{title.clone()}</h3>
                    </div>
                    <dl class="details-grid">{lines}</dl>
                    {image_view}
                    <div class="modal__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| handle.close()
                        >
                            "Close"
                        </Button>
                    </div>
                </div>
            }
            .into_any()
        },
    );
}
