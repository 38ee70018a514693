use contracts::domain::a004_design::Design;
use contracts::shared::ids::{id_to_value, parse_id};
use contracts::shared::lookup::{endpoints, to_pairs, TitledOption};
use contracts::shared::validation::{ImageMeta, DESIGN_IMAGE};
use leptos::prelude::*;
use web_sys::File;

use super::model;
use crate::shared::components::ui::{ImageInput, Input, Select};
use crate::shared::lookup_api::{self, load_options, Pairs};
use crate::shared::master::{MasterFormPage, MasterFormVm};

fn titled_options(endpoint: &'static str, vm: MasterFormVm<Design>) -> RwSignal<Pairs> {
    let target = RwSignal::new(Pairs::new());
    load_options(
        target,
        lookup_api::titled(endpoint),
        |options: &Vec<TitledOption>| to_pairs(options),
        vm.toast(),
    );
    target
}

fn image_meta(file: &File) -> ImageMeta {
    ImageMeta {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

#[component]
pub fn DesignDetails(id: Option<i64>) -> impl IntoView {
    let vm = MasterFormVm::<Design>::new(id);
    let design_types = titled_options(endpoints::DESIGN_TYPES, vm);
    let colors = titled_options(endpoints::COLORS, vm);
    let finishings = titled_options(endpoints::FINISHING, vm);
    let picked = StoredValue::new_local(None::<File>);

    vm.load(|_| {});

    let on_pick = Callback::new(move |file: Option<File>| {
        let meta = file.as_ref().map(image_meta);
        picked.set_value(file);
        vm.set("image", |f| f.new_image = meta);
    });
    let on_save = Callback::new(move |_| {
        let file = picked.get_value();
        vm.save_with(move |form, id| model::save(form, file, id));
    });
    let on_reset = Callback::new(move |_| picked.set_value(None));

    let status = (vm.field(|f| f.status), vm.setter("status", |f, v| f.status = v));

    view! {
        <MasterFormPage vm=vm status=status on_save=on_save on_reset=on_reset>
            <Input
                label="Design Number"
                required=true
                value=vm.field(|f| f.design_number.clone())
                on_input=vm.setter("design_number", |f, v| f.design_number = v)
                error=vm.error("design_number")
            />
            <Select
                label="Design Type"
                required=true
                value=vm.field(|f| id_to_value(f.design_type_id))
                on_change=vm.setter("design_type_id", |f, v: String| f.design_type_id = parse_id(&v))
                options=design_types
                error=vm.error("design_type_id")
            />
            <Select
                label="Panel Color"
                required=true
                value=vm.field(|f| id_to_value(f.panel_color_id))
                on_change=vm.setter("panel_color_id", |f, v: String| f.panel_color_id = parse_id(&v))
                options=colors
                error=vm.error("panel_color_id")
            />
            <Select
                label="A-Section Color"
                required=true
                value=vm.field(|f| id_to_value(f.a_section_color_id))
                on_change=vm.setter("a_section_color_id", |f, v: String| {
                    f.a_section_color_id = parse_id(&v)
                })
                options=colors
                error=vm.error("a_section_color_id")
            />
            <Select
                label="Frame Color"
                required=true
                value=vm.field(|f| id_to_value(f.frame_color_id))
                on_change=vm.setter("frame_color_id", |f, v: String| f.frame_color_id = parse_id(&v))
                options=colors
                error=vm.error("frame_color_id")
            />
            <Select
                label="Finishing"
                required=true
                value=vm.field(|f| id_to_value(f.finishing_id))
                on_change=vm.setter("finishing_id", |f, v: String| f.finishing_id = parse_id(&v))
                options=finishings
                error=vm.error("finishing_id")
            />
            <ImageInput
                label="Image"
                accept=DESIGN_IMAGE.accept_attr()
                on_pick=on_pick
                current_url=vm.field(|f| f.image.clone())
                error=vm.error("image")
            />
        </MasterFormPage>
    }
}
