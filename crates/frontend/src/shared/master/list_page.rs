use contracts::shared::pagination::row_number;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

use super::list_vm::MasterListVm;
use super::MasterView;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::date_cell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

type CellRenderer<R> = Arc<dyn Fn(&R) -> AnyView + Send + Sync>;

/// One resource-specific column of a master table.
pub struct Column<R> {
    pub title: &'static str,
    pub min_width: f32,
    render: CellRenderer<R>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            min_width: self.min_width,
            render: self.render.clone(),
        }
    }
}

impl<R: 'static> Column<R> {
    pub fn new(
        title: &'static str,
        min_width: f32,
        render: impl Fn(&R) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            title,
            min_width,
            render: Arc::new(render),
        }
    }

    /// `(title, min_width)` of the header cell
    pub fn header(&self) -> (&'static str, f32) {
        (self.title, self.min_width)
    }

    /// Plain truncated text cell.
    pub fn text(
        title: &'static str,
        min_width: f32,
        value: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(title, min_width, move |row| {
            let text = value(row);
            view! { <TableCellLayout truncate=true>{text}</TableCellLayout> }.into_any()
        })
    }
}

/// Paged master table: header with Add/Refresh, search with optional
/// resource filters, "#" / columns / Status / Created At / Actions, pagination.
#[component]
pub fn MasterListPage<R>(
    vm: MasterListVm<R>,
    columns: Vec<Column<R>>,
    /// Extra filter controls rendered next to the search box
    #[prop(optional)]
    filters: Option<ChildrenFn>,
    /// Replaces the default confirm-and-toggle status flow
    #[prop(optional)]
    on_toggle_status: Option<Callback<R>>,
    #[prop(optional)]
    search_placeholder: Option<&'static str>,
) -> impl IntoView
where
    R: MasterView,
{
    let state = vm.state;
    let search_text = RwSignal::new(String::new());
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    let toggle_status = move |row: R| match on_toggle_status {
        Some(handler) => handler.run(row),
        None => vm.toggle_status(&row),
    };

    let header_cells = columns
        .iter()
        .map(|col| {
            let (title, width) = col.header();
            view! {
                <TableHeaderCell resizable=false min_width=width>
                    {title}
                </TableHeaderCell>
            }
        })
        .collect_view();

    let rows = move || {
        state.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    let serial = row_number(&s.meta, idx);
                    let cells = columns
                        .iter()
                        .map(|col| {
                            let cell = (col.render)(row);
                            view! { <TableCell>{cell}</TableCell> }
                        })
                        .collect_view();
                    let id = row.id();
                    let active = row.is_active();
                    let created = date_cell(row.created_at());
                    let row_for_status = row.clone();
                    let row_for_edit = row.clone();

                    view! {
                        <TableRow>
                            <TableCell>{serial.to_string()}</TableCell>
                            {cells}
                            <TableCell>
                                <button
                                    class="status-toggle"
                                    title="Change status"
                                    on:click=move |_| toggle_status(row_for_status.clone())
                                >
                                    <StatusBadge active=active />
                                </button>
                            </TableCell>
                            <TableCell>{created}</TableCell>
                            <TableCell>
                                <div class="table__actions">
                                    <button class="icon-btn" title="View" on:click=move |_| vm.show_details(id)>
                                        {icon("eye")}
                                    </button>
                                    <button class="icon-btn" title="Edit" on:click=move |_| vm.open_edit(&row_for_edit)>
                                        {icon("edit")}
                                    </button>
                                </div>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id=page_id(&R::full_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::list_name()}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || state.with(|s| s.meta.total.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_new()>
                        {icon("plus")}
                        {format!("Add {}", R::element_name())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 360px;">
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search"</Label>
                                    <Input
                                        value=search_text
                                        placeholder=search_placeholder.unwrap_or("Search...")
                                    />
                                </Flex>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.search(&search_text.get_untracked())
                                disabled=is_loading
                            >
                                {icon("search")}
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| {
                                    search_text.set(String::new());
                                    vm.search("");
                                }
                            >
                                "Clear"
                            </Button>
                            {filters.map(|f| f())}
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=format!("{}-table", R::full_name()) attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"#"</TableHeaderCell>
                                {header_cells}
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Created At"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>

                    <Show when=move || is_loading.get()>
                        <div class="table-loading"><Spinner /></div>
                    </Show>
                    <Show when=move || state.with(|s| s.is_loaded && !s.is_loading && s.items.is_empty())>
                        <div class="table-empty">"No records found"</div>
                    </Show>
                </div>

                <PaginationControls
                    meta=Signal::derive(move || state.with(|s| s.meta))
                    on_page_change=Callback::new(move |page| vm.go_to_page(page))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a011_brand::Brand;

    #[test]
    fn test_header_cells_follow_column_order() {
        let columns = vec![
            Column::text("Name", 180.0, |row: &Brand| row.name.clone()),
            Column::text("Code", 60.0, |row: &Brand| row.id.to_string()),
        ];
        let headers: Vec<_> = columns.iter().map(Column::header).collect();
        assert_eq!(headers, vec![("Name", 180.0), ("Code", 60.0)]);
        assert_eq!(columns[1].clone().header(), ("Code", 60.0));
    }
}
