//! Item Table Component
//!
//! Generic checkbox-selectable table: renders the given items under the given
//! columns and relays selection through the provided callbacks.

use leptos::prelude::*;

use crate::models::{ColumnSpec, TransferItem};

/// Row selection descriptor, as the table contract expects
#[derive(Clone, Copy)]
pub struct RowSelection {
    pub selected_row_keys: Signal<Vec<String>>,
    /// Single row toggled: (item, checked)
    pub on_select: Callback<(TransferItem, bool)>,
    /// Header checkbox toggled: (checked, all currently rendered rows)
    pub on_select_all: Callback<(bool, Vec<TransferItem>)>,
}

#[component]
pub fn ItemTable(
    columns: Vec<ColumnSpec>,
    #[prop(into)] filtered_items: Signal<Vec<TransferItem>>,
    row_selection: RowSelection,
    #[prop(into)] list_selected_keys: Signal<Vec<String>>,
    #[prop(into)] on_item_select: Callback<(String, bool)>,
) -> impl IntoView {
    let span = columns.len() + 1;
    let header_cells = columns
        .iter()
        .map(|col| view! { <th>{col.title.clone()}</th> })
        .collect_view();
    let row_columns = columns;

    let all_checked = move || {
        let items = filtered_items.get();
        let selected = row_selection.selected_row_keys.get();
        !items.is_empty() && items.iter().all(|item| selected.contains(&item.key))
    };
    let toggle_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        row_selection
            .on_select_all
            .run((checked, filtered_items.get_untracked()));
    };

    view! {
        <table class="item-table">
            <thead>
                <tr>
                    <th class="item-table-check">
                        <input type="checkbox" prop:checked=all_checked on:change=toggle_all />
                    </th>
                    {header_cells}
                </tr>
            </thead>
            <tbody>
                <Show when=move || filtered_items.get().is_empty()>
                    <tr class="item-table-empty">
                        <td colspan={span.to_string()}>"No data"</td>
                    </tr>
                </Show>
                <For
                    each=move || filtered_items.get()
                    key=|item| item.key.clone()
                    children=move |item| {
                        let key = item.key.clone();
                        let row_checked = {
                            let key = key.clone();
                            move || list_selected_keys.get().contains(&key)
                        };
                        let box_checked = {
                            let key = key.clone();
                            move || list_selected_keys.get().contains(&key)
                        };
                        let on_row_click = {
                            let key = key.clone();
                            move |_: web_sys::MouseEvent| {
                                let checked = !list_selected_keys.get_untracked().contains(&key);
                                on_item_select.run((key.clone(), checked));
                            }
                        };
                        let on_check = {
                            let item = item.clone();
                            move |ev: web_sys::Event| {
                                row_selection
                                    .on_select
                                    .run((item.clone(), event_target_checked(&ev)));
                            }
                        };
                        let cells = row_columns
                            .iter()
                            .map(|col| view! { <td>{item.display_text(&col.field)}</td> })
                            .collect_view();

                        view! {
                            <tr class="item-table-row" class:selected=row_checked on:click=on_row_click>
                                <td class="item-table-check">
                                    <input
                                        type="checkbox"
                                        prop:checked=box_checked
                                        on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                                        on:change=on_check
                                    />
                                </td>
                                {cells}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
