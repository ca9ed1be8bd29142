//! Table Transfer Component
//!
//! The widget itself: a searchable left list of available items and a right
//! list of chosen items, with predefined group shortcuts and a reset action.
//! Owns the target key set; pane bodies are rendered with [`ItemTable`].

use leptos::prelude::*;

use crate::components::item_table::{ItemTable, RowSelection};
use crate::components::transfer::{PaneView, Transfer};
use crate::models::{
    normalize_records, table_columns, Direction, PredefinedGroup, Record, TransferItem,
    TransferOptions,
};
use crate::search;
use crate::selection::{self, TargetAction};

#[component]
pub fn TableTransfer(
    /// Raw item records; each needs a unique `id`
    data: Vec<Record>,
    /// Field names searched in each pane; absent disables search
    #[prop(optional)]
    search_columns: Option<Vec<String>>,
    /// Left pane (field, title) column list
    left_col_titles: Vec<(String, String)>,
    /// Right pane (field, title) column list
    right_col_titles: Vec<(String, String)>,
    /// Resolve a predefined group id to its item keys
    #[prop(into)]
    select_group: Callback<String, Vec<String>>,
    /// Group shortcut buttons shown above the left pane
    predefined_groups: Vec<PredefinedGroup>,
    /// Invoked with the new target key sequence after every change
    #[prop(optional, into)]
    on_change: Option<Callback<Vec<String>>>,
    /// Passthrough configuration for the transfer primitive
    #[prop(optional)]
    options: TransferOptions,
) -> impl IntoView {
    let items = match normalize_records(&data) {
        Ok(items) => items,
        Err(err) => {
            web_sys::console::error_1(
                &format!("[TableTransfer] configuration error: {err}").into(),
            );
            return view! {
                <div class="table-transfer table-transfer-error">
                    {format!("configuration error: {err}")}
                </div>
            }
            .into_any();
        }
    };
    web_sys::console::log_1(&format!("[TableTransfer] {} items", items.len()).into());

    let (target_keys, set_target_keys) = signal(Vec::<String>::new());
    // Decided once at mount; later prop changes do not toggle search
    let show_search = search_columns.is_some();
    let search_cols = search_columns.unwrap_or_default();
    let filter = Callback::new(move |(query, item): (String, TransferItem)| {
        search::matches(&search_cols, &query, &item)
    });

    let dispatch = move |action: TargetAction| {
        let next = selection::target_transition(&target_keys.get_untracked(), action);
        set_target_keys.set(next.clone());
        if let Some(cb) = on_change {
            cb.run(next);
        }
    };
    let handle_change = Callback::new(move |next: Vec<String>| {
        dispatch(TargetAction::Set(next));
    });

    let left_columns = table_columns(&left_col_titles);
    let right_columns = table_columns(&right_col_titles);
    let groups = predefined_groups;

    let render_pane = move |pane: PaneView| {
        let columns = match pane.direction {
            Direction::Left => left_columns.clone(),
            Direction::Right => right_columns.clone(),
        };

        let row_selection = RowSelection {
            selected_row_keys: pane.selected_keys,
            on_select: Callback::new(move |(item, checked): (TransferItem, bool)| {
                pane.on_item_select.run((item.key, checked));
            }),
            on_select_all: Callback::new(move |(checked, rows): (bool, Vec<TransferItem>)| {
                let row_keys: Vec<String> = rows.iter().map(|item| item.key.clone()).collect();
                let delta = selection::select_all_delta(
                    &row_keys,
                    &pane.selected_keys.get_untracked(),
                    checked,
                );
                pane.on_item_select_all.run((delta, checked));
            }),
        };

        let controls = match pane.direction {
            Direction::Left => groups
                .iter()
                .map(|group| {
                    let group_id = group.id.clone();
                    view! {
                        <button
                            class="table-transfer-group-btn"
                            on:click=move |_| {
                                let keys = select_group.run(group_id.clone());
                                dispatch(TargetAction::ToggleGroup(keys));
                            }
                        >
                            {group.name.clone()}
                        </button>
                    }
                })
                .collect_view()
                .into_any(),
            Direction::Right => view! {
                <button
                    class="table-transfer-reset-btn"
                    on:click=move |_| dispatch(TargetAction::Reset)
                >
                    "Reset"
                </button>
            }
            .into_any(),
        };

        let pane_class = format!("table-transfer-pane table-transfer-pane-{}", pane.direction.as_str());
        view! {
            <div class=pane_class>
                <div class="table-transfer-controls">{controls}</div>
                <ItemTable
                    columns=columns
                    filtered_items=pane.filtered_items
                    row_selection=row_selection
                    list_selected_keys=pane.selected_keys
                    on_item_select=pane.on_item_select
                />
            </div>
        }
    };

    view! {
        <div class="table-transfer">
            <Transfer
                data_source=items
                target_keys=target_keys
                on_change=handle_change
                filter=filter
                show_search=show_search
                show_select_all=false
                options=options
                render_pane=render_pane
            />
        </div>
    }
    .into_any()
}
