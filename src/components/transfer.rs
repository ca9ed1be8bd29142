//! Transfer Primitive
//!
//! Dual-list component: partitions the data source into a left (source) and
//! right (target) pane by target-key membership, filters each pane, tracks
//! per-pane checked rows, and moves checked rows across via the operation
//! buttons. Pane bodies are delegated to the caller through a [`PaneView`]
//! descriptor handed to the `render_pane` function.

use leptos::prelude::*;
use std::collections::HashSet;

use crate::models::{Direction, TransferItem, TransferOptions};
use crate::selection;

/// Per-pane render descriptor handed to `render_pane`
#[derive(Clone, Copy)]
pub struct PaneView {
    pub direction: Direction,
    /// Items in this pane after search filtering
    pub filtered_items: Signal<Vec<TransferItem>>,
    /// Keys currently checked in this pane
    pub selected_keys: Signal<Vec<String>>,
    /// Toggle a single row: (key, checked)
    pub on_item_select: Callback<(String, bool)>,
    /// Apply a bulk delta: (keys, checked)
    pub on_item_select_all: Callback<(Vec<String>, bool)>,
}

#[component]
pub fn Transfer<F, V>(
    #[prop(into)] data_source: Signal<Vec<TransferItem>>,
    /// Keys currently in the right pane, owned by the parent
    #[prop(into)]
    target_keys: Signal<Vec<String>>,
    /// Invoked with the new target key sequence after a move
    #[prop(into)]
    on_change: Callback<Vec<String>>,
    /// Search predicate: (query, item) -> keep
    #[prop(optional, into)]
    filter: Option<Callback<(String, TransferItem), bool>>,
    #[prop(default = false)] show_search: bool,
    /// Render the primitive's own select-all checkbox in each pane header
    #[prop(default = true)]
    show_select_all: bool,
    #[prop(optional)] options: TransferOptions,
    render_pane: F,
) -> impl IntoView
where
    F: Fn(PaneView) -> V + 'static,
    V: IntoView + 'static,
{
    let (left_query, set_left_query) = signal(String::new());
    let (right_query, set_right_query) = signal(String::new());
    let (left_checked, set_left_checked) = signal(Vec::<String>::new());
    let (right_checked, set_right_checked) = signal(Vec::<String>::new());

    let panes = Memo::new(move |_| {
        selection::partition_items(&data_source.get(), &target_keys.get())
    });
    let left_items = Memo::new(move |_| panes.get().0);
    let right_items = Memo::new(move |_| panes.get().1);

    let left_filtered = Memo::new(move |_| {
        let items = left_items.get();
        let query = left_query.get();
        if !show_search || query.is_empty() {
            return items;
        }
        match filter {
            Some(f) => items
                .into_iter()
                .filter(|item| f.run((query.clone(), item.clone())))
                .collect(),
            None => items,
        }
    });
    let right_filtered = Memo::new(move |_| {
        let items = right_items.get();
        let query = right_query.get();
        if !show_search || query.is_empty() {
            return items;
        }
        match filter {
            Some(f) => items
                .into_iter()
                .filter(|item| f.run((query.clone(), item.clone())))
                .collect(),
            None => items,
        }
    });

    // Drop checked keys whose items left the pane (moved or removed upstream)
    Effect::new(move |_| {
        let present: HashSet<String> = left_items.get().into_iter().map(|item| item.key).collect();
        set_left_checked.update(|checked| checked.retain(|key| present.contains(key)));
    });
    Effect::new(move |_| {
        let present: HashSet<String> = right_items.get().into_iter().map(|item| item.key).collect();
        set_right_checked.update(|checked| checked.retain(|key| present.contains(key)));
    });

    let on_left_select = Callback::new(move |(key, checked): (String, bool)| {
        set_left_checked.update(|sel| *sel = selection::select_transition(sel, &key, checked));
    });
    let on_right_select = Callback::new(move |(key, checked): (String, bool)| {
        set_right_checked.update(|sel| *sel = selection::select_transition(sel, &key, checked));
    });
    let on_left_select_all = Callback::new(move |(delta, checked): (Vec<String>, bool)| {
        set_left_checked.update(|sel| *sel = selection::select_all_transition(sel, &delta, checked));
    });
    let on_right_select_all = Callback::new(move |(delta, checked): (Vec<String>, bool)| {
        set_right_checked.update(|sel| *sel = selection::select_all_transition(sel, &delta, checked));
    });

    let left_pane = PaneView {
        direction: Direction::Left,
        filtered_items: left_filtered.into(),
        selected_keys: left_checked.into(),
        on_item_select: on_left_select,
        on_item_select_all: on_left_select_all,
    };
    let right_pane = PaneView {
        direction: Direction::Right,
        filtered_items: right_filtered.into(),
        selected_keys: right_checked.into(),
        on_item_select: on_right_select,
        on_item_select_all: on_right_select_all,
    };

    let move_to_right = move |_: web_sys::MouseEvent| {
        let moved = left_checked.get_untracked();
        if moved.is_empty() {
            return;
        }
        let next = selection::union_keys(&target_keys.get_untracked(), &moved);
        set_left_checked.set(Vec::new());
        on_change.run(next);
    };
    let move_to_left = move |_: web_sys::MouseEvent| {
        let moved = right_checked.get_untracked();
        if moved.is_empty() {
            return;
        }
        let next = selection::difference_keys(&target_keys.get_untracked(), &moved);
        set_right_checked.set(Vec::new());
        on_change.run(next);
    };

    // Header select-all over the currently filtered rows only
    let left_all_checked = move || {
        let items = left_filtered.get();
        let sel: HashSet<String> = left_checked.get().into_iter().collect();
        !items.is_empty() && items.iter().all(|item| sel.contains(&item.key))
    };
    let right_all_checked = move || {
        let items = right_filtered.get();
        let sel: HashSet<String> = right_checked.get().into_iter().collect();
        !items.is_empty() && items.iter().all(|item| sel.contains(&item.key))
    };
    let on_left_toggle_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        let visible: Vec<String> = left_filtered
            .get_untracked()
            .iter()
            .map(|item| item.key.clone())
            .collect();
        let delta = selection::select_all_delta(&visible, &left_checked.get_untracked(), checked);
        on_left_select_all.run((delta, checked));
    };
    let on_right_toggle_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        let visible: Vec<String> = right_filtered
            .get_untracked()
            .iter()
            .map(|item| item.key.clone())
            .collect();
        let delta = selection::select_all_delta(&visible, &right_checked.get_untracked(), checked);
        on_right_select_all.run((delta, checked));
    };

    let TransferOptions {
        titles,
        operations,
        disabled,
        class,
        style,
    } = options;
    let widget_disabled = disabled;
    let [left_title, right_title] = match titles {
        Some([left, right]) => [Some(left), Some(right)],
        None => [None, None],
    };
    let [op_to_right, op_to_left] = operations;
    let root_class = match class {
        Some(extra) => format!("transfer {extra}"),
        None => "transfer".to_string(),
    };
    let root_style = style.unwrap_or_default();

    view! {
        <div class=root_class class:transfer-disabled=widget_disabled style=root_style>
            <div class="transfer-pane transfer-pane-left">
                <div class="transfer-pane-header">
                    <Show when=move || show_select_all>
                        <input
                            type="checkbox"
                            class="transfer-pane-check-all"
                            prop:checked=left_all_checked
                            on:change=on_left_toggle_all
                        />
                    </Show>
                    <span class="transfer-pane-title">{left_title.clone()}</span>
                    <span class="transfer-pane-count">
                        {move || format!("{}/{}", left_checked.get().len(), left_items.get().len())}
                    </span>
                </div>
                <Show when=move || show_search>
                    <input
                        type="text"
                        class="transfer-search"
                        placeholder="Search"
                        prop:value=move || left_query.get()
                        on:input=move |ev| set_left_query.set(event_target_value(&ev))
                    />
                </Show>
                <div class="transfer-pane-body">{render_pane(left_pane)}</div>
            </div>

            <div class="transfer-operations">
                <button
                    class="transfer-op transfer-op-right"
                    disabled=move || widget_disabled || left_checked.get().is_empty()
                    on:click=move_to_right
                >
                    {op_to_right}
                </button>
                <button
                    class="transfer-op transfer-op-left"
                    disabled=move || widget_disabled || right_checked.get().is_empty()
                    on:click=move_to_left
                >
                    {op_to_left}
                </button>
            </div>

            <div class="transfer-pane transfer-pane-right">
                <div class="transfer-pane-header">
                    <Show when=move || show_select_all>
                        <input
                            type="checkbox"
                            class="transfer-pane-check-all"
                            prop:checked=right_all_checked
                            on:change=on_right_toggle_all
                        />
                    </Show>
                    <span class="transfer-pane-title">{right_title.clone()}</span>
                    <span class="transfer-pane-count">
                        {move || format!("{}/{}", right_checked.get().len(), right_items.get().len())}
                    </span>
                </div>
                <Show when=move || show_search>
                    <input
                        type="text"
                        class="transfer-search"
                        placeholder="Search"
                        prop:value=move || right_query.get()
                        on:input=move |ev| set_right_query.set(event_target_value(&ev))
                    />
                </Show>
                <div class="transfer-pane-body">{render_pane(right_pane)}</div>
            </div>
        </div>
    }
}
