//! Leptos Table Transfer
//!
//! A dual-list "transfer" widget: a searchable left list of available items
//! and a right list of chosen items, with predefined group-selection
//! shortcuts and a reset action. Pane bodies render as checkbox-selectable
//! tables.
//!
//! ```ignore
//! use leptos::prelude::*;
//! use leptos_table_transfer::{PredefinedGroup, TableTransfer};
//!
//! view! {
//!     <TableTransfer
//!         data=records
//!         search_columns=vec!["name".to_string()]
//!         left_col_titles=vec![("name".to_string(), "Name".to_string())]
//!         right_col_titles=vec![("name".to_string(), "Chosen".to_string())]
//!         select_group=move |group_id: String| lookup_group(&group_id)
//!         predefined_groups=vec![PredefinedGroup { id: "g1".into(), name: "G1".into() }]
//!         on_change=move |keys: Vec<String>| log_selection(&keys)
//!     />
//! }
//! ```

pub mod components;
pub mod models;
pub mod search;
pub mod selection;

pub use components::{ItemTable, PaneView, RowSelection, TableTransfer, Transfer};
pub use models::{
    normalize_records, table_columns, ColumnSpec, Direction, PredefinedGroup, Record,
    TransferError, TransferItem, TransferOptions,
};
