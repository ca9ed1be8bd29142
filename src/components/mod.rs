//! UI Components
//!
//! The transfer primitive, the table renderer, and the widget composing them.

mod item_table;
mod table_transfer;
mod transfer;

pub use item_table::{ItemTable, RowSelection};
pub use table_transfer::TableTransfer;
pub use transfer::{PaneView, Transfer};
