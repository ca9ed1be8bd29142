//! Key-Set Operations
//!
//! Pure functions over ordered key sequences. Keys behave as a set
//! (no duplicates) but keep insertion order for rendering stability.

use crate::models::TransferItem;
use std::collections::HashSet;

/// Append `additions` not already present, keeping order
pub fn union_keys(current: &[String], additions: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = current.iter().map(String::as_str).collect();
    let mut out = current.to_vec();
    for key in additions {
        if seen.insert(key.as_str()) {
            out.push(key.clone());
        }
    }
    out
}

/// Keys of `current` not present in `removals`, keeping order
pub fn difference_keys(current: &[String], removals: &[String]) -> Vec<String> {
    let remove: HashSet<&str> = removals.iter().map(String::as_str).collect();
    current
        .iter()
        .filter(|key| !remove.contains(key.as_str()))
        .cloned()
        .collect()
}

/// Keys of `current` also present in `keep`, keeping order
pub fn intersect_keys(current: &[String], keep: &[String]) -> Vec<String> {
    let wanted: HashSet<&str> = keep.iter().map(String::as_str).collect();
    current
        .iter()
        .filter(|key| wanted.contains(key.as_str()))
        .cloned()
        .collect()
}

/// Group shortcut semantics: add missing group keys, or subtract the whole
/// group if every key is already in the target set.
pub fn toggle_group(target: &[String], group_keys: &[String]) -> Vec<String> {
    let missing = difference_keys(group_keys, target);
    if missing.is_empty() {
        difference_keys(target, group_keys)
    } else {
        union_keys(target, &missing)
    }
}

/// Key delta for a pane-wide select-all over its visible rows.
///
/// Enabling yields the visible keys not yet selected; disabling yields the
/// visible keys currently selected. Rows hidden by the filter are never part
/// of the delta.
pub fn select_all_delta(visible: &[String], selected: &[String], checked: bool) -> Vec<String> {
    if checked {
        difference_keys(visible, selected)
    } else {
        intersect_keys(visible, selected)
    }
}

/// Single-row selection transition
pub fn select_transition(selected: &[String], key: &str, checked: bool) -> Vec<String> {
    if checked {
        union_keys(selected, &[key.to_string()])
    } else {
        difference_keys(selected, &[key.to_string()])
    }
}

/// Bulk selection transition: apply a select-all delta
pub fn select_all_transition(selected: &[String], delta: &[String], checked: bool) -> Vec<String> {
    if checked {
        union_keys(selected, delta)
    } else {
        difference_keys(selected, delta)
    }
}

/// User actions mutating the target key set
#[derive(Debug, Clone, PartialEq)]
pub enum TargetAction {
    /// Replace the set (the primitive's own move interactions)
    Set(Vec<String>),
    /// Group shortcut clicked; payload is the group's resolved keys
    ToggleGroup(Vec<String>),
    /// Reset button clicked
    Reset,
}

/// Single transition entry point for the target key set
pub fn target_transition(current: &[String], action: TargetAction) -> Vec<String> {
    match action {
        TargetAction::Set(keys) => union_keys(&[], &keys),
        TargetAction::ToggleGroup(keys) => toggle_group(current, &keys),
        TargetAction::Reset => Vec::new(),
    }
}

/// Split items into (left, right) panes by target-key membership.
/// The right pane follows target-key order.
pub fn partition_items(
    items: &[TransferItem],
    target_keys: &[String],
) -> (Vec<TransferItem>, Vec<TransferItem>) {
    let targets: HashSet<&str> = target_keys.iter().map(String::as_str).collect();
    let left = items
        .iter()
        .filter(|item| !targets.contains(item.key.as_str()))
        .cloned()
        .collect();
    let right = target_keys
        .iter()
        .filter_map(|key| items.iter().find(|item| &item.key == key).cloned())
        .collect();
    (left, right)
}
