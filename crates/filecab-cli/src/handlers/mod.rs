//! One handler per shell command.

pub mod create;
pub mod delete;
pub mod edit;
pub mod export;
pub mod find;
pub mod help;
pub mod import;
pub mod insert;
pub mod list;
pub mod purge;
pub mod remove;
pub mod select;
pub mod stat;
pub mod update;

use filecab_types::RecordId;

/// `#1, #2, #3` for user-facing id lists.
pub(crate) fn format_ids(ids: &[RecordId]) -> String {
    let listed: Vec<String> = ids.iter().map(|id| format!("#{}", id)).collect();
    listed.join(", ")
}
