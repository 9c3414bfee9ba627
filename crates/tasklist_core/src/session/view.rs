//! Render-ready projection of a session.

use crate::model::edit_mode::EditMode;
use crate::model::task::TaskId;
use crate::model::task_list::TaskList;

pub const INPUT_PLACEHOLDER: &str = "New todo";
pub const ADD_ACTION_LABEL: &str = "Add Todo";
pub const EMPTY_LIST_TEXT: &str = "No task";

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: TaskId,
    pub title: String,
    /// Delete control is shown only while editing.
    pub deletable: bool,
}

/// Everything the shell needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub input: String,
    pub placeholder: &'static str,
    pub add_label: &'static str,
    pub edit_mode: EditMode,
    pub items: Vec<ItemView>,
    /// `Some` only when there are no items.
    pub empty_text: Option<&'static str>,
}

impl TaskListView {
    pub fn build(input: &str, edit_mode: EditMode, tasks: &TaskList) -> Self {
        let deletable = edit_mode.is_editing();
        let items = tasks
            .iter()
            .map(|task| ItemView {
                id: task.id(),
                title: task.title().to_string(),
                deletable,
            })
            .collect::<Vec<_>>();
        let empty_text = items.is_empty().then_some(EMPTY_LIST_TEXT);

        Self {
            input: input.to_string(),
            placeholder: INPUT_PLACEHOLDER,
            add_label: ADD_ACTION_LABEL,
            edit_mode,
            items,
            empty_text,
        }
    }
}
