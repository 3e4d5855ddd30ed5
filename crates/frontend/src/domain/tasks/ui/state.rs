use contracts::domain::tasks::Task;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<TaskListState> {
    RwSignal::new(TaskListState::default())
}
