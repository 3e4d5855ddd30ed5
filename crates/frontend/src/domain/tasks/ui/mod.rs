pub mod state;

use self::state::create_state;
use contracts::domain::tasks::{validate_title, CreateTaskRequest, Task};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::tasks::api;
use crate::shared::dialog;
use crate::shared::icons::icon;
use crate::shared::session::context::use_session;

/// Personal task widget shown on the dashboard.
///
/// Loads the viewer's tasks on mount; create/toggle/delete all wait for the
/// server acknowledgment before touching local state.
#[component]
pub fn TaskPanel() -> impl IntoView {
    let session = use_session();
    let user_id = session.user_id();

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (show_modal, set_show_modal) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_due_date, set_new_due_date) = signal(String::new());

    let load_tasks = move || {
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_tasks(user_id).await {
                Ok(tasks) => {
                    state.update(|s| {
                        s.tasks = tasks;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log!("Failed to fetch tasks: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_tasks();
        }
    });

    let open_modal = move |_| {
        set_new_title.set(String::new());
        set_new_due_date.set(String::new());
        set_show_modal.set(true);
    };

    let create_task = move |_| {
        let title = new_title.get_untracked();
        if let Err(e) = validate_title(&title) {
            dialog::alert(&e);
            return;
        }
        let due_date = new_due_date.get_untracked();
        let request = CreateTaskRequest {
            user_id,
            title,
            due_date: (!due_date.is_empty()).then_some(due_date),
        };
        spawn_local(async move {
            match api::create_task(request).await {
                Ok(()) => {
                    set_show_modal.set(false);
                    load_tasks();
                }
                Err(e) => {
                    log!("Failed to create task: {}", e);
                    dialog::alert("Failed to create task");
                }
            }
        });
    };

    let toggle_status = move |task: Task| {
        let next = task.status.toggled();
        spawn_local(async move {
            match api::update_task_status(task.id, next).await {
                // Only flip local state once the server has acknowledged
                Ok(()) => state.update(|s| {
                    if let Some(t) = s.tasks.iter_mut().find(|t| t.id == task.id) {
                        t.status = next;
                    }
                }),
                Err(e) => log!("Failed to toggle task: {}", e),
            }
        });
    };

    let delete_task = move |task_id: i64| {
        if !dialog::confirm("Are you sure?") {
            return;
        }
        spawn_local(async move {
            match api::delete_task(task_id).await {
                Ok(()) => state.update(|s| s.tasks.retain(|t| t.id != task_id)),
                Err(e) => log!("Failed to delete task: {}", e),
            }
        });
    };

    view! {
        <div class="task-panel card">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3>"My Tasks"</h3>
                <Button appearance=ButtonAppearance::Primary on_click=open_modal>
                    {icon("plus")}
                    " Add task"
                </Button>
            </Flex>

            <Show when=move || show_modal.get()>
                <div class="task-modal">
                    <label>
                        "Title"
                        <input
                            type="text"
                            prop:value=move || new_title.get()
                            on:input=move |ev| set_new_title.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Due date"
                        <input
                            type="date"
                            prop:value=move || new_due_date.get()
                            on:input=move |ev| set_new_due_date.set(event_target_value(&ev))
                        />
                    </label>
                    <Space>
                        <Button appearance=ButtonAppearance::Primary on_click=create_task>
                            "Save"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| set_show_modal.set(false)>
                            "Cancel"
                        </Button>
                    </Space>
                </div>
            </Show>

            {move || {
                if loading.get() {
                    view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading tasks..."
                        </Flex>
                    }
                    .into_any()
                } else {
                    let tasks = state.get().tasks;
                    if tasks.is_empty() {
                        view! { <p class="empty-state">"No tasks yet."</p> }.into_any()
                    } else {
                        tasks
                            .into_iter()
                            .map(|task| {
                                let completed = task.status == contracts::domain::tasks::TaskStatus::Completed;
                                let task_for_toggle = task.clone();
                                let task_id = task.id;
                                view! {
                                    <div class=move || {
                                        if completed { "task-row completed" } else { "task-row" }
                                    }>
                                        <button
                                            class="task-toggle"
                                            title="Toggle status"
                                            on:click=move |_| toggle_status(task_for_toggle.clone())
                                        >
                                            {if completed { icon("check") } else { icon("refresh") }}
                                        </button>
                                        <span class="task-title">{task.title.clone()}</span>
                                        <span class="task-due">
                                            {task.due_date.clone().unwrap_or_else(|| "—".to_string())}
                                        </span>
                                        <Button
                                            appearance=ButtonAppearance::Transparent
                                            on_click=move |_| delete_task(task_id)
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
