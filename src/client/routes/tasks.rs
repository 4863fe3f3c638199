use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::{client::components::Page, client::hooks::use_user, model::task::TaskDto};

#[component]
pub fn Tasks() -> Element {
    let user = use_user();
    let tasks = use_signal(Vec::<TaskDto>::new);
    let mut title = use_signal(String::new);
    let error = use_signal(|| None::<String>);

    // Retrieve the task list on component load
    #[cfg(feature = "web")]
    use_hook(move || {
        use crate::client::util::api;

        let mut tasks = tasks;
        let mut error = error;

        spawn(async move {
            match api::get_tasks().await {
                Ok(loaded) => tasks.set(loaded),
                Err(err) => error.set(Some(err)),
            }
        });
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            use crate::{client::util::api, model::task::CreateTaskDto};

            let mut tasks = tasks;
            let mut error = error;
            let new_task = CreateTaskDto { title: title() };

            spawn(async move {
                match api::create_task(&new_task).await {
                    Ok(task) => {
                        error.set(None);
                        title.set(String::new());
                        tasks.write().push(task);
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    rsx!(
        Title { "Tasks | Portfolio" }
        Page { title: "Tasks",
            h1 { "{user.name}'s tasks" }
            form { class: "task-form", onsubmit,
                input {
                    placeholder: "What needs doing?",
                    maxlength: 200,
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                button { r#type: "submit", class: "btn btn-primary", "Add" }
            }
            if let Some(error) = error() {
                p { class: "form-error", "{error}" }
            }
            if tasks.read().is_empty() {
                p { class: "task-empty", "Nothing to do." }
            }
            ul { class: "task-list",
                for task in tasks() {
                    TaskItem { key: "{task.id}", task, tasks, error }
                }
            }
        }
    )
}

#[component]
fn TaskItem(task: TaskDto, tasks: Signal<Vec<TaskDto>>, error: Signal<Option<String>>) -> Element {
    let task_id = task.id;
    let completed = task.completed;

    let ontoggle = move |_: FormEvent| {
        #[cfg(feature = "web")]
        {
            use crate::{client::util::api, model::task::UpdateTaskDto};

            let mut tasks = tasks;
            let mut error = error;

            let update = UpdateTaskDto {
                completed: Some(!completed),
                ..Default::default()
            };

            spawn(async move {
                match api::update_task(task_id, &update).await {
                    Ok(updated) => {
                        if let Some(task) = tasks.write().iter_mut().find(|t| t.id == updated.id) {
                            *task = updated;
                        }
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    let ondelete = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api;

            let mut tasks = tasks;
            let mut error = error;

            spawn(async move {
                match api::delete_task(task_id).await {
                    Ok(()) => tasks.write().retain(|t| t.id != task_id),
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    rsx!(
        li { class: if completed { "task task-completed" } else { "task" },
            label {
                input {
                    r#type: "checkbox",
                    checked: completed,
                    onchange: ontoggle,
                }
                span { "{task.title}" }
            }
            button {
                class: "btn btn-ghost",
                "aria-label": "Delete task",
                onclick: ondelete,
                Icon { width: 16, height: 16, icon: FaTrash }
            }
        }
    )
}
