//! User screens: list with filter and delete, add, edit, and a standalone
//! delete confirmation page.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::TextField;
use crate::net::types::{NewUser, User};
use crate::state::list::ListState;
use crate::util::browser;

use super::{blank_to_none, dash, list_error_view, load_list, parse_id};

/// User collection with substring filtering over name, medical history,
/// city, and state.
#[component]
pub fn UserListPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<User>::default());
    let query = RwSignal::new(String::new());

    load_list(list, crate::net::api::fetch_users);
    on_cleanup(move || {
        let _ = list.try_update(ListState::<User>::deactivate);
    });

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Users"</h2>
                <input
                    class="field__input card__search"
                    type="search"
                    placeholder="Search..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            {list_error_view(list)}
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"User ID"</th>
                            <th>"Name"</th>
                            <th>"Date of Birth"</th>
                            <th>"Medical Insurance"</th>
                            <th>"Medical History"</th>
                            <th>"Street"</th>
                            <th>"City"</th>
                            <th>"State"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.get();
                            if state.loading {
                                view! { <tr><td colspan="10" class="table__empty">"Loading..."</td></tr> }
                                    .into_any()
                            } else {
                                let rows = state.filtered(&query.get());
                                if rows.is_empty() {
                                    view! { <tr><td colspan="10" class="table__empty">"No users found"</td></tr> }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .enumerate()
                                        .map(|(idx, u)| {
                                            let id = u.user_id;
                                            view! {
                                                <tr>
                                                    <td>{idx + 1}</td>
                                                    <td>{id}</td>
                                                    <td>{u.name.clone()}</td>
                                                    <td>{dash(&u.date_of_birth)}</td>
                                                    <td>{dash(&u.medical_insurance)}</td>
                                                    <td>{dash(&u.medical_history)}</td>
                                                    <td>{dash(&u.street)}</td>
                                                    <td>{dash(&u.city)}</td>
                                                    <td>{dash(&u.state)}</td>
                                                    <td class="table__actions">
                                                        <a class="btn btn--small" href=format!("/users/{id}/edit")>"Edit"</a>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| delete_user_row(list, id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Confirm, delete, and refetch so the table reflects backend state. On
/// failure the stale collection stays displayed alongside the error.
fn delete_user_row(list: RwSignal<ListState<User>>, id: i64) {
    if !browser::confirm(&format!("Delete user {id}?")) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_user(id).await {
            Ok(()) => load_list(list, crate::net::api::fetch_users),
            Err(msg) => {
                let _ = list.try_update(|l| l.error = Some(msg));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = list;
}

/// Registration form for a new user record.
#[component]
pub fn AddUserPage() -> impl IntoView {
    let user_id = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let medical_insurance = RwSignal::new(String::new());
    let medical_history = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        error.set(String::new());
        if user_id.get().trim().is_empty()
            || name.get().trim().is_empty()
            || date_of_birth.get().trim().is_empty()
        {
            error.set("User_ID, Name and Date_of_Birth are required.".to_owned());
            return;
        }
        let Some(id) = parse_id(&user_id.get()) else {
            error.set("User_ID must be a number.".to_owned());
            return;
        };
        let payload = NewUser {
            user_id: id,
            name: name.get().trim().to_owned(),
            date_of_birth: date_of_birth.get(),
            medical_insurance: blank_to_none(medical_insurance.get()),
            medical_history: blank_to_none(medical_history.get()),
            street: blank_to_none(street.get()),
            city: blank_to_none(city.get()),
            state: blank_to_none(state.get()),
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&payload).await {
                Ok(()) => {
                    let _ = message.try_set("User created successfully!".to_owned());
                    for field in [
                        user_id,
                        name,
                        date_of_birth,
                        medical_insurance,
                        medical_history,
                        street,
                        city,
                        state,
                    ] {
                        let _ = field.try_set(String::new());
                    }
                }
                Err(msg) => {
                    let _ = error.try_set(msg);
                }
            }
            let _ = saving.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            saving.set(false);
        }
    };

    view! {
        <div class="card">
            <h2 class="card__title">"Add User"</h2>
            <Alert message=message kind=AlertKind::Success/>
            <Alert message=error/>
            <form class="form-grid" on:submit=on_submit>
                <TextField label="User_ID" value=user_id required=true/>
                <TextField label="Name" value=name required=true/>
                <TextField label="Date of Birth" value=date_of_birth input_type="date" required=true/>
                <TextField label="Medical insurance" value=medical_insurance/>
                <TextField label="Medical history" value=medical_history/>
                <TextField label="Street" value=street/>
                <TextField label="City" value=city/>
                <TextField label="State" value=state/>
                <div class="form-grid__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Edit form for an existing user: loads the record, then PUTs the changes.
#[component]
pub fn EditUserPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    #[cfg(not(feature = "hydrate"))]
    let _ = &navigate;

    let name = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let medical_insurance = RwSignal::new(String::new());
    let medical_history = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let record_id = move || params.get().get("id").as_deref().and_then(parse_id);

    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = record_id() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_user(id).await {
                    Ok(user) => {
                        let _ = name.try_set(user.name);
                        let _ = date_of_birth.try_set(user.date_of_birth.unwrap_or_default());
                        let _ = medical_insurance
                            .try_set(user.medical_insurance.unwrap_or_default());
                        let _ = medical_history.try_set(user.medical_history.unwrap_or_default());
                        let _ = street.try_set(user.street.unwrap_or_default());
                        let _ = city.try_set(user.city.unwrap_or_default());
                        let _ = state.try_set(user.state.unwrap_or_default());
                    }
                    Err(msg) => {
                        let _ = error.try_set(msg);
                    }
                }
                let _ = loading.try_set(false);
            });
        } else {
            error.set("Invalid user id.".to_owned());
            loading.set(false);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        loading.set(false);
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        error.set(String::new());
        let Some(id) = record_id() else {
            error.set("Invalid user id.".to_owned());
            return;
        };
        if name.get().trim().is_empty() || date_of_birth.get().trim().is_empty() {
            error.set("Name and Date_of_Birth are required.".to_owned());
            return;
        }
        let payload = NewUser {
            user_id: id,
            name: name.get().trim().to_owned(),
            date_of_birth: date_of_birth.get(),
            medical_insurance: blank_to_none(medical_insurance.get()),
            medical_history: blank_to_none(medical_history.get()),
            street: blank_to_none(street.get()),
            city: blank_to_none(city.get()),
            state: blank_to_none(state.get()),
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_user(id, &payload).await {
                    Ok(()) => {
                        let _ = message.try_set("User updated!".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(600)).await;
                        navigate("/users", leptos_router::NavigateOptions::default());
                    }
                    Err(msg) => {
                        let _ = error.try_set(msg);
                    }
                }
                let _ = saving.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            saving.set(false);
        }
    };

    view! {
        <div class="card">
            <h2 class="card__title">"Edit User"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"Loading..."</p> }
            >
                <Alert message=message kind=AlertKind::Success/>
                <Alert message=error/>
                <form class="form-grid" on:submit=on_submit.clone()>
                    <TextField label="Name" value=name required=true/>
                    <TextField label="Date of Birth" value=date_of_birth input_type="date" required=true/>
                    <TextField label="Medical insurance" value=medical_insurance/>
                    <TextField label="Medical history" value=medical_history/>
                    <TextField label="Street" value=street/>
                    <TextField label="City" value=city/>
                    <TextField label="State" value=state/>
                    <div class="form-grid__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Updating..." } else { "Update" }}
                        </button>
                        <a class="btn" href="/users">"Cancel"</a>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// Standalone confirmation page for deleting a user.
#[component]
pub fn DeleteUserPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    #[cfg(not(feature = "hydrate"))]
    let _ = &navigate;
    let deleting = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let record_id = move || params.get().get("id").as_deref().and_then(parse_id);

    let on_delete = move |_| {
        error.set(String::new());
        let Some(id) = record_id() else {
            error.set("Invalid user id.".to_owned());
            return;
        };
        deleting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_user(id).await {
                    Ok(()) => navigate("/users", leptos_router::NavigateOptions::default()),
                    Err(msg) => {
                        let _ = error.try_set(msg);
                        let _ = deleting.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            deleting.set(false);
        }
    };

    view! {
        <div class="card">
            <h2 class="card__title">"Delete User"</h2>
            <Alert message=error/>
            <p>
                "Are you sure you want to delete user "
                {move || record_id().map_or_else(|| "?".to_owned(), |id| id.to_string())}
                "?"
            </p>
            <div class="form-grid__actions">
                <a class="btn" href="/users">"Cancel"</a>
                <button class="btn btn--danger" on:click=on_delete disabled=move || deleting.get()>
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
