//! Donor screens: filterable list with delete, and the registration form.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::TextField;
use crate::net::types::{Donor, NewDonor};
use crate::state::list::ListState;
use crate::util::browser;

use super::{blank_to_none, dash, list_error_view, load_list, parse_id};

/// Donor collection with substring filtering over organ, reason,
/// organization id, and user id.
#[component]
pub fn DonorListPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<Donor>::default());
    let query = RwSignal::new(String::new());

    load_list(list, crate::net::api::fetch_donors);
    on_cleanup(move || {
        let _ = list.try_update(ListState::<Donor>::deactivate);
    });

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Donors"</h2>
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
                            <th>"Donor ID"</th>
                            <th>"Organ Donated"</th>
                            <th>"Reason"</th>
                            <th>"Organization ID"</th>
                            <th>"User ID"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.get();
                            if state.loading {
                                view! { <tr><td colspan="7" class="table__empty">"Loading..."</td></tr> }
                                    .into_any()
                            } else {
                                let rows = state.filtered(&query.get());
                                if rows.is_empty() {
                                    view! { <tr><td colspan="7" class="table__empty">"No donors found"</td></tr> }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .enumerate()
                                        .map(|(idx, d)| {
                                            let id = d.donor_id;
                                            view! {
                                                <tr>
                                                    <td>{idx + 1}</td>
                                                    <td>{id}</td>
                                                    <td>{d.organ_donated.clone()}</td>
                                                    <td>{dash(&d.reason_of_donation)}</td>
                                                    <td>{d.organization_id.map_or_else(|| "-".to_owned(), |v| v.to_string())}</td>
                                                    <td>{d.user_id.map_or_else(|| "-".to_owned(), |v| v.to_string())}</td>
                                                    <td class="table__actions">
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| delete_donor_row(list, id)
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

/// Confirm, delete via the shared endpoint builder, and refetch.
fn delete_donor_row(list: RwSignal<ListState<Donor>>, id: i64) {
    if !browser::confirm(&format!("Delete donor {id}?")) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_donor(id).await {
            Ok(()) => load_list(list, crate::net::api::fetch_donors),
            Err(msg) => {
                let _ = list.try_update(|l| l.error = Some(msg));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = list;
}

/// Registration form for a new donor record.
#[component]
pub fn RegisterDonorPage() -> impl IntoView {
    let donor_id = RwSignal::new(String::new());
    let organ_donated = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let organization_id = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        error.set(String::new());
        if donor_id.get().trim().is_empty()
            || organ_donated.get().trim().is_empty()
            || organization_id.get().trim().is_empty()
            || user_id.get().trim().is_empty()
        {
            error.set(
                "Donor_ID, organ_donated, Organization_ID and User_ID are required.".to_owned(),
            );
            return;
        }
        let (Some(id), Some(org), Some(user)) = (
            parse_id(&donor_id.get()),
            parse_id(&organization_id.get()),
            parse_id(&user_id.get()),
        ) else {
            error.set("Donor_ID, Organization_ID and User_ID must be numbers.".to_owned());
            return;
        };
        let payload = NewDonor {
            donor_id: id,
            organ_donated: organ_donated.get().trim().to_owned(),
            reason_of_donation: blank_to_none(reason.get()),
            organization_id: org,
            user_id: user,
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_donor(&payload).await {
                Ok(()) => {
                    let _ = message.try_set("Donor registered successfully!".to_owned());
                    for field in [donor_id, organ_donated, reason, organization_id, user_id] {
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
            <h2 class="card__title">"Register Donor"</h2>
            <Alert message=message kind=AlertKind::Success/>
            <Alert message=error/>
            <form class="form-grid" on:submit=on_submit>
                <TextField label="Donor_ID" value=donor_id required=true/>
                <TextField label="Organ donated" value=organ_donated required=true/>
                <TextField label="Reason of donation" value=reason/>
                <TextField label="Organization_ID" value=organization_id required=true/>
                <TextField label="User_ID" value=user_id required=true/>
                <div class="form-grid__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
