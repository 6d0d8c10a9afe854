//! Patient screens: filterable list with composite-key delete, and the
//! registration form.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::TextField;
use crate::net::types::{NewPatient, Patient};
use crate::state::list::ListState;
use crate::util::browser;

use super::{blank_to_none, dash, list_error_view, load_list, parse_id};

#[component]
pub fn PatientListPage() -> impl IntoView {
    let list = RwSignal::new(ListState::<Patient>::default());
    let query = RwSignal::new(String::new());

    load_list(list, crate::net::api::fetch_patients);
    on_cleanup(move || {
        let _ = list.try_update(ListState::<Patient>::deactivate);
    });

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">"Patients"</h2>
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
                            <th>"Patient ID"</th>
                            <th>"Organ Required"</th>
                            <th>"Reason"</th>
                            <th>"Doctor ID"</th>
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
                                    view! { <tr><td colspan="7" class="table__empty">"No patients found"</td></tr> }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .enumerate()
                                        .map(|(idx, p)| {
                                            let id = p.patient_id;
                                            let organ = p.organ_req.clone();
                                            let organ_cell = organ.clone();
                                            view! {
                                                <tr>
                                                    <td>{idx + 1}</td>
                                                    <td>{id}</td>
                                                    <td>{organ_cell}</td>
                                                    <td>{dash(&p.reason_of_procurement)}</td>
                                                    <td>{p.doctor_id.map_or_else(|| "-".to_owned(), |v| v.to_string())}</td>
                                                    <td>{p.user_id.map_or_else(|| "-".to_owned(), |v| v.to_string())}</td>
                                                    <td class="table__actions">
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| delete_patient_row(list, id, organ.clone())
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

/// Patients are keyed by `(Patient_ID, organ_req)`, so the delete route
/// carries both parts.
fn delete_patient_row(list: RwSignal<ListState<Patient>>, id: i64, organ: String) {
    if !browser::confirm(&format!("Delete patient {id} / {organ}?")) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_patient(id, &organ).await {
            Ok(()) => load_list(list, crate::net::api::fetch_patients),
            Err(msg) => {
                let _ = list.try_update(|l| l.error = Some(msg));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (list, organ);
}

/// Registration form for a new patient record.
#[component]
pub fn RegisterPatientPage() -> impl IntoView {
    let patient_id = RwSignal::new(String::new());
    let organ_req = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let doctor_id = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        error.set(String::new());
        if patient_id.get().trim().is_empty()
            || organ_req.get().trim().is_empty()
            || doctor_id.get().trim().is_empty()
            || user_id.get().trim().is_empty()
        {
            error.set("Patient_ID, organ_req, Doctor_ID and User_ID are required.".to_owned());
            return;
        }
        let (Some(id), Some(doctor), Some(user)) = (
            parse_id(&patient_id.get()),
            parse_id(&doctor_id.get()),
            parse_id(&user_id.get()),
        ) else {
            error.set("Patient_ID, Doctor_ID and User_ID must be numbers.".to_owned());
            return;
        };
        let payload = NewPatient {
            patient_id: id,
            organ_req: organ_req.get().trim().to_owned(),
            reason_of_procurement: blank_to_none(reason.get()),
            doctor_id: doctor,
            user_id: user,
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_patient(&payload).await {
                Ok(()) => {
                    let _ = message.try_set("Patient registered successfully!".to_owned());
                    for field in [patient_id, organ_req, reason, doctor_id, user_id] {
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
            <h2 class="card__title">"Register Patient"</h2>
            <Alert message=message kind=AlertKind::Success/>
            <Alert message=error/>
            <form class="form-grid" on:submit=on_submit>
                <TextField label="Patient_ID" value=patient_id required=true/>
                <TextField label="Organ required" value=organ_req required=true/>
                <TextField label="Reason of procurement" value=reason/>
                <TextField label="Doctor_ID" value=doctor_id required=true/>
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
