//! Matching screens.
//!
//! Manual matching pairs a selected patient with a selected donor after a
//! local organ-compatibility check, so obvious mismatches never reach the
//! backend. Auto matching renders the backend's generated candidates.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::net::types::{Donor, ManualMatchRequest, Patient};
use crate::state::list::ListState;
use crate::state::matching::{manual_match_precheck, MatchStatus};

use super::{dash, list_error_view, load_list};

#[component]
pub fn ManualMatchingPage() -> impl IntoView {
    let patients = RwSignal::new(ListState::<Patient>::default());
    let donors = RwSignal::new(ListState::<Donor>::default());
    // Patient rows are keyed by "id|organ" so the composite key survives the
    // round trip through the select element.
    let patient_key = RwSignal::new(String::new());
    let donor_key = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    load_list(patients, crate::net::api::fetch_patients);
    load_list(donors, crate::net::api::fetch_donors);
    on_cleanup(move || {
        let _ = patients.try_update(ListState::<Patient>::deactivate);
        let _ = donors.try_update(ListState::<Donor>::deactivate);
    });

    let selected_patient = move || -> Option<Patient> {
        let key = patient_key.get();
        let (id, organ) = key.split_once('|')?;
        let id: i64 = id.parse().ok()?;
        patients
            .get()
            .items
            .into_iter()
            .find(|p| p.patient_id == id && p.organ_req == organ)
    };
    let selected_donor = move || -> Option<Donor> {
        let id: i64 = donor_key.get().parse().ok()?;
        donors.get().items.into_iter().find(|d| d.donor_id == id)
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        error.set(String::new());
        let patient = selected_patient();
        let donor = selected_donor();
        if let Err(msg) = manual_match_precheck(patient.as_ref(), donor.as_ref()) {
            error.set(msg);
            return;
        }
        // Precheck guarantees both selections exist.
        let (Some(patient), Some(donor)) = (patient, donor) else {
            return;
        };
        let payload = ManualMatchRequest {
            patient_id: patient.patient_id,
            donor_id: donor.donor_id,
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_manual_match(&payload).await {
                Ok(()) => {
                    let _ = message.try_set("Match created successfully!".to_owned());
                    let _ = patient_key.try_set(String::new());
                    let _ = donor_key.try_set(String::new());
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
            <h2 class="card__title">"Manual Matching"</h2>
            <p class="muted">
                "Pick a patient and a donor. The requested and donated organs \
                 must agree before a match is recorded."
            </p>
            <Alert message=message kind=AlertKind::Success/>
            <Alert message=error/>
            {list_error_view(patients)}
            {list_error_view(donors)}
            <form class="form-grid" on:submit=on_submit>
                <label class="field">
                    <span class="field__label">"Patient"</span>
                    <select
                        class="field__input"
                        prop:value=move || patient_key.get()
                        on:change=move |ev| patient_key.set(event_target_value(&ev))
                    >
                        <option value="">"Select a patient..."</option>
                        {move || {
                            patients
                                .get()
                                .items
                                .into_iter()
                                .map(|p| {
                                    let key = format!("{}|{}", p.patient_id, p.organ_req);
                                    let label = format!("#{} needs {}", p.patient_id, p.organ_req);
                                    view! { <option value=key>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Donor"</span>
                    <select
                        class="field__input"
                        prop:value=move || donor_key.get()
                        on:change=move |ev| donor_key.set(event_target_value(&ev))
                    >
                        <option value="">"Select a donor..."</option>
                        {move || {
                            donors
                                .get()
                                .items
                                .into_iter()
                                .map(|d| {
                                    let key = d.donor_id.to_string();
                                    let label = format!("#{} offers {}", d.donor_id, d.organ_donated);
                                    view! { <option value=key>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <div class="form-grid__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Matching..." } else { "Create match" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn AutoMatchingPage() -> impl IntoView {
    let candidates = LocalResource::new(|| crate::net::api::fetch_auto_matches());

    view! {
        <div class="card">
            <h2 class="card__title">"Auto Matching"</h2>
            <p class="muted">
                "Candidates generated by pairing compatible patients and donors."
            </p>
            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Patient"</th>
                            <th>"Donor"</th>
                            <th>"Organ"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match candidates.get() {
                            None => {
                                view! { <tr><td colspan="5" class="table__empty">"Loading..."</td></tr> }
                                    .into_any()
                            }
                            Some(Err(msg)) => {
                                view! { <tr><td colspan="5" class="table__empty">{msg}</td></tr> }
                                    .into_any()
                            }
                            Some(Ok(rows)) if rows.is_empty() => {
                                view! { <tr><td colspan="5" class="table__empty">"No candidates found"</td></tr> }
                                    .into_any()
                            }
                            Some(Ok(rows)) => rows
                                .into_iter()
                                .enumerate()
                                .map(|(idx, r)| {
                                    let status = MatchStatus::normalize(r.status.as_ref());
                                    view! {
                                        <tr>
                                            <td>{idx + 1}</td>
                                            <td>{match_party(r.patient_id, &r.patient_name)}</td>
                                            <td>{match_party(r.donor_id, &r.donor_name)}</td>
                                            <td>{dash(&r.organ)}</td>
                                            <td>
                                                <span class=status_class(&status)>{status.label().to_owned()}</span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Render a patient or donor column from whichever of name and id the row
/// carries.
pub(crate) fn match_party(id: Option<i64>, name: &Option<String>) -> String {
    match (id, name) {
        (Some(id), Some(name)) => format!("{name} (#{id})"),
        (Some(id), None) => format!("#{id}"),
        (None, Some(name)) => name.clone(),
        (None, None) => "-".to_owned(),
    }
}

pub(crate) fn status_class(status: &MatchStatus) -> &'static str {
    match status {
        MatchStatus::Confirmed => "badge badge--success",
        MatchStatus::Pending => "badge badge--warning",
        MatchStatus::Other(_) => "badge",
    }
}
