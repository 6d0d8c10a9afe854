//! Reports: aggregate counters plus the full match history.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::matching::MatchStatus;

use super::dash;
use super::matching::{match_party, status_class};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let summary = LocalResource::new(|| crate::net::api::fetch_reports_summary());
    let matches = LocalResource::new(|| crate::net::api::fetch_report_matches());

    view! {
        <div class="reports-page">
            <h1 class="reports-page__title">"Reports"</h1>
            {move || match summary.get() {
                None => view! { <p class="muted">"Loading summary..."</p> }.into_any(),
                Some(Err(msg)) => {
                    view! { <div class="alert alert--danger" role="alert">{msg}</div> }.into_any()
                }
                Some(Ok(s)) => view! {
                    <div class="stat-grid">
                        <StatCard title="Patients" value=s.patients desc="Patients on record"/>
                        <StatCard title="Donors" value=s.donors desc="Donors on record"/>
                        <StatCard title="Confirmed" value=Some(s.confirmed) desc="Confirmed matches"/>
                        <StatCard title="Pending" value=Some(s.pending) desc="Pending matches"/>
                    </div>
                }
                .into_any(),
            }}
            <div class="card">
                <h2 class="card__title">"Match History"</h2>
                <div class="table-wrap">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Patient"</th>
                                <th>"Donor"</th>
                                <th>"Organ"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || match matches.get() {
                                None => {
                                    view! { <tr><td colspan="6" class="table__empty">"Loading..."</td></tr> }
                                        .into_any()
                                }
                                Some(Err(msg)) => {
                                    view! { <tr><td colspan="6" class="table__empty">{msg}</td></tr> }
                                        .into_any()
                                }
                                Some(Ok(rows)) if rows.is_empty() => {
                                    view! { <tr><td colspan="6" class="table__empty">"No matches recorded"</td></tr> }
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
                                                <td>{dash(&r.date_of_transaction)}</td>
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
        </div>
    }
}
