//! KYC verification queues for doctors and organizations

use crate::layouts::AdminLayout;
use alshifa_api::types::{DoctorKycRecord, KycStatus, OrganizationKycRecord};
use alshifa_frontend_common::components::{
    EmptyState, ErrorBanner, Notice, Spinner, StatusBadge, Tone,
};
use alshifa_frontend_common::services::{KycService, KycSubject};
use std::future::Future;
use std::rc::Rc;
use thiserror::Error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A record that can sit in a verification queue
pub trait KycEntry: Clone + PartialEq + 'static {
    const SUBJECT: KycSubject;

    /// Rows the backend lists under `status`
    fn fetch(
        service: KycService,
        status: KycStatus,
    ) -> impl Future<Output = Result<Vec<Self>, String>> + 'static;
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Second line under the name
    fn detail(&self) -> String;
    fn license(&self) -> Option<&str>;
    fn is_verified(&self) -> bool;
    fn set_verified(&mut self, verified: bool);
    fn record_rejection(&mut self, _reason: &str) {}
}

impl KycEntry for DoctorKycRecord {
    const SUBJECT: KycSubject = KycSubject::Doctor;

    fn fetch(
        service: KycService,
        status: KycStatus,
    ) -> impl Future<Output = Result<Vec<Self>, String>> + 'static {
        async move { service.doctor_queue(status).await }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> String {
        format!("{} · {}", self.specialization, self.hospital)
    }

    fn license(&self) -> Option<&str> {
        self.license_number.as_deref()
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn set_verified(&mut self, verified: bool) {
        self.is_verified = verified;
    }
}

impl KycEntry for OrganizationKycRecord {
    const SUBJECT: KycSubject = KycSubject::Organization;

    fn fetch(
        service: KycService,
        status: KycStatus,
    ) -> impl Future<Output = Result<Vec<Self>, String>> + 'static {
        async move { service.organization_queue(status).await }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail(&self) -> String {
        self.address
            .clone()
            .or_else(|| self.city.clone())
            .unwrap_or_default()
    }

    fn license(&self) -> Option<&str> {
        self.license_number.as_deref()
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn set_verified(&mut self, verified: bool) {
        self.is_verified = verified;
        if verified {
            self.rejection_reason = None;
        }
    }

    fn record_rejection(&mut self, reason: &str) {
        self.rejection_reason = Some(reason.to_string());
    }
}

/// Local refusals that never reach the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("Already verified.")]
    AlreadyVerified,
    #[error("Please provide a reason for rejection.")]
    ReasonRequired,
    #[error("This record no longer exists.")]
    UnknownEntry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueueRow<T> {
    pub entry: T,
    /// Reason given when this entry was rejected during the session
    pub rejection: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KycQueue<T> {
    rows: Vec<QueueRow<T>>,
    pub filter: KycStatus,
    /// A fetch for `filter` is in flight
    pub loading: bool,
}

impl<T: KycEntry> Default for KycQueue<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filter: KycStatus::default(),
            loading: true,
        }
    }
}

impl<T: KycEntry> KycQueue<T> {
    /// Replace the rows with a fresh fetch for `filter`
    pub fn load(&mut self, filter: KycStatus, entries: Vec<T>) {
        // A slower fetch for a previous filter must not overwrite the current one
        if filter != self.filter {
            tracing::debug!(stale = filter.as_str(), "dropping stale queue fetch");
            return;
        }
        self.rows = entries
            .into_iter()
            .map(|entry| QueueRow {
                entry,
                rejection: None,
            })
            .collect();
        self.loading = false;
    }

    pub fn visible(&self) -> impl Iterator<Item = &QueueRow<T>> {
        self.rows
            .iter()
            .filter(|row| self.filter.admits(row.entry.is_verified()))
    }

    pub fn pending_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.entry.is_verified()).count()
    }

    fn row(&self, id: &str) -> Result<&QueueRow<T>, QueueError> {
        self.rows
            .iter()
            .find(|row| row.entry.id() == id)
            .ok_or(QueueError::UnknownEntry)
    }

    fn row_mut(&mut self, id: &str) -> Option<&mut QueueRow<T>> {
        self.rows.iter_mut().find(|row| row.entry.id() == id)
    }

    pub fn check_approve(&self, id: &str) -> Result<(), QueueError> {
        if self.row(id)?.entry.is_verified() {
            return Err(QueueError::AlreadyVerified);
        }
        Ok(())
    }

    /// Returns the trimmed reason to send
    pub fn check_reject(&self, id: &str, reason: &str) -> Result<String, QueueError> {
        self.row(id)?;
        match reason.trim() {
            "" => Err(QueueError::ReasonRequired),
            reason => Ok(reason.to_string()),
        }
    }

    pub fn mark_approved(&mut self, id: &str) {
        if let Some(row) = self.row_mut(id) {
            row.entry.set_verified(true);
            row.rejection = None;
        }
    }

    pub fn mark_rejected(&mut self, id: &str, reason: &str) {
        if let Some(row) = self.row_mut(id) {
            row.entry.set_verified(false);
            row.entry.record_rejection(reason);
            row.rejection = Some(reason.to_string());
        }
    }
}

pub enum QueueAction<T> {
    Filter(KycStatus),
    Loaded { filter: KycStatus, entries: Vec<T> },
    Approved(String),
    Rejected { id: String, reason: String },
}

impl<T: KycEntry> Reducible for KycQueue<T> {
    type Action = QueueAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QueueAction::Filter(filter) => {
                if filter != next.filter {
                    next.filter = filter;
                    next.loading = true;
                }
            }
            QueueAction::Loaded { filter, entries } => next.load(filter, entries),
            QueueAction::Approved(id) => next.mark_approved(&id),
            QueueAction::Rejected { id, reason } => next.mark_rejected(&id, &reason),
        }
        Rc::new(next)
    }
}

fn status_badge<T: KycEntry>(row: &QueueRow<T>) -> Html {
    let (label, tone) = match (row.entry.is_verified(), &row.rejection) {
        (true, _) => ("Approved", Tone::Success),
        (false, Some(_)) => ("Rejected", Tone::Danger),
        (false, None) => ("Pending", Tone::Warning),
    };
    html! { <StatusBadge {label} {tone} /> }
}

#[function_component(KycQueueView)]
fn kyc_queue_view<T: KycEntry>() -> Html {
    let queue = use_reducer(KycQueue::<T>::default);
    let busy = use_state(|| Option::<String>::None);
    let rejecting = use_state(|| Option::<String>::None);
    let reason = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<String>::None);

    // Rows come from the same backend the actions go to; refetch per filter
    {
        let queue = queue.clone();
        let error = error.clone();
        use_effect_with(queue.filter, move |filter| {
            let filter = *filter;
            wasm_bindgen_futures::spawn_local(async move {
                let entries = match T::fetch(KycService::new(), filter).await {
                    Ok(entries) => entries,
                    Err(message) => {
                        error.set(Some(message));
                        Vec::new()
                    }
                };
                queue.dispatch(QueueAction::Loaded { filter, entries });
            });
        });
    }

    let on_filter = {
        let queue = queue.clone();
        let error = error.clone();
        Callback::from(move |filter: KycStatus| {
            error.set(None);
            queue.dispatch(QueueAction::Filter(filter));
        })
    };

    let on_approve = {
        let queue = queue.clone();
        let busy = busy.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |id: String| {
            if busy.is_some() {
                return;
            }
            if let Err(e) = queue.check_approve(&id) {
                error.set(Some(e.to_string()));
                return;
            }

            busy.set(Some(id.clone()));
            let queue = queue.clone();
            let busy = busy.clone();
            let error = error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match KycService::new().approve(T::SUBJECT, &id).await {
                    Ok(response) => {
                        tracing::info!(id = %id, "KYC approved");
                        queue.dispatch(QueueAction::Approved(id));
                        error.set(None);
                        notice.set(Some(response.message));
                    }
                    Err(message) => error.set(Some(message)),
                }
                busy.set(None);
            });
        })
    };

    let on_start_reject = {
        let rejecting = rejecting.clone();
        let reason = reason.clone();
        Callback::from(move |id: String| {
            reason.set(String::new());
            rejecting.set(Some(id));
        })
    };

    let on_cancel_reject = {
        let rejecting = rejecting.clone();
        Callback::from(move |_: MouseEvent| rejecting.set(None))
    };

    let on_reason = {
        let reason = reason.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            reason.set(input.value());
        })
    };

    let on_confirm_reject = {
        let queue = queue.clone();
        let busy = busy.clone();
        let rejecting = rejecting.clone();
        let reason = reason.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = (*rejecting).clone() else {
                return;
            };
            if busy.is_some() {
                return;
            }
            let reason = match queue.check_reject(&id, &reason) {
                Ok(reason) => reason,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            busy.set(Some(id.clone()));
            let queue = queue.clone();
            let busy = busy.clone();
            let rejecting = rejecting.clone();
            let error = error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match KycService::new().reject(T::SUBJECT, &id, &reason).await {
                    Ok(response) => {
                        tracing::info!(id = %id, "KYC rejected");
                        queue.dispatch(QueueAction::Rejected { id, reason });
                        rejecting.set(None);
                        error.set(None);
                        notice.set(Some(response.message));
                    }
                    Err(message) => error.set(Some(message)),
                }
                busy.set(None);
            });
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let rows: Vec<&QueueRow<T>> = queue.visible().collect();

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <div class="inline-flex rounded-md shadow-sm" role="group">
                    {for KycStatus::ALL.iter().map(|status| {
                        let status = *status;
                        let classes = if status == queue.filter {
                            "px-4 py-2 text-sm font-medium bg-teal-600 text-white border border-teal-600 first:rounded-l-md last:rounded-r-md"
                        } else {
                            "px-4 py-2 text-sm font-medium bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 border border-gray-300 dark:border-gray-600 hover:bg-gray-50 dark:hover:bg-gray-700 first:rounded-l-md last:rounded-r-md"
                        };
                        let on_filter = on_filter.clone();
                        html! {
                            <button class={classes} onclick={Callback::from(move |_: MouseEvent| on_filter.emit(status))}>
                                {status.label()}
                            </button>
                        }
                    })}
                </div>
                <span class="text-sm text-gray-500 dark:text-gray-400">
                    {format!("{} awaiting review", queue.pending_count())}
                </span>
            </div>

            if let Some(message) = (*error).clone() {
                <ErrorBanner {message} />
            }
            if let Some(message) = (*notice).clone() {
                <Notice {message} {on_dismiss} />
            }

            if queue.loading {
                <Spinner label="Loading applications..." />
            } else if rows.is_empty() {
                <EmptyState
                    title="Nothing to review"
                    description={format!("No {} entries.", queue.filter.label().to_lowercase())}
                />
            } else {
                <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Applicant"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"License"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Status"}</th>
                                <th class="relative px-6 py-3"><span class="sr-only">{"Actions"}</span></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            {for rows.iter().map(|row| {
                                let id = row.entry.id().to_string();
                                let is_busy = busy.as_deref() == Some(id.as_str());
                                let is_rejecting = rejecting.as_deref() == Some(id.as_str());

                                let approve = {
                                    let on_approve = on_approve.clone();
                                    let id = id.clone();
                                    Callback::from(move |_: MouseEvent| on_approve.emit(id.clone()))
                                };
                                let start_reject = {
                                    let on_start_reject = on_start_reject.clone();
                                    let id = id.clone();
                                    Callback::from(move |_: MouseEvent| on_start_reject.emit(id.clone()))
                                };

                                html! {
                                    <tr key={id.clone()}>
                                        <td class="px-6 py-4">
                                            <div class="text-sm font-medium text-gray-900 dark:text-gray-100">{row.entry.name()}</div>
                                            <div class="text-sm text-gray-500 dark:text-gray-400">{row.entry.detail()}</div>
                                            if let Some(reason) = &row.rejection {
                                                <div class="mt-1 text-xs text-red-600 dark:text-red-400">{format!("Rejected: {reason}")}</div>
                                            }
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                            {row.entry.license().unwrap_or("-").to_string()}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">{status_badge(row)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                                            if is_rejecting {
                                                <div class="flex items-center justify-end gap-2">
                                                    <input
                                                        type="text"
                                                        placeholder="Reason for rejection"
                                                        class="px-2 py-1 text-sm border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100"
                                                        value={(*reason).clone()}
                                                        oninput={on_reason.clone()}
                                                    />
                                                    <button disabled={is_busy} onclick={on_confirm_reject.clone()}
                                                        class="text-red-600 hover:text-red-900 dark:text-red-400 disabled:opacity-50">
                                                        {"Confirm"}
                                                    </button>
                                                    <button onclick={on_cancel_reject.clone()}
                                                        class="text-gray-500 hover:text-gray-700 dark:text-gray-400">
                                                        {"Cancel"}
                                                    </button>
                                                </div>
                                            } else {
                                                <div class="flex items-center justify-end space-x-2">
                                                    <button disabled={is_busy} onclick={approve}
                                                        class="text-teal-600 hover:text-teal-900 dark:text-teal-400 disabled:opacity-50">
                                                        if is_busy {
                                                            <Spinner label="Working..." inline=true />
                                                        } else {
                                                            {"Approve"}
                                                        }
                                                    </button>
                                                    <span class="text-gray-300 dark:text-gray-600">{"|"}</span>
                                                    <button disabled={is_busy} onclick={start_reject}
                                                        class="text-red-600 hover:text-red-900 dark:text-red-400 disabled:opacity-50">
                                                        {"Reject"}
                                                    </button>
                                                </div>
                                            }
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}

#[function_component(KycDoctors)]
pub fn kyc_doctors() -> Html {
    html! {
        <AdminLayout title="Doctor Verification">
            <KycQueueView<DoctorKycRecord> />
        </AdminLayout>
    }
}

#[function_component(KycOrganizations)]
pub fn kyc_organizations() -> Html {
    html! {
        <AdminLayout title="Organization Verification">
            <KycQueueView<OrganizationKycRecord> />
        </AdminLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: &str, is_verified: bool) -> DoctorKycRecord {
        DoctorKycRecord {
            id: id.to_string(),
            name: format!("Dr. {id}"),
            email: format!("{id}@alshifa.in"),
            specialization: "General Dentist".to_string(),
            license_number: Some(format!("DCI-{id}")),
            hospital: "Al-Shifa Main Center".to_string(),
            is_verified,
            verified_at: None,
            created_at: None,
        }
    }

    fn hospital(id: &str) -> OrganizationKycRecord {
        OrganizationKycRecord {
            id: id.to_string(),
            name: "Al-Shifa Secunderabad".to_string(),
            address: None,
            city: Some("Hyderabad".to_string()),
            license_number: None,
            is_verified: false,
            rejection_reason: None,
            created_at: None,
        }
    }

    fn queue_of<T: KycEntry>(filter: KycStatus, entries: Vec<T>) -> KycQueue<T> {
        let queue = Rc::new(KycQueue::default()).reduce(QueueAction::Filter(filter));
        (*queue.reduce(QueueAction::Loaded { filter, entries })).clone()
    }

    fn doctors() -> KycQueue<DoctorKycRecord> {
        queue_of(
            KycStatus::All,
            vec![
                doctor("yusuf", false),
                doctor("nadia", false),
                doctor("arjun", false),
                doctor("farah", true),
            ],
        )
    }

    fn visible_ids<T: KycEntry>(queue: &KycQueue<T>) -> Vec<String> {
        queue.visible().map(|row| row.entry.id().to_string()).collect()
    }

    #[test]
    fn starts_loading_with_no_rows() {
        let queue = KycQueue::<DoctorKycRecord>::default();
        assert!(queue.loading);
        assert_eq!(queue.filter, KycStatus::Pending);
        assert!(queue.visible().next().is_none());
    }

    #[test]
    fn filter_change_waits_for_its_own_fetch() {
        let queue = Rc::new(doctors()).reduce(QueueAction::Filter(KycStatus::Approved));
        assert!(queue.loading);

        // A late answer for the old filter is ignored
        let queue = queue.reduce(QueueAction::Loaded {
            filter: KycStatus::All,
            entries: vec![doctor("late", false)],
        });
        assert!(queue.loading);
        assert!(!visible_ids(&queue).contains(&"late".to_string()));

        let queue = queue.reduce(QueueAction::Loaded {
            filter: KycStatus::Approved,
            entries: vec![doctor("farah", true)],
        });
        assert!(!queue.loading);
        assert_eq!(visible_ids(&queue), vec!["farah"]);
    }

    #[test]
    fn filter_follows_verification_flag() {
        let mut queue = doctors();
        assert_eq!(visible_ids(&queue).len(), 4);

        queue.filter = KycStatus::Pending;
        assert_eq!(visible_ids(&queue), vec!["yusuf", "nadia", "arjun"]);

        queue.filter = KycStatus::Approved;
        assert_eq!(visible_ids(&queue), vec!["farah"]);
    }

    #[test]
    fn approving_twice_is_refused_locally() {
        let mut queue = doctors();
        assert_eq!(queue.check_approve("farah"), Err(QueueError::AlreadyVerified));
        assert_eq!(queue.check_approve("yusuf"), Ok(()));

        queue.mark_approved("yusuf");
        assert_eq!(queue.check_approve("yusuf"), Err(QueueError::AlreadyVerified));
        assert_eq!(queue.pending_count(), 2);
    }

    #[test]
    fn rejection_needs_a_reason() {
        let queue = doctors();
        assert_eq!(queue.check_reject("nadia", "   "), Err(QueueError::ReasonRequired));
        assert_eq!(
            queue.check_reject("nadia", " License expired "),
            Ok("License expired".to_string())
        );
        assert_eq!(queue.check_reject("nobody", "x"), Err(QueueError::UnknownEntry));
    }

    #[test]
    fn rejected_entries_stay_pending_with_their_reason() {
        let mut queue = doctors();
        queue.mark_rejected("arjun", "Blurry license scan");

        let row = queue.visible().find(|row| row.entry.id() == "arjun").unwrap();
        assert_eq!(row.rejection.as_deref(), Some("Blurry license scan"));
        assert!(!row.entry.is_verified);
    }

    #[test]
    fn organization_rejection_is_recorded_on_the_record() {
        let queue = Rc::new(queue_of(KycStatus::Pending, vec![hospital("h-004")]));
        let queue = queue.reduce(QueueAction::Rejected {
            id: "h-004".to_string(),
            reason: "Missing fire safety certificate".to_string(),
        });
        let row = queue.visible().next().unwrap();
        assert_eq!(
            row.entry.rejection_reason.as_deref(),
            Some("Missing fire safety certificate")
        );
        assert_eq!(row.entry.detail(), "Hyderabad");

        let queue = queue.reduce(QueueAction::Approved("h-004".to_string()));
        assert_eq!(queue.pending_count(), 0);
        assert!(queue.visible().next().is_none());
    }
}
