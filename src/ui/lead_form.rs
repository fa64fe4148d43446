//! Lead capture form and its modal
//!
//! One request per submit, posted as JSON to the same-origin lead route.
//! `LeadFormState::begin` refuses a second submit while one is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::lead::{
    LeadError, LeadFormState, LeadSubmission, PricingPlan, SubmissionOutcome,
};
use crate::ui::common::{BaseModal, FormField, SelectField, StatusMessage};

/// Shared open/closed state of the lead modal plus the plan it was opened for
#[derive(Clone, Copy)]
pub struct LeadModalContext {
    pub is_open: RwSignal<bool>,
    pub plan: RwSignal<Option<PricingPlan>>,
}

impl LeadModalContext {
    pub fn open(&self, plan: Option<PricingPlan>) {
        self.plan.set(plan);
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }
}

pub fn provide_lead_modal_context() -> LeadModalContext {
    let ctx = LeadModalContext {
        is_open: RwSignal::new(false),
        plan: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

pub fn use_lead_modal_context() -> LeadModalContext {
    use_context::<LeadModalContext>().expect("LeadModalContext should be provided")
}

/// POST a submission to the lead route
pub async fn submit_lead(submission: &LeadSubmission) -> SubmissionOutcome {
    let outcome = SubmissionOutcome::from(post_lead(submission).await);
    if let SubmissionOutcome::Failure(reason) = &outcome {
        leptos::logging::warn!("lead submission failed: {}", reason);
    }
    outcome
}

#[cfg(not(feature = "ssr"))]
async fn post_lead(submission: &LeadSubmission) -> Result<(), LeadError> {
    use crate::core::lead::{ErrorResponse, LEAD_API_PATH};
    use gloo_net::http::Request;

    let response = Request::post(LEAD_API_PATH)
        .json(submission)
        .map_err(|e| LeadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| LeadError::Transport(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => response.status_text(),
    };
    Err(LeadError::Rejected { status, message })
}

#[cfg(feature = "ssr")]
async fn post_lead(_submission: &LeadSubmission) -> Result<(), LeadError> {
    Err(LeadError::Transport("lead form submits from the browser only".to_string()))
}

/// Email/name/mobile/plan form; the plan select starts at `initial_plan`
#[component]
pub fn LeadForm(
    #[prop(into, default = Signal::from(None))]
    initial_plan: Signal<Option<PricingPlan>>,
    /// Prefix for the field ids, unique per form on the page
    id_prefix: &'static str,
    /// Label on the submit button
    #[prop(default = "Request a demo")]
    submit_label: &'static str,
    /// When this turns true again (modal reopened) the old status is cleared
    #[prop(optional)]
    active: Option<Signal<bool>>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let plan = RwSignal::new(String::new());
    let state = RwSignal::new(LeadFormState::default());

    // Follow the plan the modal was opened for
    Effect::new(move |_| {
        plan.set(
            initial_plan
                .get()
                .map(|p| p.to_string())
                .unwrap_or_default(),
        );
    });

    if let Some(active) = active {
        Effect::new(move |_| {
            if active.get() {
                state.update(|s| s.clear_status());
            }
        });
    }

    let is_submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let status = Signal::derive(move || state.with(|s| s.status()));

    let plan_options = std::iter::once((String::new(), "Not sure yet".to_string()))
        .chain(
            PricingPlan::ALL
                .iter()
                .map(|p| (p.to_string(), p.display_name().to_string())),
        )
        .collect::<Vec<_>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let submission = LeadSubmission::new(email.get_untracked())
            .name(name.get_untracked())
            .mobile(mobile.get_untracked())
            .plan(plan.with_untracked(|p| PricingPlan::from_str(p)));

        spawn_local(async move {
            let outcome = submit_lead(&submission).await;
            if outcome == SubmissionOutcome::Success {
                email.set(String::new());
                name.set(String::new());
                mobile.set(String::new());
            }
            state.try_update(|s| s.finish(&outcome));
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <FormField
                label="Work email"
                name="userEmail"
                id_prefix=id_prefix
                input_type="email"
                placeholder="you@company.com"
                autocomplete="email"
                required=true
                value=email.into()
                on_input=Callback::new(move |v| email.set(v))
                disabled=is_submitting
            />
            <FormField
                label="Name"
                name="name"
                id_prefix=id_prefix
                placeholder="Jane Doe"
                autocomplete="name"
                value=name.into()
                on_input=Callback::new(move |v| name.set(v))
                disabled=is_submitting
            />
            <FormField
                label="Mobile"
                name="mobile"
                id_prefix=id_prefix
                input_type="tel"
                placeholder="+1 555 0100"
                autocomplete="tel"
                value=mobile.into()
                on_input=Callback::new(move |v| mobile.set(v))
                disabled=is_submitting
            />
            <SelectField
                label="Plan"
                name="plan"
                id_prefix=id_prefix
                value=plan.into()
                on_change=Callback::new(move |v| plan.set(v))
                options=plan_options
                disabled=is_submitting
            />

            <button
                type="submit"
                class="btn-primary w-full"
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Sending..." } else { submit_label }}
            </button>

            <StatusMessage status=status />
        </form>
    }
}

/// Lead form in a modal, driven by `LeadModalContext`
#[component]
pub fn LeadCaptureModal() -> impl IntoView {
    let ctx = use_lead_modal_context();

    let title = Signal::derive(move || match ctx.plan.get() {
        Some(plan) => format!("Get started with {}", plan.display_name()),
        None => "Talk to our team".to_string(),
    });

    view! {
        <BaseModal
            title=title
            subtitle="Leave your details and we'll reach out."
            is_open=ctx.is_open.into()
            on_close=Callback::new(move |_| ctx.close())
        >
            <LeadForm id_prefix="modal" initial_plan=ctx.plan active=ctx.is_open.into() />
        </BaseModal>
    }
}
