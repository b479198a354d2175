//! Multi-step portfolio intake.
//!
//! [`IntakeWizard`] owns the draft for the whole flow. Moving forward is
//! guarded by the rules of the step being left; moving back is never
//! guarded. Nothing is persisted until [`IntakeWizard::submit`] makes its
//! single create call.

pub mod validation;

use std::fmt;
use std::future::Future;
use thiserror::Error;

use crate::client::ClientError;
use crate::models::portfolio::{self, CreatePortfolio, Testimonial};

pub use validation::{FieldErrors, FieldKey, validate_document, validate_step};

/// The eight screens of the builder, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Hero,
    About,
    Skills,
    Services,
    Portfolio,
    Testimonials,
    Blog,
    Contact,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::Hero,
        Step::About,
        Step::Skills,
        Step::Services,
        Step::Portfolio,
        Step::Testimonials,
        Step::Blog,
        Step::Contact,
    ];

    pub const FIRST: Step = Step::Hero;
    pub const LAST: Step = Step::Contact;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Step::ALL[i])
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Hero => "Hero Section",
            Step::About => "About Me",
            Step::Skills => "Skills",
            Step::Services => "Services",
            Step::Portfolio => "Portfolio",
            Step::Testimonials => "Testimonials",
            Step::Blog => "Blog",
            Step::Contact => "Contact",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Where a finished draft is sent. Implemented by the HTTP [`ApiClient`](crate::client::ApiClient).
pub trait PortfolioSink {
    fn create_portfolio(
        &self,
        draft: &CreatePortfolio,
    ) -> impl Future<Output = Result<portfolio::Model, ClientError>> + Send;
}

/// Result of [`IntakeWizard::add_skill`]. A duplicate is feedback, not a field error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillOutcome {
    Added(String),
    Duplicate(String),
    Blank,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please fix the errors before submitting")]
    Invalid(FieldErrors),

    #[error("The portfolio can only be submitted from the {0} step")]
    NotOnFinalStep(Step),

    #[error("The portfolio has already been submitted")]
    AlreadySubmitted,

    #[error("Error creating portfolio: {0}")]
    Rejected(#[from] ClientError),
}

/// Single-owner state of one pass through the builder.
#[derive(Debug, Clone)]
pub struct IntakeWizard {
    draft: CreatePortfolio,
    step: Step,
    errors: FieldErrors,
    submitted: bool,
}

impl IntakeWizard {
    /// Start a new draft for the template picked before entering the form.
    pub fn new(template_id: i32) -> Self {
        Self {
            draft: CreatePortfolio::blank(template_id),
            step: Step::FIRST,
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &CreatePortfolio {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Change the draft. Errors recorded for `touched` are cleared, as a user
    /// correcting a field would expect.
    pub fn edit<F>(&mut self, touched: &[FieldKey], f: F)
    where
        F: FnOnce(&mut CreatePortfolio),
    {
        for key in touched {
            self.errors.remove(key);
        }
        f(&mut self.draft);
    }

    /// Validate the active step and move forward when it passes.
    ///
    /// On failure the error map is replaced with the step's failures and the
    /// active step is unchanged. On the last step a pass leaves the wizard
    /// where it is.
    pub fn advance(&mut self) -> Result<Step, FieldErrors> {
        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors.clear();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back one step without validating anything.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn add_skill(&mut self, input: &str) -> SkillOutcome {
        let skill = input.trim();
        if skill.is_empty() {
            return SkillOutcome::Blank;
        }
        if self.draft.skills.iter().any(|s| s == skill) {
            return SkillOutcome::Duplicate(skill.to_string());
        }

        self.draft.skills.push(skill.to_string());
        self.errors.remove(&FieldKey::Skills);
        SkillOutcome::Added(skill.to_string())
    }

    /// Remove the skill at `index`; out of range is a no-op.
    pub fn remove_skill(&mut self, index: usize) -> Option<String> {
        (index < self.draft.skills.len()).then(|| self.draft.skills.remove(index))
    }

    pub fn add_testimonial(&mut self) -> usize {
        self.draft.testimonials.push(Testimonial::default());
        self.draft.testimonials.len()
    }

    /// Send the draft to `sink` as one create call.
    ///
    /// Only the active step is re-validated; earlier steps were checked when
    /// they were left. A rejected call keeps the draft so the user can retry.
    pub async fn submit<S>(&mut self, sink: &S) -> Result<portfolio::Model, SubmitError>
    where
        S: PortfolioSink,
    {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.step != Step::LAST {
            return Err(SubmitError::NotOnFinalStep(self.step));
        }

        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors.clear();

        let created = sink.create_portfolio(&self.draft).await?;
        tracing::info!("Portfolio {} created from intake", created.id);
        self.submitted = true;
        Ok(created)
    }
}
