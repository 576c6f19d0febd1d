//! Supplier registration form screen.

use domain::{
    Action, BusinessType, Country, DomainError, FieldIssue, Notification, Notifier, Reducer,
    SupplierApplication, SupplierField, SupplierForm,
};
use serde::Serialize;

use crate::view::ViewModel;

/// Supplier form screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFormState {
    pub form: SupplierForm,
}

/// Actions accepted by the supplier form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierAction {
    SetField { field: SupplierField, value: String },
    Reset,
}

impl Action for SupplierAction {
    fn action_type(&self) -> &'static str {
        match self {
            SupplierAction::SetField { .. } => "SetField",
            SupplierAction::Reset => "Reset",
        }
    }
}

impl Reducer for SupplierFormState {
    type Action = SupplierAction;

    fn apply(&mut self, action: Self::Action) {
        match action {
            SupplierAction::SetField { field, value } => self.form.set(field, value),
            SupplierAction::Reset => self.form = SupplierForm::default(),
        }
    }
}

/// One form field as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView<'a> {
    pub field: SupplierField,
    pub value: &'a str,
    pub required: bool,
}

/// A select option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Derived supplier form view.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierFormView<'a> {
    pub fields: Vec<FieldView<'a>>,
    pub countries: Vec<SelectOption>,
    pub business_types: Vec<SelectOption>,
    /// Problems that would block submission right now.
    pub issues: Vec<FieldIssue>,
    pub can_submit: bool,
}

impl<'a> SupplierFormView<'a> {
    pub fn compute(state: &'a SupplierFormState) -> Self {
        let issues = state.form.issues();
        Self {
            fields: SupplierField::ALL
                .into_iter()
                .map(|field| FieldView {
                    field,
                    value: state.form.get(field),
                    required: field.is_required(),
                })
                .collect(),
            countries: Country::ALL
                .into_iter()
                .map(|c| SelectOption {
                    value: c.code(),
                    label: c.name(),
                })
                .collect(),
            business_types: BusinessType::ALL
                .into_iter()
                .map(|b| SelectOption {
                    value: b.key(),
                    label: business_type_label(b),
                })
                .collect(),
            can_submit: issues.is_empty(),
            issues,
        }
    }
}

fn business_type_label(business_type: BusinessType) -> &'static str {
    match business_type {
        BusinessType::Manufacturer => "Manufacturer",
        BusinessType::Distributor => "Distributor",
        BusinessType::Wholesaler => "Wholesaler",
        BusinessType::Retailer => "Retailer",
        BusinessType::Trader => "Trader",
    }
}

impl ViewModel for SupplierFormView<'_> {
    fn name(&self) -> &'static str {
        "SupplierFormView"
    }

    fn count(&self) -> usize {
        self.fields.len()
    }
}

/// The supplier onboarding screen.
pub struct SupplierScreen<N: Notifier> {
    state: SupplierFormState,
    notifier: N,
}

impl<N: Notifier> SupplierScreen<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            state: SupplierFormState::default(),
            notifier,
        }
    }

    pub fn state(&self) -> &SupplierFormState {
        &self.state
    }

    pub fn dispatch(&mut self, action: SupplierAction) {
        tracing::debug!(action = action.action_type(), "supplier action");
        self.state.apply(action);
    }

    /// Convenience for `SetField`.
    pub fn set_field(&mut self, field: SupplierField, value: impl Into<String>) {
        self.dispatch(SupplierAction::SetField {
            field,
            value: value.into(),
        });
    }

    /// Validates and submits the form.
    ///
    /// On success the form is reset and a confirmation sent. On failure the
    /// form is left as typed.
    #[tracing::instrument(skip(self))]
    pub fn submit(&mut self) -> Result<SupplierApplication, DomainError> {
        let application = match self.state.form.validate() {
            Ok(application) => application,
            Err(err) => {
                metrics::counter!("supplier_registrations_rejected_total").increment(1);
                tracing::warn!(error = %err, "supplier registration rejected");
                return Err(err);
            }
        };

        self.dispatch(SupplierAction::Reset);
        metrics::counter!("supplier_registrations_submitted_total").increment(1);
        tracing::info!(company = %application.company_name, "supplier registration submitted");

        self.notifier.notify(Notification::new(
            "Registration Successful!",
            "Your supplier registration has been submitted for approval.",
        ));

        Ok(application)
    }

    pub fn view(&self) -> SupplierFormView<'_> {
        SupplierFormView::compute(&self.state)
    }
}
