//! Supplier onboarding form and the application it produces.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Input fields on the supplier registration form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierField {
    CompanyName,
    ContactPerson,
    Email,
    Phone,
    Address,
    City,
    Country,
    Website,
    BusinessType,
    Description,
    TaxId,
}

impl SupplierField {
    pub const ALL: [SupplierField; 11] = [
        SupplierField::CompanyName,
        SupplierField::ContactPerson,
        SupplierField::Email,
        SupplierField::Phone,
        SupplierField::Address,
        SupplierField::City,
        SupplierField::Country,
        SupplierField::Website,
        SupplierField::BusinessType,
        SupplierField::Description,
        SupplierField::TaxId,
    ];

    /// Returns true if the form cannot be submitted without this field.
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            SupplierField::Website | SupplierField::Description | SupplierField::TaxId
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupplierField::CompanyName => "company name",
            SupplierField::ContactPerson => "contact person",
            SupplierField::Email => "email",
            SupplierField::Phone => "phone",
            SupplierField::Address => "address",
            SupplierField::City => "city",
            SupplierField::Country => "country",
            SupplierField::Website => "website",
            SupplierField::BusinessType => "business type",
            SupplierField::Description => "description",
            SupplierField::TaxId => "tax id",
        }
    }
}

impl std::fmt::Display for SupplierField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A problem with one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", content = "field", rename_all = "lowercase")]
pub enum FieldIssue {
    Missing(SupplierField),
    Invalid(SupplierField),
}

impl FieldIssue {
    pub fn field(&self) -> SupplierField {
        match self {
            FieldIssue::Missing(field) | FieldIssue::Invalid(field) => *field,
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldIssue::Missing(field) => write!(f, "{field} is required"),
            FieldIssue::Invalid(field) => write!(f, "{field} is invalid"),
        }
    }
}

/// Countries a supplier can register from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Us,
    Uk,
    Ca,
    Au,
    De,
    Fr,
    In,
    Cn,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Us,
        Country::Uk,
        Country::Ca,
        Country::Au,
        Country::De,
        Country::Fr,
        Country::In,
        Country::Cn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Country::Us => "us",
            Country::Uk => "uk",
            Country::Ca => "ca",
            Country::Au => "au",
            Country::De => "de",
            Country::Fr => "fr",
            Country::In => "in",
            Country::Cn => "cn",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Country::Us => "United States",
            Country::Uk => "United Kingdom",
            Country::Ca => "Canada",
            Country::Au => "Australia",
            Country::De => "Germany",
            Country::Fr => "France",
            Country::In => "India",
            Country::Cn => "China",
        }
    }
}

impl std::str::FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::unknown("country", s))
    }
}

/// Kind of business a supplier runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Manufacturer,
    Distributor,
    Wholesaler,
    Retailer,
    Trader,
}

impl BusinessType {
    pub const ALL: [BusinessType; 5] = [
        BusinessType::Manufacturer,
        BusinessType::Distributor,
        BusinessType::Wholesaler,
        BusinessType::Retailer,
        BusinessType::Trader,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BusinessType::Manufacturer => "manufacturer",
            BusinessType::Distributor => "distributor",
            BusinessType::Wholesaler => "wholesaler",
            BusinessType::Retailer => "retailer",
            BusinessType::Trader => "trader",
        }
    }
}

impl std::str::FromStr for BusinessType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessType::ALL
            .into_iter()
            .find(|b| b.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::unknown("business type", s))
    }
}

/// Raw, as-typed contents of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierForm {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub website: String,
    pub business_type: String,
    pub description: String,
    pub tax_id: String,
}

impl SupplierForm {
    /// Returns the current value of a field.
    pub fn get(&self, field: SupplierField) -> &str {
        match field {
            SupplierField::CompanyName => &self.company_name,
            SupplierField::ContactPerson => &self.contact_person,
            SupplierField::Email => &self.email,
            SupplierField::Phone => &self.phone,
            SupplierField::Address => &self.address,
            SupplierField::City => &self.city,
            SupplierField::Country => &self.country,
            SupplierField::Website => &self.website,
            SupplierField::BusinessType => &self.business_type,
            SupplierField::Description => &self.description,
            SupplierField::TaxId => &self.tax_id,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: SupplierField, value: String) {
        let slot = match field {
            SupplierField::CompanyName => &mut self.company_name,
            SupplierField::ContactPerson => &mut self.contact_person,
            SupplierField::Email => &mut self.email,
            SupplierField::Phone => &mut self.phone,
            SupplierField::Address => &mut self.address,
            SupplierField::City => &mut self.city,
            SupplierField::Country => &mut self.country,
            SupplierField::Website => &mut self.website,
            SupplierField::BusinessType => &mut self.business_type,
            SupplierField::Description => &mut self.description,
            SupplierField::TaxId => &mut self.tax_id,
        };
        *slot = value;
    }

    /// Returns true if no field has been filled in.
    pub fn is_blank(&self) -> bool {
        SupplierField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    /// Lists every missing or invalid field, in form order.
    pub fn issues(&self) -> Vec<FieldIssue> {
        SupplierField::ALL
            .into_iter()
            .filter_map(|field| self.check(field))
            .collect()
    }

    fn check(&self, field: SupplierField) -> Option<FieldIssue> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return field.is_required().then_some(FieldIssue::Missing(field));
        }
        let valid = match field {
            SupplierField::Email => is_plausible_email(value),
            SupplierField::Country => value.parse::<Country>().is_ok(),
            SupplierField::BusinessType => value.parse::<BusinessType>().is_ok(),
            _ => true,
        };
        (!valid).then_some(FieldIssue::Invalid(field))
    }

    /// Validates the form and builds the application it describes.
    pub fn validate(&self) -> Result<SupplierApplication, DomainError> {
        let issues = self.issues();
        if !issues.is_empty() {
            return Err(DomainError::InvalidRegistration(issues));
        }

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(SupplierApplication {
            company_name: self.company_name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            country: self.country.trim().parse()?,
            website: optional(&self.website),
            business_type: self.business_type.trim().parse()?,
            description: optional(&self.description),
            tax_id: optional(&self.tax_id),
        })
    }
}

fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// A validated supplier registration, ready to be submitted for approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierApplication {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: Country,
    pub website: Option<String>,
    pub business_type: BusinessType,
    pub description: Option<String>,
    pub tax_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SupplierForm {
        SupplierForm {
            company_name: "SteelCorp Industries".to_string(),
            contact_person: "Ada Park".to_string(),
            email: "sales@steelcorp.example".to_string(),
            phone: "+1 (555) 010-2000".to_string(),
            address: "12 Foundry Row".to_string(),
            city: "Pittsburgh".to_string(),
            country: "us".to_string(),
            business_type: "manufacturer".to_string(),
            ..SupplierForm::default()
        }
    }

    #[test]
    fn test_blank_form_reports_every_required_field() {
        let issues = SupplierForm::default().issues();
        let fields: Vec<_> = issues.iter().map(FieldIssue::field).collect();
        assert_eq!(
            fields,
            [
                SupplierField::CompanyName,
                SupplierField::ContactPerson,
                SupplierField::Email,
                SupplierField::Phone,
                SupplierField::Address,
                SupplierField::City,
                SupplierField::Country,
                SupplierField::BusinessType,
            ]
        );
        assert!(issues.iter().all(|i| matches!(i, FieldIssue::Missing(_))));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = filled_form();
        form.set(SupplierField::City, "   ".to_string());
        assert_eq!(form.issues(), [FieldIssue::Missing(SupplierField::City)]);
    }

    #[test]
    fn test_invalid_values_are_flagged() {
        let mut form = filled_form();
        form.set(SupplierField::Email, "not-an-email".to_string());
        form.set(SupplierField::Country, "atlantis".to_string());
        form.set(SupplierField::BusinessType, "broker".to_string());
        assert_eq!(
            form.issues(),
            [
                FieldIssue::Invalid(SupplierField::Email),
                FieldIssue::Invalid(SupplierField::Country),
                FieldIssue::Invalid(SupplierField::BusinessType),
            ]
        );
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let application = filled_form().validate().unwrap();
        assert_eq!(application.country, Country::Us);
        assert_eq!(application.business_type, BusinessType::Manufacturer);
        assert_eq!(application.website, None);
        assert_eq!(application.tax_id, None);
    }

    #[test]
    fn test_validate_trims_values() {
        let mut form = filled_form();
        form.set(SupplierField::CompanyName, "  SteelCorp  ".to_string());
        form.set(SupplierField::Website, " https://steelcorp.example ".to_string());
        let application = form.validate().unwrap();
        assert_eq!(application.company_name, "SteelCorp");
        assert_eq!(application.website.as_deref(), Some("https://steelcorp.example"));
    }

    #[test]
    fn test_validate_returns_registration_error() {
        let err = SupplierForm::default().validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidRegistration(ref issues) if issues.len() == 8));
    }

    #[test]
    fn test_get_and_set_cover_every_field() {
        let mut form = SupplierForm::default();
        assert!(form.is_blank());
        for field in SupplierField::ALL {
            form.set(field, field.label().to_string());
        }
        for field in SupplierField::ALL {
            assert_eq!(form.get(field), field.label());
        }
        assert!(!form.is_blank());
    }

    #[test]
    fn test_country_names() {
        assert_eq!("UK".parse::<Country>().unwrap().name(), "United Kingdom");
        assert_eq!(Country::ALL.len(), 8);
    }
}
