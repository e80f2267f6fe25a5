use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

use super::payload::{format_quote_message, EmailParams};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("field {0} holds a single value")]
    NotAList(String),
    #[error("field {0} holds a list of values")]
    NotAScalar(String),
}

/// State of one form instance, addressable by the `name` attribute of its inputs.
pub trait FormFields: Default + Clone {
    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError>;

    fn toggle_list_field(&mut self, name: &str, value: &str, included: bool)
        -> Result<(), FormError>;

    /// Snapshot of the form as sent to the gateway.
    fn to_params(&self, sent_at: NaiveDateTime) -> EmailParams;

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "from_name",
            Self::Email => "from_email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from_name" => Ok(Self::Name),
            "from_email" => Ok(Self::Email),
            "subject" => Ok(Self::Subject),
            "message" => Ok(Self::Message),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.from_name,
            ContactField::Email => &self.from_email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

impl FormFields for ContactForm {
    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let slot = match name.parse::<ContactField>()? {
            ContactField::Name => &mut self.from_name,
            ContactField::Email => &mut self.from_email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
        Ok(())
    }

    fn toggle_list_field(&mut self, name: &str, _: &str, _: bool) -> Result<(), FormError> {
        // every contact field is scalar
        let field = name.parse::<ContactField>()?;
        Err(FormError::NotAList(field.name().to_string()))
    }

    fn to_params(&self, _: NaiveDateTime) -> EmailParams {
        EmailParams {
            from_name: self.from_name.clone(),
            from_email: self.from_email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    FullName,
    Email,
    Phone,
    Company,
    AppCategory,
    AppType,
    Platforms,
    DesignPreference,
    KeyFeatures,
    Authentication,
    Backend,
    PaymentIntegration,
    PushNotifications,
    Timeline,
    Budget,
    AdditionalDetails,
}

impl QuoteField {
    pub fn all() -> Vec<QuoteField> {
        vec![
            Self::FullName,
            Self::Email,
            Self::Phone,
            Self::Company,
            Self::AppCategory,
            Self::AppType,
            Self::Platforms,
            Self::DesignPreference,
            Self::KeyFeatures,
            Self::Authentication,
            Self::Backend,
            Self::PaymentIntegration,
            Self::PushNotifications,
            Self::Timeline,
            Self::Budget,
            Self::AdditionalDetails,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::AppCategory => "appCategory",
            Self::AppType => "appType",
            Self::Platforms => "platforms",
            Self::DesignPreference => "designPreference",
            Self::KeyFeatures => "keyFeatures",
            Self::Authentication => "authentication",
            Self::Backend => "backend",
            Self::PaymentIntegration => "paymentIntegration",
            Self::PushNotifications => "pushNotifications",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::AdditionalDetails => "additionalDetails",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::Platforms)
    }
}

impl FromStr for QuoteField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    // client
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,

    // project
    pub app_category: String,
    pub app_type: String,
    pub platforms: Vec<String>,

    // design & features
    pub design_preference: String,
    pub key_features: String,
    pub authentication: String,

    // technical
    pub backend: String,
    pub payment_integration: String,
    pub push_notifications: String,

    // timeline & budget
    pub timeline: String,
    pub budget: String,
    pub additional_details: String,
}

impl QuoteForm {
    /// Current scalar value, `None` for the list field.
    pub fn get(&self, field: QuoteField) -> Option<&str> {
        let value = match field {
            QuoteField::FullName => &self.full_name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Company => &self.company,
            QuoteField::AppCategory => &self.app_category,
            QuoteField::AppType => &self.app_type,
            QuoteField::Platforms => return None,
            QuoteField::DesignPreference => &self.design_preference,
            QuoteField::KeyFeatures => &self.key_features,
            QuoteField::Authentication => &self.authentication,
            QuoteField::Backend => &self.backend,
            QuoteField::PaymentIntegration => &self.payment_integration,
            QuoteField::PushNotifications => &self.push_notifications,
            QuoteField::Timeline => &self.timeline,
            QuoteField::Budget => &self.budget,
            QuoteField::AdditionalDetails => &self.additional_details,
        };
        Some(value)
    }

    fn scalar_mut(&mut self, field: QuoteField) -> Option<&mut String> {
        let slot = match field {
            QuoteField::FullName => &mut self.full_name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Company => &mut self.company,
            QuoteField::AppCategory => &mut self.app_category,
            QuoteField::AppType => &mut self.app_type,
            QuoteField::Platforms => return None,
            QuoteField::DesignPreference => &mut self.design_preference,
            QuoteField::KeyFeatures => &mut self.key_features,
            QuoteField::Authentication => &mut self.authentication,
            QuoteField::Backend => &mut self.backend,
            QuoteField::PaymentIntegration => &mut self.payment_integration,
            QuoteField::PushNotifications => &mut self.push_notifications,
            QuoteField::Timeline => &mut self.timeline,
            QuoteField::Budget => &mut self.budget,
            QuoteField::AdditionalDetails => &mut self.additional_details,
        };
        Some(slot)
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

impl FormFields for QuoteForm {
    fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        let field = name.parse::<QuoteField>()?;
        let slot = self
            .scalar_mut(field)
            .ok_or_else(|| FormError::NotAScalar(field.name().to_string()))?;
        *slot = value;
        Ok(())
    }

    fn toggle_list_field(
        &mut self,
        name: &str,
        value: &str,
        included: bool,
    ) -> Result<(), FormError> {
        let field = name.parse::<QuoteField>()?;
        if !field.is_list() {
            return Err(FormError::NotAList(field.name().to_string()));
        }
        if included {
            if !self.has_platform(value) {
                self.platforms.push(value.to_string());
            }
        } else {
            self.platforms.retain(|p| p != value);
        }
        Ok(())
    }

    fn to_params(&self, sent_at: NaiveDateTime) -> EmailParams {
        EmailParams {
            from_name: self.full_name.clone(),
            from_email: self.email.clone(),
            subject: format!("Project Quote Request - {}", self.app_category),
            message: format_quote_message(self, sent_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sent_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 26, 53))
            .unwrap()
    }

    #[test]
    fn test_set_field_keeps_last_value() {
        let mut form = ContactForm::default();
        form.set_field("from_name", "J".to_string()).unwrap();
        form.set_field("from_name", "Jane".to_string()).unwrap();
        form.set_field("subject", "Hello".to_string()).unwrap();

        assert_eq!(form.get(ContactField::Name), "Jane");
        assert_eq!(form.get(ContactField::Subject), "Hello");
        assert_eq!(form.get(ContactField::Email), "");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = ContactForm::default();
        let err = form.set_field("phone", "123".to_string()).unwrap_err();
        assert_eq!(err, FormError::UnknownField("phone".to_string()));
        assert_eq!(form, ContactForm::default());

        let mut quote = QuoteForm::default();
        assert!(quote.set_field("from_name", "x".to_string()).is_err());
    }

    #[test]
    fn test_contact_has_no_list_fields() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.toggle_list_field("message", "x", true),
            Err(FormError::NotAList("message".to_string()))
        );
    }

    #[test]
    fn test_platform_toggles_accumulate_in_order() {
        let mut form = QuoteForm::default();
        form.toggle_list_field("platforms", "Web Hosting", true).unwrap();
        form.toggle_list_field("platforms", "iOS App Store", true).unwrap();
        form.toggle_list_field("platforms", "Google Play Store", true).unwrap();
        form.toggle_list_field("platforms", "iOS App Store", false).unwrap();
        form.toggle_list_field("platforms", "iOS App Store", true).unwrap();

        assert_eq!(
            form.platforms,
            vec!["Web Hosting", "Google Play Store", "iOS App Store"]
        );
    }

    #[test]
    fn test_platform_toggle_never_duplicates() {
        let mut form = QuoteForm::default();
        form.toggle_list_field("platforms", "Web Hosting", true).unwrap();
        form.toggle_list_field("platforms", "Web Hosting", true).unwrap();
        assert_eq!(form.platforms, vec!["Web Hosting"]);

        form.toggle_list_field("platforms", "Web Hosting", false).unwrap();
        form.toggle_list_field("platforms", "Web Hosting", false).unwrap();
        assert!(form.platforms.is_empty());
    }

    #[test]
    fn test_list_and_scalar_fields_not_interchangeable() {
        let mut form = QuoteForm::default();
        assert_eq!(
            form.set_field("platforms", "Web Hosting".to_string()),
            Err(FormError::NotAScalar("platforms".to_string()))
        );
        assert_eq!(
            form.toggle_list_field("budget", "$5,000+", true),
            Err(FormError::NotAList("budget".to_string()))
        );
    }

    #[test]
    fn test_every_quote_field_name_round_trips() {
        for field in QuoteField::all() {
            assert_eq!(field.name().parse::<QuoteField>(), Ok(field));
        }
        assert_eq!(QuoteField::all().len(), 16);
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut form = QuoteForm::default();
        form.set_field("fullName", "Jane Doe".to_string()).unwrap();
        form.toggle_list_field("platforms", "Web Hosting", true).unwrap();
        form.clear();
        assert_eq!(form, QuoteForm::default());
    }

    #[test]
    fn test_contact_params_forward_raw_fields() {
        let form = ContactForm {
            from_name: "Jane".to_string(),
            from_email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Let's talk".to_string(),
        };
        let params = form.to_params(sent_at());
        assert_eq!(params.from_name, "Jane");
        assert_eq!(params.from_email, "jane@x.com");
        assert_eq!(params.subject, "Hi");
        assert_eq!(params.message, "Let's talk");
    }

    #[test]
    fn test_quote_params_subject_uses_category() {
        let mut form = QuoteForm::default();
        form.set_field("fullName", "Jane Doe".to_string()).unwrap();
        form.set_field("email", "jane@x.com".to_string()).unwrap();
        form.set_field("appCategory", "Health & Fitness".to_string()).unwrap();

        let params = form.to_params(sent_at());
        assert_eq!(params.subject, "Project Quote Request - Health & Fitness");
        assert_eq!(params.from_name, "Jane Doe");
        assert!(params.message.starts_with("NEW PROJECT QUOTE REQUEST"));
    }
}
