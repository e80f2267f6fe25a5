use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::form::QuoteForm;

const NOT_PROVIDED: &str = "Not provided";
const NONE_PROVIDED: &str = "None provided";
const NOT_SPECIFIED: &str = "Not specified";

/// Template parameters handed to the email relay. Field names match the relay template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn join_or_placeholder(values: &[String]) -> String {
    if values.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        values.join(", ")
    }
}

/// Renders a quote request as the plain-text email body.
///
/// Every section is always present; blank fields show a placeholder instead of being
/// dropped so the email has the same shape no matter what was skipped.
pub fn format_quote_message(form: &QuoteForm, sent_at: NaiveDateTime) -> String {
    let field = |value: &str| or_placeholder(value, NOT_PROVIDED).to_string();

    let message = format!(
        r#"
NEW PROJECT QUOTE REQUEST
========================

CLIENT INFORMATION:
- Name: {name}
- Email: {email}
- Phone: {phone}
- Company: {company}

PROJECT DETAILS:
- Category: {category}
- App Type: {app_type}
- Publishing Platforms: {platforms}

DESIGN & FEATURES:
- Design Preference: {design}
- Key Features:
{features}

- Authentication: {auth}

TECHNICAL REQUIREMENTS:
- Backend: {backend}
- Payment Integration: {payment}
- Push Notifications: {push}

TIMELINE & BUDGET:
- Desired Timeline: {timeline}
- Budget Range: {budget}

ADDITIONAL DETAILS:
{details}

---
Sent from: CV Website - Project Quote Form
Date: {date}
"#,
        name = field(&form.full_name),
        email = field(&form.email),
        phone = field(&form.phone),
        company = field(&form.company),
        category = field(&form.app_category),
        app_type = field(&form.app_type),
        platforms = join_or_placeholder(&form.platforms),
        design = field(&form.design_preference),
        features = field(&form.key_features),
        auth = field(&form.authentication),
        backend = field(&form.backend),
        payment = field(&form.payment_integration),
        push = field(&form.push_notifications),
        timeline = field(&form.timeline),
        budget = field(&form.budget),
        details = or_placeholder(&form.additional_details, NONE_PROVIDED),
        date = sent_at.format("%-m/%-d/%Y, %-I:%M:%S %p"),
    );
    message.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::FormFields;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sent_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|d| d.and_hms_opt(21, 5, 9))
            .unwrap()
    }

    fn filled_form() -> QuoteForm {
        let mut form = QuoteForm::default();
        for (name, value) in [
            ("fullName", "Jane Doe"),
            ("email", "jane@x.com"),
            ("appCategory", "Education / Learning"),
            ("appType", "app type placeholder"),
            ("designPreference", "design placeholder"),
            ("keyFeatures", "features placeholder"),
            ("authentication", "auth placeholder"),
            ("backend", "backend placeholder"),
            ("paymentIntegration", "payment placeholder"),
            ("pushNotifications", "push placeholder"),
            ("timeline", "timeline placeholder"),
            ("budget", "budget placeholder"),
        ] {
            form.set_field(name, value.to_string()).unwrap();
        }
        form
    }

    #[test]
    fn test_full_message_layout() {
        let mut form = filled_form();
        form.set_field("phone", "+1 555".to_string()).unwrap();
        form.toggle_list_field("platforms", "iOS App Store", true).unwrap();
        form.toggle_list_field("platforms", "Web Hosting", true).unwrap();
        form.set_field("additionalDetails", "Ship soon".to_string()).unwrap();

        let expected = "NEW PROJECT QUOTE REQUEST
========================

CLIENT INFORMATION:
- Name: Jane Doe
- Email: jane@x.com
- Phone: +1 555
- Company: Not provided

PROJECT DETAILS:
- Category: Education / Learning
- App Type: app type placeholder
- Publishing Platforms: iOS App Store, Web Hosting

DESIGN & FEATURES:
- Design Preference: design placeholder
- Key Features:
features placeholder

- Authentication: auth placeholder

TECHNICAL REQUIREMENTS:
- Backend: backend placeholder
- Payment Integration: payment placeholder
- Push Notifications: push placeholder

TIMELINE & BUDGET:
- Desired Timeline: timeline placeholder
- Budget Range: budget placeholder

ADDITIONAL DETAILS:
Ship soon

---
Sent from: CV Website - Project Quote Form
Date: 3/14/2025, 9:05:09 PM";

        assert_eq!(format_quote_message(&form, sent_at()), expected);
    }

    #[test]
    fn test_empty_platforms_render_not_specified() {
        let form = filled_form();
        let message = format_quote_message(&form, sent_at());

        assert!(message.contains("- Publishing Platforms: Not specified\n"));
        assert!(message.contains("- Name: Jane Doe\n"));
        assert!(message.contains("- Email: jane@x.com\n"));
        assert!(message.contains("- Category: Education / Learning\n"));
        assert!(message.contains("- Budget Range: budget placeholder\n"));
    }

    #[test]
    fn test_optional_fields_use_placeholders() {
        let message = format_quote_message(&filled_form(), sent_at());
        assert!(message.contains("- Phone: Not provided\n"));
        assert!(message.contains("- Company: Not provided\n"));
        assert!(message.contains("ADDITIONAL DETAILS:\nNone provided\n"));
    }

    #[test]
    fn test_blank_form_keeps_every_section() {
        let message = format_quote_message(&QuoteForm::default(), sent_at());
        let sections = [
            "CLIENT INFORMATION:",
            "PROJECT DETAILS:",
            "DESIGN & FEATURES:",
            "TECHNICAL REQUIREMENTS:",
            "TIMELINE & BUDGET:",
            "ADDITIONAL DETAILS:",
        ];
        let positions = sections
            .iter()
            .map(|s| message.find(s).expect("section should be present"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!message.contains(": \n"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let form = filled_form();
        assert_eq!(
            format_quote_message(&form, sent_at()),
            format_quote_message(&form, sent_at())
        );
    }

    #[test]
    fn test_morning_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 1)
            .and_then(|d| d.and_hms_opt(0, 30, 0))
            .unwrap();
        let message = format_quote_message(&filled_form(), at);
        assert!(message.ends_with("Date: 12/1/2024, 12:30:00 AM"));
    }
}
