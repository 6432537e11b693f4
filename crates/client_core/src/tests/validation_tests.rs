use super::*;

#[test]
fn empty_form_reports_both_required_fields() {
    let violations = validate(&LeadForm::default());
    assert_eq!(violations.len(), 2);
    assert_eq!(violations.get(LeadField::FullName), Some(FULL_NAME_REQUIRED));
    assert_eq!(violations.get(LeadField::Email), Some(EMAIL_REQUIRED));
}

#[test]
fn missing_full_name_is_a_violation() {
    let violations = validate(&LeadForm::new("", "jane@x.com"));
    assert_eq!(violations.fields().collect::<Vec<_>>(), vec![LeadField::FullName]);
}

#[test]
fn missing_email_is_required_not_invalid() {
    let violations = validate(&LeadForm::new("Jane Doe", ""));
    assert_eq!(violations.get(LeadField::Email), Some(EMAIL_REQUIRED));
    assert!(!violations.contains(LeadField::FullName));
}

#[test]
fn malformed_email_is_reported_as_invalid_format() {
    for email in ["jane", "jane@", "@x.com", "jane doe@x.com", "jane@-x.com", "jane@x..com"] {
        let violations = validate(&LeadForm::new("Jane Doe", email));
        assert_eq!(
            violations.get(LeadField::Email),
            Some(EMAIL_INVALID),
            "expected {email:?} to be rejected"
        );
    }
}

#[test]
fn valid_required_fields_pass_regardless_of_optionals() {
    for email in ["jane@x.com", "j.doe+leads@mail.example.org", "a@b", "o'brien@x-y.io"] {
        let form = LeadForm::new("Jane Doe", email)
            .with(LeadField::PhoneNumber, "not a phone number")
            .with(LeadField::Notes, "line one\nline two");
        assert!(validate(&form).is_empty(), "expected {email:?} to pass");
    }
}

#[test]
fn optional_fields_are_never_constrained() {
    let form = LeadForm::new("Jane Doe", "jane@x.com")
        .with(LeadField::PhoneNumber, "")
        .with(LeadField::CompanyName, "")
        .with(LeadField::Notes, "");
    assert!(validate(&form).is_empty());
}

#[test]
fn to_fields_drops_blank_optionals() {
    let form = LeadForm::new("Jane Doe", "jane@x.com")
        .with(LeadField::CompanyName, "Acme")
        .with(LeadField::PhoneNumber, "   ");
    let fields = form.to_fields();
    assert_eq!(fields.company_name.as_deref(), Some("Acme"));
    assert_eq!(fields.phone_number, None);
    assert_eq!(fields.notes, None);
}

#[test]
fn violation_set_display_lists_fields_in_form_order() {
    let violations = validate(&LeadForm::default());
    assert_eq!(
        violations.to_string(),
        "fullName: Full Name is required; email: Email is required"
    );
}

#[test]
fn service_leads_are_held_to_form_rules() {
    let good = LeadFields::new("Jane Doe", "jane@x.com").into_lead(shared::domain::LeadId(1));
    assert!(is_valid_lead(&good));

    let bad_email = LeadFields::new("Jane Doe", "not-an-email").into_lead(shared::domain::LeadId(2));
    assert!(!is_valid_lead(&bad_email));

    let no_name = LeadFields::new("", "jane@x.com").into_lead(shared::domain::LeadId(3));
    assert!(!is_valid_lead(&no_name));
}
