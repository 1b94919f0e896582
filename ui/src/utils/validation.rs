use crate::permit::form_validation::EmailValidation;

/// Border state for the applicant email field
pub fn email_validation_class(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "input-field input-valid",
        EmailValidation::Invalid => "input-field input-invalid",
        _ => "input-field",
    }
}

/// Class for a field that fails a minimum-length or required check once touched
pub fn required_field_class(value: &str, minimum: usize) -> &'static str {
    let length = value.trim().chars().count();
    if length == 0 {
        "input-field"
    } else if length >= minimum {
        "input-field input-valid"
    } else {
        "input-field input-invalid"
    }
}
