//! Form Validation
//!
//! Client-side checks run before any request. Errors carry a translation
//! key plus interpolation params.

use chrono::NaiveDate;

use crate::models::{FoodEntryInput, SignupData};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Holds the translation key of the field label
    Required(&'static str),
    PasswordMismatch,
    PasswordTooShort,
    InvalidEmail,
    QuantityTooSmall,
    InvalidDate,
}

impl ValidationError {
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::Required(_) => "validation.required",
            ValidationError::PasswordMismatch => "validation.passwordMismatch",
            ValidationError::PasswordTooShort => "validation.passwordTooShort",
            ValidationError::InvalidEmail => "validation.invalidEmail",
            ValidationError::QuantityTooSmall => "validation.quantityMin",
            ValidationError::InvalidDate => "validation.invalidDate",
        }
    }

    /// Render with the active translator
    pub fn message(&self, t: impl Fn(&str) -> String, t_with: impl Fn(&str, &[(&str, &str)]) -> String) -> String {
        match self {
            ValidationError::Required(field) => t_with(self.key(), &[("field", t(field).as_str())]),
            ValidationError::PasswordTooShort => {
                t_with(self.key(), &[("min", MIN_PASSWORD_LEN.to_string().as_str())])
            }
            _ => t(self.key()),
        }
    }
}

pub fn validate_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_signup(data: &SignupData, confirm_password: &str) -> Result<(), ValidationError> {
    if data.username.trim().is_empty() {
        return Err(ValidationError::Required("auth.username"));
    }
    if data.email.trim().is_empty() {
        return Err(ValidationError::Required("auth.email"));
    }
    if !is_plausible_email(&data.email) {
        return Err(ValidationError::InvalidEmail);
    }
    validate_password(&data.password, confirm_password)
}

fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

pub fn validate_food_entry(input: &FoodEntryInput) -> Result<(), ValidationError> {
    if input.food.trim().is_empty() {
        return Err(ValidationError::Required("forms.foodEntry.food"));
    }
    if input.quantity < 1 {
        return Err(ValidationError::QuantityTooSmall);
    }
    if input.date.trim().is_empty() {
        return Err(ValidationError::Required("forms.foodEntry.date"));
    }
    if NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d").is_err() {
        return Err(ValidationError::InvalidDate);
    }
    Ok(())
}

/// Number input value; anything unparseable or below 1 becomes 1
pub fn parse_quantity(raw: &str) -> i32 {
    raw.trim().parse::<i32>().ok().filter(|q| *q >= 1).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn signup(username: &str, email: &str, password: &str) -> SignupData {
        SignupData {
            username: username.to_string(),
            email: email.to_string(),
            full_name: None,
            password: password.to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_signup_rules() {
        assert_eq!(validate_signup(&signup("ana", "ana@x.io", "secret1"), "secret1"), Ok(()));
        assert_eq!(
            validate_signup(&signup("ana", "ana@x.io", "secret1"), "secret2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_signup(&signup("ana", "ana@x.io", "abc"), "abc"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_signup(&signup(" ", "ana@x.io", "secret1"), "secret1"),
            Err(ValidationError::Required("auth.username"))
        );
        assert_eq!(
            validate_signup(&signup("ana", "ana.x.io", "secret1"), "secret1"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_mismatch_checked_before_length() {
        assert_eq!(validate_password("abc", "abd"), Err(ValidationError::PasswordMismatch));
        assert_eq!(validate_password("abcdef", "abcdef"), Ok(()));
    }

    #[test]
    fn test_food_entry_rules() {
        let mut input = FoodEntryInput::blank("2024-05-01");
        assert_eq!(
            validate_food_entry(&input),
            Err(ValidationError::Required("forms.foodEntry.food"))
        );

        input.food = "Bread".to_string();
        assert_eq!(validate_food_entry(&input), Ok(()));

        input.quantity = 0;
        assert_eq!(validate_food_entry(&input), Err(ValidationError::QuantityTooSmall));

        input.quantity = 2;
        input.date = "2024-13-01".to_string();
        assert_eq!(validate_food_entry(&input), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("-4"), 1);
    }

    #[test]
    fn test_message_interpolates() {
        let t = |k: &str| crate::i18n::translate(crate::i18n::Language::En, k, &[]);
        let t_with = |k: &str, p: &[(&str, &str)]| crate::i18n::translate(crate::i18n::Language::En, k, p);
        assert_eq!(
            ValidationError::Required("forms.foodEntry.food").message(t, t_with),
            "Food is required"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.message(t, t_with),
            "Password must be at least 6 characters!"
        );
    }
}
