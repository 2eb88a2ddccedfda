//! Request-shape checks run before any storage access.

use crate::errors::AppError;
use crate::models::events::CreateEvent;
use crate::models::freelancers::{CreateFreelancer, UpdateFreelancer};
use crate::models::organizers::CreateOrganizer;
use crate::models::professions::CreateProfession;
use crate::models::ratings::CreateRating;

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(format!(
            "O campo '{field}' não pode ser vazio"
        )));
    }
    Ok(())
}

/// Accepts `local@domain.tld` shapes: one `@`, no whitespace, a dot inside the domain.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::invalid(format!("Email inválido: {email}"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_score(score: i32) -> Result<(), AppError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::invalid(format!(
            "A nota deve estar entre {MIN_SCORE} e {MAX_SCORE}"
        )));
    }
    Ok(())
}

fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), AppError> {
    require_text("nome", name)?;
    validate_email(email)?;
    require_text("senha", password)
}

impl CreateFreelancer {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_registration(&self.name, &self.email, &self.password)?;
        require_text("especialidade", &self.specialty)
    }
}

impl UpdateFreelancer {
    pub fn validate(&self) -> Result<(), AppError> {
        match &self.specialty {
            Some(specialty) => require_text("especialidade", specialty),
            None => Ok(()),
        }
    }
}

impl CreateOrganizer {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_registration(&self.name, &self.email, &self.password)?;
        require_text("empresa_evento", &self.company_name)
    }
}

impl CreateEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("nome", &self.name)
    }
}

impl CreateProfession {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("nome", &self.name)
    }
}

impl CreateRating {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("joao.silva+eventos@mail.example.com.br").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "ana",
            "@example.com",
            "ana@",
            "ana@example",
            "ana@@example.com",
            "ana @example.com",
            "ana@example..com",
            "ana@.com",
        ] {
            assert!(validate_email(email).is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn scores_are_bounded() {
        assert!(validate_score(0).is_err());
        assert!(validate_score(6).is_err());
        assert!(validate_score(-3).is_err());
        for score in 1..=5 {
            assert!(validate_score(score).is_ok());
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(require_text("nome", "   ").is_err());
        assert!(require_text("nome", "Festa junina").is_ok());
    }

    #[test]
    fn patch_rejects_a_blank_specialty_only_when_present() {
        let blank = UpdateFreelancer {
            specialty: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
        assert!(UpdateFreelancer::default().validate().is_ok());
    }

    #[test]
    fn rating_validation_uses_the_score() {
        let rating = CreateRating {
            rater_id: 1,
            rated_id: 2,
            score: 7,
            comment: None,
            rated_on: None,
        };
        let err = rating.validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
