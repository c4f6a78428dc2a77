//! Join-tournament page: pick an offer, fill in the registration form, submit.

use crate::logic::{EntityList, FormCollector, FormSchema};
use crate::models::{
    parse_rating, ExperienceLevel, FieldViolation, PageError, RecordId, Registration,
    TournamentOffer,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub static REGISTRATION_FORM: FormSchema = FormSchema {
    fields: &["full_name", "email", "rating", "experience", "motivation"],
    required: &["full_name", "email", "rating"],
    consent: Some("agree_terms"),
};

/// Fields to merge into the registration draft.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistrationFields {
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    pub agree_terms: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct JoinView {
    pub offers: Vec<OfferCard>,
    pub selected: Option<TournamentOffer>,
    pub form: FormCollector,
    pub can_submit: bool,
    pub registrations: Vec<Registration>,
}

#[derive(Clone, Debug, Serialize)]
pub struct OfferCard {
    #[serde(flatten)]
    pub offer: TournamentOffer,
    pub badge: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug)]
pub struct JoinTournament {
    offers: Vec<TournamentOffer>,
    selected: Option<String>,
    form: FormCollector,
    registrations: EntityList<Registration>,
}

impl JoinTournament {
    pub fn new(offers: &[TournamentOffer]) -> Self {
        Self {
            offers: offers.to_vec(),
            selected: None,
            form: FormCollector::new(&REGISTRATION_FORM),
            registrations: EntityList::new(),
        }
    }

    pub fn selected(&self) -> Option<&TournamentOffer> {
        let slug = self.selected.as_deref()?;
        self.offers.iter().find(|o| o.slug == slug)
    }

    pub fn select(&mut self, slug: &str) -> Result<(), PageError> {
        if !self.offers.iter().any(|o| o.slug == slug) {
            return Err(PageError::UnknownOption {
                field: "tournament",
                value: slug.to_string(),
            });
        }
        self.selected = Some(slug.to_string());
        Ok(())
    }

    pub fn form(&self) -> &FormCollector {
        &self.form
    }

    pub fn registrations(&self) -> &[Registration] {
        self.registrations.get()
    }

    pub fn set_fields(&mut self, update: RegistrationFields) -> Result<(), PageError> {
        let mut violations = Vec::new();
        for (key, value) in update.fields {
            if let Err(v) = self.form.set_field(&key, value) {
                violations.push(v);
            }
        }
        if let Some(agreed) = update.agree_terms {
            if let Err(v) = self.form.set_consent(agreed) {
                violations.push(v);
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PageError::Validation(violations))
        }
    }

    /// Register for the selected tournament. The selection survives the form reset.
    pub fn submit(&mut self) -> Result<RecordId, PageError> {
        let tournament = match self.selected() {
            Some(offer) => offer.slug.clone(),
            None => return Err(PageError::Validation(vec![FieldViolation::missing("tournament")])),
        };
        let id = self
            .form
            .submit(&mut self.registrations, |id, form| build_registration(id, tournament, form))?;
        log::debug!("Registration {} submitted", id);
        Ok(id)
    }

    pub fn view(&self) -> JoinView {
        JoinView {
            offers: self
                .offers
                .iter()
                .map(|o| OfferCard {
                    badge: o.badge(),
                    selected: self.selected.as_deref() == Some(o.slug.as_str()),
                    offer: o.clone(),
                })
                .collect(),
            selected: self.selected().cloned(),
            form: self.form.clone(),
            can_submit: self.form.can_submit(),
            registrations: self.registrations.get().to_vec(),
        }
    }
}

fn build_registration(
    id: RecordId,
    tournament: String,
    form: &FormCollector,
) -> Result<Registration, Vec<FieldViolation>> {
    let mut violations = Vec::new();
    let email = form.value("email").trim();
    if !looks_like_email(email) {
        violations.push(FieldViolation::invalid("email", "not an email address"));
    }
    let experience = match form.non_blank("experience") {
        None => None,
        Some(raw) => match raw.parse::<ExperienceLevel>() {
            Ok(level) => Some(level),
            Err(reason) => {
                violations.push(FieldViolation::invalid("experience", reason));
                None
            }
        },
    };
    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(Registration {
        id,
        tournament,
        full_name: form.value("full_name").trim().to_string(),
        email: email.to_string(),
        rating: parse_rating(form.value("rating")),
        experience,
        motivation: form.value("motivation").trim().to_string(),
    })
}

/// `local@domain` with a dot somewhere in the domain.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
