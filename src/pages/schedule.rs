//! Match scheduler: list of arranged matches, scheduling form, delete.

use crate::logic::{EntityList, FormCollector, FormSchema};
use crate::models::{
    is_schedule_time_control, FieldViolation, GameType, MatchStatus, PageError, RecordId,
    ScheduledMatch, TimeControl, SCHEDULE_TIME_CONTROLS,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

pub static SCHEDULE_FORM: FormSchema = FormSchema {
    fields: &["opponent", "date", "time", "time_control", "game_type", "notes"],
    required: &["opponent", "date", "time", "time_control", "game_type"],
    consent: None,
};

#[derive(Clone, Debug, Serialize)]
pub struct TimeControlOption {
    pub value: &'static str,
    pub label: String,
}

impl From<&TimeControl> for TimeControlOption {
    fn from(tc: &TimeControl) -> Self {
        Self {
            value: tc.value,
            label: tc.label(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ScheduleView {
    pub matches: Vec<ScheduledMatch>,
    pub form: FormCollector,
    pub time_controls: Vec<TimeControlOption>,
    pub game_types: Vec<GameType>,
}

#[derive(Clone, Debug)]
pub struct ScheduleMatch {
    matches: EntityList<ScheduledMatch>,
    form: FormCollector,
}

impl ScheduleMatch {
    pub fn new(matches: &[ScheduledMatch]) -> Self {
        Self {
            matches: EntityList::seeded(matches.to_vec()),
            form: FormCollector::new(&SCHEDULE_FORM),
        }
    }

    pub fn matches(&self) -> &[ScheduledMatch] {
        self.matches.get()
    }

    pub fn form(&self) -> &FormCollector {
        &self.form
    }

    pub fn set_fields(&mut self, fields: BTreeMap<String, String>) -> Result<(), PageError> {
        let violations: Vec<FieldViolation> = fields
            .into_iter()
            .filter_map(|(key, value)| self.form.set_field(&key, value).err())
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PageError::Validation(violations))
        }
    }

    /// Schedule a new pending match. The date must be later than `today`.
    pub fn submit(&mut self, today: NaiveDate) -> Result<RecordId, PageError> {
        let id = self
            .form
            .submit(&mut self.matches, |id, form| build_match(id, form, today))?;
        log::debug!("Match {} scheduled", id);
        Ok(id)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<(), PageError> {
        if !self.matches.remove(id) {
            return Err(PageError::RecordNotFound(id));
        }
        log::debug!("Scheduled match {} deleted", id);
        Ok(())
    }

    pub fn view(&self) -> ScheduleView {
        ScheduleView {
            matches: self.matches.get().to_vec(),
            form: self.form.clone(),
            time_controls: SCHEDULE_TIME_CONTROLS.iter().map(TimeControlOption::from).collect(),
            game_types: GameType::ALL.to_vec(),
        }
    }
}

fn build_match(
    id: RecordId,
    form: &FormCollector,
    today: NaiveDate,
) -> Result<ScheduledMatch, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let date = match NaiveDate::parse_from_str(form.value("date").trim(), "%Y-%m-%d") {
        Ok(date) if date <= today => {
            violations.push(FieldViolation::invalid("date", "date must be after today"));
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(FieldViolation::invalid("date", "expected YYYY-MM-DD"));
            None
        }
    };
    let time = match NaiveTime::parse_from_str(form.value("time").trim(), "%H:%M") {
        Ok(time) => Some(time),
        Err(_) => {
            violations.push(FieldViolation::invalid("time", "expected HH:MM"));
            None
        }
    };
    let time_control = form.value("time_control").trim();
    if !is_schedule_time_control(time_control) {
        violations.push(FieldViolation::invalid("time_control", "unknown time control"));
    }
    let game_type = match form.value("game_type").trim().parse::<GameType>() {
        Ok(game_type) => Some(game_type),
        Err(reason) => {
            violations.push(FieldViolation::invalid("game_type", reason));
            None
        }
    };

    match (date, time, game_type) {
        (Some(date), Some(time), Some(game_type)) if violations.is_empty() => Ok(ScheduledMatch {
            id,
            opponent: form.value("opponent").trim().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            time: time.format("%H:%M").to_string(),
            time_control: time_control.to_string(),
            game_type,
            status: MatchStatus::Pending,
            notes: form.value("notes").trim().to_string(),
        }),
        _ => Err(violations),
    }
}
