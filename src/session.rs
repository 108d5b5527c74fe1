//! Caller-side orchestration of one doctor-selection form.
//!
//! `SelectionSession` owns the mutable pieces (selection state, form values,
//! derived lists) and calls the pure filtering/validation functions on every
//! event. The catalog snapshot is shared and never written.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::eligibility::{format_birthdate, parse_birthdate};
use crate::filtering::{filter_doctors, SpecialtyMenu};
use crate::models::{City, Doctor, DoctorConstraints, Field, Sex, Specialty};
use crate::resolver::{
    doctor_label, find_city_by_name, find_doctor_by_surname, find_specialty_by_name,
    resolve_doctor_info, DoctorInfo,
};
use crate::validation::{email_label, phone_label, FieldState, FormState, SubmitOutcome};

/// Current selector choices, resolved against the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub sex: Option<Sex>,
    pub city: Option<City>,
    pub specialty: Option<Specialty>,
    pub birth_date: Option<NaiveDate>,
}

impl SelectionState {
    pub fn constraints(&self) -> DoctorConstraints {
        DoctorConstraints {
            city: self.city.clone(),
            specialty: self.specialty.clone(),
            birth_date: self.birth_date,
        }
    }
}

/// One entry of the doctor selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorOption {
    pub id: String,
    /// Selector value.
    pub surname: String,
    /// `"<name> <surname> (<specialty>)"`.
    pub label: String,
}

pub struct SelectionSession {
    catalog: Arc<Catalog>,
    form: FormState,
    selection: SelectionState,
    filtered: Vec<Doctor>,
    menu: SpecialtyMenu,
}

impl SelectionSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filtered = catalog.doctors().to_vec();
        Self {
            catalog,
            form: FormState::new(),
            selection: SelectionState::default(),
            filtered,
            menu: SpecialtyMenu::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Doctors matching the current selection.
    pub fn filtered_doctors(&self) -> &[Doctor] {
        &self.filtered
    }

    pub fn doctor_options(&self) -> Vec<DoctorOption> {
        self.filtered
            .iter()
            .map(|d| DoctorOption {
                id: d.id.clone(),
                surname: d.surname.clone(),
                label: doctor_label(d, self.catalog.specialties()),
            })
            .collect()
    }

    /// Specialties offered for the current sex (memoized).
    pub fn available_specialties(&mut self) -> &[Specialty] {
        self.menu
            .get(self.catalog.specialties_snapshot(), self.selection.sex)
    }

    pub fn email_label(&self) -> &'static str {
        email_label(self.form.values())
    }

    pub fn phone_label(&self) -> &'static str {
        phone_label(self.form.values())
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        self.form.field_state(field)
    }

    // ─── Events ──────────────────────────────────────────────────────────────

    /// Sex drives the specialty menu only; the doctor list is left as is.
    pub fn set_sex(&mut self, raw: &str) {
        self.form.change(Field::Sex, raw);
        self.selection.sex = Sex::from_str(raw).ok();
        tracing::debug!(sex = self.selection.sex.map(|s| s.as_str()), "Sex selected");
    }

    /// An unknown name clears the city constraint.
    pub fn select_city(&mut self, name: &str) {
        self.form.change(Field::City, name);
        self.selection.city = find_city_by_name(self.catalog.cities(), name).cloned();
        self.refilter();
    }

    /// An unknown name clears the specialty constraint.
    pub fn select_specialty(&mut self, name: &str) {
        self.form.change(Field::Specialty, name);
        self.selection.specialty = find_specialty_by_name(self.catalog.specialties(), name).cloned();
        self.refilter();
    }

    pub fn set_birth_date(&mut self, date: Option<NaiveDate>) {
        self.form
            .change(Field::Birthdate, date.map(format_birthdate).unwrap_or_default());
        self.selection.birth_date = date;
        self.refilter();
    }

    /// Picks a doctor by surname and back-populates city and specialty so the
    /// three selectors agree. Returns the resolved names, `None` for an
    /// unknown surname.
    pub fn select_doctor(&mut self, surname: &str) -> Option<DoctorInfo> {
        self.form.change(Field::Doctor, surname);
        let doctor = find_doctor_by_surname(self.catalog.doctors(), surname)?.clone();

        let info = resolve_doctor_info(
            self.catalog.cities(),
            self.catalog.specialties(),
            &doctor.city_id,
            &doctor.specialty_id,
        );
        self.form.change(Field::City, info.city_name.as_str());
        self.form.change(Field::Specialty, info.specialty_name.as_str());
        self.selection.city = self
            .catalog
            .cities()
            .iter()
            .find(|c| c.id == doctor.city_id)
            .cloned();
        self.selection.specialty = self
            .catalog
            .specialties()
            .iter()
            .find(|s| s.id == doctor.specialty_id)
            .cloned();

        tracing::debug!(
            doctor_id = %doctor.id,
            city = %info.city_name,
            specialty = %info.specialty_name,
            "Doctor selected"
        );
        self.refilter();
        Some(info)
    }

    /// Generic text edit; selector fields are routed to their dedicated events.
    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::Sex => self.set_sex(value),
            Field::City => self.select_city(value),
            Field::Specialty => self.select_specialty(value),
            Field::Doctor => {
                self.select_doctor(value);
            }
            Field::Birthdate => {
                self.form.change(Field::Birthdate, value);
                self.selection.birth_date = parse_birthdate(value).ok();
                self.refilter();
            }
            Field::Name | Field::Email | Field::Phone => self.form.change(field, value),
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.form.blur(field);
    }

    /// Accepting resets the form, the selection and the derived lists.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit();
        if matches!(outcome, SubmitOutcome::Accepted(_)) {
            self.selection = SelectionState::default();
            self.refilter();
        }
        outcome
    }

    /// Always recomputed from the full roster.
    fn refilter(&mut self) {
        self.filtered = filter_doctors(self.catalog.doctors(), &self.selection.constraints())
            .into_iter()
            .cloned()
            .collect();
    }
}
