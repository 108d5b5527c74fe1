//! Cascading doctor filter and sex-aware specialty menu.
//!
//! The doctor filter runs three independent subset stages — city, specialty,
//! age — over the *full* roster on every call. Callers never feed a previous
//! result back in: clearing a constraint must restore doctors that an earlier
//! constraint removed.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::eligibility::{age_on, doctor_eligible_for_age, specialty_allowed_for_sex};
use crate::models::{City, Doctor, DoctorConstraints, Sex, Specialty};

// ═══════════════════════════════════════════
// Doctor roster
// ═══════════════════════════════════════════

/// Doctors in `roster` matching every set constraint, as of the local date.
pub fn filter_doctors<'a>(roster: &'a [Doctor], constraints: &DoctorConstraints) -> Vec<&'a Doctor> {
    filter_doctors_on(roster, constraints, Local::now().date_naive())
}

/// Same as [`filter_doctors`] with an explicit "today" for the age stage.
///
/// An empty result is a valid outcome, not an error.
pub fn filter_doctors_on<'a>(
    roster: &'a [Doctor],
    constraints: &DoctorConstraints,
    today: NaiveDate,
) -> Vec<&'a Doctor> {
    let stage: Vec<&Doctor> = roster.iter().collect();
    let stage = by_city(stage, constraints.city.as_ref());
    let stage = by_specialty(stage, constraints.specialty.as_ref());
    let stage = by_age(stage, constraints.birth_date, today);

    tracing::trace!(
        roster = roster.len(),
        matched = stage.len(),
        city = constraints.city.as_ref().map(|c| c.id.as_str()),
        specialty = constraints.specialty.as_ref().map(|s| s.id.as_str()),
        has_birth_date = constraints.birth_date.is_some(),
        "Doctor roster filtered"
    );

    stage
}

fn by_city<'a>(doctors: Vec<&'a Doctor>, city: Option<&City>) -> Vec<&'a Doctor> {
    match city {
        Some(city) => doctors.into_iter().filter(|d| d.city_id == city.id).collect(),
        None => doctors,
    }
}

fn by_specialty<'a>(doctors: Vec<&'a Doctor>, specialty: Option<&Specialty>) -> Vec<&'a Doctor> {
    match specialty {
        Some(spec) => doctors
            .into_iter()
            .filter(|d| d.specialty_id == spec.id)
            .collect(),
        None => doctors,
    }
}

fn by_age<'a>(doctors: Vec<&'a Doctor>, birth_date: Option<NaiveDate>, today: NaiveDate) -> Vec<&'a Doctor> {
    match birth_date {
        Some(birth) => {
            let age = Some(age_on(birth, today));
            doctors
                .into_iter()
                .filter(|d| doctor_eligible_for_age(d, age))
                .collect()
        }
        None => doctors,
    }
}

// ═══════════════════════════════════════════
// Specialty menu
// ═══════════════════════════════════════════

/// Specialties offered to a patient of `sex`, in catalog order.
/// With no sex chosen the full list comes back unchanged.
pub fn available_specialties(all: &[Specialty], sex: Option<Sex>) -> Vec<&Specialty> {
    all.iter()
        .filter(|spec| specialty_allowed_for_sex(spec, sex))
        .collect()
}

/// Memoized [`available_specialties`] keyed on `(sex, catalog snapshot)`.
///
/// The snapshot is compared by `Arc` identity: catalogs are write-once, so a
/// new load is a new allocation and invalidates the cached menu.
#[derive(Debug, Default)]
pub struct SpecialtyMenu {
    cached: Option<CachedMenu>,
}

#[derive(Debug)]
struct CachedMenu {
    sex: Option<Sex>,
    source: Arc<[Specialty]>,
    items: Vec<Specialty>,
}

impl SpecialtyMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the menu for `sex`, recomputing only when the key changed.
    pub fn get(&mut self, all: &Arc<[Specialty]>, sex: Option<Sex>) -> &[Specialty] {
        let fresh = matches!(
            &self.cached,
            Some(c) if c.sex == sex && Arc::ptr_eq(&c.source, all)
        );
        if !fresh {
            let items = available_specialties(all, sex).into_iter().cloned().collect();
            tracing::debug!(sex = sex.map(|s| s.as_str()), "Specialty menu recomputed");
            self.cached = Some(CachedMenu {
                sex,
                source: Arc::clone(all),
                items,
            });
        }
        match &self.cached {
            Some(c) => &c.items,
            None => &[],
        }
    }

    /// Whether the next `get` with this key would be served from cache.
    pub fn is_cached(&self, all: &Arc<[Specialty]>, sex: Option<Sex>) -> bool {
        matches!(&self.cached, Some(c) if c.sex == sex && Arc::ptr_eq(&c.source, all))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpecialtyParams;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn city(id: &str) -> City {
        City {
            id: id.into(),
            name: format!("City {id}"),
        }
    }

    fn specialty(id: &str, gender: Option<&str>) -> Specialty {
        Specialty {
            id: id.into(),
            name: format!("Spec {id}"),
            params: gender.map(|g| SpecialtyParams {
                gender: Some(g.into()),
                ..Default::default()
            }),
        }
    }

    fn doctor(id: &str, city_id: &str, specialty_id: &str, is_pediatrician: bool) -> Doctor {
        Doctor {
            id: id.into(),
            name: "Name".into(),
            surname: format!("Surname{id}"),
            city_id: city_id.into(),
            specialty_id: specialty_id.into(),
            is_pediatrician,
        }
    }

    fn roster() -> Vec<Doctor> {
        vec![
            doctor("1", "A", "X", false),
            doctor("2", "A", "X", true),
            doctor("3", "A", "Y", false),
            doctor("4", "B", "X", true),
            doctor("5", "B", "Y", false),
        ]
    }

    fn ids(doctors: &[&Doctor]) -> Vec<String> {
        doctors.iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn no_constraints_returns_full_roster() {
        let roster = roster();
        let result = filter_doctors_on(&roster, &DoctorConstraints::default(), today());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn city_match_and_miss() {
        let roster = vec![doctor("1", "A", "X", false)];
        let hit = DoctorConstraints {
            city: Some(city("A")),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors_on(&roster, &hit, today())), vec!["1"]);

        let miss = DoctorConstraints {
            city: Some(city("B")),
            ..Default::default()
        };
        assert!(filter_doctors_on(&roster, &miss, today()).is_empty());
    }

    #[test]
    fn specialty_stage_filters_by_id() {
        let roster = roster();
        let constraints = DoctorConstraints {
            specialty: Some(specialty("Y", None)),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors_on(&roster, &constraints, today())), vec!["3", "5"]);
    }

    #[test]
    fn stages_combine() {
        let roster = roster();
        let constraints = DoctorConstraints {
            city: Some(city("A")),
            specialty: Some(specialty("X", None)),
            birth_date: NaiveDate::from_ymd_opt(2015, 6, 1),
        };
        assert_eq!(ids(&filter_doctors_on(&roster, &constraints, today())), vec!["2"]);
    }

    #[test]
    fn minor_sees_only_pediatricians() {
        let roster = roster();
        for birth in [(2010, 1, 1), (2020, 5, 5), (2008, 10, 19)] {
            let constraints = DoctorConstraints {
                birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2),
                ..Default::default()
            };
            let result = filter_doctors_on(&roster, &constraints, today());
            assert!(!result.is_empty());
            assert!(result.iter().all(|d| d.is_pediatrician));
        }
    }

    #[test]
    fn adult_sees_only_non_pediatricians() {
        let roster = roster();
        for birth in [(1960, 3, 3), (2000, 12, 31), (2008, 10, 18)] {
            let constraints = DoctorConstraints {
                birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2),
                ..Default::default()
            };
            let result = filter_doctors_on(&roster, &constraints, today());
            assert!(!result.is_empty());
            assert!(result.iter().all(|d| !d.is_pediatrician));
        }
    }

    #[test]
    fn exactly_eighteen_today_is_adult() {
        let today = Local::now().date_naive();
        let birth = today
            .checked_sub_months(chrono::Months::new(18 * 12))
            .unwrap();
        let roster = roster();
        let constraints = DoctorConstraints {
            birth_date: Some(birth),
            ..Default::default()
        };
        let result = filter_doctors(&roster, &constraints);
        assert_eq!(ids(&result), vec!["1", "3", "5"]);
    }

    #[test]
    fn future_birth_date_routes_to_pediatricians() {
        let roster = roster();
        let constraints = DoctorConstraints {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors_on(&roster, &constraints, today())), vec!["2", "4"]);
    }

    #[test]
    fn clearing_birth_date_restores_both_kinds() {
        let roster = roster();
        let mut constraints = DoctorConstraints {
            city: Some(city("A")),
            birth_date: NaiveDate::from_ymd_opt(2015, 1, 1),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors_on(&roster, &constraints, today())), vec!["2"]);

        constraints.birth_date = None;
        assert_eq!(ids(&filter_doctors_on(&roster, &constraints, today())), vec!["1", "2", "3"]);
    }

    #[test]
    fn same_constraints_same_result() {
        let roster = roster();
        let constraints = DoctorConstraints {
            city: Some(city("B")),
            birth_date: NaiveDate::from_ymd_opt(1985, 4, 4),
            ..Default::default()
        };
        let first = filter_doctors_on(&roster, &constraints, today());
        let second = filter_doctors_on(&roster, &constraints, today());
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec!["5"]);
    }

    #[test]
    fn empty_roster_yields_empty_result() {
        let constraints = DoctorConstraints {
            city: Some(city("A")),
            ..Default::default()
        };
        assert!(filter_doctors_on(&[], &constraints, today()).is_empty());
        assert!(filter_doctors_on(&[], &DoctorConstraints::default(), today()).is_empty());
    }

    fn catalog_specialties() -> Vec<Specialty> {
        vec![
            specialty("1", None),
            specialty("2", Some("Female")),
            specialty("3", Some("Male")),
            specialty("4", None),
        ]
    }

    #[test]
    fn available_specialties_never_contradict_sex() {
        let all = catalog_specialties();
        for sex in [Some(Sex::Male), Some(Sex::Female), None] {
            let menu = available_specialties(&all, sex);
            if let Some(sex) = sex {
                assert!(menu.iter().all(|s| s.gender() != Some(sex.opposite().as_str())));
            }
        }
        let male: Vec<&str> = available_specialties(&all, Some(Sex::Male))
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(male, vec!["1", "3", "4"]);
        let female: Vec<&str> = available_specialties(&all, Some(Sex::Female))
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(female, vec!["1", "2", "4"]);
    }

    #[test]
    fn unset_sex_returns_full_list_unchanged() {
        let all = catalog_specialties();
        let menu: Vec<Specialty> = available_specialties(&all, None).into_iter().cloned().collect();
        assert_eq!(menu, all);
    }

    #[test]
    fn menu_memoizes_on_sex_and_snapshot() {
        let all: Arc<[Specialty]> = catalog_specialties().into();
        let mut menu = SpecialtyMenu::new();
        assert!(!menu.is_cached(&all, Some(Sex::Male)));

        assert_eq!(menu.get(&all, Some(Sex::Male)).len(), 3);
        assert!(menu.is_cached(&all, Some(Sex::Male)));
        assert!(!menu.is_cached(&all, Some(Sex::Female)));

        assert_eq!(menu.get(&all, None).len(), 4);
        assert!(menu.is_cached(&all, None));

        // Equal content, different snapshot: recomputed.
        let reloaded: Arc<[Specialty]> = catalog_specialties().into();
        assert!(!menu.is_cached(&reloaded, None));
        assert_eq!(menu.get(&reloaded, None).len(), 4);
        assert!(menu.is_cached(&reloaded, None));
    }
}
