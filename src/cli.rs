//! `docselect` command line: list eligible doctors, validate a filled form.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::catalog::{
    load_catalog, Catalog, CatalogError, CatalogSource, HttpCatalogSource, JsonDirCatalogSource,
};
use crate::config::CatalogConfig;
use crate::eligibility::parse_birthdate;
use crate::models::{Field, FormValues, Sex};
use crate::session::SelectionSession;
use crate::validation::{validate, ValidationReport};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Form is invalid ({0} problem(s))")]
    InvalidForm(usize),
}

#[derive(Parser, Debug)]
#[command(name = "docselect", version)]
#[command(about = "Find an eligible doctor and check patient contact details.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List doctors matching the given constraints
    #[command(alias = "d")]
    Doctors {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Validate patient form values
    #[command(alias = "v")]
    Validate(FormArgs),
}

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Catalog service base URL (defaults to $DOCSELECT_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,
    /// Directory with cities.json, specialties.json and doctors.json
    #[arg(long, conflicts_with = "api_url")]
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub sex: Option<Sex>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
    /// Birth date, DD/MM/YYYY
    #[arg(long, value_parser = parse_birthdate)]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// Birth date, DD/MM/YYYY
    #[arg(long, default_value = "")]
    pub birthdate: String,
    #[arg(long, default_value = "")]
    pub sex: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub specialty: String,
    #[arg(long, default_value = "")]
    pub doctor: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
}

impl From<FormArgs> for FormValues {
    fn from(args: FormArgs) -> Self {
        FormValues {
            name: args.name,
            birthdate: args.birthdate,
            sex: args.sex,
            city: args.city,
            specialty: args.specialty,
            doctor: args.doctor,
            email: args.email,
            phone: args.phone,
        }
    }
}

impl SourceArgs {
    fn into_source(self) -> Result<Box<dyn CatalogSource>, CliError> {
        if let Some(dir) = self.catalog_dir {
            return Ok(Box::new(JsonDirCatalogSource::new(dir)));
        }
        let mut config = CatalogConfig::from_env();
        if let Some(url) = self.api_url {
            config = config.with_base_url(url);
        }
        Ok(Box::new(HttpCatalogSource::new(config)?))
    }
}

pub async fn run(cli: CommandLine) -> Result<(), CliError> {
    match cli.command {
        Commands::Doctors { source, filter } => {
            let source = source.into_source()?;
            let catalog = load_catalog(source.as_ref()).await?;
            for line in doctors_report(catalog, filter) {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Validate(form) => {
            let values = FormValues::from(form);
            let report = validate(&values);
            for line in validation_report(&report) {
                println!("{line}");
            }
            if report.is_valid {
                Ok(())
            } else {
                let problems = report.field_errors.values().filter(|e| e.is_some()).count()
                    + usize::from(report.group_error.is_some());
                Err(CliError::InvalidForm(problems))
            }
        }
    }
}

/// Applies the filter flags through a session and renders the result.
pub fn doctors_report(catalog: Arc<Catalog>, filter: FilterArgs) -> Vec<String> {
    let mut session = SelectionSession::new(catalog);

    if let Some(sex) = filter.sex {
        session.set_sex(sex.as_str());
    }
    if let Some(city) = filter.city.as_deref() {
        session.select_city(city);
        if session.selection().city.is_none() {
            tracing::warn!(city, "Unknown city, constraint ignored");
        }
    }
    if let Some(specialty) = filter.specialty.as_deref() {
        session.select_specialty(specialty);
        if session.selection().specialty.is_none() {
            tracing::warn!(specialty, "Unknown specialty, constraint ignored");
        }
    }
    session.set_birth_date(filter.birth_date);

    let mut lines = Vec::new();
    let specialties: Vec<String> = session
        .available_specialties()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    lines.push(format!("Specialties: {}", specialties.join(", ")));

    let options = session.doctor_options();
    if options.is_empty() {
        lines.push("No doctor matches the current selection".to_string());
    } else {
        lines.push(format!("Doctors ({}):", options.len()));
        lines.extend(options.into_iter().map(|o| format!("  {}", o.label)));
    }
    lines
}

pub fn validation_report(report: &ValidationReport) -> Vec<String> {
    let mut lines: Vec<String> = Field::ALL
        .iter()
        .map(|&field| match report.message(field) {
            Some(message) => format!("{field}: {message}"),
            None => format!("{field}: ok"),
        })
        .collect();
    if let Some(group) = report.group_error {
        lines.push(format!("contact: {group}"));
    }
    lines
}
