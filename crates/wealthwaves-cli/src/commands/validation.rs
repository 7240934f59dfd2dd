use chrono::NaiveDate;
use clap::Args;
use serde_json::{json, Value};

use wealthwaves_core::policy::EnginePolicy;
use wealthwaves_core::validation::age::age_from_dob;
use wealthwaves_core::validation::countries::countries;
use wealthwaves_core::validation::signup::{validate_signup, SignupForm};

use crate::input;

/// Arguments for signup validation
#[derive(Args)]
pub struct SignupArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Mobile number without the dial code
    #[arg(long, default_value = "")]
    pub mobile: String,

    /// ISO code or dial code (IN, +91, ...)
    #[arg(long, default_value = "")]
    pub country: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: Option<NaiveDate>,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub confirm_password: String,

    /// Validate as of this date instead of today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for the age calculation
#[derive(Args)]
pub struct AgeArgs {
    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: NaiveDate,

    /// Compute the age on this date instead of today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn run_validate_signup(
    args: SignupArgs,
    policy: &EnginePolicy,
) -> Result<Value, Box<dyn std::error::Error>> {
    let as_of = args.as_of.unwrap_or_else(today);
    let form: SignupForm = match input::load(args.input.as_deref())? {
        Some(form) => form,
        None => SignupForm {
            name: args.name,
            email: args.email,
            mobile: args.mobile,
            country: args.country,
            dob: args.dob,
            password: args.password,
            confirm_password: args.confirm_password,
        },
    };

    let report = validate_signup(&form, as_of, &policy.age);
    Ok(json!({ "result": report }))
}

pub fn run_age(args: AgeArgs, policy: &EnginePolicy) -> Result<Value, Box<dyn std::error::Error>> {
    let as_of = args.as_of.unwrap_or_else(today);
    let age = age_from_dob(args.dob, as_of, &policy.age)?;

    Ok(json!({
        "result": {
            "age": age,
            "as_of": as_of,
            "meets_minimum_age": age >= policy.age.min_age,
        }
    }))
}

pub fn run_countries() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(countries())?)
}
