use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wealthwaves_core::policy::{AgePolicy, EnginePolicy};
use wealthwaves_core::types::decimal_from_f64;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse<T: serde::de::DeserializeOwned>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

fn render<T: Serialize>(output: &T) -> NapiResult<String> {
    serde_json::to_string(output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_amortization(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::loans::amortization::LoanRequest = parse(&input_json)?;
    let output = wealthwaves_core::loans::amortization::compute_amortization(&input)
        .map_err(to_napi_error)?;
    render(&output)
}

/// EMI straight from JS numbers. NaN and infinities are refused here so they
/// never reach the decimal engine.
#[napi]
pub fn quick_emi(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> NapiResult<String> {
    let principal = decimal_from_f64("principal", principal).map_err(to_napi_error)?;
    let rate = decimal_from_f64("annual_rate_percent", annual_rate_percent).map_err(to_napi_error)?;
    let emi = wealthwaves_core::loans::amortization::emi(principal, rate, tenure_years)
        .map_err(to_napi_error)?;
    Ok(emi.to_string())
}

#[napi]
pub fn rank_offers(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::loans::offers::OfferRankingInput = parse(&input_json)?;
    let output = wealthwaves_core::loans::offers::rank_offers(
        &input.offers,
        &input.loan,
        input.credit_score,
    )
    .map_err(to_napi_error)?;
    render(&output)
}

/// Built-in bank offers for a product name ("home", "car", "lap", ...).
#[napi]
pub fn default_offers(product: String) -> NapiResult<String> {
    let product: wealthwaves_core::loans::catalog::LoanProduct =
        product.parse().map_err(to_napi_error)?;
    render(&wealthwaves_core::loans::catalog::default_offers(product))
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[napi]
pub fn project_goal(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::goals::projector::GoalRequest = parse(&input_json)?;
    let output =
        wealthwaves_core::goals::projector::project_goal(&input).map_err(to_napi_error)?;
    render(&output)
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[napi]
pub fn allocate_budget(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::budget::allocation::AllocationInput = parse(&input_json)?;
    let output =
        wealthwaves_core::budget::allocation::allocate_budget(&input).map_err(to_napi_error)?;
    render(&output)
}

#[napi]
pub fn track_spending(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::budget::categories::SpendingInput = parse(&input_json)?;
    let output =
        wealthwaves_core::budget::categories::track_spending(&input).map_err(to_napi_error)?;
    render(&output)
}

#[napi]
pub fn default_budgets() -> NapiResult<String> {
    render(&wealthwaves_core::budget::categories::default_budgets())
}

#[napi]
pub fn plan_student_budget(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::budget::student::StudentInput = parse(&input_json)?;
    let output =
        wealthwaves_core::budget::student::plan_student_budget(&input).map_err(to_napi_error)?;
    render(&output)
}

#[derive(Deserialize)]
struct JarRequest {
    balance: Decimal,
    #[serde(flatten)]
    transaction: wealthwaves_core::budget::savings_jar::JarTransaction,
}

#[derive(Serialize)]
struct JarResponse {
    balance: Decimal,
}

/// `{ "balance": "1000", "action": "withdraw", "amount": "250" }` →
/// `{ "balance": "750" }`
#[napi]
pub fn apply_jar_transaction(input_json: String) -> NapiResult<String> {
    let input: JarRequest = parse(&input_json)?;
    let balance =
        wealthwaves_core::budget::savings_jar::apply_jar_transaction(input.balance, &input.transaction)
            .map_err(to_napi_error)?;
    render(&JarResponse { balance })
}

// ---------------------------------------------------------------------------
// Business & savings
// ---------------------------------------------------------------------------

#[napi]
pub fn business_metrics(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::business::health::BusinessInput = parse(&input_json)?;
    let output = wealthwaves_core::business::health::compute_business_metrics(&input)
        .map_err(to_napi_error)?;
    render(&output)
}

#[napi]
pub fn project_ppf(input_json: String) -> NapiResult<String> {
    let input: wealthwaves_core::savings::ppf::PpfInput = parse(&input_json)?;
    let output = wealthwaves_core::savings::ppf::project_ppf(&input).map_err(to_napi_error)?;
    render(&output)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SignupRequest {
    #[serde(flatten)]
    form: wealthwaves_core::validation::signup::SignupForm,
    as_of: NaiveDate,
}

/// The form plus the `as_of` date the age rules are checked against.
#[napi]
pub fn validate_signup(input_json: String) -> NapiResult<String> {
    let input: SignupRequest = parse(&input_json)?;
    let report = wealthwaves_core::validation::signup::validate_signup(
        &input.form,
        input.as_of,
        &AgePolicy::default(),
    );
    render(&report)
}

#[derive(Deserialize)]
struct AgeRequest {
    dob: NaiveDate,
    as_of: NaiveDate,
}

#[napi]
pub fn age_from_dob(input_json: String) -> NapiResult<u32> {
    let input: AgeRequest = parse(&input_json)?;
    wealthwaves_core::validation::age::age_from_dob(input.dob, input.as_of, &AgePolicy::default())
        .map_err(to_napi_error)
}

#[napi]
pub fn list_countries() -> NapiResult<String> {
    render(&wealthwaves_core::validation::countries::countries())
}

#[napi]
pub fn default_policy() -> NapiResult<String> {
    render(&EnginePolicy::default())
}
