use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Savings
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_future_value(input_json: String) -> NapiResult<String> {
    let input: finlogic_core::savings::future_value::FutureValueInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finlogic_core::savings::future_value::compute_future_value(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compute_growth_series(input_json: String) -> NapiResult<String> {
    let input: finlogic_core::savings::series::GrowthSeriesInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finlogic_core::savings::series::compute_growth_series(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_emi(input_json: String) -> NapiResult<String> {
    let input: finlogic_core::loans::amortization::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        finlogic_core::loans::amortization::compute_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
