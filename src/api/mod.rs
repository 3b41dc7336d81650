use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum, error::ErrorKind};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    CreditId, DangerZone, IncomePoint, JURISDICTIONS, Selection, Visualization, ZoneLoss,
    lookup_jurisdiction, run_visualization,
};

const MAX_DEPENDENTS: u32 = 5;
const BRACKETS_ONLY_HINT: &str = "No credits/benefits are currently enabled. Tax traps are \
extremely rare with just tax brackets. Enable credits to see real-world tax traps.";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCredit {
    #[value(name = "aca_subsidy", alias = "aca-subsidy")]
    AcaSubsidy,
    Eitc,
    Ctc,
    #[value(name = "student_loan_interest", alias = "student-loan-interest")]
    StudentLoanInterest,
    Medicaid,
    #[value(name = "savers_credit", alias = "savers-credit")]
    SaversCredit,
}

impl From<CliCredit> for CreditId {
    fn from(value: CliCredit) -> Self {
        match value {
            CliCredit::AcaSubsidy => CreditId::PremiumSubsidy,
            CliCredit::Eitc => CreditId::EarnedIncome,
            CliCredit::Ctc => CreditId::ChildTax,
            CliCredit::StudentLoanInterest => CreditId::StudentLoanInterest,
            CliCredit::Medicaid => CreditId::Medicaid,
            CliCredit::SaversCredit => CreditId::Savers,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ApiCredit {
    #[serde(alias = "aca-subsidy", alias = "acaSubsidy", alias = "premium_subsidy")]
    AcaSubsidy,
    #[serde(alias = "earned_income")]
    Eitc,
    #[serde(alias = "child_tax")]
    Ctc,
    #[serde(alias = "student-loan-interest", alias = "studentLoanInterest")]
    StudentLoanInterest,
    Medicaid,
    #[serde(alias = "savers-credit", alias = "saversCredit", alias = "savers")]
    SaversCredit,
}

impl From<ApiCredit> for CliCredit {
    fn from(value: ApiCredit) -> Self {
        match value {
            ApiCredit::AcaSubsidy => CliCredit::AcaSubsidy,
            ApiCredit::Eitc => CliCredit::Eitc,
            ApiCredit::Ctc => CliCredit::Ctc,
            ApiCredit::StudentLoanInterest => CliCredit::StudentLoanInterest,
            ApiCredit::Medicaid => CliCredit::Medicaid,
            ApiCredit::SaversCredit => CliCredit::SaversCredit,
        }
    }
}

/// Query strings carry credits as `credits=eitc,ctc`; JSON bodies may use a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiCredits {
    List(Vec<ApiCredit>),
    Csv(String),
}

impl ApiCredits {
    fn into_cli(self) -> Result<Vec<CliCredit>, String> {
        match self {
            ApiCredits::List(list) => Ok(list.into_iter().map(CliCredit::from).collect()),
            ApiCredits::Csv(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| {
                    serde_json::from_value::<ApiCredit>(serde_json::Value::String(key.to_string()))
                        .map(CliCredit::from)
                        .map_err(|_| format!("--credits contains unknown credit '{key}'"))
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SeriesPayload {
    state: Option<String>,
    max_income: Option<f64>,
    show_danger_zones: Option<bool>,
    credits: Option<ApiCredits>,
    dependents: Option<u32>,
}

#[derive(Parser, Debug)]
#[command(
    name = "taxtrap",
    about = "Gross-to-net income sweep with tax trap detection (2026 federal, 2025 state, single filer)"
)]
struct Cli {
    #[arg(long, default_value = "South Carolina", help = "State or 'Washington DC'")]
    state: String,
    #[arg(
        long,
        default_value_t = 250_000.0,
        help = "Top of the gross income sweep in dollars"
    )]
    max_income: f64,
    #[arg(long, default_value_t = 0, help = "Number of dependents/children")]
    dependents: u32,
    #[arg(long = "credit", value_enum, help = "Enable a credit or benefit; repeatable")]
    credits: Vec<CliCredit>,
    #[arg(long, default_value_t = false, help = "Skip tax trap detection")]
    no_danger_zones: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JurisdictionResponse {
    name: &'static str,
    policy_type: &'static str,
    label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreditResponse {
    id: CreditId,
    name: &'static str,
    description: &'static str,
    has_cliff: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ZoneResponse {
    start: f64,
    end: f64,
    start_net: f64,
    end_net: f64,
    peak_loss: f64,
    peak_income: f64,
    total_loss: f64,
    losses: Vec<ZoneLoss>,
}

impl From<&DangerZone> for ZoneResponse {
    fn from(zone: &DangerZone) -> Self {
        Self {
            start: zone.start,
            end: zone.end,
            start_net: zone.start_net,
            end_net: zone.end_net,
            peak_loss: zone.peak_loss(),
            peak_income: zone.peak_income(),
            total_loss: zone.total_loss(),
            losses: zone.losses.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesResponse {
    state: String,
    policy_type: &'static str,
    max_income: f64,
    dependents: u32,
    show_danger_zones: bool,
    enabled_credits: Vec<CreditId>,
    points: Vec<IncomePoint>,
    danger_zones: Vec<ZoneResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_selection(cli: Cli) -> Result<Selection, String> {
    if lookup_jurisdiction(&cli.state).is_none() {
        return Err(format!(
            "--state must be one of the {} listed jurisdictions, got '{}'",
            JURISDICTIONS.len(),
            cli.state
        ));
    }

    if !cli.max_income.is_finite() || cli.max_income <= 0.0 {
        return Err("--max-income must be > 0".to_string());
    }

    if cli.dependents > MAX_DEPENDENTS {
        return Err(format!(
            "--dependents must be between 0 and {MAX_DEPENDENTS}"
        ));
    }

    Ok(Selection {
        jurisdiction: cli.state,
        income_ceiling: cli.max_income,
        show_danger_zones: !cli.no_danger_zones,
        enabled_credits: cli.credits.into_iter().map(CreditId::from).collect(),
        dependents: cli.dependents,
    })
}

/// One-shot CLI: parses `args` (program name first) and returns the series JSON.
/// `--help` is not an error: the rendered help comes back as the output.
pub fn run_cli<I, T>(args: I) -> Result<String, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::DisplayVersion => Ok(e.to_string()),
                _ => Err(e.to_string()),
            };
        }
    };
    let selection = build_selection(cli)?;
    let visualization = run_visualization(&selection).map_err(|e| e.to_string())?;
    let response = build_series_response(&selection, &visualization);
    serde_json::to_string_pretty(&response)
        .map_err(|e| format!("failed to serialize response: {e}"))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/jurisdictions", get(jurisdictions_handler))
        .route("/api/credits", get(credits_handler))
        .route(
            "/api/series",
            get(series_get_handler).post(series_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("taxtrap HTTP API listening on http://{addr}");
    tracing::info!("Local access: http://127.0.0.1:{port}/api/series");

    axum::serve(listener, app).await
}

async fn jurisdictions_handler() -> Response {
    json_response(StatusCode::OK, jurisdiction_catalog())
}

async fn credits_handler() -> Response {
    json_response(StatusCode::OK, credit_catalog())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn series_get_handler(query: Result<Query<SeriesPayload>, QueryRejection>) -> Response {
    match query {
        Ok(Query(payload)) => series_handler_impl(payload).await,
        Err(rejection) => rejected_payload(&rejection.body_text()),
    }
}

async fn series_post_handler(body: Result<Json<SeriesPayload>, JsonRejection>) -> Response {
    match body {
        Ok(Json(payload)) => series_handler_impl(payload).await,
        Err(rejection) => rejected_payload(&rejection.body_text()),
    }
}

fn rejected_payload(msg: &str) -> Response {
    tracing::warn!(error = %msg, "rejected series payload");
    error_response(StatusCode::BAD_REQUEST, msg)
}

async fn series_handler_impl(payload: SeriesPayload) -> Response {
    let selection = match selection_from_payload(payload) {
        Ok(selection) => selection,
        Err(msg) => {
            tracing::warn!(error = %msg, "rejected series request");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    let visualization = match run_visualization(&selection) {
        Ok(visualization) => visualization,
        Err(e) => {
            tracing::warn!(error = %e, "series computation failed");
            return error_response(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    tracing::debug!(
        state = %selection.jurisdiction,
        max_income = selection.income_ceiling,
        dependents = selection.dependents,
        zones = visualization.danger_zones.len(),
        "computed series"
    );

    json_response(
        StatusCode::OK,
        build_series_response(&selection, &visualization),
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn selection_from_json(json: &str) -> Result<Selection, String> {
    let payload = serde_json::from_str::<SeriesPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    selection_from_payload(payload)
}

fn selection_from_payload(payload: SeriesPayload) -> Result<Selection, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.state {
        cli.state = v;
    }
    if let Some(v) = payload.max_income {
        cli.max_income = v;
    }
    if let Some(v) = payload.show_danger_zones {
        cli.no_danger_zones = !v;
    }
    if let Some(v) = payload.credits {
        cli.credits = v.into_cli()?;
    }
    if let Some(v) = payload.dependents {
        cli.dependents = v;
    }

    build_selection(cli)
}

fn default_cli_for_api() -> Cli {
    Cli {
        state: "South Carolina".to_string(),
        max_income: 250_000.0,
        dependents: 0,
        credits: Vec::new(),
        no_danger_zones: false,
    }
}

fn jurisdiction_catalog() -> Vec<JurisdictionResponse> {
    JURISDICTIONS
        .iter()
        .map(|j| JurisdictionResponse {
            name: j.name,
            policy_type: j.policy.policy_type(),
            label: j.policy.label(),
        })
        .collect()
}

fn credit_catalog() -> Vec<CreditResponse> {
    CreditId::ALL
        .into_iter()
        .map(|id| CreditResponse {
            id,
            name: id.name(),
            description: id.description(),
            has_cliff: id.has_cliff(),
        })
        .collect()
}

fn build_series_response(selection: &Selection, visualization: &Visualization) -> SeriesResponse {
    let policy_type = lookup_jurisdiction(&selection.jurisdiction)
        .map(|j| j.policy.policy_type())
        .unwrap_or("unknown");
    let enabled_credits: Vec<CreditId> = selection.enabled_credits.iter().copied().collect();
    let hint = (!visualization.danger_zones.is_empty() && enabled_credits.is_empty())
        .then_some(BRACKETS_ONLY_HINT);

    SeriesResponse {
        state: selection.jurisdiction.clone(),
        policy_type,
        max_income: selection.income_ceiling,
        dependents: selection.dependents,
        show_danger_zones: selection.show_danger_zones,
        enabled_credits,
        points: visualization.points.clone(),
        danger_zones: visualization
            .danger_zones
            .iter()
            .map(ZoneResponse::from)
            .collect(),
        hint,
    }
}
