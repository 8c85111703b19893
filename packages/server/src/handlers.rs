//! HTTP handler functions for the estate insights API.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use estate_insights_ai::fallback_summary;
use estate_insights_analytics::{compare as comparison, metrics, resolve, series};
use estate_insights_dataset::load;
use estate_insights_dataset_models::Dataset;
use estate_insights_server_models::{
    AnalyzeResponse, ApiError, AreaDetail, AreasResponse, CompareResponse,
    GenerateSummaryRequest, GenerateSummaryResponse, HealthResponse, QueryRequest,
};

use crate::AppState;

/// Server time in the API's display format.
fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Loads a fresh dataset snapshot, or the 500 response for a missing
/// backing file.
fn load_dataset(state: &AppState) -> Result<Dataset, HttpResponse> {
    load(&state.config.dataset_path).map_err(|e| {
        log::error!("Failed to load dataset: {e}");
        HttpResponse::InternalServerError().json(ApiError::new("Failed to load dataset"))
    })
}

/// `POST /api/analyze`
///
/// Resolves one locality from the query and returns its summary,
/// chart series, and table rows.
pub async fn analyze(state: web::Data<AppState>, body: web::Json<QueryRequest>) -> HttpResponse {
    let query = body.query.trim();
    if query.is_empty() {
        return HttpResponse::BadRequest().json(ApiError::new("Query is required"));
    }

    let dataset = match load_dataset(&state) {
        Ok(dataset) => dataset,
        Err(resp) => return resp,
    };

    let Some(area) = resolve::resolve_one(query, &dataset) else {
        return HttpResponse::BadRequest().json(ApiError::with_hints(
            "Could not identify area in query. Please mention a specific locality.",
            dataset.localities().to_vec(),
        ));
    };

    let records = dataset.records_for(area);
    let Some(summary) = metrics::summarize(&records, state.config.aggregation) else {
        return HttpResponse::NotFound().json(ApiError::new(format!("No data found for {area}")));
    };

    HttpResponse::Ok().json(AnalyzeResponse {
        area: summary.locality.clone(),
        summary: summary.narrative.clone(),
        chart_data: series::to_chart_series(&records),
        table_data: series::to_table(&records),
        query: query.to_string(),
        record_count: records.len(),
        year_range: summary.year_range_label(),
    })
}

/// `GET /api/areas`
///
/// Lists every known locality with its year span, record count, and
/// average flat rate.
pub async fn areas(state: web::Data<AppState>) -> HttpResponse {
    let dataset = match load_dataset(&state) {
        Ok(dataset) => dataset,
        Err(resp) => return resp,
    };

    let mut names: Vec<String> = dataset.localities().to_vec();
    names.sort();

    let details: Vec<AreaDetail> = names
        .iter()
        .map(|name| {
            let records = dataset.records_for(name);
            let rates: Vec<f64> = records.iter().map(|r| r.flat_rate).collect();
            let avg_rate =
                metrics::average_rate(&rates, state.config.aggregation.rate_averaging);
            let years = records.first().zip(records.last()).map_or_else(
                || "N/A".to_string(),
                |(first, last)| format!("{}-{}", first.year, last.year),
            );
            AreaDetail {
                name: name.clone(),
                years,
                records: records.len(),
                avg_price: format!("₹{avg_rate:.2}/sqft"),
            }
        })
        .collect();

    HttpResponse::Ok().json(AreasResponse {
        count: names.len(),
        areas: names,
        details,
    })
}

/// `POST /api/compare`
///
/// Resolves every locality mentioned in the query and compares them
/// side by side. Requires at least two.
pub async fn compare(state: web::Data<AppState>, body: web::Json<QueryRequest>) -> HttpResponse {
    let query = body.query.trim();

    let dataset = match load_dataset(&state) {
        Ok(dataset) => dataset,
        Err(resp) => return resp,
    };

    let resolved = resolve::resolve_many(query, &dataset);
    if resolved.len() < 2 {
        return HttpResponse::BadRequest()
            .json(ApiError::new("Please specify at least 2 areas to compare"));
    }

    let outcomes = comparison::compare(&resolved, &dataset, state.config.aggregation);

    HttpResponse::Ok().json(CompareResponse {
        areas: resolved.iter().map(|area| (*area).to_string()).collect(),
        comparison: outcomes,
        query: query.to_string(),
    })
}

/// `POST /api/download`
///
/// Exports the resolved locality's records as a CSV attachment.
pub async fn download(state: web::Data<AppState>, body: web::Json<QueryRequest>) -> HttpResponse {
    let query = body.query.trim();
    if query.is_empty() {
        return HttpResponse::BadRequest().json(ApiError::new("Query is required"));
    }

    let dataset = match load_dataset(&state) {
        Ok(dataset) => dataset,
        Err(resp) => return resp,
    };

    let Some(area) = resolve::resolve_one(query, &dataset) else {
        return HttpResponse::BadRequest()
            .json(ApiError::new("Could not identify area in query"));
    };

    let records = dataset.records_for(area);
    if records.is_empty() {
        return HttpResponse::NotFound().json(ApiError::new(format!("No data found for {area}")));
    }

    let bytes = match crate::export::records_to_csv(&records) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to export records for {area}: {e}");
            return HttpResponse::InternalServerError()
                .json(ApiError::new("Failed to export records"));
        }
    };

    let filename = format!(
        "{}_RealEstate_Data_{}.csv",
        area.replace(' ', "_"),
        Utc::now().format("%Y%m%d")
    );

    HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes)
}

/// `POST /api/generate-summary`
///
/// Generates an AI market summary for previously computed statistics.
/// An upstream failure degrades to the local fallback text instead of
/// an error response.
pub async fn generate_summary(
    state: web::Data<AppState>,
    body: web::Json<GenerateSummaryRequest>,
) -> HttpResponse {
    let area = body.area.trim();
    if area.is_empty() {
        return HttpResponse::BadRequest().json(ApiError::new("Area is required"));
    }

    let mut stats = body.data.clone();
    stats.area = area.to_string();

    let ai_summary = match state.summarizer.market_summary(&stats).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("AI summary failed for {area}: {e}");
            fallback_summary(&stats)
        }
    };

    HttpResponse::Ok().json(GenerateSummaryResponse {
        ai_summary,
        area: area.to_string(),
        timestamp: timestamp(),
    })
}

/// `GET /api/health`
///
/// Liveness check with dataset readiness details.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let dataset = load(&state.config.dataset_path).ok();

    let (total_records, localities, year_range) = dataset.as_ref().map_or_else(
        || (0, Vec::new(), "N/A".to_string()),
        |dataset| {
            let year_range = dataset
                .year_range()
                .map_or_else(|| "N/A".to_string(), |(min, max)| format!("{min}-{max}"));
            (dataset.len(), dataset.localities().to_vec(), year_range)
        },
    );

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "Estate Insights API is running".to_string(),
        dataset_loaded: dataset.is_some(),
        total_records,
        areas: localities,
        year_range,
        timestamp: timestamp(),
    })
}
