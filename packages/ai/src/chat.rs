//! OpenAI-compatible chat-completions summarizer.

use estate_insights_analytics_models::MarketStats;
use serde::{Deserialize, Serialize};

use crate::{AiError, Summarizer};

const SYSTEM_PROMPT: &str = "You are an expert real estate market analyst with 15+ years of \
experience in property valuation, market trends analysis, and investment advisory. You provide \
data-driven, professional insights.";

/// Summarizer backed by an OpenAI-compatible `/chat/completions`
/// endpoint.
///
/// Works against Groq (the default base URL) or any other compatible
/// server. The request is a single round-trip with the transport's
/// default timeout; no retries, no streaming.
pub struct ChatCompletionSummarizer {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl ChatCompletionSummarizer {
    /// Creates a new summarizer.
    ///
    /// `api_key` may be absent; the capability then fails with
    /// [`AiError::Config`] at call time and callers fall back to the
    /// local summary text.
    #[must_use]
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatErrorBody {
    error: ChatErrorDetail,
}

#[derive(Deserialize)]
struct ChatErrorDetail {
    message: String,
}

/// Builds the analyst prompt from computed statistics.
fn build_prompt(stats: &MarketStats) -> String {
    format!(
        "You are a professional real estate market analyst. Generate a comprehensive, \
         professional analysis report for the following real estate data:\n\
         \n\
         Location: {area}\n\
         Time Period: {start} to {end}\n\
         Total Market Sales: ₹{sales:.2} Crores\n\
         Average Property Rate: ₹{price:.2} per sqft\n\
         Total Units Sold: {units} properties\n\
         Price Trend: {trend} ({change:+.1}% change)\n\
         \n\
         Please provide:\n\
         1. Market Overview (2-3 sentences)\n\
         2. Price Analysis (key insights on pricing trends)\n\
         3. Demand Analysis (transaction volume insights)\n\
         4. Investment Outlook (recommendations for investors)\n\
         5. Key Takeaways (3-4 bullet points)\n\
         \n\
         Write in a professional, data-driven tone suitable for real estate investors \
         and analysts. Keep it concise but informative (300-400 words).",
        area = stats.area,
        start = stats.year_range.start,
        end = stats.year_range.end,
        sales = stats.sales_total,
        price = stats.avg_price,
        units = stats.total_units,
        trend = stats.price_trend,
        change = stats.price_change,
    )
}

#[async_trait::async_trait]
impl Summarizer for ChatCompletionSummarizer {
    async fn market_summary(&self, stats: &MarketStats) -> Result<String, AiError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AiError::Config {
                message: "No API key configured for the summary service".to_string(),
            })?;

        let prompt = build_prompt(stats);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.4,
            max_tokens: 1024,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let err: ChatErrorBody =
                serde_json::from_str(&body).unwrap_or_else(|_| ChatErrorBody {
                    error: ChatErrorDetail {
                        message: format!("HTTP {status}: {body}"),
                    },
                });
            return Err(AiError::Provider {
                message: err.error.message,
            });
        }

        let response: ChatResponse = serde_json::from_str(&body)?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| AiError::Provider {
                message: "No content in chat completion response".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_insights_analytics_models::{PriceTrend, YearRange};

    #[test]
    fn prompt_interpolates_every_stat() {
        let stats = MarketStats {
            area: "Wakad".to_string(),
            year_range: YearRange {
                start: 2019,
                end: 2024,
            },
            sales_total: 123.456,
            avg_price: 5250.0,
            total_units: 1200,
            price_trend: PriceTrend::Increasing,
            price_change: 10.0,
        };
        let prompt = build_prompt(&stats);
        assert!(prompt.contains("Location: Wakad"));
        assert!(prompt.contains("2019 to 2024"));
        assert!(prompt.contains("₹123.46 Crores"));
        assert!(prompt.contains("increasing (+10.0% change)"));
        assert!(prompt.contains("1200 properties"));
    }

    #[test]
    fn parses_completion_response_body() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Summary."}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Summary.")
        );
    }

    #[test]
    fn parses_error_body() {
        let body = r#"{"error": {"message": "invalid api key", "type": "auth"}}"#;
        let err: ChatErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(err.error.message, "invalid api key");
    }

    #[tokio::test]
    async fn missing_api_key_is_a_config_error() {
        let summarizer = ChatCompletionSummarizer::new(
            None,
            crate::DEFAULT_MODEL.to_string(),
            crate::DEFAULT_BASE_URL.to_string(),
        );
        let err = summarizer
            .market_summary(&MarketStats::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Config { .. }));
    }
}
