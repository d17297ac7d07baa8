use serde::{Deserialize, Serialize};
use showdown_engine::category::Category;
use showdown_engine::compare::{Showdown, Verdict};
use showdown_engine::errors::ParseError;
use showdown_engine::hand::{ensure_distinct, parse_hand, Hand};
use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::{self, html, Response};
use warp::Reply;

use crate::errors::IntoErrorResponse;

/// Body of `POST /` (form encoded) and `POST /api/compare` (JSON).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub hand1: String,
    #[serde(default)]
    pub hand2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandReport {
    pub cards: String,
    pub category: Category,
    pub category_name: &'static str,
}

impl HandReport {
    fn new(hand: &Hand, category: Category) -> Self {
        Self {
            cards: hand.to_string(),
            category,
            category_name: category.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareResponse {
    pub hand1: HandReport,
    pub hand2: HandReport,
    pub verdict: Verdict,
    pub message: &'static str,
}

impl From<&Showdown> for CompareResponse {
    fn from(s: &Showdown) -> Self {
        Self {
            hand1: HandReport::new(&s.first, s.first_category),
            hand2: HandReport::new(&s.second, s.second_category),
            verdict: s.verdict,
            message: s.message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// `field` names the offending input: `hand1`, `hand2`, or `hands` when
    /// the two hands share a card.
    #[error("{source}")]
    InvalidHand {
        field: &'static str,
        source: ParseError,
    },
}

impl IntoErrorResponse for CompareError {
    fn status_code(&self) -> StatusCode {
        match self {
            CompareError::InvalidHand { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CompareError::InvalidHand { .. } => "invalid_hand",
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }

    fn error_details(&self) -> Option<serde_json::Value> {
        match self {
            CompareError::InvalidHand { field, .. } => Some(serde_json::json!({ "field": field })),
        }
    }
}

/// Parses and compares both hands of a request.
///
/// With `strict`, a card appearing twice across the two hands is rejected.
pub fn evaluate(request: &CompareRequest, strict: bool) -> Result<Showdown, CompareError> {
    let first = parse_hand(&request.hand1).map_err(|source| CompareError::InvalidHand {
        field: "hand1",
        source,
    })?;
    let second = parse_hand(&request.hand2).map_err(|source| CompareError::InvalidHand {
        field: "hand2",
        source,
    })?;
    if strict {
        ensure_distinct(&first, &second).map_err(|source| CompareError::InvalidHand {
            field: "hands",
            source,
        })?;
    }
    Ok(Showdown::evaluate(first, second))
}

/// Compares two hands given as JSON.
///
/// # HTTP Method and Path
/// - **Method**: POST
/// - **Path**: `/api/compare`
///
/// # Request Format
/// ```json
/// { "hand1": "2H 4D 6S 8C AD", "hand2": "KH KD 3C 4S 9H" }
/// ```
///
/// # Response Format
/// - **Success (200 OK)**:
/// ```json
/// {
///   "hand1": { "cards": "2H 4D 6S 8C AD", "category": "high_card", "category_name": "High Card" },
///   "hand2": { "cards": "KH KD 3C 4S 9H", "category": "one_pair", "category_name": "One Pair" },
///   "verdict": "second_wins",
///   "message": "Hand 2 is stronger"
/// }
/// ```
/// - **Error (400 Bad Request)**: `invalid_hand` with `details.field`
pub async fn api_compare(request: CompareRequest, strict: bool) -> Response {
    match evaluate(&request, strict) {
        Ok(showdown) => {
            tracing::debug!(
                hand1 = %showdown.first,
                hand2 = %showdown.second,
                verdict = ?showdown.verdict,
                "hands compared"
            );
            reply::with_status(
                reply::json(&CompareResponse::from(&showdown)),
                StatusCode::OK,
            )
            .into_response()
        }
        Err(err) => err.into_http_response(),
    }
}

/// `GET /`: the empty comparison form.
pub async fn index() -> Response {
    html(render_page(&CompareRequest::default(), None)).into_response()
}

/// `POST /`: compares the submitted form and renders the page again with the
/// result, or with `Error: <message>` when a hand does not parse.
pub async fn submit_form(request: CompareRequest, strict: bool) -> Response {
    let outcome = match evaluate(&request, strict) {
        Ok(showdown) => Outcome::Result(showdown),
        Err(err) => {
            tracing::info!(error = %err, "form submission rejected");
            Outcome::Error(err.to_string())
        }
    };
    html(render_page(&request, Some(&outcome))).into_response()
}

enum Outcome {
    Result(Showdown),
    Error(String),
}

fn render_page(request: &CompareRequest, outcome: Option<&Outcome>) -> String {
    let result = match outcome {
        None => String::new(),
        Some(Outcome::Result(s)) => format!(
            r#"
        <section class="result">
            <p>Hand 1: {} ({})</p>
            <p>Hand 2: {} ({})</p>
            <p class="verdict">{}</p>
        </section>"#,
            s.first,
            s.first_category,
            s.second,
            s.second_category,
            escape_html(s.message())
        ),
        Some(Outcome::Error(message)) => format!(
            r#"
        <section class="result error">
            <p>Error: {}</p>
        </section>"#,
            escape_html(message)
        ),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Showdown</title>
</head>
<body>
    <main>
        <h1>Poker Hand Comparator</h1>
        <form method="post" action="/">
            <label for="hand1">Hand 1</label>
            <input id="hand1" name="hand1" value="{hand1}" placeholder="2H 4D 6S 8C AD">
            <label for="hand2">Hand 2</label>
            <input id="hand2" name="hand2" value="{hand2}" placeholder="KH KD 3C 4S 9H">
            <button type="submit">Compare</button>
        </form>{result}
    </main>
</body>
</html>
"##,
        hand1 = escape_html(&request.hand1),
        hand2 = escape_html(&request.hand2),
        result = result
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
