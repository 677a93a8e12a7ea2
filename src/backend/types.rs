//! Shared types for backend communication

use serde::{Deserialize, Deserializer, Serialize};

/// What activating a result does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Pre-fill a new quotation session form
    Create,
    /// Show matching contracts
    Search,
}

/// Search result card as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Opaque backend score, 0-100
    #[serde(deserialize_with = "percent")]
    pub confidence: u8,
}

/// Accepts any JSON number (`88`, `88.0`, `101.5`) and fits it into 0-100
fn percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateFormRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormResponse {
    pub form_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub result_id: String,
    pub rating: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_uses_type_field() {
        let json = r#"{"id":"7","type":"search","title":"Похожие контракты","description":"d","confidence":87}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.kind, ResultKind::Search);
        assert_eq!(result.amount, None);
        assert_eq!(result.confidence, 87);
    }

    #[test]
    fn test_confidence_accepts_floats() {
        let json = r#"[
            {"id":"a","type":"create","title":"t","description":"d","confidence":88.0},
            {"id":"b","type":"create","title":"t","description":"d","confidence":64.6},
            {"id":"c","type":"create","title":"t","description":"d","confidence":130},
            {"id":"d","type":"create","title":"t","description":"d","confidence":-2.5}
        ]"#;
        let results: Vec<SearchResult> = serde_json::from_str(json).unwrap();
        let confidences: Vec<u8> = results.iter().map(|r| r.confidence).collect();
        assert_eq!(confidences, vec![88, 65, 100, 0]);
    }

    #[test]
    fn test_create_form_omits_missing_fields() {
        let request = CreateFormRequest {
            amount: None,
            category: Some("Мебель".to_string()),
            title: "Создать котировочную сессию".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("amount").is_none());
        assert_eq!(value["category"], "Мебель");
    }

    #[test]
    fn test_rate_request_is_camel_case() {
        let request = RateRequest { result_id: "1".to_string(), rating: 3 };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "resultId": "1", "rating": 3 }));
    }
}
