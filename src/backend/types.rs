//! Shared types for backend communication

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payload of `GET /ajax-search/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// A single movie as returned by the backend, in backend order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub rating: f64,
    pub director: String,
    pub year: Year,
    pub genre: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Release year; some backends send it as a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(year) => write!(f, "{}", year),
            Year::Text(year) => f.write_str(year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_payload() {
        let body = r#"{"results": [{
            "id": 7,
            "title": "Inception",
            "director": "C. Nolan",
            "year": 2010,
            "genre": "Sci-Fi",
            "rating": 8.8,
            "image_url": null
        }]}"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.results,
            vec![SearchResult {
                id: Some(7),
                title: "Inception".to_string(),
                rating: 8.8,
                director: "C. Nolan".to_string(),
                year: Year::Number(2010),
                genre: "Sci-Fi".to_string(),
                image_url: None,
            }]
        );
    }

    #[test]
    fn test_year_as_string() {
        let body = r#"{"title": "Брат", "rating": 8, "director": "А. Балабанов", "year": "1997", "genre": "Драма"}"#;
        let result: SearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.year, Year::Text("1997".to_string()));
        assert_eq!(result.year.to_string(), "1997");
        assert_eq!(result.id, None);
    }

    #[test]
    fn test_missing_results_field_is_error() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"movies": []}"#).is_err());
    }
}
