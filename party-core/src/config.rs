//! Where the party service lives.

use url::Url;

use crate::error::{ApiError, ApiResult};

static DEFAULT_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
static DEFAULT_COHORT: &str = "/2511-FTB-CT-WEB-PT-Justin";

/// Base address of the service plus the cohort segment that namespaces its data.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, cohort: &str) -> ApiResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "Base URL '{base_url}' cannot have paths appended"
            )));
        }

        let cohort = cohort.trim_matches('/');
        Ok(ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            cohort: if cohort.is_empty() {
                String::new()
            } else {
                format!("/{cohort}")
            },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cohort(&self) -> &str {
        &self.cohort
    }

    /// Full URL for a resource path such as "/events" or "/events/3".
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.cohort, path)
    }
}
