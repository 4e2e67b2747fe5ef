use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Key/value pair attached to videos; also used as a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Problem document the API sends with 4xx/5xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiProblem {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problems: Option<Vec<ApiProblem>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_requires_envelope() {
        let missing: Result<Page<Link>, _> = serde_json::from_value(json!({"data": []}));
        assert!(missing.is_err());

        let page: Page<Link> = serde_json::from_value(json!({
            "data": [{"rel": "self", "uri": "/videos"}],
            "pagination": {"currentPage": 1, "pageSize": 25, "links": []}
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.current_page, Some(1));
        assert_eq!(page.pagination.links, Some(vec![]));
    }

    #[test]
    fn problem_reads_type_field() {
        let problem: ApiProblem = serde_json::from_value(json!({
            "type": "https://docs.api.video/reference/invalid-attribute",
            "title": "An attribute is invalid.",
            "status": 400,
            "name": "title"
        }))
        .unwrap();
        assert_eq!(problem.status, Some(400));
        assert_eq!(problem.name.as_deref(), Some("title"));
        assert!(problem.kind.unwrap().ends_with("invalid-attribute"));
    }
}
