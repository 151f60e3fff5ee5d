//! Query construction for the Solr `select` endpoint.

use crate::SearchError;
use reqwest::Url;

/// Path of the search endpoint, joined onto the configured base URL.
pub const SEARCH_ENDPOINT: &str = "solrsearch/select";

/// Solr field holding an artifact's SHA-1.
pub const FIELD_SHA1: &str = "1";

pub const DEFAULT_PACKAGING: &str = "jar";

/// Build `field1:"value1" AND field2:"value2" ...` in parameter order.
///
/// Values are quoted verbatim; the service rejects malformed expressions with HTTP 400.
pub fn query_expression(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(field, value)| format!("{field}:\"{value}\""))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Expression for a lookup keyed solely on the content hash.
pub fn sha1_expression(sha1: &str) -> String {
    query_expression(&[(FIELD_SHA1, sha1)])
}

/// Coordinates lookup, used to verify that a GAV exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinateQuery {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
}

impl CoordinateQuery {
    /// A lookup with the default `jar` packaging.
    pub fn jar(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: DEFAULT_PACKAGING.to_string(),
        }
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    pub fn expression(&self) -> String {
        query_expression(&[
            ("g", self.group_id.as_str()),
            ("a", self.artifact_id.as_str()),
            ("v", self.version.as_str()),
            ("p", self.packaging.as_str()),
        ])
    }
}

/// Resolve the endpoint against `base` (URL-join semantics) and attach `q`.
///
/// A base with a path must end in `/` to keep that path; otherwise its last
/// segment is replaced, as with any relative reference.
pub fn search_url(base: &Url, expression: &str) -> Result<Url, SearchError> {
    let mut url = base
        .join(SEARCH_ENDPOINT)
        .map_err(|err| SearchError::Client(format!("invalid search url {base}: {err}")))?;
    url.query_pairs_mut().append_pair("q", expression);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sha1_expression_has_single_clause() {
        assert_eq!(sha1_expression("abc123"), "1:\"abc123\"");
    }

    #[test]
    fn coordinate_expression_orders_g_a_v_p() {
        let q = CoordinateQuery::jar("org.slf4j", "slf4j-api", "1.7.30");
        assert_eq!(
            q.expression(),
            "g:\"org.slf4j\" AND a:\"slf4j-api\" AND v:\"1.7.30\" AND p:\"jar\""
        );

        let pom = q.with_packaging("pom");
        assert!(pom.expression().ends_with("p:\"pom\""));
    }

    #[test]
    fn empty_params_build_empty_expression() {
        assert_eq!(query_expression(&[]), "");
    }

    #[test]
    fn search_url_joins_endpoint_and_encodes_query() {
        let base = Url::parse("https://search.maven.org").expect("url");
        let url = search_url(&base, &sha1_expression("abc")).expect("join");
        assert_eq!(
            url.as_str(),
            "https://search.maven.org/solrsearch/select?q=1%3A%22abc%22"
        );
    }

    #[test]
    fn search_url_keeps_base_path_with_trailing_slash() {
        let base = Url::parse("http://mirror.local/central/").expect("url");
        let url = search_url(&base, "g:\"x\" AND a:\"y\"").expect("join");
        assert_eq!(url.path(), "/central/solrsearch/select");
        let q: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(q, vec![("q".to_string(), "g:\"x\" AND a:\"y\"".to_string())]);
    }

    proptest! {
        #[test]
        fn expression_has_one_clause_per_param(
            values in prop::collection::vec("[a-zA-Z0-9._-]{1,12}", 1..6)
        ) {
            let fields: Vec<String> = (0..values.len()).map(|i| format!("f{i}")).collect();
            let params: Vec<(&str, &str)> = fields
                .iter()
                .map(String::as_str)
                .zip(values.iter().map(String::as_str))
                .collect();

            let expr = query_expression(&params);
            let clauses: Vec<&str> = expr.split(" AND ").collect();
            prop_assert_eq!(clauses.len(), params.len());
            for (clause, (field, value)) in clauses.iter().zip(params.iter()) {
                prop_assert_eq!(*clause, format!("{field}:\"{value}\""));
            }
        }
    }
}
