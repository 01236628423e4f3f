//! Search request shapes and their encoders.

use serde_json::{json, Value};

/// Result cap for prefix (search-as-you-type) queries.
const PREFIX_RESULT_LIMIT: i64 = 15;

/// Bucket cap for terms aggregations.
const AGGREGATE_BUCKET_LIMIT: i64 = 500;

/// The closed set of search request shapes the client can send.
///
/// Every variant encodes to a well-formed query DSL object via
/// [`SearchRequest::to_document`]. Construct variants through the helper
/// functions, then hand the encoded document to a query service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Exact phrase match on a single field.
    MatchPhrase { field: String, value: String },
    /// Match every document in the index.
    MatchAll,
    /// Boolean AND over field/value matches. The `must` clause order follows
    /// the pair order exactly; callers rely on it.
    BoolMustMatch { pairs: Vec<(String, String)> },
    /// Bounded search-as-you-type prefix query over a field and its
    /// 2-gram/3-gram subfields.
    PrefixMultiMatch { word: String, field: String },
    /// Phrase prefix match on a single field.
    MatchPhrasePrefix { word: String, field: String },
    /// Bucketed term counts over a field, hits suppressed.
    TermsAggregate { name: String, field: String },
    /// Terms aggregation restricted to documents matching a phrase filter.
    FilteredTermsAggregate {
        field: String,
        value: String,
        name: String,
        agg_field: String,
    },
}

impl SearchRequest {
    /// Exact phrase match: `{query: {match_phrase: {field: value}}}`.
    pub fn match_phrase(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MatchPhrase {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Match-all query.
    pub fn match_all() -> Self {
        Self::MatchAll
    }

    /// Boolean AND over the given field/value pairs, in order.
    pub fn bool_must_match(pairs: Vec<(String, String)>) -> Self {
        Self::BoolMustMatch { pairs }
    }

    /// Prefix search over `field` plus its `._2gram`/`._3gram` subfields,
    /// capped at 15 results.
    pub fn prefix_multi_match(word: impl Into<String>, field: impl Into<String>) -> Self {
        Self::PrefixMultiMatch {
            word: word.into(),
            field: field.into(),
        }
    }

    /// Phrase prefix match on a single field.
    pub fn match_phrase_prefix(word: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MatchPhrasePrefix {
            word: word.into(),
            field: field.into(),
        }
    }

    /// Terms aggregation named `name` over `field`, capped at 500 buckets.
    pub fn terms_aggregate(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::TermsAggregate {
            name: name.into(),
            field: field.into(),
        }
    }

    /// Terms aggregation over `agg_field`, restricted to documents whose
    /// `field` phrase-matches `value`.
    pub fn filtered_terms_aggregate(
        field: impl Into<String>,
        value: impl Into<String>,
        name: impl Into<String>,
        agg_field: impl Into<String>,
    ) -> Self {
        Self::FilteredTermsAggregate {
            field: field.into(),
            value: value.into(),
            name: name.into(),
            agg_field: agg_field.into(),
        }
    }

    /// Encode this request into its wire document.
    pub fn to_document(&self) -> Value {
        match self {
            Self::MatchPhrase { field, value } => json!({
                "query": {
                    "match_phrase": {
                        (field.as_str()): value
                    }
                }
            }),
            Self::MatchAll => json!({
                "query": {
                    "match_all": {}
                }
            }),
            Self::BoolMustMatch { pairs } => {
                let must: Vec<Value> = pairs
                    .iter()
                    .map(|(field, value)| {
                        json!({
                            "match": {
                                (field.as_str()): value
                            }
                        })
                    })
                    .collect();

                json!({
                    "query": {
                        "bool": {
                            "must": must
                        }
                    }
                })
            }
            Self::PrefixMultiMatch { word, field } => json!({
                "size": PREFIX_RESULT_LIMIT,
                "query": {
                    "multi_match": {
                        "query": word,
                        "type": "bool_prefix",
                        "fields": [
                            field,
                            format!("{}._2gram", field),
                            format!("{}._3gram", field)
                        ]
                    }
                }
            }),
            Self::MatchPhrasePrefix { word, field } => json!({
                "query": {
                    "match_phrase_prefix": {
                        (field.as_str()): word
                    }
                }
            }),
            Self::TermsAggregate { name, field } => json!({
                "size": 0,
                "aggs": {
                    (name.as_str()): {
                        "terms": {
                            "field": field,
                            "size": AGGREGATE_BUCKET_LIMIT
                        }
                    }
                }
            }),
            Self::FilteredTermsAggregate {
                field,
                value,
                name,
                agg_field,
            } => json!({
                "query": {
                    "match_phrase": {
                        (field.as_str()): value
                    }
                },
                "size": 0,
                "aggs": {
                    (name.as_str()): {
                        "terms": {
                            "field": agg_field,
                            "size": AGGREGATE_BUCKET_LIMIT
                        }
                    }
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_phrase_has_exactly_one_key() {
        let doc = SearchRequest::match_phrase("author", "Herodotos").to_document();

        let phrase = doc["query"]["match_phrase"].as_object().unwrap();
        assert_eq!(phrase.len(), 1);
        assert_eq!(phrase["author"], "Herodotos");
    }

    #[test]
    fn test_match_all() {
        let doc = SearchRequest::match_all().to_document();

        assert!(doc["query"]["match_all"].as_object().unwrap().is_empty());
        assert_eq!(doc.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_bool_must_match_preserves_pair_order() {
        let pairs = vec![
            ("category".to_string(), "nouns".to_string()),
            ("chapter".to_string(), "4".to_string()),
            ("method".to_string(), "mouseion".to_string()),
        ];
        let doc = SearchRequest::bool_must_match(pairs).to_document();

        let must = doc["query"]["bool"]["must"].as_array().unwrap();
        assert_eq!(must.len(), 3);
        assert_eq!(must[0]["match"]["category"], "nouns");
        assert_eq!(must[1]["match"]["chapter"], "4");
        assert_eq!(must[2]["match"]["method"], "mouseion");
    }

    #[test]
    fn test_prefix_multi_match_fixed_size_and_gram_fields() {
        let doc = SearchRequest::prefix_multi_match("hera", "greek").to_document();

        assert_eq!(doc["size"], 15);
        assert_eq!(doc["query"]["multi_match"]["query"], "hera");
        assert_eq!(doc["query"]["multi_match"]["type"], "bool_prefix");

        let fields = doc["query"]["multi_match"]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "greek");
        assert_eq!(fields[1], "greek._2gram");
        assert_eq!(fields[2], "greek._3gram");
    }

    #[test]
    fn test_match_phrase_prefix() {
        let doc = SearchRequest::match_phrase_prefix("hero", "greek").to_document();

        assert_eq!(doc["query"]["match_phrase_prefix"]["greek"], "hero");
    }

    #[test]
    fn test_terms_aggregate_suppresses_hits_and_caps_buckets() {
        let doc = SearchRequest::terms_aggregate("authors", "author.keyword").to_document();

        assert_eq!(doc["size"], 0);
        assert_eq!(doc["aggs"]["authors"]["terms"]["field"], "author.keyword");
        assert_eq!(doc["aggs"]["authors"]["terms"]["size"], 500);
    }

    #[test]
    fn test_filtered_terms_aggregate_combines_filter_and_buckets() {
        let doc = SearchRequest::filtered_terms_aggregate(
            "author",
            "Herodotos",
            "books",
            "book.keyword",
        )
        .to_document();

        assert_eq!(doc["query"]["match_phrase"]["author"], "Herodotos");
        assert_eq!(doc["size"], 0);
        assert_eq!(doc["aggs"]["books"]["terms"]["field"], "book.keyword");
        assert_eq!(doc["aggs"]["books"]["terms"]["size"], 500);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let request = SearchRequest::match_phrase("greek", "λόγος");
        assert_eq!(request.to_document(), request.to_document());
    }
}
