//! Index schema shapes and their encoders.
//!
//! Settings/mappings documents for the indices this client provisions.
//! Shapes are fixed; only the dictionary n-gram bounds and the plain
//! settings counts are parameterized.

use serde_json::{json, Value};

/// The closed set of index settings/mappings documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSchema {
    /// A single `search_as_you_type` property, for autocomplete indices.
    SearchAsYouType { field: String },
    /// Text corpus index: analyzed source text with a lowercase + stopword +
    /// stemmer filter chain, keyword author field and translation locators.
    Text,
    /// Quiz index: keyword method/category, analyzed question/answer text.
    Quiz,
    /// Grammar index: keyword declension with analyzed rule fields.
    Grammar,
    /// Dictionary index with a custom n-gram tokenizer.
    Dictionary { min_gram: i64, max_gram: i64 },
    /// Bare index settings without mappings.
    Settings { shards: i64, replicas: i64 },
}

impl IndexSchema {
    /// Autocomplete schema over a single field.
    pub fn search_as_you_type(field: impl Into<String>) -> Self {
        Self::SearchAsYouType {
            field: field.into(),
        }
    }

    /// Dictionary schema with n-gram bounds. `max_ngram_diff` is derived
    /// from the bounds on encoding.
    pub fn dictionary(min_gram: i64, max_gram: i64) -> Self {
        Self::Dictionary { min_gram, max_gram }
    }

    /// Settings-only schema with the default single shard and replica.
    pub fn default_settings() -> Self {
        Self::Settings {
            shards: 1,
            replicas: 1,
        }
    }

    /// Encode this schema into its settings/mappings document.
    pub fn to_document(&self) -> Value {
        match self {
            Self::SearchAsYouType { field } => json!({
                "mappings": {
                    "properties": {
                        (field.as_str()): {
                            "type": "search_as_you_type"
                        }
                    }
                }
            }),
            Self::Text => json!({
                "settings": {
                    "analysis": {
                        "analyzer": {
                            "greek_analyzer": {
                                "type": "custom",
                                "tokenizer": "standard",
                                "filter": ["lowercase", "greek_stop", "greek_stemmer"]
                            }
                        },
                        "filter": {
                            "greek_stop": {
                                "type": "stop",
                                "stopwords": "_greek_"
                            },
                            "greek_stemmer": {
                                "type": "stemmer",
                                "language": "greek"
                            }
                        }
                    }
                },
                "mappings": {
                    "properties": {
                        "author": { "type": "keyword" },
                        "greek": {
                            "type": "text",
                            "analyzer": "greek_analyzer",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "translations": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "book": { "type": "integer" },
                        "chapter": { "type": "integer" },
                        "section": { "type": "integer" },
                        "perseusTextLink": { "type": "keyword" }
                    }
                }
            }),
            Self::Quiz => json!({
                "mappings": {
                    "properties": {
                        "method": { "type": "keyword" },
                        "category": { "type": "keyword" },
                        "greek": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "translation": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "chapter": { "type": "integer" }
                    }
                }
            }),
            Self::Grammar => json!({
                "mappings": {
                    "properties": {
                        "declension": { "type": "keyword" },
                        "ruleName": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "searchTerm": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        }
                    }
                }
            }),
            Self::Dictionary { min_gram, max_gram } => json!({
                "settings": {
                    "index": {
                        "max_ngram_diff": max_gram - min_gram
                    },
                    "analysis": {
                        "analyzer": {
                            "greek_analyzer": {
                                "tokenizer": "greek_tokenizer"
                            }
                        },
                        "tokenizer": {
                            "greek_tokenizer": {
                                "type": "ngram",
                                "min_gram": min_gram,
                                "max_gram": max_gram,
                                "token_chars": ["letter"]
                            }
                        }
                    }
                },
                "mappings": {
                    "properties": {
                        "greek": {
                            "type": "text",
                            "analyzer": "greek_analyzer",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "english": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        },
                        "dutch": {
                            "type": "text",
                            "fields": {
                                "keyword": { "type": "keyword" }
                            }
                        }
                    }
                }
            }),
            Self::Settings { shards, replicas } => json!({
                "settings": {
                    "index": {
                        "number_of_shards": shards,
                        "number_of_replicas": replicas
                    }
                }
            }),
        }
    }
}
