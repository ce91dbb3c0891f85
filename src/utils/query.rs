// ABOUTME: Query-string helpers independent of any OAuth semantics
// ABOUTME: Drops empty values and percent-encodes key=value pairs in a stable order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use urlencoding::encode;

/// Keep only entries whose value is present and non-empty
///
/// Input order is preserved.
#[must_use]
pub fn remove_empty<K, V, I>(entries: I) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.as_ref().is_empty())
                .map(|value| (key, value))
        })
        .collect()
}

/// Serialize pairs as `key=value` joined with `&`
///
/// Keys and values are percent-encoded as URI components: everything except
/// ASCII alphanumerics and `-_.~` is escaped.
#[must_use]
pub fn stringify<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key.as_ref()), encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append one encoded `key=value` pair to an existing query string
pub fn append_pair(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(&encode(key));
    query.push('=');
    query.push_str(&encode(value));
}
