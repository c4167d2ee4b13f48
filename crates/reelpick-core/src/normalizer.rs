//! Result normalizer for raw discover items.
//!
//! Validates and reshapes raw upstream records into canonical
//! [`MediaItem`]s. A malformed item is never an error; it is silently
//! excluded. Output order follows input order.

use serde_json::Value;

use crate::types::MediaItem;

/// Normalize a sequence of raw discover items.
///
/// Order-preserving filter: each item either satisfies all validation
/// rules and becomes a [`MediaItem`], or is dropped. Idempotent over the
/// serialized form of its own output.
///
/// # Arguments
/// * `results` - Raw JSON records from a discover response
pub fn normalize(results: &[Value]) -> Vec<MediaItem> {
    results.iter().filter_map(normalize_item).collect()
}

/// Normalize a single raw item.
///
/// Validation rules:
/// 1. A non-empty title under `title` (movie) or `name` (TV).
/// 2. A numeric-coercible `vote_average` (number, or string parsing to a
///    finite float).
/// 3. A non-empty date under `release_date` or `first_air_date`.
/// 4. A positive integer `id`.
///
/// A missing `poster_path` is normalized to an explicit `None` so
/// downstream rendering sees a uniform optional field.
pub fn normalize_item(raw: &Value) -> Option<MediaItem> {
    let id = raw.get("id")?.as_u64().filter(|id| *id > 0)?;
    // An empty movie-style title falls through to the show-style key.
    let title = ["title", "name"]
        .iter()
        .filter_map(|key| raw.get(key).and_then(Value::as_str))
        .find(|title| !title.is_empty())?
        .to_string();
    let vote_average = coerce_rating(raw.get("vote_average")?)?;
    let release_date = raw
        .get("release_date")
        .or_else(|| raw.get("first_air_date"))?
        .as_str()
        .filter(|date| !date.is_empty())?
        .to_string();
    let overview = raw
        .get("overview")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let poster_path = raw
        .get("poster_path")
        .and_then(Value::as_str)
        .map(str::to_string);
    let origin_country = raw.get("origin_country").and_then(Value::as_array).map(|codes| {
        codes
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });

    Some(MediaItem {
        id,
        title,
        overview,
        poster_path,
        release_date,
        vote_average,
        origin_country,
    })
}

/// Coerce a raw rating value to a finite float.
fn coerce_rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|rating| rating.is_finite()),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|rating| rating.is_finite()),
        _ => None,
    }
}
