//! Identifier case conversion for token artifact emission.

use serde_json::{Map, Value};

/// Output casing for generated token identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Pascal,
    Camel,
    Kebab,
    Snake,
}

impl Casing {
    pub fn apply(&self, input: &str) -> String {
        match self {
            Casing::Pascal => to_pascal_case(input),
            Casing::Camel => to_camel_case(input),
            Casing::Kebab => to_kebab_case(input),
            Casing::Snake => to_snake_case(input),
        }
    }
}

/// Lowercases a string and folds every non-alphanumeric run into a single
/// space, trimming the ends.
pub fn normalize(input: &str) -> String {
    let folded: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits into normalized lowercase words.
pub fn split_words(input: &str) -> Vec<String> {
    normalize(input)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}

pub fn to_kebab_case(input: &str) -> String {
    normalize(input).replace(' ', "-")
}

pub fn to_snake_case(input: &str) -> String {
    normalize(input).replace(' ', "_")
}

pub fn to_camel_case(input: &str) -> String {
    let mut out = String::new();
    for (i, word) in split_words(input).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

pub fn to_pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| capitalize(word))
        .collect()
}

/// Recursively rewrites every object key in a JSON document to the given
/// casing. Arrays and scalars pass through untouched.
pub fn clean_variable_names(value: &Value, casing: Casing) -> Value {
    match value {
        Value::Object(map) => {
            let mut cleaned = Map::new();
            for (key, val) in map {
                cleaned.insert(casing.apply(key), clean_variable_names(val, casing));
            }
            Value::Object(cleaned)
        }
        other => other.clone(),
    }
}
