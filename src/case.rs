//! Key casing at the API boundary. Records serialize with the storage model's camelCase field names;
//! each endpoint picks the wire casing its clients expect and converts keys here, never per handler.

use serde::Serialize;
use serde_json::{Map, Value};

/// Naming convention of object keys in a response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireCase {
    /// `first_name`, `created_at`
    Snake,
    /// `firstName`, `imageUrl`
    Camel,
}

/// Convert a single identifier from snake_case to camelCase.
/// e.g. "room_number" -> "roomNumber", "created_at" -> "createdAt"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "roomNumber" -> "room_number", "imageUrl" -> "image_url"
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn convert_key(key: &str, case: WireCase) -> String {
    match case {
        WireCase::Snake => to_snake_case(key),
        WireCase::Camel => to_camel_case(key),
    }
}

/// Rename all keys of a JSON object (in place, one level).
pub fn object_keys_to_case(obj: &mut Map<String, Value>, case: WireCase) {
    let keys: Vec<String> = obj.keys().cloned().collect();
    for k in keys {
        let renamed = convert_key(&k, case);
        if renamed != k {
            if let Some(v) = obj.remove(&k) {
                obj.insert(renamed, v);
            }
        }
    }
}

/// Recursively rename keys of every object in a Value (objects and arrays of objects).
pub fn value_keys_to_case_recursive(value: &mut Value, case: WireCase) {
    match value {
        Value::Object(map) => {
            object_keys_to_case(map, case);
            for (_, v) in map.iter_mut() {
                value_keys_to_case_recursive(v, case);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                value_keys_to_case_recursive(v, case);
            }
        }
        _ => {}
    }
}

/// Serialize a record (or list of records) and rename its keys to `case`.
pub fn to_wire_value<T: Serialize + ?Sized>(data: &T, case: WireCase) -> Result<Value, serde_json::Error> {
    let mut value = serde_json::to_value(data)?;
    value_keys_to_case_recursive(&mut value, case);
    Ok(value)
}
