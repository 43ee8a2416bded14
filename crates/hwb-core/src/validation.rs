use serde_json::Value;

use crate::{errors::Error, Result};

/// Check the shape of a homework API response and return its homework list.
///
/// The list is returned unchanged: the first element is the most recent
/// submission.
pub fn check_response(response: &Value) -> Result<Vec<Value>> {
    tracing::info!("checking API response");

    let Some(obj) = response.as_object() else {
        return Err(Error::UnexpectedType(format!(
            "ответ API не является словарём: {}",
            type_name(response)
        )));
    };

    if !obj.contains_key("homeworks") || !obj.contains_key("current_date") {
        return Err(Error::EmptyResponse);
    }

    match &obj["homeworks"] {
        Value::Array(list) => Ok(list.clone()),
        other => Err(Error::UnexpectedType(format!(
            "homeworks не является списком: {}",
            type_name(other)
        ))),
    }
}

/// Server-reported cursor for the next poll, if the response carries one.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
