//! Path access into JSON property trees.
//!
//! Rewrite strategies substitute values at fixed property paths, so the two
//! operations needed are a borrowing descent through object keys and a pure
//! copy-on-write substitution. Substitution never mutates the source tree:
//! the result shares no structure guarantees with the input and the input is
//! left untouched.

use serde_json::Value;

/// Descend through object keys, returning the value at the path.
///
/// Returns `None` as soon as a segment is missing or the current value is
/// not an object. An empty path returns the value itself.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
  let mut current = value;
  for key in path {
    current = current.as_object()?.get(*key)?;
  }
  Some(current)
}

/// Copy of `value` with `replacement` substituted at the path.
///
/// Missing intermediate segments are created as objects, and a non-object
/// encountered along the path is replaced by one, so the substitution always
/// lands. An empty path returns `replacement`.
pub fn set_path(value: &Value, path: &[&str], replacement: Value) -> Value {
  match path {
    [] => replacement,
    [head, rest @ ..] => {
      let mut members = value.as_object().cloned().unwrap_or_default();
      let child = members.get(*head).unwrap_or(&Value::Null);
      let new_child = set_path(child, rest, replacement);
      members.insert((*head).to_string(), new_child);
      Value::Object(members)
    }
  }
}
