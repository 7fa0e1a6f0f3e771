//! Encoding of list-valued columns.
//!
//! Quiz options and submitted answers live in TEXT columns as JSON arrays.
//! `EncodedList` is the only place that format is known; repository
//! functions bind and read it, and callers only ever see the decoded list.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A list stored as JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedList<T>(pub T);

impl<T> EncodedList<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T: Serialize> ToSql for EncodedList<T> {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
    serde_json::to_string(&self.0)
      .map(ToSqlOutput::from)
      .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
  }
}

impl<T: DeserializeOwned> FromSql for EncodedList<T> {
  fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
    let text = value.as_str()?;
    serde_json::from_str(text)
      .map(EncodedList)
      .map_err(|e| FromSqlError::Other(Box::new(e)))
  }
}
