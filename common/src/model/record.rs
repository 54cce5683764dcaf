use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Server-assigned identifier of a record.
///
/// The backend hands out either numeric or string ids depending on how the
/// record was created, so both shapes are accepted and written back as-is.
/// Any JSON number is kept, including negative and fractional ones.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordId {
    Number(Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId::Number(Number::from(value))
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// One row of the collection as returned by `GET /posts`.
///
/// Field contents are not validated: a missing field decodes as an empty
/// string and a number decodes as its decimal text, so whatever the backend
/// stored ends up in the table. A row whose `id` is missing or is neither a
/// number nor a string is still shown, but cannot be selected.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub student_number: String,
}

impl Record {
    /// Copies the editable fields into a draft, dropping the id.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            student_number: self.student_number.clone(),
        }
    }
}

/// The form's editable copy of a record; also the body of POST and PUT.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub title: String,
    pub author: String,
    pub student_number: String,
}

impl RecordDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Author => self.author = value,
            DraftField::StudentNumber => self.student_number = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
            DraftField::StudentNumber => &self.student_number,
        }
    }
}

/// Input fields of the form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Author,
    StudentNumber,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::Title,
        DraftField::Author,
        DraftField::StudentNumber,
    ];
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(RecordId::Number(n)),
        Value::String(s) => Some(RecordId::Text(s)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_backend_shape() {
        let json = r#"{"id":1,"title":"X","author":"Y","studentNumber":"5"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(RecordId::from(1)));
        assert_eq!(record.title, "X");
        assert_eq!(record.author, "Y");
        assert_eq!(record.student_number, "5");
    }

    #[test]
    fn test_record_decodes_loose_fields() {
        let json = r#"{"id":"a1b2","title":null,"studentNumber":12}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(RecordId::from("a1b2")));
        assert_eq!(record.title, "");
        assert_eq!(record.author, "");
        assert_eq!(record.student_number, "12");
    }

    #[test]
    fn test_list_keeps_rows_with_odd_ids() {
        let json = r#"[
            {"id":1,"title":"X","author":"Y","studentNumber":"5"},
            {"title":"no id","author":"Z","studentNumber":"1"},
            {"id":-2,"title":"negative"},
            {"id":1.5,"title":"fraction"},
            {"id":{"nested":true},"title":"object"}
        ]"#;
        let rows: Vec<Record> = serde_json::from_str(json).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, Some(RecordId::from(1)));
        assert_eq!(rows[1].id, None);
        assert_eq!(rows[1].title, "no id");
        assert_eq!(rows[2].id.as_ref().map(|id| id.to_string()), Some("-2".to_string()));
        assert_eq!(rows[3].id.as_ref().map(|id| id.to_string()), Some("1.5".to_string()));
        assert_eq!(rows[4].id, None);
        assert_eq!(rows[4].title, "object");
    }

    #[test]
    fn test_non_array_body_is_rejected() {
        let json = r#"{"id":1,"title":"X"}"#;
        assert!(serde_json::from_str::<Vec<Record>>(json).is_err());
    }

    #[test]
    fn test_draft_serializes_wire_names() {
        let draft = RecordDraft {
            title: "A".to_string(),
            author: "B".to_string(),
            student_number: "3".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "A", "author": "B", "studentNumber": "3"})
        );
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::from(7).to_string(), "7");
        assert_eq!(RecordId::from("x-9").to_string(), "x-9");
    }

    #[test]
    fn test_draft_set_and_get() {
        let mut draft = RecordDraft::default();
        draft.set(DraftField::Author, "Ada".to_string());
        assert_eq!(draft.get(DraftField::Author), "Ada");
        assert_eq!(draft.get(DraftField::Title), "");
    }
}
