use crate::model::field::{self, FieldError, FieldKind, FieldSpec, FieldValue};
use crate::model::id::RecordId;
use crate::model::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Record for User {
    type Draft = UserDraft;

    const RESOURCE: &'static str = "users";
    const DISPLAY_NAME: &'static str = "User";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "firstName",
            label: "First Name",
            kind: FieldKind::Text,
            required: true,
            searchable: true,
            sortable: true,
        },
        FieldSpec {
            name: "lastName",
            label: "Last Name",
            kind: FieldKind::Text,
            required: true,
            searchable: true,
            sortable: true,
        },
        FieldSpec {
            name: "email",
            label: "Email",
            kind: FieldKind::Text,
            required: true,
            searchable: true,
            sortable: true,
        },
    ];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "firstName" => Some(FieldValue::Text(self.first_name.clone())),
            "lastName" => Some(FieldValue::Text(self.last_name.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            _ => None,
        }
    }

    fn apply_draft(&mut self, draft: &UserDraft) {
        if let Some(first_name) = &draft.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &draft.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(email) = &draft.email {
            self.email = email.clone();
        }
    }

    fn draft_from_form(values: &[String]) -> Result<UserDraft, FieldError> {
        let first_name = field::required_text(&Self::FIELDS[0], &values[0])?;
        let last_name = field::required_text(&Self::FIELDS[1], &values[1])?;
        let email = field::required_text(&Self::FIELDS[2], &values[2])?;
        Ok(UserDraft {
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(email),
        })
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_shape() {
        let u: User = serde_json::from_str(
            r#"{"id":"u1","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(u.id, RecordId::from("u1"));
        assert_eq!(u.first_name, "Ada");
        assert_eq!(u.last_name, "Lovelace");
    }

    #[test]
    fn draft_serializes_camel_case_and_skips_unset() {
        let draft = UserDraft {
            email: Some("ada@example.net".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&draft).unwrap(),
            r#"{"email":"ada@example.net"}"#
        );
    }

    #[test]
    fn every_field_is_required() {
        let values = vec!["Ada".to_string(), "".to_string(), "a@b.c".to_string()];
        assert_eq!(
            User::draft_from_form(&values),
            Err(FieldError::Required { label: "Last Name" })
        );
    }

    #[test]
    fn field_lookup_by_wire_name() {
        let u = User {
            id: RecordId::from(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(
            u.field("lastName"),
            Some(FieldValue::Text("Lovelace".to_string()))
        );
        assert_eq!(u.field("surname"), None);
    }
}
