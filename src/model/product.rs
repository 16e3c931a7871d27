use crate::model::field::{self, FieldError, FieldKind, FieldSpec, FieldValue};
use crate::model::id::RecordId;
use crate::model::record::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// Partial product used as the request body for create and update.
/// Unset fields are left out of the JSON so the backend keeps them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Product {
    type Draft = ProductDraft;

    const RESOURCE: &'static str = "products";
    const DISPLAY_NAME: &'static str = "Product";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
            searchable: true,
            sortable: true,
        },
        FieldSpec {
            name: "price",
            label: "Price",
            kind: FieldKind::Number { min: Some(0.0) },
            required: true,
            searchable: false,
            sortable: true,
        },
        FieldSpec {
            name: "description",
            label: "Description",
            kind: FieldKind::Text,
            required: false,
            searchable: true,
            sortable: false,
        },
    ];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "price" => Some(FieldValue::Number(self.price)),
            "description" => Some(FieldValue::Text(self.description.clone())),
            _ => None,
        }
    }

    fn apply_draft(&mut self, draft: &ProductDraft) {
        if let Some(title) = &draft.title {
            self.title = title.clone();
        }
        if let Some(price) = draft.price {
            self.price = price;
        }
        if let Some(description) = &draft.description {
            self.description = description.clone();
        }
    }

    fn draft_from_form(values: &[String]) -> Result<ProductDraft, FieldError> {
        let title = field::required_text(&Self::FIELDS[0], &values[0])?;
        let price = field::required_number(&Self::FIELDS[1], &values[1])?;
        Ok(ProductDraft {
            title: Some(title),
            price: Some(price),
            // Always carried, so blanking the field in the dialog clears it
            // on the backend instead of being silently dropped.
            description: Some(values[2].trim().to_string()),
        })
    }

    fn form_values(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            FieldValue::Number(self.price).to_string(),
            self.description.clone(),
        ]
    }
}
