use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use crate::books::domain::model::BookRecord;
use crate::utils::date::normalize_sales_date;

// One entry of the upstream isbn list. The list has been published both as plain
// strings and as objects carrying an `isbn` field, so either shape is accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IsbnEntryDto {
    Value(IsbnValueDto),
    Object {
        #[serde(default)]
        isbn: Option<IsbnValueDto>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IsbnValueDto {
    Text(String),
    Number(Number),
}

impl IsbnValueDto {
    fn into_isbn(self) -> String {
        match self {
            IsbnValueDto::Text(text) => text,
            IsbnValueDto::Number(number) => number.to_string(),
        }
    }
}

impl IsbnEntryDto {
    pub(crate) fn into_isbn(self) -> Option<String> {
        let isbn = match self {
            IsbnEntryDto::Value(value) => Some(value.into_isbn()),
            IsbnEntryDto::Object { isbn } => isbn.map(IsbnValueDto::into_isbn),
        };
        isbn.filter(|isbn| !isbn.is_empty())
    }
}

// keeps list order, drops entries without a usable isbn
pub(crate) fn to_isbn_list(entries: Vec<IsbnEntryDto>) -> Vec<String> {
    entries.into_iter().filter_map(IsbnEntryDto::into_isbn).collect()
}

// LookupResponseDto is the body returned by the lookup api: { Items: [ { Item: {...} } ] }
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LookupResponseDto {
    #[serde(rename = "Items", default)]
    pub items: Option<Vec<LookupEntryDto>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupEntryDto {
    #[serde(rename = "Item", default)]
    pub item: Option<LookupItemDto>,
}

// Numbers are kept as their decimal text, any other non-string value is treated as
// missing, so an odd field falls back instead of rejecting the whole response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LookupItemDto {
    #[serde(default, deserialize_with = "text_or_none")]
    pub title: Option<String>,
    #[serde(rename = "seriesName", default, deserialize_with = "text_or_none")]
    pub series_name: Option<String>,
    #[serde(rename = "salesDate", default, deserialize_with = "text_or_none")]
    pub sales_date: Option<String>,
}

fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        _ => Ok(None),
    }
}

impl LookupResponseDto {
    // only the first entry is considered
    pub(crate) fn first_item(self) -> Option<LookupItemDto> {
        self.items
            .and_then(|items| items.into_iter().next())
            .and_then(|entry| entry.item)
    }
}

impl LookupItemDto {
    pub(crate) fn to_record(&self, isbn: &str) -> BookRecord {
        let release_date = self.sales_date.as_deref().and_then(normalize_sales_date);
        BookRecord::new(isbn, self.title.as_deref(), self.series_name.as_deref(), release_date)
    }
}
