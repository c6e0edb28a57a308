use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The four user-entered search inputs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct QueryParams {
    pub session_id: String,
    /// Origin airport code, e.g. "NGO". Not validated.
    pub airport_code: String,
    pub since_date: NaiveDate,
    pub until_date: NaiveDate,
}

/// Opaque identifier of a fare label. Strings and integers are the usual
/// shapes; anything else is kept as raw JSON and passed through untouched.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelId {
    Text(String),
    Number(i64),
    Other(Value),
}

impl Default for LabelId {
    fn default() -> Self {
        LabelId::Other(Value::Null)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FareLabel {
    #[serde(default)]
    pub id: LabelId,
}

/// `"fareLabels": null` reads as no labels.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FareLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FareLabel>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One upstream-reported daily price observation.
///
/// ```json
/// {"origin": "NGO", "destination": "XX3", "date": "2023-12-19",
///  "currency": "TWD", "amount": 0, "fareLabels": []}
/// ```
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    pub origin: String,
    pub destination: String,
    /// ISO date, "YYYY-MM-DD"
    pub date: String,
    pub currency: String,
    /// Zero or negative means upstream has no fare for this day.
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fare_labels: Vec<FareLabel>,
}

impl PriceRecord {
    /// Whether upstream reported an actual fare for this day.
    pub fn has_fare(&self) -> bool {
        self.amount > 0.0
    }
}
