use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country linked to a trip
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
}

/// Trip with the countries it visits
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<Country>,
}

/// Trip as seen from a client's registration list
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientTrip {
    pub trip_name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub registered_at: DateTime<Utc>,
    /// `YYYY-MM-DD`, null until paid
    pub payment_date: Option<String>,
}

/// Request body for `POST /clients`
///
/// Missing fields deserialize as empty strings so they fail validation
/// with a readable message instead of a JSON rejection.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default, alias = "pesel")]
    pub national_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedClient {
    pub id: i32,
}

/// One row of the trips × countries left join
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TripCountryRow {
    pub trip_id: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub country_name: Option<String>,
}

/// One row of the client_trips × trips join
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClientTripRow {
    pub trip_name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub registered_at: DateTime<Utc>,
    pub payment_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trip_serializes_camel_case() {
        let trip = Trip {
            id: 1,
            name: "Alps".to_string(),
            description: "Hiking".to_string(),
            date_from: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            date_to: NaiveDate::from_ymd_opt(2025, 6, 8)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            max_people: 10,
            countries: vec![Country {
                name: "Austria".to_string(),
            }],
        };

        let value = serde_json::to_value(&trip).unwrap();
        assert_eq!(value["maxPeople"], 10);
        assert_eq!(value["dateFrom"], "2025-06-01T00:00:00");
        assert_eq!(value["countries"][0]["name"], "Austria");
    }

    #[test]
    fn test_create_client_request_accepts_pesel_alias() {
        let request: CreateClientRequest = serde_json::from_value(json!({
            "firstName": "Jan",
            "lastName": "Kowalski",
            "email": "jan@example.com",
            "telephone": "+48 600 100 200",
            "pesel": "90010112345"
        }))
        .unwrap();

        assert_eq!(request.national_id, "90010112345");
    }

    #[test]
    fn test_create_client_request_missing_fields_default_empty() {
        let request: CreateClientRequest =
            serde_json::from_value(json!({ "firstName": "Jan" })).unwrap();

        assert_eq!(request.first_name, "Jan");
        assert!(request.email.is_empty());
        assert!(request.national_id.is_empty());
    }
}
