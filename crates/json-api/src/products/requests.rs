//! Product Requests
//!
//! Write requests are validated from the raw JSON body rather than through a
//! typed extractor so that every failing field is reported at once.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
};

use salvo::{Request, oapi::ToSchema};
use serde_json::{Map, Value};
use smallvec::SmallVec;
use tracing::debug;

use catalog_app::domain::products::data::{NewProduct, ProductUpdate};

use crate::products::errors::ProductsError;

const NAME_MAX_LENGTH: usize = 100;

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ValidationErrors(BTreeMap<&'static str, SmallVec<[String; 1]>>);

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: String) {
        self.0.entry(field).or_default().push(message);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(SmallVec::as_slice)
    }

    pub(crate) fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
            .into_iter()
            .map(|(field, messages)| (field.to_string(), messages.into_vec()))
            .collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, (field, messages)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{field}: {}", messages.join(" "))?;
        }

        Ok(())
    }
}

/// Validated Product Request
///
/// `description` is `None` when the key was absent and `Some(None)` when it
/// was sent as null or blank.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub(crate) struct ProductRequest {
    /// Display name, at most 100 characters
    pub name: String,

    /// Optional free-form description; null clears it
    pub description: Option<Option<String>>,

    /// Whole-number price
    pub price: i64,

    /// Whether the product is shown to customers
    pub is_show: bool,

    /// Category the product is listed under
    pub category: String,
}

impl ProductRequest {
    /// Parse and validate the request body.
    ///
    /// A body that is missing or is not a JSON object carries no fields, so it
    /// fails validation rather than being rejected outright.
    pub(crate) async fn from_request(req: &mut Request) -> Result<Self, ProductsError> {
        let body = req.parse_json::<Value>().await.unwrap_or_else(|error| {
            debug!("treating unreadable product payload as empty: {error}");

            Value::Null
        });

        Self::validate(&body).map_err(ProductsError::Validation)
    }

    /// Check every field against its rules, collecting all failures.
    pub(crate) fn validate(body: &Value) -> Result<Self, ValidationErrors> {
        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);

        let mut errors = ValidationErrors::default();

        let name = check(&mut errors, fields, "name", |value| {
            let name = string(value)?;

            if name.chars().count() > NAME_MAX_LENGTH {
                return Err(format!(
                    "must not be greater than {NAME_MAX_LENGTH} characters."
                ));
            }

            Ok(name)
        });

        let price = check(&mut errors, fields, "price", integer);
        let is_show = check(&mut errors, fields, "is_show", boolean);
        let category = check(&mut errors, fields, "category", string);
        let description = fields.get("description").map(nullable_text);

        match (name, price, is_show, category) {
            (Some(name), Some(price), Some(is_show), Some(category)) if errors.is_empty() => {
                Ok(Self {
                    name,
                    description,
                    price,
                    is_show,
                    category,
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description.flatten(),
            price: request.price,
            is_show: request.is_show,
            category: request.category,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: Some(request.name),
            description: request.description,
            price: Some(request.price),
            is_show: Some(request.is_show),
            category: Some(request.category),
        }
    }
}

/// Applies the required rule, then `rule` when a value is present. `rule`
/// returns the message tail that follows the field's display name.
fn check<T>(
    errors: &mut ValidationErrors,
    fields: &Map<String, Value>,
    field: &'static str,
    rule: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    let attribute = field.replace('_', " ");

    let Some(value) = fields.get(field).filter(|value| is_present(value)) else {
        errors.add(field, format!("The {attribute} field is required."));

        return None;
    };

    match rule(value) {
        Ok(valid) => Some(valid),
        Err(message) => {
            errors.add(field, format!("The {attribute} {message}"));

            None
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

fn string(value: &Value) -> Result<String, String> {
    value
        .as_str()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| "must be a string.".to_string())
}

fn integer(value: &Value) -> Result<i64, String> {
    let parsed = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| "must be an integer.".to_string())
}

fn boolean(value: &Value) -> Result<bool, String> {
    let parsed = match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(text) => match text.trim() {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        },
        _ => None,
    };

    parsed.ok_or_else(|| "field must be true or false.".to_string())
}

fn nullable_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    };

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn valid_body() -> Value {
        json!({
            "name": "Test Product",
            "description": "desc",
            "price": 10,
            "is_show": true,
            "category": "Test Category",
        })
    }

    fn messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors.get(field).map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn accepts_valid_body() -> TestResult {
        let request = ProductRequest::validate(&valid_body())?;

        assert_eq!(
            request,
            ProductRequest {
                name: "Test Product".to_string(),
                description: Some(Some("desc".to_string())),
                price: 10,
                is_show: true,
                category: "Test Category".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn missing_name_is_required() {
        let errors = ProductRequest::validate(&json!({
            "price": 10,
            "is_show": true,
            "category": "x",
        }))
        .err()
        .unwrap_or_default();

        assert_eq!(messages(&errors, "name"), ["The name field is required."]);
        assert!(errors.get("price").is_none(), "price is valid");
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = ProductRequest::validate(&json!({})).err().unwrap_or_default();

        assert_eq!(
            errors.into_map(),
            BTreeMap::from([
                (
                    "category".to_string(),
                    vec!["The category field is required.".to_string()]
                ),
                (
                    "is_show".to_string(),
                    vec!["The is show field is required.".to_string()]
                ),
                (
                    "name".to_string(),
                    vec!["The name field is required.".to_string()]
                ),
                (
                    "price".to_string(),
                    vec!["The price field is required.".to_string()]
                ),
            ])
        );
    }

    #[test]
    fn non_object_body_fails_every_required_field() {
        let errors = ProductRequest::validate(&json!([1, 2, 3]))
            .err()
            .unwrap_or_default();

        assert_eq!(errors.into_map().len(), 4);
    }

    #[test]
    fn null_and_blank_values_count_as_missing() {
        let errors = ProductRequest::validate(&json!({
            "name": "   ",
            "price": null,
            "is_show": true,
            "category": [],
        }))
        .err()
        .unwrap_or_default();

        assert_eq!(messages(&errors, "name"), ["The name field is required."]);
        assert_eq!(messages(&errors, "price"), ["The price field is required."]);
        assert_eq!(
            messages(&errors, "category"),
            ["The category field is required."]
        );
    }

    #[test]
    fn name_longer_than_100_characters_is_rejected() {
        let mut body = valid_body();

        body["name"] = json!("a".repeat(101));

        let errors = ProductRequest::validate(&body).err().unwrap_or_default();

        assert_eq!(
            messages(&errors, "name"),
            ["The name must not be greater than 100 characters."]
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() -> TestResult {
        let mut body = valid_body();

        body["name"] = json!("é".repeat(100));

        let request = ProductRequest::validate(&body)?;

        assert_eq!(request.name.chars().count(), 100);

        Ok(())
    }

    #[test]
    fn non_string_name_and_category_are_rejected() {
        let mut body = valid_body();

        body["name"] = json!(12);
        body["category"] = json!({ "id": 1 });

        let errors = ProductRequest::validate(&body).err().unwrap_or_default();

        assert_eq!(messages(&errors, "name"), ["The name must be a string."]);
        assert_eq!(
            messages(&errors, "category"),
            ["The category must be a string."]
        );
    }

    #[test]
    fn price_must_be_an_integer() {
        for price in [json!(10.5), json!("ten"), json!(true), json!([1])] {
            let mut body = valid_body();

            body["price"] = price.clone();

            let errors = ProductRequest::validate(&body).err().unwrap_or_default();

            assert_eq!(
                messages(&errors, "price"),
                ["The price must be an integer."],
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn price_accepts_integer_strings_and_negatives() -> TestResult {
        let mut body = valid_body();

        body["price"] = json!(" 42 ");

        assert_eq!(ProductRequest::validate(&body)?.price, 42);

        body["price"] = json!(-5);

        assert_eq!(ProductRequest::validate(&body)?.price, -5);

        Ok(())
    }

    #[test]
    fn is_show_accepts_boolean_like_values() -> TestResult {
        for (value, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!("1"), true),
            (json!("0"), false),
        ] {
            let mut body = valid_body();

            body["is_show"] = value;

            assert_eq!(ProductRequest::validate(&body)?.is_show, expected);
        }

        Ok(())
    }

    #[test]
    fn is_show_accepts_padded_boolean_strings() -> TestResult {
        let mut body = valid_body();

        body["is_show"] = json!(" 1 ");
        body["price"] = json!(" 7 ");

        let request = ProductRequest::validate(&body)?;

        assert!(request.is_show, "padded \"1\" should be true");
        assert_eq!(request.price, 7);

        body["is_show"] = json!(" 0 ");

        assert!(!ProductRequest::validate(&body)?.is_show);

        Ok(())
    }

    #[test]
    fn empty_object_counts_as_missing() {
        let mut body = valid_body();

        body["category"] = json!({});

        let errors = ProductRequest::validate(&body).err().unwrap_or_default();

        assert_eq!(
            messages(&errors, "category"),
            ["The category field is required."]
        );
    }

    #[test]
    fn errors_display_fields_and_messages() {
        let errors = ProductRequest::validate(&json!({
            "name": 5,
            "is_show": true,
            "category": "x",
        }))
        .err()
        .unwrap_or_default();

        assert_eq!(
            errors.to_string(),
            "name: The name must be a string.; price: The price field is required."
        );
    }

    #[test]
    fn is_show_rejects_other_values() {
        for value in [json!("true"), json!(2), json!("yes")] {
            let mut body = valid_body();

            body["is_show"] = value;

            let errors = ProductRequest::validate(&body).err().unwrap_or_default();

            assert_eq!(
                messages(&errors, "is_show"),
                ["The is show field must be true or false."]
            );
        }
    }

    #[test]
    fn false_is_show_is_present() -> TestResult {
        let mut body = valid_body();

        body["is_show"] = json!(false);

        assert!(!ProductRequest::validate(&body)?.is_show);

        Ok(())
    }

    #[test]
    fn description_distinguishes_absent_from_null() -> TestResult {
        let mut body = valid_body();

        body["description"] = Value::Null;

        assert_eq!(ProductRequest::validate(&body)?.description, Some(None));

        body["description"] = json!("");

        assert_eq!(ProductRequest::validate(&body)?.description, Some(None));

        if let Some(fields) = body.as_object_mut() {
            fields.remove("description");
        }

        assert_eq!(ProductRequest::validate(&body)?.description, None);

        Ok(())
    }

    #[test]
    fn description_accepts_any_scalar() -> TestResult {
        let mut body = valid_body();

        body["description"] = json!(12);

        assert_eq!(
            ProductRequest::validate(&body)?.description,
            Some(Some("12".to_string()))
        );

        Ok(())
    }

    #[test]
    fn strings_are_trimmed_and_unknown_fields_ignored() -> TestResult {
        let mut body = valid_body();

        body["name"] = json!("  Padded  ");
        body["id"] = json!(99);
        body["deleted_at"] = json!("2026-01-01T00:00:00Z");

        let request = ProductRequest::validate(&body)?;

        assert_eq!(request.name, "Padded");

        Ok(())
    }

    #[test]
    fn converts_into_update_keeping_absent_description() -> TestResult {
        let mut body = valid_body();

        if let Some(fields) = body.as_object_mut() {
            fields.remove("description");
        }

        let update: ProductUpdate = ProductRequest::validate(&body)?.into();

        assert_eq!(
            update,
            ProductUpdate {
                name: Some("Test Product".to_string()),
                description: None,
                price: Some(10),
                is_show: Some(true),
                category: Some("Test Category".to_string()),
            }
        );

        Ok(())
    }
}
