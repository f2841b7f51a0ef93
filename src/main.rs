#[macro_use]
extern crate rocket;

use log::info;
use rocket::fairing::AdHoc;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::serde::{json::Json, Deserialize, Serialize};
use rocket::State;

use unit_converter::catalog::{CatalogEntry, Category, UNIT_CATALOG};
use unit_converter::config::AppConfig;
use unit_converter::render::{render, Mode, Page};
use unit_converter::theme::Theme;
use unit_converter::{ConversionRequest, ConversionResult};

#[launch]
fn rocket() -> _ {
    rocket::build()
        .mount("/", routes![index, convert, api_convert, api_units])
        .attach(AdHoc::config::<AppConfig>())
        .attach(AdHoc::on_liftoff("Startup", |rocket| {
            Box::pin(async move {
                if let Some(config) = rocket.state::<AppConfig>() {
                    info!(
                        "Unit converter ready, default theme: {}",
                        config.default_theme.form_value()
                    );
                }
            })
        }))
}

#[get("/?<theme>&<mode>&<category>")]
fn index(
    theme: Option<Theme>,
    mode: Option<Mode>,
    category: Option<Category>,
    config: &State<AppConfig>,
) -> RawHtml<String> {
    let theme = theme.unwrap_or(config.default_theme);
    let page = Page {
        mode: mode.unwrap_or_default(),
        category: category.unwrap_or_default(),
        author: &config.author,
        ..Page::default()
    };

    RawHtml(render(&theme.config(), &page))
}

/// The fields submitted by the converter form.
#[derive(FromForm)]
struct ConvertForm<'r> {
    value: &'r str,
    category: Option<Category>,
    from_unit: &'r str,
    to_unit: &'r str,
    theme: Option<Theme>,
}

#[post("/convert", data = "<form>")]
fn convert(form: Form<ConvertForm<'_>>, config: &State<AppConfig>) -> RawHtml<String> {
    let result = ConversionRequest::parse(form.value, form.from_unit, form.to_unit)
        .and_then(|request| request.execute());

    let theme = form.theme.unwrap_or(config.default_theme);
    let category = form
        .category
        .or_else(|| Category::of_unit(form.from_unit))
        .unwrap_or_default();
    let page = Page {
        mode: Mode::Converter,
        category,
        value: form.value,
        from_unit: Some(form.from_unit),
        to_unit: Some(form.to_unit),
        result: Some(ConversionResult::from(result)),
        author: &config.author,
    };

    RawHtml(render(&theme.config(), &page))
}

/// A value either already numeric or still in its textual form.
#[derive(Deserialize, Serialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde", untagged)]
enum ApiValue {
    Number(f64),
    Text(String),
}

#[derive(Deserialize, Serialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
struct ApiConvertRequest {
    value: ApiValue,
    from: String,
    to: String,
}

#[post("/api/convert", format = "json", data = "<conversion>")]
fn api_convert(conversion: Json<ApiConvertRequest>) -> Json<ConversionResult> {
    let ApiConvertRequest { value, from, to } = conversion.into_inner();
    let request = match value {
        ApiValue::Number(value) => Ok(ConversionRequest::new(value, from, to)),
        ApiValue::Text(raw) => ConversionRequest::parse(&raw, from, to),
    };

    Json(ConversionResult::from(
        request.and_then(|request| request.execute()),
    ))
}

#[get("/api/units")]
fn api_units() -> Json<Vec<CatalogEntry>> {
    Json(UNIT_CATALOG.clone())
}

#[cfg(test)]
mod test {
    use super::rocket;
    use crate::{ApiConvertRequest, ApiValue};
    use unit_converter::{ConversionResult, ErrorKind};
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use rocket::serde::json::Value;
    use speculoos::prelude::*;

    fn client() -> Client {
        Client::tracked(rocket()).expect("valid rocket instance")
    }

    fn api_request(value: ApiValue, from: &str, to: &str) -> ApiConvertRequest {
        ApiConvertRequest {
            value,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn index_renders_converter() {
        let client = client();

        let response = client.get("/").dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        assert_that!(response.content_type()).is_equal_to(Some(ContentType::HTML));
        let body = response.into_string().expect("html body");
        assert_that!(body).contains("Unit Converter 🔢");
        assert_that!(body).contains(r#"<option value="meters" selected>meters</option>"#);
    }

    #[test]
    fn index_renders_table_in_dark_mode() {
        let client = client();

        let response = client.get("/?theme=dark&mode=table").dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        let body = response.into_string().expect("html body");
        assert_that!(body).contains("#222831");
        assert_that!(body).contains("🔹 1 liter = 4.227 cups");
    }

    #[test]
    fn unknown_query_values_fall_back_to_defaults() {
        let client = client();

        let response = client.get("/?theme=sepia&category=time").dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        let body = response.into_string().expect("html body");
        assert_that!(body).contains("#FFFFFF");
        assert_that!(body).contains(r#"<option value="length" selected>📏 Length</option>"#);
    }

    #[test]
    fn form_conversion_should_work() {
        let client = client();

        let response = client
            .post("/convert")
            .header(ContentType::Form)
            .body("value=100&category=temperature&from_unit=celsius&to_unit=fahrenheit&theme=dark")
            .dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        let body = response.into_string().expect("html body");
        assert_that!(body)
            .contains(r#"<div class="success">✅ 100.0 celsius = 212.00 fahrenheit</div>"#);
        assert_that!(body).contains(r#"<option value="fahrenheit" selected>fahrenheit</option>"#);
        assert_that!(body).contains("#222831");
    }

    #[test]
    fn form_with_text_value_shows_error() {
        let client = client();

        let response = client
            .post("/convert")
            .header(ContentType::Form)
            .body("value=abc&category=length&from_unit=meters&to_unit=feet")
            .dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        let body = response.into_string().expect("html body");
        assert_that!(body)
            .contains(r#"<div class="error">❌ Please enter a valid numeric value.</div>"#);
    }

    #[test]
    fn form_without_category_infers_it() {
        let client = client();

        for body in [
            "value=1&from_unit=cups&to_unit=liters",
            "value=1&category=time&from_unit=cups&to_unit=liters",
        ] {
            let response = client
                .post("/convert")
                .header(ContentType::Form)
                .body(body)
                .dispatch();

            assert_that!(response.status()).is_equal_to(Status::Ok);
            let body = response.into_string().expect("html body");
            assert_that!(body).contains(r#"<option value="volume" selected>🧪 Volume</option>"#);
            assert_that!(body).contains(r#"<option value="cups" selected>cups</option>"#);
            assert_that!(body).contains(r#"<div class="success">✅ 1.0 cups = 0.24 liters</div>"#);
        }
    }

    #[test]
    fn form_without_units_is_rejected() {
        let client = client();

        let response = client
            .post("/convert")
            .header(ContentType::Form)
            .body("value=1")
            .dispatch();

        assert_that!(response.status()).is_equal_to(Status::UnprocessableEntity);
    }

    #[test]
    fn api_conversion_should_work() {
        let client = client();

        let response = client
            .post("/api/convert")
            .json(&api_request(ApiValue::Number(1.0), "meters", "feet"))
            .dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        assert_that!(response.into_json::<ConversionResult>())
            .is_some()
            .is_equal_to(ConversionResult::Success {
                message: "1.0 meters = 3.28 feet".to_string(),
            });
    }

    #[test]
    fn api_reports_categorised_errors() {
        let client = client();

        let response = client
            .post("/api/convert")
            .json(&api_request(ApiValue::Number(1.0), "meters", "kilograms"))
            .dispatch();
        assert_that!(response.into_json::<ConversionResult>())
            .is_some()
            .is_equal_to(ConversionResult::Error {
                kind: ErrorKind::IncompatibleDimensions,
                message: "❌ Invalid conversion".to_string(),
            });

        let response = client
            .post("/api/convert")
            .json(&api_request(ApiValue::Text("ten".to_string()), "meters", "feet"))
            .dispatch();
        assert_that!(response.into_json::<ConversionResult>())
            .is_some()
            .is_equal_to(ConversionResult::Error {
                kind: ErrorKind::InvalidNumeric,
                message: "❌ Please enter a valid numeric value.".to_string(),
            });
    }

    #[test]
    fn api_accepts_textual_numbers() {
        let client = client();

        let response = client
            .post("/api/convert")
            .json(&api_request(ApiValue::Text("2".to_string()), "gallons", "liters"))
            .dispatch();

        assert_that!(response.into_json::<ConversionResult>())
            .is_some()
            .is_equal_to(ConversionResult::Success {
                message: "2.0 gallons = 7.57 liters".to_string(),
            });
    }

    #[test]
    fn api_result_is_tagged_json() {
        let client = client();

        let response = client
            .post("/api/convert")
            .json(&api_request(ApiValue::Number(1.0), "meters", "cubits"))
            .dispatch();

        let body: Value = response.into_json().expect("json body");
        assert_that!(body["status"].as_str()).is_equal_to(Some("error"));
        assert_that!(body["kind"].as_str()).is_equal_to(Some("unknown"));
        assert_that!(body["message"].as_str())
            .is_equal_to(Some("❌ Error: 'cubits' is not defined in the unit registry"));
    }

    #[test]
    fn units_lists_catalog() {
        let client = client();

        let response = client.get("/api/units").dispatch();

        assert_that!(response.status()).is_equal_to(Status::Ok);
        let body: Value = response.into_json().expect("json body");
        let categories = body.as_array().expect("catalog array");
        assert_that!(categories.len()).is_equal_to(4);
        assert_that!(categories[2]["category"].as_str()).is_equal_to(Some("temperature"));
        assert_that!(categories[3]["units"][3].as_str()).is_equal_to(Some("cups"));
    }
}
