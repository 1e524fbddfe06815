use crate::http::connection::Handler;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::json::{JsonValue, parse_lenient, stringify};
use crate::search::rows::RowSource;

const COURSE_SEARCH_PATH: &str = "/api/course_search";

/// Routes requests to the course-search endpoint.
///
/// `GET`/`POST /api/course_search` answers with a JSON array of course
/// objects; everything else is a 404. Search parameters come from the
/// `department` query parameter or from a JSON object body.
pub struct Router {
    source: Box<dyn RowSource>,
}

impl Router {
    pub fn new(source: impl RowSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    fn course_search(&self, request: &Request) -> Response {
        let department = department_filter(request).unwrap_or_default();

        let mut results = JsonValue::array();
        let outcome = self.source.for_each_row(&department, &mut |columns| {
            let mut row = JsonValue::object();
            for column in columns {
                let value = match column.value {
                    Some(text) => JsonValue::from(text),
                    None => JsonValue::Null,
                };
                // row is always an object here
                let _ = row.set(column.name, value);
            }
            let _ = results.push(row);
        });

        match outcome {
            Ok(()) => {
                let body = stringify(&results, false).into_bytes();
                ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", "application/json")
                    .body(body)
                    .build()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Course search failed");
                Response::not_found()
            }
        }
    }
}

impl Handler for Router {
    fn handle(&self, request: &Request) -> Response {
        match (request.method, request.path()) {
            (Method::GET | Method::POST, COURSE_SEARCH_PATH) => self.course_search(request),
            _ => {
                tracing::debug!(path = %request.target, "No route matched");
                Response::not_found()
            }
        }
    }
}

/// Pulls the department filter out of the request.
///
/// The query string wins; otherwise a JSON object body with a `department`
/// key is consulted. An empty or unreadable body degrades to no filter, it
/// never fails the request.
fn department_filter(request: &Request) -> Option<String> {
    if let Some(query) = request.query() {
        let from_query = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "department")
            .map(|(_, value)| value.into_owned());
        if from_query.is_some() {
            return from_query;
        }
    }

    let body_text = std::str::from_utf8(&request.body).ok()?;
    parse_lenient(body_text)
        .get("department")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
