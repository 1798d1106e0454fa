//! HTTP response → action result translation.

use crate::framework::HttpResponse;
use crate::model::{ActionParams, ActionRequest, ActionResult};
use serde_json::{Map, Value};

/// Reshapes a single response for the action that produced it.
///
/// Lists take `data` and `total` from the body as-is. `CREATE` keeps the
/// submitted fields and only takes the server-assigned `id`. Everything else
/// returns the body verbatim.
pub fn convert_response(response: HttpResponse, request: &ActionRequest) -> ActionResult {
    let json = response.json;
    match &request.params {
        ActionParams::GetList(_) | ActionParams::GetManyReference(_) => ActionResult::List {
            data: json.get("data").cloned().unwrap_or(Value::Null),
            total: json.get("total").cloned().unwrap_or(Value::Null),
        },
        ActionParams::Create(params) => {
            let mut data = match &params.data {
                Value::Object(fields) => fields.clone(),
                _ => Map::new(),
            };
            data.insert(
                "id".to_string(),
                json.get("id").cloned().unwrap_or(Value::Null),
            );
            ActionResult::One {
                data: Value::Object(data),
            }
        }
        _ => ActionResult::One { data: json },
    }
}

/// Joins fan-out responses, keeping the order they were issued in.
pub fn convert_fan_out_response(responses: Vec<HttpResponse>) -> ActionResult {
    ActionResult::Many {
        data: responses.into_iter().map(|response| response.json).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GetListParams, Pagination};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_list_takes_data_and_total_from_body() {
        let request = ActionRequest::get_list(
            "posts",
            GetListParams {
                pagination: Pagination::new(1, 10),
                sort: None,
                filter: Value::Null,
            },
        );
        let response = HttpResponse::ok(json!({
            "data": [{ "id": 1 }],
            "count": 1,
            "total": 31,
            "page": 1,
            "pageCount": 4
        }));

        let result = convert_response(response, &request);
        assert_eq!(
            result,
            ActionResult::List {
                data: json!([{ "id": 1 }]),
                total: json!(31),
            }
        );
    }

    #[test]
    fn test_create_merges_server_id_into_submitted_data() {
        let request = ActionRequest::create("posts", json!({ "name": "x" }));
        let result = convert_response(HttpResponse::ok(json!({ "id": 42 })), &request);
        assert_eq!(result.to_json(), json!({ "data": { "name": "x", "id": 42 } }));
    }

    #[test]
    fn test_create_server_id_overrides_client_id() {
        let request = ActionRequest::create("posts", json!({ "id": "tmp", "name": "x" }));
        let result = convert_response(
            HttpResponse::ok(json!({ "id": 7, "name": "ignored" })),
            &request,
        );
        assert_eq!(result.data(), Some(&json!({ "id": 7, "name": "x" })));
    }

    #[test]
    fn test_single_record_kinds_return_body_verbatim() {
        let body = json!({ "id": 3, "title": "t" });
        for request in [
            ActionRequest::get_one("posts", 3),
            ActionRequest::update("posts", 3, json!({ "title": "t" })),
            ActionRequest::delete("posts", 3),
        ] {
            let result = convert_response(HttpResponse::ok(body.clone()), &request);
            assert_eq!(result, ActionResult::One { data: body.clone() });
        }

        let many = ActionRequest::get_many("posts", [1, 2]);
        let result = convert_response(HttpResponse::ok(json!([{ "id": 1 }, { "id": 2 }])), &many);
        assert_eq!(result.data(), Some(&json!([{ "id": 1 }, { "id": 2 }])));
    }

    #[test]
    fn test_fan_out_keeps_issue_order() {
        let result = convert_fan_out_response(vec![
            HttpResponse::ok(json!({ "id": 1 })),
            HttpResponse::ok(json!({ "id": 2 })),
        ]);
        assert_eq!(result.items(), &[json!({ "id": 1 }), json!({ "id": 2 })]);
    }
}
