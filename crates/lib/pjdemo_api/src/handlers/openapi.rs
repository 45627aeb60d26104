//! OpenAPI document for the POST endpoints.

use axum::Json;
use serde_json::{Map, Value, json};

use crate::routes;

/// Response body shape of an endpoint.
#[derive(Clone, Copy)]
enum Reply {
    Json,
    Text,
}

/// One documented endpoint.
struct Endpoint {
    path: &'static str,
    schema: Option<&'static str>,
    description: &'static str,
    /// `(name, description, required)`
    fields: &'static [(&'static str, &'static str, bool)],
    reply: Reply,
    /// Calls the text generator, so may answer 502.
    generates: bool,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        path: routes::POST_GET_USER_ID,
        schema: Some("UserNickname"),
        description: "获取给定昵称的用户ID。返回与该昵称关联的用户ID，如果昵称不存在则返回空对象。",
        fields: &[("nickname", "The user nickname", true)],
        reply: Reply::Json,
        generates: false,
    },
    Endpoint {
        path: routes::POST_GET_USER_INFO,
        schema: Some("UserID"),
        description: "获取给定用户ID的用户信息。返回与该ID关联的用户信息，如果ID不存在则返回空对象。",
        fields: &[("user_id", "The user ID", true)],
        reply: Reply::Json,
        generates: false,
    },
    Endpoint {
        path: routes::POST_GENERATE_EDUCATION_DESCRIPTION,
        schema: Some("EducationInfo"),
        description: "生成院校与专业的介绍。使用大语言模型生成给定院校和专业的中文描述。",
        fields: &[
            ("college", "The college name", true),
            ("major", "The major name", true),
        ],
        reply: Reply::Text,
        generates: true,
    },
    Endpoint {
        path: routes::POST_SUMMARIZE_RECENT_LIFE_STATUS,
        schema: Some("PostHistory"),
        description: "根据用户的帖子历史总结用户的近期生活状态。使用大语言模型生成中文描述。",
        fields: &[("post_history", "The user post history", true)],
        reply: Reply::Text,
        generates: true,
    },
    Endpoint {
        path: routes::POST_SEND_EMAIL,
        schema: Some("EmailContent"),
        description: "发送包含用户教育描述和近期生活状态的邮件。模拟发送邮件并返回确认消息。",
        fields: &[
            ("email", "The email address", true),
            ("education_description", "The education description", true),
            ("recent_life_status", "The recent life status", true),
        ],
        reply: Reply::Text,
        generates: false,
    },
    Endpoint {
        path: routes::POST_GET_WEATHER,
        schema: Some("WeatherRequest"),
        description: "获取给定地点和时间的当前天气信息。返回模拟的天气数据。",
        fields: &[
            ("location", "The location", true),
            ("time", "The time (default: now)", false),
        ],
        reply: Reply::Json,
        generates: false,
    },
    Endpoint {
        path: routes::POST_CALCULATE,
        schema: Some("CalculationRequest"),
        description: "计算给定数学公式的结果。模拟计算并返回固定结果。",
        fields: &[("formula", "The formula to calculate", true)],
        reply: Reply::Json,
        generates: false,
    },
    Endpoint {
        path: routes::POST_PJ1_REPORT,
        schema: Some("ReportRequest"),
        description: "生成课题一算法模型在给定数据集的推理结果的报告。",
        fields: &[(
            "message",
            "The report message, the prediction result of the model",
            false,
        )],
        reply: Reply::Json,
        generates: true,
    },
    Endpoint {
        path: routes::POST_EXIT_SCRIPT,
        schema: None,
        description: "结束脚本并终止交互。模拟退出操作。",
        fields: &[],
        reply: Reply::Text,
        generates: false,
    },
];

fn schema_object(fields: &[(&str, &str, bool)]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, description, is_required) in fields {
        properties.insert(
            (*name).to_string(),
            json!({"type": "string", "description": description}),
        );
        if *is_required {
            required.push(Value::from(*name));
        }
    }
    let mut schema = json!({"type": "object", "properties": properties});
    if !required.is_empty() {
        schema["required"] = Value::Array(required);
    }
    schema
}

/// Build the OpenAPI 3.0 document.
pub fn document() -> Value {
    let mut paths = Map::new();
    let mut schemas = Map::new();

    for ep in ENDPOINTS {
        let content_type = match ep.reply {
            Reply::Json => "application/json",
            Reply::Text => "text/plain",
        };
        let mut op = json!({
            "description": ep.description,
            "responses": {
                "200": {"description": "Success", "content": {content_type: {}}},
                "400": {"description": "Missing or invalid field"}
            }
        });
        if let Some(name) = ep.schema {
            schemas.insert(name.to_string(), schema_object(ep.fields));
            op["requestBody"] = json!({
                "required": true,
                "content": {"application/json": {
                    "schema": {"$ref": format!("#/components/schemas/{name}")}
                }}
            });
        }
        if ep.generates {
            op["responses"]["502"] = json!({"description": "Text generation failed"});
        }
        paths.insert(ep.path.to_string(), json!({"post": op}));
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "pjdemo API",
            "version": "1.0",
            "description": "A simple demonstration API with OpenAPI documentation"
        },
        "paths": paths,
        "components": {"schemas": schemas}
    })
}

/// `GET /openapi.json` — the OpenAPI document.
pub async fn openapi_handler() -> Json<Value> {
    Json(document())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_post_route() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 9);
        for ep in ENDPOINTS {
            assert!(paths[ep.path]["post"].is_object(), "{} missing", ep.path);
        }
    }

    #[test]
    fn weather_time_is_optional() {
        let doc = document();
        let schema = &doc["components"]["schemas"]["WeatherRequest"];
        assert_eq!(schema["required"], json!(["location"]));
        assert!(schema["properties"]["time"].is_object());
    }

    #[test]
    fn report_message_is_optional() {
        let doc = document();
        let schema = &doc["components"]["schemas"]["ReportRequest"];
        assert!(schema.get("required").is_none());
        assert!(doc["paths"]["/pj1_report"]["post"]["responses"]["502"].is_object());
    }

    #[test]
    fn only_generation_routes_document_502() {
        let doc = document();
        let with_502: Vec<&str> = ENDPOINTS
            .iter()
            .map(|ep| ep.path)
            .filter(|path| doc["paths"][*path]["post"]["responses"]["502"].is_object())
            .collect();
        assert_eq!(
            with_502,
            [
                routes::POST_GENERATE_EDUCATION_DESCRIPTION,
                routes::POST_SUMMARIZE_RECENT_LIFE_STATUS,
                routes::POST_PJ1_REPORT,
            ]
        );
    }

    #[test]
    fn exit_script_has_no_body() {
        let doc = document();
        assert!(doc["paths"]["/exit_script"]["post"].get("requestBody").is_none());
    }
}
