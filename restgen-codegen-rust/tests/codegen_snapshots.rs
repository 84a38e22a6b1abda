//! Snapshot tests for Rust code generation.
//!
//! These tests run the full pipeline from an API document to the rendered
//! bindings. Run `cargo insta review` to update inline snapshots when making
//! intentional changes.

use restgen_codegen::{GenerateOptions, Pipeline};
use restgen_codegen_rust::{Generator, LanguageCodegen, RUST_NAMING};
use restgen_schema::Document;

/// Generate bindings from a document with default options.
fn generate(json: &str) -> String {
    generate_with(json, GenerateOptions::default())
}

fn generate_with(json: &str, options: GenerateOptions) -> String {
    let document: Document = json.parse().expect("Failed to parse document");
    let mut ctx = Pipeline::new(RUST_NAMING)
        .run(document, options)
        .expect("Pipeline failed");
    Generator::from_context(&mut ctx)
        .expect("IR missing")
        .render()
        .expect("Render failed")
}

/// Everything from the first line starting with `marker` onwards.
fn section_from<'a>(code: &'a str, marker: &str) -> &'a str {
    let start = code
        .find(&format!("\n{}", marker))
        .map(|i| i + 1)
        .unwrap_or_else(|| panic!("'{}' not found in:\n{}", marker, code));
    &code[start..]
}

const ACCOUNT_DOC: &str = r##"{
    "definitions": {
        "Account": {
            "description": "A user account.",
            "properties": {
                "wins": {"type": "integer"},
                "display_name": {"type": "string"}
            }
        }
    },
    "paths": {
        "/v2/account/{id}": {
            "get": {
                "summary": "Fetch an account.",
                "operationId": "GetAccount",
                "parameters": [
                    {"name": "id", "in": "path", "required": true, "type": "string"}
                ],
                "responses": {"200": {"schema": {"$ref": "#/definitions/Account"}}}
            }
        }
    }
}"##;

#[test]
fn test_account_model_and_builder() {
    let code = generate(ACCOUNT_DOC);
    insta::assert_snapshot!(section_from(&code, "/// A user account."), @r#"
    /// A user account.
    #[derive(Debug, DeJson, Default)]
    #[nserde(default)]
    pub struct Account {
        pub display_name: String,
        pub wins: i32,
    }

    impl ToRestString for Account {
        fn to_rest_string(&self) -> String {
            let mut output = String::from("{");
            output.push_str("\"display_name\": ");
            output.push_str(&self.display_name.to_rest_string());
            output.push(',');
            output.push_str("\"wins\": ");
            output.push_str(&self.wins.to_rest_string());
            output.push('}');
            output
        }
    }

    /// Fetch an account.
    pub fn get_account(bearer_token: &str, id: &str) -> RestRequest<Account> {
        let mut urlpath = "/v2/account/{id}".to_string();
        urlpath = urlpath.replace("{id}", id);
        let query_params = String::new();
        let authentication = Authentication::Bearer {
            token: bearer_token.to_string(),
        };

        RestRequest {
            authentication,
            urlpath,
            query_params,
            body: String::new(),
            method: Method::Get,
            _marker: std::marker::PhantomData,
        }
    }
    "#);
}

#[test]
fn test_file_layout() {
    let code = generate(ACCOUNT_DOC);
    assert!(code.starts_with(
        "/* Code generated by restgen. DO NOT EDIT. */\n\nuse nanoserde::DeJson;\n\n"
    ));

    let prelude = code.find("pub enum Authentication").unwrap();
    let model = code.find("pub struct Account").unwrap();
    let builder = code.find("pub fn get_account").unwrap();
    assert!(prelude < model && model < builder);
    assert!(!code.contains("HashMap"));
}

#[test]
fn test_prelude() {
    let code = generate(ACCOUNT_DOC);
    let prelude = &code[..code.find("/// A user account.").unwrap()];
    insta::assert_snapshot!(section_from(prelude, "/// Credentials"), @r#"
    /// Credentials attached to a request.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Authentication {
        Basic {
            username: String,
            password: String,
        },
        Bearer {
            token: String,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Method {
        Delete,
        Get,
        Post,
        Put,
    }

    /// An unsent request; `Response` is the type its reply decodes to.
    #[derive(Debug)]
    pub struct RestRequest<Response> {
        pub authentication: Authentication,
        pub urlpath: String,
        pub query_params: String,
        pub body: String,
        pub method: Method,
        _marker: std::marker::PhantomData<Response>,
    }

    /// JSON text of a value, used to build request bodies.
    pub trait ToRestString {
        fn to_rest_string(&self) -> String;
    }

    impl ToRestString for String {
        fn to_rest_string(&self) -> String {
            format!("\"{}\"", self.replace('\\', "\\\\").replace('"', "\\\""))
        }
    }

    impl ToRestString for i32 {
        fn to_rest_string(&self) -> String {
            self.to_string()
        }
    }

    impl ToRestString for f32 {
        fn to_rest_string(&self) -> String {
            self.to_string()
        }
    }

    impl ToRestString for bool {
        fn to_rest_string(&self) -> String {
            self.to_string()
        }
    }

    impl<T: ToRestString> ToRestString for Vec<T> {
        fn to_rest_string(&self) -> String {
            self.as_slice().to_rest_string()
        }
    }

    impl<T: ToRestString> ToRestString for [T] {
        fn to_rest_string(&self) -> String {
            let items: Vec<String> = self.iter().map(ToRestString::to_rest_string).collect();
            format!("[{}]", items.join(", "))
        }
    }
    "#);
}

#[test]
fn test_optional_query_parameters() {
    let code = generate(
        r#"{"paths": {"/v2/friend": {"get": {
            "summary": "List all friends for the current user.",
            "operationId": "ListFriends",
            "parameters": [
                {"name": "limit", "in": "query", "required": false, "type": "integer"},
                {"name": "cursor", "in": "query", "required": false, "type": "string"}
            ]
        }}}}"#,
    );
    insta::assert_snapshot!(section_from(&code, "/// List all friends"), @r#"
    /// List all friends for the current user.
    pub fn list_friends(bearer_token: &str, limit: Option<i32>, cursor: Option<&str>) -> RestRequest<()> {
        let urlpath = "/v2/friend".to_string();
        let mut query_params = String::new();
        if let Some(limit) = limit {
            query_params.push_str(&format!("limit={}&", limit));
        }
        if let Some(cursor) = cursor {
            query_params.push_str(&format!("cursor={}&", cursor));
        }
        let authentication = Authentication::Bearer {
            token: bearer_token.to_string(),
        };

        RestRequest {
            authentication,
            urlpath,
            query_params,
            body: String::new(),
            method: Method::Get,
            _marker: std::marker::PhantomData,
        }
    }
    "#);
}

#[test]
fn test_basic_auth_with_body_and_maps() {
    let options = GenerateOptions {
        operation_prefix: Some("Nakama_".to_string()),
        ..GenerateOptions::default()
    };
    let code = generate_with(
        r##"{
            "definitions": {
                "apiAccountEmail": {
                    "properties": {
                        "email": {"type": "string"},
                        "password": {"type": "string"},
                        "vars": {"type": "object", "additionalProperties": {"type": "string"}}
                    }
                },
                "apiSession": {
                    "properties": {"token": {"type": "string"}, "created": {"type": "boolean"}}
                }
            },
            "paths": {"/v2/account/authenticate/email": {"post": {
                "summary": "Authenticate a user with an email+password against the server.",
                "operationId": "Nakama_AuthenticateEmail",
                "parameters": [
                    {"name": "body", "in": "body", "required": true,
                     "schema": {"$ref": "#/definitions/apiAccountEmail"}},
                    {"name": "create", "in": "query", "required": false, "type": "boolean"},
                    {"name": "username", "in": "query", "required": false, "type": "string"}
                ],
                "responses": {"200": {"schema": {"$ref": "#/definitions/apiSession"}}},
                "security": [{"BasicAuth": []}]
            }}}
        }"##,
        options,
    );

    assert!(code.contains("\nuse std::collections::HashMap;\n\nuse nanoserde::DeJson;\n"));
    assert!(code.contains("impl<T: ToRestString> ToRestString for HashMap<String, T> {"));
    assert!(code.contains("    pub vars: HashMap<String, String>,\n"));
    assert!(code.contains(
        "pub fn authenticate_email(basic_auth_username: &str, basic_auth_password: &str, body: &ApiAccountEmail, create: Option<bool>, username: Option<&str>) -> RestRequest<ApiSession> {"
    ));
    assert!(code.contains(
        "    let authentication = Authentication::Basic {\n        username: basic_auth_username.to_string(),\n        password: basic_auth_password.to_string(),\n    };\n"
    ));
    assert!(code.contains("        body: body.to_rest_string(),\n        method: Method::Post,\n"));
}

#[test]
fn test_generation_is_deterministic() {
    let reordered = r##"{
        "paths": {
            "/v2/account/{id}": {
                "get": {
                    "operationId": "GetAccount",
                    "summary": "Fetch an account.",
                    "responses": {"200": {"schema": {"$ref": "#/definitions/Account"}}},
                    "parameters": [
                        {"type": "string", "required": true, "in": "path", "name": "id"}
                    ]
                }
            }
        },
        "definitions": {
            "Account": {
                "properties": {
                    "display_name": {"type": "string"},
                    "wins": {"type": "integer"}
                },
                "description": "A user account."
            }
        }
    }"##;

    let first = generate(ACCOUNT_DOC);
    assert_eq!(first, generate(ACCOUNT_DOC));
    assert_eq!(first, generate(reordered));
}

#[test]
fn test_endpoints_grouped_by_path_then_method() {
    let code = generate(
        r#"{"paths": {
            "/v2/user": {"post": {"operationId": "AddUser"}, "get": {"operationId": "GetUsers"}},
            "/v2/account": {"put": {"operationId": "UpdateAccount"}, "delete": {"operationId": "DeleteAccount"}}
        }}"#,
    );
    let order: Vec<_> = ["delete_account", "update_account", "get_users", "add_user"]
        .iter()
        .map(|name| code.find(&format!("pub fn {}(", name)).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{:?}", order);
}

#[test]
fn test_custom_banner() {
    let options = GenerateOptions {
        banner: "// @generated".to_string(),
        ..GenerateOptions::default()
    };
    let code = generate_with(
        r#"{"paths": {"/healthcheck": {"get": {"operationId": "Healthcheck"}}}}"#,
        options,
    );
    assert!(code.starts_with("// @generated\n\n/// Credentials attached to a request.\n"));
}

#[test]
fn test_lint_errors_stop_generation() {
    let document: Document = r#"{"definitions": {
        "apiUser": {}, "ApiUser": {}
    }}"#
    .parse()
    .unwrap();
    let err = Pipeline::new(RUST_NAMING)
        .run(document, GenerateOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn test_unsupported_type_stops_generation() {
    let document: Document = r#"{"definitions": {"apiUser": {"properties": {
        "nested": {"type": "object", "additionalProperties": {
            "type": "object", "additionalProperties": {"type": "string"}
        }}
    }}}}"#
    .parse()
    .unwrap();
    let err = Pipeline::new(RUST_NAMING)
        .run(document, GenerateOptions::default())
        .unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        "in property 'nested' of definition 'apiUser': unsupported map element: map"
    );
}

#[test]
fn test_keyword_names_get_trailing_underscore() {
    let code = generate(
        r#"{
            "definitions": {"apiMatch": {"properties": {"type": {"type": "integer"}}}},
            "paths": {"/v2/match": {"get": {
                "summary": "List matches.",
                "operationId": "ListMatches",
                "parameters": [{"name": "type", "in": "query", "required": true, "type": "string"}]
            }}}
        }"#,
    );

    assert!(code.contains("    #[nserde(rename = \"type\")]\n    pub type_: i32,\n"));
    assert!(code.contains("output.push_str(&self.type_.to_rest_string());"));
    assert!(code.contains("pub fn list_matches(bearer_token: &str, type_: &str)"));
    assert!(code.contains("query_params.push_str(&format!(\"type={}&\", type_));"));
    assert!(!code.contains("r#"));
}
