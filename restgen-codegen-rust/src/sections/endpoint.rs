//! Request builder function for one endpoint.

use restgen_codegen::{CodeFragment, TypeMapper};
use restgen_ir::{AuthScheme, Endpoint, EndpointParam, ParamLocation, ValueType};

use super::{format_literal, string_literal};
use crate::{Fn, Param, RustTypeMapper};

/// Builds the `RestRequest` constructor of an endpoint.
///
/// Arguments are the credentials of the endpoint's auth scheme followed by
/// its parameters in declaration order. Query values are not URL-encoded.
pub struct EndpointFn<'a> {
    endpoint: &'a Endpoint,
    mapper: RustTypeMapper,
}

impl<'a> EndpointFn<'a> {
    pub fn new(endpoint: &'a Endpoint) -> Self {
        Self {
            endpoint,
            mapper: RustTypeMapper,
        }
    }

    pub fn build(&self) -> Fn {
        let response = self
            .mapper
            .map_response_type(self.endpoint.response.as_deref());

        Fn::new(&self.endpoint.fn_name)
            .doc_opt(self.endpoint.summary.as_deref())
            .params(self.auth_params())
            .params(self.endpoint.params.iter().map(|p| {
                Param::new(&p.name, self.mapper.map_param_type(p))
            }))
            .returns(format!("RestRequest<{}>", response))
            .body_fragments(self.urlpath())
            .body_fragments(self.query_params())
            .body_fragments(self.authentication())
            .body_fragments(self.request())
    }

    fn auth_params(&self) -> Vec<Param> {
        match self.endpoint.auth {
            AuthScheme::Basic => vec![
                Param::new("basic_auth_username", "&str"),
                Param::new("basic_auth_password", "&str"),
            ],
            AuthScheme::Bearer => vec![Param::new("bearer_token", "&str")],
        }
    }

    fn urlpath(&self) -> Vec<CodeFragment> {
        let path_params: Vec<_> = self.endpoint.params_in(ParamLocation::Path).collect();
        let binding = if path_params.is_empty() { "let" } else { "let mut" };

        let mut fragments = vec![CodeFragment::line(format!(
            "{} urlpath = {}.to_string();",
            binding,
            string_literal(&self.endpoint.path)
        ))];

        for param in path_params {
            let value = if param.ty.is_string() {
                param.name.clone()
            } else {
                format!("&{}.to_string()", param.name)
            };
            let replace = CodeFragment::line(format!(
                "urlpath = urlpath.replace({}, {});",
                string_literal(&param.placeholder()),
                value
            ));
            fragments.push(when_present(param, vec![replace]));
        }

        fragments
    }

    fn query_params(&self) -> Vec<CodeFragment> {
        let query: Vec<_> = self.endpoint.params_in(ParamLocation::Query).collect();
        if query.is_empty() {
            return vec![CodeFragment::line("let query_params = String::new();")];
        }

        let mut fragments = vec![CodeFragment::line("let mut query_params = String::new();")];

        for param in query {
            let pair = format_literal(&param.wire_name, "={}&");
            let append = match &param.ty {
                ValueType::Array(_) => CodeFragment::block(
                    format!("for item in {} {{", param.name),
                    vec![CodeFragment::line(format!(
                        "query_params.push_str(&format!({}, item));",
                        pair
                    ))],
                ),
                _ => CodeFragment::line(format!(
                    "query_params.push_str(&format!({}, {}));",
                    pair, param.name
                )),
            };
            fragments.push(when_present(param, vec![append]));
        }

        fragments
    }

    fn authentication(&self) -> Vec<CodeFragment> {
        let credentials = match self.endpoint.auth {
            AuthScheme::Basic => CodeFragment::block_with_close(
                "let authentication = Authentication::Basic {",
                vec![
                    CodeFragment::line("username: basic_auth_username.to_string(),"),
                    CodeFragment::line("password: basic_auth_password.to_string(),"),
                ],
                "};",
            ),
            AuthScheme::Bearer => CodeFragment::block_with_close(
                "let authentication = Authentication::Bearer {",
                vec![CodeFragment::line("token: bearer_token.to_string(),")],
                "};",
            ),
        };
        vec![credentials]
    }

    fn body(&self) -> String {
        let Some(body) = self.endpoint.body() else {
            return "String::new()".to_string();
        };

        let serialize = if body.ty.is_string() {
            "to_string"
        } else {
            "to_rest_string"
        };

        if body.required {
            format!("{}.{}()", body.name, serialize)
        } else {
            format!(
                "{name}.map(|{name}| {name}.{serialize}()).unwrap_or_default()",
                name = body.name,
                serialize = serialize
            )
        }
    }

    fn request(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::Blank,
            CodeFragment::block(
                "RestRequest {",
                vec![
                    CodeFragment::line("authentication,"),
                    CodeFragment::line("urlpath,"),
                    CodeFragment::line("query_params,"),
                    CodeFragment::line(format!("body: {},", self.body())),
                    CodeFragment::line(format!(
                        "method: Method::{},",
                        self.endpoint.method.variant()
                    )),
                    CodeFragment::line("_marker: std::marker::PhantomData,"),
                ],
            ),
        ]
    }
}

/// Guard statements on an optional argument being present.
fn when_present(param: &EndpointParam, body: Vec<CodeFragment>) -> CodeFragment {
    if param.required {
        CodeFragment::Sequence(body)
    } else {
        CodeFragment::block(
            format!("if let Some({name}) = {name} {{", name = param.name),
            body,
        )
    }
}

#[cfg(test)]
mod tests {
    use restgen_ir::{HttpMethod, Primitive};

    use super::*;

    fn param(name: &str, location: ParamLocation, required: bool, ty: ValueType) -> EndpointParam {
        EndpointParam {
            name: name.into(),
            wire_name: name.into(),
            location,
            required,
            ty,
        }
    }

    fn endpoint(path: &str, params: Vec<EndpointParam>) -> Endpoint {
        Endpoint {
            fn_name: "get_account".into(),
            operation_id: "GetAccount".into(),
            summary: None,
            path: path.into(),
            method: HttpMethod::Get,
            auth: AuthScheme::Bearer,
            params,
            response: Some("ApiAccount".into()),
        }
    }

    fn string() -> ValueType {
        ValueType::Primitive(Primitive::String)
    }

    #[test]
    fn test_path_parameter() {
        let endpoint = endpoint(
            "/v2/account/{id}",
            vec![param("id", ParamLocation::Path, true, string())],
        );
        let code = EndpointFn::new(&endpoint).build().build();
        assert_eq!(
            code,
            r#"pub fn get_account(bearer_token: &str, id: &str) -> RestRequest<ApiAccount> {
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
"#
        );
    }

    #[test]
    fn test_optional_query_parameters() {
        let endpoint = endpoint(
            "/v2/friend",
            vec![
                param(
                    "limit",
                    ParamLocation::Query,
                    false,
                    ValueType::Primitive(Primitive::Integer),
                ),
                param("cursor", ParamLocation::Query, false, string()),
            ],
        );
        let code = EndpointFn::new(&endpoint).build().build();
        assert!(code.contains(
            "bearer_token: &str, limit: Option<i32>, cursor: Option<&str>) -> RestRequest<ApiAccount> {"
        ));
        assert!(code.contains("    let urlpath = \"/v2/friend\".to_string();\n"));
        assert!(code.contains(
            r#"    let mut query_params = String::new();
    if let Some(limit) = limit {
        query_params.push_str(&format!("limit={}&", limit));
    }
    if let Some(cursor) = cursor {
        query_params.push_str(&format!("cursor={}&", cursor));
    }
"#
        ));
    }

    #[test]
    fn test_array_query_parameter() {
        let mut ids = param(
            "ids",
            ParamLocation::Query,
            true,
            ValueType::Array(Box::new(string())),
        );
        ids.wire_name = "ids".into();
        let endpoint = endpoint("/v2/user", vec![ids]);
        let code = EndpointFn::new(&endpoint).build().build();
        assert!(code.contains("ids: &[String]"));
        assert!(code.contains(
            "    for item in ids {\n        query_params.push_str(&format!(\"ids={}&\", item));\n    }\n"
        ));
    }

    #[test]
    fn test_query_uses_wire_name() {
        let mut page_size = param(
            "page_size",
            ParamLocation::Query,
            true,
            ValueType::Primitive(Primitive::Integer),
        );
        page_size.wire_name = "pageSize".into();
        let endpoint = endpoint("/v2/x", vec![page_size]);
        let code = EndpointFn::new(&endpoint).build().build();
        assert!(code.contains(r#"query_params.push_str(&format!("pageSize={}&", page_size));"#));
    }

    #[test]
    fn test_basic_auth_and_model_body() {
        let mut endpoint = endpoint(
            "/v2/account/authenticate/email",
            vec![param(
                "body",
                ParamLocation::Body,
                true,
                ValueType::Model("ApiAccountEmail".into()),
            )],
        );
        endpoint.fn_name = "authenticate_email".into();
        endpoint.method = HttpMethod::Post;
        endpoint.auth = AuthScheme::Basic;
        endpoint.response = Some("ApiSession".into());
        endpoint.summary = Some("Authenticate a user with an email and password.".into());

        let code = EndpointFn::new(&endpoint).build().build();
        assert!(code.starts_with(
            "/// Authenticate a user with an email and password.\npub fn authenticate_email(basic_auth_username: &str, basic_auth_password: &str, body: &ApiAccountEmail) -> RestRequest<ApiSession> {\n"
        ));
        assert!(code.contains(
            "    let authentication = Authentication::Basic {\n        username: basic_auth_username.to_string(),\n        password: basic_auth_password.to_string(),\n    };\n"
        ));
        assert!(code.contains("        body: body.to_rest_string(),\n"));
        assert!(code.contains("        method: Method::Post,\n"));
    }

    #[test]
    fn test_optional_path_and_string_body() {
        let mut endpoint = endpoint(
            "/v2/rpc/{id}",
            vec![
                param(
                    "id",
                    ParamLocation::Path,
                    false,
                    ValueType::Primitive(Primitive::Integer),
                ),
                param("payload", ParamLocation::Body, false, string()),
            ],
        );
        endpoint.response = None;

        let code = EndpointFn::new(&endpoint).build().build();
        assert!(code.contains("id: Option<i32>, payload: Option<&str>) -> RestRequest<()> {"));
        assert!(code.contains(
            "    if let Some(id) = id {\n        urlpath = urlpath.replace(\"{id}\", &id.to_string());\n    }\n"
        ));
        assert!(code.contains(
            "        body: payload.map(|payload| payload.to_string()).unwrap_or_default(),\n"
        ));
    }
}
