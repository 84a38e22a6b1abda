//! Data structure and serializer for one model.

use restgen_codegen::{Renderable, TypeMapper};
use restgen_ir::{Model, ModelField};

use super::{TO_REST_STRING, string_literal};
use crate::{Field, Fn, Impl, Param, RustTypeMapper, Struct};

/// The struct declaration and `ToRestString` impl of a model.
///
/// Fields default when absent from decoded input; the serializer writes
/// fields in model order as `"wire": value` pairs joined by `,`.
pub struct ModelItems<'a> {
    model: &'a Model,
    mapper: RustTypeMapper,
}

impl<'a> ModelItems<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            mapper: RustTypeMapper,
        }
    }

    pub fn declaration(&self) -> Struct {
        Struct::new(&self.model.name)
            .doc_opt(self.model.description.as_deref())
            .derive("Debug")
            .derive("DeJson")
            .derive("Default")
            .attr("nserde(default)")
            .fields(self.model.fields.iter().map(|f| self.field(f)))
    }

    fn field(&self, field: &ModelField) -> Field {
        let declared = Field::new(&field.name, self.mapper.map_value_type(&field.ty))
            .doc_opt(field.description.as_deref());
        if field.is_renamed() {
            declared.attr(format!("nserde(rename = {})", string_literal(&field.wire_name)))
        } else {
            declared
        }
    }

    pub fn serializer(&self) -> Impl {
        let mut body = vec!["let mut output = String::from(\"{\");".to_string()];

        for (i, field) in self.model.fields.iter().enumerate() {
            if i > 0 {
                body.push("output.push(',');".to_string());
            }
            body.push(format!(
                "output.push_str({});",
                string_literal(&format!("\"{}\": ", field.wire_name))
            ));
            body.push(format!(
                "output.push_str(&self.{}.to_rest_string());",
                field.name
            ));
        }

        body.push("output.push('}');".to_string());
        body.push("output".to_string());

        let method = body.into_iter().fold(
            Fn::new("to_rest_string")
                .private()
                .param(Param::receiver("&self"))
                .returns("String"),
            Fn::body_line,
        );

        Impl::new(&self.model.name)
            .for_trait(TO_REST_STRING)
            .method(method)
    }

    /// Both items, declaration first.
    pub fn items(&self) -> Vec<Box<dyn Renderable>> {
        vec![Box::new(self.declaration()), Box::new(self.serializer())]
    }
}
