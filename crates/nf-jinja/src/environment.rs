//! Jinja environment for the generated models

use crate::error::{JinjaError, JinjaResult};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

const MODEL_TEMPLATE_NAME: &str = "model.sql";

/// One `select` over the previous stage, with optional text around it.
const MODEL_TEMPLATE: &str = r#"
{%- if before %}
{{ before }}
{%- endif %}
select
{%- for column in columns %}
    {{ column }}{% if not loop.last %},{% endif %}
{%- endfor %}
from {{ from_table }}
{%- if after %}
{{ after }}
{%- endif %}
{{ comment }}
"#;

/// Values rendered into a model
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelContext {
    /// Text placed before the `select` (an unnesting CTE)
    pub before: String,

    /// Select list, one expression per entry
    pub columns: Vec<String>,

    /// Relation the model selects from
    pub from_table: String,

    /// Text placed after the `from` clause (joins and filters)
    pub after: String,

    /// Trailing SQL comment identifying the model
    pub comment: String,
}

/// Jinja templating environment for stage models
pub struct ModelTemplates {
    env: Environment<'static>,
}

impl ModelTemplates {
    /// Create the environment with the model template loaded
    pub fn new() -> JinjaResult<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(MODEL_TEMPLATE_NAME, MODEL_TEMPLATE)
            .map_err(|e| JinjaError::InvalidTemplate {
                name: MODEL_TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { env })
    }

    /// Render one model
    pub fn render(&self, context: &ModelContext) -> JinjaResult<String> {
        let template = self.env.get_template(MODEL_TEMPLATE_NAME)?;
        let rendered = template.render(context)?;
        log::trace!("Rendered model selecting from {}", context.from_table);
        Ok(rendered)
    }
}

/// `{{ ref('<table>') }}`
pub fn ref_table(table: &str) -> String {
    format!("{{{{ ref('{}') }}}}", table)
}

/// `{{ source('<schema>', '<table>') }}`
pub fn source_table(schema: &str, table: &str) -> String {
    format!("{{{{ source('{}', '{}') }}}}", schema, table)
}

/// `{{ config(schema='<schema>') }}`, the header of every model file
pub fn config_header(schema: &str) -> String {
    format!("{{{{ config(schema='{}') }}}}", schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<&str> {
        s.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    #[test]
    fn test_render_simple_select() {
        let templates = ModelTemplates::new().unwrap();
        let context = ModelContext {
            columns: vec!["id".to_string(), "name".to_string()],
            from_table: "{{ ref('users_1_ab2') }}".to_string(),
            comment: "-- users".to_string(),
            ..Default::default()
        };
        let sql = templates.render(&context).unwrap();
        assert_eq!(
            lines(&sql),
            vec![
                "select",
                "    id,",
                "    name",
                "from {{ ref('users_1_ab2') }}",
                "-- users",
            ]
        );
    }

    #[test]
    fn test_render_with_before_and_after() {
        let templates = ModelTemplates::new().unwrap();
        let context = ModelContext {
            before: "{{ unnest_cte('users', 'tags') }}".to_string(),
            columns: vec!["_airbyte_users_hashid".to_string()],
            from_table: "{{ ref('users') }}".to_string(),
            after: "where tags is not null".to_string(),
            comment: "-- users_tags from users/tags".to_string(),
        };
        let sql = templates.render(&context).unwrap();
        let rendered = lines(&sql);
        assert_eq!(rendered[0], "{{ unnest_cte('users', 'tags') }}");
        assert_eq!(rendered[1], "select");
        assert_eq!(rendered[4], "where tags is not null");
        assert_eq!(rendered[5], "-- users_tags from users/tags");
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let templates = ModelTemplates::new().unwrap();
        let context = ModelContext {
            columns: vec!["{{ cast_to_boolean('active') }} as active".to_string()],
            from_table: "t".to_string(),
            ..Default::default()
        };
        let sql = templates.render(&context).unwrap();
        assert!(sql.contains("{{ cast_to_boolean('active') }} as active"));
    }

    #[test]
    fn test_jinja_helpers() {
        assert_eq!(ref_table("users"), "{{ ref('users') }}");
        assert_eq!(
            source_table("_airbyte_public", "_airbyte_raw_users"),
            "{{ source('_airbyte_public', '_airbyte_raw_users') }}"
        );
        assert_eq!(config_header("public"), "{{ config(schema='public') }}");
    }
}
