//! Semantic validation on top of the parsed configuration.

use crate::{Result, SourceContext, VALID_TEMPLATES, WiregenConfig};

pub(crate) fn validate(config: &WiregenConfig, ctx: &SourceContext) -> Result<()> {
    for template in &config.codegen.templates {
        if !VALID_TEMPLATES.contains(&template.as_str()) {
            return Err(ctx.unknown_template_error(template));
        }
    }

    if config.project.name.is_empty() {
        return Err(ctx.validation_error("project name must not be empty"));
    }

    for (namespace, options) in &config.operations.namespaces {
        if options.depth_limit == Some(0) {
            return Err(ctx.validation_error(format!(
                "depth_limit for namespace '{}' must be at least 1",
                namespace
            )));
        }
        if let Some(include) = &config.operations.include_namespaces {
            if !include.contains(namespace) {
                return Err(ctx.validation_error(format!(
                    "namespace '{}' has options but is not in include_namespaces",
                    namespace
                )));
            }
        }
        if config.operations.exclude_namespaces.contains(namespace) {
            return Err(ctx.validation_error(format!(
                "namespace '{}' has options but is excluded",
                namespace
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Error, WiregenToml};

    fn parse(content: &str) -> crate::Result<WiregenToml> {
        WiregenToml::parse(content, "wiregen.toml")
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let result = parse(
            r#"
            [project]
            name = "pets"
            model = "model.json"

            [codegen]
            templates = ["golang"]
            "#,
        );
        assert!(matches!(*result.unwrap_err(), Error::UnknownTemplate { .. }));
    }

    #[test]
    fn test_zero_depth_limit_is_rejected() {
        let result = parse(
            r#"
            [project]
            name = "pets"
            model = "model.json"

            [operations.namespaces.spacex]
            depth_limit = 0
            "#,
        );
        let err = result.unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("depth_limit"));
    }

    #[test]
    fn test_options_for_excluded_namespace_are_rejected() {
        let result = parse(
            r#"
            [project]
            name = "pets"
            model = "model.json"

            [operations]
            exclude_namespaces = ["spacex"]

            [operations.namespaces.spacex]
            depth_limit = 3
            "#,
        );
        assert!(matches!(*result.unwrap_err(), Error::Validation { .. }));
    }

    #[test]
    fn test_valid_config_passes() {
        let result = parse(
            r#"
            [project]
            name = "pets"
            model = "model.json"

            [operations]
            include_namespaces = ["spacex"]

            [operations.namespaces.spacex]
            depth_limit = 3
            "#,
        );
        assert!(result.is_ok());
    }
}
