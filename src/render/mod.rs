//! Template rendering module
//!
//! Wraps a handlebars registry built once at startup: page templates and
//! reusable partials are loaded from the configured directories, helper
//! functions are registered, and the whole registry is read-only afterwards.

pub mod helpers;

use crate::config::ResourcesConfig;
use handlebars::Handlebars;
use std::io;
use std::path::Path;

/// Immutable template registry, injected into the handlers via `AppState`.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Build the registry from the configured template and partials
    /// directories. Called once at startup; any unreadable or malformed
    /// template is a startup error.
    pub fn from_config(resources: &ResourcesConfig) -> io::Result<Self> {
        let mut registry = Handlebars::new();

        register_dir(&mut registry, Path::new(&resources.template_dir))?;

        let partials_dir = Path::new(&resources.partials_dir);
        if partials_dir.is_dir() {
            register_dir(&mut registry, partials_dir)?;
        }

        register_helpers(&mut registry);

        Ok(Self { registry })
    }

    /// Render the named template against a per-request view-model.
    pub fn render(
        &self,
        name: &str,
        view_model: &serde_json::Value,
    ) -> Result<String, handlebars::RenderError> {
        self.registry.render(name, view_model)
    }
}

/// Register every `*.hbs` file in `dir` under its file stem, so templates
/// can reference each other as `{{> name}}`.
fn register_dir(registry: &mut Handlebars<'_>, dir: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("hbs") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        registry
            .register_template_file(name, &path)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    }
    Ok(())
}

fn register_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper("getCurrentYear", Box::new(helpers::get_current_year_helper));
    registry.register_helper("screamIt", Box::new(helpers::scream_it_helper));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_engine() -> TemplateEngine {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("footer", "Copyright {{getCurrentYear}}")
            .unwrap();
        registry
            .register_template_string(
                "page",
                "<h1>{{pageTitle}}</h1><p>{{screamIt greeting}}</p>{{> footer}}",
            )
            .unwrap();
        register_helpers(&mut registry);
        TemplateEngine { registry }
    }

    #[test]
    fn renders_view_model_fields() {
        let engine = test_engine();
        let html = engine
            .render("page", &json!({ "pageTitle": "About Page", "greeting": "hi" }))
            .unwrap();
        assert!(html.contains("<h1>About Page</h1>"));
    }

    #[test]
    fn helpers_run_inside_templates_and_partials() {
        let engine = test_engine();
        let html = engine
            .render("page", &json!({ "pageTitle": "Home", "greeting": "hello" }))
            .unwrap();
        assert!(html.contains("HELLO"));
        assert!(html.contains(&format!("Copyright {}", helpers::current_year())));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let engine = test_engine();
        assert!(engine.render("missing", &json!({})).is_err());
    }

    #[test]
    fn shipped_templates_load_and_render() {
        let resources = ResourcesConfig {
            template_dir: "views".to_string(),
            partials_dir: "views/partials".to_string(),
            public_dir: "public".to_string(),
        };
        let engine = TemplateEngine::from_config(&resources).unwrap();
        let html = engine
            .render(
                "home",
                &json!({
                    "pageTitle": "Home Page",
                    "welcomeMessage": "Welcome to the home page!"
                }),
            )
            .unwrap();
        assert!(html.contains("Welcome to the home page!"));
        assert!(html.contains("Home Page"));
    }
}
