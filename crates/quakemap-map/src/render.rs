//! HTML rendering via `minijinja`.
//!
//! The page template ships inside the binary. Operators who want a
//! different page can point [`MapRenderer::from_dir`] at a directory
//! holding their own `map.html`; it is loaded on each render, so edits
//! show up without recompiling.

use minijinja::{context, Environment};

use crate::compose::QuakeMap;
use crate::error::MapError;

/// Name of the page template, both embedded and on disk.
pub const MAP_TEMPLATE: &str = "map.html";

const EMBEDDED_MAP_TEMPLATE: &str = include_str!("../templates/map.html");

/// Renders a [`QuakeMap`] into a self-contained HTML page.
///
/// Template names ending in `.html` get HTML auto-escaping, so feed text
/// reaching the page through plain `{{ }}` expressions is escaped. Bulk
/// data goes through `tojson`, which is safe inside `<script>`.
pub struct MapRenderer {
    env: Environment<'static>,
}

impl MapRenderer {
    /// Renderer using the embedded template.
    pub fn new() -> Result<Self, MapError> {
        let mut env = Environment::new();
        env.add_template(MAP_TEMPLATE, EMBEDDED_MAP_TEMPLATE)
            .map_err(|e| MapError::Template(format!("failed to add embedded template: {e}")))?;
        Ok(Self { env })
    }

    /// Renderer loading `map.html` from `templates_dir`.
    ///
    /// The file is read lazily; a missing file surfaces from
    /// [`MapRenderer::render`].
    pub fn from_dir(templates_dir: &str) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(templates_dir));
        Self { env }
    }

    /// Render the page.
    pub fn render(&self, map: &QuakeMap) -> Result<String, MapError> {
        self.env
            .get_template(MAP_TEMPLATE)
            .map_err(|e| MapError::Template(format!("missing {MAP_TEMPLATE} template: {e}")))?
            .render(context! { map })
            .map_err(|e| MapError::Template(format!("{MAP_TEMPLATE} render failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_map;
    use crate::config::MapConfig;
    use quakemap_types::{Feature, FeatureCollection, FeatureId, Geometry, GeometryValue};
    use serde_json::json;

    fn sample_map(place: &str) -> Option<QuakeMap> {
        let quakes = FeatureCollection {
            bbox: None,
            features: vec![Feature {
                bbox: None,
                geometry: Some(Geometry::new(GeometryValue::Point(vec![-117.5, 35.7, 8.2]))),
                id: Some(FeatureId::String("us7000test".to_owned())),
                properties: json!({"mag": 4.2, "place": place, "time": 1_700_000_000_000_i64})
                    .as_object()
                    .cloned(),
                foreign_members: None,
            }],
            foreign_members: None,
        };
        compose_map(&MapConfig::default(), &quakes, None).ok()
    }

    #[test]
    fn embedded_template_renders() {
        let renderer = MapRenderer::new();
        assert!(renderer.is_ok());
        let (Ok(renderer), Some(map)) = (renderer, sample_map("10km N of Testville")) else {
            return;
        };

        let html = renderer.render(&map);
        assert!(html.is_ok(), "render failed: {:?}", html.err());
        let html = html.unwrap_or_default();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Earthquakes and Tectonic Plates</title>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains("Testville"));
        assert!(html.contains("4.0 - 5.0"));
        assert!(html.contains("#ea822c"));
        // Legend labels pass through HTML escaping.
        assert!(html.contains("&lt;= 1.0"));
        assert!(html.contains("&gt; 5.0"));
    }

    #[test]
    fn script_breaking_text_is_neutralized() {
        let renderer = MapRenderer::new();
        let (Ok(renderer), Some(map)) = (renderer, sample_map("</script><b>boom</b>")) else {
            return;
        };
        let html = renderer.render(&map).unwrap_or_default();
        assert!(!html.contains("</script><b>boom"));
    }

    #[test]
    fn missing_template_dir_fails_at_render() {
        let unique = format!(
            "quakemap_missing_templates_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        );
        let dir = std::env::temp_dir().join(unique);
        let renderer = MapRenderer::from_dir(dir.to_str().unwrap_or(""));
        let Some(map) = sample_map("x") else { return };
        assert!(matches!(renderer.render(&map), Err(MapError::Template(_))));
    }

    #[test]
    fn template_dir_override_is_used() {
        let unique = format!(
            "quakemap_custom_templates_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        );
        let dir = std::env::temp_dir().join(unique);
        std::fs::create_dir_all(&dir).ok();
        std::fs::write(
            dir.join(MAP_TEMPLATE),
            "{{ map.title }}: {{ map.stats.markers }} markers",
        )
        .ok();

        let renderer = MapRenderer::from_dir(dir.to_str().unwrap_or(""));
        let Some(map) = sample_map("x") else { return };
        let html = renderer.render(&map);
        assert_eq!(
            html.ok().as_deref(),
            Some("Earthquakes and Tectonic Plates: 1 markers")
        );

        std::fs::remove_dir_all(&dir).ok();
    }
}
