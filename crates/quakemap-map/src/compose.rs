//! Map composition.
//!
//! [`compose_map`] is the single place where configuration and fetched
//! data meet. It returns a self-contained [`QuakeMap`] value: no globals,
//! no handles into a live map, just everything the page needs to draw.

use quakemap_style::{
    fault_line_style, marker_style_for, popup_text_for, standard_legend, TimestampFormatter,
};
use quakemap_types::{
    feature_id, geometry_kind, BoundaryCollection, FeedMetadata, Legend, LineStyle, MarkerStyle,
    PointLocation, PopupText, QuakeCollection, QuakeProperties,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{ControlPosition, MapConfig, TileConfig};
use crate::error::MapError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A base layer entry of the layer switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseLayer {
    /// Switcher label.
    pub name: String,
    /// Provider style identifier.
    pub style_id: String,
}

/// One styled earthquake marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Feed identifier, when present.
    pub id: Option<String>,
    /// Marker position.
    pub lat: f64,
    /// Marker position.
    pub lng: f64,
    /// Hypocentre depth in kilometres.
    pub depth_km: Option<f64>,
    /// Circle style.
    pub style: MarkerStyle,
    /// Popup fields.
    pub popup: PopupText,
}

/// The earthquake overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    /// Switcher label.
    pub name: String,
    /// Markers in feed order.
    pub markers: Vec<Marker>,
}

/// The plate-boundary overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayer {
    /// Switcher label.
    pub name: String,
    /// Line style applied to every feature.
    pub style: LineStyle,
    /// The boundaries, passed to the page unchanged.
    pub data: BoundaryCollection,
}

/// The legend control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendControl {
    /// Docking corner.
    pub position: ControlPosition,
    /// Title and entries.
    pub legend: Legend,
}

/// Counts reported alongside the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MapStats {
    /// Features in the earthquake feed.
    pub features: usize,
    /// Markers drawn.
    pub markers: usize,
    /// Features skipped for lacking a usable point geometry.
    pub skipped: usize,
    /// Plate-boundary features drawn.
    pub boundaries: usize,
}

/// A fully assembled map, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuakeMap {
    /// Page title.
    pub title: String,
    /// Title of the source feed, when it publishes one.
    pub source_title: Option<String>,
    /// Initial centre.
    pub center: LatLng,
    /// Initial zoom.
    pub zoom: u8,
    /// Tile provider settings.
    pub tiles: TileConfig,
    /// Base layers in switcher order.
    pub base_layers: Vec<BaseLayer>,
    /// Base layer shown on load.
    pub default_base_layer: String,
    /// Earthquake markers.
    pub earthquakes: MarkerLayer,
    /// Plate boundaries, when they were fetched.
    pub faults: Option<LineLayer>,
    /// Magnitude legend.
    pub legend: LegendControl,
    /// Whether the layer switcher starts collapsed.
    pub layer_control_collapsed: bool,
    /// Feature counts.
    pub stats: MapStats,
}

/// Assemble a map from configuration, the earthquake feed, and optional
/// plate boundaries.
///
/// Features without a point geometry are skipped and counted in
/// [`MapStats::skipped`].
///
/// # Errors
///
/// Returns [`MapError::Style`] for an unparseable UTC offset,
/// [`MapError::NoBaseLayers`] when no base layer is configured, and
/// [`MapError::UnknownBaseLayer`] when the default names none of them.
pub fn compose_map(
    config: &MapConfig,
    quakes: &QuakeCollection,
    faults: Option<BoundaryCollection>,
) -> Result<QuakeMap, MapError> {
    let formatter: TimestampFormatter = config.utc_offset.parse()?;

    if config.base_layers.is_empty() {
        return Err(MapError::NoBaseLayers);
    }
    if !config
        .base_layers
        .iter()
        .any(|layer| layer.name == config.default_base_layer)
    {
        return Err(MapError::UnknownBaseLayer(config.default_base_layer.clone()));
    }
    if config.tiles.access_token.is_empty() && config.tiles.url_template.contains("{accessToken}") {
        warn!("no tile access token configured; base layers will not load");
    }

    let mut markers = Vec::with_capacity(quakes.features.len());
    for feature in &quakes.features {
        let Some(location) = PointLocation::from_feature(feature) else {
            debug!(
                id = ?feature_id(feature),
                geometry = feature.geometry.as_ref().map_or("null", |g| geometry_kind(&g.value)),
                "skipping feature without point geometry"
            );
            continue;
        };

        let properties = QuakeProperties::from_feature(feature);
        markers.push(Marker {
            id: feature_id(feature),
            lat: location.lat,
            lng: location.lng,
            depth_km: location.depth_km,
            style: marker_style_for(properties.mag),
            popup: popup_text_for(&properties, formatter),
        });
    }

    let stats = MapStats {
        features: quakes.features.len(),
        markers: markers.len(),
        skipped: quakes.features.len().saturating_sub(markers.len()),
        boundaries: faults.as_ref().map_or(0, |f| f.features.len()),
    };

    let faults = faults.map(|data| LineLayer {
        name: config.fault_overlay_name.clone(),
        style: fault_line_style(),
        data,
    });

    info!(
        markers = stats.markers,
        skipped = stats.skipped,
        boundaries = stats.boundaries,
        "map composed"
    );

    let [lat, lng] = config.center;
    Ok(QuakeMap {
        title: config.title.clone(),
        source_title: FeedMetadata::from_collection(quakes).and_then(|m| m.title),
        center: LatLng { lat, lng },
        zoom: config.zoom,
        tiles: config.tiles.clone(),
        base_layers: config
            .base_layers
            .iter()
            .map(|layer| BaseLayer {
                name: layer.name.clone(),
                style_id: layer.style_id.clone(),
            })
            .collect(),
        default_base_layer: config.default_base_layer.clone(),
        earthquakes: MarkerLayer {
            name: config.quake_overlay_name.clone(),
            markers,
        },
        faults,
        legend: LegendControl {
            position: config.legend_position,
            legend: standard_legend(),
        },
        layer_control_collapsed: config.layer_control_collapsed,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quakemap_types::{
        ColorBucket, Feature, FeatureCollection, FeatureId, Geometry, GeometryValue,
    };
    use serde_json::json;

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn point(id: &str, mag: Option<f64>, lng: f64, lat: f64) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(GeometryValue::Point(vec![lng, lat, 10.0]))),
            id: Some(FeatureId::String(id.to_owned())),
            properties: json!({
                "mag": mag,
                "place": format!("near {id}"),
                "time": 1_700_000_000_000_i64,
            })
            .as_object()
            .cloned(),
            foreign_members: None,
        }
    }

    #[test]
    fn composes_markers_in_feed_order() {
        let quakes = collection(vec![
            point("a", Some(4.2), -117.5, 35.7),
            point("b", Some(0.0), 12.0, 45.0),
        ]);
        let map = compose_map(&MapConfig::default(), &quakes, None);
        assert!(map.is_ok());
        let Ok(map) = map else { return };

        let ids: Vec<Option<&str>> = map
            .earthquakes
            .markers
            .iter()
            .map(|m| m.id.as_deref())
            .collect();
        assert_eq!(ids, [Some("a"), Some("b")]);

        let first = map.earthquakes.markers.first();
        assert!(first.is_some_and(|m| m.style.bucket == ColorBucket::FourToFive));
        assert!(first.is_some_and(|m| (m.lat - 35.7).abs() < f64::EPSILON));
        assert!(first.is_some_and(|m| m.popup.location == "near a"));
        let second = map.earthquakes.markers.get(1);
        assert!(second.is_some_and(|m| (m.style.radius - 1.0).abs() < f64::EPSILON));

        assert_eq!(map.stats.markers, 2);
        assert_eq!(map.stats.skipped, 0);
        assert!(map.faults.is_none());
        assert_eq!(map.legend.legend.entries.len(), ColorBucket::ALL.len());
    }

    #[test]
    fn skips_features_without_points() {
        let mut no_geometry = point("c", Some(2.0), 0.0, 0.0);
        no_geometry.geometry = None;
        let mut line = point("d", Some(3.0), 0.0, 0.0);
        line.geometry = Some(Geometry::new(GeometryValue::LineString(vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
        ])));
        let quakes = collection(vec![point("a", Some(1.5), 10.0, 10.0), no_geometry, line]);

        let map = compose_map(&MapConfig::default(), &quakes, None);
        assert!(map.is_ok_and(|m| m.stats.markers == 1 && m.stats.skipped == 2));
    }

    #[test]
    fn null_properties_draw_a_minimal_marker() {
        let mut bare = point("e", None, 5.0, 5.0);
        bare.properties = None;
        let map = compose_map(&MapConfig::default(), &collection(vec![bare]), None);
        assert!(map.is_ok());
        let Ok(map) = map else { return };

        let marker = map.earthquakes.markers.first();
        assert!(marker.is_some_and(|m| m.style.bucket == ColorBucket::UpToOne));
        assert!(marker.is_some_and(|m| m.popup.magnitude == "unknown"));
    }

    #[test]
    fn fault_overlay_is_optional_layer() {
        let quakes = collection(vec![point("a", Some(1.5), 10.0, 10.0)]);
        let faults = collection(vec![Feature {
            bbox: None,
            geometry: Some(Geometry::new(GeometryValue::LineString(vec![
                vec![-0.4, -54.8],
                vec![0.0, -54.6],
            ]))),
            id: None,
            properties: None,
            foreign_members: None,
        }]);

        let map = compose_map(&MapConfig::default(), &quakes, Some(faults));
        assert!(map.is_ok());
        let Ok(map) = map else { return };
        let layer = map.faults.as_ref();
        assert!(layer.is_some_and(|l| l.name == "Fault Lines"));
        assert!(layer.is_some_and(|l| l.style.stroke_color == "#f6a001"));
        assert_eq!(map.stats.boundaries, 1);
    }

    #[test]
    fn rejects_unknown_default_base_layer() {
        let config = MapConfig {
            default_base_layer: "Terrain".to_owned(),
            ..MapConfig::default()
        };
        let result = compose_map(&config, &collection(Vec::new()), None);
        assert!(matches!(result, Err(MapError::UnknownBaseLayer(name)) if name == "Terrain"));
    }

    #[test]
    fn rejects_empty_base_layers() {
        let config = MapConfig {
            base_layers: Vec::new(),
            ..MapConfig::default()
        };
        let result = compose_map(&config, &collection(Vec::new()), None);
        assert!(matches!(result, Err(MapError::NoBaseLayers)));
    }

    #[test]
    fn rejects_bad_utc_offset() {
        let config = MapConfig {
            utc_offset: "sometime".to_owned(),
            ..MapConfig::default()
        };
        let result = compose_map(&config, &collection(Vec::new()), None);
        assert!(matches!(result, Err(MapError::Style(_))));
    }

    #[test]
    fn popup_uses_configured_offset() {
        let config = MapConfig {
            utc_offset: "+05:30".to_owned(),
            ..MapConfig::default()
        };
        let quakes = collection(vec![point("a", Some(4.2), 0.0, 0.0)]);
        let map = compose_map(&config, &quakes, None);
        let date = map
            .ok()
            .and_then(|m| m.earthquakes.markers.first().map(|mk| mk.popup.date_time.clone()));
        assert_eq!(date.as_deref(), Some("15 Nov 2023 3:43:20"));
    }

    #[test]
    fn marker_serializes_popup_once() {
        let quakes = collection(vec![point("a", Some(4.2), 0.0, 0.0)]);
        let Ok(map) = compose_map(&MapConfig::default(), &quakes, None) else {
            return;
        };
        let value = serde_json::to_value(&map.earthquakes.markers).unwrap_or_default();
        assert_eq!(value[0]["popup"]["location"], "near a");
        assert!(value[0].get("popup_lines").is_none());
    }
}
