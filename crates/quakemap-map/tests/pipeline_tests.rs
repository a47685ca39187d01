//! Feed body to HTML page, without the network.

#![allow(clippy::unwrap_used)]

use quakemap_feeds::parse_collection;
use quakemap_map::{compose_map, ControlPosition, MapConfig, MapRenderer};
use quakemap_types::{BoundaryCollection, ColorBucket, QuakeCollection};

const QUAKES: &str = r#"{
    "type": "FeatureCollection",
    "metadata": {"title": "USGS All Earthquakes, Past Month", "count": 4},
    "features": [
        {"type": "Feature", "id": "a",
         "properties": {"mag": 4.2, "place": "10km N of Testville", "time": 1700000000000},
         "geometry": {"type": "Point", "coordinates": [-117.5, 35.7, 8.2]}},
        {"type": "Feature", "id": "b",
         "properties": {"mag": 2.0, "place": "Boundary Flats", "time": 1700000100000},
         "geometry": {"type": "Point", "coordinates": [-120.0, 37.0, 3.0]}},
        {"type": "Feature", "id": "c",
         "properties": {"mag": null, "place": "Pending Review", "time": 1700000200000},
         "geometry": {"type": "Point", "coordinates": [150.0, -5.0, 40.0]}},
        {"type": "Feature", "id": "d",
         "properties": {"mag": 6.1, "place": "Offshore", "time": 1700000300000},
         "geometry": null}
    ]
}"#;

const PLATES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"Name": "AF-AN", "PlateA": "AF", "PlateB": "AN"},
            "geometry": {"type": "LineString", "coordinates": [[-0.4, -54.8], [0.0, -54.6]]}
        },
        {
            "type": "Feature",
            "properties": null,
            "geometry": {"type": "LineString", "coordinates": [[0.0, -54.6], [0.6, -54.3]]}
        }
    ]
}"#;

fn feeds() -> (QuakeCollection, BoundaryCollection) {
    let quakes = parse_collection(QUAKES).unwrap();
    let plates = parse_collection(PLATES).unwrap();
    (quakes, plates)
}

#[test]
fn composes_and_renders_full_page() {
    let (quakes, plates) = feeds();
    let config = MapConfig {
        tiles: quakemap_map::TileConfig {
            access_token: "pk.test-token".to_owned(),
            ..quakemap_map::TileConfig::default()
        },
        ..MapConfig::default()
    };

    let map = compose_map(&config, &quakes, Some(plates)).unwrap();
    assert_eq!(map.stats.features, 4);
    assert_eq!(map.stats.markers, 3);
    assert_eq!(map.stats.skipped, 1);
    assert_eq!(map.stats.boundaries, 2);

    let buckets: Vec<ColorBucket> = map
        .earthquakes
        .markers
        .iter()
        .map(|m| m.style.bucket)
        .collect();
    assert_eq!(
        buckets,
        [ColorBucket::FourToFive, ColorBucket::OneToTwo, ColorBucket::UpToOne]
    );

    let html = MapRenderer::new().unwrap().render(&map).unwrap();
    assert!(html.contains("pk.test-token"));
    assert!(html.contains("mapbox/satellite-v9"));
    assert!(html.contains("Fault Lines"));
    assert!(html.contains("AF-AN"));
    assert!(html.contains("USGS All Earthquakes, Past Month (3 events)"));
    assert!(html.contains(r#""magnitude":"unknown""#));
    assert!(html.contains("\"Magnitude: \""));
    assert!(!html.contains("popup_lines"));
}

#[test]
fn map_config_from_yaml() {
    let yaml = r#"
title: Quakes this week
center: [35.0, 139.0]
zoom: 5
utc_offset: "+09:00"
legend_position: topright
layer_control_collapsed: true
default_base_layer: Dark
base_layers:
  - name: Dark
    style_id: mapbox/dark-v10
tiles:
  access_token: pk.yaml
"#;
    let config: MapConfig = serde_yml::from_str(yaml).unwrap();
    assert_eq!(config.zoom, 5);
    assert_eq!(config.legend_position, ControlPosition::TopRight);
    assert_eq!(config.tiles.access_token, "pk.yaml");
    assert_eq!(config.tiles.tile_size, 512);
    assert_eq!(config.quake_overlay_name, "Earthquakes");

    let (quakes, _) = feeds();
    let map = compose_map(&config, &quakes, None).unwrap();
    assert_eq!(map.default_base_layer, "Dark");
    assert!(map.faults.is_none());
    let first = map.earthquakes.markers.first().unwrap();
    assert_eq!(first.popup.date_time, "15 Nov 2023 7:13:20");
}
