//! Map configuration.
//!
//! Everything the page needs besides the data: viewport, tile provider,
//! base layers, control placement, and the time zone used for popups.
//! Defaults reproduce the classic Mapbox three-style switcher centred on
//! the Americas.

use serde::{Deserialize, Serialize};

/// Mapbox static-tiles URL template. Leaflet fills `{id}` and
/// `{accessToken}` from the layer options.
pub const MAPBOX_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

/// Attribution required by Mapbox and OpenStreetMap.
pub const MAPBOX_ATTRIBUTION: &str = "\u{a9} <a href='https://www.mapbox.com/about/maps/'>Mapbox</a> \u{a9} <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> <strong><a href='https://www.mapbox.com/map-feedback/' target='_blank'>Improve this map</a></strong>";

/// Corner of the map a control is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    #[default]
    BottomRight,
}

/// Tile provider settings shared by every base layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Leaflet URL template.
    #[serde(default = "default_tile_url")]
    pub url_template: String,

    /// Provider access token. Usually supplied via `MAPBOX_ACCESS_TOKEN`.
    #[serde(default)]
    pub access_token: String,

    /// Attribution HTML shown in the map corner.
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Tile edge length in pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Maximum zoom level.
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,

    /// Zoom offset applied to tile requests (`-1` for 512px Mapbox tiles).
    #[serde(default = "default_zoom_offset")]
    pub zoom_offset: i8,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: default_tile_url(),
            access_token: String::new(),
            attribution: default_attribution(),
            tile_size: default_tile_size(),
            max_zoom: default_max_zoom(),
            zoom_offset: default_zoom_offset(),
        }
    }
}

/// One selectable base layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseLayerConfig {
    /// Name shown in the layer switcher.
    pub name: String,
    /// Provider style identifier, e.g. `mapbox/light-v10`.
    pub style_id: String,
}

impl BaseLayerConfig {
    fn new(name: &str, style_id: &str) -> Self {
        Self {
            name: name.to_owned(),
            style_id: style_id.to_owned(),
        }
    }
}

/// Complete map configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial centre as `[latitude, longitude]`.
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    /// Initial zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// UTC offset for popup times (`UTC`, `+05:30`, `-0800`).
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    /// Tile provider.
    #[serde(default)]
    pub tiles: TileConfig,

    /// Base layers in switcher order.
    #[serde(default = "default_base_layers")]
    pub base_layers: Vec<BaseLayerConfig>,

    /// Base layer shown on load.
    #[serde(default = "default_base_layer")]
    pub default_base_layer: String,

    /// Legend placement.
    #[serde(default)]
    pub legend_position: ControlPosition,

    /// Whether the layer switcher starts collapsed.
    #[serde(default)]
    pub layer_control_collapsed: bool,

    /// Switcher label of the earthquake overlay.
    #[serde(default = "default_quake_overlay_name")]
    pub quake_overlay_name: String,

    /// Switcher label of the plate-boundary overlay.
    #[serde(default = "default_fault_overlay_name")]
    pub fault_overlay_name: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            center: default_center(),
            zoom: default_zoom(),
            utc_offset: default_utc_offset(),
            tiles: TileConfig::default(),
            base_layers: default_base_layers(),
            default_base_layer: default_base_layer(),
            legend_position: ControlPosition::default(),
            layer_control_collapsed: false,
            quake_overlay_name: default_quake_overlay_name(),
            fault_overlay_name: default_fault_overlay_name(),
        }
    }
}

fn default_tile_url() -> String {
    MAPBOX_TILE_URL.to_owned()
}

fn default_attribution() -> String {
    MAPBOX_ATTRIBUTION.to_owned()
}

const fn default_tile_size() -> u32 {
    512
}

const fn default_max_zoom() -> u8 {
    18
}

const fn default_zoom_offset() -> i8 {
    -1
}

fn default_title() -> String {
    "Earthquakes and Tectonic Plates".to_owned()
}

const fn default_center() -> [f64; 2] {
    [20.0, -100.0]
}

const fn default_zoom() -> u8 {
    3
}

fn default_utc_offset() -> String {
    "UTC".to_owned()
}

fn default_base_layers() -> Vec<BaseLayerConfig> {
    vec![
        BaseLayerConfig::new("Grayscale", "mapbox/light-v10"),
        BaseLayerConfig::new("Satellite", "mapbox/satellite-v9"),
        BaseLayerConfig::new("Outdoors", "mapbox/outdoors-v11"),
    ]
}

fn default_base_layer() -> String {
    "Grayscale".to_owned()
}

fn default_quake_overlay_name() -> String {
    "Earthquakes".to_owned()
}

fn default_fault_overlay_name() -> String {
    "Fault Lines".to_owned()
}
