use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::layout::{PositionZone, Slot, SlotTables, ZoneTable};
use crate::roster::TacticalPosition;
use crate::theme::Theme;

/// Which coordinate-allocation strategy the pipeline runs. Exactly one is
/// active per allocation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    #[serde(rename = "static-slot-table")]
    SlotTable,
    #[serde(rename = "dynamic-zone-spread")]
    ZoneSpread,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::SlotTable => "static-slot-table",
            Strategy::ZoneSpread => "dynamic-zone-spread",
        }
    }
}

/// Inset margins (percent of the surface per side) the mapper keeps clear
/// of markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapperConfig {
    pub inset_top: f32,
    pub inset_right: f32,
    pub inset_bottom: f32,
    pub inset_left: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            inset_top: 12.0,
            inset_right: 12.0,
            inset_bottom: 12.0,
            inset_left: 12.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    pub strategy: Strategy,
    pub mapper: MapperConfig,
    pub slots: SlotTables,
    pub zones: ZoneTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub marker_radius: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            // 10:16 portrait, matching the reference field artwork.
            width: 700.0,
            height: 1120.0,
            marker_radius: 14.0,
            background: "#111827".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::broadcast();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct MapperConfigFile {
    inset_top: Option<f32>,
    inset_right: Option<f32>,
    inset_bottom: Option<f32>,
    inset_left: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    strategy: Option<Strategy>,
    mapper: Option<MapperConfigFile>,
    slots: Option<BTreeMap<TacticalPosition, Vec<Slot>>>,
    zones: Option<BTreeMap<TacticalPosition, PositionZone>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    marker_radius: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

/// Loads a JSON config file over the defaults. Tables given in the file
/// replace the default table for that position only; untouched positions
/// keep the reference layout.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let parsed: ConfigFile = serde_json::from_str(&contents).context("invalid config JSON")?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "chalkboard" {
            config.theme = Theme::chalkboard();
            config.render.background = config.theme.background.clone();
        } else if theme_name == "broadcast" || theme_name == "default" {
            config.theme = Theme::broadcast();
            config.render.background = config.theme.background.clone();
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(strategy) = layout.strategy {
            config.layout.strategy = strategy;
        }
        if let Some(mapper) = layout.mapper {
            if let Some(v) = mapper.inset_top {
                config.layout.mapper.inset_top = v;
            }
            if let Some(v) = mapper.inset_right {
                config.layout.mapper.inset_right = v;
            }
            if let Some(v) = mapper.inset_bottom {
                config.layout.mapper.inset_bottom = v;
            }
            if let Some(v) = mapper.inset_left {
                config.layout.mapper.inset_left = v;
            }
        }
        if let Some(slots) = layout.slots {
            for (position, table) in slots {
                config.layout.slots.tables.insert(position, table);
            }
        }
        if let Some(zones) = layout.zones {
            for (position, zone) in zones {
                config.layout.zones.zones.insert(position, zone);
            }
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.marker_radius {
            config.render.marker_radius = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    Ok(config)
}
