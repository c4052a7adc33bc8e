//! JSON scene description.
//!
//! ```json
//! {
//!   "scene": { "max-scroll-x": 0.5, "max-scroll-y": 0.5, "blur-threshold": 2, "blur-factor": 1 },
//!   "moveables": [ { "start-x": 0, "start-y": 0, "depth": 2, "width": 120, "height": 80, "color": "#336699" } ]
//! }
//! ```
//!
//! Every object is flattened into a string attribute map and handed to the
//! engine's attribute parser, so numbers may be written as JSON numbers or
//! as strings.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use parallax_engine::config::{MoveableConfig, SceneConfig};
use parallax_engine::paint::Color;

const DEFAULT_CARD_COLOR: &str = "#8d99ae";

/// One card: its placement config plus how it looks.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpec {
    pub config: MoveableConfig,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneFile {
    pub scene: SceneConfig,
    pub cards: Vec<CardSpec>,
}

impl SceneFile {
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text).context("scene file is not valid JSON")?;

        let scene_obj = root.get("scene").context("scene file has no `scene` object")?;
        let attrs = attribute_map(scene_obj, "scene")?;
        let scene = SceneConfig::from_attributes(&attrs).context("invalid `scene` attributes")?;

        let list = root
            .get("moveables")
            .and_then(Value::as_array)
            .context("scene file has no `moveables` array")?;

        let cards = list
            .iter()
            .enumerate()
            .map(|(i, item)| parse_card(item, i))
            .collect::<Result<Vec<_>>>()?;

        Ok(SceneFile { scene, cards })
    }
}

fn parse_card(item: &Value, index: usize) -> Result<CardSpec> {
    let name = format!("moveables[{index}]");
    let attrs = attribute_map(item, &name)?;

    let config = MoveableConfig::from_attributes(&attrs, &format!("{name}."))
        .with_context(|| format!("invalid `{name}` attributes"))?;

    let width = dimension(&attrs, &name, "width")?;
    let height = dimension(&attrs, &name, "height")?;

    let hex = attrs.get("color").map(String::as_str).unwrap_or(DEFAULT_CARD_COLOR);
    let color = Color::from_hex(hex).with_context(|| format!("`{name}.color` = {hex:?} is not a #rrggbb color"))?;

    Ok(CardSpec { config, width, height, color })
}

/// Flattens a JSON object of scalars into string attributes.
fn attribute_map(value: &Value, name: &str) -> Result<BTreeMap<String, String>> {
    let Some(obj) = value.as_object() else {
        bail!("`{name}` must be a JSON object");
    };

    let mut map = BTreeMap::new();
    for (key, v) in obj {
        let text = match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => bail!("`{name}.{key}` must be a string, number or boolean"),
        };
        map.insert(key.clone(), text);
    }
    Ok(map)
}

fn dimension(attrs: &BTreeMap<String, String>, name: &str, key: &str) -> Result<f32> {
    let raw = attrs.get(key).with_context(|| format!("`{name}.{key}` is missing"))?;
    let value: f32 = raw
        .trim()
        .parse()
        .with_context(|| format!("`{name}.{key}` = {raw:?} is not a number"))?;
    if !(value.is_finite() && value > 0.0) {
        bail!("`{name}.{key}` = {value} must be a positive size");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"{
        "scene": { "max-scroll-x": 0.5, "max-scroll-y": "0.25", "blur-threshold": 2, "blur-factor": 1 },
        "moveables": [
            { "start-x": 0, "start-y": "-0.5", "depth": 3, "width": 120, "height": "80", "color": "#336699" },
            { "start-x": 1, "start-y": 1, "depth": 1, "width": 10, "height": 10 }
        ]
    }"##;

    // ── happy path ────────────────────────────────────────────────────────

    #[test]
    fn parses_numbers_and_numeric_strings() {
        let file = SceneFile::parse(MINIMAL).unwrap();
        assert_eq!(file.scene.max_scroll.x, 0.5);
        assert_eq!(file.scene.max_scroll.y, 0.25);
        assert_eq!(file.cards.len(), 2);

        let first = &file.cards[0];
        assert_eq!(first.config, MoveableConfig::new(0.0, -0.5, 3.0));
        assert_eq!((first.width, first.height), (120.0, 80.0));
        assert_eq!(Some(first.color), Color::from_hex("#336699"));
    }

    #[test]
    fn missing_color_falls_back_to_default() {
        let file = SceneFile::parse(MINIMAL).unwrap();
        assert_eq!(Some(file.cards[1].color), Color::from_hex(DEFAULT_CARD_COLOR));
    }

    #[test]
    fn bundled_default_scene_parses() {
        let file = SceneFile::parse(include_str!("../scenes/default.json")).unwrap();
        assert!(!file.cards.is_empty());
        assert!(file.scene.scale_on_hover);
        assert!(file.scene.recenter_on_leave);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn scene_attribute_errors_name_the_field() {
        let text = r#"{ "scene": { "max-scroll-x": "wide", "max-scroll-y": 1, "blur-factor": 1 }, "moveables": [] }"#;
        let err = SceneFile::parse(text).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid `scene` attributes"));
        assert!(msg.contains("max-scroll-x"));
        assert!(msg.contains("blur-threshold"));
    }

    #[test]
    fn moveable_errors_are_prefixed_with_index() {
        let text = r#"{
            "scene": { "max-scroll-x": 1, "max-scroll-y": 1, "blur-threshold": 1, "blur-factor": 1 },
            "moveables": [ { "start-x": 0, "start-y": 0, "width": 1, "height": 1 } ]
        }"#;
        let msg = format!("{:#}", SceneFile::parse(text).unwrap_err());
        assert!(msg.contains("moveables[0].depth"));
    }

    #[test]
    fn rejects_bad_color_and_size() {
        let bad_color = r#"{
            "scene": { "max-scroll-x": 1, "max-scroll-y": 1, "blur-threshold": 1, "blur-factor": 1 },
            "moveables": [ { "start-x": 0, "start-y": 0, "depth": 1, "width": 1, "height": 1, "color": "red" } ]
        }"#;
        assert!(format!("{:#}", SceneFile::parse(bad_color).unwrap_err()).contains("moveables[0].color"));

        let bad_size = bad_color.replace("\"color\": \"red\"", "\"color\": \"#ff0000\"").replace("\"width\": 1", "\"width\": 0");
        assert!(format!("{:#}", SceneFile::parse(&bad_size).unwrap_err()).contains("moveables[0].width"));
    }

    #[test]
    fn rejects_nested_values_and_bad_shape() {
        let nested = r#"{ "scene": { "fov": [100] }, "moveables": [] }"#;
        assert!(SceneFile::parse(nested).unwrap_err().to_string().contains("scene.fov"));

        assert!(SceneFile::parse(r#"{ "moveables": [] }"#).is_err());
        assert!(SceneFile::parse("not json").is_err());
    }
}
