//! Per-item layer metadata documents and their on-store JSON form.

use std::collections::HashMap;

use crate::foundation::error::{LoomError, LoomResult};
use crate::model::Stand;

/// One pose-variant frame of a sub-layer: anchor offset plus the visual
/// layer it targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubLayerFrame {
    /// Horizontal offset from the layer's anchor point.
    pub x: i32,
    /// Vertical offset from the layer's anchor point.
    pub y: i32,
    /// Target visual layer name. A sub-layer only contributes to the layer
    /// its `z` names for the current stand.
    pub z: String,
}

/// A named sub-layer an item contributes, with per-stand frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubLayer {
    stand1: Option<SubLayerFrame>,
    stand2: Option<SubLayerFrame>,
}

impl SubLayer {
    /// Frame for the given stand, if the item defines one.
    pub fn frame(&self, stand: Stand) -> Option<&SubLayerFrame> {
        match stand {
            Stand::One => self.stand1.as_ref(),
            Stand::Two => self.stand2.as_ref(),
        }
    }
}

/// Parsed per-item layer metadata document.
///
/// The on-store form is a JSON object: an optional `info` block (region tag,
/// pose declaration) plus one entry per sub-layer tag, each holding `stand1`
/// and/or `stand2` frames. Frames missing their `z` field are dropped during
/// parsing; an item with no usable frames still parses to an empty document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerDocument {
    /// Visual-region tag (`info.vslot`) used for slot-exclusivity checks.
    pub vslot: Option<String>,
    /// Stand pose declared by the item, if any. Field priority:
    /// `info.stand`, then top-level `stand`, then top-level `attack`.
    pub declared_stand: Option<Stand>,
    nodes: HashMap<String, SubLayer>,
}

impl LayerDocument {
    /// Parse document bytes.
    pub fn parse(bytes: &[u8]) -> LoomResult<LayerDocument> {
        let root: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| LoomError::metadata(format!("layer document is not JSON: {e}")))?;
        let obj = root
            .as_object()
            .ok_or_else(|| LoomError::metadata("layer document root must be an object"))?;

        let info = obj.get("info").and_then(serde_json::Value::as_object);
        let vslot = info
            .and_then(|m| m.get("vslot"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);

        let mut nodes = HashMap::new();
        for (key, value) in obj {
            if key == "info" {
                continue;
            }
            let Some(node) = value.as_object() else {
                continue;
            };
            let stand1 = parse_frame(node.get("stand1"));
            let stand2 = parse_frame(node.get("stand2"));
            if stand1.is_none() && stand2.is_none() {
                continue;
            }
            nodes.insert(key.clone(), SubLayer { stand1, stand2 });
        }

        Ok(LayerDocument {
            vslot,
            declared_stand: declared_stand(info, obj),
            nodes,
        })
    }

    /// Look up a sub-layer by tag.
    pub fn node(&self, tag: &str) -> Option<&SubLayer> {
        self.nodes.get(tag)
    }

    /// Number of parsed sub-layers.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document contributes no sub-layers.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn declared_stand(
    info: Option<&serde_json::Map<String, serde_json::Value>>,
    root: &serde_json::Map<String, serde_json::Value>,
) -> Option<Stand> {
    if let Some(stand) = info
        .and_then(|m| m.get("stand"))
        .and_then(pose_number)
        .and_then(Stand::from_index)
    {
        return Some(stand);
    }
    for key in ["stand", "attack"] {
        if let Some(stand) = root
            .get(key)
            .and_then(pose_number)
            .and_then(Stand::from_index)
        {
            return Some(stand);
        }
    }
    None
}

fn pose_number(v: &serde_json::Value) -> Option<u64> {
    match v {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        serde_json::Value::Object(m) => m.get("value").and_then(pose_number),
        _ => None,
    }
}

fn parse_frame(v: Option<&serde_json::Value>) -> Option<SubLayerFrame> {
    let m = v?.as_object()?;
    let z = m.get("z")?.as_str()?.to_string();
    let x = m.get("x").and_then(serde_json::Value::as_i64).unwrap_or(0) as i32;
    let y = m.get("y").and_then(serde_json::Value::as_i64).unwrap_or(0) as i32;
    Some(SubLayerFrame { x, y, z })
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/document.rs"]
mod tests;
