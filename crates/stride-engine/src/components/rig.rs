//! Rig hierarchy: a strict tree of named parts.

use std::collections::HashSet;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, StrideError};

/// One node of the rig tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigPart {
    /// Unique within the rig.
    pub name: String,
    /// Local pixel offset the part rotates about.
    pub pivot: Vec2,
    /// Mount point in the parent's local space. `None` mounts at the parent's pivot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach: Option<Vec2>,
    /// Bitmap handle for the rasterizer. Opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Owned children, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RigPart>,
}

impl RigPart {
    pub fn new(name: impl Into<String>, pivot: Vec2) -> Self {
        Self {
            name: name.into(),
            pivot,
            attach: None,
            image: None,
            children: Vec::new(),
        }
    }

    pub fn with_attach(mut self, attach: Vec2) -> Self {
        self.attach = Some(attach);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_child(mut self, child: RigPart) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first pre-order walk over this subtree.
    pub fn iter(&self) -> impl Iterator<Item = &RigPart> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let part = stack.pop()?;
            stack.extend(part.children.iter().rev());
            Some(part)
        })
    }
}

/// A validated rig: one root, unique part names.
#[derive(Debug, Clone, PartialEq)]
pub struct Rig {
    root: RigPart,
    len: usize,
}

impl Rig {
    pub fn new(root: RigPart) -> Result<Self> {
        let mut seen = HashSet::new();
        for part in root.iter() {
            if !seen.insert(part.name.as_str()) {
                return Err(StrideError::DuplicatePart(part.name.clone()));
            }
        }
        let len = seen.len();
        Ok(Self { root, len })
    }

    /// Parse a rig from JSON.
    ///
    /// Accepts either a bare root part with `children` as a list, or a
    /// `{ parts_dir?, hierarchy: { root_name: {..} } }` document whose
    /// children are keyed by name.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let root = match value.get("hierarchy") {
            Some(_) => serde_json::from_value::<RigDocument>(value)?.into_root()?,
            None => serde_json::from_value::<RigPart>(value)?,
        };
        let rig = Self::new(root)?;
        log::debug!("loaded rig '{}' with {} parts", rig.root.name, rig.len);
        Ok(rig)
    }

    pub fn root(&self) -> &RigPart {
        &self.root
    }

    pub fn find(&self, name: &str) -> Option<&RigPart> {
        self.root.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.root.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Rig document with name-keyed children.
#[derive(Deserialize)]
struct RigDocument {
    #[serde(default)]
    parts_dir: Option<String>,
    hierarchy: Map<String, Value>,
}

#[derive(Deserialize)]
struct KeyedPart {
    pivot: Vec2,
    #[serde(default)]
    attach: Option<Vec2>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    children: Map<String, Value>,
}

impl RigDocument {
    fn into_root(self) -> Result<RigPart> {
        let parts_dir = self.parts_dir;
        let (name, def) = self.hierarchy.into_iter().next().ok_or(StrideError::EmptyRig)?;
        keyed_part(name, def, parts_dir.as_deref())
    }
}

fn keyed_part(name: String, def: Value, parts_dir: Option<&str>) -> Result<RigPart> {
    let part: KeyedPart = serde_json::from_value(def)?;
    let children = part
        .children
        .into_iter()
        .map(|(child, def)| keyed_part(child, def, parts_dir))
        .collect::<Result<Vec<_>>>()?;
    let image = match (parts_dir, part.image) {
        (Some(dir), Some(image)) => Some(format!("{}/{}", dir.trim_end_matches('/'), image)),
        (_, image) => image,
    };
    Ok(RigPart {
        name,
        pivot: part.pivot,
        attach: part.attach,
        image,
        children,
    })
}
