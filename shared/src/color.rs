//! The configurable color palette every game draws its cells from.
//!
//! The palette is supplied by the operator, validated once at startup, and
//! constant afterwards. Game logic never interprets color ids beyond
//! equality; the display names only matter to clients.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Opaque identifier naming one palette color, e.g. `"r"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(String);

impl ColorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One palette entry: the wire identifier plus the display name shown to
/// players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDef {
    pub id: ColorId,
    pub name: String,
}

impl ColorDef {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: ColorId::from(id),
            name: name.to_string(),
        }
    }
}

/// Errors raised while validating a color list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("the color list must contain at least two colors")]
    TooFewColors,
    #[error("invalid color ids, ids must be unique (duplicate: {0})")]
    DuplicateId(ColorId),
}

/// A validated, ordered color list.
///
/// Construction checks the invariants once: at least two entries, all ids
/// unique. The order is the configuration order and is observable through
/// [`Palette::first_other`], so it stays fixed for the palette's lifetime.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<ColorDef>,
}

impl Palette {
    pub fn new(colors: Vec<ColorDef>) -> Result<Self, PaletteError> {
        if colors.len() < 2 {
            return Err(PaletteError::TooFewColors);
        }

        let mut seen = HashSet::new();
        for def in &colors {
            if !seen.insert(def.id.clone()) {
                return Err(PaletteError::DuplicateId(def.id.clone()));
            }
        }

        Ok(Self { colors })
    }

    /// The stock red/green/blue palette.
    pub fn rgb() -> Self {
        // Ids are statically unique, no validation needed.
        Self {
            colors: default_colors(),
        }
    }

    /// The configured colors, in configuration order.
    pub fn colors(&self) -> &[ColorDef] {
        &self.colors
    }

    pub fn contains(&self, id: &ColorId) -> bool {
        self.colors.iter().any(|def| def.id == *id)
    }

    /// First configured color different from `other`, in configuration
    /// order. Always present since a palette holds at least two colors.
    pub fn first_other(&self, other: &ColorId) -> Option<&ColorId> {
        self.colors.iter().map(|def| &def.id).find(|id| *id != other)
    }

    /// Draws one color id uniformly at random.
    pub fn random_color<R: Rng>(&self, rng: &mut R) -> ColorId {
        let index = rng.gen_range(0..self.colors.len());
        self.colors[index].id.clone()
    }
}

/// The default palette definition: red, green and blue.
pub fn default_colors() -> Vec<ColorDef> {
    vec![
        ColorDef::new("r", "red"),
        ColorDef::new("g", "green"),
        ColorDef::new("b", "blue"),
    ]
}
