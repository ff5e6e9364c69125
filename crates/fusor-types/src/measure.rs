use serde::{Deserialize, Serialize};

/// Extremal-vertex query against a built solid.
///
/// R is the cylindrical radius from the machine axis (the Z axis every
/// solid is revolved about or stacked along), so `LargestR` on a torus
/// is its outboard edge and `HighestZ` its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VertexQuery {
    HighestZ,
    LowestZ,
    LargestR,
    SmallestR,
}

/// Dependent-parameter rule: an affine function of one geometric query
/// against one other shape in the same assembly.
///
/// Evaluates to `scale * query(source) + offset` at the moment the
/// dependent shape is built; the source must already be built by then.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureRule {
    /// Name of the shape the query runs against.
    pub source: String,
    pub query: VertexQuery,
    pub scale: f64,
    pub offset: f64,
}

impl MeasureRule {
    pub fn new(source: impl Into<String>, query: VertexQuery) -> Self {
        Self {
            source: source.into(),
            query,
            scale: 1.0,
            offset: 0.0,
        }
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn shifted(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Applies the affine part of the rule to a raw query result.
    pub fn evaluate(&self, raw: f64) -> f64 {
        self.scale * raw + self.offset
    }
}

/// A dimension that is either given literally or measured from another
/// shape once that shape has been built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Dim {
    Literal { value: f64 },
    Measured { rule: MeasureRule },
}

impl Dim {
    pub fn literal(value: f64) -> Self {
        Dim::Literal { value }
    }

    pub fn measured(rule: MeasureRule) -> Self {
        Dim::Measured { rule }
    }

    /// The measurement rule, if this dimension is derived.
    pub fn rule(&self) -> Option<&MeasureRule> {
        match self {
            Dim::Literal { .. } => None,
            Dim::Measured { rule } => Some(rule),
        }
    }

    /// The literal value, if this dimension is not derived.
    pub fn literal_value(&self) -> Option<f64> {
        match self {
            Dim::Literal { value } => Some(*value),
            Dim::Measured { .. } => None,
        }
    }
}
