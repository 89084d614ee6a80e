use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::art::{fields, flow, shapes, structure};
use crate::error::GenerationError;

macro_rules! style_enum {
    ($($value:ident($name:literal)),* $(,)?) => {
        /// One of the fixed procedural generation algorithms.
        #[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Style {
            $($value),*
        }
        impl Style {
            /// Every style, in canonical listing order.
            pub const ALL: &'static [Style] = &[$(Style::$value),*];

            /// The snake_case identifier callers use to select this style.
            pub fn name(self) -> &'static str {
                match self {
                    $(Style::$value => $name),*
                }
            }
        }
    };
}

style_enum!(
    GeometricMinimalist("geometric_minimalist"),
    OrganicFlow("organic_flow"),
    VoidExploration("void_exploration"),
    SpectralFragmentation("spectral_fragmentation"),
    RecursivePatterns("recursive_patterns"),
    DimensionalWeaving("dimensional_weaving"),
    SymbolicLanguage("symbolic_language"),
    FrequencyVisualization("frequency_visualization"),
    LogicalStructures("logical_structures"),
    GenerativeGrowth("generative_growth"),
    EncodedAesthetics("encoded_aesthetics"),
    AmbientFields("ambient_fields"),
    NetworkTopology("network_topology"),
    PureAbsence("pure_absence"),
    SpiralDynamics("spiral_dynamics"),
);

impl Style {
    /// Number of primary elements this style draws at `complexity`, for styles whose density
    /// scales with it. Styles with a fixed composition return `None`.
    pub fn element_count(self, complexity: f64) -> Option<usize> {
        use Style::*;
        let count = match self {
            GeometricMinimalist => shapes::GEOMETRIC_SHAPES.count(complexity),
            OrganicFlow => flow::ORGANIC_LINES.count(complexity),
            VoidExploration => fields::VOID_DOTS.count(complexity),
            SpectralFragmentation => shapes::SPECTRAL_TRIANGLES.count(complexity),
            SymbolicLanguage => shapes::SYMBOLIC_GLYPHS.count(complexity),
            FrequencyVisualization => flow::FREQUENCY_WAVES.count(complexity),
            LogicalStructures => structure::LOGICAL_DIVISIONS.count(complexity).pow(2),
            GenerativeGrowth => structure::GROWTH_ROOTS.count(complexity),
            NetworkTopology => structure::NETWORK_NODES.count(complexity),
            SpiralDynamics => flow::SPIRALS.count(complexity),
            RecursivePatterns | DimensionalWeaving | EncodedAesthetics | AmbientFields
            | PureAbsence => return None,
        };
        Some(count)
    }

    /// Fewest palette colors this style can draw with. The hue-swept style ignores the palette.
    pub fn min_palette_len(self) -> usize {
        use Style::*;
        match self {
            SpectralFragmentation => 0,
            DimensionalWeaving | EncodedAesthetics | NetworkTopology => 2,
            _ => 1,
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = GenerationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| GenerationError::UnknownStyle(s.to_owned()))
    }
}

impl TryFrom<String> for Style {
    type Error = GenerationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Style> for &'static str {
    fn from(style: Style) -> Self {
        style.name()
    }
}
