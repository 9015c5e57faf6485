use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four fixed dimensions the assessment measures.
///
/// Variant order is the enumeration order used everywhere a pillar sequence
/// matters: display, tally iteration, and tie-breaking for the lowest pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pillar {
    Focus,
    Leadership,
    Opportunity,
    Worth,
}

/// Presentation hints for a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarStyle {
    /// Single glyph shown next to the pillar name.
    pub glyph: &'static str,
    /// Accent colour as a hex string.
    pub accent: &'static str,
    /// Terminal colour name (`blue`, `magenta`, ...).
    pub terminal: &'static str,
}

static PILLAR_STYLES: [PillarStyle; 4] = [
    PillarStyle { glyph: "◎", accent: "#2563eb", terminal: "blue" },
    PillarStyle { glyph: "▲", accent: "#7c3aed", terminal: "magenta" },
    PillarStyle { glyph: "✦", accent: "#059669", terminal: "green" },
    PillarStyle { glyph: "◆", accent: "#d97706", terminal: "yellow" },
];

impl Pillar {
    /// All pillars in enumeration order.
    pub const ALL: [Pillar; 4] = [
        Pillar::Focus,
        Pillar::Leadership,
        Pillar::Opportunity,
        Pillar::Worth,
    ];

    /// Position in [`Pillar::ALL`].
    pub fn index(self) -> usize {
        match self {
            Pillar::Focus => 0,
            Pillar::Leadership => 1,
            Pillar::Opportunity => 2,
            Pillar::Worth => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pillar::Focus => "Focus",
            Pillar::Leadership => "Leadership",
            Pillar::Opportunity => "Opportunity",
            Pillar::Worth => "Worth",
        }
    }

    pub fn style(self) -> &'static PillarStyle {
        &PILLAR_STYLES[self.index()]
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pillar::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown pillar: {s}"))
    }
}
