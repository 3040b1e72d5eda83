use std::str::FromStr;

use crate::errors::CoreError;

/// Cooldown length offered in the creation form.
///
/// The preset's millisecond value is copied onto the item at creation, so
/// documents written with a later-retired preset keep their original
/// cooldown length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaitPreset {
    /// 24 hours
    Hours24,
    /// 48 hours, the default
    Hours48,
    /// 72 hours
    Hours72,
    /// One week
    Week1,
    /// 30 days
    Days30,
}

impl WaitPreset {
    /// All presets, in the order the creation form lists them.
    pub const ALL: [WaitPreset; 5] = [
        WaitPreset::Hours24,
        WaitPreset::Hours48,
        WaitPreset::Hours72,
        WaitPreset::Week1,
        WaitPreset::Days30,
    ];

    /// Cooldown length in milliseconds.
    pub const fn duration_ms(self) -> i64 {
        match self {
            WaitPreset::Hours24 => 86_400_000,
            WaitPreset::Hours48 => 172_800_000,
            WaitPreset::Hours72 => 259_200_000,
            WaitPreset::Week1 => 604_800_000,
            WaitPreset::Days30 => 2_592_000_000,
        }
    }

    /// Short label shown on the preset buttons.
    pub const fn label(self) -> &'static str {
        match self {
            WaitPreset::Hours24 => "24h",
            WaitPreset::Hours48 => "48h",
            WaitPreset::Hours72 => "72h",
            WaitPreset::Week1 => "1wk",
            WaitPreset::Days30 => "30d",
        }
    }
}

impl Default for WaitPreset {
    fn default() -> Self {
        WaitPreset::Hours48
    }
}

impl std::fmt::Display for WaitPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WaitPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" => Ok(WaitPreset::Hours24),
            "48h" => Ok(WaitPreset::Hours48),
            "72h" => Ok(WaitPreset::Hours72),
            "1wk" => Ok(WaitPreset::Week1),
            "30d" => Ok(WaitPreset::Days30),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown wait preset '{other}' (expected one of: 24h, 48h, 72h, 1wk, 30d)"
            ))),
        }
    }
}
