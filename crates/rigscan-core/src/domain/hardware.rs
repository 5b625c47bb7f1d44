//! Closed hardware catalogs and the `SystemSpecs` aggregate.
//!
//! Downstream recommendation logic indexes on these values, so nothing in
//! here carries free text: every raw measurement is coerced into one of a
//! small fixed set of tags or tiers before it reaches `SystemSpecs`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// CPU catalog tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuTag {
    #[serde(rename = "i9-14900K")]
    I9_14900K,
    #[serde(rename = "i7-14700K")]
    I7_14700K,
    #[serde(rename = "i5-14600K")]
    I5_14600K,
    #[serde(rename = "r9-7950X")]
    R9_7950X,
    #[serde(rename = "r7-7700X")]
    R7_7700X,
    #[serde(rename = "r5-7600X")]
    R5_7600X,
}

impl CpuTag {
    /// Used when nothing about the CPU could be determined.
    pub const DEFAULT: Self = Self::I5_14600K;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I9_14900K => "i9-14900K",
            Self::I7_14700K => "i7-14700K",
            Self::I5_14600K => "i5-14600K",
            Self::R9_7950X => "r9-7950X",
            Self::R7_7700X => "r7-7700X",
            Self::R5_7600X => "r5-7600X",
        }
    }
}

impl fmt::Display for CpuTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GPU catalog tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuTag {
    Rtx4090,
    Rtx4080,
    Rtx4070,
    Rtx4060,
    Rx7900xt,
    Rx7800xt,
    Rx7700xt,
    Rx7600,
}

impl GpuTag {
    /// Mid-tier default for missing contexts and unrecognised renderers.
    pub const DEFAULT: Self = Self::Rtx4070;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rtx4090 => "rtx4090",
            Self::Rtx4080 => "rtx4080",
            Self::Rtx4070 => "rtx4070",
            Self::Rtx4060 => "rtx4060",
            Self::Rx7900xt => "rx7900xt",
            Self::Rx7800xt => "rx7800xt",
            Self::Rx7700xt => "rx7700xt",
            Self::Rx7600 => "rx7600",
        }
    }
}

impl fmt::Display for GpuTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported RAM tier in gigabytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum RamTier {
    Gb16,
    Gb32,
    Gb64,
    Gb128,
}

impl RamTier {
    pub const ALL: [Self; 4] = [Self::Gb16, Self::Gb32, Self::Gb64, Self::Gb128];

    pub const fn gigabytes(self) -> u32 {
        match self {
            Self::Gb16 => 16,
            Self::Gb32 => 32,
            Self::Gb64 => 64,
            Self::Gb128 => 128,
        }
    }

    /// Snap a raw gigabyte figure to the closest tier.
    ///
    /// Equidistant values resolve to the lower tier.
    pub fn nearest(gb: u32) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|tier| tier.gigabytes().abs_diff(gb))
            .unwrap_or(Self::Gb16)
    }
}

impl From<RamTier> for u32 {
    fn from(tier: RamTier) -> Self {
        tier.gigabytes()
    }
}

impl TryFrom<u32> for RamTier {
    type Error = String;

    fn try_from(gb: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.gigabytes() == gb)
            .ok_or_else(|| format!("{gb} GB is not a supported RAM tier"))
    }
}

/// Supported display refresh rate in hertz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum RefreshRate {
    Hz60,
    Hz144,
    Hz165,
    Hz240,
    Hz360,
}

impl RefreshRate {
    pub const ALL: [Self; 5] = [
        Self::Hz60,
        Self::Hz144,
        Self::Hz165,
        Self::Hz240,
        Self::Hz360,
    ];

    pub const fn hertz(self) -> u32 {
        match self {
            Self::Hz60 => 60,
            Self::Hz144 => 144,
            Self::Hz165 => 165,
            Self::Hz240 => 240,
            Self::Hz360 => 360,
        }
    }

    /// Snap a measured rate down to the highest tier it reaches.
    ///
    /// Anything below 144 Hz (including zero) reports as 60 Hz.
    pub const fn snap(hz: u32) -> Self {
        if hz >= 360 {
            Self::Hz360
        } else if hz >= 240 {
            Self::Hz240
        } else if hz >= 165 {
            Self::Hz165
        } else if hz >= 144 {
            Self::Hz144
        } else {
            Self::Hz60
        }
    }
}

impl From<RefreshRate> for u32 {
    fn from(rate: RefreshRate) -> Self {
        rate.hertz()
    }
}

impl TryFrom<u32> for RefreshRate {
    type Error = String;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|rate| rate.hertz() == hz)
            .ok_or_else(|| format!("{hz} Hz is not a supported refresh rate"))
    }
}

/// Supported display resolution bucket, rendered as `"WxH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Resolution {
    Fhd,
    Qhd,
    Uhd,
}

impl Resolution {
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Fhd => (1920, 1080),
            Self::Qhd => (2560, 1440),
            Self::Uhd => (3840, 2160),
        }
    }

    /// Bucket a physical pixel width by minimum-width thresholds.
    pub const fn from_width(width: u32) -> Self {
        if width >= 3840 {
            Self::Uhd
        } else if width >= 2560 {
            Self::Qhd
        } else {
            Self::Fhd
        }
    }

    /// Parse a `"WxH"` string and bucket it by width.
    ///
    /// Heights are not validated; ultrawide panels bucket by width alone.
    pub fn parse_bucketed(raw: &str) -> Option<Self> {
        let (width, _height) = raw.trim().split_once(['x', 'X', '×'])?;
        let width: u32 = width.trim().parse().ok()?;
        Some(Self::from_width(width))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{width}x{height}")
    }
}

impl From<Resolution> for String {
    fn from(resolution: Resolution) -> Self {
        resolution.to_string()
    }
}

impl TryFrom<String> for Resolution {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        [Self::Fhd, Self::Qhd, Self::Uhd]
            .into_iter()
            .find(|resolution| resolution.to_string() == raw)
            .ok_or_else(|| format!("{raw} is not a supported resolution"))
    }
}

/// Primary display characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSpecs {
    pub resolution: Resolution,
    pub refresh_rate_hz: RefreshRate,
    pub hdr: bool,
}

impl Default for MonitorSpecs {
    fn default() -> Self {
        Self {
            resolution: Resolution::Fhd,
            refresh_rate_hz: RefreshRate::Hz60,
            hdr: false,
        }
    }
}

/// Best-effort description of the user's gaming hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSpecs {
    pub cpu: CpuTag,
    pub gpu: GpuTag,
    pub ram_gb: RamTier,
    pub storage: String,
    pub monitor: MonitorSpecs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_nearest_prefers_lower_on_tie() {
        assert_eq!(RamTier::nearest(48), RamTier::Gb32);
        assert_eq!(RamTier::nearest(49), RamTier::Gb64);
        assert_eq!(RamTier::nearest(0), RamTier::Gb16);
        assert_eq!(RamTier::nearest(96), RamTier::Gb64);
        assert_eq!(RamTier::nearest(500), RamTier::Gb128);
    }

    #[test]
    fn test_refresh_snap_thresholds() {
        assert_eq!(RefreshRate::snap(0), RefreshRate::Hz60);
        assert_eq!(RefreshRate::snap(143), RefreshRate::Hz60);
        assert_eq!(RefreshRate::snap(144), RefreshRate::Hz144);
        assert_eq!(RefreshRate::snap(164), RefreshRate::Hz144);
        assert_eq!(RefreshRate::snap(165), RefreshRate::Hz165);
        assert_eq!(RefreshRate::snap(239), RefreshRate::Hz165);
        assert_eq!(RefreshRate::snap(240), RefreshRate::Hz240);
        assert_eq!(RefreshRate::snap(1000), RefreshRate::Hz360);
    }

    #[test]
    fn test_resolution_buckets_by_width() {
        assert_eq!(Resolution::from_width(1366), Resolution::Fhd);
        assert_eq!(Resolution::from_width(2560), Resolution::Qhd);
        assert_eq!(Resolution::from_width(3440), Resolution::Qhd);
        assert_eq!(Resolution::from_width(5120), Resolution::Uhd);
        assert_eq!(Resolution::parse_bucketed("3840x2160"), Some(Resolution::Uhd));
        assert_eq!(Resolution::parse_bucketed("garbage"), None);
    }

    #[test]
    fn test_specs_serialize_to_catalog_values() {
        let specs = SystemSpecs {
            cpu: CpuTag::R7_7700X,
            gpu: GpuTag::Rx7800xt,
            ram_gb: RamTier::Gb32,
            storage: "nvme".to_string(),
            monitor: MonitorSpecs {
                resolution: Resolution::Qhd,
                refresh_rate_hz: RefreshRate::Hz165,
                hdr: true,
            },
        };

        let json = serde_json::to_value(&specs).unwrap();
        assert_eq!(json["cpu"], "r7-7700X");
        assert_eq!(json["gpu"], "rx7800xt");
        assert_eq!(json["ramGb"], 32);
        assert_eq!(json["monitor"]["resolution"], "2560x1440");
        assert_eq!(json["monitor"]["refreshRateHz"], 165);

        let back: SystemSpecs = serde_json::from_value(json).unwrap();
        assert_eq!(back, specs);
    }

    #[test]
    fn test_raw_values_outside_catalog_are_rejected() {
        assert!(serde_json::from_str::<RamTier>("24").is_err());
        assert!(serde_json::from_str::<RefreshRate>("75").is_err());
        assert!(serde_json::from_str::<Resolution>("\"1280x720\"").is_err());
    }
}
