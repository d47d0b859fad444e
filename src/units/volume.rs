use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 L이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Microliter,
    Nanoliter,
    Liter,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 4] = [
        VolumeUnit::Milliliter,
        VolumeUnit::Microliter,
        VolumeUnit::Nanoliter,
        VolumeUnit::Liter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Microliter => "uL",
            VolumeUnit::Nanoliter => "nL",
            VolumeUnit::Liter => "L",
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 1e-3,
            VolumeUnit::Microliter => 1e-6,
            VolumeUnit::Nanoliter => 1e-9,
            VolumeUnit::Liter => 1.0,
        }
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    value * from.scale() / to.scale()
}
