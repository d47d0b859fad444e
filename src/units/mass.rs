use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 g이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Milligram,
    Microgram,
    Nanogram,
    Gram,
    Kilogram,
}

impl MassUnit {
    /// 선택 목록 순서. 첫 항목이 기본 단위다.
    pub const ALL: [MassUnit; 5] = [
        MassUnit::Milligram,
        MassUnit::Microgram,
        MassUnit::Nanogram,
        MassUnit::Gram,
        MassUnit::Kilogram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MassUnit::Milligram => "milligrams",
            MassUnit::Microgram => "micrograms",
            MassUnit::Nanogram => "nanograms",
            MassUnit::Gram => "grams",
            MassUnit::Kilogram => "kilograms",
        }
    }

    /// g으로 환산하는 배율.
    pub fn scale(self) -> f64 {
        match self {
            MassUnit::Milligram => 1e-3,
            MassUnit::Microgram => 1e-6,
            MassUnit::Nanogram => 1e-9,
            MassUnit::Gram => 1.0,
            MassUnit::Kilogram => 1e3,
        }
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    value * from.scale() / to.scale()
}
