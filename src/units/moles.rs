use serde::{Deserialize, Serialize};

/// 물질량 단위. 내부 기준은 mol이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MolesUnit {
    Mole,
    Millimole,
    Micromole,
}

impl MolesUnit {
    pub const ALL: [MolesUnit; 3] = [MolesUnit::Mole, MolesUnit::Millimole, MolesUnit::Micromole];

    pub fn label(self) -> &'static str {
        match self {
            MolesUnit::Mole => "mol",
            MolesUnit::Millimole => "mmol",
            MolesUnit::Micromole => "umol",
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            MolesUnit::Mole => 1.0,
            MolesUnit::Millimole => 1e-3,
            MolesUnit::Micromole => 1e-6,
        }
    }
}

/// 물질량을 변환한다.
pub fn convert_moles(value: f64, from: MolesUnit, to: MolesUnit) -> f64 {
    value * from.scale() / to.scale()
}
