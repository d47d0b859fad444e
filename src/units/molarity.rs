use serde::{Deserialize, Serialize};

/// 몰농도 단위. 내부 기준은 M(mol/L)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MolarityUnit {
    Millimolar,
    Micromolar,
    Nanomolar,
    Picomolar,
    Molar,
}

impl MolarityUnit {
    pub const ALL: [MolarityUnit; 5] = [
        MolarityUnit::Millimolar,
        MolarityUnit::Micromolar,
        MolarityUnit::Nanomolar,
        MolarityUnit::Picomolar,
        MolarityUnit::Molar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MolarityUnit::Millimolar => "mM",
            MolarityUnit::Micromolar => "uM",
            MolarityUnit::Nanomolar => "nM",
            MolarityUnit::Picomolar => "pM",
            MolarityUnit::Molar => "M",
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            MolarityUnit::Millimolar => 1e-3,
            MolarityUnit::Micromolar => 1e-6,
            MolarityUnit::Nanomolar => 1e-9,
            MolarityUnit::Picomolar => 1e-12,
            MolarityUnit::Molar => 1.0,
        }
    }
}

/// 몰농도를 변환한다.
pub fn convert_molarity(value: f64, from: MolarityUnit, to: MolarityUnit) -> f64 {
    value * from.scale() / to.scale()
}
