use serde::{Deserialize, Serialize};

/// 몰질량 단위. 내부 기준은 /g/mol이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MolarMassUnit {
    GramPerMole,
    MilligramPerMole,
    GramPerMillimole,
}

impl MolarMassUnit {
    pub const ALL: [MolarMassUnit; 3] = [
        MolarMassUnit::GramPerMole,
        MolarMassUnit::MilligramPerMole,
        MolarMassUnit::GramPerMillimole,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MolarMassUnit::GramPerMole => "/g/mol",
            MolarMassUnit::MilligramPerMole => "/mg/mol",
            MolarMassUnit::GramPerMillimole => "/g/mmol",
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            MolarMassUnit::GramPerMole => 1.0,
            MolarMassUnit::MilligramPerMole => 1e-3,
            MolarMassUnit::GramPerMillimole => 1e3,
        }
    }
}

/// 몰질량을 변환한다.
pub fn convert_molar_mass(value: f64, from: MolarMassUnit, to: MolarMassUnit) -> f64 {
    value * from.scale() / to.scale()
}
