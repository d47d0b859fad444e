//! 단위 정의 및 단위 레지스트리.

pub mod mass;
pub mod molar_mass;
pub mod molarity;
pub mod moles;
pub mod volume;

pub use mass::{convert_mass, MassUnit};
pub use molar_mass::{convert_molar_mass, MolarMassUnit};
pub use molarity::{convert_molarity, MolarityUnit};
pub use moles::{convert_moles, MolesUnit};
pub use volume::{convert_volume, VolumeUnit};

use crate::quantity::Quantity;

/// 레지스트리 항목: 표시 라벨과 기준 단위로의 환산 배율.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub label: &'static str,
    pub scale: f64,
}

macro_rules! entries {
    ($unit:ty) => {
        <$unit>::ALL
            .iter()
            .map(|u| UnitEntry {
                label: u.label(),
                scale: u.scale(),
            })
            .collect()
    };
}

/// 물리량별 단위 목록을 선언 순서대로 반환한다.
pub fn units_for(quantity: Quantity) -> Vec<UnitEntry> {
    match quantity {
        Quantity::Mass => entries!(MassUnit),
        Quantity::MolarMass => entries!(MolarMassUnit),
        Quantity::Moles => entries!(MolesUnit),
        Quantity::Volume => entries!(VolumeUnit),
        Quantity::Molarity => entries!(MolarityUnit),
    }
}

/// 물리량의 기본 단위 라벨 (선언 순서의 첫 항목).
pub fn default_unit(quantity: Quantity) -> &'static str {
    match quantity {
        Quantity::Mass => MassUnit::ALL[0].label(),
        Quantity::MolarMass => MolarMassUnit::ALL[0].label(),
        Quantity::Moles => MolesUnit::ALL[0].label(),
        Quantity::Volume => VolumeUnit::ALL[0].label(),
        Quantity::Molarity => MolarityUnit::ALL[0].label(),
    }
}
