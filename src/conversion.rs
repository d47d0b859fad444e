use thiserror::Error;

use crate::quantity::Quantity;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 해당 물리량에 없는 단위 문자열
    #[error("unknown unit for {quantity}: {unit}")]
    UnknownUnit { quantity: Quantity, unit: String },
}

/// 단위 라벨의 기준 단위 환산 배율을 조회한다.
///
/// 라벨은 레지스트리의 정식 라벨(`milligrams`, `/g/mol`, `uL`, `mM` 등)과
/// 흔히 쓰는 약어(`mg`, `g/mol`, `µL`, `mol/L` 등)를 대소문자 구분 없이 받는다.
/// 몰농도 기호(`mM`, `uM`, `nM`, `pM`, `M`)만은 대소문자를 구분한다.
pub fn canonical_factor(quantity: Quantity, unit: &str) -> Result<f64, ConversionError> {
    let scale = match quantity {
        Quantity::Mass => parse_mass_unit(unit)?.scale(),
        Quantity::MolarMass => parse_molar_mass_unit(unit)?.scale(),
        Quantity::Moles => parse_moles_unit(unit)?.scale(),
        Quantity::Volume => parse_volume_unit(unit)?.scale(),
        Quantity::Molarity => parse_molarity_unit(unit)?.scale(),
    };
    Ok(scale)
}

/// 표시 단위 값을 기준 단위 값으로 환산한다.
pub fn to_canonical(quantity: Quantity, unit: &str, value: f64) -> Result<f64, ConversionError> {
    Ok(value * canonical_factor(quantity, unit)?)
}

/// 기준 단위 값을 표시 단위 값으로 환산한다.
pub fn from_canonical(
    quantity: Quantity,
    unit: &str,
    canonical: f64,
) -> Result<f64, ConversionError> {
    Ok(canonical / canonical_factor(quantity, unit)?)
}

/// 같은 물리량의 두 단위 사이에서 값을 환산한다.
pub fn convert(
    quantity: Quantity,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    match quantity {
        Quantity::Mass => {
            let from = parse_mass_unit(from_unit)?;
            let to = parse_mass_unit(to_unit)?;
            Ok(convert_mass(value, from, to))
        }
        Quantity::MolarMass => {
            let from = parse_molar_mass_unit(from_unit)?;
            let to = parse_molar_mass_unit(to_unit)?;
            Ok(convert_molar_mass(value, from, to))
        }
        Quantity::Moles => {
            let from = parse_moles_unit(from_unit)?;
            let to = parse_moles_unit(to_unit)?;
            Ok(convert_moles(value, from, to))
        }
        Quantity::Volume => {
            let from = parse_volume_unit(from_unit)?;
            let to = parse_volume_unit(to_unit)?;
            Ok(convert_volume(value, from, to))
        }
        Quantity::Molarity => {
            let from = parse_molarity_unit(from_unit)?;
            let to = parse_molarity_unit(to_unit)?;
            Ok(convert_molarity(value, from, to))
        }
    }
}

/// 별칭을 정식 라벨로 바꾼다. 알 수 없으면 오류.
pub fn normalize_unit(quantity: Quantity, unit: &str) -> Result<&'static str, ConversionError> {
    let label = match quantity {
        Quantity::Mass => parse_mass_unit(unit)?.label(),
        Quantity::MolarMass => parse_molar_mass_unit(unit)?.label(),
        Quantity::Moles => parse_moles_unit(unit)?.label(),
        Quantity::Volume => parse_volume_unit(unit)?.label(),
        Quantity::Molarity => parse_molarity_unit(unit)?.label(),
    };
    Ok(label)
}

fn unknown(quantity: Quantity, s: &str) -> ConversionError {
    log::warn!("unknown {quantity} unit: {s:?}");
    ConversionError::UnknownUnit {
        quantity,
        unit: s.to_string(),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "milligrams" | "milligram" | "mg" => Ok(MassUnit::Milligram),
        "micrograms" | "microgram" | "ug" | "µg" | "μg" => Ok(MassUnit::Microgram),
        "nanograms" | "nanogram" | "ng" => Ok(MassUnit::Nanogram),
        "grams" | "gram" | "g" => Ok(MassUnit::Gram),
        "kilograms" | "kilogram" | "kg" => Ok(MassUnit::Kilogram),
        _ => Err(unknown(Quantity::Mass, s)),
    }
}

fn parse_molar_mass_unit(s: &str) -> Result<MolarMassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "/g/mol" | "g/mol" => Ok(MolarMassUnit::GramPerMole),
        "/mg/mol" | "mg/mol" => Ok(MolarMassUnit::MilligramPerMole),
        "/g/mmol" | "g/mmol" => Ok(MolarMassUnit::GramPerMillimole),
        _ => Err(unknown(Quantity::MolarMass, s)),
    }
}

fn parse_moles_unit(s: &str) -> Result<MolesUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mol" | "mole" | "moles" => Ok(MolesUnit::Mole),
        "mmol" | "millimole" | "millimoles" => Ok(MolesUnit::Millimole),
        "umol" | "µmol" | "μmol" | "micromole" | "micromoles" => Ok(MolesUnit::Micromole),
        _ => Err(unknown(Quantity::Moles, s)),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ml" | "milliliter" | "millilitre" => Ok(VolumeUnit::Milliliter),
        "ul" | "µl" | "μl" | "microliter" | "microlitre" => Ok(VolumeUnit::Microliter),
        "nl" | "nanoliter" | "nanolitre" => Ok(VolumeUnit::Nanoliter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        _ => Err(unknown(Quantity::Volume, s)),
    }
}

fn parse_molarity_unit(s: &str) -> Result<MolarityUnit, ConversionError> {
    // 기호는 대소문자로 접두어를 구분하므로 그대로 비교한다 (mM != MM).
    let t = s.trim();
    match t {
        "mM" => return Ok(MolarityUnit::Millimolar),
        "uM" | "µM" | "μM" => return Ok(MolarityUnit::Micromolar),
        "nM" => return Ok(MolarityUnit::Nanomolar),
        "pM" => return Ok(MolarityUnit::Picomolar),
        "M" => return Ok(MolarityUnit::Molar),
        _ => {}
    }
    match t.to_lowercase().as_str() {
        "mmol/l" | "millimolar" => Ok(MolarityUnit::Millimolar),
        "umol/l" | "µmol/l" | "μmol/l" | "micromolar" => Ok(MolarityUnit::Micromolar),
        "nmol/l" | "nanomolar" => Ok(MolarityUnit::Nanomolar),
        "pmol/l" | "picomolar" => Ok(MolarityUnit::Picomolar),
        "mol/l" | "molar" => Ok(MolarityUnit::Molar),
        _ => Err(unknown(Quantity::Molarity, s)),
    }
}
