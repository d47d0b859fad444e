//! 유도 엔진의 분기 선택과 행 분류 테스트. 값은 모두 기준 단위다.
use approx::assert_relative_eq;
use molarity_calculator::derivation::{derive, DerivationRequest, SecondaryUpdate};
use molarity_calculator::quantity::{Classification, Quantity, QuantitySet};

use Quantity::*;

fn request(target: Quantity, pairs: &[(Quantity, f64)]) -> DerivationRequest {
    let mut values = [0.0; 5];
    for &(q, v) in pairs {
        values[q.index()] = v;
    }
    DerivationRequest::new(Some(target), values)
}

#[test]
fn moles_from_mass_clears_solution_side() {
    let res = derive(&request(Moles, &[(Mass, 10.0), (MolarMass, 2.0)]));
    assert_relative_eq!(res.new_value.unwrap(), 5.0);
    assert_eq!(
        res.secondary,
        vec![SecondaryUpdate::Clear(Volume), SecondaryUpdate::Clear(Molarity)]
    );
    assert_eq!(res.used, QuantitySet::of(&[Mass, MolarMass]));
    assert!(res.missing.is_empty());
    assert_eq!(res.classification(Moles), Classification::Result);
}

#[test]
fn moles_from_volume_and_molarity() {
    let res = derive(&request(Moles, &[(Volume, 2.0), (Molarity, 3.0)]));
    assert_relative_eq!(res.new_value.unwrap(), 6.0);
    assert!(res.secondary.is_empty());
    assert_eq!(res.used, QuantitySet::of(&[Volume, Molarity]));
    // 비어 있는 질량 쪽은 빨간색으로 남는다.
    assert_eq!(res.missing, QuantitySet::of(&[Mass, MolarMass]));
}

#[test]
fn moles_prefers_mass_branch_when_both_available() {
    let res = derive(&request(
        Moles,
        &[(Mass, 10.0), (MolarMass, 2.0), (Volume, 1.0), (Molarity, 1.0)],
    ));
    assert_relative_eq!(res.new_value.unwrap(), 5.0);
    assert_eq!(res.classification(Volume), Classification::Neutral);
}

#[test]
fn molarity_from_mass_molar_mass_and_volume() {
    let res = derive(&request(Molarity, &[(Mass, 10.0), (MolarMass, 2.0), (Volume, 1.0)]));
    assert_relative_eq!(res.new_value.unwrap(), 5.0);
    assert_eq!(res.secondary, vec![SecondaryUpdate::Set(Moles, 5.0)]);
    assert_eq!(res.used, QuantitySet::of(&[Mass, MolarMass, Volume]));
    assert!(res.missing.is_empty());
}

#[test]
fn molarity_from_moles_highlights_moles_and_volume() {
    let res = derive(&request(Molarity, &[(Moles, 0.5), (Volume, 0.25)]));
    assert_relative_eq!(res.new_value.unwrap(), 2.0);
    assert_eq!(res.used, QuantitySet::of(&[Moles, Volume]));
    assert_eq!(res.classification(Mass), Classification::Missing);
}

#[test]
fn molarity_with_only_volume_flags_absent_rows() {
    let res = derive(&request(Molarity, &[(Volume, 1.0)]));
    assert!(res.new_value.is_none());
    assert!(res.branch.is_none());
    // 부피가 있으므로 나머지 빈 칸이 모두 후보가 된다.
    assert_eq!(res.classification(Volume), Classification::Used);
    assert_eq!(res.classification(Mass), Classification::Missing);
    assert_eq!(res.classification(MolarMass), Classification::Missing);
    assert_eq!(res.classification(Moles), Classification::Missing);
    assert_eq!(res.classification(Molarity), Classification::Result);
}

#[test]
fn mass_from_solution_updates_moles() {
    let res = derive(&request(Mass, &[(MolarMass, 58.44), (Volume, 0.5), (Molarity, 0.2)]));
    assert_relative_eq!(res.new_value.unwrap(), 0.5 * 0.2 * 58.44, max_relative = 1e-12);
    assert_eq!(res.secondary, vec![SecondaryUpdate::Set(Moles, 0.1)]);
    assert!(res.missing.is_empty());
}

#[test]
fn mass_from_moles_keeps_absent_fields_red() {
    let res = derive(&request(Mass, &[(MolarMass, 2.0), (Moles, 3.0)]));
    assert_relative_eq!(res.new_value.unwrap(), 6.0);
    assert_eq!(res.used, QuantitySet::of(&[MolarMass, Moles]));
    assert_eq!(res.missing, QuantitySet::of(&[Volume, Molarity]));
}

#[test]
fn mass_without_molar_mass_flags_only_molar_mass() {
    let res = derive(&request(Mass, &[(Moles, 3.0), (Volume, 1.0), (Molarity, 3.0)]));
    assert!(res.new_value.is_none());
    assert_eq!(res.missing, QuantitySet::of(&[MolarMass]));
    assert_eq!(res.used, QuantitySet::of(&[Moles, Volume, Molarity]));
}

#[test]
fn mass_with_molar_mass_but_no_amount_flags_every_absent_row() {
    let res = derive(&request(Mass, &[(MolarMass, 2.0), (Volume, 1.0)]));
    assert!(res.new_value.is_none());
    assert_eq!(res.classification(Moles), Classification::Missing);
    assert_eq!(res.classification(Molarity), Classification::Missing);
    assert_eq!(res.classification(MolarMass), Classification::Used);
    assert_eq!(res.classification(Volume), Classification::Used);
}

#[test]
fn filled_rows_are_never_flagged_missing() {
    for bits in 0u32..32 {
        let pairs: Vec<(Quantity, f64)> = Quantity::ALL
            .into_iter()
            .filter(|q| bits & (1 << q.index()) != 0)
            .map(|q| (q, 1.5))
            .collect();
        for target in Quantity::ALL {
            let res = derive(&request(target, &pairs));
            for &(q, _) in &pairs {
                assert!(!res.missing.contains(q), "bits={bits:05b} target={target} row={q}");
            }
        }
    }
}

#[test]
fn molar_mass_is_mass_over_moles_from_solution() {
    let res = derive(&request(MolarMass, &[(Mass, 11.688), (Volume, 0.5), (Molarity, 0.4)]));
    assert_relative_eq!(res.new_value.unwrap(), 58.44, max_relative = 1e-12);
    assert_eq!(res.secondary, vec![SecondaryUpdate::Set(Moles, 0.2)]);
}

#[test]
fn molar_mass_from_mass_and_moles() {
    let res = derive(&request(MolarMass, &[(Mass, 9.0), (Moles, 0.5)]));
    assert_relative_eq!(res.new_value.unwrap(), 18.0);
    assert_eq!(res.used, QuantitySet::of(&[Mass, Moles]));
}

#[test]
fn volume_branches() {
    let three = derive(&request(Volume, &[(Mass, 4.0), (MolarMass, 2.0), (Molarity, 0.5)]));
    assert_relative_eq!(three.new_value.unwrap(), 4.0);
    assert_eq!(three.secondary, vec![SecondaryUpdate::Set(Moles, 2.0)]);

    let two = derive(&request(Volume, &[(Moles, 1.0), (Molarity, 4.0)]));
    assert_relative_eq!(two.new_value.unwrap(), 0.25);
    assert_eq!(two.used, QuantitySet::of(&[Moles, Molarity]));
}

#[test]
fn existing_target_value_is_ignored_and_flagged_for_clearing() {
    let res = derive(&request(Mass, &[(Mass, 99.0), (MolarMass, 2.0), (Moles, 3.0)]));
    assert!(res.clear_target);
    assert_relative_eq!(res.new_value.unwrap(), 6.0);
    assert!(!res.used.contains(Mass));
    assert!(!res.missing.contains(Mass));
}

#[test]
fn insufficient_target_with_value_is_still_cleared() {
    let res = derive(&request(Volume, &[(Volume, 1.0)]));
    assert!(res.clear_target);
    assert!(res.new_value.is_none());
}
