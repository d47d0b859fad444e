//! 폼 + Calculate/Clear 처리기 통합 테스트.
use molarity_calculator::calculator;
use molarity_calculator::form::{Form, FormState};
use molarity_calculator::quantity::{Classification, Quantity};

use Quantity::*;

fn form_with(entries: &[(Quantity, &str, &str)]) -> FormState {
    let mut form = FormState::default();
    for &(q, text, unit) in entries {
        form.select_unit(q, unit).unwrap();
        form.set_text(q, text);
    }
    form
}

#[test]
fn moles_target_writes_value_and_clears_solution_rows() {
    let mut form = form_with(&[
        (Mass, "10", "grams"),
        (MolarMass, "2", "/g/mol"),
        (Volume, "100", "mL"),
        (Molarity, "7", "mM"),
    ]);
    calculator::calculate(&mut form, Some(Moles)).unwrap();
    assert_eq!(form.row(Moles).text, "5.000000");
    assert_eq!(form.row(Volume).text, "");
    assert_eq!(form.row(Molarity).text, "");
    assert_eq!(form.row(Mass).classification, Classification::Used);
    assert_eq!(form.row(MolarMass).classification, Classification::Used);
    assert_eq!(form.row(Moles).classification, Classification::Result);
    assert!(form
        .rows()
        .iter()
        .all(|r| r.classification != Classification::Missing));
}

#[test]
fn result_is_written_in_selected_display_unit() {
    let mut form = form_with(&[
        (Mass, "10", "grams"),
        (MolarMass, "2", "/g/mol"),
        (Volume, "1", "L"),
        (Molarity, "", "mM"),
        (Moles, "", "mmol"),
    ]);
    calculator::calculate(&mut form, Some(Molarity)).unwrap();
    // 5 M = 5000 mM, 부수 갱신 몰수 5 mol = 5000 mmol
    assert_eq!(form.row(Molarity).text, "5000.000000");
    assert_eq!(form.row(Moles).text, "5000.000000");
}

#[test]
fn recalculating_a_filled_row_reproduces_the_result() {
    let mut form = form_with(&[
        (Mass, "123", "grams"),
        (MolarMass, "2", "/g/mol"),
        (Moles, "3", "mol"),
    ]);
    calculator::calculate(&mut form, Some(Mass)).unwrap();
    assert_eq!(form.row(Mass).text, "6.000000");
    calculator::calculate(&mut form, Some(Mass)).unwrap();
    assert_eq!(form.row(Mass).text, "6.000000");
    assert_eq!(form.row(Mass).classification, Classification::Result);
}

#[test]
fn insufficient_inputs_blank_the_target() {
    let mut form = form_with(&[(Volume, "5", "L"), (Molarity, "9", "M")]);
    let res = calculator::calculate(&mut form, Some(Molarity)).unwrap();
    assert!(!res.is_solved());
    assert_eq!(form.row(Molarity).text, "");
    assert_eq!(form.row(Volume).classification, Classification::Used);
    assert_eq!(form.row(Mass).classification, Classification::Missing);
    assert_eq!(form.row(Moles).classification, Classification::Missing);
    assert_eq!(form.row(Molarity).classification, Classification::Result);
}

#[test]
fn unparseable_text_counts_as_absent() {
    let mut form = form_with(&[(Volume, "two", "L"), (Molarity, "3", "M")]);
    let res = calculator::calculate(&mut form, Some(Moles)).unwrap();
    assert!(!res.is_solved());
}

#[test]
fn reset_request_only_neutralises_highlights() {
    let mut form = form_with(&[(Volume, "2", "L"), (Molarity, "3", "M")]);
    calculator::calculate(&mut form, Some(Moles)).unwrap();
    calculator::calculate(&mut form, None).unwrap();
    assert_eq!(form.row(Moles).text, "6.000000");
    assert!(form
        .rows()
        .iter()
        .all(|r| r.classification == Classification::Neutral));
}

#[test]
fn clear_empties_every_row() {
    let mut form = form_with(&[(Volume, "2", "L"), (Molarity, "3", "M")]);
    calculator::calculate(&mut form, Some(Moles)).unwrap();
    calculator::clear(&mut form);
    for row in form.rows() {
        assert!(row.text.is_empty());
        assert_eq!(row.classification, Classification::Neutral);
    }
    // 단위 선택은 유지된다.
    assert_eq!(form.row(Volume).unit, "L");
}

#[test]
fn unknown_unit_aborts_before_touching_the_form() {
    let mut form = form_with(&[(Volume, "2", "L"), (Molarity, "3", "M")]);
    form.row_mut(Mass).unit = "stone".to_string();
    assert!(calculator::calculate(&mut form, Some(Moles)).is_err());
    assert_eq!(form.row(Moles).text, "");
    assert_eq!(form.row(Volume).classification, Classification::Neutral);
}

#[test]
fn canonical_value_reads_through_row_unit() {
    let form = form_with(&[(Volume, "250", "mL")]);
    assert!((form.canonical_value(Volume).unwrap() - 0.25).abs() < 1e-12);
}
