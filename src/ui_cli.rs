use std::io::{self, Write};

use crate::app::AppError;
use crate::calculator;
use crate::derivation::DerivationResult;
use crate::form::FormState;
use crate::i18n::{keys, Translator};
use crate::quantity::{Classification, Quantity};
use crate::units;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterValue,
    SelectUnit,
    Calculate,
    Clear,
    Help,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_ENTER_VALUE,
        keys::MAIN_MENU_SELECT_UNIT,
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_CLEAR,
        keys::MAIN_MENU_HELP,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EnterValue),
            "2" => return Ok(MenuChoice::SelectUnit),
            "3" => return Ok(MenuChoice::Calculate),
            "4" => return Ok(MenuChoice::Clear),
            "5" => return Ok(MenuChoice::Help),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 값 입력 메뉴. 빈 입력은 칸을 비운다.
pub fn handle_enter_value(form: &mut FormState, tr: &Translator) -> Result<(), AppError> {
    let q = read_row(tr)?;
    let text = read_line(&tr.t(keys::PROMPT_VALUE))?;
    form.set_text(q, text.trim());
    Ok(())
}

/// 단위 선택 메뉴. 해당 행의 단위 목록을 번호로 보여준다.
pub fn handle_select_unit(form: &mut FormState, tr: &Translator) -> Result<(), AppError> {
    let q = read_row(tr)?;
    let entries = units::units_for(q);
    let options = entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}={}", i + 1, e.label))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{options}");
    let sel = read_line(&tr.t(keys::PROMPT_UNIT))?;
    let sel = sel.trim();
    let label = match sel.parse::<usize>() {
        Ok(n) if (1..=entries.len()).contains(&n) => entries[n - 1].label,
        _ => sel,
    };
    if let Err(e) = form.select_unit(q, label) {
        println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
    }
    Ok(())
}

/// 계산 메뉴.
pub fn handle_calculate(form: &mut FormState, tr: &Translator) -> Result<(), AppError> {
    let q = read_row(tr)?;
    let result = calculator::calculate(form, Some(q))?;
    print_outcome(&result, tr);
    Ok(())
}

/// 계산 결과 요약(사용한 식 또는 입력 부족 안내)을 출력한다.
pub fn print_outcome(result: &DerivationResult, tr: &Translator) {
    match result.branch {
        Some(formula) => println!("{} {formula}", tr.t(keys::RESULT_FORMULA)),
        None => println!("{}", tr.t(keys::RESULT_INSUFFICIENT)),
    }
}

/// 폼을 표 형태로 출력한다. 강조 상태는 괄호 표기로 보여준다.
pub fn print_form(form: &FormState, tr: &Translator) {
    println!();
    for (i, row) in form.rows().iter().enumerate() {
        let line = format_row(
            i + 1,
            &tr.quantity(row.quantity),
            &row.text,
            &row.unit,
            &marker(row.classification, tr),
        );
        println!("{line}");
    }
}

fn format_row(n: usize, header: &str, text: &str, unit: &str, mark: &str) -> String {
    format!("{n}) {header:>12} | {text:>16} {unit:<11}{mark}")
}

fn marker(class: Classification, tr: &Translator) -> String {
    match class {
        Classification::Neutral => String::new(),
        _ => format!("[{}]", tr.classification(class)),
    }
}

/// 레지스트리 전체를 출력한다 (`units` 하위 명령).
pub fn print_units(tr: &Translator) {
    println!("{}", tr.t(keys::UNITS_HEADING));
    for q in Quantity::ALL {
        let list = units::units_for(q)
            .iter()
            .map(|e| format!("{} (x{})", e.label, e.scale))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:>12}: {list}", tr.quantity(q));
    }
}

fn read_row(tr: &Translator) -> Result<Quantity, AppError> {
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_ROW))?;
        let parsed = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Quantity::from_index)
            .or_else(|| Quantity::parse(&sel));
        match parsed {
            Some(q) => return Ok(q),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}
