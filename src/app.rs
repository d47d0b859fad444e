use thiserror::Error;

use crate::calculator;
use crate::config::ConfigError;
use crate::conversion::{self, ConversionError};
use crate::derivation::DerivationResult;
use crate::form::{FormState, Form};
use crate::i18n::{self, Translator};
use crate::quantity::Quantity;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// 명령행 값 인자 오류
    #[error("invalid value for {quantity}: {input:?}")]
    InvalidValue { quantity: Quantity, input: String },
}

/// `"10 g"`, `"10g"`, `"10"` 형태의 값 인자를 숫자와 단위로 나눈다.
///
/// 단위를 생략하면 `None`이며 행의 현재 단위를 그대로 쓴다. 단위는 정식
/// 라벨로 정규화된다.
pub fn parse_value_arg(
    quantity: Quantity,
    input: &str,
) -> Result<(f64, Option<&'static str>), AppError> {
    let s = input.trim();
    let invalid = || AppError::InvalidValue {
        quantity,
        input: input.to_string(),
    };
    let split = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .filter(|&end| s[..end].trim().parse::<f64>().is_ok())
        .last()
        .ok_or_else(invalid)?;
    let value: f64 = s[..split].trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    let unit = s[split..].trim();
    if unit.is_empty() {
        Ok((value, None))
    } else {
        Ok((value, Some(conversion::normalize_unit(quantity, unit)?)))
    }
}

/// 명령행에서 받은 값들을 폼에 채운 뒤 `target` 행을 계산한다.
pub fn solve(
    form: &mut FormState,
    target: Quantity,
    inputs: &[(Quantity, String)],
) -> Result<DerivationResult, AppError> {
    for (q, raw) in inputs {
        let (value, unit) = parse_value_arg(*q, raw)?;
        if let Some(unit) = unit {
            form.select_unit(*q, unit)?;
        }
        form.set_text(*q, &value.to_string());
    }
    let result = calculator::calculate(form, Some(target))?;
    Ok(result)
}

/// CLI 대화형 모드의 메인 루프를 실행한다.
pub fn run(form: &mut FormState, tr: &Translator) -> Result<(), AppError> {
    loop {
        ui_cli::print_form(form, tr);
        match ui_cli::main_menu(tr)? {
            MenuChoice::EnterValue => ui_cli::handle_enter_value(form, tr)?,
            MenuChoice::SelectUnit => ui_cli::handle_select_unit(form, tr)?,
            MenuChoice::Calculate => ui_cli::handle_calculate(form, tr)?,
            MenuChoice::Clear => calculator::clear(form),
            MenuChoice::Help => println!("{}", tr.t(i18n::keys::INSTRUCTIONS)),
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 폼의 값을 기준 단위로 요약한다 (디버그 로그용).
pub fn describe_canonical(form: &FormState) -> String {
    Quantity::ALL
        .iter()
        .map(|&q| {
            let v = form.canonical_value(q).unwrap_or(0.0);
            format!("{q}={v} {}", q.canonical_unit())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
