//! 폼 추상화: 계산기 엔진이 입력칸을 읽고 쓰는 인터페이스와 메모리 내 구현.

use crate::conversion::{self, ConversionError};
use crate::quantity::{Classification, Quantity};
use crate::units;

/// 계산기가 다루는 폼. GUI/CLI가 각자 구현하거나 [`FormState`]를 그대로 쓴다.
pub trait Form {
    /// 행의 입력 문자열과 선택된 단위 라벨.
    fn raw_value(&self, q: Quantity) -> (String, String);

    /// 기준 단위 값을 행의 현재 단위로 환산해 입력칸에 기록한다.
    fn set_value(&mut self, q: Quantity, canonical: f64) -> Result<(), ConversionError>;

    /// 입력칸을 비운다.
    fn clear_value(&mut self, q: Quantity);

    /// 행 라벨의 강조 상태를 바꾼다.
    fn set_classification(&mut self, q: Quantity, class: Classification);

    /// 행의 값을 기준 단위로 읽는다. 비었거나 숫자가 아니면 0이다.
    fn canonical_value(&self, q: Quantity) -> Result<f64, ConversionError> {
        let (text, unit) = self.raw_value(q);
        conversion::to_canonical(q, &unit, parse_raw_text(&text))
    }
}

/// 입력 문자열을 숫자로 해석한다. 비었거나 해석할 수 없거나 유한하지 않으면 0.
pub fn parse_raw_text(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 값을 입력칸 문자열로 만든다.
///
/// 소수점 이하 `precision` 자리 고정소수점으로 쓰되, 그 자리수로는 0으로
/// 보일 만큼 작은 값은 지수 표기로 쓴다.
pub fn format_value(value: f64, precision: usize) -> String {
    let threshold = 10f64.powi(-(precision as i32));
    if value != 0.0 && value.abs() < threshold {
        format!("{value:.prec$e}", prec = precision)
    } else {
        format!("{value:.prec$}", prec = precision)
    }
}

/// 폼의 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub quantity: Quantity,
    pub text: String,
    pub unit: String,
    pub classification: Classification,
}

impl Row {
    pub fn new(quantity: Quantity, unit: &str) -> Self {
        Self {
            quantity,
            text: String::new(),
            unit: unit.to_string(),
            classification: Classification::Neutral,
        }
    }
}

/// 다섯 행을 소유하는 메모리 내 폼.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    rows: [Row; 5],
    precision: usize,
}

/// 기본 표시 자리수 (소수점 이하).
pub const DEFAULT_PRECISION: usize = 6;

impl Default for FormState {
    fn default() -> Self {
        Self::with_units(|q| units::default_unit(q).to_string(), DEFAULT_PRECISION)
    }
}

impl FormState {
    /// 행별 초기 단위와 표시 자리수를 지정해 폼을 만든다.
    pub fn with_units<F>(unit_for: F, precision: usize) -> Self
    where
        F: Fn(Quantity) -> String,
    {
        let rows = Quantity::ALL.map(|q| Row::new(q, &unit_for(q)));
        Self { rows, precision }
    }

    pub fn row(&self, q: Quantity) -> &Row {
        &self.rows[q.index()]
    }

    pub fn row_mut(&mut self, q: Quantity) -> &mut Row {
        &mut self.rows[q.index()]
    }

    pub fn rows(&self) -> &[Row; 5] {
        &self.rows
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// 행에 문자열을 그대로 입력한다 (사용자 타이핑).
    pub fn set_text(&mut self, q: Quantity, text: &str) {
        self.row_mut(q).text = text.to_string();
    }

    /// 행의 단위를 바꾼다. 입력된 문자열은 그대로 두고 라벨은 정식 라벨로 맞춘다.
    pub fn select_unit(&mut self, q: Quantity, unit: &str) -> Result<(), ConversionError> {
        let label = conversion::normalize_unit(q, unit)?;
        self.row_mut(q).unit = label.to_string();
        Ok(())
    }
}

impl Form for FormState {
    fn raw_value(&self, q: Quantity) -> (String, String) {
        let row = self.row(q);
        (row.text.clone(), row.unit.clone())
    }

    fn set_value(&mut self, q: Quantity, canonical: f64) -> Result<(), ConversionError> {
        let precision = self.precision;
        let row = self.row_mut(q);
        let display = conversion::from_canonical(q, &row.unit, canonical)?;
        row.text = format_value(display, precision);
        Ok(())
    }

    fn clear_value(&mut self, q: Quantity) {
        self.row_mut(q).text.clear();
    }

    fn set_classification(&mut self, q: Quantity, class: Classification) {
        self.row_mut(q).classification = class;
    }
}
