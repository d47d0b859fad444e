//! 폼과 유도 엔진을 잇는 Calculate/Clear 처리기.

use log::{debug, info};

use crate::conversion::ConversionError;
use crate::derivation::{self, DerivationRequest, DerivationResult, SecondaryUpdate};
use crate::form::Form;
use crate::quantity::{Classification, Quantity};

/// 모든 행의 값을 기준 단위로 읽는다.
pub fn read_canonical_values<F: Form + ?Sized>(form: &F) -> Result<[f64; 5], ConversionError> {
    let mut values = [0.0; 5];
    for q in Quantity::ALL {
        values[q.index()] = form.canonical_value(q)?;
    }
    Ok(values)
}

/// "Calculate" 버튼 처리. `target`이 `None`이면 강조만 초기화한다.
///
/// 폼의 값을 읽어 계산한 뒤 새 값·부수 갱신·행 강조를 폼에 기록하고,
/// 계산 결과를 그대로 돌려준다. 입력이 부족한 경우는 오류가 아니라
/// missing 강조로만 나타난다.
pub fn calculate<F: Form + ?Sized>(
    form: &mut F,
    target: Option<Quantity>,
) -> Result<DerivationResult, ConversionError> {
    let values = read_canonical_values(form)?;
    let request = DerivationRequest::new(target, values);
    let result = derivation::derive(&request);
    apply(form, &result)?;
    Ok(result)
}

/// 계산 결과를 폼에 반영한다.
pub fn apply<F: Form + ?Sized>(form: &mut F, result: &DerivationResult) -> Result<(), ConversionError> {
    for q in Quantity::ALL {
        form.set_classification(q, Classification::Neutral);
    }
    let Some(target) = result.target else {
        return Ok(());
    };

    if result.clear_target {
        form.clear_value(target);
    }
    if let Some(value) = result.new_value {
        form.set_value(target, value)?;
    }
    for update in &result.secondary {
        match *update {
            SecondaryUpdate::Set(q, value) => form.set_value(q, value)?,
            SecondaryUpdate::Clear(q) => form.clear_value(q),
        }
    }

    for q in Quantity::ALL {
        let class = result.classification(q);
        if class != Classification::Neutral {
            form.set_classification(q, class);
        }
    }
    debug!(
        "applied {target}: used={:?} missing={:?}",
        result.used.iter().collect::<Vec<_>>(),
        result.missing.iter().collect::<Vec<_>>()
    );
    Ok(())
}

/// "Clear" 버튼 처리. 모든 입력칸을 비우고 강조를 초기화한다.
pub fn clear<F: Form + ?Sized>(form: &mut F) {
    for q in Quantity::ALL {
        form.clear_value(q);
        form.set_classification(q, Classification::Neutral);
    }
    info!("form cleared");
}
