//! 질량·몰질량·몰수·부피·몰농도 관계식의 유도 엔진.
//!
//! mass = moles × molar_mass, moles = volume × molarity 두 식만 다룬다.
//! 요청된 행마다 정해진 우선순위의 분기를 차례로 검사해 처음 성립하는
//! 분기로 값을 구하고, 각 행을 used/missing/result/neutral로 분류한다.
//! 모든 값은 기준 단위(g, /g/mol, mol, L, M)이며 0.0은 "비어 있음"이다.

use log::debug;

use crate::quantity::Quantity::{Mass, MolarMass, Molarity, Moles, Volume};
use crate::quantity::{Classification, Quantity, QuantitySet};

/// 유도 요청. 값 배열은 `Quantity::index()` 순서다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationRequest {
    /// 계산할 행. `None`이면 강조만 초기화한다.
    pub target: Option<Quantity>,
    pub values: [f64; 5],
}

impl DerivationRequest {
    pub fn new(target: Option<Quantity>, values: [f64; 5]) -> Self {
        Self { target, values }
    }

    pub fn value(&self, q: Quantity) -> f64 {
        self.values[q.index()]
    }

    /// 요청된 행이 계산 전에 가지고 있던 값.
    pub fn current(&self) -> f64 {
        self.target.map(|t| self.value(t)).unwrap_or(0.0)
    }
}

/// 주 계산의 부산물로 다른 행에 적용할 갱신.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SecondaryUpdate {
    /// 기준 단위 값을 기록한다.
    Set(Quantity, f64),
    /// 입력칸을 비운다.
    Clear(Quantity),
}

/// 한 번의 계산이 폼에 남길 상태 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivationResult {
    pub target: Option<Quantity>,
    /// 요청 행에 이미 값이 있어 먼저 비워야 하는지 여부
    pub clear_target: bool,
    /// 요청 행의 새 값. 입력이 부족하면 `None`.
    pub new_value: Option<f64>,
    pub secondary: Vec<SecondaryUpdate>,
    pub used: QuantitySet,
    pub missing: QuantitySet,
    pub result: QuantitySet,
    /// 사용된 분기 이름 (로그/CLI 출력용)
    pub branch: Option<&'static str>,
}

impl DerivationResult {
    fn reset() -> Self {
        Self {
            target: None,
            clear_target: false,
            new_value: None,
            secondary: Vec::new(),
            used: QuantitySet::empty(),
            missing: QuantitySet::empty(),
            result: QuantitySet::empty(),
            branch: None,
        }
    }

    /// 행의 최종 표시 상태. result가 used/missing보다 우선한다.
    pub fn classification(&self, q: Quantity) -> Classification {
        if self.result.contains(q) {
            Classification::Result
        } else if self.used.contains(q) {
            Classification::Used
        } else if self.missing.contains(q) {
            Classification::Missing
        } else {
            Classification::Neutral
        }
    }

    /// 새 값이 계산되었는지 여부.
    pub fn is_solved(&self) -> bool {
        self.new_value.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct Inputs {
    mass: f64,
    molar_mass: f64,
    moles: f64,
    volume: f64,
    molarity: f64,
}

impl Inputs {
    fn from_values(values: &[f64; 5]) -> Self {
        Self {
            mass: values[Quantity::Mass.index()],
            molar_mass: values[Quantity::MolarMass.index()],
            moles: values[Quantity::Moles.index()],
            volume: values[Quantity::Volume.index()],
            molarity: values[Quantity::Molarity.index()],
        }
    }

    fn moles_from_solution(&self) -> f64 {
        self.volume * self.molarity
    }

    fn moles_from_mass(&self) -> f64 {
        self.mass / self.molar_mass
    }
}

#[derive(Clone, Copy)]
enum Secondary {
    None,
    Moles(fn(&Inputs) -> f64),
    ClearSolution,
}

struct Branch {
    target: Quantity,
    name: &'static str,
    /// 분기 성립 조건이자 used 강조 대상
    inputs: &'static [Quantity],
    value: fn(&Inputs) -> f64,
    secondary: Secondary,
    /// 관계식이 모두 채워져 누락 표시가 필요 없는 분기
    complete: bool,
}

// 같은 target 안에서는 선언 순서가 우선순위다.
const BRANCHES: [Branch; 10] = [
    Branch {
        target: Mass,
        name: "mass = volume * molarity * molar_mass",
        inputs: &[MolarMass, Volume, Molarity],
        value: mass_from_solution,
        secondary: Secondary::Moles(Inputs::moles_from_solution),
        complete: true,
    },
    Branch {
        target: Mass,
        name: "mass = moles * molar_mass",
        inputs: &[MolarMass, Moles],
        value: mass_from_moles,
        secondary: Secondary::None,
        complete: false,
    },
    Branch {
        target: MolarMass,
        name: "molar_mass = mass / (volume * molarity)",
        inputs: &[Mass, Volume, Molarity],
        value: molar_mass_from_solution,
        secondary: Secondary::Moles(Inputs::moles_from_solution),
        complete: true,
    },
    Branch {
        target: MolarMass,
        name: "molar_mass = mass / moles",
        inputs: &[Moles, Mass],
        value: molar_mass_from_moles,
        secondary: Secondary::None,
        complete: false,
    },
    Branch {
        target: Moles,
        name: "moles = mass / molar_mass",
        inputs: &[MolarMass, Mass],
        value: Inputs::moles_from_mass,
        secondary: Secondary::ClearSolution,
        complete: true,
    },
    Branch {
        target: Moles,
        name: "moles = volume * molarity",
        inputs: &[Molarity, Volume],
        value: Inputs::moles_from_solution,
        secondary: Secondary::None,
        complete: false,
    },
    Branch {
        target: Volume,
        name: "volume = (mass / molar_mass) / molarity",
        inputs: &[Molarity, Mass, MolarMass],
        value: volume_from_mass,
        secondary: Secondary::Moles(Inputs::moles_from_mass),
        complete: true,
    },
    Branch {
        target: Volume,
        name: "volume = moles / molarity",
        inputs: &[Molarity, Moles],
        value: volume_from_moles,
        secondary: Secondary::None,
        complete: false,
    },
    Branch {
        target: Molarity,
        name: "molarity = (mass / molar_mass) / volume",
        inputs: &[Volume, Mass, MolarMass],
        value: molarity_from_mass,
        secondary: Secondary::Moles(Inputs::moles_from_mass),
        complete: true,
    },
    Branch {
        target: Molarity,
        name: "molarity = moles / volume",
        inputs: &[Volume, Moles],
        value: molarity_from_moles,
        secondary: Secondary::None,
        complete: false,
    },
];

fn mass_from_solution(v: &Inputs) -> f64 {
    v.volume * v.molarity * v.molar_mass
}

fn mass_from_moles(v: &Inputs) -> f64 {
    v.moles * v.molar_mass
}

fn molar_mass_from_solution(v: &Inputs) -> f64 {
    v.mass / (v.volume * v.molarity)
}

fn molar_mass_from_moles(v: &Inputs) -> f64 {
    v.mass / v.moles
}

fn volume_from_mass(v: &Inputs) -> f64 {
    v.moles_from_mass() / v.molarity
}

fn volume_from_moles(v: &Inputs) -> f64 {
    v.moles / v.molarity
}

fn molarity_from_mass(v: &Inputs) -> f64 {
    v.moles_from_mass() / v.volume
}

fn molarity_from_moles(v: &Inputs) -> f64 {
    v.moles / v.volume
}

/// 어떤 분기도 성립하지 않을 때 "필요" 표시할 입력 후보.
pub fn candidate_inputs(target: Quantity) -> QuantitySet {
    match target {
        Mass => QuantitySet::of(&[MolarMass, Volume, Molarity]),
        MolarMass => QuantitySet::of(&[Mass, Volume, Molarity]),
        Moles => QuantitySet::of(&[Mass, MolarMass, Volume, Molarity]),
        Volume => QuantitySet::of(&[Molarity, Mass, MolarMass]),
        Molarity => QuantitySet::of(&[Volume, Mass, MolarMass]),
    }
}

/// 두 분기가 모두 요구하는 입력. 몰수는 두 분기가 입력을 공유하지 않는다.
fn primary_input(target: Quantity) -> Option<Quantity> {
    match target {
        Mass => Some(MolarMass),
        MolarMass => Some(Mass),
        Moles => None,
        Volume => Some(Molarity),
        Molarity => Some(Volume),
    }
}

/// 요청된 행의 값을 유도하고 모든 행의 분류를 계산한다.
///
/// 요청 행에 이미 값이 있으면 그 값은 무시하고(`clear_target`) 나머지
/// 행만으로 다시 계산한다. 각 분기는 분모가 0이 아님을 확인한 뒤에만
/// 선택되므로 0으로 나누는 경우는 없다.
pub fn derive(request: &DerivationRequest) -> DerivationResult {
    let Some(target) = request.target else {
        debug!("reset request: all rows neutral");
        return DerivationResult::reset();
    };

    let mut present = QuantitySet::empty();
    for q in Quantity::ALL {
        if request.value(q) != 0.0 {
            present.insert(q);
        }
    }
    let clear_target = present.contains(target);
    present.remove(target);

    let mut used = present;
    let mut missing = present.complement();
    let inputs = Inputs::from_values(&request.values);

    let branch = BRANCHES
        .iter()
        .filter(|b| b.target == target)
        .find(|b| present.contains_all(b.inputs));

    let mut new_value = None;
    let mut secondary = Vec::new();
    match branch {
        Some(b) => {
            new_value = Some((b.value)(&inputs));
            match b.secondary {
                Secondary::None => {}
                Secondary::Moles(f) => secondary.push(SecondaryUpdate::Set(Moles, f(&inputs))),
                Secondary::ClearSolution => {
                    secondary.push(SecondaryUpdate::Clear(Volume));
                    secondary.push(SecondaryUpdate::Clear(Molarity));
                }
            }
            used = used.intersection(&QuantitySet::of(b.inputs));
            if b.complete {
                missing = QuantitySet::empty();
            }
            debug!("{target}: {} -> {:?}", b.name, new_value);
        }
        None => {
            // 주 입력부터 비어 있으면 후보 입력 중 빈 칸만 표시한다.
            if primary_input(target).is_some_and(|p| !present.contains(p)) {
                missing = missing.intersection(&candidate_inputs(target));
            }
            debug!("{target}: insufficient inputs, needs {:?}", missing.iter().collect::<Vec<_>>());
        }
    }

    used.remove(target);
    missing.remove(target);

    DerivationResult {
        target: Some(target),
        clear_target,
        new_value,
        secondary,
        used,
        missing,
        result: QuantitySet::of(&[target]),
        branch: branch.map(|b| b.name),
    }
}
