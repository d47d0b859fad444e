use serde::{Deserialize, Serialize};

/// 계산기가 다루는 다섯 가지 물리량. 순서(index)는 폼의 행 순서와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Mass,
    MolarMass,
    Moles,
    Volume,
    Molarity,
}

impl Quantity {
    /// 행 순서대로 나열한 전체 물리량.
    pub const ALL: [Quantity; 5] = [
        Quantity::Mass,
        Quantity::MolarMass,
        Quantity::Moles,
        Quantity::Volume,
        Quantity::Molarity,
    ];

    pub fn index(self) -> usize {
        match self {
            Quantity::Mass => 0,
            Quantity::MolarMass => 1,
            Quantity::Moles => 2,
            Quantity::Volume => 3,
            Quantity::Molarity => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Quantity> {
        Self::ALL.get(index).copied()
    }

    /// 다음 행의 물리량. 마지막 행(Molarity)은 첫 행(Mass)으로 돌아간다.
    pub fn next(self) -> Quantity {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 내부 기준 단위 라벨 (g, /g/mol, mol, L, M).
    pub fn canonical_unit(self) -> &'static str {
        match self {
            Quantity::Mass => "grams",
            Quantity::MolarMass => "/g/mol",
            Quantity::Moles => "mol",
            Quantity::Volume => "L",
            Quantity::Molarity => "M",
        }
    }

    /// CLI 인자/설정 파일에서 쓰는 이름을 해석한다.
    pub fn parse(s: &str) -> Option<Quantity> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "mass" | "m" => Some(Quantity::Mass),
            "molar_mass" | "molarmass" | "mw" => Some(Quantity::MolarMass),
            "moles" | "mole" | "mol" | "n" => Some(Quantity::Moles),
            "volume" | "vol" | "v" => Some(Quantity::Volume),
            "molarity" | "concentration" | "conc" | "c" => Some(Quantity::Molarity),
            _ => None,
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Quantity::Mass => "mass",
            Quantity::MolarMass => "molar_mass",
            Quantity::Moles => "moles",
            Quantity::Volume => "volume",
            Quantity::Molarity => "molarity",
        };
        f.write_str(name)
    }
}

/// 물리량의 부분집합. 행 강조 대상(used/missing/result)을 표현한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantitySet {
    members: [bool; 5],
}

impl QuantitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(quantities: &[Quantity]) -> Self {
        let mut set = Self::empty();
        for &q in quantities {
            set.insert(q);
        }
        set
    }

    pub fn insert(&mut self, q: Quantity) {
        self.members[q.index()] = true;
    }

    pub fn remove(&mut self, q: Quantity) {
        self.members[q.index()] = false;
    }

    pub fn contains(&self, q: Quantity) -> bool {
        self.members[q.index()]
    }

    pub fn contains_all(&self, quantities: &[Quantity]) -> bool {
        quantities.iter().all(|&q| self.contains(q))
    }

    pub fn is_empty(&self) -> bool {
        !self.members.iter().any(|&m| m)
    }

    pub fn len(&self) -> usize {
        self.members.iter().filter(|&&m| m).count()
    }

    pub fn intersection(&self, other: &QuantitySet) -> QuantitySet {
        let mut out = QuantitySet::empty();
        for q in Quantity::ALL {
            if self.contains(q) && other.contains(q) {
                out.insert(q);
            }
        }
        out
    }

    pub fn complement(&self) -> QuantitySet {
        let mut out = QuantitySet::empty();
        for q in Quantity::ALL {
            if !self.contains(q) {
                out.insert(q);
            }
        }
        out
    }

    pub fn is_disjoint(&self, other: &QuantitySet) -> bool {
        self.intersection(other).is_empty()
    }

    /// 행 순서대로 포함된 물리량을 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        Quantity::ALL.into_iter().filter(|&q| self.contains(q))
    }
}

/// 행 라벨의 표시 상태.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Classification {
    /// 일반 글꼴, 검정
    #[default]
    Neutral,
    /// 계산에 사용됨 (굵게, 짙은 녹색)
    Used,
    /// 계산에 필요하지만 비어 있음 (굵게, 빨강)
    Missing,
    /// 계산 결과 (굵게, 파랑)
    Result,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first_row() {
        assert_eq!(Quantity::Mass.next(), Quantity::MolarMass);
        assert_eq!(Quantity::Volume.next(), Quantity::Molarity);
        assert_eq!(Quantity::Molarity.next(), Quantity::Mass);
    }

    #[test]
    fn index_roundtrip_matches_row_order() {
        for (i, q) in Quantity::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
            assert_eq!(Quantity::from_index(i), Some(*q));
        }
        assert_eq!(Quantity::from_index(5), None);
    }

    #[test]
    fn parse_accepts_display_names() {
        for q in Quantity::ALL {
            assert_eq!(Quantity::parse(&q.to_string()), Some(q));
        }
        assert_eq!(Quantity::parse("Molar mass"), Some(Quantity::MolarMass));
        assert_eq!(Quantity::parse("density"), None);
    }

    #[test]
    fn set_operations() {
        let a = QuantitySet::of(&[Quantity::Mass, Quantity::Moles]);
        let b = QuantitySet::of(&[Quantity::Moles, Quantity::Volume]);
        assert_eq!(a.intersection(&b), QuantitySet::of(&[Quantity::Moles]));
        assert_eq!(a.complement().len(), 3);
        assert!(!a.is_disjoint(&b));
        assert!(a.contains_all(&[Quantity::Mass, Quantity::Moles]));
        assert_eq!(
            a.iter().collect::<Vec<_>>(),
            vec![Quantity::Mass, Quantity::Moles]
        );
    }
}
