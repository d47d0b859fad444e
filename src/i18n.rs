use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::quantity::{Classification, Quantity};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const ROW_MASS: &str = "row.mass";
    pub const ROW_MOLAR_MASS: &str = "row.molar_mass";
    pub const ROW_MOLES: &str = "row.moles";
    pub const ROW_VOLUME: &str = "row.volume";
    pub const ROW_MOLARITY: &str = "row.molarity";

    pub const BUTTON_CALCULATE: &str = "button.calculate";
    pub const BUTTON_CLEAR: &str = "button.clear";
    pub const INSTRUCTIONS: &str = "help.instructions";

    pub const CLASS_USED: &str = "class.used";
    pub const CLASS_MISSING: &str = "class.missing";
    pub const CLASS_RESULT: &str = "class.result";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ENTER_VALUE: &str = "main_menu.enter_value";
    pub const MAIN_MENU_SELECT_UNIT: &str = "main_menu.select_unit";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_CLEAR: &str = "main_menu.clear";
    pub const MAIN_MENU_HELP: &str = "main_menu.help";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_ROW: &str = "prompt.row";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const RESULT_FORMULA: &str = "result.formula";
    pub const RESULT_INSUFFICIENT: &str = "result.insufficient";
    pub const UNITS_HEADING: &str = "units.heading";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에도 내장 문자열에도 없으면 키 자체.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        builtin.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// 행 머리글.
    pub fn quantity(&self, q: Quantity) -> String {
        self.t(match q {
            Quantity::Mass => keys::ROW_MASS,
            Quantity::MolarMass => keys::ROW_MOLAR_MASS,
            Quantity::Moles => keys::ROW_MOLES,
            Quantity::Volume => keys::ROW_VOLUME,
            Quantity::Molarity => keys::ROW_MOLARITY,
        })
    }

    /// 강조 상태 이름. neutral은 빈 문자열.
    pub fn classification(&self, class: Classification) -> String {
        match class {
            Classification::Neutral => String::new(),
            Classification::Used => self.t(keys::CLASS_USED),
            Classification::Missing => self.t(keys::CLASS_MISSING),
            Classification::Result => self.t(keys::CLASS_RESULT),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_some() {
        log::info!("loaded language pack {}", path.display());
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "몰농도 계산기",
        ROW_MASS => "질량",
        ROW_MOLAR_MASS => "몰질량",
        ROW_MOLES => "몰수",
        ROW_VOLUME => "부피",
        ROW_MOLARITY => "몰농도",
        BUTTON_CALCULATE => "계산",
        BUTTON_CLEAR => "지우기 (Ctrl+D)",
        INSTRUCTIONS => {
            "각 행의 계산 버튼을 누르면 필요한 칸이 빨간색으로 표시됩니다.\n\
             계산에 사용된 칸은 녹색으로 표시됩니다.\n\
             계산된 칸은 파란색으로 표시됩니다.\n\
             엔터 키로 입력칸을 차례로 이동합니다.\n\
             Ctrl+엔터로 현재 칸을 계산합니다."
        }
        CLASS_USED => "사용",
        CLASS_MISSING => "필요",
        CLASS_RESULT => "결과",
        MAIN_MENU_TITLE => "\n=== 몰농도 계산기 ===",
        MAIN_MENU_ENTER_VALUE => "1) 값 입력",
        MAIN_MENU_SELECT_UNIT => "2) 단위 선택",
        MAIN_MENU_CALCULATE => "3) 계산",
        MAIN_MENU_CLEAR => "4) 지우기",
        MAIN_MENU_HELP => "5) 도움말",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_ROW => "행 번호 (1-5): ",
        PROMPT_VALUE => "값 (비우려면 엔터): ",
        PROMPT_UNIT => "단위: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        RESULT_FORMULA => "사용한 식:",
        RESULT_INSUFFICIENT => "입력이 부족합니다. '필요'로 표시된 칸을 채우세요.",
        UNITS_HEADING => "사용 가능한 단위",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "Molarity Calculator",
        ROW_MASS => "Mass",
        ROW_MOLAR_MASS => "Molar mass",
        ROW_MOLES => "Moles",
        ROW_VOLUME => "Volume",
        ROW_MOLARITY => "Molarity",
        BUTTON_CALCULATE => "Calculate",
        BUTTON_CLEAR => "Clear (Ctrl+D)",
        INSTRUCTIONS => {
            "Click calculate on each row to see required fields in red.\n\
             Fields used for calculation are shown in green.\n\
             Calculated field is shown in blue.\n\
             Use return key to cycle between input fields.\n\
             Ctrl+return to calculate current field."
        }
        CLASS_USED => "used",
        CLASS_MISSING => "needed",
        CLASS_RESULT => "result",
        MAIN_MENU_TITLE => "\n=== Molarity Calculator ===",
        MAIN_MENU_ENTER_VALUE => "1) Enter value",
        MAIN_MENU_SELECT_UNIT => "2) Select unit",
        MAIN_MENU_CALCULATE => "3) Calculate",
        MAIN_MENU_CLEAR => "4) Clear",
        MAIN_MENU_HELP => "5) Help",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_ROW => "Row (1-5): ",
        PROMPT_VALUE => "Value (enter to clear): ",
        PROMPT_UNIT => "Unit: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        RESULT_FORMULA => "Formula:",
        RESULT_INSUFFICIENT => "Not enough inputs; fill the fields marked as needed.",
        UNITS_HEADING => "Available units",
        _ => return None,
    })
}
