use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use molarity_calculator::{app, config, i18n, logging, quantity::Quantity, ui_cli};

/// 몰농도 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "molarity_calculator_cli", version, about = "Mass / molar mass / moles / volume / molarity calculator")]
struct Cli {
    /// 표시 언어 (auto, en, ko)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,

    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_PATH)]
    config: PathBuf,

    /// 디버그 로그 출력
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 주어진 값으로 한 행을 계산하고 폼을 출력한다
    Solve(SolveArgs),
    /// 사용 가능한 단위 목록
    Units,
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// 계산할 행 (mass, molar_mass, moles, volume, molarity)
    #[arg(long, short, value_parser = parse_quantity)]
    target: Quantity,
    /// 질량 (예: "10 g")
    #[arg(long)]
    mass: Option<String>,
    /// 몰질량 (예: "58.44 g/mol")
    #[arg(long)]
    molar_mass: Option<String>,
    /// 몰수 (예: "5 mmol")
    #[arg(long)]
    moles: Option<String>,
    /// 부피 (예: "250 mL")
    #[arg(long)]
    volume: Option<String>,
    /// 몰농도 (예: "0.1 M")
    #[arg(long)]
    molarity: Option<String>,
}

impl SolveArgs {
    fn inputs(&self) -> Vec<(Quantity, String)> {
        [
            (Quantity::Mass, &self.mass),
            (Quantity::MolarMass, &self.molar_mass),
            (Quantity::Moles, &self.moles),
            (Quantity::Volume, &self.volume),
            (Quantity::Molarity, &self.molarity),
        ]
        .into_iter()
        .filter_map(|(q, v)| v.clone().map(|v| (q, v)))
        .collect()
    }
}

fn parse_quantity(s: &str) -> Result<Quantity, String> {
    Quantity::parse(s).ok_or_else(|| format!("unknown quantity: {s}"))
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let cfg = config::load_or_create(&cli.config)?;
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        cfg.log_filter()?
    };
    logging::init(level);

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let mut form = cfg.new_form();

    match cli.command {
        Some(Command::Solve(args)) => {
            let result = app::solve(&mut form, args.target, &args.inputs())?;
            log::debug!("canonical values: {}", app::describe_canonical(&form));
            ui_cli::print_form(&form, &tr);
            ui_cli::print_outcome(&result, &tr);
        }
        Some(Command::Units) => ui_cli::print_units(&tr),
        None => app::run(&mut form, &tr)?,
    }
    Ok(())
}
