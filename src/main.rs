use std::path::PathBuf;

use clap::{Parser, Subcommand};
use evaporator_toolbox::geometry::RawInput;
use evaporator_toolbox::ui_cli::{self, CalcReport};
use evaporator_toolbox::{app, config, logging};

/// 증발기 기하 계산 CLI.
#[derive(Debug, Parser)]
#[command(name = "evaporator_toolbox_cli", version, about = "Расчёт испарителя")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번 계산하고 결과 패널을 출력한다. 입력이 불완전하면 아무것도 출력하지 않는다.
    Calc {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        diameter: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        height: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        tube_count: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        tube_length: String,
    },
    /// 참고표와 추가 정보를 출력한다.
    Reference {
        /// 추가 정보 항목 하나만 출력 (types, materials, norms)
        #[arg(long)]
        section: Option<String>,
    },
    /// 도식과 기술 파라미터를 출력한다.
    Schemes,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Ошибка: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (mut cfg, origin) = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log_filter);
    origin.log(&cli.config);
    match cli.command {
        None => app::run(&mut cfg, &cli.config)?,
        Some(Command::Calc {
            diameter,
            height,
            tube_count,
            tube_length,
        }) => {
            let raw = RawInput::new(diameter, height, tube_count, tube_length);
            match ui_cli::one_shot_calc(&cfg, &raw) {
                CalcReport::Panel(text) => print!("{text}"),
                CalcReport::Diagnostic(msg) => eprintln!("{msg}"),
                CalcReport::Silent => {}
            }
        }
        Some(Command::Reference { section: None }) => ui_cli::handle_reference(),
        Some(Command::Reference { section: Some(id) }) => ui_cli::handle_reference_section(&id)?,
        Some(Command::Schemes) => ui_cli::handle_schemes(),
    }
    Ok(())
}
