use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rental_property_analyzer::{
    app::{self, AppError},
    config::{self, DEFAULT_CONFIG_PATH},
    i18n::{self, keys, Translator},
    property::RawPropertyInput,
    report,
    service::{PropertyService, ServiceError},
    store::{JsonFileStore, PropertyRecord},
    telemetry,
};

/// 임대 부동산 매물의 투자 지표(Cap rate, 현금흐름, 가치평가 등)를 계산한다.
#[derive(Debug, Parser)]
#[command(name = "rental_property_analyzer", version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 표시 언어 (auto / ko / en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// 분석 레코드 저장 파일 (설정값보다 우선)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// debug 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// JSON 입력 파일을 분석한다 (`-`이면 표준입력)
    Analyze {
        input: PathBuf,
        /// 결과를 저장소에 저장
        #[arg(long)]
        save: bool,
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 저장된 분석 목록 (최근 생성 순)
    List {
        #[arg(long)]
        json: bool,
    },
    /// 저장된 분석 하나를 표시한다 (ID 앞자리 가능)
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// 저장된 분석의 입력을 교체하고 다시 계산한다
    Update {
        id: String,
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// 저장된 분석을 삭제한다
    Delete { id: String },
    /// 기본값으로 채운 입력 JSON을 출력한다
    Template,
    /// 대화형 메뉴 (기본)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);
    let fallback = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", fallback.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cfg.locales_dir.as_deref());
    let store_path = cli.store.clone().unwrap_or_else(|| cfg.store_path.clone());
    let mut service = PropertyService::new(JsonFileStore::new(store_path));

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Analyze { input, save, json } => {
            let raw = read_raw(&input)?;
            if save {
                let record = reject_as_json(service.create(&raw), json)?;
                print_record(&record, json, &tr)?;
            } else {
                let (input, metrics) = reject_as_json(service.preview(&raw), json)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&metrics)?);
                } else {
                    print!("{}", report::detail(&input, &metrics, &tr));
                }
            }
        }
        Command::List { json } => {
            let records = service.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", report::list(&records, &tr));
            }
        }
        Command::Show { id, json } => {
            let record = resolve(&service, &id)?;
            print_record(&record, json, &tr)?;
        }
        Command::Update { id, input, json } => {
            let target = resolve(&service, &id)?;
            let raw = read_raw(&input)?;
            let record = reject_as_json(service.update(target.id, &raw), json)?;
            print_record(&record, json, &tr)?;
        }
        Command::Delete { id } => {
            let target = resolve(&service, &id)?;
            service.delete(target.id)?;
            println!("{} {}", tr.t(keys::RESULT_DELETED), target.input.address);
        }
        Command::Template => {
            println!("{}", serde_json::to_string_pretty(&cfg.defaults)?);
        }
        Command::Interactive => {
            app::run(&mut cfg, &cli.config, tr, &mut service)?;
        }
    }
    Ok(())
}

fn read_raw(path: &Path) -> Result<RawPropertyInput, AppError> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(RawPropertyInput::from_json_str(&content)?)
}

/// JSON 모드에서는 검증 오류를 `{"error", "field", "rule"}` 형태로 표준출력에도 남긴다.
fn reject_as_json<T>(result: Result<T, ServiceError>, json: bool) -> Result<T, AppError> {
    if let (Err(ServiceError::Validation(err)), true) = (&result, json) {
        println!("{}", serde_json::to_string_pretty(err)?);
    }
    Ok(result?)
}

fn resolve(
    service: &PropertyService<JsonFileStore>,
    id: &str,
) -> Result<PropertyRecord, AppError> {
    service
        .find_by_prefix(id)?
        .ok_or_else(|| AppError::UnknownId(id.to_string()))
}

fn print_record(record: &PropertyRecord, json: bool, tr: &Translator) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record.id);
        print!(
            "{}",
            report::detail(&record.input, &record.calculated_metrics, tr)
        );
    }
    Ok(())
}
