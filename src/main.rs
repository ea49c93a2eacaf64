//! 命令行入口：加载词表 → 精简 → 落盘
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rspatmin::processor::PatternReducer;
use rspatmin::report;
use rspatmin::source;
use rspatmin::PatminResult;

#[derive(Parser, Debug)]
#[command(name = "rspatmin", version, about = "Blocklist pattern set minimizer")]
struct Args {
    /// 词表根目录（每个版本一个数字子目录）
    #[arg(long, default_value = "./romfs")]
    romfs: PathBuf,

    /// 要精简的词表版本，缺省取最新版本
    #[arg(long)]
    version: Option<u32>,

    /// 输出产物标签，结果写到 output/badwords_<label>.txt
    #[arg(long, default_value = "switch")]
    label: String,

    /// 输出目录
    #[arg(long, default_value = "./output")]
    output: PathBuf,

    /// 额外输出全量词表的 JSON 报告
    #[arg(long)]
    json: bool,

    /// 额外输出全量词表的 wiki 表格报告
    #[arg(long)]
    wiki: bool,
}

fn run(args: &Args) -> PatminResult<()> {
    let version = match args.version {
        Some(v) => v,
        None => source::latest_version(&args.romfs)?,
    };
    log::info!("Minimizing word list version {version}");

    let words = source::load_version(&args.romfs, version)?;
    let outcome = PatternReducer::new().reduce_words(&words)?;

    let out_path = args
        .output
        .join(format!("badwords_{}.txt", args.label));
    report::write_minimized(&outcome.surviving, &out_path)?;
    log::info!(
        "Wrote {} patterns to {}",
        outcome.surviving.len(),
        out_path.display()
    );

    if args.json || args.wiki {
        let all_words = source::load_all(&args.romfs)?;
        if args.json {
            report::write_json(&all_words, &args.output.join("badwords.json"))?;
        }
        if args.wiki {
            report::write_wiki(&all_words, &args.output.join("wiki.txt"))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
