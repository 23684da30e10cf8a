//! コマンドライン解析（clap ビルダー API）

use crate::screen::View;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// 解析済みのコマンドラインフラグ（ファイル設定とのマージ前）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// --once: raw モードに入らず 1 フレームを標準出力へ出す
    pub once: bool,
    /// -H / --offset-hours: 表示オフセットの時の初期値
    pub offset_hours: Option<i32>,
    /// -M / --offset-minutes: 表示オフセットの分の初期値
    pub offset_minutes: Option<i32>,
    /// -f / --fps: 再描画周期
    pub fps: Option<u32>,
    /// -V / --view: 起動時のビュー
    pub view: Option<View>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("tempo")
        .about("Terminal time dashboard: clock, stopwatch, calendar")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("once")
                .long("once")
                .help("Compose one frame to stdout and exit (no raw mode)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("offset-hours")
                .short('H')
                .long("offset-hours")
                .value_name("hours")
                .help("Initial display offset, hour part (-12..=14)")
                .allow_hyphen_values(true)
                .value_parser(value_parser!(i32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("offset-minutes")
                .short('M')
                .long("offset-minutes")
                .value_name("minutes")
                .help("Initial display offset, minute part (-59..=59)")
                .allow_hyphen_values(true)
                .value_parser(value_parser!(i32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("fps")
                .short('f')
                .long("fps")
                .value_name("n")
                .help("Repaint cadence in frames per second (1..=60, default 20)")
                .value_parser(value_parser!(u32))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("view")
                .short('V')
                .long("view")
                .value_name("name")
                .help("Starting view (clock, stopwatch, calendar, settings)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let view = match matches.get_one::<String>("view") {
        Some(name) => Some(View::parse(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown view '{}' (expected clock, stopwatch, calendar or settings)",
                name
            ))
        })?),
        None => None,
    };
    Ok(Config {
        help: matches.get_flag("help"),
        once: matches.get_flag("once"),
        offset_hours: matches.get_one::<i32>("offset-hours").copied(),
        offset_minutes: matches.get_one::<i32>("offset-minutes").copied(),
        fps: matches.get_one::<u32>("fps").copied(),
        view,
    })
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "tempo", &mut std::io::stdout());
}
