mod adapter;
mod cli;
mod domain;
mod ports;
mod screen;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use std::sync::Arc;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use domain::offset::OffsetSettings;
use ports::inbound::UseCaseRunner;
use screen::View;
use usecase::dashboard::Dashboard;
use wiring::{wire_tempo, App};

/// 既定の再描画周期（fps）
const DEFAULT_FPS: u32 = 20;

/// CLI フラグとファイル設定をマージした起動パラメータ
#[derive(Debug)]
struct Launch {
    offset: OffsetSettings,
    view: View,
    tick_ms: u64,
    once: bool,
}

/// マージ規則: CLI フラグ > config.json > 既定値。
/// オフセットの範囲外はここで usage エラーとして拒否する。
fn resolve_launch(config: &Config, file: &adapter::FileConfig) -> Result<Launch, Error> {
    let hours = config.offset_hours.or(file.offset_hours).unwrap_or(0);
    let minutes = config.offset_minutes.or(file.offset_minutes).unwrap_or(0);
    let offset =
        OffsetSettings::new(hours, minutes).map_err(|e| Error::invalid_argument(e.to_string()))?;

    let fps = config.fps.or(file.fps).unwrap_or(DEFAULT_FPS);
    if !(1..=60).contains(&fps) {
        return Err(Error::invalid_argument(format!(
            "fps must be between 1 and 60, got {}",
            fps
        )));
    }

    let view = match config.view {
        Some(view) => view,
        None => match file.view.as_deref() {
            Some(name) => View::parse(name).unwrap_or_else(|| {
                eprintln!("Warning: Unknown view '{}' in config.json (using clock)", name);
                View::Clock
            }),
            None => View::Clock,
        },
    };

    Ok(Launch {
        offset,
        view,
        tick_ms: u64::from(1_000 / fps),
        once: config.once,
    })
}

/// Config をディスパッチする Runner（分岐は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&mut self, config: Config) -> Result<i32, Error> {
        if config.help {
            print_help();
            return Ok(0);
        }

        let file = adapter::load_file_config(self.app.env.as_ref(), self.app.fs.as_ref());
        let launch = resolve_launch(&config, &file)?;
        let mut dashboard = Dashboard::new(
            Arc::clone(&self.app.clock),
            Arc::clone(&self.app.log),
            launch.offset,
            launch.view,
        );

        if launch.once {
            let frame = screen::compose(&dashboard.screen_model(), 24);
            println!("{}", screen::strip_ansi(&frame));
            return Ok(0);
        }

        run_interactive(&mut dashboard, &self.app, launch.tick_ms)
    }
}

#[cfg(unix)]
fn run_interactive(dashboard: &mut Dashboard, app: &App, tick_ms: u64) -> Result<i32, Error> {
    let mut console = adapter::AnsiConsole::new()?;
    dashboard.run(&mut console, app.interrupt.as_ref(), tick_ms)
}

#[cfg(not(unix))]
fn run_interactive(_dashboard: &mut Dashboard, _app: &App, _tick_ms: u64) -> Result<i32, Error> {
    Err(Error::system(
        "Interactive mode is only supported on Unix (use --once)",
    ))
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("tempo: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: tempo [-h] [--once] [-H hours] [-M minutes] [-f fps] [-V view]");
}

fn print_help() {
    println!("Usage: tempo [-h] [--once] [-H hours] [-M minutes] [-f fps] [-V view]");
    println!("  -h, --help             Display this help message.");
    println!("  -H, --offset-hours     Initial display offset, hour part (-12..=14).");
    println!("  -M, --offset-minutes   Initial display offset, minute part (-59..=59).");
    println!("  -f, --fps              Repaint cadence in frames per second (1..=60, default 20).");
    println!("  -V, --view             Starting view: clock, stopwatch, calendar, settings.");
    println!("      --once             Compose one frame to stdout and exit (no raw mode).");
    println!("      --generate <shell> Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  TEMPO_HOME      Config directory (config.json). Default: $XDG_CONFIG_HOME/tempo or ~/.config/tempo.");
    println!("  TEMPO_LOG       Append structured JSONL logs to this file.");
    println!();
    println!("Keys:");
    println!("  1-4 / Tab              Switch view (clock, stopwatch, calendar, settings).");
    println!("  space / l / r          Stopwatch: start or pause / lap / reset.");
    println!("  left / right / t       Calendar: previous / next month, back to today.");
    println!("  up / down              Settings: adjust the hour offset.");
    println!("  left / right / 0       Settings: adjust the minute offset, clear both.");
    println!("  q / Ctrl-C             Quit.");
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_tempo();
    let mut runner = Runner { app };
    runner.run(config)
}
