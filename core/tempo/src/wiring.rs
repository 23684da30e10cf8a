//! 配線: 標準アダプタで各ポートを組み立てる
//!
//! グローバルやシングルトンは使わず、ここで作ったインスタンスを
//! コンストラクタ経由で配るだけにする。

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem};
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{NoopInterruptChecker, SigintChecker};
use crate::ports::outbound::InterruptChecker;

/// 配線で組み立てたポート群（main の Runner で利用）
pub struct App {
    pub clock: Arc<dyn Clock>,
    pub env: Arc<dyn EnvResolver>,
    pub fs: Arc<dyn FileSystem>,
    pub log: Arc<dyn Log>,
    pub interrupt: Arc<dyn InterruptChecker>,
}

/// 標準アダプタで App を組み立てる
pub fn wire_tempo() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let log: Arc<dyn Log> = env
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(&fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    let interrupt: Arc<dyn InterruptChecker> = match SigintChecker::new() {
        Ok(checker) => Arc::new(checker),
        Err(_) => Arc::new(NoopInterruptChecker::new()),
    };
    App {
        clock: Arc::new(StdClock),
        env,
        fs,
        log,
        interrupt,
    }
}
