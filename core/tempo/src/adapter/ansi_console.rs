//! ANSI 端末 Console 実装（Unix 専用）
//!
//! raw モードの設定と復元、代替スクリーン、poll(2) によるタイムアウト付き
//! キー読み取り、TIOCGWINSZ でのサイズ取得を担う。

use crate::ports::outbound::{Console, Key};
use common::error::Error;
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;

/// 保存した termios を drop 時に戻す raw モードガード
struct RawModeGuard {
    saved: libc::termios,
    fd: libc::c_int,
}

impl RawModeGuard {
    fn enable(fd: libc::c_int) -> io::Result<Self> {
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut termios) < 0 {
                return Err(io::Error::last_os_error());
            }
            let saved = termios;
            libc::cfmakeraw(&mut termios);
            if libc::tcsetattr(fd, libc::TCSANOW, &termios) < 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(Self { saved, fd })
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved);
        }
    }
}

/// キー入力のバイト列を 1 キーに解読する。
/// 未対応のエスケープシーケンスは無視（None）。
fn decode_key(buf: &[u8]) -> Option<Key> {
    match buf {
        [] => None,
        [0x1b, b'[', b'A', ..] => Some(Key::Up),
        [0x1b, b'[', b'B', ..] => Some(Key::Down),
        [0x1b, b'[', b'C', ..] => Some(Key::Right),
        [0x1b, b'[', b'D', ..] => Some(Key::Left),
        [0x1b, ..] => None,
        [b'\t', ..] => Some(Key::Tab),
        [b'\r', ..] | [b'\n', ..] => Some(Key::Enter),
        [b, ..] if *b < 0x20 => Some(Key::Ctrl((b + b'a' - 1) as char)),
        _ => std::str::from_utf8(buf)
            .ok()
            .and_then(|s| s.chars().next())
            .map(Key::Char),
    }
}

/// raw モード + ANSI エスケープで描画する Console 実装
pub struct AnsiConsole {
    stdin_fd: libc::c_int,
    raw: Option<RawModeGuard>,
}

impl AnsiConsole {
    /// stdin が端末のときだけ作れる
    pub fn new() -> Result<Self, Error> {
        let stdin_fd = io::stdin().as_raw_fd();
        if unsafe { libc::isatty(stdin_fd) } == 0 {
            return Err(Error::system(
                "stdin is not a terminal (use --once for non-interactive output)",
            ));
        }
        Ok(Self {
            stdin_fd,
            raw: None,
        })
    }
}

impl Console for AnsiConsole {
    fn enter(&mut self) -> Result<(), Error> {
        if self.raw.is_none() {
            let guard = RawModeGuard::enable(self.stdin_fd)
                .map_err(|e| Error::system(format!("Failed to set raw mode: {}", e)))?;
            self.raw = Some(guard);
            let mut out = io::stdout();
            // 代替スクリーンへ移ってカーソルを隠す
            out.write_all(b"\x1b[?1049h\x1b[?25l")?;
            out.flush()?;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<(), Error> {
        if self.raw.take().is_some() {
            let mut out = io::stdout();
            out.write_all(b"\x1b[?25h\x1b[?1049l")?;
            out.flush()?;
        }
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        unsafe {
            let mut ws: libc::winsize = std::mem::zeroed();
            if libc::ioctl(self.stdin_fd, libc::TIOCGWINSZ, &mut ws) < 0 || ws.ws_col == 0 {
                return (80, 24);
            }
            (ws.ws_col, ws.ws_row)
        }
    }

    fn present(&mut self, frame: &str) -> Result<(), Error> {
        let mut out = String::with_capacity(frame.len() + 16);
        out.push_str("\x1b[H");
        for line in frame.split('\n') {
            out.push_str(line);
            // 行末までを消してから改行（前フレームの残りを消す）
            out.push_str("\x1b[K\r\n");
        }
        out.push_str("\x1b[J");
        let mut stdout = io::stdout();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn poll_key(&mut self, timeout_ms: u64) -> Result<Option<Key>, Error> {
        let mut pollfd = libc::pollfd {
            fd: self.stdin_fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let timeout = i32::try_from(timeout_ms).unwrap_or(i32::MAX);
        let n = unsafe { libc::poll(&mut pollfd, 1 as libc::nfds_t, timeout) };
        if n < 0 {
            let err = io::Error::last_os_error();
            // シグナルで起こされた場合は tick として扱う（判定は interrupt checker 側）
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(None);
            }
            return Err(Error::io_msg(format!("poll failed: {}", err)));
        }
        if n == 0 {
            return Ok(None);
        }
        let mut buf = [0u8; 16];
        let read = unsafe {
            libc::read(
                self.stdin_fd,
                buf.as_mut_ptr() as *mut libc::c_void,
                buf.len(),
            )
        };
        if read < 0 {
            return Err(Error::io_msg(format!(
                "read failed: {}",
                io::Error::last_os_error()
            )));
        }
        Ok(decode_key(&buf[..read as usize]))
    }
}

impl Drop for AnsiConsole {
    fn drop(&mut self) {
        // 異常終了でも端末を復元する
        let _ = self.leave();
    }
}
