use termion::{clear, cursor, style};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::{IntoRawMode, RawTerminal};

use super::UiMessage;

use crossbeam_channel::Sender;
use log::{info, warn};

use std::io;
use std::io::{Write, stdout, stdin};
use std::thread::spawn;

/** Puts the terminal into raw mode for as long as it lives. */
pub struct TermionWrapper {
    stdout: RawTerminal<std::io::Stdout>,
}

impl TermionWrapper {
    pub fn new() -> io::Result<TermionWrapper> {
        let mut stdout = stdout().into_raw_mode()?;
        write!(stdout, "{}{}", clear::All, cursor::Hide)?;
        stdout.flush()?;
        Ok(TermionWrapper{stdout})
    }

    /** Start the key reader thread.
     *
     * Keys are forwarded to the UI. Ctrl-C or the end of input send
     * UiMessage::Exit.
     */
    pub fn run(to_ui_sender: Sender<UiMessage>) -> std::thread::JoinHandle<()> {
        spawn(move || {
            let stdin = stdin();
            for c in stdin.keys() {
                match c {
                    Ok(Key::Ctrl('c')) => break,
                    Ok(k) => {
                        if to_ui_sender.send(UiMessage::Key(k)).is_err() {
                            // UI is gone, nobody to tell
                            return;
                        }
                    }
                    Err(err) => {
                        warn!("Error reading key: {}", err);
                        break;
                    }
                }
            }
            info!("Key reader stopped");
            to_ui_sender.send(UiMessage::Exit).ok();
        })
    }
}

impl Drop for TermionWrapper {
    fn drop(&mut self) {
        write!(self.stdout, "{}{}{}{}", style::Reset, clear::All, cursor::Goto(1, 1), cursor::Show).ok();
        self.stdout.flush().ok();
    }
}
