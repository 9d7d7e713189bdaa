//! Raw-mode terminal setup and restore
//!
//! The guard puts the terminal into raw mode on the alternate screen and
//! restores it on drop, on panic, or when the restorer is called directly.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use ratatui::crossterm::{
            event::EnableMouseCapture,
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use ratatui::crossterm::{
            cursor,
            event::DisableMouseCapture,
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // Try every step even if one fails
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        ) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Restores the terminal at most once
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }

    /// Restore the terminal before the default panic message is printed
    pub fn install_panic_hook(&self) {
        let restorer = self.restorer();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockOps {
        calls: Mutex<Vec<&'static str>>,
    }

    impl TerminalOps for MockOps {
        fn setup(&self) -> io::Result<()> {
            self.calls.lock().unwrap().push("setup");
            Ok(())
        }

        fn restore(&self) -> io::Result<()> {
            self.calls.lock().unwrap().push("restore");
            Ok(())
        }
    }

    #[test]
    fn terminal_guard_restores_on_drop() {
        let ops = Arc::new(MockOps::default());
        {
            let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        }

        assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
    }

    #[test]
    fn terminal_restorer_is_idempotent() {
        let ops = Arc::new(MockOps::default());
        let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        let restorer = guard.restorer();

        restorer.restore().unwrap();
        restorer.restore().unwrap();
        drop(guard);

        assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
    }
}
