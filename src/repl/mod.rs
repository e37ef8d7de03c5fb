//! Interactive session loop.
//!
//! Reads one command per line, dispatches it to the session handlers and
//! redraws the view after every state change.

pub mod command;

use crate::config::Config;
use crate::core::session::{ClickOutcome, ResetOutcome, Session};
use crate::errors::{AppError, AppResult};
use crate::map::marker_label;
use crate::ui::messages::{color_enabled, error, info, success};
use crate::ui::prompt::Terminal;
use crate::ui::view::{render_list, render_popup, render_view};
use command::{HELP, SessionCommand, ZoomChange};
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

pub struct Repl<'a, R, W> {
    session: Session,
    terminal: Terminal<R, W>,
    cfg: &'a Config,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(cfg: &'a Config, terminal: Terminal<R, W>) -> Self {
        Self {
            session: Session::new(cfg),
            terminal,
            cfg,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `quit` or end of input. Per-command errors are reported
    /// and the loop goes on; only I/O failures on the terminal end it.
    pub fn run(&mut self) -> AppResult<()> {
        self.redraw()?;
        info("Type 'help' for commands.");

        loop {
            let prompt = format!("{}> ", self.session.mode());
            let Some(line) = self.terminal.read_command(&prompt)? else {
                writeln!(self.terminal.output())?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = SessionCommand::parse(&line).and_then(|cmd| self.execute(cmd));
            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => error(e),
            }
        }

        info(format!(
            "Session closed with {} place(s).",
            self.session.places().len()
        ));
        Ok(())
    }

    fn redraw(&mut self) -> AppResult<()> {
        let view = render_view(&self.session, &self.cfg.title);
        write!(self.terminal.output(), "{view}")?;
        self.terminal.output().flush()?;
        Ok(())
    }

    fn report_click(&mut self, outcome: ClickOutcome) -> AppResult<()> {
        match outcome {
            ClickOutcome::Added(n) => {
                let place = self.session.place(n)?;
                success(format!(
                    "Added #{} '{}' at {}",
                    marker_label(n - 1),
                    place.title,
                    place.position()
                ));
                self.redraw()?;
            }
            ClickOutcome::Cancelled => info("Click discarded: no title given."),
            ClickOutcome::Inert => info("The map is read-only now. Use 'reset' to start over."),
        }
        Ok(())
    }

    fn execute(&mut self, cmd: SessionCommand) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Click(at) => {
                let outcome = self.session.on_map_click(&mut self.terminal, at)?;
                self.report_click(outcome)?;
            }
            SessionCommand::Tap { col, row } => {
                let outcome = self.session.on_tap(&mut self.terminal, col, row)?;
                self.report_click(outcome)?;
            }
            SessionCommand::Done => {
                self.session.on_done()?;
                success(format!(
                    "Done! {} place(s) on the map.",
                    self.session.places().len()
                ));
                self.redraw()?;
            }
            SessionCommand::Reset => match self.session.on_reset(&mut self.terminal)? {
                ResetOutcome::Cleared(n) => {
                    success(format!("Cleared {n} place(s). Back to collecting."));
                    self.redraw()?;
                }
                ResetOutcome::Declined => info("Reset cancelled."),
            },
            SessionCommand::Show => self.redraw()?,
            SessionCommand::List => {
                let mode = self.session.mode();
                if !mode.shows_list() {
                    return Err(AppError::Unavailable {
                        action: "list",
                        mode: mode.to_string(),
                    });
                }
                let width = usize::from(self.session.viewport().cols()) + 2;
                let list = render_list(self.session.places(), width);
                write!(self.terminal.output(), "{list}")?;
            }
            SessionCommand::Popup(n) => {
                let width = usize::from(self.session.viewport().cols()) + 2;
                let popup = render_popup(n, self.session.place(n)?, width);
                write!(self.terminal.output(), "{popup}")?;
            }
            SessionCommand::Pan { direction, steps } => {
                self.session.viewport_mut().pan(direction, steps);
                self.redraw()?;
            }
            SessionCommand::Zoom(change) => {
                let view = self.session.viewport_mut();
                match change {
                    ZoomChange::In => view.zoom_in(),
                    ZoomChange::Out => view.zoom_out(),
                    ZoomChange::To(level) => view.set_zoom(level)?,
                }
                self.redraw()?;
            }
            SessionCommand::Tiles => {
                let source = self.session.tiles();
                let mut out = String::new();
                for tile in source.visible_tiles(self.session.viewport()) {
                    out.push_str(&format!("{:<14} {}\n", tile.to_string(), source.url(&tile)));
                }
                out.push_str(&source.attribution);
                out.push('\n');
                write!(self.terminal.output(), "{out}")?;
            }
            SessionCommand::Log => {
                let log = self.session.activity().render(color_enabled());
                write!(self.terminal.output(), "{log}")?;
            }
            SessionCommand::Help => writeln!(self.terminal.output(), "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
