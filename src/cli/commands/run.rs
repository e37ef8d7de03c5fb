use crate::config::Config;
use crate::errors::AppResult;
use crate::repl::Repl;
use crate::ui::prompt::Terminal;

/// Handle the `run` command (also used when no command is given).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let terminal = Terminal::stdio(&cfg.cancel_keyword);
    let mut repl = Repl::new(cfg, terminal);
    repl.run()
}
