//! Parsing of interactive session commands.

use crate::errors::{AppError, AppResult};
use crate::map::Direction;
use crate::models::LatLng;
use regex::Regex;
use std::sync::LazyLock;

/// `lat lng` or `lat,lng`, plain decimal degrees.
static COORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)\s*(?:,\s*|\s+)([+-]?\d+(?:\.\d+)?)\s*$")
        .expect("valid coordinate regex")
});

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomChange {
    In,
    Out,
    To(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Click(LatLng),
    Tap { col: i64, row: i64 },
    Done,
    Reset,
    Show,
    List,
    Popup(usize),
    Pan { direction: Direction, steps: u32 },
    Zoom(ZoomChange),
    Tiles,
    Log,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  click <lat> <lng>     click the map at a coordinate (also: click <lat>,<lng>)
  tap <col> <row>       click the map at a grid cell
  done                  finish collecting (collect mode)
  reset                 clear everything and start over (done mode)
  show                  draw the whole view
  list                  show the place list (collect mode)
  popup <n>             open the popup of marker <n>
  pan <dir> [steps]     move the map: north, south, east, west
  zoom <in|out|N>       change the zoom level
  tiles                 list the map tiles covering the view
  log                   print the session activity log
  help                  show this help
  quit                  leave the session";

/// Parse latitude/longitude from free text.
pub fn parse_coords(input: &str) -> AppResult<LatLng> {
    let caps = COORD_RE
        .captures(input)
        .ok_or_else(|| AppError::InvalidCoordinate(input.trim().to_string()))?;

    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|_| AppError::InvalidCoordinate(input.trim().to_string()))
    };
    Ok(LatLng::new(parse(&caps[1])?, parse(&caps[2])?))
}

fn parse_int(word: &str, what: &str) -> AppResult<i64> {
    word.parse::<i64>()
        .map_err(|_| AppError::InvalidCommand(format!("{what} must be an integer, got '{word}'")))
}

impl SessionCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((h, r)) => (h, r.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let no_args = |cmd: SessionCommand| {
            if args.is_empty() {
                Ok(cmd)
            } else {
                Err(AppError::InvalidCommand(format!("'{head}' takes no arguments")))
            }
        };

        match head.to_lowercase().as_str() {
            "click" | "c" => Ok(Self::Click(parse_coords(rest)?)),
            "tap" | "t" => match args.as_slice() {
                [col, row] => Ok(Self::Tap {
                    col: parse_int(col, "column")?,
                    row: parse_int(row, "row")?,
                }),
                _ => Err(AppError::InvalidCommand("usage: tap <col> <row>".into())),
            },
            "done" => no_args(Self::Done),
            "reset" => no_args(Self::Reset),
            "show" | "view" | "map" => no_args(Self::Show),
            "list" | "ls" => no_args(Self::List),
            "popup" | "p" => match args.as_slice() {
                [n] => {
                    let n = parse_int(n, "marker number")?;
                    usize::try_from(n)
                        .ok()
                        .filter(|n| *n > 0)
                        .map(Self::Popup)
                        .ok_or(AppError::InvalidCommand(format!("no marker #{n}")))
                }
                _ => Err(AppError::InvalidCommand("usage: popup <n>".into())),
            },
            "pan" => {
                let (dir, steps) = match args.as_slice() {
                    [dir] => (*dir, 1),
                    [dir, steps] => {
                        let steps = parse_int(steps, "steps")?;
                        let steps = u32::try_from(steps).map_err(|_| {
                            AppError::InvalidCommand(format!("steps out of range: {steps}"))
                        })?;
                        (*dir, steps)
                    }
                    _ => {
                        return Err(AppError::InvalidCommand(
                            "usage: pan <north|south|east|west> [steps]".into(),
                        ));
                    }
                };
                let direction = Direction::parse(dir)
                    .ok_or_else(|| AppError::InvalidCommand(format!("unknown direction '{dir}'")))?;
                Ok(Self::Pan { direction, steps })
            }
            "zoom" | "z" => match args.as_slice() {
                ["in" | "+"] => Ok(Self::Zoom(ZoomChange::In)),
                ["out" | "-"] => Ok(Self::Zoom(ZoomChange::Out)),
                [level] => Ok(Self::Zoom(ZoomChange::To(parse_int(level, "zoom level")?))),
                _ => Err(AppError::InvalidCommand("usage: zoom <in|out|N>".into())),
            },
            "tiles" => no_args(Self::Tiles),
            "log" => no_args(Self::Log),
            "help" | "?" => no_args(Self::Help),
            "quit" | "exit" | "q" => no_args(Self::Quit),
            other => Err(AppError::InvalidCommand(format!(
                "unknown command '{other}' (type 'help')"
            ))),
        }
    }
}
