//! Character rendering of the map surface and its markers.

use super::viewport::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Viewport, unproject, world_size};
use crate::models::Place;

const MERIDIAN: char = ':';
const PARALLEL: char = '.';
const OVERLAP: char = '+';
const OVERFLOW: char = '*';

/// Marker label for the place at 0-based `index`: `1`-`9`, `A`-`Z`, then `*`.
pub fn marker_label(index: usize) -> char {
    match index {
        0..=8 => char::from(b'1' + index as u8),
        9..=34 => char::from(b'A' + (index - 9) as u8),
        _ => OVERFLOW,
    }
}

/// Graticule spacing in degrees for a zoom level.
fn graticule_step(zoom: u8) -> f64 {
    match zoom {
        0..=2 => 30.0,
        3..=4 => 10.0,
        5..=6 => 5.0,
        7..=8 => 1.0,
        9..=11 => 0.1,
        _ => 0.01,
    }
}

fn crosses(a: f64, b: f64, step: f64) -> bool {
    (a / step).floor() != (b / step).floor()
}

pub struct MapFrame {
    pub text: String,
    pub shown: usize,
    pub offscreen: usize,
}

/// Draw the viewport with a graticule background and one marker per place.
pub fn render_map(view: &Viewport, places: &[Place]) -> MapFrame {
    let cols = usize::from(view.cols());
    let rows = usize::from(view.rows());
    let zoom = view.zoom();
    let ws = world_size(zoom);
    let step = graticule_step(zoom);
    let (ox, oy) = view.origin_px();

    let mut grid = vec![vec![' '; cols]; rows];

    for (r, line) in grid.iter_mut().enumerate() {
        let y0 = oy + r as f64 * CELL_HEIGHT_PX;
        let y1 = y0 + CELL_HEIGHT_PX;
        if y1 <= 0.0 || y0 >= ws {
            continue; // beyond the poles
        }
        let lat_top = unproject(0.0, y0.max(0.0), zoom).lat;
        let lat_bottom = unproject(0.0, y1.min(ws), zoom).lat;
        let parallel = crosses(lat_bottom, lat_top, step);

        for (c, cell) in line.iter_mut().enumerate() {
            let x0 = ox + c as f64 * CELL_WIDTH_PX;
            let lng_left = unproject(x0, 0.0, zoom).lng;
            let lng_right = unproject(x0 + CELL_WIDTH_PX, 0.0, zoom).lng;
            *cell = if crosses(lng_left, lng_right, step) {
                MERIDIAN
            } else if parallel {
                PARALLEL
            } else {
                ' '
            };
        }
    }

    let mut occupied = vec![vec![false; cols]; rows];
    let mut shown = 0;
    let mut offscreen = 0;
    for (i, place) in places.iter().enumerate() {
        match view.cell_of(place.position()) {
            Some((c, r)) => {
                let (c, r) = (usize::from(c), usize::from(r));
                grid[r][c] = if occupied[r][c] {
                    OVERLAP
                } else {
                    marker_label(i)
                };
                occupied[r][c] = true;
                shown += 1;
            }
            None => offscreen += 1,
        }
    }

    let mut text = String::new();
    text.push('┌');
    text.push_str(&"─".repeat(cols));
    text.push_str("┐\n");
    for line in grid {
        text.push('│');
        text.extend(line);
        text.push_str("│\n");
    }
    text.push('└');
    text.push_str(&"─".repeat(cols));
    text.push_str("┘\n");

    MapFrame {
        text,
        shown,
        offscreen,
    }
}
