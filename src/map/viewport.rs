//! Web-Mercator viewport over a character grid.
//!
//! Pixel space is the usual slippy-map one: the world is `256 * 2^zoom`
//! pixels wide and tall, x grows east, y grows south. A grid cell covers
//! `CELL_WIDTH_PX` x `CELL_HEIGHT_PX` pixels.

use crate::errors::{AppError, AppResult};
use crate::models::LatLng;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;
pub const MAX_LATITUDE: f64 = 85.051_128_78;

pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

/// Coordinate → world pixel. Latitude is clamped to the Mercator limit.
pub fn project(at: LatLng, zoom: u8) -> (f64, f64) {
    let ws = world_size(zoom);
    let lat = at.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin = lat.to_radians().sin();
    let x = (at.lng + 180.0) / 360.0 * ws;
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * ws;
    (x, y)
}

/// World pixel → coordinate. Longitude is not wrapped.
pub fn unproject(x: f64, y: f64, zoom: u8) -> LatLng {
    let ws = world_size(zoom);
    let lng = x / ws * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / ws;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// Bring a longitude into `[-180, 180)`.
pub fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" | "up" => Some(Self::North),
            "s" | "south" | "down" => Some(Self::South),
            "e" | "east" | "right" => Some(Self::East),
            "w" | "west" | "left" => Some(Self::West),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    center: LatLng,
    zoom: u8,
    max_zoom: u8,
    cols: u16,
    rows: u16,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, max_zoom: u8, cols: u16, rows: u16) -> Self {
        Self {
            center,
            zoom: zoom.min(max_zoom),
            max_zoom,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn width_px(&self) -> f64 {
        f64::from(self.cols) * CELL_WIDTH_PX
    }

    pub fn height_px(&self) -> f64 {
        f64::from(self.rows) * CELL_HEIGHT_PX
    }

    /// World pixel of the top-left corner of the grid.
    pub fn origin_px(&self) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom);
        (cx - self.width_px() / 2.0, cy - self.height_px() / 2.0)
    }

    /// Grid cell showing `at`, if it is on screen.
    ///
    /// Horizontally the world repeats; the copy nearest to the center is used.
    pub fn cell_of(&self, at: LatLng) -> Option<(u16, u16)> {
        let ws = world_size(self.zoom);
        let (cx, cy) = project(self.center, self.zoom);
        let (px, py) = project(at, self.zoom);

        let dx = (px - cx + ws / 2.0).rem_euclid(ws) - ws / 2.0;
        let dy = py - cy;

        let col = ((dx + self.width_px() / 2.0) / CELL_WIDTH_PX).floor();
        let row = ((dy + self.height_px() / 2.0) / CELL_HEIGHT_PX).floor();

        if col < 0.0 || row < 0.0 || col >= f64::from(self.cols) || row >= f64::from(self.rows) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Coordinate under the center of a grid cell.
    pub fn cell_center(&self, col: i64, row: i64) -> AppResult<LatLng> {
        if col < 0 || row < 0 || col >= i64::from(self.cols) || row >= i64::from(self.rows) {
            return Err(AppError::InvalidCell(col, row));
        }
        let (ox, oy) = self.origin_px();
        let x = ox + (col as f64 + 0.5) * CELL_WIDTH_PX;
        let y = oy + (row as f64 + 0.5) * CELL_HEIGHT_PX;

        if y < 0.0 || y > world_size(self.zoom) {
            return Err(AppError::InvalidCell(col, row));
        }

        let at = unproject(x, y, self.zoom);
        Ok(LatLng::new(at.lat, wrap_lng(at.lng)))
    }

    /// Move the center by a quarter of the view per step.
    pub fn pan(&mut self, direction: Direction, steps: u32) {
        let steps = f64::from(steps);
        let (mut x, mut y) = project(self.center, self.zoom);
        match direction {
            Direction::North => y -= self.height_px() / 4.0 * steps,
            Direction::South => y += self.height_px() / 4.0 * steps,
            Direction::East => x += self.width_px() / 4.0 * steps,
            Direction::West => x -= self.width_px() / 4.0 * steps,
        }
        let y = y.clamp(0.0, world_size(self.zoom));
        let at = unproject(x, y, self.zoom);
        self.center = LatLng::new(at.lat, wrap_lng(at.lng));
    }

    pub fn set_zoom(&mut self, zoom: i64) -> AppResult<()> {
        if zoom < 0 || zoom > i64::from(self.max_zoom) {
            return Err(AppError::InvalidZoom(zoom, self.max_zoom));
        }
        self.zoom = zoom as u8;
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.saturating_add(1).min(self.max_zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1);
    }
}
