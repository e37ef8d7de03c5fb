//! Slippy-map tile source.
//!
//! Tiles are never downloaded here; the view only needs to know which
//! tiles it covers, where they would come from and whom to credit.

use super::viewport::{TILE_SIZE, Viewport, project};
use crate::config::Config;
use crate::models::LatLng;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    /// Tile containing `at` at `zoom`. x wraps, y is clamped to the world.
    pub fn containing(at: LatLng, zoom: u8) -> Self {
        let n = tiles_per_side(zoom);
        let (px, py) = project(at, zoom);
        let x = (px / TILE_SIZE).floor() as i64;
        let y = (py / TILE_SIZE).floor() as i64;
        Self {
            z: zoom,
            x: x.rem_euclid(n) as u32,
            y: y.clamp(0, n - 1) as u32,
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

fn tiles_per_side(zoom: u8) -> i64 {
    1i64 << zoom.min(62)
}

#[derive(Debug, Clone)]
pub struct TileSource {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileSource {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            url_template: cfg.tile_url.clone(),
            subdomains: cfg.subdomains.clone(),
            attribution: cfg.attribution.clone(),
            max_zoom: cfg.max_zoom,
        }
    }

    /// Fill `{s}`, `{z}`, `{x}` and `{y}` in the template.
    /// The subdomain rotates with `(x + y) mod len`.
    pub fn url(&self, tile: &TileCoord) -> String {
        let mut url = self.url_template.clone();
        if !self.subdomains.is_empty() {
            let idx = ((u64::from(tile.x) + u64::from(tile.y)) % self.subdomains.len() as u64) as usize;
            url = url.replace("{s}", &self.subdomains[idx]);
        }
        url.replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }

    /// Tiles needed to paint the viewport, row by row, each listed once.
    pub fn visible_tiles(&self, view: &Viewport) -> Vec<TileCoord> {
        let z = view.zoom();
        let n = tiles_per_side(z);
        let (ox, oy) = view.origin_px();

        let x0 = (ox / TILE_SIZE).floor() as i64;
        let x1 = ((ox + view.width_px() - 1.0) / TILE_SIZE).floor() as i64;
        let y0 = ((oy / TILE_SIZE).floor() as i64).max(0);
        let y1 = (((oy + view.height_px() - 1.0) / TILE_SIZE).floor() as i64).min(n - 1);

        let mut seen = HashSet::new();
        let mut tiles = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let tile = TileCoord {
                    z,
                    x: x.rem_euclid(n) as u32,
                    y: y as u32,
                };
                if seen.insert(tile) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}
