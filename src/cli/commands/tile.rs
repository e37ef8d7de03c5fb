use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::map::{TileCoord, TileSource};
use crate::models::LatLng;
use crate::utils::formatting::coord_pair;

/// Handle the `tile` command: print the tile covering a coordinate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tile { lat, lng, zoom } = cmd {
        let zoom = zoom.unwrap_or(cfg.zoom);
        if zoom > cfg.max_zoom {
            return Err(AppError::InvalidZoom(i64::from(zoom), cfg.max_zoom));
        }
        if !lat.is_finite() || !lng.is_finite() {
            return Err(AppError::InvalidCoordinate(coord_pair(*lat, *lng)));
        }

        let source = TileSource::from_config(cfg);
        let tile = TileCoord::containing(LatLng::new(*lat, *lng), zoom);

        println!("📍 {}", coord_pair(*lat, *lng));
        println!("🗺️  Tile : {}", tile);
        println!("🔗 URL  : {}", source.url(&tile));
        println!("{}", source.attribution);
    }

    Ok(())
}
