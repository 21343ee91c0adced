use serde::Deserialize;

use crate::geom::coord::AxialCoord;
use crate::util::targets::TargetStrategy;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub hex: HexConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_cols")]
    pub cols: i32,
    #[serde(default = "default_rows")]
    pub rows: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HexConfig {
    #[serde(default)]
    pub center_q: i32,
    #[serde(default)]
    pub center_r: i32,
    #[serde(default = "default_click_radius")]
    pub click_radius: i32,
    #[serde(default = "default_neighbor_rings")]
    pub neighbor_rings: i32,
    #[serde(default = "default_tile_size")]
    pub tile_size: f64,
}

impl HexConfig {
    pub fn center(&self) -> AxialCoord {
        AxialCoord::new(self.center_q, self.center_r)
    }
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            center_q: 0,
            center_r: 0,
            click_radius: default_click_radius(),
            neighbor_rings: default_neighbor_rings(),
            tile_size: default_tile_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_target_count")]
    pub count: usize,
    #[serde(default)]
    pub strategy: TargetStrategy,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_targets_output")]
    pub output: String,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            count: default_target_count(),
            strategy: TargetStrategy::default(),
            seed: None,
            output: default_targets_output(),
        }
    }
}

fn default_cols() -> i32 {
    8
}

fn default_rows() -> i32 {
    8
}

fn default_click_radius() -> i32 {
    80
}

fn default_neighbor_rings() -> i32 {
    10
}

// hexagon size 10 plus 1 spacing
fn default_tile_size() -> f64 {
    11.0
}

fn default_target_count() -> usize {
    100
}

fn default_targets_output() -> String {
    "output/targets.txt".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.grid.cols, 8);
        assert_eq!(config.grid.rows, 8);
        assert_eq!(config.hex.click_radius, 80);
        assert_eq!(config.hex.neighbor_rings, 10);
        assert_eq!(config.hex.tile_size, 11.0);
        assert_eq!(config.hex.center(), AxialCoord::origin());
        assert_eq!(config.targets.count, 100);
        assert_eq!(config.targets.strategy, TargetStrategy::Square);
        assert_eq!(config.targets.seed, None);
        assert_eq!(config.targets.output, "output/targets.txt");
    }

    #[test]
    fn partial_toml_overrides_given_keys() {
        let config: Config = toml::from_str(
            r#"
            [grid]
            rows = 3

            [hex]
            center_q = 2
            click_radius = 12

            [targets]
            strategy = "disk"
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.cols, 8);
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.hex.center(), AxialCoord::new(2, 0));
        assert_eq!(config.hex.click_radius, 12);
        assert_eq!(config.targets.strategy, TargetStrategy::Disk);
        assert_eq!(config.targets.seed, Some(7));
        assert_eq!(config.targets.count, 100);
    }

    #[test]
    fn unknown_strategy_fails_at_load() {
        let err = toml::from_str::<Config>(
            r#"
            [targets]
            strategy = "circle"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("circle"));
    }
}
