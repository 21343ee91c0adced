use rand::Rng;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::str::FromStr;

use crate::error::{GridResult, non_negative};
use crate::geom::PREALLOC_LIMIT;
use crate::geom::coord::AxialCoord;
use crate::geom::hex::{check_bounds, distance};

/// How click targets are drawn around the center tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetStrategy {
    /// `q` and `r` independently in `[-radius, radius]`. Corners fall outside the hex board.
    #[default]
    Square,
    /// Uniform over the hex disk of `radius`.
    Disk,
}

impl FromStr for TargetStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "disk" => Ok(Self::Disk),
            other => Err(format!(
                "unknown target strategy '{}', expected 'square' or 'disk'",
                other
            )),
        }
    }
}

/// Request path the tile service expects for a click on `coord`.
pub fn tile_path(coord: AxialCoord) -> String {
    format!("/tile/{}/{}", coord.q, coord.r)
}

pub fn generate_targets<R: Rng + ?Sized>(
    center: AxialCoord,
    radius: i32,
    count: usize,
    strategy: TargetStrategy,
    rng: &mut R,
) -> GridResult<Vec<AxialCoord>> {
    non_negative("radius", radius)?;
    check_bounds(center, radius)?;

    let mut targets = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    while targets.len() < count {
        let q = rng.gen_range(-radius..=radius);
        let r = rng.gen_range(-radius..=radius);
        let coord = AxialCoord::new(center.q + q, center.r + r);

        // Rejection keeps the disk draw uniform; acceptance is at least 3/4.
        if strategy == TargetStrategy::Disk && distance(center, coord) > i64::from(radius) {
            continue;
        }
        targets.push(coord);
    }

    log::debug!(
        "Generated {} {:?} targets around {} (radius {})",
        targets.len(),
        strategy,
        center,
        radius
    );
    Ok(targets)
}

/// Writes one request path per line.
pub fn write_targets(filename: &str, targets: &[AxialCoord]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for coord in targets {
        writeln!(file, "{}", tile_path(*coord))?;
    }
    file.flush()?;
    log::info!("Wrote {} targets to {}", targets.len(), filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tile_path_format() {
        assert_eq!(tile_path(AxialCoord::new(3, -2)), "/tile/3/-2");
        assert_eq!(tile_path(AxialCoord::origin()), "/tile/0/0");
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("square".parse::<TargetStrategy>(), Ok(TargetStrategy::Square));
        assert_eq!("Disk".parse::<TargetStrategy>(), Ok(TargetStrategy::Disk));
        assert!("circle".parse::<TargetStrategy>().is_err());
    }

    #[test]
    fn square_targets_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let center = AxialCoord::new(10, -10);
        let targets =
            generate_targets(center, 5, 500, TargetStrategy::Square, &mut rng).unwrap();
        assert_eq!(targets.len(), 500);
        assert!(targets.iter().all(|c| (c.q - center.q).abs() <= 5
            && (c.r - center.r).abs() <= 5));
    }

    #[test]
    fn disk_targets_stay_within_radius() {
        let mut rng = StdRng::seed_from_u64(2);
        let center = AxialCoord::origin();
        let targets = generate_targets(center, 4, 500, TargetStrategy::Disk, &mut rng).unwrap();
        assert_eq!(targets.len(), 500);
        assert!(targets.iter().all(|c| distance(center, *c) <= 4));
    }

    #[test]
    fn same_seed_same_targets() {
        let center = AxialCoord::origin();
        let a = generate_targets(
            center,
            80,
            64,
            TargetStrategy::Square,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let b = generate_targets(
            center,
            80,
            64,
            TargetStrategy::Square,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_radius_always_hits_center() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = AxialCoord::new(2, 2);
        let targets = generate_targets(center, 0, 10, TargetStrategy::Disk, &mut rng).unwrap();
        assert!(targets.iter().all(|c| *c == center));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            generate_targets(AxialCoord::origin(), -5, 10, TargetStrategy::Square, &mut rng),
            Err(GridError::negative("radius", -5))
        );
    }

    #[test]
    fn targets_at_the_edge_of_i32() {
        let mut rng = StdRng::seed_from_u64(5);
        let center = AxialCoord::new(i32::MAX - 3, i32::MIN + 3);
        let targets = generate_targets(center, 3, 200, TargetStrategy::Disk, &mut rng).unwrap();
        assert!(targets.iter().all(|c| distance(center, *c) <= 3));

        assert_eq!(
            generate_targets(center, 4, 1, TargetStrategy::Square, &mut rng),
            Err(GridError::out_of_range("center.q", i64::from(i32::MAX - 3)))
        );
    }

    #[test]
    fn strategy_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            strategy: TargetStrategy,
        }
        let holder: Holder = toml::from_str("strategy = \"disk\"").unwrap();
        assert_eq!(holder.strategy, TargetStrategy::Disk);
        assert!(toml::from_str::<Holder>("strategy = \"circle\"").is_err());
    }

    #[test]
    fn writes_one_path_per_line() {
        let path = std::env::temp_dir().join(format!("tilegrid-targets-{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();
        let targets = vec![AxialCoord::new(1, 2), AxialCoord::new(-3, 0)];
        write_targets(path_str, &targets).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "/tile/1/2\n/tile/-3/0\n");
        std::fs::remove_file(&path).unwrap();
    }
}
