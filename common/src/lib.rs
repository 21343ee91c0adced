pub mod error;
pub mod geom;
pub mod util;

pub use error::{GridError, GridResult};
pub use geom::coord::{AxialCoord, CubeCoord, GridCoord};
