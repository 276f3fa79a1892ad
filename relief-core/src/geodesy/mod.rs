//! Geodesy engine: point-to-point distances on a sphere (fast) and on the WGS-84 ellipsoid (accurate).

mod great_circle;
pub use self::great_circle::*;

mod vincenty;
pub use self::vincenty::*;
