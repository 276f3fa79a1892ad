//! Transport module builds multimodal travel matrices and adjusts their costs.

mod costs;
pub use self::costs::*;

mod matrix;
pub use self::matrix::*;

mod modes;
pub use self::modes::*;

mod network;
pub use self::network::*;
