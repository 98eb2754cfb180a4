//! Growable vectors of one number per slot.

mod traits;
pub use self::traits::*;

mod scalar_vec;
pub use self::scalar_vec::*;
