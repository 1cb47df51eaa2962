//! Sequence CRDTs for collaborative lists and text
//!
//! Wave 3.2-3.3: RGA and YATA implementations.

mod rga;
mod yata;

pub use rga::RGA;
pub use yata::YATA;
