pub mod boundary;
pub mod broad_phase;
pub mod contact;
pub mod narrow_phase;
pub mod resolve;

pub use boundary::resolve_boundary;
pub use broad_phase::{AllPairs, BroadPhase};
pub use contact::{BodyHandle, Contact, PairKind};
pub use narrow_phase::{detect, Detection};
pub use resolve::{resolve_contact, Resolution};
