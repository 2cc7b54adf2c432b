mod body;
mod controls;
mod draw;
mod meteor;
mod pick;
mod rings;
mod system;
mod trail;

pub use body::{Body, BodyID, BodyInfo, BodyKind, CircularOrbit, RingSpec};
pub use controls::{Command, Controls, Layer};
pub use draw::{DrawList, Label, Polyline};
pub use meteor::Meteor;
pub use pick::{Inspectable, Inspector};
pub use rings::{Ring, RingSet};
pub use system::{SolarSystem, Star};
pub use trail::Trail;
