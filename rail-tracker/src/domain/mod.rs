//! Domain types for the railway client.
//!
//! This module contains the value types the client puts on the wire.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod pnr;
mod station;
mod train;
mod travel_date;

pub use pnr::{InvalidPnr, Pnr};
pub use station::{InvalidStationCode, StationCode};
pub use train::{InvalidTrainNumber, TrainNumber};
pub use travel_date::{InvalidTravelDate, TravelDate};
