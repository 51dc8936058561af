mod coolant;
mod plate;
mod scenario;
mod target;
mod zones;

pub use coolant::Coolant;
pub use plate::Plate;
pub use scenario::ThermalScenario;
pub use target::{CalibrationScenario, CalibrationTarget};
pub use zones::{Zone, Zones};
