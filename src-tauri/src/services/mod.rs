// Services module
// Contains business logic separated by domain areas

pub mod dubbing; // Simulated dubbing pipeline
pub mod studio; // Widget state machine
