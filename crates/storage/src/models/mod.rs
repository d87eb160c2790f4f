mod athlete;
mod meet;
mod race_result;

pub use athlete::Athlete;
pub use meet::Meet;
pub use race_result::{MeetResult, RaceResult};
