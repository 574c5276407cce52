//! Page components, one per registered route.
//!
//! Every page is a zero-argument component producing fixed markup, with any
//! mock data held in component-local constants.

mod appointments;
mod bill_decoder;
mod coach;
mod community;
mod emergency;
mod home;
mod mental;
mod more;
mod not_found;
mod premium;
mod prescriptions;
mod rewards;
mod search;
mod symptoms;
mod wallet;

pub use appointments::Appointments;
pub use bill_decoder::AiBillDecoder;
pub use coach::AiLifestyleCoach;
pub use community::CommunityQa;
pub use emergency::Emergency;
pub use home::Home;
pub use mental::MentalHealth;
pub use more::More;
pub use not_found::NotFound;
pub use premium::Premium;
pub use prescriptions::PrescriptionPriceFinder;
pub use rewards::HealthRewards;
pub use search::Search;
pub use symptoms::Symptoms;
pub use wallet::HealthWallet;
