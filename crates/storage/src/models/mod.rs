pub mod boardroom;
pub mod dispute;
pub mod matches;
pub mod news;
pub mod payout;
pub mod player;
pub mod registration;
pub mod tournament;

pub use boardroom::BoardroomMessage;
pub use dispute::{Dispute, DisputeOutcome};
pub use matches::{Match, MatchOutcome, MatchStatus};
pub use news::NewsPost;
pub use payout::{PayoutBatch, PayoutItem, PayoutItemStatus};
pub use player::Player;
pub use registration::{Registration, RegistrationStatus};
pub use tournament::{Tournament, TournamentStatus};
