pub mod boardroom;
pub mod disputes;
pub mod leaderboard;
pub mod matches;
pub mod news;
pub mod payouts;
pub mod players;
pub mod registrations;
pub mod tournaments;
