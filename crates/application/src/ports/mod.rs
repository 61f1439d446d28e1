mod check_in_repository;
mod gym_repository;

pub use check_in_repository::CheckInRepository;
pub use gym_repository::GymRepository;
