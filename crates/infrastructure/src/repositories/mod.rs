pub mod check_in_repository;
pub mod gym_repository;

pub use check_in_repository::SqliteCheckInRepository;
pub use gym_repository::SqliteGymRepository;

use gympass_domain::PAGE_SIZE;

/// `(LIMIT, OFFSET)` for a 1-based page.
pub(crate) fn page_window(page: u32) -> (i64, i64) {
    let offset = i64::from(page.saturating_sub(1)) * i64::from(PAGE_SIZE);
    (i64::from(PAGE_SIZE), offset)
}
