/// Check-in Flow Test
///
/// Runs the check-in rules against the SQLite repositories:
/// Create gym → Geofence → Daily limit → Persist → History

#[path = "../common/mod.rs"]
mod common;
use common::{at, sqlite_repositories, TestLocations};

use gympass_application::use_cases::{
    CheckInPolicy, CheckInRequest, CheckInUseCase, CreateGymUseCase,
    FetchUserCheckInsHistoryRequest, FetchUserCheckInsHistoryUseCase, GetUserMetricsRequest,
    GetUserMetricsUseCase,
};
use gympass_application::ports::CheckInRepository;
use gympass_domain::{DailyLimitScope, DomainError, NewGym};
use std::sync::Arc;

fn check_in_request(gym_id: &str, user_id: &str, now: chrono::DateTime<chrono::Utc>) -> CheckInRequest {
    let (latitude, longitude) = TestLocations::user();
    CheckInRequest {
        gym_id: gym_id.to_string(),
        user_id: user_id.to_string(),
        user_latitude: latitude,
        user_longitude: longitude,
        now,
    }
}

// ============================================================================
// Full Check-in Flow Tests
// ============================================================================

#[tokio::test]
async fn test_complete_check_in_flow() {
    // Arrange
    let repos = sqlite_repositories().await;
    let (lat, lon) = TestLocations::user();
    let gym = CreateGymUseCase::new(repos.gyms.clone())
        .execute(NewGym::new("JavaScript Gym", lat, lon))
        .await
        .unwrap()
        .gym;
    let check_in = CheckInUseCase::new(repos.check_ins.clone(), repos.gyms.clone());

    // Act: first day, a retry later that day, then the next day
    let first = check_in
        .execute(check_in_request(&gym.id, "user-01", at(2022, 1, 20, 8)))
        .await;
    let retry = check_in
        .execute(check_in_request(&gym.id, "user-01", at(2022, 1, 20, 18)))
        .await;
    let next_day = check_in
        .execute(check_in_request(&gym.id, "user-01", at(2022, 1, 21, 8)))
        .await;

    // Assert
    assert!(first.is_ok());
    assert!(matches!(retry, Err(DomainError::MaxNumberOfCheckIns)));
    assert!(next_day.is_ok());

    let history = FetchUserCheckInsHistoryUseCase::new(repos.check_ins.clone())
        .execute(FetchUserCheckInsHistoryRequest {
            user_id: "user-01".to_string(),
            page: 1,
        })
        .await
        .unwrap();
    assert_eq!(history.check_ins.len(), 2);
    assert_eq!(history.check_ins[0].created_at, at(2022, 1, 20, 8));

    let metrics = GetUserMetricsUseCase::new(repos.check_ins.clone())
        .execute(GetUserMetricsRequest {
            user_id: "user-01".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(metrics.check_ins_count, 2);
}

#[tokio::test]
async fn test_distant_gym_is_rejected_and_nothing_is_stored() {
    let repos = sqlite_repositories().await;
    let (lat, lon) = TestLocations::distant_gym();
    let gym = CreateGymUseCase::new(repos.gyms.clone())
        .execute(NewGym::new("TypeScript Gym", lat, lon))
        .await
        .unwrap()
        .gym;
    let check_in = CheckInUseCase::new(repos.check_ins.clone(), repos.gyms.clone());

    for _ in 0..2 {
        let result = check_in
            .execute(check_in_request(&gym.id, "user-01", at(2022, 1, 20, 8)))
            .await;
        assert!(matches!(result, Err(DomainError::MaxDistance { .. })));
    }

    assert_eq!(repos.check_ins.count_by_user_id("user-01").await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_gym_is_not_found() {
    let repos = sqlite_repositories().await;
    let check_in = CheckInUseCase::new(repos.check_ins.clone(), repos.gyms.clone());

    let result = check_in
        .execute(check_in_request("no-such-gym", "user-01", at(2022, 1, 20, 8)))
        .await;

    assert!(matches!(result, Err(DomainError::ResourceNotFound(_))));
}

#[tokio::test]
async fn test_scope_per_user_and_gym_on_sqlite() {
    let repos = sqlite_repositories().await;
    let (lat, lon) = TestLocations::user();
    let create = CreateGymUseCase::new(repos.gyms.clone());
    let gym_a = create.execute(NewGym::new("Gym A", lat, lon)).await.unwrap().gym;
    let gym_b = create.execute(NewGym::new("Gym B", lat, lon)).await.unwrap().gym;

    let per_user = CheckInUseCase::new(repos.check_ins.clone(), repos.gyms.clone());
    let per_user_and_gym = CheckInUseCase::new(repos.check_ins.clone(), repos.gyms.clone())
        .with_policy(CheckInPolicy {
            daily_limit_scope: DailyLimitScope::PerUserAndGym,
            ..CheckInPolicy::default()
        });

    // user-01 under the global rule
    per_user
        .execute(check_in_request(&gym_a.id, "user-01", at(2022, 1, 20, 8)))
        .await
        .unwrap();
    let second_gym = per_user
        .execute(check_in_request(&gym_b.id, "user-01", at(2022, 1, 20, 9)))
        .await;
    assert!(matches!(second_gym, Err(DomainError::MaxNumberOfCheckIns)));

    // user-02 under the per-gym rule
    per_user_and_gym
        .execute(check_in_request(&gym_a.id, "user-02", at(2022, 1, 20, 8)))
        .await
        .unwrap();
    per_user_and_gym
        .execute(check_in_request(&gym_b.id, "user-02", at(2022, 1, 20, 9)))
        .await
        .unwrap();
    assert_eq!(repos.check_ins.count_by_user_id("user-02").await.unwrap(), 2);
}

#[tokio::test]
async fn test_concurrent_check_ins_create_exactly_one() {
    let repos = sqlite_repositories().await;
    let (lat, lon) = TestLocations::user();
    let gym = CreateGymUseCase::new(repos.gyms.clone())
        .execute(NewGym::new("JavaScript Gym", lat, lon))
        .await
        .unwrap()
        .gym;
    let check_in = Arc::new(CheckInUseCase::new(
        repos.check_ins.clone(),
        repos.gyms.clone(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let check_in = check_in.clone();
            let gym_id = gym.id.to_string();
            tokio::spawn(async move {
                check_in
                    .execute(check_in_request(&gym_id, "user-01", at(2022, 1, 20, 8 + i)))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(DomainError::MaxNumberOfCheckIns) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repos.check_ins.count_by_user_id("user-01").await.unwrap(), 1);
}
