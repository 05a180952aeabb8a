use std::time::Duration;

use klaksvik::application::ports::CancellationStore;
use klaksvik::domain::JobId;
use klaksvik::infrastructure::cancellation::InMemoryCancellationStore;

#[tokio::test]
async fn given_no_request_when_checking_then_is_not_requested() {
    let store = InMemoryCancellationStore::new(Duration::from_secs(60));

    assert!(!store.is_requested(&JobId::new()).await.unwrap());
}

#[tokio::test]
async fn given_request_when_checking_then_flag_is_visible_until_cleared() {
    let store = InMemoryCancellationStore::new(Duration::from_secs(60));
    let job_id = JobId::new();

    store.request(&job_id).await.unwrap();
    assert!(store.is_requested(&job_id).await.unwrap());

    store.clear(&job_id).await.unwrap();
    assert!(!store.is_requested(&job_id).await.unwrap());
}

#[tokio::test]
async fn given_repeated_requests_when_checking_then_behaves_as_single_request() {
    let store = InMemoryCancellationStore::new(Duration::from_secs(60));
    let job_id = JobId::new();

    store.request(&job_id).await.unwrap();
    store.request(&job_id).await.unwrap();
    assert!(store.is_requested(&job_id).await.unwrap());

    store.clear(&job_id).await.unwrap();
    assert!(!store.is_requested(&job_id).await.unwrap());
}

#[tokio::test]
async fn given_clear_for_unknown_job_when_clearing_then_succeeds() {
    let store = InMemoryCancellationStore::new(Duration::from_secs(60));

    store.clear(&JobId::new()).await.unwrap();
}

#[tokio::test]
async fn given_expired_entry_when_sweeper_runs_then_flag_is_evicted() {
    let store = InMemoryCancellationStore::new(Duration::from_millis(50));
    let sweeper = store.start_sweeper(Duration::from_millis(20));
    let job_id = JobId::new();

    store.request(&job_id).await.unwrap();
    assert!(store.is_requested(&job_id).await.unwrap());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!store.is_requested(&job_id).await.unwrap());

    sweeper.abort();
}

#[tokio::test]
async fn given_fresh_entry_when_sweeper_runs_then_flag_survives() {
    let store = InMemoryCancellationStore::new(Duration::from_secs(60));
    let sweeper = store.start_sweeper(Duration::from_millis(20));
    let job_id = JobId::new();

    store.request(&job_id).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(store.is_requested(&job_id).await.unwrap());

    sweeper.abort();
}
