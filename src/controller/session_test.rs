use super::*;
use crate::controller::test_support::{Call, MockProvider, RecordingNavigator, Reply, sample_session};

#[test]
fn new_gate_is_pending_for_every_access() {
    let gate = SessionGate::new();
    assert_eq!(gate.view(), &SessionView::Loading);
    assert_eq!(gate.decide(Access::AuthOnly), GateDecision::Pending);
    assert_eq!(gate.decide(Access::Protected), GateDecision::Pending);
    assert_eq!(gate.session(), None);
}

#[tokio::test]
async fn signed_in_user_is_sent_away_from_auth_screens() {
    let provider = MockProvider::new().with_session(sample_session());
    let mut gate = SessionGate::new();
    gate.load_session(&provider).await;

    assert_eq!(gate.decide(Access::AuthOnly), GateDecision::Redirect(Route::Dashboard));
}

#[tokio::test]
async fn signed_in_user_sees_protected_content() {
    let session = sample_session();
    let provider = MockProvider::new().with_session(session.clone());
    let mut gate = SessionGate::new();
    gate.load_session(&provider).await;

    assert_eq!(gate.decide(Access::Protected), GateDecision::Render(Some(&session)));
    assert_eq!(gate.session().map(|s| s.email.as_str()), Some("user@example.com"));
}

#[tokio::test]
async fn anonymous_user_is_sent_to_login_from_protected() {
    let provider = MockProvider::new();
    let mut gate = SessionGate::new();
    gate.load_session(&provider).await;

    assert_eq!(gate.decide(Access::Protected), GateDecision::Redirect(Route::Login));
    assert_eq!(gate.decide(Access::AuthOnly), GateDecision::Render(None));
}

#[tokio::test]
async fn failed_lookup_counts_as_signed_out() {
    let provider = MockProvider::new().with_failing_session_lookup();
    let mut gate = SessionGate::new();
    gate.load_session(&provider).await;

    assert_eq!(gate.view(), &SessionView::Ready(None));
    assert_eq!(gate.decide(Access::Protected), GateDecision::Redirect(Route::Login));
}

#[tokio::test]
async fn load_queries_provider_once() {
    let provider = MockProvider::new();
    let mut gate = SessionGate::new();
    gate.load_session(&provider).await;
    assert_eq!(provider.calls(), vec![Call::GetSession]);
}

#[tokio::test]
async fn sign_out_navigates_to_login() {
    let provider = MockProvider::new().with_session(sample_session());
    let nav = RecordingNavigator::default();

    sign_out(&provider, &nav).await;

    assert_eq!(provider.calls(), vec![Call::SignOut]);
    assert_eq!(nav.pushes(), vec![Route::Login]);
}

#[tokio::test]
async fn sign_out_navigates_even_when_provider_fails() {
    let provider = MockProvider::new().with_reply(Reply::Transport);
    let nav = RecordingNavigator::default();

    sign_out(&provider, &nav).await;

    assert_eq!(nav.pushes(), vec![Route::Login]);
}
