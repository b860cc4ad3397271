use crate::integration::{init_tracing, spawn_relay_recording};
use crate::utils::{RECV_TIMEOUT_MS, TestPeer, offer_frame};
use huddle_server::RelayEvent;

#[tokio::test]
async fn test_peer_leaves_others_stay() {
    init_tracing();

    let (addr, sink) = spawn_relay_recording().await;

    let mut alice = TestPeer::connect(addr, "retro")
        .await
        .expect("Failed to connect alice");
    let mut bob = TestPeer::connect(addr, "retro")
        .await
        .expect("Failed to connect bob");
    let carol = TestPeer::connect(addr, "retro")
        .await
        .expect("Failed to connect carol");

    let all_in = sink
        .wait_for(3, RECV_TIMEOUT_MS, |event| {
            matches!(event, RelayEvent::PeerJoined { .. })
        })
        .await;
    assert!(all_in, "All three peers should join first");

    // One peer leaves; wait until the relay has processed it.
    carol.close().await.expect("Failed to close carol");
    let gone = sink
        .wait_for(1, RECV_TIMEOUT_MS, |event| {
            matches!(event, RelayEvent::PeerLeft { .. })
        })
        .await;
    assert!(gone, "Expected carol's leave to be processed");

    // Signaling between the remaining members keeps working, with no
    // attempt to reach the departed connection.
    let offer = offer_frame("v=0 after carol left");
    alice.send_text(&offer).await.expect("Failed to send offer");
    assert_eq!(bob.recv_text().await.expect("Bob missed the offer"), offer);
    assert_eq!(
        sink.matching(|event| matches!(event, RelayEvent::DeliveryFailed { .. })),
        0,
        "No deliveries to stale members expected"
    );
}
