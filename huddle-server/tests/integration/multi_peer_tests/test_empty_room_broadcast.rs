use crate::integration::{init_tracing, spawn_relay_recording};
use crate::utils::{RECV_TIMEOUT_MS, TestPeer, offer_frame};
use huddle_server::RelayEvent;

#[tokio::test]
async fn test_empty_room_broadcast() {
    init_tracing();

    let (addr, sink) = spawn_relay_recording().await;

    // The room fills once, then empties out completely.
    let first = TestPeer::connect(addr, "echoes")
        .await
        .expect("Failed to connect first peer");
    let joined = sink
        .wait_for(1, RECV_TIMEOUT_MS, |event| {
            matches!(event, RelayEvent::PeerJoined { .. })
        })
        .await;
    assert!(joined, "First peer should join");

    first.close().await.expect("Failed to close first peer");
    let emptied = sink
        .wait_for(1, RECV_TIMEOUT_MS, |event| {
            matches!(event, RelayEvent::PeerLeft { .. })
        })
        .await;
    assert!(emptied, "First peer should leave");

    // A newcomer broadcasting into the now-empty room is a quiet no-op.
    let mut second = TestPeer::connect(addr, "echoes")
        .await
        .expect("Failed to connect second peer");
    let back = sink
        .wait_for(2, RECV_TIMEOUT_MS, |event| {
            matches!(event, RelayEvent::PeerJoined { .. })
        })
        .await;
    assert!(back, "Second peer should join");

    second
        .send_text(&offer_frame("v=0 to nobody"))
        .await
        .expect("Failed to send into empty room");
    second
        .expect_silence()
        .await
        .expect("Got a reply out of an empty room");

    // The room works normally once someone else shows up.
    let mut third = TestPeer::connect(addr, "echoes")
        .await
        .expect("Failed to connect third peer");
    let pair = sink
        .wait_for(3, RECV_TIMEOUT_MS, |event| {
            matches!(event, RelayEvent::PeerJoined { .. })
        })
        .await;
    assert!(pair, "Third peer should join");

    let offer = offer_frame("v=0 now heard");
    second.send_text(&offer).await.expect("Failed to send offer");
    assert_eq!(
        third.recv_text().await.expect("Third peer missed the offer"),
        offer
    );
    assert_eq!(
        sink.matching(|event| matches!(event, RelayEvent::DeliveryFailed { .. })),
        0,
        "Empty-room sends must not count as failures"
    );
}
