//! A self-contained lobby session: two simulated connections play one
//! short round while a printer task drains the broadcast channel the
//! way a transport would.
//!
//! ```text
//! RUST_LOG=info cargo run --example lobby
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use wordrush::{GameHub, RoomBroadcast, RoomConfig, SessionId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (events, mut inbox) = mpsc::unbounded_channel::<RoomBroadcast>();
    let printer = tokio::spawn(async move {
        while let Some(RoomBroadcast { room, event }) = inbox.recv().await {
            println!("[{room}] {}", serde_json::to_string(&event).unwrap());
        }
    });

    // Short rounds so the demo sees a timed ending.
    let hub = GameHub::new(
        RoomConfig {
            round_duration: Duration::from_secs(5),
            ..RoomConfig::default()
        },
        events,
    );

    let alice = SessionId::new("conn-alice");
    let bob = SessionId::new("conn-bob");

    let created = hub.create_room(alice.clone(), "Word Warriors", "alice").await?;
    println!("alice opened room {}", created.room_code);

    hub.join_room(bob.clone(), created.room_code.as_str(), "bob").await?;
    hub.set_ready(bob.clone(), true).await?;

    let started = hub.start_game(alice.clone()).await?;
    if let Some(board) = started.board {
        println!("the board:\n{board}");
    }

    for word in ["cat", "stone", "cat", "queen"] {
        let totals = hub.submit_word(bob.clone(), word).await?;
        println!(
            "bob played {word:?}: {} points over {} words",
            totals.score, totals.word_count
        );
    }

    // Let the round run out, then look at the frozen room.
    tokio::time::sleep(Duration::from_secs(6)).await;
    if let Some(state) = hub.get_game_state(&bob).await {
        println!("after the round: {}", serde_json::to_string(&state)?);
    }

    hub.disconnect(alice).await;
    hub.leave_room(bob).await?;

    drop(hub);
    printer.abort();
    Ok(())
}
