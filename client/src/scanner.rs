use std::thread;
use std::time::Duration;
use tictactoe_engine::log;

/// The "nearby connect" sequence. Purely scripted: nothing is transmitted,
/// it always ends connected and hands off to a local pass-and-play game.
pub struct ScanStage {
    pub delay_ms: u64,
    pub progress: u8,
    pub status: &'static str,
}

pub const SCAN_STAGES: [ScanStage; 5] = [
    ScanStage {
        delay_ms: 0,
        progress: 0,
        status: "Initializing Bluetooth adapter...",
    },
    ScanStage {
        delay_ms: 1000,
        progress: 20,
        status: "Scanning for nearby devices...",
    },
    ScanStage {
        delay_ms: 1500,
        progress: 50,
        status: "Found 3 devices in range: Unknown Device, Galaxy S23, iPhone 15",
    },
    ScanStage {
        delay_ms: 2000,
        progress: 80,
        status: "Handshaking with nearby player...",
    },
    ScanStage {
        delay_ms: 1500,
        progress: 100,
        status: "Connected via Local Secure Channel.",
    },
];

const HANDOFF_DELAY_MS: u64 = 800;

pub fn run_scan() {
    println!();
    println!("=== NEARBY CONNECT ===");

    for stage in &SCAN_STAGES {
        thread::sleep(Duration::from_millis(stage.delay_ms));
        log!("[{:3}%] {}", stage.progress, stage.status);
    }

    thread::sleep(Duration::from_millis(HANDOFF_DELAY_MS));
    println!("Opponent ready. Pass the device to player O after each move.");
    println!();
}
