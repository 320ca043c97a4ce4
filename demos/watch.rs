//! Polls the audio graph once a second and prints who is using the
//! microphone and speakers.
//!
//! Run with: `cargo run --example watch`

use std::thread::sleep;
use std::time::Duration;

use audio_usage::UsageMonitor;

fn main() {
    let monitor = UsageMonitor::new();
    println!("backend: {}", monitor.backend_name());
    println!(
        "microphone authorization: {}",
        monitor.microphone_authorization().as_str()
    );

    loop {
        let mic = monitor.microphone_access_debounced();
        match mic.processes() {
            Some(processes) if processes.is_empty() => println!("mic: idle"),
            Some(processes) => println!("mic: {}", processes.join(", ")),
            None => {
                let (error, code, domain) = mic.failure_parts().unwrap();
                println!("mic query failed: {error} (code {code}, domain {domain})");
            }
        }

        if let Some(processes) = monitor.speaker_access().processes() {
            let names: Vec<_> = processes.iter().map(|p| p.process_name()).collect();
            if names.is_empty() {
                println!("speakers: idle");
            } else {
                println!("speakers: {}", names.join(", "));
            }
        }

        sleep(Duration::from_secs(1));
    }
}
