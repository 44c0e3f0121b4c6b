//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `townboard_core` linkage.
//! - Run one seeded facade round-trip against an in-memory store.

use townboard_core::{BoardService, LatencyProfile, MemoryDocumentStore};

fn main() {
    println!("townboard_core ping={}", townboard_core::ping());
    println!("townboard_core version={}", townboard_core::core_version());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            std::process::exit(1);
        }
    };

    let service = BoardService::new(MemoryDocumentStore::new(), LatencyProfile::zero());
    match runtime.block_on(service.list_announcements()) {
        Ok(announcements) => {
            println!("seeded announcements={}", announcements.len());
            for announcement in announcements {
                println!("  [{}] {}", announcement.id, announcement.title);
            }
        }
        Err(err) => {
            eprintln!("failed to list announcements: {err}");
            std::process::exit(1);
        }
    }
}
