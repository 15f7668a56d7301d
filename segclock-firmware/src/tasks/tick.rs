//! Display/keypad tick task
//!
//! Fires at the configured tick rate. Each tick drives one display position,
//! scans both keypads and counts towards the next second.

use defmt::*;
use embassy_time::{Duration, Instant, Timer, TICK_HZ};
use segclock_core::tick::TickHandler;

use crate::board::TickPorts;
use crate::shared::SHARED;

/// Tick task - one multiplexer step per timer period
#[embassy_executor::task]
pub async fn tick_task(mut handler: TickHandler, mut ports: TickPorts) {
    let rate = handler.config().ticks_per_second;
    trace!("Tick task started at {} Hz", rate);

    // Absolute deadlines: the timer resolution does not divide the tick rate
    let start = Instant::now();
    let mut n: u64 = 0;

    loop {
        n += 1;
        let offset = handler.config().tick_offset(n, TICK_HZ);
        Timer::at(start + Duration::from_ticks(offset)).await;
        handler.on_tick(&SHARED, &mut ports.display, &ports.key_line, &ports.matrix);
    }
}
