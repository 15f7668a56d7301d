//! Segclock - Multiplexed 7-Segment Wall Clock Firmware
//!
//! Main firmware binary for RP2040-based clock boards.
//!
//! The display/keypad tick and serial receive run as tasks on a
//! high-priority interrupt executor. The dispatch loop runs in thread mode,
//! never awaits and is the only place that mutates clock, edit and history
//! state.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

use segclock_core::config::TickConfig;
use segclock_core::dispatcher::Dispatcher;
use segclock_core::tick::TickHandler;
use segclock_hal::UartConfig;

use crate::board::Board;
use crate::shared::SHARED;

mod activity;
mod board;
mod shared;
mod tasks;

/// Executor standing in for the timer and serial interrupt handlers
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Segclock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let tick_config = TickConfig::default();
    if let Err(e) = tick_config.validate() {
        // Compile-time constant; only reachable after a bad edit
        defmt::panic!("Invalid tick configuration: {:?}", e);
    }

    let line = UartConfig::default();
    let board = Board::new(p, &line);
    info!("Board initialized, command line at {} baud", line.baudrate);

    let Board {
        tick,
        mut lcd,
        mut indicator,
        mut serial_tx,
        serial_rx,
    } = board;

    // LCD init and the first history render happen before any tick runs
    let mut dispatcher = Dispatcher::new(tick_config);
    dispatcher.start(&SHARED, &mut lcd);
    info!("LCD initialized");

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner
        .spawn(tasks::tick_task(TickHandler::new(tick_config), tick))
        .unwrap();
    spawner.spawn(tasks::serial_rx_task(serial_rx)).unwrap();

    info!("Tasks spawned, entering dispatch loop");

    loop {
        for activity in dispatcher.poll(&SHARED, &mut lcd, &mut serial_tx).iter() {
            if activity.toggles_indicator() {
                indicator.toggle();
            }
            activity::log(activity);
        }
    }
}
