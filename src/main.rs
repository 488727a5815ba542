//! peteca-board firmware for the nRF52840.
//!
//! Boot: lamp test, fresh 0-0 match, then one arbiter task per button.
//! After that the board only changes when a button task holds the token.

#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use peteca_board::config::Timing;
use peteca_board::display::panel::PanelRenderer;
use peteca_board::feedback::CueSequencer;
use peteca_board::ws2812::Ws2812Panels;
use peteca_board::{ActionToken, Arbiter, Scoreboard, Side};

type Token = ActionToken<CriticalSectionRawMutex, Ws2812Panels, Output<'static>, Delay>;

static BOARD: StaticCell<Token> = StaticCell::new();

#[embassy_executor::task(pool_size = 2)]
async fn button_task(side: Side, pin: AnyPin, token: &'static Token) -> ! {
    let button = Input::new(pin, Pull::Up);
    let mut arbiter = Arbiter::new(side, button, token, Delay, Timing::default());
    arbiter.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("peteca-board starting");

    // Pin map: see config.rs
    let panels = unwrap!(Ws2812Panels::new(
        p.PWM0,
        p.P0_13.degrade(),
        p.PWM1,
        p.P0_14.degrade(),
    ));
    let cue_pin = Output::new(p.P0_15, Level::Low, OutputDrive::Standard);

    let token: &'static Token = BOARD.init(Mutex::new(Scoreboard::new(
        PanelRenderer::new(panels),
        CueSequencer::new(cue_pin),
        Delay,
    )));

    {
        let mut board = token.lock().await;
        if let Err(e) = board.self_test().await {
            error!("Lamp test failed: {}", e);
        }
        if let Err(e) = board.start_game().await {
            error!("Match start failed: {}", e);
        }
    }

    unwrap!(spawner.spawn(button_task(Side::A, p.P0_11.degrade(), token)));
    unwrap!(spawner.spawn(button_task(Side::B, p.P0_12.degrade(), token)));
}
