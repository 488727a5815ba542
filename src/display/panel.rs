//! Panel renderer.
//!
//! A WS2812-style string can only be rewritten as a whole, so the renderer
//! keeps the current frame of each panel and re-sends it in full. Nothing is
//! deferred: every `clear` / `draw` / `set_status` call is one emission.

use embedded_hal_async::delay::DelayNs;

use super::color::Rgb;
use super::segments::{lit_leds, Digit};
use super::{Frame, LedBus, Panel};
use crate::config::{PANEL_LEDS, STATUS_LED};
use crate::error::Error;

pub struct PanelRenderer<B> {
    bus: B,
    frames: [Frame; 2],
}

impl<B: LedBus> PanelRenderer<B> {
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            frames: [[Rgb::NO_COLOR; PANEL_LEDS]; 2],
        }
    }

    /// Switch off every digit LED of `panel`, whatever digit it showed.
    /// The status LED is left alone.
    pub async fn clear(&mut self, panel: Panel) -> Result<(), Error> {
        let frame = &mut self.frames[panel.index()];
        for led in lit_leds(Digit::EIGHT) {
            frame[led] = Rgb::NO_COLOR;
        }
        self.flush(panel).await
    }

    /// Clear `panel`, then light the segments of `digit` in `color`.
    ///
    /// Two emissions: if the second fails the panel is left blank,
    /// never showing a stale digit.
    pub async fn draw(&mut self, panel: Panel, digit: Digit, color: Rgb) -> Result<(), Error> {
        self.clear(panel).await?;
        let frame = &mut self.frames[panel.index()];
        for led in lit_leds(digit) {
            frame[led] = color;
        }
        self.flush(panel).await
    }

    /// Set the side-swap / golden-point indicator of `panel`.
    pub async fn set_status(&mut self, panel: Panel, color: Rgb) -> Result<(), Error> {
        self.frames[panel.index()][STATUS_LED] = color;
        self.flush(panel).await
    }

    /// Power-on lamp test: walk a red/green/blue triple across every LED of
    /// both strings, one position per step, and leave both panels dark.
    pub async fn chase(&mut self, delay: &mut impl DelayNs, step_ms: u32) -> Result<(), Error> {
        for led in 0..PANEL_LEDS {
            let lit = [
                (led, Rgb::RED),
                ((led + 1) % PANEL_LEDS, Rgb::GREEN),
                ((led + 2) % PANEL_LEDS, Rgb::BLUE),
            ];
            self.paint_all(&lit).await?;
            delay.delay_ms(step_ms).await;

            let dark = lit.map(|(pos, _)| (pos, Rgb::NO_COLOR));
            self.paint_all(&dark).await?;
        }
        Ok(())
    }

    /// Current frame of `panel`, as last emitted (or about to be).
    pub fn frame(&self, panel: Panel) -> &Frame {
        &self.frames[panel.index()]
    }

    #[cfg(test)]
    pub(crate) fn bus(&self) -> &B {
        &self.bus
    }

    async fn paint_all(&mut self, leds: &[(usize, Rgb)]) -> Result<(), Error> {
        for panel in Panel::ALL {
            let frame = &mut self.frames[panel.index()];
            for &(pos, color) in leds {
                frame[pos] = color;
            }
            self.flush(panel).await?;
        }
        Ok(())
    }

    async fn flush(&mut self, panel: Panel) -> Result<(), Error> {
        let frame = self.frames[panel.index()];
        self.bus.emit(panel, &frame).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{InstantDelay, RecordingBus};
    use embassy_futures::block_on;

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    fn digit_leds(frame: &Frame) -> &[Rgb] {
        &frame[..STATUS_LED]
    }

    #[test]
    fn draw_lights_only_the_digit_segments() {
        let mut renderer = PanelRenderer::new(RecordingBus::default());
        block_on(renderer.draw(Panel::Left, digit(7), Rgb::RED)).unwrap();

        let frame = renderer.frame(Panel::Left);
        let lit: Vec<usize> = (0..STATUS_LED).filter(|&i| !frame[i].is_off()).collect();
        let mut expected: Vec<usize> = lit_leds(digit(7)).collect();
        expected.sort_unstable();
        assert_eq!(lit, expected);
        assert!(lit.iter().all(|&i| frame[i] == Rgb::RED));
        assert!(renderer.frame(Panel::Right).iter().all(Rgb::is_off));
    }

    #[test]
    fn draw_clears_previous_digit_first() {
        let mut renderer = PanelRenderer::new(RecordingBus::default());
        block_on(async {
            renderer.draw(Panel::Right, digit(8), Rgb::BLUE).await?;
            renderer.draw(Panel::Right, digit(1), Rgb::ORANGE).await
        })
        .unwrap();

        let frame = renderer.frame(Panel::Right);
        assert_eq!(digit_leds(frame).iter().filter(|c| !c.is_off()).count(), 4);
        assert!(digit_leds(frame).iter().all(|&c| c != Rgb::BLUE));
    }

    #[test]
    fn draw_emits_clear_then_digit() {
        let mut renderer = PanelRenderer::new(RecordingBus::default());
        block_on(renderer.draw(Panel::Left, digit(3), Rgb::GREEN)).unwrap();

        let emissions = &renderer.bus.emissions;
        assert_eq!(emissions.len(), 2);
        assert!(emissions.iter().all(|(panel, _)| *panel == Panel::Left));
        assert!(emissions[0].1.iter().all(Rgb::is_off));
        assert_eq!(emissions[1].1, *renderer.frame(Panel::Left));
    }

    #[test]
    fn clear_after_any_draw_leaves_digit_dark() {
        for n in 0..=9 {
            for color in [Rgb::RED, Rgb::BLUE, Rgb::WHITE, Rgb::PURPLE] {
                let mut renderer = PanelRenderer::new(RecordingBus::default());
                block_on(async {
                    renderer.draw(Panel::Left, digit(n), color).await?;
                    renderer.clear(Panel::Left).await
                })
                .unwrap();
                let (_, last) = renderer.bus.emissions.last().unwrap();
                assert!(digit_leds(last).iter().all(Rgb::is_off), "digit {}", n);
            }
        }
    }

    #[test]
    fn status_led_survives_digit_redraws() {
        let mut renderer = PanelRenderer::new(RecordingBus::default());
        block_on(async {
            renderer.set_status(Panel::Right, Rgb::GREEN).await?;
            renderer.draw(Panel::Right, digit(5), Rgb::RED).await?;
            renderer.clear(Panel::Right).await
        })
        .unwrap();

        let frame = renderer.frame(Panel::Right);
        assert_eq!(frame[STATUS_LED], Rgb::GREEN);
        assert!(digit_leds(frame).iter().all(Rgb::is_off));
        assert!(renderer.frame(Panel::Left)[STATUS_LED].is_off());
    }

    #[test]
    fn failed_emission_is_surfaced() {
        // Clear goes out, the digit does not.
        let mut renderer = PanelRenderer::new(RecordingBus::failing_after(1));
        let result = block_on(renderer.draw(Panel::Left, digit(2), Rgb::RED));
        assert_eq!(result, Err(Error::LedEmit));
        assert_eq!(renderer.bus.emissions.len(), 1);
        assert!(renderer.bus.emissions[0].1.iter().all(Rgb::is_off));
    }

    #[test]
    fn chase_visits_every_led_and_ends_dark() {
        let mut renderer = PanelRenderer::new(RecordingBus::default());
        let mut delay = InstantDelay::default();
        block_on(renderer.chase(&mut delay, 100)).unwrap();

        assert_eq!(delay.total_ms, 100 * PANEL_LEDS as u64);
        for panel in Panel::ALL {
            assert!(renderer.frame(panel).iter().all(Rgb::is_off));
            for led in 0..PANEL_LEDS {
                assert!(renderer
                    .bus
                    .emissions
                    .iter()
                    .any(|(p, frame)| *p == panel && frame[led] == Rgb::RED));
            }
        }
    }
}
