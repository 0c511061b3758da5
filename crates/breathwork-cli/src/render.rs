//! Terminal implementations of the engine's sink capabilities.

use std::time::Duration;

use breathwork_core::{Completion, CountdownDisplay, Rgb, VisualSink};

/// Visual sink rendering to stdout.
///
/// Animations and delays are simulated: the stated duration (divided by
/// the speed factor) elapses on a spawned timer before the completion
/// fires, so playback pacing matches the data file.
pub struct TerminalSink {
    speed: f64,
}

impl TerminalSink {
    /// `speed` scales durations: 2.0 plays twice as fast. Clamped to a
    /// small positive minimum.
    pub fn new(speed: f64) -> Self {
        Self {
            speed: speed.max(0.01),
        }
    }

    fn scaled(&self, over: Duration) -> Duration {
        over.div_f64(self.speed)
    }
}

impl VisualSink for TerminalSink {
    fn set_background(&self, color: Rgb) {
        // 24-bit ANSI swatch next to the hex value.
        println!(
            "\x1b[48;2;{};{};{}m      \x1b[0m  {}",
            color.r, color.g, color.b, color
        );
    }

    fn set_title(&self, title: &str) {
        if !title.is_empty() {
            println!("== {title} ==");
        }
    }

    fn animate_scale(&self, to: f64, over: Duration, done: Completion) {
        println!("   scale -> {to:.2} over {:.1}s", over.as_secs_f64());
        let over = self.scaled(over);
        tokio::spawn(async move {
            tokio::time::sleep(over).await;
            done.fire();
        });
    }

    fn delay(&self, over: Duration, done: Completion) {
        let over = self.scaled(over);
        tokio::spawn(async move {
            tokio::time::sleep(over).await;
            done.fire();
        });
    }
}

/// Countdown display rendering to stdout. Blank slots print nothing.
pub struct TerminalCountdown;

impl CountdownDisplay for TerminalCountdown {
    fn set_local_text(&self, text: &str) {
        if !text.is_empty() {
            println!("   [{text}]");
        }
    }

    fn set_global_text(&self, text: &str) {
        if !text.is_empty() {
            println!("   [{}]", text.replace('\n', " "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_clamped_to_positive() {
        // A zero factor would divide durations to infinity.
        let sink = TerminalSink::new(0.0);
        let scaled = sink.scaled(Duration::from_secs(1)).as_secs_f64();
        assert!((99.0..=101.0).contains(&scaled));
    }

    #[test]
    fn scaled_divides_by_speed() {
        let sink = TerminalSink::new(2.0);
        assert_eq!(sink.scaled(Duration::from_secs(4)), Duration::from_secs(2));
    }
}
