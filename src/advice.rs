//! Game Master advice
//!
//! Advice is fire-and-forget from the simulation's point of view. The desk
//! tracks one request at a time, substitutes a fixed fallback on failure and
//! clears the message after a fixed display time.

use thiserror::Error;

use crate::progression::rebirth_cost;
use crate::world::WORLDS;

/// Shown when the source fails
pub const FALLBACK_ADVICE: &str = "The Game Master is sleeping (Network Error). Just click faster!";
/// Shown when a source returns nothing
pub const EMPTY_ADVICE: &str = "Keep running fast!";
/// Message lifetime in seconds
pub const ADVICE_DISPLAY_SECS: f32 = 10.0;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("advice source unavailable: {0}")]
    Unavailable(String),
    #[error("advice source not configured")]
    NotConfigured,
}

/// What the advice source is told about the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdviceQuery {
    pub speed: f64,
    pub rebirths: u32,
    pub world: u32,
}

/// Anything that turns a query into a short tip
pub trait AdviceSource {
    fn advise(&self, query: &AdviceQuery) -> Result<String, AdviceError>;
}

/// Local source built from the world and rebirth tables
#[derive(Debug, Clone, Copy, Default)]
pub struct GuideTips;

impl AdviceSource for GuideTips {
    fn advise(&self, query: &AdviceQuery) -> Result<String, AdviceError> {
        let next_world = WORLDS
            .iter()
            .filter(|w| w.requirement > query.speed)
            .min_by(|a, b| a.requirement.total_cmp(&b.requirement));
        let cost = rebirth_cost(query.rebirths);

        let tip = if query.speed >= cost {
            format!(
                "You have {:.0} speed and rebirth costs {:.0}. Rebirth now to multiply every click!",
                query.speed, cost
            )
        } else if let Some(world) = next_world {
            format!(
                "Only {:.0} more speed until {} opens up. Keep running!",
                world.requirement - query.speed,
                world.name
            )
        } else {
            format!(
                "Every world is open to you. Save up {:.0} speed for your next rebirth!",
                cost
            )
        };
        Ok(tip)
    }
}

/// Client-side state for advice requests
#[derive(Debug, Clone, Default)]
pub struct AdviceDesk {
    loading: bool,
    message: Option<String>,
    remaining: f32,
}

impl AdviceDesk {
    /// Start a request. `None` while one is already in flight.
    pub fn begin(&mut self, query: AdviceQuery) -> Option<AdviceQuery> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(query)
    }

    /// Finish the in-flight request; failures show the fallback text
    pub fn finish(&mut self, result: Result<String, AdviceError>) {
        let text = match result {
            Ok(text) if text.trim().is_empty() => EMPTY_ADVICE.to_string(),
            Ok(text) => text,
            Err(e) => {
                log::warn!("Advice request failed: {}", e);
                FALLBACK_ADVICE.to_string()
            }
        };
        self.loading = false;
        self.message = Some(text);
        self.remaining = ADVICE_DISPLAY_SECS;
    }

    /// Auto-dismiss countdown
    pub fn tick(&mut self, dt: f32) {
        if self.message.is_none() {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.message = None;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
